//! Path resolution over the flat row encoding.
//!
//! The flat list encodes a tree: group begin/end markers open and close
//! nesting levels, and a question's full path is the `/`-joined chain of
//! enclosing group identities plus its own. Resolution is a single forward
//! walk with an explicit stack; nothing is cached, so recomputing after any
//! row mutation is always safe and idempotent.

use survey_model::Row;

use crate::labels;

/// Options controlling which rows receive paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathOptions {
    /// Record a path for each group begin marker as well.
    pub include_groups: bool,
    /// Treat auto-populated meta rows as question-like.
    pub include_meta: bool,
}

/// One resolved row address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub identity: String,
    pub path: String,
}

/// Ordered table of row identity to full path, in document order.
///
/// Order matters: the export collaborator inserts derived columns relative
/// to their source question's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatPathTable {
    entries: Vec<PathEntry>,
}

impl FlatPathTable {
    /// Full path for a row identity, if one was resolved.
    pub fn get(&self, identity: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.identity == identity)
            .map(|entry| entry.path.as_str())
    }

    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, identity: &str, path: String) {
        self.entries.push(PathEntry {
            identity: identity.to_string(),
            path,
        });
    }
}

impl<'a> IntoIterator for &'a FlatPathTable {
    type Item = &'a PathEntry;
    type IntoIter = std::slice::Iter<'a, PathEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Resolve full paths for every question-like row.
///
/// Walks the rows in document order with a stack of open group identities.
/// An end marker with no open group is tolerated and skipped; the document
/// stays loadable, the inconsistency is logged.
pub fn resolve_paths(rows: &[Row], options: PathOptions) -> FlatPathTable {
    let mut table = FlatPathTable::default();
    let mut stack: Vec<String> = Vec::new();

    for row in rows {
        let ty = row.row_type;
        if ty.is_group_begin() {
            stack.push(row.identity().to_string());
            if options.include_groups {
                table.push(row.identity(), stack.join("/"));
            }
        } else if ty.is_group_end() {
            if stack.pop().is_none() {
                tracing::warn!(
                    row_key = %row.key,
                    row_type = %ty,
                    "unmatched group end marker; skipping"
                );
            }
        } else if ty.is_question_like(options.include_meta) {
            let identity = row.identity();
            let path = if stack.is_empty() {
                identity.to_string()
            } else {
                format!("{}/{}", stack.join("/"), identity)
            };
            table.push(identity, path);
        }
        // Remaining row kinds carry no address.
    }

    table
}

/// One question flattened out of the tree with display context attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedQuestion {
    pub path: String,
    /// Resolved label, with the adjacent label-holder fallback applied.
    pub label: Option<String>,
    /// Labels of the enclosing groups, outermost first.
    pub group_labels: Vec<String>,
    /// True when any ancestor group is a repeat.
    pub in_repeat: bool,
}

/// Flatten every question with its path, label, and group context.
///
/// Repeats nest like groups but are counted independently, so a question
/// inside a plain sub-group of a repeat is still flagged `in_repeat`.
pub fn flatten_questions(
    rows: &[Row],
    translation_index: usize,
    include_meta: bool,
) -> Vec<FlattenedQuestion> {
    let mut flattened = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut group_labels: Vec<String> = Vec::new();
    let mut repeat_depth: usize = 0;

    for row in rows {
        let ty = row.row_type;
        if ty.is_group_begin() {
            let identity = row.identity();
            stack.push(identity.to_string());
            let label = row
                .label
                .as_ref()
                .and_then(|label| label.get(translation_index))
                .unwrap_or(identity);
            group_labels.push(label.to_string());
            if ty.is_repeat_begin() {
                repeat_depth += 1;
            }
        } else if ty.is_group_end() {
            if stack.pop().is_none() {
                tracing::warn!(row_key = %row.key, "unmatched group end marker; skipping");
            } else {
                group_labels.pop();
                if ty.is_repeat_end() {
                    repeat_depth = repeat_depth.saturating_sub(1);
                }
            }
        } else if ty.is_question_like(include_meta) {
            let identity = row.identity();
            let path = if stack.is_empty() {
                identity.to_string()
            } else {
                format!("{}/{}", stack.join("/"), identity)
            };
            flattened.push(FlattenedQuestion {
                path,
                label: labels::resolve_label(identity, rows, translation_index),
                group_labels: group_labels.clone(),
                in_repeat: repeat_depth > 0,
            });
        }
    }

    flattened
}
