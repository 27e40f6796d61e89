//! Cascading-select import from pasted tabular text.
//!
//! The paste target feeds every keystroke into [`CascadeImporter::update_input`];
//! the importer re-parses from scratch and lands in one of three states:
//! nothing entered yet, an invalid paste with a user-visible message, or a
//! ready parse exposing the row count for confirmation. Confirming splices
//! the synthesized rows and choices into the host document; resolved paths
//! must be recomputed afterwards.
//!
//! Input format: one header line naming the levels (outermost first), then
//! one line per leaf path through the hierarchy. Tab-delimited preferred,
//! comma accepted.

use std::collections::BTreeSet;

use survey_model::{Choice, ChoiceKey, Document, ListName, Restriction, Row, RowKey, RowType};

use crate::edit;
use crate::error::{EngineError, Result};

/// Inline message shown for a paste that parses to nothing.
pub const INVALID_PASTE_MESSAGE: &str = "paste your formatted table";

/// Importer state, re-evaluated on every input change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CascadeState {
    /// No text entered.
    #[default]
    Idle,
    /// Parse produced zero choices or zero rows; recoverable.
    Invalid { message: String },
    /// Parse succeeded; awaiting confirmation.
    Ready { row_count: usize },
}

/// The rows and choices synthesized from one successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeFragment {
    pub rows: Vec<Row>,
    pub choices: Vec<Choice>,
}

/// Parses pasted tabular text into a chain of filtered select-one rows.
#[derive(Debug, Default)]
pub struct CascadeImporter {
    state: CascadeState,
    fragment: Option<CascadeFragment>,
}

impl CascadeImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CascadeState {
        &self.state
    }

    /// The synthesized fragment, when the importer is ready.
    pub fn fragment(&self) -> Option<&CascadeFragment> {
        self.fragment.as_ref()
    }

    /// Re-parse the paste target's current text.
    ///
    /// Called on every keystroke; any debounce is the caller's concern.
    pub fn update_input(&mut self, text: &str) {
        let fragment = parse_cascade(text);
        if fragment.choices.is_empty() || fragment.rows.is_empty() {
            self.state = CascadeState::Invalid {
                message: INVALID_PASTE_MESSAGE.to_string(),
            };
            self.fragment = None;
            return;
        }
        self.state = CascadeState::Ready {
            row_count: fragment.rows.len(),
        };
        self.fragment = Some(fragment);
    }

    /// Discard any pending parse without splicing.
    pub fn cancel(&mut self) {
        self.state = CascadeState::Idle;
        self.fragment = None;
    }

    /// Splice the synthesized rows and choices into the host document.
    ///
    /// Rows land immediately after the row identified by `after`, or at the
    /// end of the document when `after` is `None` or unknown. The splice is
    /// a question insertion and is refused when the document locks
    /// `question_add`. On success the importer returns to idle.
    pub fn confirm(&mut self, doc: &mut Document, after: Option<&str>) -> Result<usize> {
        let Some(fragment) = self.fragment.take() else {
            return Err(EngineError::CascadeNotReady);
        };
        if let Err(refused) = edit::refuse_if_locked(doc, Restriction::QuestionAdd) {
            self.fragment = Some(fragment);
            return Err(refused);
        }

        let insert_at = after
            .and_then(|identity| doc.row_index(identity))
            .map_or(doc.rows.len(), |index| index + 1);
        let count = fragment.rows.len();
        doc.rows.splice(insert_at..insert_at, fragment.rows);
        doc.choices.extend(fragment.choices);

        tracing::info!(rows = count, at = insert_at, "cascade fragment spliced");
        self.state = CascadeState::Idle;
        Ok(count)
    }
}

/// Parse delimited text into per-level choice lists and select-one rows.
///
/// The outermost level becomes a plain select-one; each deeper level is
/// filtered by the previous level's answer through `choice_filter` and a
/// matching filter column on its choices.
pub fn parse_cascade(text: &str) -> CascadeFragment {
    let delimiter = if text.lines().next().is_some_and(|line| line.contains('\t')) {
        b'\t'
    } else {
        b','
    };
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = reader.records().filter_map(|record| match record {
        Ok(record) => Some(record),
        Err(error) => {
            tracing::debug!(%error, "skipping unparseable cascade line");
            None
        }
    });

    let Some(header) = records.next() else {
        return CascadeFragment {
            rows: Vec::new(),
            choices: Vec::new(),
        };
    };
    let levels: Vec<(String, String)> = header
        .iter()
        .take_while(|field| !field.is_empty())
        .map(|field| (field.to_string(), slug(field)))
        .collect();

    let mut choices: Vec<Choice> = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for record in records {
        let mut chain: Vec<String> = Vec::new();
        for (index, (_, level_slug)) in levels.iter().enumerate() {
            let Some(value) = record.get(index).map(str::trim).filter(|v| !v.is_empty()) else {
                break;
            };
            let value_slug = slug(value);
            chain.push(value_slug.clone());
            let dedupe_key = format!("{level_slug}\u{1f}{}", chain.join("\u{1f}"));
            if !seen.insert(dedupe_key.clone()) {
                continue;
            }
            let Ok(list_name) = ListName::new(level_slug.clone()) else {
                continue;
            };
            let mut choice = Choice::new(
                ChoiceKey::derived(&dedupe_key),
                list_name,
                value_slug,
                value,
            );
            if index > 0 {
                let (_, parent_slug) = &levels[index - 1];
                choice
                    .filters
                    .insert(parent_slug.clone(), chain[index - 1].clone());
            }
            choices.push(choice);
        }
    }

    if choices.is_empty() {
        return CascadeFragment {
            rows: Vec::new(),
            choices: Vec::new(),
        };
    }

    let rows: Vec<Row> = levels
        .iter()
        .enumerate()
        .filter_map(|(index, (label, level_slug))| {
            let list_name = ListName::new(level_slug.clone()).ok()?;
            let mut row = Row::new(
                RowKey::derived(&format!("cascade\u{1f}{level_slug}")),
                RowType::SelectOne,
            )
            .with_name(level_slug.clone())
            .with_label(label.as_str())
            .with_list(list_name);
            if index > 0 {
                let (_, parent_slug) = &levels[index - 1];
                row = row.with_choice_filter(format!("{parent_slug}=${{{parent_slug}}}"));
            }
            Some(row)
        })
        .collect();

    CascadeFragment { rows, choices }
}

/// Lowercase, alphanumerics kept, everything else collapsed to `_`.
fn slug(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last_was_sep = true;
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
