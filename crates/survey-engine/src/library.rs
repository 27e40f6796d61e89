//! Library extraction: carve a question or group subtree into a new,
//! self-contained document suitable for storage as a reusable asset.
//!
//! Extraction never mutates its source. Before slicing, every row and
//! choice label is expanded to one slot per declared translation; the live
//! editor nulls out slots that never diverged from the default language,
//! and an extracted asset must not carry that incompleteness with it.

use std::collections::BTreeSet;

use survey_model::{Choice, Document, ListName, Row};

/// Rows with labels expanded to the document's full translation set.
///
/// No-op for single-language documents (bare-string labels stay bare).
pub fn unnullify_translations(doc: &Document) -> Vec<Row> {
    let translation_count = doc.translation_count();
    if translation_count <= 1 {
        return doc.rows.clone();
    }
    doc.rows
        .iter()
        .map(|row| {
            let mut row = row.clone();
            if let Some(label) = row.label.take() {
                row.label = Some(label.unnullified(translation_count));
            }
            row
        })
        .collect()
}

/// Choices with labels expanded to the document's full translation set.
///
/// The choice-list counterpart of [`unnullify_translations`]; bare-string
/// labels stay bare in single-language documents.
pub fn unnullify_choices(doc: &Document) -> Vec<Choice> {
    let translation_count = doc.translation_count();
    if translation_count <= 1 {
        return doc.choices.clone();
    }
    doc.choices
        .iter()
        .map(|choice| {
            let mut choice = choice.clone();
            choice.label = choice.label.unnullified(translation_count);
            choice
        })
        .collect()
}

/// Extract a single question into a standalone document.
///
/// Select-type questions take their referenced choice list along; every
/// unrelated list is pruned. `None` when no row has the given identity.
pub fn extract_question(doc: &Document, identity: &str) -> Option<Document> {
    let rows = unnullify_translations(doc);
    let row = rows.iter().find(|row| row.identity() == identity)?.clone();

    let choices: Vec<Choice> = match (&row.list_reference, row.row_type.is_select()) {
        (Some(list), true) => unnullify_choices(doc)
            .into_iter()
            .filter(|choice| &choice.list_name == list)
            .collect(),
        _ => Vec::new(),
    };

    Some(Document {
        rows: vec![row],
        choices,
        settings: doc.settings.clone(),
        ..Default::default()
    })
}

/// Extract a whole group subtree into a standalone document.
///
/// The range runs from the row whose identity is the group's, through the
/// row whose identity is `/` plus the group's (the end-marker convention),
/// inclusive. Choice lists referenced by any select row inside the range
/// are kept; all others are pruned. `None` when either endpoint is missing
/// or they are out of order.
pub fn extract_group(doc: &Document, identity: &str) -> Option<Document> {
    let rows = unnullify_translations(doc);
    let start = rows.iter().position(|row| row.identity() == identity)?;
    let end_identity = format!("/{identity}");
    let end = rows.iter().position(|row| row.identity() == end_identity)?;
    if end < start {
        tracing::warn!(group = identity, "group end marker precedes begin; not extracting");
        return None;
    }

    let slice: Vec<Row> = rows[start..=end].to_vec();
    let lists: BTreeSet<&ListName> = slice
        .iter()
        .filter(|row| row.row_type.is_select())
        .filter_map(|row| row.list_reference.as_ref())
        .collect();
    let choices: Vec<Choice> = unnullify_choices(doc)
        .into_iter()
        .filter(|choice| lists.contains(&choice.list_name))
        .collect();

    let group_row = &slice[0];
    let name = group_row
        .label
        .as_ref()
        .and_then(|label| label.get(0))
        .map(str::to_string)
        .or_else(|| group_row.name.clone())
        .unwrap_or_else(|| identity.to_string());

    Some(Document {
        rows: slice,
        choices,
        settings: doc.settings.clone(),
        name: Some(name),
        ..Default::default()
    })
}
