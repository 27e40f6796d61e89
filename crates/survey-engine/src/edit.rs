//! Gated document mutations.
//!
//! Every structural edit consults the locking policy before touching the
//! document; a refused edit returns [`EngineError::Locked`] and leaves the
//! document untouched. Callers must re-resolve paths after any edit that
//! changes the row list.

use survey_model::{Document, Restriction, Row, RowType};

use crate::error::{EngineError, Result};
use crate::locking;

/// Insert a row at `at` (document end when `None`).
///
/// Gated by `question_add`, or `group_add` for begin markers. Inserting a
/// begin marker also inserts its matching end marker directly after it.
pub fn insert_row(doc: &mut Document, row: Row, at: Option<usize>) -> Result<()> {
    let restriction = if row.row_type.is_group_begin() {
        Restriction::GroupAdd
    } else {
        Restriction::QuestionAdd
    };
    refuse_if_locked(doc, restriction)?;

    let index = at.unwrap_or(doc.rows.len()).min(doc.rows.len());
    let end_marker = Row::end_marker_for(&row);
    doc.rows.insert(index, row);
    if let Some(end) = end_marker {
        doc.rows.insert(index + 1, end);
    }
    Ok(())
}

/// Remove the row with the given identity, returning the removed rows.
///
/// Removing a group begin marker removes its whole `[begin, end]` range.
/// Gated per row by `question_delete` or `group_delete`.
pub fn remove_row(doc: &mut Document, identity: &str) -> Result<Vec<Row>> {
    let start = doc
        .row_index(identity)
        .ok_or_else(|| EngineError::RowNotFound(identity.to_string()))?;
    let row = &doc.rows[start];

    let restriction = if row.row_type.is_group_begin() {
        Restriction::GroupDelete
    } else {
        Restriction::QuestionDelete
    };
    if locking::has_restriction(doc, Some(row), restriction)
        || locking::has_restriction(doc, None, restriction)
    {
        return Err(EngineError::Locked { restriction });
    }

    let end = if doc.rows[start].row_type.is_group_begin() {
        let end_identity = format!("/{identity}");
        doc.row_index(&end_identity).unwrap_or(start)
    } else {
        start
    };
    Ok(doc.rows.drain(start..=end).collect())
}

/// Set the form-wide appearance style. Gated by `form_style`.
pub fn set_style(doc: &mut Document, style: Option<String>) -> Result<()> {
    refuse_if_locked(doc, Restriction::FormStyle)?;
    doc.settings.style = style;
    Ok(())
}

/// Enable or disable an auto-populated meta row. Gated by `form_meta_edit`.
///
/// Meta rows live at the top of the document, before any question.
pub fn set_meta_row_enabled(doc: &mut Document, meta: RowType, enabled: bool) -> Result<bool> {
    debug_assert!(meta.is_meta());
    refuse_if_locked(doc, Restriction::FormMetaEdit)?;

    let existing = doc.rows.iter().position(|row| row.row_type == meta);
    match (existing, enabled) {
        (Some(_), true) | (None, false) => Ok(false),
        (Some(index), false) => {
            doc.rows.remove(index);
            Ok(true)
        }
        (None, true) => {
            let name = meta.as_str().replace('-', "_");
            let key = survey_model::RowKey::derived(&format!("meta\u{1f}{name}"));
            let insert_at = doc
                .rows
                .iter()
                .position(|row| !row.row_type.is_meta())
                .unwrap_or(doc.rows.len());
            doc.rows.insert(insert_at, Row::new(key, meta).with_name(name));
            Ok(true)
        }
    }
}

/// Set the appearance of the document (`None` identity) or of one row.
///
/// Gated by `form_appearance` for the document, `question_settings_edit`
/// for a row.
pub fn set_appearance(
    doc: &mut Document,
    identity: Option<&str>,
    appearance: Option<String>,
) -> Result<()> {
    match identity {
        None => {
            refuse_if_locked(doc, Restriction::FormAppearance)?;
            doc.settings.appearance = appearance;
            Ok(())
        }
        Some(identity) => {
            let index = doc
                .row_index(identity)
                .ok_or_else(|| EngineError::RowNotFound(identity.to_string()))?;
            let restriction = Restriction::QuestionSettingsEdit;
            if locking::has_restriction(doc, Some(&doc.rows[index]), restriction) {
                return Err(EngineError::Locked { restriction });
            }
            doc.rows[index].appearance = appearance;
            Ok(())
        }
    }
}

/// Document-level gate shared by every structural edit, the cascade
/// importer's splice included.
pub(crate) fn refuse_if_locked(doc: &Document, restriction: Restriction) -> Result<()> {
    if locking::has_restriction(doc, None, restriction) {
        return Err(EngineError::Locked { restriction });
    }
    Ok(())
}
