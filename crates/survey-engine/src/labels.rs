//! Label-holder detection for structurally complex question types.
//!
//! Ranking, matrix, and rating questions cannot carry their own display
//! label in the flat encoding; the editor piggy-backs it onto a synthetic
//! row placed immediately after the main row. Exactly three naming/type
//! conventions exist; no other position or pattern is ever consulted.

use survey_model::{Row, RowType};

/// True when `candidate` is the synthetic label holder for `main`.
///
/// | Holder name            | Holder type | Represents |
/// |------------------------|-------------|------------|
/// | `<main>_label`         | note        | ranking    |
/// | `<main>_note`          | note        | matrix     |
/// | `<main>_header`        | select_one  | rating     |
pub fn is_label_holder(main: &Row, candidate: &Row) -> bool {
    let main_name = main.identity();
    let holder_name = candidate.identity();

    match candidate.row_type {
        RowType::Note => {
            holder_name == format!("{main_name}_label")
                || holder_name == format!("{main_name}_note")
        }
        RowType::SelectOne => holder_name == format!("{main_name}_header"),
        _ => false,
    }
}

/// Resolve the display label for the row named `row_name`.
///
/// The row's own label wins; otherwise only the immediately following row
/// is inspected against the holder conventions. `None` when the row is
/// missing or nothing resolves.
pub fn resolve_label(row_name: &str, rows: &[Row], translation_index: usize) -> Option<String> {
    let index = rows.iter().position(|row| row.identity() == row_name)?;
    let row = &rows[index];

    if let Some(label) = row.label.as_ref().and_then(|l| l.get(translation_index)) {
        return Some(label.to_string());
    }

    let candidate = rows.get(index + 1)?;
    if is_label_holder(row, candidate) {
        return candidate
            .label
            .as_ref()
            .and_then(|l| l.get(translation_index))
            .map(str::to_string);
    }
    None
}
