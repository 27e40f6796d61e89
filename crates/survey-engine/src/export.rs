//! Export column ordering for the submission-data collaborator.
//!
//! The export layer decides which submission columns belong to which
//! question by path, and feature pipelines (transcripts, translations)
//! contribute synthetic columns that must sit immediately after their
//! source question's column. The match is best-effort: a derived column
//! whose source question has no resolved path is dropped.

use crate::paths::FlatPathTable;

/// A feature-derived synthetic column anchored to a source question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedColumn {
    /// Identity of the question the column derives from.
    pub source: String,
    /// Full column name as the feature pipeline emits it.
    pub name: String,
}

/// Order export columns: each resolved path in document order, with every
/// derived column inserted directly after its source question's path.
pub fn ordered_columns(table: &FlatPathTable, derived: &[DerivedColumn]) -> Vec<String> {
    let mut columns = Vec::with_capacity(table.len() + derived.len());
    for entry in table {
        columns.push(entry.path.clone());
        for column in derived.iter().filter(|column| column.source == entry.identity) {
            columns.push(column.name.clone());
        }
    }
    for column in derived {
        if table.get(&column.source).is_none() {
            tracing::debug!(
                source = column.source,
                column = column.name,
                "derived column has no matching question path; dropped"
            );
        }
    }
    columns
}
