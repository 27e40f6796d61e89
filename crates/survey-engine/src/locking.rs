//! Locking policy resolution.
//!
//! Read-only queries; mutation entry points consult these before touching a
//! document. Profile resolution order: the document-wide lock flag implies
//! one profile for everything; otherwise a row uses its own profile
//! reference; otherwise it is unlocked. A profile reference that does not
//! resolve in `doc.locking_profiles` deactivates every restriction
//! (fail-open).

use survey_model::{Document, GLOBAL_LOCK_PROFILE, Restriction, Row};

/// True when any locking is configured anywhere on the document.
pub fn has_any_locking(doc: &Document) -> bool {
    doc.global_lock_applied
        || doc.settings.locking_profile.is_some()
        || doc.rows.iter().any(|row| row.locking_profile.is_some())
}

/// True when the document-wide lock flag is applied.
pub fn is_fully_locked(doc: &Document) -> bool {
    doc.global_lock_applied
}

/// Whether `restriction` is active for `row`, or for the document itself
/// when `row` is `None`.
pub fn has_restriction(doc: &Document, row: Option<&Row>, restriction: Restriction) -> bool {
    let profile_name = if doc.global_lock_applied {
        Some(GLOBAL_LOCK_PROFILE)
    } else {
        match row {
            Some(row) => row.locking_profile.as_deref(),
            None => doc.settings.locking_profile.as_deref(),
        }
    };

    let Some(name) = profile_name else {
        return false;
    };
    match doc.locking_profile(name) {
        Some(profile) => profile.has(restriction),
        None => {
            tracing::debug!(profile = name, "locking profile not defined; treating as unlocked");
            false
        }
    }
}
