//! Locking policy resolution tests.

use survey_engine::locking::{has_any_locking, has_restriction, is_fully_locked};
use survey_model::{
    Document, DocumentSettings, GLOBAL_LOCK_PROFILE, LockingProfile, Restriction, Row, RowKey,
    RowType,
};

fn question(key: &str, name: &str) -> Row {
    Row::new(RowKey::new(key).unwrap(), RowType::Text).with_name(name)
}

fn profile(name: &str, restrictions: &[Restriction]) -> LockingProfile {
    LockingProfile::new(name).with_restrictions(restrictions.iter().copied())
}

#[test]
fn unlocked_document_has_no_locking() {
    let doc = Document {
        rows: vec![question("k1", "q1")],
        ..Default::default()
    };
    assert!(!has_any_locking(&doc));
    assert!(!is_fully_locked(&doc));
    assert!(!has_restriction(&doc, None, Restriction::QuestionAdd));
}

#[test]
fn row_profile_resolves_per_row() {
    let doc = Document {
        rows: vec![
            question("k1", "q1").with_locking_profile("frozen"),
            question("k2", "q2"),
        ],
        locking_profiles: vec![profile("frozen", &[Restriction::QuestionDelete])],
        ..Default::default()
    };
    assert!(has_any_locking(&doc));
    assert!(has_restriction(&doc, Some(&doc.rows[0]), Restriction::QuestionDelete));
    assert!(!has_restriction(&doc, Some(&doc.rows[0]), Restriction::QuestionLabelEdit));
    assert!(!has_restriction(&doc, Some(&doc.rows[1]), Restriction::QuestionDelete));
}

#[test]
fn document_profile_answers_row_none() {
    let doc = Document {
        settings: DocumentSettings {
            locking_profile: Some("doc_lock".to_string()),
            ..Default::default()
        },
        locking_profiles: vec![profile("doc_lock", &[Restriction::FormStyle])],
        ..Default::default()
    };
    assert!(has_restriction(&doc, None, Restriction::FormStyle));
    assert!(!has_restriction(&doc, None, Restriction::FormMetaEdit));
}

#[test]
fn unresolved_profile_fails_open() {
    let doc = Document {
        rows: vec![question("k1", "q1").with_locking_profile("ghost")],
        settings: DocumentSettings {
            locking_profile: Some("ghost".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    for restriction in Restriction::all() {
        assert!(!has_restriction(&doc, None, *restriction));
        assert!(!has_restriction(&doc, Some(&doc.rows[0]), *restriction));
    }
}

#[test]
fn global_lock_overrides_row_profiles() {
    let doc = Document {
        rows: vec![question("k1", "q1").with_locking_profile("loose")],
        locking_profiles: vec![
            profile("loose", &[]),
            LockingProfile::fully_locked(GLOBAL_LOCK_PROFILE),
        ],
        global_lock_applied: true,
        ..Default::default()
    };
    assert!(is_fully_locked(&doc));
    // The row's own (empty) profile is ignored.
    assert!(has_restriction(&doc, Some(&doc.rows[0]), Restriction::QuestionDelete));
    assert!(has_restriction(&doc, None, Restriction::FormReplace));
}

#[test]
fn global_lock_without_defined_profile_fails_open() {
    let doc = Document {
        global_lock_applied: true,
        ..Default::default()
    };
    assert!(is_fully_locked(&doc));
    assert!(!has_restriction(&doc, None, Restriction::QuestionAdd));
}
