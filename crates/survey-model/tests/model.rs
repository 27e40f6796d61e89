//! Tests for survey-model types.

use survey_model::{
    Choice, ChoiceKey, Document, DocumentSettings, LabelText, ListName, LockingProfile,
    Restriction, Row, RowKey, RowType,
};

#[test]
fn row_serde_round_trip() {
    let row = Row::new(RowKey::new("k1").unwrap(), RowType::SelectOne)
        .with_name("city")
        .with_label("City")
        .with_list(ListName::new("cities").unwrap())
        .with_choice_filter("country=${country}");
    let json = serde_json::to_string(&row).expect("serialize row");
    let round: Row = serde_json::from_str(&json).expect("deserialize row");
    assert_eq!(round, row);
}

#[test]
fn row_type_serializes_as_wire_name() {
    let row = Row::new(RowKey::new("k1").unwrap(), RowType::SelectMany);
    let json = serde_json::to_value(&row).expect("serialize row");
    assert_eq!(json["type"], "select_multiple");
    assert_eq!(json["key"], "k1");
    assert!(json.get("name").is_none());
}

#[test]
fn unknown_row_type_is_rejected() {
    let result: Result<Row, _> =
        serde_json::from_str(r#"{"key": "k1", "type": "hologram"}"#);
    assert!(result.is_err());
}

#[test]
fn document_round_trip_with_locks_and_choices() {
    let doc = Document {
        rows: vec![
            Row::new(RowKey::new("k1").unwrap(), RowType::SelectOne)
                .with_name("city")
                .with_list(ListName::new("cities").unwrap())
                .with_locking_profile("frozen"),
        ],
        choices: vec![Choice::new(
            ChoiceKey::new("c1").unwrap(),
            ListName::new("cities").unwrap(),
            "paris",
            LabelText::Translated(vec![Some("Paris".into()), None]),
        )],
        settings: DocumentSettings {
            title: Some("Demo form".into()),
            translations: vec![Some("English (en)".into()), Some("French (fr)".into())],
            ..Default::default()
        },
        locking_profiles: vec![
            LockingProfile::new("frozen")
                .with_restrictions([Restriction::QuestionDelete, Restriction::ChoiceAdd]),
        ],
        global_lock_applied: false,
        name: None,
    };
    let json = serde_json::to_string(&doc).expect("serialize document");
    let round: Document = serde_json::from_str(&json).expect("deserialize document");
    assert_eq!(round, doc);
}

#[test]
fn restriction_serializes_as_wire_name() {
    let json = serde_json::to_string(&Restriction::QuestionSkipLogicEdit).unwrap();
    assert_eq!(json, "\"question_skip_logic_edit\"");
    let round: Restriction = serde_json::from_str(&json).unwrap();
    assert_eq!(round, Restriction::QuestionSkipLogicEdit);
}

#[test]
fn minimal_document_deserializes_with_defaults() {
    let doc: Document = serde_json::from_str("{}").expect("deserialize empty document");
    assert!(doc.rows.is_empty());
    assert!(doc.choices.is_empty());
    assert!(!doc.global_lock_applied);
    assert_eq!(doc.translation_count(), 0);
}
