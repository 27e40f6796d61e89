//! Path resolution tests.

use proptest::prelude::*;
use survey_engine::paths::{PathOptions, flatten_questions, resolve_paths};
use survey_model::{LabelText, Row, RowKey, RowType};

fn row(key: &str, ty: RowType, name: &str) -> Row {
    Row::new(RowKey::new(key).unwrap(), ty).with_name(name)
}

fn group(name: &str, inner: Vec<Row>) -> Vec<Row> {
    let begin = row(&format!("k_{name}"), RowType::BeginGroup, name);
    let end = Row::end_marker_for(&begin).unwrap();
    let mut rows = vec![begin];
    rows.extend(inner);
    rows.push(end);
    rows
}

#[test]
fn nested_group_paths() {
    let mut rows = group("g1", vec![row("k1", RowType::Text, "q1")]);
    rows.push(row("k2", RowType::Text, "q2"));

    let table = resolve_paths(&rows, PathOptions::default());
    assert_eq!(table.get("q1"), Some("g1/q1"));
    assert_eq!(table.get("q2"), Some("q2"));
    assert_eq!(table.len(), 2);
}

#[test]
fn include_groups_records_group_paths() {
    let outer = group("outer", group("inner", vec![row("k1", RowType::Text, "q1")]));
    let table = resolve_paths(
        &outer,
        PathOptions {
            include_groups: true,
            include_meta: false,
        },
    );
    assert_eq!(table.get("outer"), Some("outer"));
    assert_eq!(table.get("inner"), Some("outer/inner"));
    assert_eq!(table.get("q1"), Some("outer/inner/q1"));
}

#[test]
fn meta_rows_only_with_opt_in() {
    let rows = vec![
        row("k0", RowType::Start, "start"),
        row("k1", RowType::Text, "q1"),
    ];
    let without = resolve_paths(&rows, PathOptions::default());
    assert!(without.get("start").is_none());

    let with = resolve_paths(
        &rows,
        PathOptions {
            include_groups: false,
            include_meta: true,
        },
    );
    assert_eq!(with.get("start"), Some("start"));
}

#[test]
fn pseudo_rows_address_like_questions() {
    let rows = group(
        "scores",
        vec![
            row("k1", RowType::Score, "sc"),
            row("k2", RowType::ScoreRow, "sc_row1"),
        ],
    );
    let table = resolve_paths(&rows, PathOptions::default());
    assert_eq!(table.get("sc_row1"), Some("scores/sc_row1"));
}

#[test]
fn unmatched_end_marker_is_tolerated() {
    let rows = vec![
        row("/k_ghost", RowType::EndGroup, "/ghost"),
        row("k1", RowType::Text, "q1"),
    ];
    let table = resolve_paths(&rows, PathOptions::default());
    assert_eq!(table.get("q1"), Some("q1"));
}

#[test]
fn flatten_collects_group_labels_and_label_fallback() {
    let begin = row("k_g", RowType::BeginGroup, "g1").with_label("Group one");
    let end = Row::end_marker_for(&begin).unwrap();
    let rows = vec![
        begin,
        row("k1", RowType::Text, "q1").with_label("Question one"),
        row("k2", RowType::Rating, "q2"),
        row("k3", RowType::SelectOne, "q2_header").with_label("Rate it"),
        end,
    ];

    let flattened = flatten_questions(&rows, 0, false);
    assert_eq!(flattened.len(), 3);
    assert_eq!(flattened[0].path, "g1/q1");
    assert_eq!(flattened[0].label.as_deref(), Some("Question one"));
    assert_eq!(flattened[0].group_labels, ["Group one"]);
    assert!(!flattened[0].in_repeat);
    // The rating row takes its label from the adjacent holder.
    assert_eq!(flattened[1].label.as_deref(), Some("Rate it"));
}

#[test]
fn repeat_flag_survives_nested_plain_groups() {
    let inner = group("sub", vec![row("k1", RowType::Text, "q1")]);
    let begin = row("k_r", RowType::BeginRepeat, "household");
    let end = Row::end_marker_for(&begin).unwrap();
    let mut rows = vec![begin];
    rows.extend(inner);
    rows.push(end);
    rows.push(row("k2", RowType::Text, "q2"));

    let flattened = flatten_questions(&rows, 0, false);
    let q1 = flattened.iter().find(|q| q.path == "household/sub/q1").unwrap();
    assert!(q1.in_repeat);
    let q2 = flattened.iter().find(|q| q.path == "q2").unwrap();
    assert!(!q2.in_repeat);
}

#[test]
fn unmatched_repeat_end_keeps_repeat_context() {
    // A plain end marker mistakenly closes the repeat; the stray repeat end
    // that follows has nothing left to close and must be skipped whole,
    // leaving the repeat flag set for later questions.
    let rows = vec![
        row("k_r", RowType::BeginRepeat, "household"),
        row("/k_g", RowType::EndGroup, "/mismatched"),
        row("/k_s", RowType::EndRepeat, "/stray"),
        row("k1", RowType::Text, "member"),
    ];
    let flattened = flatten_questions(&rows, 0, false);
    assert_eq!(flattened.len(), 1);
    assert!(flattened[0].in_repeat);
}

#[test]
fn translated_labels_resolve_per_index() {
    let rows = vec![
        row("k1", RowType::Text, "q1").with_label(LabelText::Translated(vec![
            Some("Name".into()),
            Some("Nom".into()),
        ])),
    ];
    let english = flatten_questions(&rows, 0, false);
    assert_eq!(english[0].label.as_deref(), Some("Name"));
    let french = flatten_questions(&rows, 1, false);
    assert_eq!(french[0].label.as_deref(), Some("Nom"));
}

// Property: resolution is stateless, so resolving an unchanged row list
// twice yields identical tables.

#[derive(Debug, Clone)]
enum Node {
    Question(u8),
    Group(u8, Vec<Node>),
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = any::<u8>().prop_map(Node::Question);
    leaf.prop_recursive(3, 24, 4, |inner| {
        (any::<u8>(), prop::collection::vec(inner, 0..4))
            .prop_map(|(id, children)| Node::Group(id, children))
    })
}

fn flatten_node(node: &Node, counter: &mut u32, rows: &mut Vec<Row>) {
    *counter += 1;
    match node {
        Node::Question(id) => {
            rows.push(row(
                &format!("k{counter}"),
                RowType::Text,
                &format!("q{counter}_{id}"),
            ));
        }
        Node::Group(id, children) => {
            let begin = row(
                &format!("k{counter}"),
                RowType::BeginGroup,
                &format!("g{counter}_{id}"),
            );
            let end = Row::end_marker_for(&begin).unwrap();
            rows.push(begin);
            for child in children {
                flatten_node(child, counter, rows);
            }
            rows.push(end);
        }
    }
}

proptest! {
    #[test]
    fn resolve_paths_is_idempotent(nodes in prop::collection::vec(node_strategy(), 0..8)) {
        let mut rows = Vec::new();
        let mut counter = 0;
        for node in &nodes {
            flatten_node(node, &mut counter, &mut rows);
        }
        let options = PathOptions { include_groups: true, include_meta: false };
        let first = resolve_paths(&rows, options);
        let second = resolve_paths(&rows, options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn identity_prefers_name(name in "[a-z][a-z0-9_]{0,12}", autoname in "[a-z][a-z0-9_]{0,12}") {
        let r = row("k1", RowType::Text, &name).with_autoname(autoname);
        prop_assert_eq!(r.identity(), name.as_str());
    }
}
