//! End-to-end tests over the public compile API: dispatch, schemas,
//! templates, and the cross-family output contracts.

use tabmaid::row::{FlowRow, MindmapRow, PieRow};
use tabmaid::{DiagramKind, Direction, Options, RowSet, compile, schema, templates};

fn field(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

#[test]
fn two_step_flowchart_scenario() {
    let rows = RowSet::Flowchart(vec![
        FlowRow {
            id: field("S1"),
            name: field("start"),
            kind: field("start"),
            next: field("S2"),
            ..FlowRow::default()
        },
        FlowRow {
            id: field("S2"),
            name: field("end"),
            kind: field("end"),
            ..FlowRow::default()
        },
    ]);
    let options = Options {
        direction: Direction::TopDown,
        swimlanes: false,
        ..Options::default()
    };

    let markup = compile(&rows, &options);
    let lines: Vec<&str> = markup.lines().collect();

    assert_eq!(lines[0], "flowchart TD");
    assert_eq!(lines[1], "    S1([\"start\"])");
    assert_eq!(lines[2], "    S2([\"end\"])");
    let edges: Vec<&str> = lines.iter().copied().filter(|l| l.contains("-->")).collect();
    assert_eq!(edges, ["    S1 --> S2"]);
}

#[test]
fn mindmap_scenario() {
    let rows = RowSet::Mindmap(vec![
        MindmapRow {
            item: field("Root"),
            ..MindmapRow::default()
        },
        MindmapRow {
            item: field("Child"),
            parent: field("Root"),
            ..MindmapRow::default()
        },
    ]);
    assert_eq!(
        compile(&rows, &Options::default()),
        "mindmap\n    Root\n        Child",
    );
}

#[test]
fn pie_scenario_excludes_non_numeric_values() {
    let rows = RowSet::Pie(vec![
        PieRow {
            label: field("A"),
            value: field("50"),
        },
        PieRow {
            label: field("B"),
            value: field("abc"),
        },
    ]);
    let markup = compile(&rows, &Options::default());
    let data_lines: Vec<&str> = markup.lines().filter(|l| l.contains(" : ")).collect();
    assert_eq!(data_lines, ["    \"A\" : 50"]);
}

#[test]
fn every_template_compiles_to_markup_of_its_family() {
    let headers = [
        (DiagramKind::Flowchart, "flowchart "),
        (DiagramKind::Sequence, "sequenceDiagram"),
        (DiagramKind::State, "stateDiagram-v2"),
        (DiagramKind::Class, "classDiagram"),
        (DiagramKind::Er, "erDiagram"),
        (DiagramKind::Gantt, "gantt"),
        (DiagramKind::Pie, "pie"),
        (DiagramKind::Mindmap, "mindmap"),
        (DiagramKind::Timeline, "timeline"),
    ];
    for (kind, header) in headers {
        for template in templates::templates(kind) {
            let markup = compile(&template.rows, &Options::default());
            assert!(
                markup.starts_with(header),
                "template {} should produce {header} markup, got: {markup}",
                template.id,
            );
            assert!(markup.lines().count() > 1, "template {} is empty", template.id);
        }
    }
}

#[test]
fn schemas_expose_default_rows() {
    for kind in DiagramKind::ALL {
        let schema = schema::schema(kind);
        assert_eq!(schema.kind, kind);
        assert_eq!(schema.default_row().len(), 1);
        assert_eq!(schema.default_row().kind(), kind);
    }
}

#[test]
fn options_are_accepted_by_every_family() {
    let options = Options {
        direction: Direction::LeftRight,
        swimlanes: true,
        theme: tabmaid::Theme::Dark,
    };
    for kind in DiagramKind::ALL {
        // Families that ignore direction/swimlanes/theme still take the
        // same record without complaint.
        let rows = RowSet::seed(kind, 2);
        assert_eq!(compile(&rows, &options), "");
    }
}

mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn label_strategy() -> impl Strategy<Value = String> {
        // Printable text including quotes and brackets, no newlines.
        proptest::string::string_regex("[ -~]{0,24}").expect("valid regex")
    }

    // Labels here avoid arrow/pipe glyphs so structural lines stay
    // recognizable; quote handling has its own dedicated property below.
    fn flow_row_strategy() -> impl Strategy<Value = FlowRow> {
        (
            proptest::option::of("[A-Za-z][A-Za-z0-9]{0,5}"),
            proptest::option::of("[A-Za-z ]{0,10}"),
            proptest::option::of("[A-Za-z ]{0,8}"),
            proptest::option::of("[A-Za-z0-9, ]{0,12}"),
        )
            .prop_map(|(id, name, group, next)| FlowRow {
                id,
                name,
                group,
                next,
                ..FlowRow::default()
            })
    }

    fn options_strategy() -> impl Strategy<Value = Options> {
        (any::<bool>(), any::<bool>()).prop_map(|(left_right, swimlanes)| Options {
            direction: if left_right {
                Direction::LeftRight
            } else {
                Direction::TopDown
            },
            swimlanes,
            ..Options::default()
        })
    }

    proptest! {
        /// Compiling the same input twice yields byte-identical output.
        #[test]
        fn compile_is_deterministic(
            rows in proptest::collection::vec(flow_row_strategy(), 0..8),
            options in options_strategy(),
        ) {
            let rows = RowSet::Flowchart(rows);
            prop_assert_eq!(compile(&rows, &options), compile(&rows, &options));
        }

        /// Every quote in a label is replaced by the escape token, so node
        /// lines carry exactly their two delimiting quotes.
        #[test]
        fn flowchart_labels_never_leak_quotes(name in label_strategy()) {
            prop_assume!(!name.is_empty());
            let rows = RowSet::Flowchart(vec![FlowRow {
                id: Some("N1".to_string()),
                name: Some(name),
                ..FlowRow::default()
            }]);
            let markup = compile(&rows, &Options::default());
            let node_line = markup
                .lines()
                .find(|line| line.starts_with("    N1"))
                .expect("node line");
            prop_assert_eq!(node_line.matches('"').count(), 2);
        }

        /// Dangling successors never surface in the output.
        #[test]
        fn flowchart_edges_only_reference_known_ids(
            rows in proptest::collection::vec(flow_row_strategy(), 0..8),
        ) {
            let row_set = RowSet::Flowchart(rows);
            let markup = compile(&row_set, &Options::default());
            let RowSet::Flowchart(rows) = &row_set else { unreachable!() };
            let known: Vec<&str> = rows
                .iter()
                .filter(|r| {
                    r.id.as_deref().is_some_and(|v| !v.is_empty())
                        && r.name.as_deref().is_some_and(|v| !v.is_empty())
                })
                .filter_map(|r| r.id.as_deref())
                .collect();
            for line in markup.lines().filter(|line| line.contains("-->")) {
                let mut ends = line.trim().split(" --> ");
                let from = ends.next().unwrap_or_default();
                let to = ends.next().unwrap_or_default();
                prop_assert!(known.contains(&from), "unknown source {from} in {line}");
                prop_assert!(known.contains(&to), "unknown target {to} in {line}");
            }
        }
    }
}
