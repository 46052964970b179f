//! Flowchart markup generation.
//!
//! The most involved family: nodes carry one of ten shapes, edges carry one
//! of three arrow styles plus an optional condition label, and the node list
//! nests up to two levels deep - subgraph groups always, per-assignee
//! swimlanes around them when the option is enabled.

use std::collections::HashSet;

use indexmap::IndexMap;

use tabmaid_core::{options::Options, row::FlowRow};

use super::{normalize_key, present, split_list, text};

/// Escape token for double quotes inside flowchart labels.
fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

fn is_complete(row: &FlowRow) -> bool {
    present(&row.id).is_some() && present(&row.name).is_some()
}

/// Arrow glyph for an edge-style value; anything unrecognized is solid.
fn arrow_glyph(arrow: Option<&str>) -> &'static str {
    match arrow {
        Some("dotted") => "-.->",
        Some("thick") => "==>",
        _ => "-->",
    }
}

/// Kind-derived default shape for rows without an explicit one.
fn default_shape(kind: Option<&str>) -> &'static str {
    match kind {
        Some("start") | Some("end") => "stadium",
        Some("decision") => "diamond",
        _ => "rectangle",
    }
}

/// Renders `id` plus the shape's bracket pair around the escaped label.
///
/// A shape name outside the ten known variants falls through to rectangle.
fn shaped_node(id: &str, label: &str, shape: &str) -> String {
    let escaped = escape_label(label);
    match shape {
        "rounded" => format!("{id}(\"{escaped}\")"),
        "diamond" => format!("{id}{{\"{escaped}\"}}"),
        "hexagon" => format!("{id}{{{{\"{escaped}\"}}}}"),
        "cylinder" => format!("{id}[(\"{escaped}\")]"),
        "stadium" => format!("{id}([\"{escaped}\"])"),
        "circle" => format!("{id}((\"{escaped}\"))"),
        "subroutine" => format!("{id}[[\"{escaped}\"]]"),
        "trapezoid" => format!("{id}[/\"{escaped}\"\\]"),
        "parallelogram" => format!("{id}[/\"{escaped}\"/]"),
        _ => format!("{id}[\"{escaped}\"]"),
    }
}

fn node_line(row: &FlowRow) -> String {
    let name = text(&row.name);
    let label = match present(&row.notes) {
        Some(notes) => format!("{name}<br/>{notes}"),
        None => name.to_string(),
    };
    let shape = present(&row.shape).unwrap_or_else(|| default_shape(row.kind.as_deref()));
    shaped_node(text(&row.id), &label, shape)
}

fn open_subgraph(lines: &mut Vec<String>, indent: &str, label: &str) {
    lines.push(format!(
        "{indent}subgraph {}[\"{}\"]",
        normalize_key(label),
        escape_label(label),
    ));
}

/// Splits rows into (ungrouped, group label -> rows) preserving row order
/// and first-encounter group order.
fn partition_by_group<'a>(
    rows: &[&'a FlowRow],
) -> (Vec<&'a FlowRow>, IndexMap<&'a str, Vec<&'a FlowRow>>) {
    let mut ungrouped = Vec::new();
    let mut groups: IndexMap<&str, Vec<&FlowRow>> = IndexMap::new();
    for &row in rows {
        match present(&row.group) {
            Some(group) => groups.entry(group).or_default().push(row),
            None => ungrouped.push(row),
        }
    }
    (ungrouped, groups)
}

pub(crate) fn generate(rows: &[FlowRow], options: &Options) -> String {
    let valid: Vec<&FlowRow> = rows.iter().filter(|row| is_complete(row)).collect();
    if valid.is_empty() {
        return String::new();
    }

    let mut lines = vec![format!("flowchart {}", options.direction)];

    // Ids that may appear as edge endpoints; successors naming anything
    // else are dropped silently.
    let known_ids: HashSet<&str> = valid.iter().filter_map(|row| present(&row.id)).collect();

    if options.swimlanes {
        let mut by_assignee: IndexMap<&str, Vec<&FlowRow>> = IndexMap::new();
        let mut unassigned: Vec<&FlowRow> = Vec::new();
        for &row in &valid {
            match present(&row.assignee) {
                Some(assignee) => by_assignee.entry(assignee).or_default().push(row),
                None => unassigned.push(row),
            }
        }

        // Rows outside every swimlane still partition by group.
        let (ungrouped, groups) = partition_by_group(&unassigned);
        for row in &ungrouped {
            lines.push(format!("    {}", node_line(row)));
        }
        for (group, group_rows) in &groups {
            open_subgraph(&mut lines, "    ", group);
            for row in group_rows {
                lines.push(format!("        {}", node_line(row)));
            }
            lines.push("    end".to_string());
        }

        for (assignee, assignee_rows) in &by_assignee {
            open_subgraph(&mut lines, "    ", assignee);
            let (direct, groups) = partition_by_group(assignee_rows);
            for row in &direct {
                lines.push(format!("        {}", node_line(row)));
            }
            for (group, group_rows) in &groups {
                open_subgraph(&mut lines, "        ", group);
                for row in group_rows {
                    lines.push(format!("            {}", node_line(row)));
                }
                lines.push("        end".to_string());
            }
            lines.push("    end".to_string());
        }
    } else {
        let (ungrouped, groups) = partition_by_group(&valid);
        for row in &ungrouped {
            lines.push(format!("    {}", node_line(row)));
        }
        for (group, group_rows) in &groups {
            open_subgraph(&mut lines, "    ", group);
            for row in group_rows {
                lines.push(format!("        {}", node_line(row)));
            }
            lines.push("    end".to_string());
        }
    }

    lines.push(String::new());

    // Edges follow working-set row order regardless of the nesting above.
    for row in &valid {
        let from = text(&row.id);
        let Some(successors) = present(&row.next) else {
            continue;
        };
        let arrow = arrow_glyph(row.arrow.as_deref());
        for target in split_list(successors, ',') {
            if !known_ids.contains(target) {
                continue;
            }
            match present(&row.condition) {
                Some(condition) => lines.push(format!(
                    "    {from} {arrow}|\"{}\"| {target}",
                    escape_label(condition),
                )),
                None => lines.push(format!("    {from} {arrow} {target}")),
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabmaid_core::Direction;

    fn row(id: &str, name: &str, kind: &str, next: &str) -> FlowRow {
        FlowRow {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            kind: (!kind.is_empty()).then(|| kind.to_string()),
            next: (!next.is_empty()).then(|| next.to_string()),
            ..FlowRow::default()
        }
    }

    #[test]
    fn test_two_step_flow() {
        let rows = vec![row("S1", "start", "start", "S2"), row("S2", "end", "end", "")];
        let markup = generate(&rows, &Options::default());
        assert_eq!(
            markup,
            "flowchart TD\n    S1([\"start\"])\n    S2([\"end\"])\n\n    S1 --> S2",
        );
    }

    #[test]
    fn test_direction_header() {
        let rows = vec![row("A", "a", "", "")];
        let options = Options {
            direction: Direction::LeftRight,
            ..Options::default()
        };
        assert!(generate(&rows, &options).starts_with("flowchart LR\n"));
    }

    #[test]
    fn test_incomplete_rows_are_skipped() {
        let rows = vec![
            row("", "no id", "", ""),
            FlowRow {
                id: Some("A".to_string()),
                ..FlowRow::default()
            },
        ];
        assert_eq!(generate(&rows, &Options::default()), "");
    }

    #[test]
    fn test_dangling_successor_emits_no_edge() {
        let rows = vec![row("A", "a", "", "B, C"), row("B", "b", "", "")];
        let markup = generate(&rows, &Options::default());
        assert!(markup.contains("    A --> B"));
        assert!(!markup.contains(" C"));
    }

    #[test]
    fn test_condition_and_arrow_styles() {
        let mut branch = row("A", "a", "decision", "B");
        branch.condition = Some("yes".to_string());
        branch.arrow = Some("dotted".to_string());
        let mut fallback = row("B", "b", "", "A");
        fallback.arrow = Some("thick".to_string());
        let markup = generate(&[branch, fallback], &Options::default());
        assert!(markup.contains("    A -.->|\"yes\"| B"));
        assert!(markup.contains("    B ==> A"));
    }

    #[test]
    fn test_shape_brackets() {
        assert_eq!(shaped_node("N", "x", "rectangle"), "N[\"x\"]");
        assert_eq!(shaped_node("N", "x", "rounded"), "N(\"x\")");
        assert_eq!(shaped_node("N", "x", "diamond"), "N{\"x\"}");
        assert_eq!(shaped_node("N", "x", "hexagon"), "N{{\"x\"}}");
        assert_eq!(shaped_node("N", "x", "cylinder"), "N[(\"x\")]");
        assert_eq!(shaped_node("N", "x", "stadium"), "N([\"x\"])");
        assert_eq!(shaped_node("N", "x", "circle"), "N((\"x\"))");
        assert_eq!(shaped_node("N", "x", "subroutine"), "N[[\"x\"]]");
        assert_eq!(shaped_node("N", "x", "trapezoid"), "N[/\"x\"\\]");
        assert_eq!(shaped_node("N", "x", "parallelogram"), "N[/\"x\"/]");
        // Unknown shape names fall back to the rectangle convention.
        assert_eq!(shaped_node("N", "x", "blob"), "N[\"x\"]");
    }

    #[test]
    fn test_decision_kind_defaults_to_diamond() {
        let rows = vec![row("D", "check", "decision", "")];
        let markup = generate(&rows, &Options::default());
        assert!(markup.contains("    D{\"check\"}"));
    }

    #[test]
    fn test_note_joins_label_with_break() {
        let mut step = row("A", "a", "", "");
        step.notes = Some("within 24h".to_string());
        let markup = generate(&[step], &Options::default());
        assert!(markup.contains("    A[\"a<br/>within 24h\"]"));
    }

    #[test]
    fn test_quote_escaping() {
        let rows = vec![row("A", "say \"hi\"", "", "")];
        let markup = generate(&rows, &Options::default());
        assert!(markup.contains("    A[\"say #quot;hi#quot;\"]"));
    }

    #[test]
    fn test_groups_nest_without_swimlanes() {
        let mut first = row("A", "a", "", "");
        first.group = Some("Prep".to_string());
        let loose = row("B", "b", "", "");
        let mut second = row("C", "c", "", "");
        second.group = Some("Prep".to_string());
        let markup = generate(&[first, loose, second], &Options::default());
        assert_eq!(
            markup,
            concat!(
                "flowchart TD\n",
                "    B[\"b\"]\n",
                "    subgraph Prep[\"Prep\"]\n",
                "        A[\"a\"]\n",
                "        C[\"c\"]\n",
                "    end\n",
            )
        );
    }

    #[test]
    fn test_swimlanes_nest_assignee_then_group() {
        let mut a = row("A", "a", "", "");
        a.assignee = Some("Team One".to_string());
        let mut b = row("B", "b", "", "");
        b.assignee = Some("Team One".to_string());
        b.group = Some("Review".to_string());
        let c = row("C", "c", "", "");
        let options = Options {
            swimlanes: true,
            ..Options::default()
        };
        let markup = generate(&[a, b, c], &options);
        assert_eq!(
            markup,
            concat!(
                "flowchart TD\n",
                "    C[\"c\"]\n",
                "    subgraph Team_One[\"Team One\"]\n",
                "        A[\"a\"]\n",
                "        subgraph Review[\"Review\"]\n",
                "            B[\"b\"]\n",
                "        end\n",
                "    end\n",
            )
        );
    }

    #[test]
    fn test_swimlane_order_is_first_encounter() {
        let mut a = row("A", "a", "", "");
        a.assignee = Some("Second".to_string());
        let mut b = row("B", "b", "", "");
        b.assignee = Some("First".to_string());
        let mut c = row("C", "c", "", "");
        c.assignee = Some("Second".to_string());
        let options = Options {
            swimlanes: true,
            ..Options::default()
        };
        let markup = generate(&[a, b, c], &options);
        let second_pos = markup.find("subgraph Second").unwrap();
        let first_pos = markup.find("subgraph First").unwrap();
        assert!(second_pos < first_pos);
    }
}
