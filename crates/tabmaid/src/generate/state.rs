//! State diagram markup generation.
//!
//! A state whose display name is the reserved marker `[*]` stands for the
//! start/end pseudo-state: it gets no declaration line, and transitions
//! referencing its id resolve to the marker instead.

use std::collections::HashMap;

use tabmaid_core::{options::Options, row::StateRow};

use super::{present, split_list, text};

/// Reserved start/end marker name.
const MARKER: &str = "[*]";

fn escape_label(label: &str) -> String {
    label.replace('"', "'")
}

fn is_complete(row: &StateRow) -> bool {
    present(&row.id).is_some() && present(&row.name).is_some()
}

/// Resolves an id to its markup endpoint.
///
/// Ids whose row is named `[*]` become the marker; everything else - known
/// or not - passes through verbatim.
fn resolve<'a>(names: &HashMap<&str, &str>, id: &'a str) -> &'a str {
    match names.get(id) {
        Some(&name) if name == MARKER => MARKER,
        _ => id,
    }
}

pub(crate) fn generate(rows: &[StateRow], _options: &Options) -> String {
    let valid: Vec<&StateRow> = rows.iter().filter(|row| is_complete(row)).collect();
    if valid.is_empty() {
        return String::new();
    }

    let mut lines = vec!["stateDiagram-v2".to_string()];

    let names: HashMap<&str, &str> = valid
        .iter()
        .map(|row| (text(&row.id), text(&row.name)))
        .collect();

    for row in &valid {
        let id = text(&row.id);
        let name = text(&row.name);
        if name == MARKER {
            continue;
        }

        match row.kind.as_deref() {
            Some("choice") => lines.push(format!("    state {id} <<choice>>")),
            Some("fork") => lines.push(format!("    state {id} <<fork>>")),
            Some("join") => lines.push(format!("    state {id} <<join>>")),
            _ => {
                if id != name {
                    lines.push(format!("    state \"{}\" as {id}", escape_label(name)));
                }
                if let Some(notes) = present(&row.notes) {
                    lines.push(format!("    note right of {id}"));
                    lines.push(format!("        {}", escape_label(notes)));
                    lines.push("    end note".to_string());
                }
            }
        }
    }

    lines.push(String::new());

    for row in &valid {
        let Some(next) = present(&row.next) else {
            continue;
        };
        let from = resolve(&names, text(&row.id));
        for target in split_list(next, ',') {
            let to = resolve(&names, target);
            match present(&row.trigger) {
                Some(trigger) => {
                    lines.push(format!("    {from} --> {to} : {}", escape_label(trigger)));
                }
                None => lines.push(format!("    {from} --> {to}")),
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, next: &str) -> StateRow {
        StateRow {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            next: (!next.is_empty()).then(|| next.to_string()),
            ..StateRow::default()
        }
    }

    #[test]
    fn test_marker_rows_declare_nothing_and_resolve_to_marker() {
        let rows = vec![
            row("start", "[*]", "Pending"),
            row("Pending", "Pending", "done"),
            row("done", "[*]", ""),
        ];
        let markup = generate(&rows, &Options::default());
        assert_eq!(
            markup,
            "stateDiagram-v2\n\n    [*] --> Pending\n    Pending --> [*]",
        );
    }

    #[test]
    fn test_alias_declaration_when_id_differs_from_name() {
        let rows = vec![row("P", "Pending review", "")];
        let markup = generate(&rows, &Options::default());
        assert!(markup.contains("    state \"Pending review\" as P"));
    }

    #[test]
    fn test_same_id_and_name_needs_no_declaration() {
        let rows = vec![row("Pending", "Pending", "")];
        assert_eq!(generate(&rows, &Options::default()), "stateDiagram-v2\n");
    }

    #[test]
    fn test_stereotype_kinds() {
        for kind in ["choice", "fork", "join"] {
            let mut state = row("S", "Anything", "");
            state.kind = Some(kind.to_string());
            let markup = generate(&[state], &Options::default());
            assert!(markup.contains(&format!("    state S <<{kind}>>")), "kind: {kind}");
        }
    }

    #[test]
    fn test_notes_attach_as_block() {
        let mut state = row("S", "Shipped", "");
        state.notes = Some("carrier \"express\"".to_string());
        let markup = generate(&[state], &Options::default());
        assert!(markup.contains(
            "    note right of S\n        carrier 'express'\n    end note",
        ));
    }

    #[test]
    fn test_transitions_with_trigger_and_multiple_targets() {
        let mut state = row("A", "A", "B, C");
        state.trigger = Some("submit".to_string());
        let rows = vec![state, row("B", "B", ""), row("C", "C", "")];
        let markup = generate(&rows, &Options::default());
        assert!(markup.contains("    A --> B : submit"));
        assert!(markup.contains("    A --> C : submit"));
    }

    #[test]
    fn test_unknown_target_passes_through() {
        let rows = vec![row("A", "A", "Ghost")];
        let markup = generate(&rows, &Options::default());
        assert!(markup.contains("    A --> Ghost"));
    }
}
