//! Class diagram markup generation.

use tabmaid_core::{options::Options, row::ClassRow};

use super::{present, split_list, text};

fn is_complete(row: &ClassRow) -> bool {
    present(&row.name).is_some()
}

/// Connector glyph for a relation kind; anything unrecognized is a plain
/// line.
fn relation_glyph(relation: &str) -> &'static str {
    match relation {
        "inheritance" => "<|--",
        "composition" => "*--",
        "aggregation" => "o--",
        "association" => "-->",
        "dependency" => "..>",
        "realization" => "..|>",
        _ => "--",
    }
}

pub(crate) fn generate(rows: &[ClassRow], _options: &Options) -> String {
    let valid: Vec<&ClassRow> = rows.iter().filter(|row| is_complete(row)).collect();
    if valid.is_empty() {
        return String::new();
    }

    let mut lines = vec!["classDiagram".to_string()];

    for row in &valid {
        lines.push(format!("    class {} {{", text(&row.name)));
        match row.kind.as_deref() {
            Some("interface") => lines.push("        <<interface>>".to_string()),
            Some("abstract") => lines.push("        <<abstract>>".to_string()),
            _ => {}
        }

        if let Some(members) = present(&row.members) {
            for member in split_list(members, ';') {
                lines.push(format!("        +{member}"));
            }
        }

        if let Some(methods) = present(&row.methods) {
            for method in split_list(methods, ';') {
                if method.contains('(') {
                    lines.push(format!("        +{method}"));
                } else {
                    lines.push(format!("        +{method}()"));
                }
            }
        }

        lines.push("    }".to_string());
    }

    lines.push(String::new());

    for row in &valid {
        let (Some(related), Some(relation)) = (present(&row.related), present(&row.relation))
        else {
            continue;
        };
        let glyph = relation_glyph(relation);
        for target in split_list(related, ',') {
            lines.push(format!("    {} {glyph} {target}", text(&row.name)));
        }
    }

    lines.join("\n")
}
