//! Entity-relationship diagram markup generation.

use std::collections::HashSet;

use indexmap::IndexMap;

use tabmaid_core::{options::Options, row::ErRow};

use super::{present, text};

fn is_complete(row: &ErRow) -> bool {
    present(&row.entity).is_some() && present(&row.attribute).is_some()
}

/// Cardinality glyph; anything unrecognized is a plain line.
fn relation_glyph(relation: &str) -> &'static str {
    match relation {
        "1-1" => "||--||",
        "1-N" => "||--o{",
        "N-1" => "}o--||",
        "N-N" => "}o--o{",
        _ => "--",
    }
}

pub(crate) fn generate(rows: &[ErRow], _options: &Options) -> String {
    let valid: Vec<&ErRow> = rows.iter().filter(|row| is_complete(row)).collect();
    if valid.is_empty() {
        return String::new();
    }

    let mut lines = vec!["erDiagram".to_string()];

    // Attributes group under their entity, entities in first-encounter order.
    let mut entities: IndexMap<&str, Vec<&ErRow>> = IndexMap::new();
    for &row in &valid {
        entities.entry(text(&row.entity)).or_default().push(row);
    }

    for (entity, attributes) in &entities {
        lines.push(format!("    {entity} {{"));
        for attribute in attributes {
            let name = text(&attribute.attribute);
            match present(&attribute.attribute_type) {
                // Key markers render as a fixed base type plus a role tag.
                Some("PK") => lines.push(format!("        string {name} PK")),
                Some("FK") => lines.push(format!("        string {name} FK")),
                Some(attribute_type) => lines.push(format!("        {attribute_type} {name}")),
                None => lines.push(format!("        string {name}")),
            }
        }
        lines.push("    }".to_string());
    }

    lines.push(String::new());

    // Relationship lines dedup symmetrically: an unordered entity pair is
    // emitted at most once, whichever direction names it first.
    let mut emitted: HashSet<(&str, &str)> = HashSet::new();
    for row in &valid {
        let (Some(related), Some(relation)) = (present(&row.related), present(&row.relation))
        else {
            continue;
        };
        let entity = text(&row.entity);
        if emitted.contains(&(entity, related)) || emitted.contains(&(related, entity)) {
            continue;
        }
        emitted.insert((entity, related));
        lines.push(format!(
            "    {entity} {} {related} : \"\"",
            relation_glyph(relation),
        ));
    }

    lines.join("\n")
}
