//! Mindmap markup generation.
//!
//! Rows form a forest: each row's `parent` field names another row's `item`
//! value. A row whose parent is empty or matches nothing becomes a root.
//! Traversal carries a visited set, so a parent chain that closes on itself
//! (which can never be reached from a root) emits nothing instead of
//! recursing without bound.

use std::collections::HashMap;

use tabmaid_core::{options::Options, row::MindmapRow};

use super::{present, text};

fn is_complete(row: &MindmapRow) -> bool {
    present(&row.item).is_some()
}

/// Wraps the item text in the shape's bracket convention.
fn shaped_item(item: &str, shape: Option<&str>) -> String {
    match shape {
        Some("square") => format!("[{item}]"),
        Some("rounded") => format!("({item})"),
        Some("circle") => format!("(({item}))"),
        Some("bang") => format!(")){item}(("),
        Some("cloud") => format!("){item}("),
        Some("hexagon") => format!("{{{{{item}}}}}"),
        _ => item.to_string(),
    }
}

fn render(
    lines: &mut Vec<String>,
    nodes: &[&MindmapRow],
    children: &[Vec<usize>],
    visited: &mut [bool],
    index: usize,
    depth: usize,
) {
    if visited[index] {
        return;
    }
    visited[index] = true;

    let row = nodes[index];
    let indent = "    ".repeat(depth);
    lines.push(format!(
        "{indent}{}",
        shaped_item(text(&row.item), row.shape.as_deref()),
    ));

    for &child in &children[index] {
        render(lines, nodes, children, visited, child, depth + 1);
    }
}

pub(crate) fn generate(rows: &[MindmapRow], _options: &Options) -> String {
    let valid: Vec<&MindmapRow> = rows.iter().filter(|row| is_complete(row)).collect();
    if valid.is_empty() {
        return String::new();
    }

    let mut lines = vec!["mindmap".to_string()];

    // Duplicate item keys resolve to the last row carrying them.
    let mut index_of: HashMap<&str, usize> = HashMap::new();
    for (index, row) in valid.iter().enumerate() {
        index_of.insert(text(&row.item), index);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); valid.len()];
    let mut roots: Vec<usize> = Vec::new();
    for row in &valid {
        let node = index_of[text(&row.item)];
        match present(&row.parent).and_then(|parent| index_of.get(parent)) {
            Some(&parent) => children[parent].push(node),
            // Unmatched parents promote the row to a root.
            None => roots.push(node),
        }
    }

    let mut visited = vec![false; valid.len()];
    for &root in &roots {
        render(&mut lines, &valid, &children, &mut visited, root, 1);
    }

    lines.join("\n")
}
