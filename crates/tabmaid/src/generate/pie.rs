//! Pie chart markup generation.

use tabmaid_core::{options::Options, row::PieRow};

use super::{present, text};

fn is_complete(row: &PieRow) -> bool {
    present(&row.label).is_some() && present(&row.value).is_some()
}

pub(crate) fn generate(rows: &[PieRow], _options: &Options) -> String {
    let valid: Vec<&PieRow> = rows.iter().filter(|row| is_complete(row)).collect();
    if valid.is_empty() {
        return String::new();
    }

    let mut lines = vec!["pie".to_string()];

    for row in &valid {
        // A second validity gate on top of the completeness filter: values
        // that do not parse as numbers drop out silently.
        let Ok(value) = text(&row.value).trim().parse::<f64>() else {
            continue;
        };
        if value.is_nan() {
            continue;
        }
        lines.push(format!("    \"{}\" : {value}", text(&row.label)));
    }

    lines.join("\n")
}
