//! Gantt chart markup generation.

use indexmap::IndexMap;

use tabmaid_core::{options::Options, row::GanttRow};

use super::{present, text};

fn is_complete(row: &GanttRow) -> bool {
    present(&row.task).is_some() && present(&row.start).is_some() && present(&row.duration).is_some()
}

/// `name : [status, ]start, duration` - the status tag is emitted verbatim,
/// commas included, so compound tags like `active, crit` pass through.
fn task_line(row: &GanttRow) -> String {
    let status = match present(&row.status) {
        Some(status) => format!("{status}, "),
        None => String::new(),
    };
    format!(
        "{} : {status}{}, {}",
        text(&row.task),
        text(&row.start),
        text(&row.duration),
    )
}

pub(crate) fn generate(rows: &[GanttRow], _options: &Options) -> String {
    let valid: Vec<&GanttRow> = rows.iter().filter(|row| is_complete(row)).collect();
    if valid.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        "gantt".to_string(),
        "    dateFormat YYYY-MM-DD".to_string(),
        "    axisFormat %m/%d".to_string(),
    ];

    let mut sections: IndexMap<&str, Vec<&GanttRow>> = IndexMap::new();
    let mut unsectioned: Vec<&GanttRow> = Vec::new();
    for &row in &valid {
        match present(&row.section) {
            Some(section) => sections.entry(section).or_default().push(row),
            None => unsectioned.push(row),
        }
    }

    for row in &unsectioned {
        lines.push(format!("    {}", task_line(row)));
    }

    for (section, section_rows) in &sections {
        lines.push(format!("    section {section}"));
        for row in section_rows {
            lines.push(format!("    {}", task_line(row)));
        }
    }

    lines.join("\n")
}
