//! Timeline markup generation.

use tabmaid_core::{options::Options, row::TimelineRow};

use super::{present, split_list, text};

fn is_complete(row: &TimelineRow) -> bool {
    present(&row.period).is_some() && present(&row.events).is_some()
}

pub(crate) fn generate(rows: &[TimelineRow], _options: &Options) -> String {
    let valid: Vec<&TimelineRow> = rows.iter().filter(|row| is_complete(row)).collect();
    if valid.is_empty() {
        return String::new();
    }

    let mut lines = vec!["timeline".to_string()];

    // Consecutive rows sharing a section emit the header once.
    let mut last_section: Option<&str> = None;
    for row in &valid {
        if let Some(section) = present(&row.section) {
            if last_section != Some(section) {
                lines.push(format!("    section {section}"));
                last_section = Some(section);
            }
        }

        let mut events = split_list(text(&row.events), ';');
        if let Some(first) = events.next() {
            lines.push(format!("    {} : {first}", text(&row.period)));
            for event in events {
                lines.push(format!("               : {event}"));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(section: &str, period: &str, events: &str) -> TimelineRow {
        TimelineRow {
            section: (!section.is_empty()).then(|| section.to_string()),
            period: Some(period.to_string()),
            events: Some(events.to_string()),
        }
    }

    #[test]
    fn test_single_event_line() {
        let rows = vec![row("", "2024", "Launch")];
        let markup = generate(&rows, &Options::default());
        assert_eq!(markup, "timeline\n    2024 : Launch");
    }

    #[test]
    fn test_multiple_events_align_under_the_period() {
        let rows = vec![row("", "2024", "Launch;Press release")];
        let markup = generate(&rows, &Options::default());
        assert_eq!(
            markup,
            "timeline\n    2024 : Launch\n               : Press release",
        );
    }

    #[test]
    fn test_consecutive_section_headers_are_suppressed() {
        let rows = vec![
            row("Q1", "Jan", "Kickoff"),
            row("Q1", "Feb", "Beta"),
            row("Q2", "Apr", "Release"),
        ];
        let markup = generate(&rows, &Options::default());
        assert_eq!(
            markup,
            concat!(
                "timeline\n",
                "    section Q1\n",
                "    Jan : Kickoff\n",
                "    Feb : Beta\n",
                "    section Q2\n",
                "    Apr : Release",
            )
        );
    }

    #[test]
    fn test_sectionless_row_keeps_previous_section_open() {
        let rows = vec![
            row("Q1", "Jan", "Kickoff"),
            row("", "Feb", "Beta"),
            row("Q1", "Mar", "GA"),
        ];
        let markup = generate(&rows, &Options::default());
        // The sectionless row does not reset the running section, so Q1 is
        // not re-emitted for the third row.
        assert_eq!(
            markup,
            concat!(
                "timeline\n",
                "    section Q1\n",
                "    Jan : Kickoff\n",
                "    Feb : Beta\n",
                "    Mar : GA",
            )
        );
    }

    #[test]
    fn test_events_splitting_away_emits_no_event_lines() {
        let rows = vec![row("Q1", "Jan", " ; ; ")];
        let markup = generate(&rows, &Options::default());
        assert_eq!(markup, "timeline\n    section Q1");
    }
}
