//! Sequence diagram markup generation.

use std::collections::HashSet;

use tabmaid_core::{options::Options, row::SequenceRow};

use super::{normalize_key, present, text};

fn escape_label(label: &str) -> String {
    label.replace('"', "'")
}

fn is_complete(row: &SequenceRow) -> bool {
    present(&row.sender).is_some()
        && present(&row.receiver).is_some()
        && present(&row.message).is_some()
}

pub(crate) fn generate(rows: &[SequenceRow], _options: &Options) -> String {
    let valid: Vec<&SequenceRow> = rows.iter().filter(|row| is_complete(row)).collect();
    if valid.is_empty() {
        return String::new();
    }

    let mut lines = vec!["sequenceDiagram".to_string()];

    // Participants declare once each, in first-encounter order.
    let mut participants: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for row in &valid {
        for name in [text(&row.sender), text(&row.receiver)] {
            if seen.insert(name) {
                participants.push(name);
            }
        }
    }
    for name in &participants {
        lines.push(format!("    participant {} as {name}", normalize_key(name)));
    }

    lines.push(String::new());

    for row in &valid {
        let sender = normalize_key(text(&row.sender));
        let receiver = normalize_key(text(&row.receiver));
        let arrow = present(&row.arrow).unwrap_or("->>");

        lines.push(format!(
            "    {sender}{arrow}{receiver}: {}",
            escape_label(text(&row.message)),
        ));

        match row.activation.as_deref() {
            Some("activate") => lines.push(format!("    activate {receiver}")),
            Some("deactivate") => lines.push(format!("    deactivate {sender}")),
            _ => {}
        }

        if let Some(note) = present(&row.note) {
            lines.push(format!(
                "    Note over {sender},{receiver}: {}",
                escape_label(note),
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sender: &str, receiver: &str, message: &str) -> SequenceRow {
        SequenceRow {
            sender: Some(sender.to_string()),
            receiver: Some(receiver.to_string()),
            message: Some(message.to_string()),
            ..SequenceRow::default()
        }
    }

    #[test]
    fn test_participants_declare_once_in_order() {
        let rows = vec![
            row("Client", "Server", "request"),
            row("Server", "Client", "response"),
        ];
        let markup = generate(&rows, &Options::default());
        assert_eq!(
            markup,
            concat!(
                "sequenceDiagram\n",
                "    participant Client as Client\n",
                "    participant Server as Server\n",
                "\n",
                "    Client->>Server: request\n",
                "    Server->>Client: response",
            )
        );
    }

    #[test]
    fn test_participant_keys_normalize_whitespace() {
        let rows = vec![row("API gateway", "User service", "create")];
        let markup = generate(&rows, &Options::default());
        assert!(markup.contains("    participant API_gateway as API gateway"));
        assert!(markup.contains("    API_gateway->>User_service: create"));
    }

    #[test]
    fn test_arrow_kind_is_used_verbatim() {
        let mut reply = row("B", "A", "done");
        reply.arrow = Some("-->>".to_string());
        let markup = generate(&[reply], &Options::default());
        assert!(markup.contains("    B-->>A: done"));
    }

    #[test]
    fn test_activation_lines() {
        let mut call = row("A", "B", "begin");
        call.activation = Some("activate".to_string());
        let mut finish = row("B", "A", "end");
        finish.activation = Some("deactivate".to_string());
        let markup = generate(&[call, finish], &Options::default());
        assert!(markup.contains("    A->>B: begin\n    activate B"));
        assert!(markup.contains("    B->>A: end\n    deactivate B"));
    }

    #[test]
    fn test_note_spans_sender_and_receiver() {
        let mut call = row("A", "B", "login");
        call.note = Some("credentials are \"sealed\"".to_string());
        let markup = generate(&[call], &Options::default());
        assert!(markup.contains("    Note over A,B: credentials are 'sealed'"));
    }

    #[test]
    fn test_rows_missing_a_message_are_skipped() {
        let rows = vec![SequenceRow {
            sender: Some("A".to_string()),
            receiver: Some("B".to_string()),
            ..SequenceRow::default()
        }];
        assert_eq!(generate(&rows, &Options::default()), "");
    }
}
