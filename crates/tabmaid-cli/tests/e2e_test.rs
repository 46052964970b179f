//! End-to-end tests running the CLI over temporary files.

use std::fs;

use tempfile::tempdir;

use tabmaid_cli::Args;

fn args(input: &str, output: Option<&str>) -> Args {
    Args {
        input: input.to_string(),
        output: output.map(str::to_string),
        config: None,
        direction: None,
        swimlanes: false,
        theme: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_compiles_a_flowchart_document() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("rows.json");
    let output_path = temp_dir.path().join("out.mmd");

    fs::write(
        &input_path,
        r#"{
            "diagram": "flowchart",
            "rows": [
                { "id": "S1", "name": "start", "kind": "start", "next": "S2" },
                { "id": "S2", "name": "end", "kind": "end" }
            ]
        }"#,
    )
    .unwrap();

    let args = args(
        input_path.to_str().unwrap(),
        Some(output_path.to_str().unwrap()),
    );
    tabmaid_cli::run(&args).expect("run should succeed");

    let markup = fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        markup,
        "flowchart TD\n    S1([\"start\"])\n    S2([\"end\"])\n\n    S1 --> S2",
    );
}

#[test]
fn e2e_applies_config_defaults_and_cli_overrides() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("rows.json");
    let config_path = temp_dir.path().join("config.toml");
    let output_path = temp_dir.path().join("out.mmd");

    fs::write(
        &input_path,
        r#"{ "diagram": "flowchart", "rows": [{ "id": "A", "name": "a" }] }"#,
    )
    .unwrap();
    fs::write(&config_path, "[defaults]\ndirection = \"lr\"\n").unwrap();

    let mut args = args(
        input_path.to_str().unwrap(),
        Some(output_path.to_str().unwrap()),
    );
    args.config = Some(config_path.to_str().unwrap().to_string());
    tabmaid_cli::run(&args).expect("run should succeed");

    let markup = fs::read_to_string(&output_path).unwrap();
    assert!(markup.starts_with("flowchart LR\n"), "markup: {markup}");
}

#[test]
fn e2e_empty_working_set_writes_empty_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("rows.json");
    let output_path = temp_dir.path().join("out.mmd");

    // Rows exist but none is complete, so there is nothing to render -
    // still a success, with empty output.
    fs::write(
        &input_path,
        r#"{ "diagram": "gantt", "rows": [{ "task": "only a name" }] }"#,
    )
    .unwrap();

    let args = args(
        input_path.to_str().unwrap(),
        Some(output_path.to_str().unwrap()),
    );
    tabmaid_cli::run(&args).expect("run should succeed");

    assert_eq!(fs::read_to_string(&output_path).unwrap(), "");
}

#[test]
fn e2e_unknown_diagram_kind_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("rows.json");
    fs::write(&input_path, r#"{ "diagram": "uml", "rows": [] }"#).unwrap();

    let args = args(input_path.to_str().unwrap(), None);
    assert!(tabmaid_cli::run(&args).is_err());
}

#[test]
fn e2e_missing_input_file_fails() {
    let args = args("definitely/not/here.json", None);
    assert!(tabmaid_cli::run(&args).is_err());
}
