use super::common::{make_temp_dir, run_with_input, write_scenario_roster};
use std::fs;

#[test]
fn full_flow_exports_the_filtered_csv() {
    let dir = make_temp_dir("export-csv");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "3\nA\nyoung\ncsv\nasc\n5\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Data successfully saved to"),
        "stdout: {stdout}"
    );

    let contents = fs::read_to_string(dir.join("exports/selected_students.csv")).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("number,name,age,grade"));
    assert_eq!(lines.next(), Some("1,Alice,22,95"));
    assert_eq!(lines.next(), None);
}

#[test]
fn full_flow_exports_grouped_json_with_positions() {
    let dir = make_temp_dir("export-json");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "3\nall\nall\njson\nasc\n5\n");
    assert!(output.status.success());

    let contents = fs::read_to_string(dir.join("exports/selected_students.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();

    let d_young = value["D_young"].as_array().unwrap();
    assert_eq!(d_young.len(), 1);
    assert_eq!(d_young[0]["name"], "Carl");
    assert_eq!(d_young[0]["Position"], 1);
    assert_eq!(d_young[0]["age"], "24");
}

#[test]
fn numeric_mode_and_aligned_header_come_from_config() {
    let dir = make_temp_dir("export-config");
    write_scenario_roster(&dir);
    let config = r#"{
      "sort_key_mode": { "value": "numeric", "description": "sort" },
      "csv_header_style": { "value": "aligned", "description": "header" }
    }"#;
    fs::write(dir.join("config.json"), config).unwrap();

    let output = run_with_input(&dir, "3\nall\nall\ncsv\nasc\n5\n");
    assert!(output.status.success());

    let contents = fs::read_to_string(dir.join("exports/selected_students.csv")).unwrap();
    assert!(contents.starts_with("id,name,age,grade\n"));
    // Numeric ordering puts Carl (65) first.
    assert_eq!(contents.lines().nth(1), Some("3,Carl,24,65"));
}

#[test]
fn empty_selection_still_writes_a_valid_export() {
    let dir = make_temp_dir("export-empty");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "3\nA\nsenior\njson\nasc\n5\n");
    assert!(output.status.success());

    let contents = fs::read_to_string(dir.join("exports/selected_students.json")).unwrap();
    assert_eq!(contents, "{}");
}

#[test]
fn descending_export_reverses_the_flattened_order() {
    let dir = make_temp_dir("export-desc");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "3\nall\nall\ncsv\ndesc\n5\n");
    assert!(output.status.success());

    let contents = fs::read_to_string(dir.join("exports/selected_students.csv")).unwrap();
    let names: Vec<&str> = contents
        .lines()
        .skip(1)
        .map(|l| l.split(',').nth(1).unwrap())
        .collect();
    // Lexicographic desc on grade text: "95" > "85" > "65".
    assert_eq!(names, vec!["Alice", "Bob", "Carl"]);
}

#[test]
fn menu_actions_are_written_to_the_session_log() {
    let dir = make_temp_dir("export-log");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "4\n5\n");
    assert!(output.status.success());

    let logs_dir = dir.join("logs");
    let entry = fs::read_dir(&logs_dir)
        .unwrap()
        .find_map(|e| e.ok())
        .expect("a session log should exist");
    let contents = fs::read_to_string(entry.path()).unwrap();
    assert!(contents.contains("Menu action: 4"), "log: {contents}");
}
