use super::common::{
    make_temp_dir, normalized_lines, run_with_args, run_without_input, write_scenario_roster,
};
use std::fs;

#[test]
fn missing_roster_aborts_before_the_menu_starts() {
    let dir = make_temp_dir("startup-missing");
    let output = run_without_input(&dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Roster file 'std.csv' was not found."),
        "stderr was: {stderr}"
    );
}

#[test]
fn non_numeric_row_fails_the_whole_load() {
    let dir = make_temp_dir("startup-badrow");
    fs::write(
        dir.join("std.csv"),
        "name,age,grade\nAlice,22,95\nBob,thirty,85\n",
    )
    .unwrap();

    let output = run_without_input(&dir);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Row 2"), "stderr was: {stderr}");
}

#[test]
fn missing_column_fails_the_whole_load() {
    let dir = make_temp_dir("startup-nocol");
    fs::write(dir.join("std.csv"), "name,age\nAlice,22\n").unwrap();

    let output = run_without_input(&dir);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("grade"), "stderr was: {stderr}");
}

#[test]
fn invalid_config_json_aborts_startup() {
    let dir = make_temp_dir("startup-badconfig");
    write_scenario_roster(&dir);
    fs::write(dir.join("config.json"), "{ not json").unwrap();

    let output = run_without_input(&dir);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid JSON"), "stderr was: {stderr}");
}

#[test]
fn unknown_cli_flag_is_rejected() {
    let dir = make_temp_dir("startup-flag");
    write_scenario_roster(&dir);

    let output = run_with_args(&dir, &["--bogus"]);
    assert!(!output.status.success());
    let lines = normalized_lines(&output.stderr);
    assert!(lines.iter().any(|l| l.contains("Unknown argument")));
}

#[test]
fn roster_flag_overrides_the_default_path() {
    let dir = make_temp_dir("startup-roster-flag");
    fs::write(dir.join("people.csv"), "name,age,grade\nAlice,22,95\n").unwrap();

    let output = run_with_args(&dir, &["--roster", "missing.csv"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.csv"), "stderr was: {stderr}");
}
