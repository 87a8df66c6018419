use super::common::{make_temp_dir, normalized_lines, run_with_input, write_scenario_roster};

#[test]
fn show_all_lists_every_record_in_load_order() {
    let dir = make_temp_dir("menu-all");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "4\n5\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ALL STUDENTS"), "stdout was: {stdout}");
    let alice = stdout.find("Alice").unwrap();
    let bob = stdout.find("Bob").unwrap();
    let carl = stdout.find("Carl").unwrap();
    assert!(alice < bob && bob < carl);
}

#[test]
fn invalid_menu_choice_reports_and_redisplays() {
    let dir = make_temp_dir("menu-invalid");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "9\n5\n");
    assert!(output.status.success());

    let stderr_lines = normalized_lines(&output.stderr);
    assert!(
        stderr_lines
            .iter()
            .any(|l| l.contains("Invalid choice. Please enter a number between 1 and 5.")),
        "stderr was: {:?}",
        stderr_lines
    );
}

#[test]
fn grade_view_shows_only_the_requested_band() {
    let dir = make_temp_dir("menu-grade");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "1\nA\nasc\n5\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("STUDENTS WITH GRADE A"), "stdout: {stdout}");
    assert!(stdout.contains("A_YOUNG"));
    assert!(stdout.contains("Alice"));
    assert!(!stdout.contains("B_SENIOR"));
}

#[test]
fn age_view_crosses_grade_bands() {
    let dir = make_temp_dir("menu-age");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "2\nyoung\nasc\n5\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("YOUNG STUDENTS"), "stdout: {stdout}");
    assert!(stdout.contains("Alice"));
    assert!(stdout.contains("Carl"));
    assert!(!stdout.contains("Bob"));
}

#[test]
fn invalid_grade_selection_reprompts_until_valid() {
    let dir = make_temp_dir("menu-reprompt");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "1\nZ\nB\nasc\n5\n");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid grade"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("STUDENTS WITH GRADE B"));
}

#[test]
fn exit_token_leaves_from_any_prompt() {
    let dir = make_temp_dir("menu-exit");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "1\nexit\n");
    assert!(output.status.success());
}

#[test]
fn eof_terminates_cleanly_without_hanging() {
    let dir = make_temp_dir("menu-eof");
    write_scenario_roster(&dir);

    let output = run_with_input(&dir, "1\n");
    assert!(output.status.success());
}
