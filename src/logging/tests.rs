use crate::logging::{LogTarget, Logger};
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

fn logger_with_temp_dir(name: &str) -> Logger {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("roster-logs-{name}-{nanos}"));
    let logger = Logger::new();
    logger.set_log_dir(&dir);
    logger
}

#[test]
fn logger_defers_file_creation_until_needed() {
    let logger = logger_with_temp_dir("lazy");
    assert!(logger.log_path().is_none());

    // Console-only should not create a log file.
    logger.info("console only", LogTarget::ConsoleOnly);
    assert!(logger.log_path().is_none());

    logger.info("file line", LogTarget::FileOnly);
    let path = logger.log_path().expect("log path should be set");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("file line"));
    assert!(contents.contains("INFO"));
}

#[test]
fn logger_writes_levels_and_combined_targets() {
    let logger = logger_with_temp_dir("levels");

    logger.warn("warn line", LogTarget::FileOnly);
    logger.error("error line", LogTarget::ConsoleAndFile);

    let path = logger.log_path().expect("log path should be set");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("WARN"));
    assert!(contents.contains("warn line"));
    assert!(contents.contains("ERROR"));
    assert!(contents.contains("error line"));
}

#[test]
fn logger_skips_file_logging_when_disabled() {
    let logger = logger_with_temp_dir("disabled");
    logger.set_file_logging_enabled(false);

    logger.info("file should not exist", LogTarget::ConsoleAndFile);
    assert!(logger.log_path().is_none());

    logger.set_file_logging_enabled(true);
    logger.info("now write", LogTarget::FileOnly);
    assert!(logger.log_path().is_some());
}

#[test]
fn log_dir_is_frozen_after_first_file_write() {
    let logger = logger_with_temp_dir("frozen");
    logger.info("first", LogTarget::FileOnly);
    let path = logger.log_path().unwrap();

    logger.set_log_dir(std::env::temp_dir().join("roster-logs-ignored"));
    logger.info("second", LogTarget::FileOnly);
    assert_eq!(logger.log_path().unwrap(), path);
}
