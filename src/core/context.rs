use crate::config::Config;
use crate::core::roster::{self, Dataset};
use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

/// Everything the interactive loop needs: the immutable dataset snapshot,
/// the effective configuration, the logger, and the resolved paths.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub dataset: Dataset,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub roster_path: PathBuf,
    pub exports_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    /// Load config and roster; any load failure aborts startup in `main`.
    pub fn new_with_paths(
        roster_path: PathBuf,
        config_path: PathBuf,
        exports_dir: PathBuf,
        logs_dir: PathBuf,
    ) -> Result<Self> {
        let config = Config::load_or_default(&config_path)?;
        let dataset = roster::load_roster(&roster_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            dataset,
            logger,
            startup_displayed: false,
            roster_path,
            exports_dir,
            logs_dir,
        })
    }
}
