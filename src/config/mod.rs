pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::models::{
    ConfigItem, CsvHeaderStyleConfigItem, FileLoggingConfigItem, SortKeyModeConfigItem,
};
use crate::core::types::{CsvHeaderStyle, SortKeyMode};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub sort_key_mode: SortKeyModeConfigItem,
    #[serde(default)]
    pub csv_header_style: CsvHeaderStyleConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
}

impl Config {
    /// Missing file means defaults; a file that exists but does not parse
    /// is a startup error rather than a silent fallback.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                data: ConfigFile::default(),
            });
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sort_key_mode(&self) -> SortKeyMode {
        *self.data.sort_key_mode.get_value()
    }

    pub fn csv_header_style(&self) -> CsvHeaderStyle {
        *self.data.csv_header_style.get_value()
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }
}
