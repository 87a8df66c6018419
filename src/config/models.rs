use crate::core::types::{Bool, CsvHeaderStyle, SortKeyMode};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortKeyModeConfigItem {
    pub value: SortKeyMode,
    pub description: String,
}

impl Default for SortKeyModeConfigItem {
    fn default() -> Self {
        Self {
            value: SortKeyMode::Lexicographic,
            description: "How age and grade compare during ranking.".into(),
        }
    }
}

impl ConfigItem<SortKeyMode> for SortKeyModeConfigItem {
    fn get_value(&self) -> &SortKeyMode {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = SortKeyMode::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvHeaderStyleConfigItem {
    pub value: CsvHeaderStyle,
    pub description: String,
}

impl Default for CsvHeaderStyleConfigItem {
    fn default() -> Self {
        Self {
            value: CsvHeaderStyle::Legacy,
            description: "Header row written by the CSV exporter.".into(),
        }
    }
}

impl ConfigItem<CsvHeaderStyle> for CsvHeaderStyleConfigItem {
    fn get_value(&self) -> &CsvHeaderStyle {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = CsvHeaderStyle::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
