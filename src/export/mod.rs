
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::grouping::CategoryMap;
use crate::core::models::RankedStudent;
use crate::core::types::CsvHeaderStyle;
use crate::errors::{Error, Result};

/// Default export filenames, written inside the exports directory.
pub const CSV_EXPORT_FILE: &str = "selected_students.csv";
pub const JSON_EXPORT_FILE: &str = "selected_students.json";

/// Flatten every bucket (bucket order, then intra-bucket order) into one
/// delimited file. With the legacy header style the header columns do not
/// match the row fields: the first column is labeled `number` but carries
/// the record's load-time id.
pub fn export_csv(
    grouped: &CategoryMap<RankedStudent>,
    path: &Path,
    header_style: CsvHeaderStyle,
) -> Result<PathBuf> {
    ensure_parent_dir(path)?;

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| Error::Export(format!("Failed to open '{}': {}", path.display(), e)))?;

    writer
        .write_record(header_style.columns())
        .map_err(|e| Error::Export(e.to_string()))?;

    for ranked in grouped.flattened() {
        let s = &ranked.student;
        writer
            .write_record([
                s.id.to_string(),
                s.name.clone(),
                s.age.text.clone(),
                s.grade.text.clone(),
            ])
            .map_err(|e| Error::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| Error::Export(format!("Failed to write '{}': {}", path.display(), e)))?;
    Ok(path.to_path_buf())
}

/// Pretty-printed JSON object mirroring the grouped-with-position mapping.
/// An empty grouping serializes to `{}`.
pub fn export_json(grouped: &CategoryMap<RankedStudent>, path: &Path) -> Result<PathBuf> {
    ensure_parent_dir(path)?;

    let contents = serde_json::to_string_pretty(grouped)
        .map_err(|e| Error::Export(format!("Failed to encode export: {e}")))?;
    fs::write(path, contents)
        .map_err(|e| Error::Export(format!("Failed to write '{}': {}", path.display(), e)))?;
    Ok(path.to_path_buf())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Export(format!("Failed to create '{}': {}", parent.display(), e))
            })?;
        }
    }
    Ok(())
}
