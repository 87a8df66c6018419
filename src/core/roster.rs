use crate::core::classify::category_of;
use crate::core::grouping::CategoryMap;
use crate::core::models::Student;
use crate::core::types::NumericField;
use crate::errors::{Error, Result};
use std::path::Path;

/// Roster filename expected in the working directory when none is given.
pub const DEFAULT_ROSTER_FILE: &str = "std.csv";

/// Immutable snapshot of the loaded roster: the flat list in file order and
/// the same records bucketed by category in first-seen order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub students: Vec<Student>,
    pub by_category: CategoryMap<Student>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Load the roster CSV. All-or-nothing: any missing column, unreadable row,
/// or non-numeric age/grade fails the whole load and startup must abort.
pub fn load_roster(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(Error::RosterNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::Load(format!("Failed to open '{}': {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::Load(format!("Failed to read header row: {e}")))?
        .clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::Load(format!("Roster file is missing the '{name}' column.")))
    };
    // Required columns located by name; any extra columns are ignored.
    let name_col = column("name")?;
    let age_col = column("age")?;
    let grade_col = column("grade")?;

    let mut students = Vec::new();
    let mut by_category = CategoryMap::new();

    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| Error::Load(format!("Row {}: {}", row + 1, e)))?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let age = NumericField::try_from_str(cell(age_col))
            .map_err(|e| Error::Parse(format!("Row {} (age): {}", row + 1, e)))?;
        let grade = NumericField::try_from_str(cell(grade_col))
            .map_err(|e| Error::Parse(format!("Row {} (grade): {}", row + 1, e)))?;

        let id = (students.len() + 1) as i32;
        let student = Student::new(id, cell(name_col), age, grade);

        by_category.push(category_of(&student), student.clone());
        students.push(student);
    }

    Ok(Dataset {
        students,
        by_category,
    })
}
