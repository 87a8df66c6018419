use crate::core::types::NumericField;
use serde::Serialize;
use std::fmt;

/// One roster record, immutable after load.
///
/// `id` is assigned sequentially from 1 in file order. Age and grade keep
/// the textual form they had in the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub age: NumericField,
    pub grade: NumericField,
}

impl Student {
    pub fn new(id: i32, name: impl Into<String>, age: NumericField, grade: NumericField) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            grade,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - Age: {} - Grade: {}",
            self.id, self.name, self.age, self.grade
        )
    }
}

/// A student plus its 1-based rank within a category bucket.
///
/// Positions are recomputed by every ranking pass and never written back to
/// the canonical record. The serialized field keeps the legacy `Position`
/// capitalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedStudent {
    #[serde(flatten)]
    pub student: Student,
    #[serde(rename = "Position")]
    pub position: i32,
}

impl RankedStudent {
    pub fn new(student: Student, position: i32) -> Self {
        Self { student, position }
    }
}

impl fmt::Display for RankedStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - Grade: {} - Age: {}",
            self.position, self.student.name, self.student.grade, self.student.age
        )
    }
}
