use crate::core::types::{AgeFilter, GradeFilter, OutputFormat, SortOrder};

/// One interaction's worth of choices, built by the selection prompt and
/// discarded after the filter/rank/export pass that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCriteria {
    pub grade: GradeFilter,
    pub age: AgeFilter,
    pub format: OutputFormat,
    pub order: SortOrder,
}
