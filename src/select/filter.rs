use crate::core::grouping::CategoryMap;
use crate::core::models::Student;
use crate::core::types::{AgeBracket, GradeBand};
use crate::select::criteria::SelectionCriteria;

/// Members of every bucket whose category matches both sides of the
/// criteria. Result order is bucket order, then intra-bucket order.
pub fn filter_by_category(
    grouped: &CategoryMap<Student>,
    criteria: &SelectionCriteria,
) -> Vec<Student> {
    let mut filtered = Vec::new();
    for (category, students) in grouped.iter() {
        if criteria.grade.matches(category.band) && criteria.age.matches(category.bracket) {
            filtered.extend(students.iter().cloned());
        }
    }
    filtered
}

/// Single-dimension path for the grade view: flat list, classifier predicate.
pub fn filter_by_band(students: &[Student], band: GradeBand) -> Vec<Student> {
    students
        .iter()
        .filter(|s| crate::core::classify::grade_band(s.grade.value) == band)
        .cloned()
        .collect()
}

/// Single-dimension path for the age view.
pub fn filter_by_bracket(students: &[Student], bracket: AgeBracket) -> Vec<Student> {
    students
        .iter()
        .filter(|s| crate::core::classify::age_bracket(s.age.value) == bracket)
        .cloned()
        .collect()
}
