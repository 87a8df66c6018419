use crate::core::classify::category_of;
use crate::core::grouping::CategoryMap;
use crate::core::models::{RankedStudent, Student};
use crate::core::types::{SortKeyMode, SortOrder};

/// Sort, re-group, and number a filtered record set.
///
/// The sort key is the (grade, age) pair. In lexicographic mode both fields
/// compare as the text they had in the roster file, so "9" outranks "89";
/// numeric mode compares parsed values. The sort is stable, and descending
/// order reverses the entire ascending result, ties included.
///
/// Categories are re-derived from the classifier during the sorted
/// traversal; buckets form in first-encounter order and every bucket gets
/// positions 1..=len in bucket-local order.
pub fn rank(
    students: &[Student],
    order: SortOrder,
    key_mode: SortKeyMode,
) -> CategoryMap<RankedStudent> {
    let mut sorted: Vec<Student> = students.to_vec();
    match key_mode {
        SortKeyMode::Lexicographic => {
            sorted.sort_by(|a, b| {
                (a.grade.text.as_str(), a.age.text.as_str())
                    .cmp(&(b.grade.text.as_str(), b.age.text.as_str()))
            });
        }
        SortKeyMode::Numeric => {
            sorted.sort_by_key(|s| (s.grade.value, s.age.value));
        }
    }
    if order == SortOrder::Desc {
        sorted.reverse();
    }

    let mut grouped = CategoryMap::new();
    for student in sorted {
        let category = category_of(&student);
        let position = grouped.get(category).map_or(0, |bucket| bucket.len()) as i32 + 1;
        grouped.push(category, RankedStudent::new(student, position));
    }
    grouped
}
