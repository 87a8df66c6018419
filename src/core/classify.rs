use crate::core::models::Student;
use crate::core::types::{AgeBracket, Category, GradeBand};

/// Letter band for a numeric grade. Bounds are inclusive at the bottom of
/// each decile; every integer falls into some band.
pub fn grade_band(grade: i32) -> GradeBand {
    if grade >= 90 {
        GradeBand::A
    } else if grade >= 80 {
        GradeBand::B
    } else if grade >= 70 {
        GradeBand::C
    } else if grade >= 60 {
        GradeBand::D
    } else {
        GradeBand::F
    }
}

/// Age bracket: young at 25 or below, senior above.
pub fn age_bracket(age: i32) -> AgeBracket {
    if age <= 25 {
        AgeBracket::Young
    } else {
        AgeBracket::Senior
    }
}

/// Composite category for a student, always re-derived from the raw values.
pub fn category_of(student: &Student) -> Category {
    Category::new(
        grade_band(student.grade.value),
        age_bracket(student.age.value),
    )
}
