use crate::core::types::{AgeFilter, GradeBand, GradeFilter, OutputFormat, SortOrder};
use crate::errors::{Error, Result};
use crate::select::criteria::SelectionCriteria;

/// Staged collection of the four selection fields, one validated token per
/// prompt. Invalid input leaves the stage unchanged so the caller re-prompts
/// with the same question; `back` handling lives in the menu flow.
#[derive(Debug, Clone, Default)]
pub struct SelectionPrompt {
    stage: SelectionStage,
    grade: Option<GradeFilter>,
    age: Option<AgeFilter>,
    format: Option<OutputFormat>,
    order: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum SelectionStage {
    #[default]
    Grade,
    Age,
    Format,
    Order,
}

impl SelectionPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt_text(&self) -> &'static str {
        match self.stage {
            SelectionStage::Grade => "Enter grade (A, B, C) or 'all': ",
            SelectionStage::Age => "Enter age category (senior, young) or 'all': ",
            SelectionStage::Format => "Enter output format (csv, json): ",
            SelectionStage::Order => "Enter sorting order (asc, desc): ",
        }
    }

    /// Consume one token. Returns the finished criteria after the last
    /// stage; an invalid token errors without advancing.
    pub fn feed(&mut self, input: &str) -> Result<Option<SelectionCriteria>> {
        match self.stage {
            SelectionStage::Grade => {
                self.grade = Some(GradeFilter::try_from(input)?);
                self.stage = SelectionStage::Age;
                Ok(None)
            }
            SelectionStage::Age => {
                self.age = Some(AgeFilter::try_from(input)?);
                self.stage = SelectionStage::Format;
                Ok(None)
            }
            SelectionStage::Format => {
                self.format = Some(OutputFormat::try_from(input)?);
                self.stage = SelectionStage::Order;
                Ok(None)
            }
            SelectionStage::Order => {
                let order = SortOrder::try_from(input)?;
                self.order = Some(order);
                Ok(Some(SelectionCriteria {
                    grade: self.grade.expect("grade collected before order"),
                    age: self.age.expect("age collected before order"),
                    format: self.format.expect("format collected before order"),
                    order,
                }))
            }
        }
    }
}

/// The grade view only offers the bands the selection side knows about.
pub fn parse_view_band(input: &str) -> Result<GradeBand> {
    let band = GradeBand::try_from(input)?;
    match band {
        GradeBand::A | GradeBand::B | GradeBand::C => Ok(band),
        _ => Err(Error::parse(
            "Invalid grade selection. Viewable grades: A, B, C",
        )),
    }
}
