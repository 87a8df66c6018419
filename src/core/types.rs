use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Letter bucket a numeric grade classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum GradeBand {
    #[strum(serialize = "A", to_string = "A")]
    A,
    #[strum(serialize = "B", to_string = "B")]
    B,
    #[strum(serialize = "C", to_string = "C")]
    C,
    #[strum(serialize = "D", to_string = "D")]
    D,
    #[strum(serialize = "F", to_string = "F")]
    F,
}

impl GradeBand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid grade band: '{}'. Valid bands: {}",
                s.trim(),
                valid_csv::<GradeBand>()
            ))
        })
    }
}

/// Age classification: young (25 and under) or senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum AgeBracket {
    #[strum(serialize = "young", to_string = "young")]
    Young,
    #[strum(serialize = "senior", to_string = "senior")]
    Senior,
}

impl AgeBracket {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid age bracket: '{}'. Valid brackets: {}",
                s.trim(),
                valid_csv::<AgeBracket>()
            ))
        })
    }
}

/// Composite classification: one grade band plus one age bracket.
///
/// Rendered as `"A_young"`; many students share a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    pub band: GradeBand,
    pub bracket: AgeBracket,
}

impl Category {
    pub fn new(band: GradeBand, bracket: AgeBracket) -> Self {
        Self { band, bracket }
    }

    pub fn key(&self) -> String {
        format!("{}_{}", self.band, self.bracket)
    }

    /// Split a `"A_young"` style key back into its two components.
    pub fn try_from_key(key: &str) -> Result<Self> {
        let (band, bracket) = key.split_once('_').ok_or_else(|| {
            Error::Parse(format!(
                "Invalid category key: '{key}'. Expected '<band>_<bracket>'."
            ))
        })?;
        Ok(Self {
            band: GradeBand::try_from(band)?,
            bracket: AgeBracket::try_from(bracket)?,
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.band, self.bracket)
    }
}

/// Grade side of the selection criteria. Only A-C are selectable, matching
/// the original tool; D and F buckets are reachable through `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum GradeFilter {
    #[strum(serialize = "A", to_string = "A")]
    A,
    #[strum(serialize = "B", to_string = "B")]
    B,
    #[strum(serialize = "C", to_string = "C")]
    C,
    #[strum(serialize = "all", to_string = "all")]
    All,
}

impl GradeFilter {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid input. Please enter one of: {}",
                valid_csv::<GradeFilter>()
            ))
        })
    }

    fn band(&self) -> Option<GradeBand> {
        match self {
            GradeFilter::A => Some(GradeBand::A),
            GradeFilter::B => Some(GradeBand::B),
            GradeFilter::C => Some(GradeBand::C),
            GradeFilter::All => None,
        }
    }

    pub fn matches(&self, band: GradeBand) -> bool {
        self.band().is_none_or(|b| b == band)
    }
}

/// Age side of the selection criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum AgeFilter {
    #[strum(serialize = "senior", to_string = "senior")]
    Senior,
    #[strum(serialize = "young", to_string = "young")]
    Young,
    #[strum(serialize = "all", to_string = "all")]
    All,
}

impl AgeFilter {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid input. Please enter one of: {}",
                valid_csv::<AgeFilter>()
            ))
        })
    }

    fn bracket(&self) -> Option<AgeBracket> {
        match self {
            AgeFilter::Senior => Some(AgeBracket::Senior),
            AgeFilter::Young => Some(AgeBracket::Young),
            AgeFilter::All => None,
        }
    }

    pub fn matches(&self, bracket: AgeBracket) -> bool {
        self.bracket().is_none_or(|b| b == bracket)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum OutputFormat {
    #[strum(serialize = "csv", to_string = "csv")]
    Csv,
    #[strum(serialize = "json", to_string = "json")]
    Json,
}

impl OutputFormat {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid input. Please enter one of: {}",
                valid_csv::<OutputFormat>()
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SortOrder {
    #[strum(serialize = "asc", to_string = "asc")]
    Asc,
    #[strum(serialize = "desc", to_string = "desc")]
    Desc,
}

impl SortOrder {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid input. Please enter one of: {}",
                valid_csv::<SortOrder>()
            ))
        })
    }
}

/// How the ranking pass compares the age/grade fields.
///
/// `lexicographic` compares the textual form exactly as the original tool
/// did ("9" sorts after "89"); `numeric` compares the parsed values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortKeyMode {
    #[strum(serialize = "lexicographic", to_string = "lexicographic")]
    Lexicographic,
    #[strum(serialize = "numeric", to_string = "numeric")]
    Numeric,
}

impl SortKeyMode {
    pub fn help(&self) -> &'static str {
        match self {
            SortKeyMode::Lexicographic => {
                "Compare age and grade as text, matching the legacy ordering."
            }
            SortKeyMode::Numeric => "Compare age and grade by numeric value.",
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid sort key mode: '{}'. Valid modes: {}",
                s.trim(),
                valid_csv::<SortKeyMode>()
            ))
        })
    }
}

/// Header row written by the CSV exporter.
///
/// `legacy` reproduces the original tool's header, whose column names do not
/// match the values written beneath them (`number` over `id` values).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CsvHeaderStyle {
    #[strum(serialize = "legacy", to_string = "legacy")]
    Legacy,
    #[strum(serialize = "aligned", to_string = "aligned")]
    Aligned,
}

impl CsvHeaderStyle {
    pub fn help(&self) -> &'static str {
        match self {
            CsvHeaderStyle::Legacy => "Write the legacy 'number,name,age,grade' header.",
            CsvHeaderStyle::Aligned => "Write a header that matches the row fields.",
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid CSV header style: '{}'. Valid styles: {}",
                s.trim(),
                valid_csv::<CsvHeaderStyle>()
            ))
        })
    }

    pub fn columns(&self) -> [&'static str; 4] {
        match self {
            CsvHeaderStyle::Legacy => ["number", "name", "age", "grade"],
            CsvHeaderStyle::Aligned => ["id", "name", "age", "grade"],
        }
    }
}

/// Integer field kept in its original textual form.
///
/// The text is what gets displayed, serialized, and (by default) sorted on;
/// the parsed value drives classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericField {
    pub text: String,
    pub value: i32,
}

impl NumericField {
    pub fn try_from_str(s: &str) -> Result<Self> {
        let text = s.trim().to_string();
        let value = text
            .parse::<i32>()
            .map_err(|_| Error::Parse(format!("Invalid integer value: '{text}'.")))?;
        Ok(Self { text, value })
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for NumericField {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for NumericField {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<NumericField, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        NumericField::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Boolean with the capitalized textual form the config file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s) {
            Ok(BoolFormat::TextTrue) => Ok(Bool(true)),
            Ok(BoolFormat::TextFalse) => Ok(Bool(false)),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
