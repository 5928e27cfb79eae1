//! Field catalog for the student attribute form.
//!
//! Every input the form collects is described here: the categorical
//! domains as dedicated enums, the `Field` name enum for dynamic access,
//! and the `FieldDomain` descriptions used for validation messages.
//! The `Display` output of each categorical enum is the exact encoding
//! string the model artifact was trained against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Student gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// Admissible encoding strings, in display order.
    pub const OPTIONS: [&'static str; 3] = ["Female", "Male", "Other"];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => write!(f, "Female"),
            Gender::Male => write!(f, "Male"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            "other" => Ok(Gender::Other),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// A yes/no answer, encoded as "Yes"/"No" on the wire.
///
/// Used by both `part_time_job` and `extracurricular_participation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const OPTIONS: [&'static str; 2] = ["Yes", "No"];
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YesNo::Yes => write!(f, "Yes"),
            YesNo::No => write!(f, "No"),
        }
    }
}

impl FromStr for YesNo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" | "y" => Ok(YesNo::Yes),
            "no" | "n" => Ok(YesNo::No),
            other => Err(format!("expected yes or no, got: {other}")),
        }
    }
}

/// Self-reported diet quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietQuality {
    Good,
    Fair,
    Poor,
}

impl DietQuality {
    pub const OPTIONS: [&'static str; 3] = ["Good", "Fair", "Poor"];
}

impl fmt::Display for DietQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietQuality::Good => write!(f, "Good"),
            DietQuality::Fair => write!(f, "Fair"),
            DietQuality::Poor => write!(f, "Poor"),
        }
    }
}

impl FromStr for DietQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" => Ok(DietQuality::Good),
            "fair" => Ok(DietQuality::Fair),
            "poor" => Ok(DietQuality::Poor),
            other => Err(format!("unknown diet quality: {other}")),
        }
    }
}

/// Highest education level attained by the student's parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParentalEducation {
    #[serde(rename = "High School")]
    HighSchool,
    Master,
    Bachelor,
    #[serde(rename = "PhD")]
    Phd,
    Associate,
}

impl ParentalEducation {
    pub const OPTIONS: [&'static str; 5] =
        ["High School", "Master", "Bachelor", "PhD", "Associate"];
}

impl fmt::Display for ParentalEducation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentalEducation::HighSchool => write!(f, "High School"),
            ParentalEducation::Master => write!(f, "Master"),
            ParentalEducation::Bachelor => write!(f, "Bachelor"),
            ParentalEducation::Phd => write!(f, "PhD"),
            ParentalEducation::Associate => write!(f, "Associate"),
        }
    }
}

impl FromStr for ParentalEducation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high school" | "highschool" => Ok(ParentalEducation::HighSchool),
            "master" => Ok(ParentalEducation::Master),
            "bachelor" => Ok(ParentalEducation::Bachelor),
            "phd" => Ok(ParentalEducation::Phd),
            "associate" => Ok(ParentalEducation::Associate),
            other => Err(format!("unknown education level: {other}")),
        }
    }
}

/// Quality of the student's internet connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternetQuality {
    Good,
    Average,
    Poor,
}

impl InternetQuality {
    pub const OPTIONS: [&'static str; 3] = ["Good", "Average", "Poor"];
}

impl fmt::Display for InternetQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternetQuality::Good => write!(f, "Good"),
            InternetQuality::Average => write!(f, "Average"),
            InternetQuality::Poor => write!(f, "Poor"),
        }
    }
}

impl FromStr for InternetQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" => Ok(InternetQuality::Good),
            "average" => Ok(InternetQuality::Average),
            "poor" => Ok(InternetQuality::Poor),
            other => Err(format!("unknown internet quality: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Field names and domains
// ---------------------------------------------------------------------------

/// The 14 form fields, in schema column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Age,
    Gender,
    StudyHoursPerDay,
    SocialMediaHours,
    NetflixHours,
    PartTimeJob,
    AttendancePercentage,
    SleepHours,
    DietQuality,
    ExerciseFrequency,
    ParentalEducationLevel,
    InternetQuality,
    MentalHealthRating,
    ExtracurricularParticipation,
}

impl Field {
    /// All fields in schema column order.
    pub const ALL: [Field; 14] = [
        Field::Age,
        Field::Gender,
        Field::StudyHoursPerDay,
        Field::SocialMediaHours,
        Field::NetflixHours,
        Field::PartTimeJob,
        Field::AttendancePercentage,
        Field::SleepHours,
        Field::DietQuality,
        Field::ExerciseFrequency,
        Field::ParentalEducationLevel,
        Field::InternetQuality,
        Field::MentalHealthRating,
        Field::ExtracurricularParticipation,
    ];

    /// The snake_case column name the model artifact was trained against.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Gender => "gender",
            Field::StudyHoursPerDay => "study_hours_per_day",
            Field::SocialMediaHours => "social_media_hours",
            Field::NetflixHours => "netflix_hours",
            Field::PartTimeJob => "part_time_job",
            Field::AttendancePercentage => "attendance_percentage",
            Field::SleepHours => "sleep_hours",
            Field::DietQuality => "diet_quality",
            Field::ExerciseFrequency => "exercise_frequency",
            Field::ParentalEducationLevel => "parental_education_level",
            Field::InternetQuality => "internet_quality",
            Field::MentalHealthRating => "mental_health_rating",
            Field::ExtracurricularParticipation => "extracurricular_participation",
        }
    }

    /// The admissible values for this field.
    pub fn domain(&self) -> FieldDomain {
        match self {
            Field::Age => FieldDomain::IntRange { min: 18, max: 25 },
            Field::Gender => FieldDomain::OneOf(&Gender::OPTIONS),
            Field::StudyHoursPerDay => FieldDomain::FloatRange {
                min: 0.0,
                max: 24.0,
            },
            Field::SocialMediaHours => FieldDomain::FloatRange {
                min: 0.0,
                max: 10.0,
            },
            Field::NetflixHours => FieldDomain::FloatRange {
                min: 0.0,
                max: 10.0,
            },
            Field::PartTimeJob => FieldDomain::OneOf(&YesNo::OPTIONS),
            Field::AttendancePercentage => FieldDomain::FloatRange {
                min: 0.0,
                max: 100.0,
            },
            Field::SleepHours => FieldDomain::FloatRange {
                min: 0.0,
                max: 12.0,
            },
            Field::DietQuality => FieldDomain::OneOf(&DietQuality::OPTIONS),
            Field::ExerciseFrequency => FieldDomain::IntRange { min: 0, max: 7 },
            Field::ParentalEducationLevel => FieldDomain::OneOf(&ParentalEducation::OPTIONS),
            Field::InternetQuality => FieldDomain::OneOf(&InternetQuality::OPTIONS),
            Field::MentalHealthRating => FieldDomain::IntRange { min: 1, max: 10 },
            Field::ExtracurricularParticipation => FieldDomain::OneOf(&YesNo::OPTIONS),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Field::ALL
            .iter()
            .find(|f| f.name() == lower)
            .copied()
            .ok_or_else(|| format!("unknown field: {s}"))
    }
}

/// Description of a field's admissible values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDomain {
    /// An inclusive integer range.
    IntRange { min: i64, max: i64 },
    /// An inclusive float range.
    FloatRange { min: f64, max: f64 },
    /// One of a fixed set of encoding strings.
    OneOf(&'static [&'static str]),
}

impl fmt::Display for FieldDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldDomain::IntRange { min, max } => write!(f, "integer in [{min}, {max}]"),
            FieldDomain::FloatRange { min, max } => write!(f, "number in [{min}, {max}]"),
            FieldDomain::OneOf(options) => write!(f, "one of {}", options.join(" | ")),
        }
    }
}

/// A dynamically supplied field value, as entered through the form surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Choice(String),
}

impl FieldValue {
    /// Parse a raw textual value according to `field`'s domain kind.
    ///
    /// Total: text that does not parse as the expected numeric kind is
    /// carried as `Choice` and rejected by `set` with the field's domain
    /// in the error message.
    pub fn parse_for(field: Field, raw: &str) -> FieldValue {
        let raw = raw.trim();
        match field.domain() {
            FieldDomain::IntRange { .. } => raw
                .parse::<i64>()
                .map(FieldValue::Int)
                .unwrap_or_else(|_| FieldValue::Choice(raw.to_string())),
            FieldDomain::FloatRange { .. } => raw
                .parse::<f64>()
                .map(FieldValue::Float)
                .unwrap_or_else(|_| FieldValue::Choice(raw.to_string())),
            FieldDomain::OneOf(_) => FieldValue::Choice(raw.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Choice(s) => write!(f, "{s}"),
        }
    }
}
