//! Form state: the 14-field student attribute record and its manager.
//!
//! `FormState` keeps its fields private so the every-field-in-domain
//! invariant holds no matter who drives the form: reads go through typed
//! accessors, mutation goes through `FormManager::set` only.

use std::str::FromStr;

use serde::Serialize;

use crate::error::FormError;
use crate::fields::{
    DietQuality, Field, FieldDomain, FieldValue, Gender, InternetQuality, ParentalEducation, YesNo,
};

/// The current values of the 14 student attribute inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    age: u8,
    gender: Gender,
    study_hours_per_day: f64,
    social_media_hours: f64,
    netflix_hours: f64,
    part_time_job: YesNo,
    attendance_percentage: f64,
    sleep_hours: f64,
    diet_quality: DietQuality,
    exercise_frequency: u8,
    parental_education_level: ParentalEducation,
    internet_quality: InternetQuality,
    mental_health_rating: u8,
    extracurricular_participation: YesNo,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            age: 20,
            gender: Gender::Female,
            study_hours_per_day: 3.0,
            social_media_hours: 2.0,
            netflix_hours: 1.0,
            part_time_job: YesNo::No,
            attendance_percentage: 90.0,
            sleep_hours: 7.0,
            diet_quality: DietQuality::Good,
            exercise_frequency: 3,
            parental_education_level: ParentalEducation::HighSchool,
            internet_quality: InternetQuality::Good,
            mental_health_rating: 5,
            extracurricular_participation: YesNo::Yes,
        }
    }
}

impl FormState {
    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn study_hours_per_day(&self) -> f64 {
        self.study_hours_per_day
    }

    pub fn social_media_hours(&self) -> f64 {
        self.social_media_hours
    }

    pub fn netflix_hours(&self) -> f64 {
        self.netflix_hours
    }

    pub fn part_time_job(&self) -> YesNo {
        self.part_time_job
    }

    pub fn attendance_percentage(&self) -> f64 {
        self.attendance_percentage
    }

    pub fn sleep_hours(&self) -> f64 {
        self.sleep_hours
    }

    pub fn diet_quality(&self) -> DietQuality {
        self.diet_quality
    }

    pub fn exercise_frequency(&self) -> u8 {
        self.exercise_frequency
    }

    pub fn parental_education_level(&self) -> ParentalEducation {
        self.parental_education_level
    }

    pub fn internet_quality(&self) -> InternetQuality {
        self.internet_quality
    }

    pub fn mental_health_rating(&self) -> u8 {
        self.mental_health_rating
    }

    pub fn extracurricular_participation(&self) -> YesNo {
        self.extracurricular_participation
    }

    /// The current value of `field`, as a dynamic `FieldValue`.
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Age => FieldValue::Int(self.age as i64),
            Field::Gender => FieldValue::Choice(self.gender.to_string()),
            Field::StudyHoursPerDay => FieldValue::Float(self.study_hours_per_day),
            Field::SocialMediaHours => FieldValue::Float(self.social_media_hours),
            Field::NetflixHours => FieldValue::Float(self.netflix_hours),
            Field::PartTimeJob => FieldValue::Choice(self.part_time_job.to_string()),
            Field::AttendancePercentage => FieldValue::Float(self.attendance_percentage),
            Field::SleepHours => FieldValue::Float(self.sleep_hours),
            Field::DietQuality => FieldValue::Choice(self.diet_quality.to_string()),
            Field::ExerciseFrequency => FieldValue::Int(self.exercise_frequency as i64),
            Field::ParentalEducationLevel => {
                FieldValue::Choice(self.parental_education_level.to_string())
            }
            Field::InternetQuality => FieldValue::Choice(self.internet_quality.to_string()),
            Field::MentalHealthRating => FieldValue::Int(self.mental_health_rating as i64),
            Field::ExtracurricularParticipation => {
                FieldValue::Choice(self.extracurricular_participation.to_string())
            }
        }
    }
}

/// Owns the session's `FormState` and guards every mutation.
///
/// The session owner constructs one manager and threads it through the
/// interaction loop; there is no ambient global state.
#[derive(Debug, Clone, Default)]
pub struct FormManager {
    state: FormState,
}

impl FormManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Replace a single field after validating the value against the
    /// field's domain. On rejection the state is unchanged.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        match field {
            Field::Age => self.state.age = int_value(field, &value)? as u8,
            Field::Gender => self.state.gender = choice_value(field, &value)?,
            Field::StudyHoursPerDay => {
                self.state.study_hours_per_day = float_value(field, &value)?
            }
            Field::SocialMediaHours => self.state.social_media_hours = float_value(field, &value)?,
            Field::NetflixHours => self.state.netflix_hours = float_value(field, &value)?,
            Field::PartTimeJob => self.state.part_time_job = choice_value(field, &value)?,
            Field::AttendancePercentage => {
                self.state.attendance_percentage = float_value(field, &value)?
            }
            Field::SleepHours => self.state.sleep_hours = float_value(field, &value)?,
            Field::DietQuality => self.state.diet_quality = choice_value(field, &value)?,
            Field::ExerciseFrequency => {
                self.state.exercise_frequency = int_value(field, &value)? as u8
            }
            Field::ParentalEducationLevel => {
                self.state.parental_education_level = choice_value(field, &value)?
            }
            Field::InternetQuality => self.state.internet_quality = choice_value(field, &value)?,
            Field::MentalHealthRating => {
                self.state.mental_health_rating = int_value(field, &value)? as u8
            }
            Field::ExtracurricularParticipation => {
                self.state.extracurricular_participation = choice_value(field, &value)?
            }
        }
        Ok(())
    }

    /// Replace the entire state with the default record. Total.
    pub fn reset(&mut self) {
        self.state = FormState::default();
    }
}

fn invalid(field: Field, value: &FieldValue) -> FormError {
    FormError::InvalidFieldValue {
        field,
        value: value.clone(),
        domain: field.domain(),
    }
}

fn int_value(field: Field, value: &FieldValue) -> Result<i64, FormError> {
    match (field.domain(), value) {
        (FieldDomain::IntRange { min, max }, FieldValue::Int(v)) if (min..=max).contains(v) => {
            Ok(*v)
        }
        _ => Err(invalid(field, value)),
    }
}

fn float_value(field: Field, value: &FieldValue) -> Result<f64, FormError> {
    // an integer is accepted where a float is expected
    let candidate = match value {
        FieldValue::Float(v) => Some(*v),
        FieldValue::Int(v) => Some(*v as f64),
        FieldValue::Choice(_) => None,
    };
    match (field.domain(), candidate) {
        (FieldDomain::FloatRange { min, max }, Some(v)) if v >= min && v <= max => Ok(v),
        _ => Err(invalid(field, value)),
    }
}

fn choice_value<T: FromStr>(field: Field, value: &FieldValue) -> Result<T, FormError> {
    if let FieldValue::Choice(s) = value {
        if let Ok(parsed) = s.parse::<T>() {
            return Ok(parsed);
        }
    }
    Err(invalid(field, value))
}
