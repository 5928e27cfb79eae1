//! The single-row record handed to the predictor capability.
//!
//! Column names and value encodings here are an external contract: they
//! must match the model artifact's training-time schema exactly, with
//! numerics as numbers and categoricals as their encoding strings.

use serde::{Deserialize, Serialize};

use crate::form::FormState;

/// One observation in the shape the external predictor expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub age: i64,
    pub gender: String,
    pub study_hours_per_day: f64,
    pub social_media_hours: f64,
    pub netflix_hours: f64,
    pub part_time_job: String,
    pub attendance_percentage: f64,
    pub sleep_hours: f64,
    pub diet_quality: String,
    pub exercise_frequency: i64,
    pub parental_education_level: String,
    pub internet_quality: String,
    pub mental_health_rating: i64,
    pub extracurricular_participation: String,
}

impl FeatureRow {
    /// Schema column names, in training order.
    pub const COLUMNS: [&'static str; 14] = [
        "age",
        "gender",
        "study_hours_per_day",
        "social_media_hours",
        "netflix_hours",
        "part_time_job",
        "attendance_percentage",
        "sleep_hours",
        "diet_quality",
        "exercise_frequency",
        "parental_education_level",
        "internet_quality",
        "mental_health_rating",
        "extracurricular_participation",
    ];

    /// The numeric value of `column`, if it is a numeric column.
    ///
    /// Integer columns are widened to `f64` so a predictor can consume
    /// every numeric column uniformly.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "age" => Some(self.age as f64),
            "study_hours_per_day" => Some(self.study_hours_per_day),
            "social_media_hours" => Some(self.social_media_hours),
            "netflix_hours" => Some(self.netflix_hours),
            "attendance_percentage" => Some(self.attendance_percentage),
            "sleep_hours" => Some(self.sleep_hours),
            "exercise_frequency" => Some(self.exercise_frequency as f64),
            "mental_health_rating" => Some(self.mental_health_rating as f64),
            _ => None,
        }
    }

    /// The encoding string of `column`, if it is a categorical column.
    pub fn categorical(&self, column: &str) -> Option<&str> {
        match column {
            "gender" => Some(&self.gender),
            "part_time_job" => Some(&self.part_time_job),
            "diet_quality" => Some(&self.diet_quality),
            "parental_education_level" => Some(&self.parental_education_level),
            "internet_quality" => Some(&self.internet_quality),
            "extracurricular_participation" => Some(&self.extracurricular_participation),
            _ => None,
        }
    }
}

/// The explicit, total mapping from form state to the wire row.
impl From<&FormState> for FeatureRow {
    fn from(state: &FormState) -> Self {
        Self {
            age: state.age() as i64,
            gender: state.gender().to_string(),
            study_hours_per_day: state.study_hours_per_day(),
            social_media_hours: state.social_media_hours(),
            netflix_hours: state.netflix_hours(),
            part_time_job: state.part_time_job().to_string(),
            attendance_percentage: state.attendance_percentage(),
            sleep_hours: state.sleep_hours(),
            diet_quality: state.diet_quality().to_string(),
            exercise_frequency: state.exercise_frequency() as i64,
            parental_education_level: state.parental_education_level().to_string(),
            internet_quality: state.internet_quality().to_string(),
            mental_health_rating: state.mental_health_rating() as i64,
            extracurricular_participation: state.extracurricular_participation().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;

    #[test]
    fn column_names_match_field_catalog() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, FeatureRow::COLUMNS);
    }

    #[test]
    fn default_state_encodes_exactly() {
        let row = FeatureRow::from(&FormState::default());
        let json = serde_json::to_value(&row).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        let mut expected = FeatureRow::COLUMNS.to_vec();
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);

        assert_eq!(object["age"], 20);
        assert_eq!(object["gender"], "Female");
        assert_eq!(object["study_hours_per_day"], 3.0);
        assert_eq!(object["part_time_job"], "No");
        assert_eq!(object["attendance_percentage"], 90.0);
        assert_eq!(object["diet_quality"], "Good");
        assert_eq!(object["parental_education_level"], "High School");
        assert_eq!(object["mental_health_rating"], 5);
        assert_eq!(object["extracurricular_participation"], "Yes");
    }

    #[test]
    fn every_column_is_numeric_or_categorical() {
        let row = FeatureRow::from(&FormState::default());
        for column in FeatureRow::COLUMNS {
            let covered = row.numeric(column).is_some() || row.categorical(column).is_some();
            assert!(covered, "{column} has no accessor");
        }
        assert!(row.numeric("gender").is_none());
        assert!(row.categorical("age").is_none());
        assert!(row.numeric("grade").is_none());
    }

    #[test]
    fn integer_columns_widen_to_float() {
        let row = FeatureRow::from(&FormState::default());
        assert_eq!(row.numeric("age"), Some(20.0));
        assert_eq!(row.numeric("exercise_frequency"), Some(3.0));
    }
}
