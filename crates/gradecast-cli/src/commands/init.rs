//! The `gradecast init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create gradecast.toml
    if std::path::Path::new("gradecast.toml").exists() {
        println!("gradecast.toml already exists, skipping.");
    } else {
        std::fs::write("gradecast.toml", SAMPLE_CONFIG)?;
        println!("Created gradecast.toml");
    }

    // Create a demo model artifact
    if std::path::Path::new("model.json").exists() {
        println!("model.json already exists, skipping.");
    } else {
        std::fs::write("model.json", DEMO_ARTIFACT)?;
        println!("Created model.json");
    }

    println!("\nNext steps:");
    println!("  1. Replace model.json with your trained artifact");
    println!("  2. Run: gradecast validate");
    println!("  3. Run: gradecast predict --set age=18 --set study_hours_per_day=5");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradecast configuration

model_path = "model.json"
score_decimals = 2
"#;

/// A demo linear pipeline covering every form column. The coefficients
/// are illustrative, not trained.
const DEMO_ARTIFACT: &str = r#"{
  "schema_version": 1,
  "name": "exam-score-linear-demo",
  "numeric": [
    {"column": "age", "mean": 20.5, "std_dev": 2.0, "coefficient": 0.3},
    {"column": "study_hours_per_day", "mean": 3.5, "std_dev": 1.5, "coefficient": 7.4},
    {"column": "social_media_hours", "mean": 2.5, "std_dev": 1.2, "coefficient": -1.4},
    {"column": "netflix_hours", "mean": 1.8, "std_dev": 1.1, "coefficient": -1.0},
    {"column": "attendance_percentage", "mean": 84.0, "std_dev": 9.4, "coefficient": 1.9},
    {"column": "sleep_hours", "mean": 6.5, "std_dev": 1.2, "coefficient": 1.6},
    {"column": "exercise_frequency", "mean": 3.0, "std_dev": 2.0, "coefficient": 1.2},
    {"column": "mental_health_rating", "mean": 5.5, "std_dev": 2.8, "coefficient": 1.8}
  ],
  "categorical": [
    {"column": "gender", "levels": [
      {"value": "Female", "coefficient": 0.2},
      {"value": "Male", "coefficient": -0.1},
      {"value": "Other", "coefficient": -0.1}
    ]},
    {"column": "part_time_job", "levels": [
      {"value": "Yes", "coefficient": -0.6},
      {"value": "No", "coefficient": 0.6}
    ]},
    {"column": "diet_quality", "levels": [
      {"value": "Good", "coefficient": 0.9},
      {"value": "Fair", "coefficient": 0.0},
      {"value": "Poor", "coefficient": -0.9}
    ]},
    {"column": "parental_education_level", "levels": [
      {"value": "High School", "coefficient": -0.4},
      {"value": "Associate", "coefficient": -0.1},
      {"value": "Bachelor", "coefficient": 0.1},
      {"value": "Master", "coefficient": 0.3},
      {"value": "PhD", "coefficient": 0.5}
    ]},
    {"column": "internet_quality", "levels": [
      {"value": "Good", "coefficient": 0.4},
      {"value": "Average", "coefficient": 0.0},
      {"value": "Poor", "coefficient": -0.5}
    ]},
    {"column": "extracurricular_participation", "levels": [
      {"value": "Yes", "coefficient": 0.2},
      {"value": "No", "coefficient": -0.2}
    ]}
  ],
  "intercept": 69.6
}
"#;
