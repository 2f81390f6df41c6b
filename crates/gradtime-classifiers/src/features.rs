//! The feature record a prediction is made from.
//!
//! The classifier artifact was trained on five numeric columns in a fixed
//! order; `FEATURE_NAMES` pins that order and `FeatureRecord::to_row` emits
//! it. Reordering the columns requires retraining the model.
use serde::{Deserialize, Serialize};

/// Column names in training order. Index i of `FeatureRecord::to_row`
/// corresponds to `FEATURE_NAMES[i]`.
pub const FEATURE_NAMES: [&str; 5] = [
    "ACT composite score",
    "SAT total score",
    "high school gpa",
    "parental income",
    "parent_edu_numerical",
];

/// One student's inputs, assembled fresh per prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub act_score: f32,
    pub sat_score: f32,
    pub high_school_gpa: f32,
    pub parental_income: f32,
    pub parent_education_level: f32,
}

impl FeatureRecord {
    /// Feature vector in the training column order of `FEATURE_NAMES`.
    pub fn to_row(&self) -> Vec<f32> {
        vec![
            self.act_score,
            self.sat_score,
            self.high_school_gpa,
            self.parental_income,
            self.parent_education_level,
        ]
    }
}

/// Bounds and default for one form field, enforced at the input layer.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    pub min: f32,
    pub max: Option<f32>,
    pub default: f32,
}

impl FieldSpec {
    /// Whether a value is inside the field's inclusive bounds.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

pub const ACT_SCORE: FieldSpec = FieldSpec {
    label: "ACT composite score",
    min: 0.0,
    max: Some(36.0),
    default: 25.0,
};

pub const SAT_SCORE: FieldSpec = FieldSpec {
    label: "SAT total score",
    min: 0.0,
    max: Some(1600.0),
    default: 1200.0,
};

pub const HIGH_SCHOOL_GPA: FieldSpec = FieldSpec {
    label: "High school GPA",
    min: 0.0,
    max: Some(4.0),
    default: 3.0,
};

pub const PARENTAL_INCOME: FieldSpec = FieldSpec {
    label: "Parental income (USD)",
    min: 0.0,
    max: None,
    default: 50000.0,
};

pub const PARENT_EDUCATION: FieldSpec = FieldSpec {
    label: "Parent education level (ordinal, e.g. 0-5)",
    min: 0.0,
    max: None,
    default: 3.0,
};
