//! Raw shape of the exported `results.json`.
//!
//! The schema belongs to the export pipeline and every field is optional from
//! our side. Fields use lenient deserializers: a value of the wrong JSON type
//! degrades to its default instead of rejecting the whole document.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawResultsDocument {
    /// Keyed by raw student identifier; `BTreeMap` keeps lexicographic key order.
    #[serde(default, deserialize_with = "lenient_map")]
    pub sample_students: BTreeMap<String, RawStudent>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub sample_recommendations: BTreeMap<String, RawRecommendationSet>,
    #[serde(default, deserialize_with = "lenient")]
    pub stats: Option<RawStats>,
    #[serde(default, deserialize_with = "lenient")]
    pub dropout_cv: Option<RawDropoutCv>,
    #[serde(default, deserialize_with = "lenient")]
    pub top_learning_style: Option<RawTopLearningStyle>,
    #[serde(default, deserialize_with = "lenient")]
    pub correlations: Option<RawCorrelations>,
    #[serde(default, deserialize_with = "lenient")]
    pub validation: Option<RawValidation>,
    #[serde(default, deserialize_with = "lenient")]
    pub diagnostics: Option<RawDiagnostics>,
}

/// One sample profile. The record's own `Student_ID` repeats the map key and is not read.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawStudent {
    #[serde(rename = "Learning_Style", default, deserialize_with = "lenient_text")]
    pub learning_style: Option<String>,
    #[serde(rename = "Education_Level", default, deserialize_with = "lenient_text")]
    pub education_level: Option<String>,
    #[serde(rename = "Quiz_Scores", default, deserialize_with = "lenient_number")]
    pub quiz_scores: Option<f64>,
    #[serde(
        rename = "Assignment_Completion_Rate",
        default,
        deserialize_with = "lenient_number"
    )]
    pub assignment_completion_rate: Option<f64>,
    #[serde(rename = "Final_Exam_Score", default, deserialize_with = "lenient_number")]
    pub final_exam_score: Option<f64>,
    #[serde(rename = "Forum_Participation", default, deserialize_with = "lenient_number")]
    pub forum_participation: Option<f64>,
    #[serde(rename = "Engagement_Score", default, deserialize_with = "lenient_number")]
    pub engagement_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawRecommendationSet {
    #[serde(default, deserialize_with = "lenient")]
    pub weights: Option<RawDimensions>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub recommendations: Vec<RawRecommendation>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawRecommendation {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub data_insight: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub overall_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub style_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub content_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub difficulty_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub engagement_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub attributions: Option<RawDimensions>,
}

/// Per-dimension numbers, used for both weights and attributions.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawDimensions {
    #[serde(default, deserialize_with = "lenient_number")]
    pub style: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub content: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub difficulty: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub engagement: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawStats {
    #[serde(default, deserialize_with = "lenient_number")]
    pub dataset_size: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub num_students: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub num_courses: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub num_learning_styles: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawDropoutCv {
    #[serde(default, deserialize_with = "lenient_number")]
    pub accuracy_mean: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub accuracy_std: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub roc_auc_mean: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub roc_auc_std: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pr_auc_mean: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pr_auc_std: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub folds: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub class_distribution: Option<RawClassDistribution>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub warning: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawClassDistribution {
    #[serde(default, deserialize_with = "lenient_number")]
    pub positive: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawTopLearningStyle {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pct: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawCorrelations {
    #[serde(default, deserialize_with = "lenient")]
    pub engagement_vs_final: Option<RawCorrelationPair>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawCorrelationPair {
    #[serde(default, deserialize_with = "lenient_number")]
    pub pearson: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub spearman: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawValidation {
    /// Issue payloads vary by kind; only their count is displayed.
    #[serde(default, deserialize_with = "lenient")]
    pub issues: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub duplicate_ratio: Option<f64>,
}

/// Audit tables the pipeline exports next to the summary.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawDiagnostics {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub course_style_means: Vec<RawCourseStyleMean>,
}

/// Mean scores of one course × learning-style group.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawCourseStyleMean {
    #[serde(rename = "Course_Name", default, deserialize_with = "lenient_text")]
    pub course_name: Option<String>,
    #[serde(rename = "Learning_Style", default, deserialize_with = "lenient_text")]
    pub learning_style: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub mean_final: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub mean_quiz: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub mean_assign: Option<f64>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Per-entry leniency: one broken record must not drop its siblings.
fn lenient_map<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(entries) = value else {
        return Ok(BTreeMap::new());
    };
    Ok(entries
        .into_iter()
        .map(|(key, entry)| (key, serde_json::from_value(entry).unwrap_or_default()))
        .collect())
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

/// Accepts JSON numbers and numeric strings; anything else is absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}
