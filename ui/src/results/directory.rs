//! Display-ready student records derived from a [`RawResultsDocument`].

use crate::core::format::{
    format_fixed, format_posts, format_tenths, format_whole_percent, parse_or_zero, PLACEHOLDER,
};
use crate::results::document::{RawDimensions, RawRecommendation, RawResultsDocument, RawStudent};

/// Decimals used for match scores.
pub const SCORE_DECIMALS: usize = 2;
/// Decimals used for attribution contributions.
pub const ATTRIBUTION_DECIMALS: usize = 3;

/// Scoring weights per dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub style: f64,
    pub content: f64,
    pub difficulty: f64,
    pub engagement: f64,
}

impl Weights {
    /// Weights the export pipeline uses when it publishes none.
    pub const DEFAULT: Weights = Weights {
        style: 0.35,
        content: 0.25,
        difficulty: 0.20,
        engagement: 0.20,
    };

    /// Provided dimensions win; missing ones fall back to [`Weights::DEFAULT`].
    pub fn resolve(raw: Option<&RawDimensions>) -> Self {
        let Some(raw) = raw else {
            return Self::DEFAULT;
        };
        Self {
            style: raw.style.unwrap_or(Self::DEFAULT.style),
            content: raw.content.unwrap_or(Self::DEFAULT.content),
            difficulty: raw.difficulty.unwrap_or(Self::DEFAULT.difficulty),
            engagement: raw.engagement.unwrap_or(Self::DEFAULT.engagement),
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributions {
    pub style: String,
    pub content: String,
    pub difficulty: String,
    pub engagement: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecommendation {
    pub title: String,
    pub description: String,
    pub data_insight: Option<String>,
    pub overall_score: String,
    pub style_score: String,
    pub content_score: String,
    pub difficulty_score: String,
    pub engagement_score: String,
    pub attributions: Attributions,
}

impl DisplayRecommendation {
    pub fn from_raw(raw: &RawRecommendation, weights: &Weights) -> Self {
        let score = |value: Option<f64>| format_fixed(value.unwrap_or(0.0), SCORE_DECIMALS);

        let overall_score = score(raw.overall_score);
        let style_score = score(raw.style_score);
        let content_score = score(raw.content_score);
        let difficulty_score = score(raw.difficulty_score);
        let engagement_score = score(raw.engagement_score);

        // Computed contributions use the displayed (rounded) score.
        let provided = raw.attributions.as_ref();
        let attribution = |given: Option<f64>, weight: f64, shown: &str| {
            let value = given.unwrap_or_else(|| weight * parse_or_zero(shown));
            format_fixed(value, ATTRIBUTION_DECIMALS)
        };
        let attributions = Attributions {
            style: attribution(provided.and_then(|a| a.style), weights.style, &style_score),
            content: attribution(
                provided.and_then(|a| a.content),
                weights.content,
                &content_score,
            ),
            difficulty: attribution(
                provided.and_then(|a| a.difficulty),
                weights.difficulty,
                &difficulty_score,
            ),
            engagement: attribution(
                provided.and_then(|a| a.engagement),
                weights.engagement,
                &engagement_score,
            ),
        };

        Self {
            title: raw
                .title
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            description: raw.description.clone().unwrap_or_default(),
            data_insight: raw
                .data_insight
                .clone()
                .filter(|insight| !insight.trim().is_empty()),
            overall_score,
            style_score,
            content_score,
            difficulty_score,
            engagement_score,
            attributions,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayStudent {
    /// Sequential display key (`"1"..`).
    pub key: String,
    pub raw_id: String,
    /// Visible label, e.g. `Student S00001`.
    pub id: String,
    pub learning_style: String,
    pub education_level: String,
    pub quiz_score: String,
    pub assignment_rate: String,
    pub final_score: String,
    pub forum_participation: String,
    pub engagement_score: String,
    pub recommendations: Vec<DisplayRecommendation>,
    pub weights: Weights,
}

impl DisplayStudent {
    fn from_raw(
        key: String,
        raw_id: &str,
        raw: &RawStudent,
        weights: Weights,
        recommendations: Vec<DisplayRecommendation>,
    ) -> Self {
        let text = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(PLACEHOLDER)
                .to_string()
        };

        Self {
            key,
            raw_id: raw_id.to_string(),
            id: format!("Student {raw_id}"),
            learning_style: text(&raw.learning_style),
            education_level: text(&raw.education_level),
            quiz_score: format_whole_percent(raw.quiz_scores),
            assignment_rate: format_whole_percent(raw.assignment_completion_rate),
            final_score: format_whole_percent(raw.final_exam_score),
            forum_participation: format_posts(raw.forum_participation),
            engagement_score: format_tenths(raw.engagement_score),
            recommendations,
            weights,
        }
    }
}

/// Keyed, ordered collection of [`DisplayStudent`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentDirectory {
    students: Vec<DisplayStudent>,
}

impl StudentDirectory {
    /// Never fails: missing or malformed input degrades to placeholders and default weights.
    pub fn build(document: &RawResultsDocument) -> Self {
        // BTreeMap iteration is the lexicographic order of raw ids.
        let students = document
            .sample_students
            .iter()
            .enumerate()
            .map(|(index, (raw_id, raw))| {
                let set = document.sample_recommendations.get(raw_id);
                let weights = Weights::resolve(set.and_then(|s| s.weights.as_ref()));
                let recommendations = set
                    .map(|s| {
                        s.recommendations
                            .iter()
                            .map(|rec| DisplayRecommendation::from_raw(rec, &weights))
                            .collect()
                    })
                    .unwrap_or_default();
                DisplayStudent::from_raw(
                    (index + 1).to_string(),
                    raw_id,
                    raw,
                    weights,
                    recommendations,
                )
            })
            .collect();

        Self { students }
    }

    pub fn get(&self, key: &str) -> Option<&DisplayStudent> {
        self.students.iter().find(|student| student.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn first_key(&self) -> Option<&str> {
        self.students.first().map(|student| student.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayStudent> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> RawResultsDocument {
        serde_json::from_value(value).expect("document parses")
    }

    #[test]
    fn keys_follow_lexicographic_raw_order() {
        let doc = document(json!({
            "sample_students": { "S10": {}, "S2": {}, "S1": {} }
        }));
        let directory = StudentDirectory::build(&doc);
        let pairs: Vec<(&str, &str)> = directory
            .iter()
            .map(|s| (s.key.as_str(), s.raw_id.as_str()))
            .collect();
        assert_eq!(pairs, vec![("1", "S1"), ("2", "S10"), ("3", "S2")]);
        assert_eq!(directory.first_key(), Some("1"));
    }

    #[test]
    fn missing_recommendation_numbers_become_zero() {
        let rec = DisplayRecommendation::from_raw(&RawRecommendation::default(), &Weights::DEFAULT);
        assert_eq!(rec.title, PLACEHOLDER);
        assert_eq!(rec.description, "");
        assert_eq!(rec.overall_score, "0.00");
        assert_eq!(rec.engagement_score, "0.00");
        assert_eq!(rec.attributions.style, "0.000");
    }

    #[test]
    fn computed_attribution_uses_displayed_score() {
        let raw = RawRecommendation {
            difficulty_score: Some(0.6349),
            ..Default::default()
        };
        let rec = DisplayRecommendation::from_raw(&raw, &Weights::DEFAULT);
        assert_eq!(rec.difficulty_score, "0.63");
        // 0.20 * 0.63, not 0.20 * 0.6349
        assert_eq!(rec.attributions.difficulty, "0.126");
    }

    #[test]
    fn provided_attributions_are_echoed_per_dimension() {
        let raw = RawRecommendation {
            content_score: Some(0.5),
            attributions: Some(RawDimensions {
                style: Some(0.2188),
                ..Default::default()
            }),
            ..Default::default()
        };
        let rec = DisplayRecommendation::from_raw(&raw, &Weights::DEFAULT);
        assert_eq!(rec.attributions.style, "0.219");
        assert_eq!(rec.attributions.content, "0.125");
    }

    #[test]
    fn partial_weights_fall_back_per_dimension() {
        let weights = Weights::resolve(Some(&RawDimensions {
            style: Some(0.5),
            ..Default::default()
        }));
        assert_eq!(weights.style, 0.5);
        assert_eq!(weights.content, 0.25);
        assert_eq!(Weights::resolve(None), Weights::DEFAULT);
    }
}
