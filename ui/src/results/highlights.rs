use dioxus::prelude::*;

use crate::{
    core::format::{self, PLACEHOLDER},
    results::document::RawResultsDocument,
};

/// Summary regions of the overview page, each bound to one aggregate of the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricField {
    DatasetSize,
    StudentCount,
    CourseCount,
    LearningStyleCount,
    TopLearningStyle,
    TopLearningStyleShare,
    DropoutAccuracy,
    AccuracySpread,
    RocAuc,
    RocAucSpread,
    PrAuc,
    PrAucSpread,
    DropoutRate,
    CvFolds,
    EngagementPearson,
    EngagementSpearman,
    ValidationIssues,
    DuplicateRatio,
}

impl MetricField {
    pub const ALL: [MetricField; 18] = [
        MetricField::DatasetSize,
        MetricField::StudentCount,
        MetricField::CourseCount,
        MetricField::LearningStyleCount,
        MetricField::TopLearningStyle,
        MetricField::TopLearningStyleShare,
        MetricField::DropoutAccuracy,
        MetricField::AccuracySpread,
        MetricField::RocAuc,
        MetricField::RocAucSpread,
        MetricField::PrAuc,
        MetricField::PrAucSpread,
        MetricField::DropoutRate,
        MetricField::CvFolds,
        MetricField::EngagementPearson,
        MetricField::EngagementSpearman,
        MetricField::ValidationIssues,
        MetricField::DuplicateRatio,
    ];

    /// Value shown when the export omits this aggregate.
    pub fn fallback(self) -> &'static str {
        match self {
            MetricField::DropoutAccuracy => "80.4%",
            MetricField::DropoutRate => "19.6%",
            MetricField::CvFolds => "5",
            _ => PLACEHOLDER,
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            MetricField::DatasetSize => "dataset-size",
            MetricField::StudentCount => "student-count",
            MetricField::CourseCount => "course-count",
            MetricField::LearningStyleCount => "learning-style-count",
            MetricField::TopLearningStyle => "top-learning-style",
            MetricField::TopLearningStyleShare => "top-learning-style-pct",
            MetricField::DropoutAccuracy => "dropout-accuracy",
            MetricField::AccuracySpread => "dropout-accuracy-std",
            MetricField::RocAuc => "dropout-roc-auc",
            MetricField::RocAucSpread => "dropout-roc-auc-std",
            MetricField::PrAuc => "dropout-pr-auc",
            MetricField::PrAucSpread => "dropout-pr-auc-std",
            MetricField::DropoutRate => "dropout-rate",
            MetricField::CvFolds => "cv-folds",
            MetricField::EngagementPearson => "engagement-pearson",
            MetricField::EngagementSpearman => "engagement-spearman",
            MetricField::ValidationIssues => "validation-issues",
            MetricField::DuplicateRatio => "duplicate-ratio",
        }
    }

    pub fn label(self) -> String {
        match self {
            MetricField::DatasetSize => crate::t!("highlights-dataset-size"),
            MetricField::StudentCount => crate::t!("highlights-student-count"),
            MetricField::CourseCount => crate::t!("highlights-course-count"),
            MetricField::LearningStyleCount => crate::t!("highlights-style-count"),
            MetricField::TopLearningStyle => crate::t!("highlights-top-style"),
            MetricField::TopLearningStyleShare => crate::t!("highlights-top-style-share"),
            MetricField::DropoutAccuracy => crate::t!("highlights-dropout-accuracy"),
            MetricField::AccuracySpread => crate::t!("highlights-accuracy-spread"),
            MetricField::RocAuc => crate::t!("highlights-roc-auc"),
            MetricField::RocAucSpread => crate::t!("highlights-roc-auc-spread"),
            MetricField::PrAuc => crate::t!("highlights-pr-auc"),
            MetricField::PrAucSpread => crate::t!("highlights-pr-auc-spread"),
            MetricField::DropoutRate => crate::t!("highlights-dropout-rate"),
            MetricField::CvFolds => crate::t!("highlights-cv-folds"),
            MetricField::EngagementPearson => crate::t!("highlights-pearson"),
            MetricField::EngagementSpearman => crate::t!("highlights-spearman"),
            MetricField::ValidationIssues => crate::t!("highlights-validation-issues"),
            MetricField::DuplicateRatio => crate::t!("highlights-duplicate-ratio"),
        }
    }

    fn extract(self, doc: &RawResultsDocument) -> Option<String> {
        let stats = doc.stats.as_ref();
        let cv = doc.dropout_cv.as_ref();
        let top = doc.top_learning_style.as_ref();
        let corr = doc
            .correlations
            .as_ref()
            .and_then(|c| c.engagement_vs_final.as_ref());
        let validation = doc.validation.as_ref();

        match self {
            MetricField::DatasetSize => stats.and_then(|s| s.dataset_size).map(count),
            MetricField::StudentCount => stats.and_then(|s| s.num_students).map(count),
            MetricField::CourseCount => stats.and_then(|s| s.num_courses).map(count),
            MetricField::LearningStyleCount => {
                stats.and_then(|s| s.num_learning_styles).map(count)
            }
            MetricField::TopLearningStyle => top
                .and_then(|t| t.name.clone())
                .filter(|name| !name.trim().is_empty()),
            MetricField::TopLearningStyleShare => top
                .and_then(|t| t.pct)
                .map(|pct| format::format_ratio_percent(pct, 1)),
            MetricField::DropoutAccuracy => cv
                .and_then(|c| c.accuracy_mean)
                .map(|acc| format::format_ratio_percent(acc, 1)),
            MetricField::AccuracySpread => cv
                .and_then(|c| c.accuracy_std)
                .map(|std| format!("± {}", format::format_ratio_percent(std, 1))),
            MetricField::RocAuc => cv
                .and_then(|c| c.roc_auc_mean)
                .map(|auc| format::format_fixed(auc, 3)),
            MetricField::RocAucSpread => cv.and_then(|c| c.roc_auc_std).map(spread),
            MetricField::PrAuc => cv
                .and_then(|c| c.pr_auc_mean)
                .map(|auc| format::format_fixed(auc, 3)),
            MetricField::PrAucSpread => cv.and_then(|c| c.pr_auc_std).map(spread),
            MetricField::DropoutRate => cv
                .and_then(|c| c.class_distribution.as_ref())
                .and_then(|d| d.positive)
                .map(|rate| format::format_ratio_percent(rate, 1)),
            MetricField::CvFolds => cv.and_then(|c| c.folds).map(count),
            MetricField::EngagementPearson => corr
                .and_then(|c| c.pearson)
                .map(|r| format::format_fixed(r, 3)),
            MetricField::EngagementSpearman => corr
                .and_then(|c| c.spearman)
                .map(|r| format::format_fixed(r, 3)),
            MetricField::ValidationIssues => validation.map(|v| v.issues.len().to_string()),
            MetricField::DuplicateRatio => validation
                .and_then(|v| v.duplicate_ratio)
                .map(|ratio| format::format_ratio_percent(ratio, 1)),
        }
    }
}

fn spread(std: f64) -> String {
    format!("± {}", format::format_fixed(std, 3))
}

fn count(value: f64) -> String {
    format::format_count(format::round_half_up(value.max(0.0)) as u64)
}

/// Display values for every [`MetricField`], projected once from the loaded export.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    values: Vec<(MetricField, String)>,
    /// Warning or error text the pipeline attached to the dropout model run.
    pub pipeline_note: Option<String>,
}

impl DashboardMetrics {
    /// Each field falls back independently; `None` yields the fallback set.
    pub fn project(document: Option<&RawResultsDocument>) -> Self {
        let values = MetricField::ALL
            .iter()
            .map(|field| {
                let value = document
                    .and_then(|doc| field.extract(doc))
                    .unwrap_or_else(|| field.fallback().to_string());
                (*field, value)
            })
            .collect();

        let pipeline_note = document
            .and_then(|doc| doc.dropout_cv.as_ref())
            .and_then(|cv| cv.error.clone().or_else(|| cv.warning.clone()))
            .filter(|note| !note.trim().is_empty());

        Self {
            values,
            pipeline_note,
        }
    }

    pub fn value(&self, field: MetricField) -> &str {
        self.values
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, value)| value.as_str())
            .unwrap_or_else(|| field.fallback())
    }
}

/// Overview highlight tiles. Only fields listed in `fields` have a region and get rendered.
#[component]
pub fn DashboardHighlights(metrics: DashboardMetrics, fields: Vec<MetricField>) -> Element {
    let tiles: Vec<(MetricField, String, String)> = fields
        .iter()
        .map(|field| (*field, field.label(), metrics.value(*field).to_string()))
        .collect();

    rsx! {
        section { class: "results-card results-highlights-card",
            div { class: "results-card__header",
                h2 { {crate::t!("highlights-heading")} }
            }

            div { class: "results-highlights",
                for (field, label, value) in tiles.into_iter() {
                    div { key: "{field.dom_id()}", class: "results-highlight",
                        span { class: "results-highlight__label", "{label}" }
                        strong { id: field.dom_id(), class: "results-highlight__value", "{value}" }
                    }
                }
            }

            if let Some(note) = metrics.pipeline_note.as_ref() {
                p { class: "results-card__meta results-card__meta--warning",
                    span { class: "results-highlight__label", {crate::t!("highlights-pipeline-note")} }
                    " {note}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_document_uses_literal_fallbacks() {
        let metrics = DashboardMetrics::project(None);
        assert_eq!(metrics.value(MetricField::DropoutAccuracy), "80.4%");
        assert_eq!(metrics.value(MetricField::DropoutRate), "19.6%");
        assert_eq!(metrics.value(MetricField::CvFolds), "5");
        assert_eq!(metrics.value(MetricField::EngagementPearson), PLACEHOLDER);
        assert!(metrics.pipeline_note.is_none());
    }

    #[test]
    fn present_fields_are_formatted() {
        let doc: RawResultsDocument = serde_json::from_value(json!({
            "stats": { "dataset_size": 10000, "num_courses": 5 },
            "top_learning_style": { "name": "Reading/Writing", "pct": 0.2561 },
            "dropout_cv": {
                "accuracy_mean": 0.7932,
                "folds": 10,
                "class_distribution": { "positive": 0.2 },
                "warning": "sklearn not available; CV metrics not computed"
            },
            "correlations": { "engagement_vs_final": { "pearson": -0.0123 } },
            "validation": { "issues": [{ "type": "negative_values" }], "duplicate_ratio": 0.0 }
        }))
        .unwrap();
        let metrics = DashboardMetrics::project(Some(&doc));
        assert_eq!(metrics.value(MetricField::DatasetSize), "10,000");
        assert_eq!(metrics.value(MetricField::CourseCount), "5");
        assert_eq!(metrics.value(MetricField::StudentCount), PLACEHOLDER);
        assert_eq!(metrics.value(MetricField::TopLearningStyle), "Reading/Writing");
        assert_eq!(metrics.value(MetricField::TopLearningStyleShare), "25.6%");
        assert_eq!(metrics.value(MetricField::DropoutAccuracy), "79.3%");
        assert_eq!(metrics.value(MetricField::CvFolds), "10");
        assert_eq!(metrics.value(MetricField::DropoutRate), "20.0%");
        assert_eq!(metrics.value(MetricField::EngagementPearson), "-0.012");
        assert_eq!(metrics.value(MetricField::EngagementSpearman), PLACEHOLDER);
        assert_eq!(metrics.value(MetricField::ValidationIssues), "1");
        assert_eq!(metrics.value(MetricField::DuplicateRatio), "0.0%");
        assert_eq!(
            metrics.pipeline_note.as_deref(),
            Some("sklearn not available; CV metrics not computed")
        );
    }

    #[test]
    fn fallbacks_are_independent() {
        let doc: RawResultsDocument =
            serde_json::from_value(json!({ "dropout_cv": { "folds": 3 } })).unwrap();
        let metrics = DashboardMetrics::project(Some(&doc));
        assert_eq!(metrics.value(MetricField::CvFolds), "3");
        assert_eq!(metrics.value(MetricField::DropoutAccuracy), "80.4%");
    }

    #[test]
    fn auc_spreads_sit_next_to_their_means() {
        let doc: RawResultsDocument = serde_json::from_value(json!({
            "dropout_cv": {
                "roc_auc_mean": 0.5012,
                "roc_auc_std": 0.0097,
                "pr_auc_mean": 0.1983
            }
        }))
        .unwrap();
        let metrics = DashboardMetrics::project(Some(&doc));
        assert_eq!(metrics.value(MetricField::RocAuc), "0.501");
        assert_eq!(metrics.value(MetricField::RocAucSpread), "± 0.010");
        assert_eq!(metrics.value(MetricField::PrAuc), "0.198");
        assert_eq!(metrics.value(MetricField::PrAucSpread), PLACEHOLDER);

        let order: Vec<MetricField> = MetricField::ALL.to_vec();
        let roc = order.iter().position(|f| *f == MetricField::RocAuc).unwrap();
        assert_eq!(order[roc + 1], MetricField::RocAucSpread);
    }
}
