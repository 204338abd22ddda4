//! Course × learning-style means exported for auditing the recommender.

use dioxus::prelude::*;

use crate::{
    core::format::{format_tenths, PLACEHOLDER},
    results::document::{RawCourseStyleMean, RawResultsDocument},
};

/// One display row of the course/style breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseStyleRow {
    pub course: String,
    pub learning_style: String,
    pub mean_final: String,
    pub mean_quiz: String,
    pub mean_assignment: String,
}

impl CourseStyleRow {
    /// Rows ordered by course, then learning style. Entries naming neither are dropped.
    pub fn project(document: Option<&RawResultsDocument>) -> Vec<CourseStyleRow> {
        let Some(means) = document
            .and_then(|doc| doc.diagnostics.as_ref())
            .map(|diag| &diag.course_style_means)
        else {
            return Vec::new();
        };

        let mut rows: Vec<CourseStyleRow> = means
            .iter()
            .filter(|raw| named(&raw.course_name).is_some() || named(&raw.learning_style).is_some())
            .map(Self::from_raw)
            .collect();
        rows.sort_by(|a, b| {
            (a.course.as_str(), a.learning_style.as_str())
                .cmp(&(b.course.as_str(), b.learning_style.as_str()))
        });
        rows
    }

    fn from_raw(raw: &RawCourseStyleMean) -> Self {
        Self {
            course: named(&raw.course_name).unwrap_or(PLACEHOLDER).to_string(),
            learning_style: named(&raw.learning_style)
                .unwrap_or(PLACEHOLDER)
                .to_string(),
            mean_final: format_tenths(raw.mean_final),
            mean_quiz: format_tenths(raw.mean_quiz),
            mean_assignment: format_tenths(raw.mean_assign),
        }
    }
}

fn named(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Overview table of [`CourseStyleRow`]s; renders nothing when the export has none.
#[component]
pub fn CourseStyleTable(rows: Vec<CourseStyleRow>) -> Element {
    if rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "results-card course-style-card",
            div { class: "results-card__header",
                h2 { {crate::t!("breakdown-heading")} }
            }
            p { class: "results-card__meta", {crate::t!("breakdown-intro")} }
            table { id: "course-style-means", class: "course-style-table",
                thead {
                    tr {
                        th { {crate::t!("breakdown-course")} }
                        th { {crate::t!("breakdown-style")} }
                        th { {crate::t!("breakdown-final")} }
                        th { {crate::t!("breakdown-quiz")} }
                        th { {crate::t!("breakdown-assignment")} }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr { key: "{row.course}-{row.learning_style}",
                            td { "{row.course}" }
                            td { "{row.learning_style}" }
                            td { class: "course-style-table__number", "{row.mean_final}" }
                            td { class: "course-style-table__number", "{row.mean_quiz}" }
                            td { class: "course-style-table__number", "{row.mean_assignment}" }
                        }
                    }
                }
            }
        }
    }
}
