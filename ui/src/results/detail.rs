use dioxus::prelude::*;

use crate::{
    core::format::{format_fixed, parse_or_zero},
    results::{DisplayRecommendation, DisplayStudent, Weights},
};

/// Profile output regions and the student field each one shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    StudentId,
    LearningStyle,
    EducationLevel,
    QuizScore,
    AssignmentRate,
    FinalScore,
    ForumParticipation,
    EngagementScore,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::StudentId,
        ProfileField::LearningStyle,
        ProfileField::EducationLevel,
        ProfileField::QuizScore,
        ProfileField::AssignmentRate,
        ProfileField::FinalScore,
        ProfileField::ForumParticipation,
        ProfileField::EngagementScore,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            ProfileField::StudentId => "student-id",
            ProfileField::LearningStyle => "learning-style",
            ProfileField::EducationLevel => "education-level",
            ProfileField::QuizScore => "quiz-score",
            ProfileField::AssignmentRate => "assignment-rate",
            ProfileField::FinalScore => "final-score",
            ProfileField::ForumParticipation => "forum-participation",
            ProfileField::EngagementScore => "engagement-score",
        }
    }

    pub fn label(self) -> String {
        match self {
            ProfileField::StudentId => crate::t!("profile-student-id"),
            ProfileField::LearningStyle => crate::t!("profile-learning-style"),
            ProfileField::EducationLevel => crate::t!("profile-education-level"),
            ProfileField::QuizScore => crate::t!("profile-quiz-score"),
            ProfileField::AssignmentRate => crate::t!("profile-assignment-rate"),
            ProfileField::FinalScore => crate::t!("profile-final-score"),
            ProfileField::ForumParticipation => crate::t!("profile-forum-participation"),
            ProfileField::EngagementScore => crate::t!("profile-engagement-score"),
        }
    }

    pub fn value(self, student: &DisplayStudent) -> &str {
        match self {
            ProfileField::StudentId => &student.id,
            ProfileField::LearningStyle => &student.learning_style,
            ProfileField::EducationLevel => &student.education_level,
            ProfileField::QuizScore => &student.quiz_score,
            ProfileField::AssignmentRate => &student.assignment_rate,
            ProfileField::FinalScore => &student.final_score,
            ProfileField::ForumParticipation => &student.forum_participation,
            ProfileField::EngagementScore => &student.engagement_score,
        }
    }
}

#[component]
pub fn ProfileSummary(student: DisplayStudent) -> Element {
    rsx! {
        section { class: "results-card results-detail",
            div { class: "results-card__header",
                h2 { {crate::t!("profile-heading")} }
            }
            ul { class: "results-detail__grid",
                for field in ProfileField::ALL {
                    li { key: "{field.dom_id()}",
                        span { class: "results-detail__metric-label", "{field.label()}" }
                        span {
                            id: field.dom_id(),
                            class: "results-detail__metric-value",
                            "{field.value(&student)}"
                        }
                    }
                }
            }
        }
    }
}

/// Lead card plus one ranked card per recommendation.
///
/// Output depends only on the props, so re-rendering the same student yields
/// the same markup. `show_diagnostics` applies to every card at once.
#[component]
pub fn RecommendationCards(student: DisplayStudent, show_diagnostics: bool) -> Element {
    let lead = crate::t!(
        "recommendations-lead",
        style = student.learning_style.as_str(),
        level = student.education_level.as_str(),
        engagement = student.engagement_score.as_str()
    );

    rsx! {
        div { id: "recommendation-cards", class: "recommendation-cards",
            div { class: "results-card recommendation-lead",
                div { class: "results-card__header",
                    h2 { {crate::t!("recommendations-heading")} }
                }
                p { class: "recommendation-lead__text", "{lead}" }
            }

            for (index, rec) in student.recommendations.iter().enumerate() {
                {render_recommendation(index + 1, rec, &student.weights, show_diagnostics)}
            }
        }
    }
}

fn render_recommendation(
    rank: usize,
    rec: &DisplayRecommendation,
    weights: &Weights,
    show_diagnostics: bool,
) -> Element {
    let bars = [
        ("style", crate::t!("recommendation-style"), rec.style_score.clone()),
        ("content", crate::t!("recommendation-content"), rec.content_score.clone()),
        (
            "difficulty",
            crate::t!("recommendation-difficulty"),
            rec.difficulty_score.clone(),
        ),
        (
            "engagement",
            crate::t!("recommendation-engagement"),
            rec.engagement_score.clone(),
        ),
    ];

    let diagnostics = [
        ("style", weights.style, rec.attributions.style.clone()),
        ("content", weights.content, rec.attributions.content.clone()),
        ("difficulty", weights.difficulty, rec.attributions.difficulty.clone()),
        ("engagement", weights.engagement, rec.attributions.engagement.clone()),
    ];

    let diagnostics_class = if show_diagnostics {
        "recommendation-card__diagnostics"
    } else {
        "recommendation-card__diagnostics recommendation-card__diagnostics--hidden"
    };

    rsx! {
        article { class: "results-card recommendation-card",
            div { class: "recommendation-card__body",
                h3 { class: "recommendation-card__rank", "#{rank}: {rec.title}" }
                p { class: "recommendation-card__description", "{rec.description}" }
                if let Some(insight) = rec.data_insight.as_ref() {
                    div { class: "recommendation-card__insight",
                        h4 { {crate::t!("recommendation-insight")} }
                        p { "{insight}" }
                    }
                }
            }

            div { class: "recommendation-card__scores",
                div { class: "recommendation-card__overall",
                    span { class: "recommendation-card__overall-value", "{rec.overall_score}" }
                    span { class: "recommendation-card__overall-label", {crate::t!("recommendation-overall")} }
                }

                for (dimension, label, score) in bars.into_iter() {
                    div { key: "{dimension}", class: "recommendation-bar",
                        div { class: "recommendation-bar__track",
                            div {
                                class: "recommendation-bar__fill recommendation-bar__fill--{dimension}",
                                role: "progressbar",
                                style: "width: {bar_width(&score)}%",
                            }
                        }
                        div { class: "recommendation-bar__legend",
                            small { "{label}" }
                            small { "{score}" }
                        }
                    }
                }
            }

            div {
                class: diagnostics_class,
                hidden: !show_diagnostics,
                h4 { {crate::t!("diagnostics-heading")} }
                table { class: "recommendation-card__diagnostics-table",
                    thead {
                        tr {
                            th { {crate::t!("diagnostics-dimension")} }
                            th { {crate::t!("diagnostics-weight")} }
                            th { {crate::t!("diagnostics-attribution")} }
                        }
                    }
                    tbody {
                        for (dimension, weight, contribution) in diagnostics.into_iter() {
                            tr { key: "{dimension}",
                                td { "{dimension}" }
                                td { "{format_fixed(weight, 2)}" }
                                td { "{contribution}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Fill proportion of a progress bar, in percent.
pub fn bar_width(score: &str) -> f64 {
    parse_or_zero(score) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_scales_score() {
        assert_eq!(bar_width("0.50"), 50.0);
        assert_eq!(bar_width("1.00"), 100.0);
        assert_eq!(bar_width("n/a"), 0.0);
    }
}
