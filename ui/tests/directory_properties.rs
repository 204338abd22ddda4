//! Properties of the student directory built from an exported results document.

use serde_json::{json, Value};
use ui::core::format::{format_fixed, PLACEHOLDER};
use ui::core::loader::decode_response;
use ui::results::{DashboardState, MetricField, RawResultsDocument, StudentDirectory, Weights};

fn document(value: Value) -> RawResultsDocument {
    serde_json::from_value(value).expect("document parses")
}

#[test]
fn display_keys_are_sequential_in_lexicographic_raw_order() {
    let raw_ids = ["S00010", "S00002", "A9", "S00001", "s00001", "100", "99"];
    let students: serde_json::Map<String, Value> = raw_ids
        .iter()
        .map(|id| (id.to_string(), json!({})))
        .collect();
    let directory = StudentDirectory::build(&document(json!({ "sample_students": students })));

    let mut sorted: Vec<&str> = raw_ids.to_vec();
    sorted.sort();

    assert_eq!(directory.len(), raw_ids.len());
    for (index, (student, raw_id)) in directory.iter().zip(sorted.iter()).enumerate() {
        assert_eq!(student.key, (index + 1).to_string());
        assert_eq!(student.raw_id, *raw_id);
        assert_eq!(student.id, format!("Student {raw_id}"));
    }
}

#[test]
fn computed_attributions_are_weight_times_displayed_score() {
    let scores = [0.0, 0.07, 0.5, 0.66, 0.8249, 1.0];
    let recommendations: Vec<Value> = scores
        .iter()
        .map(|s| {
            json!({
                "title": "Course",
                "styleScore": s,
                "contentScore": s,
                "difficultyScore": s,
                "engagementScore": s
            })
        })
        .chain(std::iter::once(json!({ "title": "Broken", "styleScore": "n/a" })))
        .collect();

    let weights = json!({ "style": 0.4, "content": 0.3, "difficulty": 0.2, "engagement": 0.1 });
    let directory = StudentDirectory::build(&document(json!({
        "sample_students": { "S1": {} },
        "sample_recommendations": {
            "S1": { "weights": weights, "recommendations": recommendations }
        }
    })));
    let student = directory.get("1").expect("student present");
    let w = student.weights;
    assert_eq!(
        w,
        Weights {
            style: 0.4,
            content: 0.3,
            difficulty: 0.2,
            engagement: 0.1
        }
    );

    for rec in &student.recommendations {
        let parsed = |shown: &str| shown.parse::<f64>().unwrap_or(0.0);
        assert_eq!(
            rec.attributions.style,
            format_fixed(w.style * parsed(&rec.style_score), 3)
        );
        assert_eq!(
            rec.attributions.content,
            format_fixed(w.content * parsed(&rec.content_score), 3)
        );
        assert_eq!(
            rec.attributions.difficulty,
            format_fixed(w.difficulty * parsed(&rec.difficulty_score), 3)
        );
        assert_eq!(
            rec.attributions.engagement,
            format_fixed(w.engagement * parsed(&rec.engagement_score), 3)
        );
    }

    let broken = student.recommendations.last().unwrap();
    assert_eq!(broken.style_score, "0.00");
    assert_eq!(broken.attributions.style, "0.000");
}

#[test]
fn absent_profile_numbers_render_the_placeholder() {
    let directory = StudentDirectory::build(&document(json!({
        "sample_students": { "S1": { "Quiz_Scores": null, "Final_Exam_Score": "oops" } }
    })));
    let student = directory.get("1").unwrap();
    for value in [
        &student.quiz_score,
        &student.assignment_rate,
        &student.final_score,
        &student.forum_participation,
        &student.engagement_score,
        &student.learning_style,
        &student.education_level,
    ] {
        assert_eq!(value, PLACEHOLDER);
    }
    assert!(student.recommendations.is_empty());
    assert_eq!(student.weights, Weights::DEFAULT);
}

#[test]
fn profile_scalars_are_formatted() {
    let directory = StudentDirectory::build(&document(json!({
        "sample_students": {
            "S00001": {
                "Learning_Style": "Visual",
                "Education_Level": "High School",
                "Quiz_Scores": 67,
                "Assignment_Completion_Rate": 88.5,
                "Final_Exam_Score": 50.49,
                "Forum_Participation": 2,
                "Engagement_Score": 57.8
            }
        }
    })));
    let student = directory.get("1").unwrap();
    assert_eq!(student.quiz_score, "67%");
    assert_eq!(student.assignment_rate, "89%");
    assert_eq!(student.final_score, "50%");
    assert_eq!(student.forum_participation, "2 posts");
    assert_eq!(student.engagement_score, "57.8");
    assert_eq!(student.learning_style, "Visual");
}

#[test]
fn not_found_leaves_the_dashboard_empty() {
    let state = DashboardState::from_load(decode_response(404, "Not Found"));
    assert!(state.loaded);
    assert!(state.document.is_none());
    assert!(state.directory.is_empty());
    assert_eq!(state.directory.first_key(), None);
    assert!(state.error.as_deref().unwrap_or_default().contains("404"));
    assert_eq!(state.metrics().value(MetricField::DropoutAccuracy), "80.4%");
}

#[test]
fn successful_load_builds_the_directory() {
    let body = json!({ "sample_students": { "S2": {}, "S1": {} } }).to_string();
    let state = DashboardState::from_load(decode_response(200, &body));
    assert!(state.error.is_none());
    assert_eq!(state.directory.len(), 2);
    assert_eq!(state.directory.get("1").unwrap().raw_id, "S1");
}
