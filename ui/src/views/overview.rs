use dioxus::prelude::*;

use crate::results::{use_dashboard_state, CourseStyleTable, DashboardHighlights, MetricField};

#[component]
pub fn Overview() -> Element {
    // Subscribe to the global language code so labels refresh on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let state = use_dashboard_state();
    let metrics = state.metrics();
    let rows = state.course_style_rows();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-overview",
            h1 { {crate::t!("overview-title")} }
            p { {crate::t!("overview-intro")} }

            DashboardHighlights { metrics, fields: MetricField::ALL.to_vec() }
            CourseStyleTable { rows }
        }
    }
}
