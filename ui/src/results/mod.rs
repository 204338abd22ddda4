mod document;
pub use document::*;

mod directory;
pub use directory::*;

mod detail;
pub use detail::{bar_width, ProfileField, ProfileSummary, RecommendationCards};

mod selector;
pub use selector::{effective_selection, resolve_selection, submitted_key, StudentExplorer};

mod highlights;
pub use highlights::{DashboardHighlights, DashboardMetrics, MetricField};

mod breakdown;
pub use breakdown::{CourseStyleRow, CourseStyleTable};

use dioxus::prelude::*;

use crate::core::{
    config::DashboardConfig,
    loader::{self, LoadError},
};

/// Application state built once from the exported results document.
///
/// Written when the single load finishes and only read afterwards; selection
/// changes never rebuild it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub document: Option<RawResultsDocument>,
    pub directory: StudentDirectory,
    pub error: Option<String>,
    pub loaded: bool,
}

impl DashboardState {
    pub fn from_load(outcome: Result<RawResultsDocument, LoadError>) -> Self {
        match outcome {
            Ok(document) => {
                let directory = StudentDirectory::build(&document);
                Self {
                    document: Some(document),
                    directory,
                    error: None,
                    loaded: true,
                }
            }
            Err(err) => Self {
                document: None,
                directory: StudentDirectory::default(),
                error: Some(format!("Couldn't load results: {err}")),
                loaded: true,
            },
        }
    }

    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics::project(self.document.as_ref())
    }

    pub fn course_style_rows(&self) -> Vec<CourseStyleRow> {
        CourseStyleRow::project(self.document.as_ref())
    }
}

/// Own the dashboard state for the app root: spawn the one-time load and
/// provide the signal to descendants through context.
pub fn use_dashboard(config: DashboardConfig) -> Signal<DashboardState> {
    let mut state = use_context_provider(|| Signal::new(DashboardState::default()));
    let source = use_hook(|| config.results_source.clone());

    use_hook(move || {
        spawn(async move {
            let outcome = loader::load_results(&source).await;
            match &outcome {
                Ok(document) => tracing::info!(
                    source = %source,
                    students = document.sample_students.len(),
                    "results loaded"
                ),
                Err(err) => tracing::warn!(source = %source, "results unavailable: {err}"),
            }
            state.set(DashboardState::from_load(outcome));
        });
    });

    state
}

/// Read the state provided by [`use_dashboard`]; empty when no provider exists.
pub fn use_dashboard_state() -> DashboardState {
    try_use_context::<Signal<DashboardState>>()
        .map(|state| state())
        .unwrap_or_default()
}
