//! Runtime configuration for the dashboard shell.

/// Environment variable consulted by native builds for the results location.
pub const RESULTS_ENV: &str = "LEARNLENS_RESULTS";

/// Resource fetched (web) or read (native) when nothing else is configured.
pub const DEFAULT_RESULTS_SOURCE: &str = "results.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Same-origin URL on the web, filesystem path on native targets.
    pub results_source: String,
}

impl DashboardConfig {
    pub fn new(results_source: impl Into<String>) -> Self {
        Self {
            results_source: results_source.into(),
        }
    }

    /// Native builds honour `LEARNLENS_RESULTS`; the web build always uses the default.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(source) = std::env::var(RESULTS_ENV)
                .ok()
                .filter(|value| !value.trim().is_empty())
            {
                return Self::new(source);
            }
        }
        Self::default()
    }

    /// Like [`from_env`](Self::from_env) but with a launcher-specific fallback.
    pub fn from_env_or(fallback: impl Into<String>) -> Self {
        let config = Self::from_env();
        if config == Self::default() {
            Self::new(fallback)
        } else {
            config
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_SOURCE)
    }
}
