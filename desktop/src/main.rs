#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::DashboardConfig;
use ui::results::use_dashboard;
use ui::views::{Overview, Profiles};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Overview {},
    #[route("/students")]
    Profiles {},
}

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("LearnLens – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

fn nav_overview(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Overview {}, "{label}" })
}
fn nav_profiles(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Profiles {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    use_dashboard(DashboardConfig::from_env_or(default_results_path()));

    register_nav(NavBuilder {
        overview: nav_overview,
        profiles: nav_profiles,
    });

    rsx! {
        // Always inline the embedded theme (no external file dependency for desktop builds)
        document::Style { {ui::THEME_CSS} }

        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

/// Debug builds read the bundled sample export; release builds look next to the executable.
fn default_results_path() -> String {
    #[cfg(debug_assertions)]
    {
        concat!(env!("CARGO_MANIFEST_DIR"), "/../data/results.json").to_string()
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("results.json")))
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_else(|| ui::core::config::DEFAULT_RESULTS_SOURCE.to_string())
    }
}

/// A desktop-specific layout around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
