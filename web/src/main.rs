use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::DashboardConfig;
use ui::results::use_dashboard;
use ui::views::{Overview, Profiles};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Overview {},
    #[route("/students")]
    Profiles {},
}

fn nav_overview(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Overview {},
        "{label}"
    })
}
fn nav_profiles(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Profiles {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Same-origin `results.json`, fetched once with the HTTP cache bypassed.
    use_dashboard(DashboardConfig::from_env());

    register_nav(NavBuilder {
        overview: nav_overview,
        profiles: nav_profiles,
    });

    rsx! {
        document::Style { {ui::THEME_CSS} }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
