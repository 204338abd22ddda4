use dioxus::prelude::*;

use crate::results::{use_dashboard_state, StudentExplorer};

#[component]
pub fn Profiles() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let state = use_dashboard_state();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-profiles",
            h1 { {crate::t!("profiles-title")} }
            p { {crate::t!("profiles-intro")} }

            StudentExplorer { directory: state.directory, loaded: state.loaded }
        }
    }
}
