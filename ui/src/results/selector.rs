use std::rc::Rc;

use dioxus::prelude::*;

use crate::results::{ProfileSummary, RecommendationCards, StudentDirectory};

/// Resolve a submitted key. Unknown keys resolve to `None` and must not change the view.
pub fn resolve_selection<'a>(directory: &'a StudentDirectory, key: &str) -> Option<&'a str> {
    directory.get(key).map(|student| student.key.as_str())
}

/// Key currently on display: the confirmed selection while it exists, else the first record.
pub fn effective_selection(directory: &StudentDirectory, selected: Option<&str>) -> Option<String> {
    selected
        .and_then(|key| resolve_selection(directory, key))
        .or_else(|| directory.first_key())
        .map(str::to_string)
}

/// Key a form submission confirms: the picked option when it is known, else
/// the one already on display (an untouched select submits its current value).
pub fn submitted_key(
    directory: &StudentDirectory,
    picked: Option<&str>,
    active: Option<&str>,
) -> Option<String> {
    picked
        .and_then(|key| resolve_selection(directory, key))
        .or_else(|| active.and_then(|key| resolve_selection(directory, key)))
        .map(str::to_string)
}

/// Selection form, diagnostics toggle and the detail region for the chosen student.
///
/// `loaded` is false while the results document is still being fetched.
#[component]
pub fn StudentExplorer(
    directory: StudentDirectory,
    #[props(default = true)] loaded: bool,
) -> Element {
    let mut selected = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| Option::<String>::None);
    let mut show_diagnostics = use_signal(|| false);
    let mut anchor = use_signal(|| Option::<Rc<MountedData>>::None);

    let active_key = effective_selection(&directory, selected().as_deref());
    let pending_key = pending()
        .filter(|key| directory.contains(key))
        .or_else(|| active_key.clone())
        .unwrap_or_default();
    let active = active_key.as_deref().and_then(|key| directory.get(key)).cloned();

    let submit_directory = directory.clone();
    let submit_active = active_key.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let picked = pending();
        let Some(key) =
            submitted_key(&submit_directory, picked.as_deref(), submit_active.as_deref())
        else {
            tracing::debug!(picked = ?picked, "ignoring submission without a known student key");
            return;
        };
        tracing::debug!(key = %key, "student selected");
        selected.set(Some(key));
        if let Some(target) = anchor() {
            spawn(async move {
                if let Err(err) = target.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!(error = ?err, "couldn't scroll recommendations into view");
                }
            });
        }
    };
    let placeholder = if loaded {
        crate::t!("selector-empty")
    } else {
        crate::t!("selector-loading")
    };

    rsx! {
        section { class: "results-card student-explorer",
            form {
                id: "student-select-form",
                class: "student-explorer__form",
                onsubmit: on_submit,
                label { r#for: "student-select", class: "student-explorer__label",
                    {crate::t!("selector-label")}
                }
                select {
                    id: "student-select",
                    class: "student-explorer__select",
                    value: "{pending_key}",
                    onchange: move |evt: FormEvent| pending.set(Some(evt.value())),
                    for student in directory.iter() {
                        option {
                            key: "{student.key}",
                            value: "{student.key}",
                            selected: student.key == pending_key,
                            "{student.id}"
                        }
                    }
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: directory.is_empty(),
                    {crate::t!("selector-submit")}
                }
                label { class: "student-explorer__toggle",
                    input {
                        id: "diagnostics-toggle",
                        r#type: "checkbox",
                        checked: show_diagnostics(),
                        onchange: move |evt: FormEvent| show_diagnostics.set(evt.checked()),
                    }
                    {crate::t!("diagnostics-toggle")}
                }
            }
        }

        div {
            id: "recommendations",
            class: "results__panels",
            onmounted: move |evt| anchor.set(Some(evt.data())),
            {match active {
                Some(student) => rsx! {
                    ProfileSummary { student: student.clone() }
                    RecommendationCards { student, show_diagnostics: show_diagnostics() }
                },
                None => rsx! {
                    p { class: "results-card__placeholder", "{placeholder}" }
                },
            }}
        }
    }
}
