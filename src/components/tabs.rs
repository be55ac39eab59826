//! Tab bar component

use dioxus::prelude::*;

use crate::state::{AppState, Tab};

/// Tab buttons. Exactly one is styled active: the one matching the shared
/// active-tab signal.
#[component]
pub fn TabBar() -> Element {
    let state = use_context::<AppState>();
    let active = *state.active_tab.read();

    rsx! {
        div {
            class: "bg-white border-b border-gray-100 sticky top-0 z-10",
            div {
                class: "max-w-3xl mx-auto px-4",
                div {
                    class: "flex items-center justify-center gap-1 py-3",
                    for tab in Tab::variants() {
                        {
                            let tab = *tab;
                            let is_active = active == tab;
                            rsx! {
                                button {
                                    key: "{tab:?}",
                                    class: if is_active {
                                        "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium transition-all bg-blue-100 text-blue-700"
                                    } else {
                                        "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium transition-all bg-gray-50 text-gray-600 hover:bg-gray-100"
                                    },
                                    onclick: move |_| state.activate(tab),
                                    span { "{tab.icon()}" }
                                    "{tab.label()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
