//! Root application component

use dioxus::prelude::*;

use crate::api;
use crate::components::TabBar;
use crate::pages::{FeedbackPanel, ResourcesPanel};
use crate::state::{AppState, Tab};

/// Root application component
#[component]
pub fn App() -> Element {
    let active_tab = use_signal(Tab::default);
    let prefill = use_signal(|| None::<String>);
    let state = use_context_provider(|| AppState { active_tab, prefill });
    use_context_provider(api::browser_client);

    let active = *state.active_tab.read();

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-3xl mx-auto px-4 py-10 text-center",
                    h1 { class: "text-4xl font-bold text-gray-900 mb-3", "Idea Hub" }
                    p {
                        class: "text-gray-600",
                        "Share your ideas and grab the resources that help you build them."
                    }
                }
            }

            TabBar {}

            // Both panels stay mounted so the resource list is fetched once
            // per page load and filter state survives tab switches.
            main {
                class: "max-w-3xl mx-auto px-4 py-8",
                section {
                    class: if active == Tab::Feedback { "tab-panel active" } else { "tab-panel" },
                    FeedbackPanel {}
                }
                section {
                    class: if active == Tab::Resources { "tab-panel active" } else { "tab-panel" },
                    ResourcesPanel {}
                }
            }

            footer {
                class: "bg-white border-t border-gray-100 mt-12",
                div {
                    class: "max-w-3xl mx-auto px-4 py-6 text-center text-sm text-gray-500",
                    "Idea Hub. Made for curious people."
                }
            }
        }
    }
}
