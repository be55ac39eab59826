//! Resource center panel

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::{LoadingSpinner, RequestResourceDialog, ResourceCard};
use crate::state::{categories, AppState, ResourceFilter};

/// Resource center: fetch-once list with live search and category filtering.
#[component]
pub fn ResourcesPanel() -> Element {
    let state = use_context::<AppState>();
    let client = use_context::<ApiClient>();

    let resources = use_resource(move || {
        let client = client.clone();
        async move { client.fetch_resources().await }
    });

    let mut search = use_signal(String::new);
    let mut category = use_signal(|| None::<String>);
    let mut dialog_open = use_signal(|| false);

    let loaded = use_memo(move || match &*resources.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    });

    // Recomputed synchronously on every keystroke and selection change.
    let filtered = use_memo(move || {
        let filter = ResourceFilter {
            search: search(),
            category: category(),
        };
        loaded()
            .iter()
            .filter(|resource| filter.matches(resource))
            .cloned()
            .collect::<Vec<_>>()
    });

    let category_options = use_memo(move || categories(&loaded()));

    rsx! {
        div {
            class: "max-w-3xl mx-auto",

            // Search + category controls
            div {
                class: "flex flex-col sm:flex-row gap-3 mb-6",
                input {
                    r#type: "text",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                    placeholder: "Search resources...",
                    class: "flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                }
                select {
                    class: "px-4 py-2 border border-gray-300 rounded-lg bg-white focus:outline-none focus:ring-2 focus:ring-blue-500",
                    onchange: move |e| {
                        let value = e.value();
                        category.set(if value.is_empty() { None } else { Some(value) });
                    },
                    option { value: "", "All categories" }
                    for c in category_options() {
                        option {
                            key: "{c}",
                            value: "{c}",
                            selected: category().as_deref() == Some(c.as_str()),
                            "{c}"
                        }
                    }
                }
            }

            match &*resources.read() {
                None => rsx! {
                    div { class: "py-12", LoadingSpinner {} }
                },
                Some(Err(_)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-6 rounded-lg text-center",
                        "\u{274C} Failed to load resources. Please refresh the page and try again."
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div {
                        class: "bg-white border border-gray-200 p-12 rounded-lg text-center",
                        p { class: "text-gray-500", "No resources yet. Check back soon!" }
                    }
                },
                Some(Ok(_)) if filtered().is_empty() => rsx! {
                    div {
                        class: "bg-white border border-gray-200 p-12 rounded-lg text-center",
                        p { class: "text-gray-500 mb-4", "No resources match your filters." }
                        button {
                            class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200",
                            onclick: move |_| {
                                search.set(String::new());
                                category.set(None);
                            },
                            "Clear Filters"
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "space-y-3",
                        for resource in filtered() {
                            ResourceCard { key: "{resource.title}", resource: resource.clone() }
                        }
                    }
                },
            }

            // Request shortcut
            div {
                class: "text-center mt-8",
                button {
                    class: "text-blue-600 hover:text-blue-700 text-sm underline",
                    onclick: move |_| dialog_open.set(true),
                    "Can't find what you need? Request a resource"
                }
            }

            RequestResourceDialog {
                open: dialog_open,
                on_request: move |name: String| state.request_resource(&name),
            }
        }
    }
}
