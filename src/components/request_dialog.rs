//! Resource request dialog

use dioxus::prelude::*;

/// Modal asking for the name of a missing resource. Cancel (or an empty
/// name) is a no-op; confirming hands the trimmed name to `on_request`.
#[component]
pub fn RequestResourceDialog(mut open: Signal<bool>, on_request: EventHandler<String>) -> Element {
    let mut name = use_signal(String::new);

    if !open() {
        return rsx! {};
    }

    let mut close = move || {
        name.set(String::new());
        open.set(false);
    };

    let confirm = move |_| {
        let value = name().trim().to_string();
        if value.is_empty() {
            return;
        }
        on_request.call(value);
        close();
    };

    rsx! {
        div {
            class: "fixed inset-0 z-20 flex items-center justify-center bg-black/40",
            div {
                class: "bg-white rounded-lg shadow-lg p-6 w-full max-w-md mx-4",

                h3 { class: "text-lg font-semibold text-gray-900 mb-2", "Request a resource" }
                p {
                    class: "text-sm text-gray-600 mb-4",
                    "Tell us what you're looking for and we'll pass it along with your feedback."
                }

                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                    placeholder: "Name of the resource you need",
                    class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 mb-4",
                    autofocus: true,
                }

                div {
                    class: "flex justify-end gap-2",
                    button {
                        class: "px-4 py-2 text-gray-600 rounded-lg hover:bg-gray-100",
                        onclick: move |_| close(),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50",
                        disabled: name().trim().is_empty(),
                        onclick: confirm,
                        "Request"
                    }
                }
            }
        }
    }
}
