//! Feedback form panel

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::components::LoadingDots;
use crate::state::{normalize_feedback, AppState, CounterLevel};

/// DOM id of the feedback textarea, used for focus/scroll on prefill.
const FEEDBACK_INPUT_ID: &str = "feedback-content";

/// Feedback panel: free-text form with a character counter and
/// submitting/success/error states.
#[component]
pub fn FeedbackPanel() -> Element {
    let state = use_context::<AppState>();
    let client = use_context::<ApiClient>();

    let mut content = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| false);

    let count = use_memo(move || content().chars().count());
    let counter_class = CounterLevel::for_count(count()).text_class();

    // Consume a pending resource-request prefill.
    use_effect(move || {
        let mut prefill = state.prefill;
        if let Some(text) = prefill() {
            content.set(text);
            prefill.set(None);
            focus_feedback_input();
        }
    });

    let handle_submit = move |_| {
        if is_submitting() {
            return;
        }

        let Some(body) = normalize_feedback(&content()) else {
            success.set(false);
            error.set(Some("Write a few words before submitting.".to_string()));
            return;
        };

        let client = client.clone();
        spawn(async move {
            is_submitting.set(true);
            error.set(None);
            success.set(false);

            match client.submit_feedback(&body).await {
                Ok(()) => {
                    success.set(true);
                    content.set(String::new());
                }
                Err(e) => {
                    tracing::error!(error = %e, "feedback submission failed");
                    error.set(Some(
                        "Something went wrong. Please try again later.".to_string(),
                    ));
                }
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "max-w-2xl mx-auto",
            form {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4",
                onsubmit: handle_submit,

                if success() {
                    div {
                        class: "bg-green-50 border border-green-200 text-green-700 p-4 rounded-lg",
                        "Thanks! Your idea has been submitted."
                    }
                }

                if let Some(err) = error() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "{err}"
                    }
                }

                div {
                    label {
                        r#for: FEEDBACK_INPUT_ID,
                        class: "block text-sm font-medium text-gray-700 mb-2",
                        "Your idea"
                    }
                    textarea {
                        id: FEEDBACK_INPUT_ID,
                        value: "{content}",
                        oninput: move |e| content.set(e.value()),
                        rows: "8",
                        placeholder: "Share an idea, a suggestion, or anything else on your mind...",
                        class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 resize-none",
                    }
                    p {
                        class: "mt-1 text-xs text-right {counter_class}",
                        "{count} characters"
                    }
                }

                button {
                    r#type: "submit",
                    class: "w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: is_submitting(),
                    if is_submitting() {
                        LoadingDots {}
                        "Submitting..."
                    } else {
                        "Submit Idea"
                    }
                }
            }
        }
    }
}

/// Focus the textarea and bring it into view after a prefill.
fn focus_feedback_input() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(FEEDBACK_INPUT_ID) else {
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);

    if let Some(input) = element.dyn_ref::<web_sys::HtmlElement>() {
        let _ = input.focus();
    }
}
