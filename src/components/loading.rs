//! Loading components

use dioxus::prelude::*;

/// Centered loading indicator for the resource list.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "Loading resources..." }
        }
    }
}

/// Inline loading indicator for the submit button.
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        span {
            class: "inline-flex space-x-1 mr-2",
            span { class: "w-2 h-2 bg-white/80 rounded-full animate-bounce" }
            span { class: "w-2 h-2 bg-white/80 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            span { class: "w-2 h-2 bg-white/80 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}
