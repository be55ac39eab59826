//! Resource list row

use dioxus::prelude::*;

use crate::types::Resource;

/// Props for ResourceCard
#[derive(Props, Clone, PartialEq)]
pub struct ResourceCardProps {
    pub resource: Resource,
}

/// One row of the resource list.
#[component]
pub fn ResourceCard(props: ResourceCardProps) -> Element {
    let resource = &props.resource;

    rsx! {
        div {
            class: "flex items-start gap-4 bg-white border border-gray-200 rounded-lg p-4 hover:shadow-md transition-shadow",

            div { class: "text-3xl", "{resource.display_icon()}" }

            div {
                class: "flex-1 min-w-0",
                h3 { class: "text-base font-semibold text-gray-900", "{resource.title}" }
                p { class: "text-sm text-gray-600 mt-1", "{resource.description}" }
                div {
                    class: "flex items-center gap-2 mt-2 text-xs text-gray-500",
                    span { class: "bg-gray-100 px-2 py-0.5 rounded", "{resource.category}" }
                    span { "{resource.file_size}" }
                }
            }

            div {
                class: "ml-4 self-center",
                a {
                    href: "{resource.link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "inline-flex items-center px-3 py-1.5 bg-blue-600 text-white text-sm rounded-lg hover:bg-blue-700 transition-colors",
                    "Download"
                }
            }
        }
    }
}
