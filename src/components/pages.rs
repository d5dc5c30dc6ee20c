use dioxus::prelude::*;
use crate::Route;

// Routed pages the header links to. Their content lives elsewhere.

#[component]
fn Placeholder(title: String, detail: Option<String>) -> Element {
    rsx! {
        div { class: "page-body",
            div { class: "panel",
                h2 { class: "panel-title", "{title}" }
                if let Some(detail) = detail {
                    p { class: "panel-detail", "{detail}" }
                }
            }
        }
    }
}

#[component]
pub fn Swap() -> Element {
    rsx! { Placeholder { title: "Swap" } }
}

#[component]
pub fn Pool() -> Element {
    rsx! { Placeholder { title: "Pool" } }
}

#[component]
pub fn AddLiquidity(segments: Vec<String>) -> Element {
    rsx! { Placeholder { title: "Add Liquidity", detail: segments.join(" / ") } }
}

#[component]
pub fn RemoveLiquidity(segments: Vec<String>) -> Element {
    rsx! { Placeholder { title: "Remove Liquidity", detail: segments.join(" / ") } }
}

#[component]
pub fn CreatePool(segments: Vec<String>) -> Element {
    rsx! { Placeholder { title: "Create a pair", detail: segments.join(" / ") } }
}

#[component]
pub fn FindPool() -> Element {
    rsx! { Placeholder { title: "Import Pool" } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div { class: "page-body",
            div { class: "panel",
                h2 { class: "panel-title", "Page not found" }
                p { class: "panel-detail", "{path}" }
                Link { to: Route::Swap {}, class: "nav-link", "Back to Swap" }
            }
        }
    }
}
