use dioxus::prelude::*;
use crate::components::hooks::use_dark_mode_manager;

#[component]
pub fn Settings() -> Element {
    let mut open = use_signal(|| false);
    let (is_dark, mut dark_mode) = use_dark_mode_manager();

    let toggle_class = if is_dark { "toggle on" } else { "toggle" };
    let toggle_text = if is_dark { "On" } else { "Off" };

    rsx! {
        div { class: "settings",
            button {
                class: "icon-button",
                id: "open-settings-dialog-button",
                onclick: move |_| open.set(!open()),
                "⚙"
            }
            if open() {
                div { class: "flyout settings-flyout",
                    span { class: "flyout-title", "Interface Settings" }
                    div { class: "flyout-row",
                        span { "Toggle Dark Mode" }
                        button {
                            class: "{toggle_class}",
                            id: "toggle-dark-mode-button",
                            onclick: move |_| dark_mode.set(!is_dark),
                            "{toggle_text}"
                        }
                    }
                }
            }
        }
    }
}
