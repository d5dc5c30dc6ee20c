use dioxus::prelude::*;
use crate::Route;
use crate::components::header::Header;
use crate::components::hooks::use_dark_mode_manager;

#[component]
pub fn Shell() -> Element {
    let (is_dark, _) = use_dark_mode_manager();
    let theme_class = if is_dark { "dark" } else { "light" };

    rsx! {
        div { class: "app-wrapper {theme_class}",
            Header {}
            div { class: "body-wrapper",
                Outlet::<Route> {}
            }
        }
    }
}
