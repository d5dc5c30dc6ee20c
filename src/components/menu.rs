use dioxus::prelude::*;

struct MenuLink {
    label: &'static str,
    url: &'static str,
}

const MENU_LINKS: &[MenuLink] = &[
    MenuLink { label: "About", url: "https://uniswap.org/" },
    MenuLink { label: "Docs", url: "https://uniswap.org/docs/v2" },
    MenuLink { label: "Code", url: "https://github.com/Uniswap/uniswap-interface" },
    MenuLink { label: "Analytics", url: "https://uniswap.info/" },
];

#[component]
pub fn Menu() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "menu",
            button {
                class: "icon-button",
                id: "open-menu-button",
                onclick: move |_| open.set(!open()),
                "⋯"
            }
            if open() {
                div { class: "flyout menu-flyout",
                    for link in MENU_LINKS.iter() {
                        a {
                            key: "{link.label}",
                            class: "menu-item",
                            href: link.url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            onclick: move |_| open.set(false),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
