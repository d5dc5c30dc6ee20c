use dioxus::prelude::*;
use crate::Route;
use crate::backend::amount::EthAmount;
use crate::backend::chain::{network_label, ConnectionInfo};
use crate::components::hooks::{use_active_web3, use_dark_mode_manager, use_eth_balances, use_is_mobile};
use crate::components::menu::Menu;
use crate::components::settings::Settings;
use crate::components::web3_status::Web3Status;

const LOGO: Asset = asset!("/assets/svg/wordmark.svg");
const LOGO_DARK: Asset = asset!("/assets/svg/wordmark_white.svg");

const ACTIVE_CLASS: &str = "ACTIVE";
const BALANCE_SIGNIFICANT_DIGITS: u32 = 4;

/// Paths outside `/pool` that still belong to the Pool section.
const POOL_PREFIXES: [&str; 4] = ["/add", "/remove", "/create", "/find"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logo {
    Light,
    Dark,
}

impl Logo {
    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Logo::Dark
        } else {
            Logo::Light
        }
    }

    pub fn asset(self) -> Asset {
        match self {
            Logo::Light => LOGO,
            Logo::Dark => LOGO_DARK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Swap,
    Pool,
}

impl NavTarget {
    pub const ALL: [NavTarget; 2] = [NavTarget::Swap, NavTarget::Pool];

    pub fn id(self) -> &'static str {
        match self {
            NavTarget::Swap => "swap-nav-link",
            NavTarget::Pool => "pool-nav-link",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Swap => "Swap",
            NavTarget::Pool => "Pool",
        }
    }

    pub fn route(self) -> Route {
        match self {
            NavTarget::Swap => Route::Swap {},
            NavTarget::Pool => Route::Pool {},
        }
    }

    pub fn is_active(self, path: &str) -> bool {
        match self {
            NavTarget::Swap => matches_route(path, "/swap"),
            NavTarget::Pool => {
                matches_route(path, "/pool")
                    || POOL_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
            }
        }
    }
}

/// `path` is `route` itself or lies below it.
fn matches_route(path: &str, route: &str) -> bool {
    path.strip_prefix(route)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLinkConfig {
    pub id: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

pub const EXTERNAL_LINKS: &[ExternalLinkConfig] = &[
    ExternalLinkConfig {
        id: "keep2r-nav-link",
        label: "Keep2r",
        url: "https://kp2r.network/keep2r",
    },
    ExternalLinkConfig {
        id: "vote-nav-link",
        label: "Vote",
        url: "https://snapshot.page/#/keep2r.eth",
    },
    ExternalLinkConfig {
        id: "feed-nav-link",
        label: "Feed",
        url: "https://feed.kp2r.network/",
    },
    ExternalLinkConfig {
        id: "charts-nav-link",
        label: "Charts",
        url: "https://info.uniswap.org/pair/0xbf89051f8d04ad770e2231e9335d3b7483a0a51f",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLinkModel {
    pub target: NavTarget,
    pub active: bool,
}

impl NavLinkModel {
    pub fn class(&self) -> String {
        if self.active {
            format!("nav-link {}", ACTIVE_CLASS)
        } else {
            "nav-link".to_string()
        }
    }
}

/// Everything the header shows, derived from the hook values.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderModel {
    pub logo: Logo,
    pub nav_links: Vec<NavLinkModel>,
    pub external_links: &'static [ExternalLinkConfig],
    pub network_label: Option<&'static str>,
    pub balance_text: Option<String>,
    pub account_active: bool,
}

impl HeaderModel {
    pub fn derive(
        connection: &ConnectionInfo,
        balance: Option<&EthAmount>,
        is_dark: bool,
        is_mobile: bool,
        path: &str,
    ) -> Self {
        let nav_links = NavTarget::ALL
            .into_iter()
            .map(|target| NavLinkModel {
                target,
                active: target.is_active(path),
            })
            .collect();

        let network_label = if is_mobile {
            None
        } else {
            connection.chain_id.and_then(network_label)
        };

        let balance_text = match (&connection.account, balance) {
            (Some(_), Some(balance)) => Some(format!(
                "{} ETH",
                balance.to_significant(BALANCE_SIGNIFICANT_DIGITS)
            )),
            _ => None,
        };

        Self {
            logo: Logo::for_mode(is_dark),
            nav_links,
            external_links: EXTERNAL_LINKS,
            network_label,
            balance_text,
            account_active: connection.is_connected(),
        }
    }
}

#[component]
pub fn Header() -> Element {
    let connection = use_active_web3();
    let accounts: Vec<String> = connection.account.iter().cloned().collect();
    let balances = use_eth_balances(&accounts);
    let (is_dark, _) = use_dark_mode_manager();
    let is_mobile = use_is_mobile();
    let path = use_route::<Route>().to_string();

    let balance = connection.account.as_ref().and_then(|account| balances.get(account));
    let model = HeaderModel::derive(&connection, balance, is_dark, is_mobile, &path);
    let account_class = if model.account_active { "account-element active" } else { "account-element" };

    rsx! {
        header { class: "header-frame",
            div { class: "header-row",
                div { class: "header-mob",
                    div { class: "header-element",
                        a { class: "header-title", href: ".",
                            div { class: "uni-icon",
                                img { src: model.logo.asset(), alt: "logo", height: "32px" }
                            }
                        }
                    }

                    nav { class: "header-nav",
                        for link in model.nav_links.iter() {
                            Link {
                                key: "{link.target.id()}",
                                to: link.target.route(),
                                id: link.target.id(),
                                class: link.class(),
                                "{link.target.label()}"
                            }
                        }
                        for link in model.external_links.iter() {
                            a {
                                key: "{link.id}",
                                id: link.id,
                                class: "nav-link",
                                href: link.url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{link.label}"
                            }
                        }
                    }

                    div { class: "header-controls",
                        div { class: "header-element",
                            div { class: "testnet-wrapper",
                                if let Some(label) = model.network_label {
                                    div { class: "network-card", "{label}" }
                                }
                            }
                            div { class: "{account_class}",
                                if let Some(balance_text) = model.balance_text.as_ref() {
                                    span { class: "balance-text", "{balance_text}" }
                                }
                                Web3Status {}
                            }
                        }
                        div { class: "header-element-wrap",
                            Settings {}
                            Menu {}
                        }
                    }
                }
            }
        }
    }
}
