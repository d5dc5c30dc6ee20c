use dioxus::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tokio::sync::mpsc::UnboundedSender;
use crate::backend::AppCmd;
use crate::backend::amount::EthAmount;
use crate::backend::chain::ConnectionInfo;
use crate::components::AppState;

/// Account and network attached to the session.
pub fn use_active_web3() -> ConnectionInfo {
    let app_state = use_context::<AppState>();
    let connection = app_state.connection.read().clone();
    connection
}

/// Known ETH balances for `accounts`. Accounts without a balance are absent.
/// A new account list asks the backend to fetch those balances.
pub fn use_eth_balances(accounts: &[String]) -> HashMap<String, EthAmount> {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();
    let requested = use_hook(|| Rc::new(RefCell::new(Vec::<String>::new())));

    if let Some(cmd) = balance_request(&mut requested.borrow_mut(), accounts) {
        let _ = cmd_tx.send(cmd);
    }

    let balances = app_state.balances.read();
    balances_for(&balances, accounts)
}

/// Current dark-mode flag plus the signal to change it.
pub fn use_dark_mode_manager() -> (bool, Signal<bool>) {
    let app_state = use_context::<AppState>();
    let dark_mode = app_state.dark_mode;
    (dark_mode(), dark_mode)
}

pub fn use_is_mobile() -> bool {
    let app_state = use_context::<AppState>();
    let is_mobile = app_state.is_mobile;
    is_mobile()
}

/// Reads the browser user agent once and updates `AppState::is_mobile`.
pub fn use_form_factor_detection() {
    let app_state = use_context::<AppState>();
    use_effect(move || {
        if cfg!(feature = "mobile") {
            return;
        }
        let mut is_mobile = app_state.is_mobile;
        let mut eval = document::eval("dioxus.send(navigator.userAgent);");
        spawn(async move {
            match eval.recv::<String>().await {
                Ok(user_agent) => {
                    let detected = is_mobile_user_agent(&user_agent);
                    tracing::debug!(%user_agent, detected, "Form factor detected");
                    is_mobile.set(detected);
                }
                Err(e) => tracing::warn!("Could not read user agent: {:?}", e),
            }
        });
    });
}

/// `FetchBalances` for `accounts` when they differ from the last request.
pub fn balance_request(requested: &mut Vec<String>, accounts: &[String]) -> Option<AppCmd> {
    if requested.as_slice() == accounts {
        return None;
    }
    *requested = accounts.to_vec();
    if accounts.is_empty() {
        return None;
    }
    Some(AppCmd::FetchBalances {
        accounts: accounts.to_vec(),
    })
}

pub fn balances_for(
    balances: &HashMap<String, EthAmount>,
    accounts: &[String],
) -> HashMap<String, EthAmount> {
    accounts
        .iter()
        .filter_map(|account| balances.get(account).map(|balance| (account.clone(), *balance)))
        .collect()
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    const MOBILE_MARKERS: [&str; 5] = ["Mobi", "Android", "iPhone", "iPad", "iPod"];
    MOBILE_MARKERS.iter().any(|marker| user_agent.contains(marker))
}
