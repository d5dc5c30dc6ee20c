pub mod header;
pub mod hooks;
pub mod menu;
pub mod pages;
pub mod settings;
pub mod shell;
pub mod web3_status;

use dioxus::prelude::*;
use std::collections::HashMap;
use crate::backend::AppEvent;
use crate::backend::amount::EthAmount;
use crate::backend::chain::ConnectionInfo;

#[derive(Clone, Copy)]
pub struct AppState {
    pub connection: Signal<ConnectionInfo>,
    pub balances: Signal<HashMap<String, EthAmount>>, // Account -> ETH balance
    pub dark_mode: Signal<bool>,
    pub is_mobile: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            connection: use_signal(ConnectionInfo::default),
            balances: use_signal(HashMap::new),
            dark_mode: use_signal(|| false),
            is_mobile: use_signal(|| cfg!(feature = "mobile")),
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::ConnectionChanged(info) => {
                retain_account(&mut self.balances.write(), info.account.as_deref());
                self.connection.set(info);
            }
            AppEvent::BalancesFetched(fetched) => {
                self.balances.write().extend(fetched);
            }
        }
    }
}

/// Drops cached balances that do not belong to `account`.
pub fn retain_account(balances: &mut HashMap<String, EthAmount>, account: Option<&str>) {
    balances.retain(|key, _| Some(key.as_str()) == account);
}
