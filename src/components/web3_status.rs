use dioxus::prelude::*;
use serde::Deserialize;
use tokio::sync::mpsc::UnboundedSender;
use crate::backend::AppCmd;
use crate::backend::chain::{parse_quantity, shorten_address, ConnectionInfo};
use crate::components::hooks::use_active_web3;

// Asks an injected browser provider for the selected account and network.
const CONNECT_SCRIPT: &str = r#"
    if (!window.ethereum) {
        dioxus.send({ error: "No injected provider found" });
    } else {
        try {
            const accounts = await window.ethereum.request({ method: "eth_requestAccounts" });
            const chainId = await window.ethereum.request({ method: "eth_chainId" });
            dioxus.send({ accounts, chainId });
        } catch (e) {
            dioxus.send({ error: String((e && e.message) || e) });
        }
    }
"#;

#[derive(Debug, Default, Deserialize)]
struct ProviderReply {
    #[serde(default)]
    accounts: Vec<String>,
    #[serde(default, rename = "chainId")]
    chain_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ProviderReply {
    fn into_connection(self) -> Result<ConnectionInfo, String> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let account = self
            .accounts
            .into_iter()
            .next()
            .ok_or_else(|| "Provider returned no accounts".to_string())?;
        let chain_id = match self.chain_id {
            Some(raw) => {
                let id = parse_quantity(&raw)?;
                Some(u64::try_from(id).map_err(|_| format!("Chain id out of range: {}", raw))?)
            }
            None => None,
        };

        Ok(ConnectionInfo {
            account: Some(account),
            chain_id,
        })
    }
}

fn connect_injected(cmd_tx: UnboundedSender<AppCmd>) {
    let mut eval = document::eval(CONNECT_SCRIPT);
    spawn(async move {
        let reply = match eval.recv::<ProviderReply>().await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Wallet provider did not answer: {:?}", e);
                return;
            }
        };
        match reply.into_connection() {
            Ok(info) => {
                tracing::info!(account = ?info.account, chain_id = ?info.chain_id, "Wallet connected");
                let _ = cmd_tx.send(AppCmd::SetConnection(info));
            }
            Err(e) => tracing::warn!("Wallet connection failed: {}", e),
        }
    });
}

#[component]
pub fn Web3Status() -> Element {
    let connection = use_active_web3();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();

    match connection.account {
        Some(account) => {
            let short = shorten_address(&account, 4).unwrap_or_else(|_| account.clone());
            rsx! {
                button { class: "web3-status connected", id: "web3-status-connected", title: "{account}",
                    span { class: "status-dot" }
                    "{short}"
                }
            }
        }
        None => rsx! {
            button {
                class: "web3-status connect",
                id: "connect-wallet",
                onclick: move |_| connect_injected(cmd_tx.clone()),
                "Connect to a wallet"
            }
        },
    }
}
