pub mod amount;
pub mod chain;
pub mod config;
pub mod rpc;

use amount::EthAmount;
use chain::ConnectionInfo;
use config::Config;
use futures::future::join_all;
#[cfg(target_arch = "wasm32")]
use futures::StreamExt;
use rpc::RpcClient;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppCmd {
    /// Wallet widget reports a new (or cleared) connection.
    SetConnection(ConnectionInfo),
    FetchBalances { accounts: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ConnectionChanged(ConnectionInfo),
    /// Successful lookups only. Failed accounts are left out.
    BalancesFetched(Vec<(String, EthAmount)>),
}

pub struct Backend {
    config: Config,
    rpc: RpcClient,
    cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    watched_account: Option<String>,
}

impl Backend {
    pub fn new(
        config: Config,
        cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let rpc = RpcClient::new(config.rpc_url.clone());
        Self {
            config,
            rpc,
            cmd_rx,
            event_tx,
            watched_account: None,
        }
    }

    pub async fn run(&mut self) {
        tracing::info!(rpc_url = %self.rpc.url(), "Backend started");

        #[cfg(not(target_arch = "wasm32"))]
        let mut refresh_interval = tokio::time::interval(self.config.balance_refresh);

        #[cfg(target_arch = "wasm32")]
        let mut refresh_interval =
            gloo_timers::future::IntervalStream::new(self.config.balance_refresh.as_millis() as u32);

        loop {
            tokio::select! {
                cmd = self.cmd_rx.recv() => {
                    let Some(cmd) = cmd else {
                        tracing::info!("Command channel closed, stopping backend");
                        break;
                    };
                    self.handle_command(cmd).await;
                }
                _ = async {
                    #[cfg(not(target_arch = "wasm32"))]
                    {
                        refresh_interval.tick().await;
                    }
                    #[cfg(target_arch = "wasm32")]
                    {
                        refresh_interval.next().await;
                    }
                } => {
                    self.refresh_watched_account().await;
                }
            }
        }
    }

    async fn handle_command(&mut self, cmd: AppCmd) {
        match cmd {
            AppCmd::SetConnection(info) => {
                tracing::debug!(account = ?info.account, chain_id = ?info.chain_id, "Connection changed");
                self.watched_account = info.account.clone();
                let _ = self.event_tx.send(AppEvent::ConnectionChanged(info));
                self.refresh_watched_account().await;
            }
            AppCmd::FetchBalances { accounts } => {
                self.fetch_balances(accounts).await;
            }
        }
    }

    async fn refresh_watched_account(&self) {
        if let Some(account) = self.watched_account.clone() {
            self.fetch_balances(vec![account]).await;
        }
    }

    async fn fetch_balances(&self, accounts: Vec<String>) {
        if accounts.is_empty() {
            let _ = self.event_tx.send(AppEvent::BalancesFetched(Vec::new()));
            return;
        }

        let lookups = accounts.iter().map(|account| self.rpc.get_balance(account));
        let results = join_all(lookups).await;

        let mut balances = Vec::with_capacity(accounts.len());
        for (account, result) in accounts.into_iter().zip(results) {
            match result {
                Ok(balance) => balances.push((account, balance)),
                Err(e) => tracing::warn!(%account, error = %e, "Failed to fetch balance"),
            }
        }

        tracing::debug!(count = balances.len(), "Balances fetched");
        let _ = self.event_tx.send(AppEvent::BalancesFetched(balances));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_config() -> Config {
        Config {
            // Nothing listens on port 1; lookups fail fast.
            rpc_url: "http://127.0.0.1:1".to_string(),
            balance_refresh: Duration::from_secs(3600),
        }
    }

    fn offline_backend() -> (
        Backend,
        mpsc::UnboundedSender<AppCmd>,
        mpsc::UnboundedReceiver<AppEvent>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (Backend::new(offline_config(), cmd_rx, event_tx), cmd_tx, event_rx)
    }

    #[tokio::test]
    async fn test_empty_balance_request_needs_no_network() {
        let (mut backend, _cmd_tx, mut event_rx) = offline_backend();

        backend
            .handle_command(AppCmd::FetchBalances { accounts: vec![] })
            .await;

        assert_eq!(event_rx.try_recv().unwrap(), AppEvent::BalancesFetched(vec![]));
    }

    #[tokio::test]
    async fn test_failed_lookups_are_omitted() {
        let (mut backend, _cmd_tx, mut event_rx) = offline_backend();

        backend
            .handle_command(AppCmd::FetchBalances {
                accounts: vec!["0xAA".to_string()],
            })
            .await;

        assert_eq!(event_rx.try_recv().unwrap(), AppEvent::BalancesFetched(vec![]));
    }

    #[tokio::test]
    async fn test_disconnect_emits_connection_change_only() {
        let (mut backend, _cmd_tx, mut event_rx) = offline_backend();

        backend
            .handle_command(AppCmd::SetConnection(ConnectionInfo::default()))
            .await;

        assert_eq!(
            event_rx.try_recv().unwrap(),
            AppEvent::ConnectionChanged(ConnectionInfo::default())
        );
        assert!(event_rx.try_recv().is_err());
        assert!(backend.watched_account.is_none());
    }

    #[tokio::test]
    async fn test_connect_watches_account_and_fetches_its_balance() {
        let (mut backend, _cmd_tx, mut event_rx) = offline_backend();
        let info = ConnectionInfo::new("0xAA", 4);

        backend.handle_command(AppCmd::SetConnection(info.clone())).await;

        assert_eq!(event_rx.try_recv().unwrap(), AppEvent::ConnectionChanged(info));
        // Offline: the lookup fails and the account is simply missing.
        assert_eq!(event_rx.try_recv().unwrap(), AppEvent::BalancesFetched(vec![]));
        assert_eq!(backend.watched_account.as_deref(), Some("0xAA"));
    }

    #[tokio::test]
    async fn test_run_stops_when_commands_close() {
        let (mut backend, cmd_tx, mut event_rx) = offline_backend();

        cmd_tx
            .send(AppCmd::SetConnection(ConnectionInfo::default()))
            .unwrap();
        drop(cmd_tx);

        tokio::time::timeout(Duration::from_secs(5), backend.run())
            .await
            .expect("backend did not stop");

        assert_eq!(
            event_rx.try_recv().unwrap(),
            AppEvent::ConnectionChanged(ConnectionInfo::default())
        );
    }
}
