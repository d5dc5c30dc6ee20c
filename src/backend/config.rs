use std::time::Duration;

const DEFAULT_RPC_URL: &str = "https://cloudflare-eth.com";
const DEFAULT_BALANCE_REFRESH_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint used for balance lookups.
    pub rpc_url: String,
    pub balance_refresh: Duration,
}

impl Config {
    /// Defaults, overridable at build time with `KP2R_RPC_URL` and
    /// `KP2R_BALANCE_REFRESH_SECS`.
    pub fn from_env() -> Self {
        let rpc_url = option_env!("KP2R_RPC_URL").unwrap_or(DEFAULT_RPC_URL).to_string();
        let refresh_secs = option_env!("KP2R_BALANCE_REFRESH_SECS")
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_BALANCE_REFRESH_SECS);

        Self {
            rpc_url,
            balance_refresh: Duration::from_secs(refresh_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
