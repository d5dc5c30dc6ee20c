/// Networks the interface knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainId {
    Mainnet,
    Ropsten,
    Rinkeby,
    Goerli,
    Kovan,
}

impl ChainId {
    pub const ALL: [ChainId; 5] = [
        ChainId::Mainnet,
        ChainId::Ropsten,
        ChainId::Rinkeby,
        ChainId::Goerli,
        ChainId::Kovan,
    ];

    pub fn from_id(id: u64) -> Option<Self> {
        match id {
            1 => Some(ChainId::Mainnet),
            3 => Some(ChainId::Ropsten),
            4 => Some(ChainId::Rinkeby),
            5 => Some(ChainId::Goerli),
            42 => Some(ChainId::Kovan),
            _ => None,
        }
    }

    pub fn id(self) -> u64 {
        match self {
            ChainId::Mainnet => 1,
            ChainId::Ropsten => 3,
            ChainId::Rinkeby => 4,
            ChainId::Goerli => 5,
            ChainId::Kovan => 42,
        }
    }

    /// Badge text for the network. The home network has none.
    pub fn label(self) -> Option<&'static str> {
        match self {
            ChainId::Mainnet => None,
            ChainId::Ropsten => Some("Ropsten"),
            ChainId::Rinkeby => Some("Rinkeby"),
            ChainId::Goerli => Some("Görli"),
            ChainId::Kovan => Some("Kovan"),
        }
    }
}

/// Label for a raw chain id, `None` for the home network and unknown ids.
pub fn network_label(chain_id: u64) -> Option<&'static str> {
    ChainId::from_id(chain_id).and_then(ChainId::label)
}

/// The wallet/account and network attached to the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub account: Option<String>,
    pub chain_id: Option<u64>,
}

impl ConnectionInfo {
    pub fn new(account: impl Into<String>, chain_id: u64) -> Self {
        Self {
            account: Some(account.into()),
            chain_id: Some(chain_id),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}

/// Parses a JSON-RPC hex quantity such as `"0x1bc16d674ec80000"`.
pub fn parse_quantity(raw: &str) -> Result<u128, String> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .ok_or_else(|| format!("Quantity missing 0x prefix: {}", raw))?;

    if digits.is_empty() {
        return Err("Empty quantity".to_string());
    }
    if digits.len() > 32 {
        return Err(format!("Quantity too large: {}", raw));
    }

    u128::from_str_radix(digits, 16).map_err(|e| format!("Invalid quantity {}: {}", raw, e))
}

/// Returns `0x1234...abcd` for a well-formed 20-byte hex address.
pub fn shorten_address(address: &str, chars: usize) -> Result<String, String> {
    let body = address
        .strip_prefix("0x")
        .ok_or_else(|| format!("Invalid address: {}", address))?;
    let bytes = hex::decode(body).map_err(|e| format!("Invalid address {}: {}", address, e))?;
    if bytes.len() != 20 {
        return Err(format!("Invalid address length: {}", address));
    }

    let chars = chars.min(20);
    Ok(format!("0x{}...{}", &body[..chars], &body[body.len() - chars..]))
}
