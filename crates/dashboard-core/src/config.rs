use serde::{Deserialize, Serialize};

/// Generic Substrate SS58 prefix, used by development chains.
pub const DEFAULT_SS58_PREFIX: u16 = 42;

/// Display and submission settings for one deployed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub symbol: String,
    /// Must match the ledger's `decimals` value.
    pub decimals: u8,
    /// Fiat currency tag attached to every redemption request.
    pub redeem_currency: String,
    pub ss58_prefix: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            symbol: "PUSD".into(),
            decimals: 6,
            redeem_currency: "USD".into(),
            ss58_prefix: DEFAULT_SS58_PREFIX,
        }
    }
}
