use serde::{Deserialize, Serialize};

use crate::amount::format_amount;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::ledger::LedgerCall;
use crate::LOG_TARGET;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Success,
    Error,
    Info,
}

/// A toast shown after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub variant: NoticeVariant,
    pub message: String,
}

impl Notice {
    /// Confirmation for an accepted call. Redemptions get an informational notice
    /// since the fiat leg settles off-chain.
    pub fn submitted(call: &LedgerCall, config: &DashboardConfig) -> Self {
        let amount = |value: u128| format!("{} {}", format_amount(value, config.decimals), config.symbol);
        let addr = |who: &crate::address::AccountAddress| who.to_ss58(config.ss58_prefix);

        let message = match call {
            LedgerCall::Mint { amount: value, .. } => {
                format!("Minting transaction submitted for {}.", amount(*value))
            }
            LedgerCall::Transfer { to, amount: value } => {
                format!("Transfer transaction submitted to {} for {}.", addr(to), amount(*value))
            }
            LedgerCall::Redeem { currency, .. } => {
                return Self::info(format!(
                    "Burn request submitted. The {currency} amount will be settled by wire \
                     transfer to the bank account in 2-3 business days."
                ));
            }
            LedgerCall::Pause => "Pause transaction submitted.".to_string(),
            LedgerCall::Unpause => "Unpause transaction submitted.".to_string(),
            LedgerCall::Blacklist { account } => {
                format!("Blacklist transaction submitted for {}.", addr(account))
            }
            LedgerCall::Unblacklist { account } => {
                format!("Unblacklist transaction submitted for {}.", addr(account))
            }
            LedgerCall::TransferOwnership { new_owner } => {
                format!("Ownership transfer submitted to {}.", addr(new_owner))
            }
        };
        Self { variant: NoticeVariant::Success, message }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { variant: NoticeVariant::Info, message: message.into() }
    }

    /// Error notice for a failed validation or dispatch. Always logged.
    pub fn error(err: &DashboardError) -> Self {
        match err {
            DashboardError::Ledger(ledger) => {
                log::warn!(target: LOG_TARGET, "ledger rejected call: {ledger:?}")
            }
            other => log::warn!(target: LOG_TARGET, "request failed: {other}"),
        }
        Self { variant: NoticeVariant::Error, message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AccountAddress;
    use crate::ledger::LedgerError;

    #[test]
    fn success_messages() {
        let config = DashboardConfig::default();
        let alice = AccountAddress::from_raw([9; 32]);

        let mint = Notice::submitted(&LedgerCall::Mint { to: alice, amount: 500_000_000_000 }, &config);
        assert_eq!(mint.variant, NoticeVariant::Success);
        assert_eq!(mint.message, "Minting transaction submitted for 500,000 PUSD.");

        let transfer = Notice::submitted(&LedgerCall::Transfer { to: alice, amount: 1_250_000 }, &config);
        assert_eq!(
            transfer.message,
            format!("Transfer transaction submitted to {} for 1.25 PUSD.", alice.to_ss58(42))
        );

        assert_eq!(Notice::submitted(&LedgerCall::Pause, &config).message, "Pause transaction submitted.");
        assert_eq!(
            Notice::submitted(&LedgerCall::Unpause, &config).message,
            "Unpause transaction submitted."
        );
    }

    #[test]
    fn redeem_is_informational() {
        let notice = Notice::submitted(
            &LedgerCall::Redeem { amount: 1, currency: "USD".into() },
            &DashboardConfig::default(),
        );
        assert_eq!(notice.variant, NoticeVariant::Info);
        assert_eq!(
            notice.message,
            "Burn request submitted. The USD amount will be settled by wire transfer to the bank \
             account in 2-3 business days."
        );
    }

    #[test]
    fn ledger_errors_use_friendly_text() {
        let notice = Notice::error(&DashboardError::Ledger(LedgerError::BlacklistedRecipient));
        assert_eq!(notice.variant, NoticeVariant::Error);
        assert_eq!(notice.message, "Recipient blacklisted.");
    }

    #[test]
    fn serializes_variant_lowercase() {
        let json = serde_json::to_string(&Notice::info("hi")).unwrap();
        assert_eq!(json, r#"{"variant":"info","message":"hi"}"#);
    }
}
