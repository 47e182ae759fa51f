//! The dashboard's view of the on-chain PUSD ledger.
//!
//! Reads go through [`LedgerReader`], implemented by whatever RPC client the
//! host wires in. Writes leave this crate as [`LedgerCall`] values; signing and
//! submission are the host's job. Dispatch failures come back as pallet error
//! names and are decoded into [`LedgerError`].

use serde::{Deserialize, Serialize};

use crate::address::AccountAddress;
use crate::error::Result;
use crate::forms::FormKind;

/// Pallet name under which the ledger is installed in the runtime.
pub const PALLET_NAME: &str = "PusdToken";

/// A dispatch error reported by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerError {
    NotOwner,
    Paused,
    BlacklistedSender,
    BlacklistedRecipient,
    InsufficientBalance,
    SupplyCapExceeded,
    InvalidAddress,
    Overflow,
    BadOrigin,
    /// Anything the dashboard has no dedicated message for, kept verbatim for the log.
    Other(String),
}

impl LedgerError {
    /// Decode an error name as reported by the node, with or without the pallet
    /// qualifier: `Paused`, `PusdToken.Paused` and `PusdToken::Paused` are equivalent.
    pub fn parse(reported: &str) -> Self {
        let reported = reported.trim();
        let name = reported
            .strip_prefix(PALLET_NAME)
            .and_then(|rest| rest.strip_prefix("::").or_else(|| rest.strip_prefix('.')))
            .unwrap_or(reported);
        Self::from_name(name).unwrap_or_else(|| LedgerError::Other(reported.to_string()))
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let err = match name {
            "NotOwner" => LedgerError::NotOwner,
            "Paused" => LedgerError::Paused,
            "BlacklistedSender" => LedgerError::BlacklistedSender,
            "BlacklistedRecipient" => LedgerError::BlacklistedRecipient,
            "InsufficientBalance" => LedgerError::InsufficientBalance,
            "SupplyCapExceeded" => LedgerError::SupplyCapExceeded,
            "InvalidAddress" => LedgerError::InvalidAddress,
            "Overflow" => LedgerError::Overflow,
            "BadOrigin" => LedgerError::BadOrigin,
            _ => return None,
        };
        Some(err)
    }

    /// Text shown in the error notice.
    pub fn user_message(&self) -> &'static str {
        match self {
            LedgerError::NotOwner => "Only the token owner can do this.",
            LedgerError::Paused => "The token is paused. All transfers are blocked.",
            LedgerError::BlacklistedSender => "Sender blacklisted.",
            LedgerError::BlacklistedRecipient => "Recipient blacklisted.",
            LedgerError::InsufficientBalance => "Insufficient balance.",
            LedgerError::SupplyCapExceeded => "Exceeds max supply.",
            LedgerError::InvalidAddress => "Invalid address.",
            LedgerError::Overflow | LedgerError::BadOrigin | LedgerError::Other(_) => {
                "Transaction failed. Check the console for details."
            }
        }
    }
}

/// A validated write, ready for the host to sign and submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerCall {
    Transfer { to: AccountAddress, amount: u128 },
    Mint { to: AccountAddress, amount: u128 },
    Redeem { amount: u128, currency: String },
    Pause,
    Unpause,
    Blacklist { account: AccountAddress },
    Unblacklist { account: AccountAddress },
    TransferOwnership { new_owner: AccountAddress },
}

impl LedgerCall {
    /// The form this call is submitted from.
    pub fn kind(&self) -> FormKind {
        match self {
            LedgerCall::Transfer { .. } => FormKind::Transfer,
            LedgerCall::Mint { .. } => FormKind::Mint,
            LedgerCall::Redeem { .. } => FormKind::Redeem,
            LedgerCall::Pause | LedgerCall::Unpause => FormKind::PauseToggle,
            LedgerCall::Blacklist { .. } => FormKind::Blacklist,
            LedgerCall::Unblacklist { .. } => FormKind::Unblacklist,
            LedgerCall::TransferOwnership { .. } => FormKind::Ownership,
        }
    }

    /// Pallet call name, matching the runtime metadata.
    pub fn call_name(&self) -> &'static str {
        match self {
            LedgerCall::Transfer { .. } => "transfer",
            LedgerCall::Mint { .. } => "mint",
            LedgerCall::Redeem { .. } => "redeem",
            LedgerCall::Pause => "pause",
            LedgerCall::Unpause => "unpause",
            LedgerCall::Blacklist { .. } => "blacklist",
            LedgerCall::Unblacklist { .. } => "unblacklist",
            LedgerCall::TransferOwnership { .. } => "transfer_ownership",
        }
    }
}

/// Read access to ledger storage.
pub trait LedgerReader {
    fn balance_of(&self, who: &AccountAddress) -> Result<u128>;
    fn total_supply(&self) -> Result<u128>;
    fn is_paused(&self) -> Result<bool>;
    fn owner(&self) -> Result<Option<AccountAddress>>;
    fn is_blacklisted(&self, who: &AccountAddress) -> Result<bool>;
    fn max_supply(&self) -> Result<u128>;
}

/// Cached ledger state for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Balance of the connected account; `None` when no wallet is connected.
    pub balance: Option<u128>,
    pub total_supply: u128,
    pub max_supply: u128,
    pub paused: bool,
    pub owner: Option<AccountAddress>,
    pub account_blacklisted: bool,
}

impl LedgerSnapshot {
    pub fn fetch<R: LedgerReader + ?Sized>(
        reader: &R,
        account: Option<&AccountAddress>,
    ) -> Result<Self> {
        let (balance, account_blacklisted) = match account {
            Some(who) => (Some(reader.balance_of(who)?), reader.is_blacklisted(who)?),
            None => (None, false),
        };
        Ok(Self {
            balance,
            total_supply: reader.total_supply()?,
            max_supply: reader.max_supply()?,
            paused: reader.is_paused()?,
            owner: reader.owner()?,
            account_blacklisted,
        })
    }

    pub fn is_owner(&self, account: Option<&AccountAddress>) -> bool {
        matches!((account, self.owner.as_ref()), (Some(a), Some(o)) if a == o)
    }

    pub fn paused_banner(&self) -> Option<&'static str> {
        self.paused.then_some("TOKEN PAUSED: all transfers blocked")
    }

    pub fn remaining_mint_capacity(&self) -> u128 {
        self.max_supply.saturating_sub(self.total_supply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_qualified_and_bare_error_names() {
        assert_eq!(LedgerError::parse("Paused"), LedgerError::Paused);
        assert_eq!(LedgerError::parse("PusdToken.NotOwner"), LedgerError::NotOwner);
        assert_eq!(
            LedgerError::parse("PusdToken::SupplyCapExceeded"),
            LedgerError::SupplyCapExceeded
        );
        assert_eq!(LedgerError::parse("BadOrigin"), LedgerError::BadOrigin);
    }

    #[test]
    fn unknown_errors_are_kept_verbatim() {
        assert_eq!(
            LedgerError::parse("Balances.ExistentialDeposit"),
            LedgerError::Other("Balances.ExistentialDeposit".into())
        );
        assert_eq!(
            LedgerError::parse("PusdToken.Bogus"),
            LedgerError::Other("PusdToken.Bogus".into())
        );
    }

    #[test]
    fn user_messages() {
        assert_eq!(
            LedgerError::Paused.user_message(),
            "The token is paused. All transfers are blocked."
        );
        assert_eq!(LedgerError::BlacklistedSender.user_message(), "Sender blacklisted.");
        assert_eq!(LedgerError::SupplyCapExceeded.user_message(), "Exceeds max supply.");
        assert_eq!(
            LedgerError::Other("x".into()).user_message(),
            "Transaction failed. Check the console for details."
        );
    }

    #[test]
    fn pause_and_unpause_share_a_form() {
        assert_eq!(LedgerCall::Pause.kind(), FormKind::PauseToggle);
        assert_eq!(LedgerCall::Unpause.kind(), FormKind::PauseToggle);
        assert_eq!(LedgerCall::Unpause.call_name(), "unpause");
    }

    #[test]
    fn snapshot_helpers() {
        let owner = AccountAddress::from_raw([1; 32]);
        let other = AccountAddress::from_raw([2; 32]);
        let snapshot = LedgerSnapshot {
            balance: Some(5),
            total_supply: 90,
            max_supply: 100,
            paused: true,
            owner: Some(owner),
            account_blacklisted: false,
        };

        assert!(snapshot.is_owner(Some(&owner)));
        assert!(!snapshot.is_owner(Some(&other)));
        assert!(!snapshot.is_owner(None));
        assert_eq!(snapshot.paused_banner(), Some("TOKEN PAUSED: all transfers blocked"));
        assert_eq!(snapshot.remaining_mint_capacity(), 10);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: LedgerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
