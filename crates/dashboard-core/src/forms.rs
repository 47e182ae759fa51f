//! Dashboard forms and their validation.
//!
//! Each form holds the raw text the user typed. [`Form::to_call`] validates it
//! against the dashboard config and turns it into a [`LedgerCall`]; a form that
//! fails validation never produces a call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::AccountAddress;
use crate::amount::parse_positive_amount;
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::ledger::LedgerCall;

/// Identifies a form for the in-flight guard. Pause and unpause share one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormKind {
    Mint,
    Transfer,
    Redeem,
    PauseToggle,
    Blacklist,
    Unblacklist,
    Ownership,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormKind::Mint => "mint",
            FormKind::Transfer => "transfer",
            FormKind::Redeem => "redeem",
            FormKind::PauseToggle => "pause",
            FormKind::Blacklist => "blacklist",
            FormKind::Unblacklist => "unblacklist",
            FormKind::Ownership => "ownership transfer",
        };
        f.write_str(name)
    }
}

pub trait Form {
    fn kind(&self) -> FormKind;

    /// Validate the form. `account` is the connected wallet, if any.
    fn to_call(&self, config: &DashboardConfig, account: Option<&AccountAddress>) -> Result<LedgerCall>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MintForm {
    pub recipient: String,
    pub amount: String,
    /// Ignore `recipient` and mint to the connected account.
    pub mint_to_self: bool,
}

impl Form for MintForm {
    fn kind(&self) -> FormKind {
        FormKind::Mint
    }

    fn to_call(&self, config: &DashboardConfig, account: Option<&AccountAddress>) -> Result<LedgerCall> {
        let to = if self.mint_to_self {
            *account.ok_or(DashboardError::WalletNotConnected)?
        } else {
            require(&self.recipient, "Enter a recipient address and amount to mint.")?;
            AccountAddress::parse(&self.recipient, config.ss58_prefix)?
        };
        require(&self.amount, "Enter a recipient address and amount to mint.")?;
        let amount = parse_positive_amount(&self.amount, config.decimals)?;
        Ok(LedgerCall::Mint { to, amount })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub recipient: String,
    pub amount: String,
}

impl Form for TransferForm {
    fn kind(&self) -> FormKind {
        FormKind::Transfer
    }

    fn to_call(&self, config: &DashboardConfig, _account: Option<&AccountAddress>) -> Result<LedgerCall> {
        const PROMPT: &str = "Enter a recipient address and amount to transfer.";
        require(&self.recipient, PROMPT)?;
        require(&self.amount, PROMPT)?;
        let to = AccountAddress::parse(&self.recipient, config.ss58_prefix)?;
        let amount = parse_positive_amount(&self.amount, config.decimals)?;
        Ok(LedgerCall::Transfer { to, amount })
    }
}

/// Burn tokens against a fiat payout. The currency always comes from config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedeemForm {
    pub amount: String,
}

impl Form for RedeemForm {
    fn kind(&self) -> FormKind {
        FormKind::Redeem
    }

    fn to_call(&self, config: &DashboardConfig, _account: Option<&AccountAddress>) -> Result<LedgerCall> {
        require(&self.amount, "Enter an amount to burn.")?;
        let amount = parse_positive_amount(&self.amount, config.decimals)?;
        Ok(LedgerCall::Redeem { amount, currency: config.redeem_currency.clone() })
    }
}

/// The pause button: submits whichever call flips the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseToggle {
    pub currently_paused: bool,
}

pub fn toggle_pause(currently_paused: bool) -> PauseToggle {
    PauseToggle { currently_paused }
}

impl Form for PauseToggle {
    fn kind(&self) -> FormKind {
        FormKind::PauseToggle
    }

    fn to_call(&self, _config: &DashboardConfig, _account: Option<&AccountAddress>) -> Result<LedgerCall> {
        Ok(if self.currently_paused { LedgerCall::Unpause } else { LedgerCall::Pause })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlacklistForm {
    pub account: String,
}

impl Form for BlacklistForm {
    fn kind(&self) -> FormKind {
        FormKind::Blacklist
    }

    fn to_call(&self, config: &DashboardConfig, _account: Option<&AccountAddress>) -> Result<LedgerCall> {
        require(&self.account, "Enter a wallet address to blacklist.")?;
        let account = AccountAddress::parse(&self.account, config.ss58_prefix)?;
        Ok(LedgerCall::Blacklist { account })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnblacklistForm {
    pub account: String,
}

impl Form for UnblacklistForm {
    fn kind(&self) -> FormKind {
        FormKind::Unblacklist
    }

    fn to_call(&self, config: &DashboardConfig, _account: Option<&AccountAddress>) -> Result<LedgerCall> {
        require(&self.account, "Enter a wallet address to unblacklist.")?;
        let account = AccountAddress::parse(&self.account, config.ss58_prefix)?;
        Ok(LedgerCall::Unblacklist { account })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipForm {
    pub new_owner: String,
}

impl Form for OwnershipForm {
    fn kind(&self) -> FormKind {
        FormKind::Ownership
    }

    fn to_call(&self, config: &DashboardConfig, _account: Option<&AccountAddress>) -> Result<LedgerCall> {
        require(&self.new_owner, "Enter the new owner address.")?;
        let new_owner = AccountAddress::parse(&self.new_owner, config.ss58_prefix)?;
        Ok(LedgerCall::TransferOwnership { new_owner })
    }
}

fn require(field: &str, prompt: &'static str) -> Result<()> {
    if field.trim().is_empty() {
        return Err(DashboardError::MissingInput(prompt));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE_SS58: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

    fn alice() -> AccountAddress {
        AccountAddress::parse(ALICE_SS58, 42).unwrap()
    }

    fn config() -> DashboardConfig {
        DashboardConfig::default()
    }

    #[test]
    fn mint_to_recipient() {
        let form = MintForm { recipient: ALICE_SS58.into(), amount: "500000".into(), mint_to_self: false };
        assert_eq!(
            form.to_call(&config(), None).unwrap(),
            LedgerCall::Mint { to: alice(), amount: 500_000_000_000 }
        );
    }

    #[test]
    fn mint_to_self_uses_connected_account() {
        let me = AccountAddress::from_raw([7; 32]);
        let form = MintForm { recipient: String::new(), amount: "1.5".into(), mint_to_self: true };
        assert_eq!(
            form.to_call(&config(), Some(&me)).unwrap(),
            LedgerCall::Mint { to: me, amount: 1_500_000 }
        );
        assert_eq!(form.to_call(&config(), None), Err(DashboardError::WalletNotConnected));
    }

    #[test]
    fn missing_fields_report_the_form_prompt() {
        let mint = MintForm { recipient: " ".into(), amount: "1".into(), mint_to_self: false };
        assert_eq!(
            mint.to_call(&config(), None),
            Err(DashboardError::MissingInput("Enter a recipient address and amount to mint."))
        );

        let transfer = TransferForm { recipient: ALICE_SS58.into(), amount: String::new() };
        assert_eq!(
            transfer.to_call(&config(), None),
            Err(DashboardError::MissingInput("Enter a recipient address and amount to transfer."))
        );

        assert_eq!(
            RedeemForm::default().to_call(&config(), None),
            Err(DashboardError::MissingInput("Enter an amount to burn."))
        );
        assert_eq!(
            BlacklistForm::default().to_call(&config(), None),
            Err(DashboardError::MissingInput("Enter a wallet address to blacklist."))
        );
        assert_eq!(
            UnblacklistForm::default().to_call(&config(), None),
            Err(DashboardError::MissingInput("Enter a wallet address to unblacklist."))
        );
    }

    #[test]
    fn transfer_rejects_bad_input() {
        let bad_address = TransferForm { recipient: "not-an-address".into(), amount: "1".into() };
        assert!(matches!(
            bad_address.to_call(&config(), None),
            Err(DashboardError::InvalidAddress(_))
        ));

        let zero_amount = TransferForm { recipient: ALICE_SS58.into(), amount: "0".into() };
        assert_eq!(zero_amount.to_call(&config(), None), Err(DashboardError::NonPositiveAmount));

        let too_precise = TransferForm { recipient: ALICE_SS58.into(), amount: "1.0000001".into() };
        assert_eq!(
            too_precise.to_call(&config(), None),
            Err(DashboardError::TooManyDecimals { max: 6 })
        );
    }

    #[test]
    fn redeem_always_uses_configured_currency() {
        let form = RedeemForm { amount: "100".into() };
        assert_eq!(
            form.to_call(&config(), None).unwrap(),
            LedgerCall::Redeem { amount: 100_000_000, currency: "USD".into() }
        );
    }

    #[test]
    fn pause_toggle_flips_state() {
        assert_eq!(toggle_pause(false).to_call(&config(), None).unwrap(), LedgerCall::Pause);
        assert_eq!(toggle_pause(true).to_call(&config(), None).unwrap(), LedgerCall::Unpause);
    }

    #[test]
    fn admin_forms_parse_addresses() {
        let blacklist = BlacklistForm { account: ALICE_SS58.into() };
        assert_eq!(
            blacklist.to_call(&config(), None).unwrap(),
            LedgerCall::Blacklist { account: alice() }
        );

        let unblacklist = UnblacklistForm { account: ALICE_SS58.into() };
        assert_eq!(
            unblacklist.to_call(&config(), None).unwrap(),
            LedgerCall::Unblacklist { account: alice() }
        );

        let ownership = OwnershipForm { new_owner: ALICE_SS58.into() };
        assert_eq!(
            ownership.to_call(&config(), None).unwrap(),
            LedgerCall::TransferOwnership { new_owner: alice() }
        );
    }

    #[test]
    fn zero_address_is_rejected_everywhere() {
        let zero = format!("0x{}", "00".repeat(32));
        assert!(BlacklistForm { account: zero.clone() }.to_call(&config(), None).is_err());
        assert!(OwnershipForm { new_owner: zero.clone() }.to_call(&config(), None).is_err());
        assert!(TransferForm { recipient: zero, amount: "1".into() }.to_call(&config(), None).is_err());
    }
}
