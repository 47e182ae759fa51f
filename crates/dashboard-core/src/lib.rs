//! Client-side core of the PUSD dashboard.
//!
//! Everything here is UI-agnostic: a front end renders [`LedgerSnapshot`]s, feeds
//! raw form input through [`Dashboard::submit`], signs the resulting
//! [`LedgerCall`] with the connected wallet and reports the outcome back through
//! [`Dashboard::complete`]. Amounts are `u128` smallest units throughout.

pub mod address;
pub mod amount;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod ledger;
pub mod notice;

pub use address::AccountAddress;
pub use amount::{format_amount, parse_amount, parse_positive_amount};
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use forms::{
    toggle_pause, BlacklistForm, Form, FormKind, MintForm, OwnershipForm, PauseToggle, RedeemForm,
    TransferForm, UnblacklistForm,
};
pub use ledger::{LedgerCall, LedgerError, LedgerReader, LedgerSnapshot};
pub use notice::{Notice, NoticeVariant};

pub(crate) const LOG_TARGET: &str = "pusd-dashboard";
