//! Dashboard session state.
//!
//! Flow for a write: [`Dashboard::submit`] validates a form and records the call
//! as in flight; the host signs and sends it; [`Dashboard::complete`] clears the
//! in-flight entry and returns the notice to show. A confirmed call marks the
//! snapshot stale until the next [`Dashboard::refresh`]. Only one call per form can
//! be in flight, and nothing is retried.

use std::collections::BTreeMap;

use crate::address::AccountAddress;
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::forms::{Form, FormKind};
use crate::ledger::{LedgerCall, LedgerError, LedgerReader, LedgerSnapshot};
use crate::notice::Notice;
use crate::LOG_TARGET;

#[derive(Debug, Default)]
pub struct Dashboard {
    config: DashboardConfig,
    account: Option<AccountAddress>,
    snapshot: Option<LedgerSnapshot>,
    /// Set when a confirmed call may have changed what `snapshot` shows.
    stale: bool,
    in_flight: BTreeMap<FormKind, LedgerCall>,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config, ..Default::default() }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn account(&self) -> Option<&AccountAddress> {
        self.account.as_ref()
    }

    pub fn snapshot(&self) -> Option<&LedgerSnapshot> {
        self.snapshot.as_ref()
    }

    /// Switch to `account`. The cached snapshot belongs to the previous account
    /// and is dropped.
    pub fn connect(&mut self, account: AccountAddress) {
        log::info!(target: LOG_TARGET, "wallet connected: {}", account.short(self.config.ss58_prefix));
        self.account = Some(account);
        self.snapshot = None;
    }

    pub fn disconnect(&mut self) {
        self.account = None;
        self.snapshot = None;
    }

    /// Re-read ledger state. On failure the previous snapshot is kept.
    pub fn refresh<R: LedgerReader + ?Sized>(&mut self, reader: &R) -> Result<&LedgerSnapshot> {
        let snapshot = LedgerSnapshot::fetch(reader, self.account.as_ref()).map_err(|err| {
            log::warn!(target: LOG_TARGET, "failed to read ledger state: {err}");
            err
        })?;
        self.stale = false;
        Ok(&*self.snapshot.insert(snapshot))
    }

    /// True when there is no snapshot, or a confirmed call has outdated it.
    pub fn needs_refresh(&self) -> bool {
        self.stale || self.snapshot.is_none()
    }

    pub fn is_owner(&self) -> bool {
        self.snapshot.as_ref().is_some_and(|s| s.is_owner(self.account.as_ref()))
    }

    pub fn is_in_flight(&self, kind: FormKind) -> bool {
        self.in_flight.contains_key(&kind)
    }

    /// Validate `form` and mark it in flight. The returned call is what the host
    /// should sign and send.
    pub fn submit<F: Form + ?Sized>(&mut self, form: &F) -> Result<LedgerCall> {
        let kind = form.kind();
        if self.in_flight.contains_key(&kind) {
            return Err(DashboardError::SubmissionInFlight(kind));
        }
        let call = form.to_call(&self.config, self.account.as_ref())?;
        log::debug!(target: LOG_TARGET, "submitting {}: {call:?}", call.call_name());
        self.in_flight.insert(kind, call.clone());
        Ok(call)
    }

    /// Settle the in-flight call for `kind` and build the notice for it.
    /// `outcome` carries the dispatch error name if the ledger rejected the call.
    pub fn complete(&mut self, kind: FormKind, outcome: std::result::Result<(), String>) -> Option<Notice> {
        let call = self.in_flight.remove(&kind)?;
        Some(match outcome {
            Ok(()) => {
                self.stale = true;
                Notice::submitted(&call, &self.config)
            }
            Err(reported) => Notice::error(&DashboardError::Ledger(LedgerError::parse(&reported))),
        })
    }

    /// Notice for a submission that never got as far as the ledger.
    pub fn reject(&self, err: &DashboardError) -> Notice {
        Notice::error(err)
    }
}
