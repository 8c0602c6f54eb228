//! Cleanup ledger: the record of players created during one test scenario.
//!
//! # Design
//! The ledger owns its invariants — no duplicate ids, a released id is gone —
//! instead of scattering them across callers. It is scenario-local: interior
//! mutability lets several verifier instances share one `&CleanupLedger`
//! within a test thread, and the deliberate absence of `Sync` keeps it from
//! leaking across parallel scenarios (each scenario builds its own).

use std::cell::RefCell;

use crate::client::PlayerApiClient;

/// Ordered, duplicate-free collection of created player ids.
#[derive(Debug, Default)]
pub struct CleanupLedger {
    ids: RefCell<Vec<i64>>,
}

impl CleanupLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a created id. Duplicates are refused, keeping the ledger
    /// consistent even if a test re-records the same player.
    pub fn record(&self, id: i64) -> bool {
        let mut ids = self.ids.borrow_mut();
        if ids.contains(&id) {
            tracing::warn!(id, "id already tracked for cleanup, ignoring duplicate");
            return false;
        }
        ids.push(id);
        tracing::debug!(id, "tracking player for cleanup");
        true
    }

    /// Release an id after a confirmed deletion. Returns whether it was
    /// present.
    pub fn release(&self, id: i64) -> bool {
        let mut ids = self.ids.borrow_mut();
        match ids.iter().position(|tracked| *tracked == id) {
            Some(index) => {
                ids.remove(index);
                tracing::debug!(id, "released player from cleanup");
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.borrow().contains(&id)
    }

    /// Snapshot of the tracked ids in recording order.
    pub fn ids(&self) -> Vec<i64> {
        self.ids.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.ids.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.borrow().is_empty()
    }

    /// Best-effort end-of-run sweep: attempt to delete every tracked player.
    ///
    /// A failed deletion is logged and skipped, never escalated — teardown
    /// must keep going through the remaining entries. Returns how many
    /// players were actually deleted.
    pub fn sweep(&self, client: &PlayerApiClient, editor: &str) -> usize {
        let pending = self.ids();
        let mut deleted = 0;
        for id in pending {
            match client.delete(editor, id) {
                Ok(response) if response.status == 204 || response.status == 200 => {
                    self.release(id);
                    deleted += 1;
                }
                Ok(response) => {
                    tracing::warn!(id, status = response.status, "cleanup delete refused");
                }
                Err(error) => {
                    tracing::warn!(id, %error, "cleanup delete failed");
                }
            }
        }
        deleted
    }
}
