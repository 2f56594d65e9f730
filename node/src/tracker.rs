//! In-memory dispatch tracking.
//!
//! A liveness view only: which requests this node has handed to the
//! external verifier and what verdicts have come back. Lost on restart;
//! finalization never consults it.

use std::collections::HashMap;
use std::sync::Mutex;

use attest_types::{Timestamp, TxId};
use attest_utils::format_duration;
use tracing::debug;

/// How long a received verdict stays queryable before the sweep retires it.
const VERDICT_RETENTION_SECS: u64 = 3600;

struct Pending {
    budget_secs: u64,
    deadline: Timestamp,
}

struct Verdict {
    is_valid: bool,
    recorded_at: Timestamp,
}

#[derive(Default)]
struct Inner {
    /// Requests awaiting a verdict, keyed by request id.
    pending: HashMap<TxId, Pending>,
    /// Last verdict received per request.
    verdicts: HashMap<TxId, Verdict>,
}

/// Tracks outstanding dispatches and received verdicts.
///
/// The lock guards plain map access only; callers must never hold it
/// across I/O. Entries do not live forever: [`DispatchTracker::sweep_expired`]
/// drops pending requests whose budget elapsed without a verdict and retires
/// old verdicts, so a long-running process stays bounded.
#[derive(Default)]
pub struct DispatchTracker {
    inner: Mutex<Inner>,
}

impl DispatchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a request was dispatched with the given budget.
    pub fn track(&self, id: TxId, budget_secs: u64) {
        let mut inner = self.lock();
        inner.pending.insert(
            id,
            Pending {
                budget_secs,
                deadline: Timestamp::now().add_secs(budget_secs),
            },
        );
        debug!(request = %id, budget = %format_duration(budget_secs), "tracking dispatch");
    }

    /// Forget a request (expired or no longer interesting).
    pub fn drop_request(&self, id: &TxId) {
        self.lock().pending.remove(id);
    }

    /// Record a verdict for a request and stop tracking it as pending.
    pub fn record_verdict(&self, id: TxId, is_valid: bool) {
        let mut inner = self.lock();
        inner.pending.remove(&id);
        inner.verdicts.insert(
            id,
            Verdict {
                is_valid,
                recorded_at: Timestamp::now(),
            },
        );
    }

    /// Drop pending requests whose budget elapsed without a verdict and
    /// retire verdicts older than the retention window. Returns how many
    /// pending dispatches were dropped.
    pub fn sweep_expired(&self, now: Timestamp) -> usize {
        let mut inner = self.lock();
        let before = inner.pending.len();
        inner.pending.retain(|_, entry| !now.is_after(entry.deadline));
        let dropped = before - inner.pending.len();
        inner
            .verdicts
            .retain(|_, v| !now.is_after(v.recorded_at.add_secs(VERDICT_RETENTION_SECS)));
        if dropped > 0 {
            debug!(dropped, "dropped expired dispatches");
        }
        dropped
    }

    /// Number of requests still awaiting a verdict.
    pub fn pending_count(&self) -> usize {
        self.lock().pending.len()
    }

    /// The budget a pending request was dispatched with.
    pub fn budget(&self, id: &TxId) -> Option<u64> {
        self.lock().pending.get(id).map(|entry| entry.budget_secs)
    }

    /// The last verdict received for a request, if any.
    pub fn verdict(&self, id: &TxId) -> Option<bool> {
        self.lock().verdicts.get(id).map(|v| v.is_valid)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a panic mid-map-access; the maps hold plain
        // values, so the data is still coherent.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_and_drop() {
        let tracker = DispatchTracker::new();
        let id = TxId::new([1; 32]);
        tracker.track(id, 60);
        assert_eq!(tracker.pending_count(), 1);
        assert_eq!(tracker.budget(&id), Some(60));
        tracker.drop_request(&id);
        assert_eq!(tracker.pending_count(), 0);
    }

    #[test]
    fn verdict_clears_pending() {
        let tracker = DispatchTracker::new();
        let id = TxId::new([1; 32]);
        tracker.track(id, 60);
        tracker.record_verdict(id, true);
        assert_eq!(tracker.pending_count(), 0);
        assert_eq!(tracker.verdict(&id), Some(true));
    }

    #[test]
    fn verdict_without_track_is_recorded() {
        let tracker = DispatchTracker::new();
        let id = TxId::new([2; 32]);
        tracker.record_verdict(id, false);
        assert_eq!(tracker.verdict(&id), Some(false));
        assert_eq!(tracker.verdict(&TxId::new([3; 32])), None);
    }

    #[test]
    fn sweep_drops_only_expired_pending() {
        let tracker = DispatchTracker::new();
        let short = TxId::new([1; 32]);
        let long = TxId::new([2; 32]);
        tracker.track(short, 60);
        tracker.track(long, 600);

        let dropped = tracker.sweep_expired(Timestamp::now().add_secs(120));
        assert_eq!(dropped, 1);
        assert_eq!(tracker.budget(&short), None);
        assert_eq!(tracker.budget(&long), Some(600));
    }

    #[test]
    fn sweep_retires_old_verdicts() {
        let tracker = DispatchTracker::new();
        let id = TxId::new([4; 32]);
        tracker.record_verdict(id, true);

        tracker.sweep_expired(Timestamp::now().add_secs(VERDICT_RETENTION_SECS));
        assert_eq!(tracker.verdict(&id), Some(true));

        tracker.sweep_expired(Timestamp::now().add_secs(VERDICT_RETENTION_SECS + 60));
        assert_eq!(tracker.verdict(&id), None);
    }
}
