//! Request registry — opens a verification request's vote window.

use attest_store::{state, StateWrite};
use attest_types::{ProtocolParams, Timestamp, TxId};
use tracing::debug;

use crate::error::VoteError;

/// Engine for registering verification requests.
pub struct RequestRegistry {
    params: ProtocolParams,
}

impl RequestRegistry {
    pub fn new(params: ProtocolParams) -> Self {
        Self { params }
    }

    /// Register a verification request.
    ///
    /// The caller's timeout budget is clamped to protocol bounds; the
    /// absolute deadline and the current total validator weight are then
    /// persisted. Finalization later compares accumulated vote weight
    /// against this snapshot, so churn in the validator set cannot move
    /// the goalposts for an in-flight request.
    pub fn register(
        &self,
        state: &mut impl StateWrite,
        request_id: &TxId,
        timeout_budget_secs: u64,
        now: Timestamp,
        total_weight: u64,
    ) -> Result<Timestamp, VoteError> {
        let budget = timeout_budget_secs
            .clamp(self.params.min_timeout_secs, self.params.max_timeout_secs);
        let deadline = now.add_secs(budget);

        state::set_deadline(state, request_id, deadline)?;
        state::set_quorum_snapshot(state, request_id, total_weight)?;

        debug!(request = %request_id, deadline = deadline.as_secs(), total_weight, "registered verification request");
        Ok(deadline)
    }
}
