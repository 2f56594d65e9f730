//! Verification request transaction: ask the network to verify a proof.

use attest_types::{ProofSystem, Signature, Timestamp, TxId, ValidatorAddress};
use serde::{Deserialize, Serialize};

/// A verification request transaction.
///
/// The requester names a previously deployed image and a timeout budget in
/// seconds. The budget is a hint; the registry clamps it to protocol bounds
/// when computing the absolute deadline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationRequestTx {
    pub id: TxId,
    /// The account submitting the request.
    pub requester: ValidatorAddress,
    /// Which proving system produced the proof.
    pub proof_system: ProofSystem,
    /// Image whose deployed artifacts hold program and proof material.
    pub image_id: TxId,
    /// Requested vote window, in seconds.
    pub timeout_budget_secs: u64,
    pub timestamp: Timestamp,
    pub signature: Signature,
}
