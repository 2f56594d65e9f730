//! Validator vote transaction: a validator attests to a verification verdict.

use attest_types::{BlsPublicKey, BlsSignature, Signature, Timestamp, TxId, ValidatorAddress};
use serde::{Deserialize, Serialize};

/// A validator vote transaction.
///
/// Carries a BLS attestation over the canonical vote message alongside the
/// usual Ed25519 account envelope. The finalizer checks the BLS material
/// against the executing height's validator set; the account signature is
/// checked like any other transaction's.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidatorVoteTx {
    pub id: TxId,
    /// The account casting the vote. The double-vote guard keys on this.
    pub voter: ValidatorAddress,
    /// The verification request being voted on.
    pub request: TxId,
    /// true = the proof verified, false = it did not.
    pub vote: bool,
    /// BLS signature over the canonical vote message.
    pub bls_signature: BlsSignature,
    /// Claimed BLS public key; must belong to a registered validator.
    pub bls_public_key: BlsPublicKey,
    pub timestamp: Timestamp,
    pub signature: Signature,
}
