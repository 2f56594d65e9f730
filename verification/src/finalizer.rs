//! Weighted vote finalizer — the core verification transition.

use attest_crypto::{decode_bls_material, verify_vote_signature, vote_message};
use attest_store::{state, StateWrite};
use attest_transactions::vote::ValidatorVoteTx;
use attest_types::{ChainId, NetworkId, Timestamp};
use tracing::{debug, info};

use crate::error::VoteError;
use crate::validators::ValidatorSet;

/// The result of accepting a vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteOutcome {
    /// Weight accumulated after this vote.
    pub accumulated_weight: u64,
    /// Whether this vote finalized the request.
    pub finalized: bool,
}

/// Engine executing validator vote transactions.
///
/// Deterministic: the only inputs are the supplied state, the vote, the
/// executing timestamp, and the validator set at that height. Every
/// screening failure is a typed [`VoteError`]; a rejected vote leaves the
/// state untouched.
pub struct VoteFinalizer {
    network: NetworkId,
    chain: ChainId,
}

impl VoteFinalizer {
    pub fn new(network: NetworkId, chain: ChainId) -> Self {
        Self { network, chain }
    }

    /// Screen and apply one validator vote.
    ///
    /// Screening order: request existence, vote window, key/signature
    /// decoding, validator membership, signature verification, double-vote
    /// guard, weight overflow. Quorum is a strict stake majority of the
    /// registration-time snapshot; the finalized flag is set at most once.
    pub fn execute(
        &self,
        st: &mut impl StateWrite,
        vote_tx: &ValidatorVoteTx,
        ts: Timestamp,
        validators: &ValidatorSet,
    ) -> Result<VoteOutcome, VoteError> {
        let request = &vote_tx.request;

        let deadline = state::get_deadline(st, request)?
            .ok_or_else(|| VoteError::NoSuchRequest(request.to_string()))?;
        if ts.is_after(deadline) {
            return Err(VoteError::VoteWindowExpired {
                deadline: deadline.as_secs(),
                at: ts.as_secs(),
            });
        }

        decode_bls_material(&vote_tx.bls_public_key, &vote_tx.bls_signature)
            .map_err(|e| VoteError::MalformedKeyOrSignature(e.to_string()))?;

        let validator = validators
            .by_bls_key(&vote_tx.bls_public_key)
            .ok_or(VoteError::NotAValidator)?;

        let message = vote_message(self.network, &self.chain, request, vote_tx.vote);
        let verified = verify_vote_signature(&vote_tx.bls_public_key, &message, &vote_tx.bls_signature)
            .map_err(|e| VoteError::MalformedKeyOrSignature(e.to_string()))?;
        if !verified {
            return Err(VoteError::BadSignature);
        }

        if state::has_voted(st, request, &vote_tx.voter)? {
            return Err(VoteError::AlreadyVoted(vote_tx.voter.to_string()));
        }

        let accumulated = state::get_accumulated_weight(st, request)?
            .checked_add(validator.weight)
            .ok_or(VoteError::WeightOverflow)?;

        let snapshot = state::get_quorum_snapshot(st, request)?.unwrap_or(0);
        let already_finalized = state::is_finalized(st, request)?;
        let reaches_quorum = (accumulated as u128) * 2 > snapshot as u128;
        let finalizes = reaches_quorum && !already_finalized;

        state::record_vote(st, request, &vote_tx.voter)?;
        state::set_accumulated_weight(st, request, accumulated)?;
        if finalizes {
            state::set_finalized(st, request)?;
            info!(request = %request, accumulated, snapshot, "verification finalized");
        } else {
            debug!(request = %request, accumulated, snapshot, "vote accepted");
        }

        Ok(VoteOutcome {
            accumulated_weight: accumulated,
            finalized: finalizes,
        })
    }
}
