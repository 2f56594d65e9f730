//! Canonical vote-message construction.
//!
//! The message a validator BLS-signs when attesting a verdict embeds the
//! network and chain identifiers, so a vote can never be replayed across
//! networks or chains. The finalizer recomputes the exact same bytes during
//! block execution.

use attest_types::{ChainId, NetworkId, TxId};

/// Length of the canonical vote message:
/// `network_id (4) ++ chain_id (32) ++ request_id (32) ++ vote byte (1)`.
pub const VOTE_MESSAGE_LEN: usize = 4 + 32 + 32 + 1;

/// Build the canonical message attesting `vote` for `request`.
pub fn vote_message(network: NetworkId, chain: &ChainId, request: &TxId, vote: bool) -> Vec<u8> {
    let mut msg = Vec::with_capacity(VOTE_MESSAGE_LEN);
    msg.extend_from_slice(&network.id().to_be_bytes());
    msg.extend_from_slice(chain.as_bytes());
    msg.extend_from_slice(request.as_bytes());
    msg.push(u8::from(vote));
    msg
}
