//! Durable state key layout.
//!
//! Every key is `tag byte ++ fixed-width body ++ u16 chunk-count suffix`
//! (big-endian throughout). The chunk suffix is a size hint consumed by the
//! surrounding storage engine; it is part of the key so identical facts map
//! to identical bytes on every validator.
//!
//! Layout:
//! ```text
//! 0x06 register/ imageID(32) ++ kind(u16)     => chunk_size(u16) ++ total(u64)
//! 0x07 artifact/ imageID(32) ++ kind(u16)     => blob
//! 0x08 timeout/  requestID(32)                => deadline u64
//! 0x09 weight/   requestID(32)                => accumulated u64
//! 0x0a status/   requestID(32)                => flag u16 (1 = finalized)
//! 0x0b vote/     requestID(32) ++ address(32) => flag u16 (1 = voted)
//! 0x0c quorum/   requestID(32)                => snapshot total u64
//! ```

use attest_types::{TxId, ValidatorAddress};

/// Artifact registration metadata (chunk size, total bytes).
pub const REGISTER_TAG: u8 = 0x06;
/// Deployed artifact blobs.
pub const ARTIFACT_TAG: u8 = 0x07;
/// Verification request deadlines.
pub const TIMEOUT_TAG: u8 = 0x08;
/// Accumulated vote weight.
pub const WEIGHT_TAG: u8 = 0x09;
/// Finalized-status flags.
pub const STATUS_TAG: u8 = 0x0a;
/// Per-validator vote records.
pub const VOTE_TAG: u8 = 0x0b;
/// Registration-time total-weight snapshots.
pub const QUORUM_TAG: u8 = 0x0c;

/// Chunk hint for single-word values.
pub const VALUE_CHUNKS: u16 = 1;
/// Chunk hint for artifact blobs.
pub const ARTIFACT_CHUNKS_MAX: u16 = 10;

const ID_LEN: usize = TxId::LEN;
const ADDR_LEN: usize = ValidatorAddress::LEN;

/// `tag ++ requestID ++ chunks` — shared shape of the four per-request tables.
fn request_key(tag: u8, request: &TxId) -> Vec<u8> {
    let mut k = Vec::with_capacity(1 + ID_LEN + 2);
    k.push(tag);
    k.extend_from_slice(request.as_bytes());
    k.extend_from_slice(&VALUE_CHUNKS.to_be_bytes());
    k
}

/// Key holding a request's absolute deadline.
pub fn timeout_key(request: &TxId) -> Vec<u8> {
    request_key(TIMEOUT_TAG, request)
}

/// Key holding a request's accumulated vote weight.
pub fn weight_key(request: &TxId) -> Vec<u8> {
    request_key(WEIGHT_TAG, request)
}

/// Key holding a request's finalized-status flag.
pub fn status_key(request: &TxId) -> Vec<u8> {
    request_key(STATUS_TAG, request)
}

/// Key holding a request's registration-time total-weight snapshot.
pub fn quorum_key(request: &TxId) -> Vec<u8> {
    request_key(QUORUM_TAG, request)
}

/// Key recording that `voter` has voted on `request`.
pub fn vote_key(request: &TxId, voter: &ValidatorAddress) -> Vec<u8> {
    let mut k = Vec::with_capacity(1 + ID_LEN + ADDR_LEN + 2);
    k.push(VOTE_TAG);
    k.extend_from_slice(request.as_bytes());
    k.extend_from_slice(voter.as_bytes());
    k.extend_from_slice(&VALUE_CHUNKS.to_be_bytes());
    k
}

/// Key holding artifact registration metadata for `(image, kind)`.
pub fn register_key(image: &TxId, kind: u16) -> Vec<u8> {
    let mut k = Vec::with_capacity(1 + ID_LEN + 2 + 2);
    k.push(REGISTER_TAG);
    k.extend_from_slice(image.as_bytes());
    k.extend_from_slice(&kind.to_be_bytes());
    k.extend_from_slice(&VALUE_CHUNKS.to_be_bytes());
    k
}

/// Key holding the deployed artifact blob for `(image, kind)`.
pub fn artifact_key(image: &TxId, kind: u16) -> Vec<u8> {
    let mut k = Vec::with_capacity(1 + ID_LEN + 2 + 2);
    k.push(ARTIFACT_TAG);
    k.extend_from_slice(image.as_bytes());
    k.extend_from_slice(&kind.to_be_bytes());
    k.extend_from_slice(&ARTIFACT_CHUNKS_MAX.to_be_bytes());
    k
}

/// Decode a per-request key back into `(tag, requestID)`.
pub fn decode_request_key(key: &[u8]) -> Option<(u8, TxId)> {
    if key.len() != 1 + ID_LEN + 2 {
        return None;
    }
    match key[0] {
        TIMEOUT_TAG | WEIGHT_TAG | STATUS_TAG | QUORUM_TAG => {}
        _ => return None,
    }
    let request = TxId::from_slice(&key[1..1 + ID_LEN])?;
    Some((key[0], request))
}

/// Decode a vote key back into `(requestID, voter)`.
pub fn decode_vote_key(key: &[u8]) -> Option<(TxId, ValidatorAddress)> {
    if key.len() != 1 + ID_LEN + ADDR_LEN + 2 || key[0] != VOTE_TAG {
        return None;
    }
    let request = TxId::from_slice(&key[1..1 + ID_LEN])?;
    let voter = ValidatorAddress::from_slice(&key[1 + ID_LEN..1 + ID_LEN + ADDR_LEN])?;
    Some((request, voter))
}

/// Decode an artifact-family key back into `(tag, imageID, kind)`.
pub fn decode_artifact_key(key: &[u8]) -> Option<(u8, TxId, u16)> {
    if key.len() != 1 + ID_LEN + 2 + 2 {
        return None;
    }
    match key[0] {
        REGISTER_TAG | ARTIFACT_TAG => {}
        _ => return None,
    }
    let image = TxId::from_slice(&key[1..1 + ID_LEN])?;
    let kind = u16::from_be_bytes([key[1 + ID_LEN], key[1 + ID_LEN + 1]]);
    Some((key[0], image, kind))
}
