//! Raw state traits and typed accessors over the key layout.
//!
//! The on-chain transitions (`attest-verification`) see durable state only
//! through these functions, so the byte layout in [`crate::keys`] never
//! leaks into transition logic.

use attest_types::{Timestamp, TxId, ValidatorAddress};

use crate::error::StoreError;
use crate::keys;

/// Read access to raw chain state.
pub trait StateRead {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
}

/// Write access to raw chain state (extends read access).
pub trait StateWrite: StateRead {
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
    fn remove(&mut self, key: &[u8]) -> Result<(), StoreError>;
}

const FLAG_SET: u16 = 1;

fn decode_u64(value: &[u8], what: &str) -> Result<u64, StoreError> {
    let arr: [u8; 8] = value
        .try_into()
        .map_err(|_| StoreError::Corruption(format!("{what}: expected 8 bytes, got {}", value.len())))?;
    Ok(u64::from_be_bytes(arr))
}

fn decode_u16(value: &[u8], what: &str) -> Result<u16, StoreError> {
    let arr: [u8; 2] = value
        .try_into()
        .map_err(|_| StoreError::Corruption(format!("{what}: expected 2 bytes, got {}", value.len())))?;
    Ok(u16::from_be_bytes(arr))
}

// ── Timeout ──────────────────────────────────────────────────────────────

/// Persist a request's absolute deadline.
pub fn set_deadline(
    state: &mut impl StateWrite,
    request: &TxId,
    deadline: Timestamp,
) -> Result<(), StoreError> {
    state.insert(&keys::timeout_key(request), &deadline.as_secs().to_be_bytes())
}

/// The request's deadline, or `None` if the request was never registered.
pub fn get_deadline(
    state: &(impl StateRead + ?Sized),
    request: &TxId,
) -> Result<Option<Timestamp>, StoreError> {
    match state.get(&keys::timeout_key(request))? {
        Some(v) => Ok(Some(Timestamp::new(decode_u64(&v, "deadline")?))),
        None => Ok(None),
    }
}

// ── Quorum snapshot ──────────────────────────────────────────────────────

/// Persist the total validator weight captured at registration time.
pub fn set_quorum_snapshot(
    state: &mut impl StateWrite,
    request: &TxId,
    total_weight: u64,
) -> Result<(), StoreError> {
    state.insert(&keys::quorum_key(request), &total_weight.to_be_bytes())
}

/// The registration-time total-weight snapshot.
pub fn get_quorum_snapshot(
    state: &impl StateRead,
    request: &TxId,
) -> Result<Option<u64>, StoreError> {
    match state.get(&keys::quorum_key(request))? {
        Some(v) => Ok(Some(decode_u64(&v, "quorum snapshot")?)),
        None => Ok(None),
    }
}

// ── Weight accumulator ───────────────────────────────────────────────────

/// Accumulated vote weight; absent means no votes yet.
pub fn get_accumulated_weight(
    state: &(impl StateRead + ?Sized),
    request: &TxId,
) -> Result<u64, StoreError> {
    match state.get(&keys::weight_key(request))? {
        Some(v) => decode_u64(&v, "accumulated weight"),
        None => Ok(0),
    }
}

/// Overwrite the accumulated weight. Callers maintain monotonicity.
pub fn set_accumulated_weight(
    state: &mut impl StateWrite,
    request: &TxId,
    weight: u64,
) -> Result<(), StoreError> {
    state.insert(&keys::weight_key(request), &weight.to_be_bytes())
}

// ── Finalized status ─────────────────────────────────────────────────────

/// Whether the request's verification has been finalized.
pub fn is_finalized(state: &(impl StateRead + ?Sized), request: &TxId) -> Result<bool, StoreError> {
    match state.get(&keys::status_key(request))? {
        Some(v) => Ok(decode_u16(&v, "status flag")? == FLAG_SET),
        None => Ok(false),
    }
}

/// Set the finalized flag. Never called twice for the same request.
pub fn set_finalized(state: &mut impl StateWrite, request: &TxId) -> Result<(), StoreError> {
    state.insert(&keys::status_key(request), &FLAG_SET.to_be_bytes())
}

// ── Vote records ─────────────────────────────────────────────────────────

/// Whether `voter` has already voted on `request`.
pub fn has_voted(
    state: &impl StateRead,
    request: &TxId,
    voter: &ValidatorAddress,
) -> Result<bool, StoreError> {
    match state.get(&keys::vote_key(request, voter))? {
        Some(v) => Ok(decode_u16(&v, "vote flag")? == FLAG_SET),
        None => Ok(false),
    }
}

/// Record that `voter` has voted on `request`.
pub fn record_vote(
    state: &mut impl StateWrite,
    request: &TxId,
    voter: &ValidatorAddress,
) -> Result<(), StoreError> {
    state.insert(&keys::vote_key(request, voter), &FLAG_SET.to_be_bytes())
}

// ── Deployed artifacts ───────────────────────────────────────────────────

/// Record artifact registration metadata for `(image, kind)`.
pub fn set_registration(
    state: &mut impl StateWrite,
    image: &TxId,
    kind: u16,
    chunk_size: u16,
    total_bytes: u64,
) -> Result<(), StoreError> {
    let mut v = Vec::with_capacity(2 + 8);
    v.extend_from_slice(&chunk_size.to_be_bytes());
    v.extend_from_slice(&total_bytes.to_be_bytes());
    state.insert(&keys::register_key(image, kind), &v)
}

/// Registration metadata `(chunk_size, total_bytes)` for `(image, kind)`.
pub fn get_registration(
    state: &impl StateRead,
    image: &TxId,
    kind: u16,
) -> Result<Option<(u16, u64)>, StoreError> {
    match state.get(&keys::register_key(image, kind))? {
        Some(v) if v.len() == 10 => {
            let chunk_size = decode_u16(&v[0..2], "registration chunk size")?;
            let total = decode_u64(&v[2..10], "registration total")?;
            Ok(Some((chunk_size, total)))
        }
        Some(v) => Err(StoreError::Corruption(format!(
            "registration: expected 10 bytes, got {}",
            v.len()
        ))),
        None => Ok(None),
    }
}

/// Store an artifact blob under `(image, kind)`.
pub fn put_artifact(
    state: &mut impl StateWrite,
    image: &TxId,
    kind: u16,
    data: &[u8],
) -> Result<(), StoreError> {
    state.insert(&keys::artifact_key(image, kind), data)
}

/// Fetch the artifact blob stored under `(image, kind)`.
pub fn get_artifact(
    state: &impl StateRead,
    image: &TxId,
    kind: u16,
) -> Result<Option<Vec<u8>>, StoreError> {
    state.get(&keys::artifact_key(image, kind))
}
