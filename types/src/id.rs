//! Transaction and verification-request identifiers.
//!
//! A verification request is identified by the id of the transaction that
//! registered it, so one 32-byte type serves both roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 32-byte transaction identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TxId([u8; 32]);

impl TxId {
    pub const LEN: usize = 32;
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse from a byte slice. Returns `None` on wrong length.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let arr: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(arr))
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Error parsing a hex-encoded [`TxId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTxIdError;

impl fmt::Display for ParseTxIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 64 hex characters")
    }
}

impl std::error::Error for ParseTxIdError {}

impl FromStr for TxId {
    type Err = ParseTxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| ParseTxIdError)?;
        Self::from_slice(&bytes).ok_or(ParseTxIdError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let id = TxId::new([0xAB; 32]);
        let parsed: TxId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn rejects_short_hex() {
        assert!("abcd".parse::<TxId>().is_err());
    }

    #[test]
    fn rejects_non_hex() {
        let s = "zz".repeat(32);
        assert!(s.parse::<TxId>().is_err());
    }

    #[test]
    fn zero_is_zero() {
        assert!(TxId::ZERO.is_zero());
        assert!(!TxId::new([1; 32]).is_zero());
    }
}
