//! Fundamental types for the attest protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: transaction/request identifiers, validator addresses, key and
//! signature newtypes, timestamps, network identifiers, proof-system tags,
//! and protocol parameters.

pub mod address;
pub mod id;
pub mod keys;
pub mod network;
pub mod params;
pub mod proof;
pub mod time;

pub use address::ValidatorAddress;
pub use id::TxId;
pub use keys::{BlsPublicKey, BlsSignature, KeyPair, PrivateKey, PublicKey, Signature};
pub use network::{ChainId, NetworkId};
pub use params::ProtocolParams;
pub use proof::{artifact_kind, ProofSystem};
pub use time::Timestamp;
