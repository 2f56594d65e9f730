//! Cryptographic primitives for the attest protocol.
//!
//! - **Ed25519** for account transaction signing
//! - **BLS12-381** (min_pk) for validator verdict attestations
//! - **Blake2b** for transaction hashing and address derivation
//! - Canonical vote-message construction shared by signer and verifier

pub mod address;
pub mod bls;
pub mod error;
pub mod hash;
pub mod keys;
pub mod message;
pub mod sign;

pub use address::derive_validator_address;
pub use bls::{
    bls_keypair_from_seed, decode_bls_material, generate_bls_keypair, verify_vote_signature,
    BlsKeyPair,
};
pub use error::CryptoError;
pub use hash::{blake2b_256, hash_transaction};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use message::vote_message;
pub use sign::{sign_message, verify_signature};
