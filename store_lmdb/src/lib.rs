//! LMDB storage backend for the attest protocol.
//!
//! Implements the `attest-store` state traits using the `heed` LMDB
//! bindings. All state lives in a single database inside one environment;
//! the key layout from `attest_store::keys` already namespaces the tables
//! by tag byte.

pub mod environment;
pub mod error;
pub mod state;

pub use environment::LmdbEnvironment;
pub use error::LmdbError;
pub use state::LmdbState;
