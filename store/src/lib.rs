//! State codec and abstract storage traits for the attest protocol.
//!
//! Every storage backend (LMDB, in-memory for testing) implements the
//! [`StateRead`]/[`StateWrite`] traits. The rest of the codebase depends
//! only on the traits and the typed accessors in [`state`]; the byte-level
//! key layout lives in [`keys`] and is the single place that knows how
//! durable facts are addressed.

pub mod error;
pub mod keys;
pub mod memory;
pub mod state;

pub use error::StoreError;
pub use memory::MemoryState;
pub use state::{StateRead, StateWrite};
