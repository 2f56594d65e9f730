//! On-chain proof-verification domain.
//!
//! Two deterministic transitions drive the protocol:
//! 1. **Registration**: a request names an image and a timeout budget; the
//!    registry clamps the budget, persists the absolute deadline and a
//!    snapshot of the total validator weight.
//! 2. **Finalization**: validators cast BLS-signed votes; the finalizer
//!    screens each vote (window, membership, signature, double-vote),
//!    accumulates weight, and flips the finalized flag once a strict stake
//!    majority of the snapshot agrees.
//!
//! Everything here is pure with respect to the supplied state, timestamp,
//! and validator set. No I/O, no clock, no randomness.

pub mod artifacts;
pub mod error;
pub mod finalizer;
pub mod registry;
pub mod validators;

pub use artifacts::ArtifactError;
pub use error::VoteError;
pub use finalizer::{VoteFinalizer, VoteOutcome};
pub use registry::RequestRegistry;
pub use validators::{Validator, ValidatorSet};
