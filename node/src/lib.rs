//! The off-chain half of the attest protocol.
//!
//! A validator process runs three cooperating pieces:
//! - the **dispatch tracker**, an in-memory liveness view of requests sent
//!   to the external verifier;
//! - the **verifier client**, which stages artifacts to disk and POSTs
//!   dispatch/verify-intent calls to the verifier service;
//! - the **result ingestion service**, an HTTP listener the verifier calls
//!   back with verdicts, which turns each verdict into a signed vote
//!   transaction.
//!
//! Nothing in this crate writes durable chain state; finalization happens
//! in the on-chain transitions when the vote transactions execute.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod requester;
pub mod service;
pub mod tracker;

pub use config::NodeConfig;
pub use error::NodeError;
pub use requester::VerifierClient;
pub use service::{ResultIngestionService, TxSubmitter, VoteSigner};
pub use tracker::DispatchTracker;
