//! Status query RPC server.
//!
//! Read-only view over durable verification state: whether a request is
//! finalized, how much vote weight it has accumulated, and its deadline.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use server::RpcServer;
