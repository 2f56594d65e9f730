//! RPC error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("no verification request registered under {0}")]
    RequestNotFound(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("server error: {0}")]
    Server(String),
}

impl From<attest_store::StoreError> for RpcError {
    fn from(e: attest_store::StoreError) -> Self {
        RpcError::Store(e.to_string())
    }
}
