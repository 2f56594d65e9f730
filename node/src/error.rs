use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("config error: {0}")]
    Config(String),

    #[error("dispatch to verifier failed: {0}")]
    Dispatch(String),

    #[error("artifact not fully deployed: image {image} kind {kind}")]
    ArtifactMissing { image: String, kind: u16 },

    #[error("crypto error: {0}")]
    Crypto(String),

    #[error("transaction error: {0}")]
    Tx(String),

    #[error("transaction submission failed: {0}")]
    Submit(String),

    #[error("store error: {0}")]
    Store(#[from] attest_store::StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
