use thiserror::Error;

#[derive(Debug, Error)]
pub enum TxError {
    #[error("invalid signature on transaction {tx_id}")]
    InvalidSignature { tx_id: String },

    #[error("invalid timestamp: {reason}")]
    InvalidTimestamp { reason: String },

    #[error("transaction references the zero id")]
    ZeroId,

    #[error("{0}")]
    Other(String),
}
