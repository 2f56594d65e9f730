use thiserror::Error;

/// Typed rejection reasons for verification transitions.
///
/// Every variant is a failed transition, not a process fault; callers log
/// the rejection and move on.
#[derive(Debug, Error)]
pub enum VoteError {
    #[error("no verification request registered under {0}")]
    NoSuchRequest(String),

    #[error("vote window expired at {deadline}, vote arrived at {at}")]
    VoteWindowExpired { deadline: u64, at: u64 },

    #[error("malformed BLS key or signature: {0}")]
    MalformedKeyOrSignature(String),

    #[error("public key does not belong to a registered validator")]
    NotAValidator,

    #[error("BLS signature does not verify against the claimed key")]
    BadSignature,

    #[error("validator {0} already voted on this request")]
    AlreadyVoted(String),

    #[error("accumulated weight would overflow")]
    WeightOverflow,

    #[error("storage error: {0}")]
    Storage(#[from] attest_store::StoreError),
}
