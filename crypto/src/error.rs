use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid BLS public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid BLS signature: {0}")]
    InvalidSignature(String),

    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),
}
