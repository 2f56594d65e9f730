//! Ed25519 message signing and verification for account transactions.

use attest_types::{PrivateKey, PublicKey, Signature};
use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};

use crate::error::CryptoError;

/// Sign a message with a private key, returning the signature.
pub fn sign_message(private_key: &PrivateKey, message: &[u8]) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    let sig = signing_key.sign(message);
    Signature(sig.to_bytes())
}

/// Verify a signature against a message and public key.
///
/// Returns `Ok(false)` for a well-formed signature that does not match and
/// `Err` when the public key bytes are not a valid curve point.
pub fn verify_signature(
    public_key: &PublicKey,
    message: &[u8],
    signature: &Signature,
) -> Result<bool, CryptoError> {
    let verifying_key = VerifyingKey::from_bytes(&public_key.0)
        .map_err(|e| CryptoError::InvalidKeyMaterial(e.to_string()))?;
    let dalek_sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    Ok(verifying_key.verify(message, &dalek_sig).is_ok())
}
