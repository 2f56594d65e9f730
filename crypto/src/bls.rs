//! BLS12-381 attestation signatures (min_pk: public keys on G1, signatures
//! on G2), via the `blst` crate.
//!
//! Validators sign the canonical vote message with their attestation key;
//! the finalizer verifies against the public key claimed in the vote
//! transaction. Decode failures and verification failures are distinct:
//! the former are malformed input, the latter a bad signature.

use attest_types::{BlsPublicKey, BlsSignature};
use blst::min_pk::{PublicKey, SecretKey, Signature};
use blst::BLST_ERROR;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::CryptoError;

/// Domain separation tag for the min_pk scheme with SHA-256 hash-to-curve.
const BLS_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// A validator's BLS attestation key pair.
pub struct BlsKeyPair {
    secret: SecretKey,
}

impl BlsKeyPair {
    /// Compressed public key bytes.
    pub fn public_key(&self) -> BlsPublicKey {
        BlsPublicKey(self.secret.sk_to_pk().to_bytes())
    }

    /// Sign a message with this key pair.
    pub fn sign(&self, message: &[u8]) -> BlsSignature {
        BlsSignature(self.secret.sign(message, BLS_DST, &[]).to_bytes())
    }
}

/// Generate a BLS key pair from a secure random source.
pub fn generate_bls_keypair() -> Result<BlsKeyPair, CryptoError> {
    let mut ikm = [0u8; 32];
    OsRng.fill_bytes(&mut ikm);
    bls_keypair_from_seed(&ikm)
}

/// Derive a BLS key pair from a 32-byte seed (deterministic).
pub fn bls_keypair_from_seed(seed: &[u8; 32]) -> Result<BlsKeyPair, CryptoError> {
    let secret = SecretKey::key_gen(seed, &[])
        .map_err(|e| CryptoError::InvalidKeyMaterial(format!("{e:?}")))?;
    Ok(BlsKeyPair { secret })
}

/// Check that key and signature bytes decode to valid curve points.
pub fn decode_bls_material(
    public_key: &BlsPublicKey,
    signature: &BlsSignature,
) -> Result<(), CryptoError> {
    PublicKey::from_bytes(public_key.as_bytes())
        .map_err(|e| CryptoError::InvalidPublicKey(format!("G1 point deserialization: {e:?}")))?;
    Signature::from_bytes(signature.as_bytes())
        .map_err(|e| CryptoError::InvalidSignature(format!("G2 point deserialization: {e:?}")))?;
    Ok(())
}

/// Verify a BLS signature over `message` against `public_key`.
///
/// Returns `Err` if the key or signature bytes do not decode to valid curve
/// points, `Ok(false)` if they decode but the signature does not verify.
pub fn verify_vote_signature(
    public_key: &BlsPublicKey,
    message: &[u8],
    signature: &BlsSignature,
) -> Result<bool, CryptoError> {
    let pk = PublicKey::from_bytes(public_key.as_bytes())
        .map_err(|e| CryptoError::InvalidPublicKey(format!("G1 point deserialization: {e:?}")))?;
    let sig = Signature::from_bytes(signature.as_bytes())
        .map_err(|e| CryptoError::InvalidSignature(format!("G2 point deserialization: {e:?}")))?;

    let result = sig.verify(true, message, BLS_DST, &[], &pk, true);
    Ok(result == BLST_ERROR::BLST_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify() {
        let kp = bls_keypair_from_seed(&[7u8; 32]).unwrap();
        let msg = b"verdict for request";
        let sig = kp.sign(msg);
        assert!(verify_vote_signature(&kp.public_key(), msg, &sig).unwrap());
    }

    #[test]
    fn wrong_message_fails() {
        let kp = bls_keypair_from_seed(&[7u8; 32]).unwrap();
        let sig = kp.sign(b"one message");
        assert!(!verify_vote_signature(&kp.public_key(), b"another message", &sig).unwrap());
    }

    #[test]
    fn wrong_key_fails() {
        let kp1 = bls_keypair_from_seed(&[1u8; 32]).unwrap();
        let kp2 = bls_keypair_from_seed(&[2u8; 32]).unwrap();
        let msg = b"msg";
        let sig = kp1.sign(msg);
        assert!(!verify_vote_signature(&kp2.public_key(), msg, &sig).unwrap());
    }

    #[test]
    fn garbage_key_is_distinct_error() {
        let kp = bls_keypair_from_seed(&[3u8; 32]).unwrap();
        let sig = kp.sign(b"msg");
        let bad = BlsPublicKey([0xFF; 48]);
        assert!(verify_vote_signature(&bad, b"msg", &sig).is_err());
    }

    #[test]
    fn garbage_signature_is_distinct_error() {
        let kp = bls_keypair_from_seed(&[4u8; 32]).unwrap();
        let bad = BlsSignature([0xFF; 96]);
        assert!(verify_vote_signature(&kp.public_key(), b"msg", &bad).is_err());
    }

    #[test]
    fn seeded_keys_are_deterministic() {
        let a = bls_keypair_from_seed(&[9u8; 32]).unwrap();
        let b = bls_keypair_from_seed(&[9u8; 32]).unwrap();
        assert_eq!(a.public_key(), b.public_key());
    }
}
