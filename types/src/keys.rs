//! Cryptographic key types for account identity and validator attestations.
//!
//! Accounts sign transactions with Ed25519; validators additionally attest
//! verification verdicts with BLS12-381 (min_pk: 48-byte public keys on G1,
//! 96-byte signatures on G2).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 32-byte Ed25519 public key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub [u8; 32]);

/// A 32-byte Ed25519 private key (secret scalar).
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Key bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(pub [u8; 32]);

/// A 64-byte Ed25519 signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

/// A 48-byte compressed BLS12-381 G1 public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlsPublicKey(pub [u8; 48]);

/// A 96-byte compressed BLS12-381 G2 signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlsSignature(pub [u8; 96]);

/// An Ed25519 key pair (public + private).
///
/// Use `attest_crypto::generate_keypair()` or
/// `attest_crypto::keypair_from_seed()` to construct key pairs. This struct
/// is intentionally just data.
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Signature {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl BlsPublicKey {
    pub const LEN: usize = 48;

    pub fn as_bytes(&self) -> &[u8; 48] {
        &self.0
    }
}

impl BlsSignature {
    pub const LEN: usize = 96;

    pub fn as_bytes(&self) -> &[u8; 96] {
        &self.0
    }
}

// serde derives stop at 32-byte arrays, so the larger fixed-width types get
// a shared byte visitor.

fn serialize_array<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bytes(bytes)
}

fn deserialize_array<'de, D: Deserializer<'de>, const N: usize>(
    deserializer: D,
) -> Result<[u8; N], D::Error> {
    struct ArrayVisitor<const N: usize>;

    impl<'de, const N: usize> serde::de::Visitor<'de> for ArrayVisitor<N> {
        type Value = [u8; N];

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "{N} bytes")
        }

        fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            v.try_into()
                .map_err(|_| E::invalid_length(v.len(), &self))
        }

        fn visit_seq<A: serde::de::SeqAccess<'de>>(
            self,
            mut seq: A,
        ) -> Result<Self::Value, A::Error> {
            let mut arr = [0u8; N];
            for (i, byte) in arr.iter_mut().enumerate() {
                *byte = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
            }
            Ok(arr)
        }
    }

    deserializer.deserialize_bytes(ArrayVisitor::<N>)
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_array(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_array::<_, 64>(deserializer).map(Signature)
    }
}

impl Serialize for BlsPublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_array(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for BlsPublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_array::<_, 48>(deserializer).map(BlsPublicKey)
    }
}

impl Serialize for BlsSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_array(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for BlsSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_array::<_, 96>(deserializer).map(BlsSignature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_bincode_roundtrip() {
        let sig = Signature([0x5A; 64]);
        let encoded = bincode::serialize(&sig).unwrap();
        let decoded: Signature = bincode::deserialize(&encoded).unwrap();
        assert_eq!(sig, decoded);
    }

    #[test]
    fn bls_public_key_bincode_roundtrip() {
        let pk = BlsPublicKey([0xC3; 48]);
        let encoded = bincode::serialize(&pk).unwrap();
        let decoded: BlsPublicKey = bincode::deserialize(&encoded).unwrap();
        assert_eq!(pk, decoded);
    }

    #[test]
    fn bls_signature_bincode_roundtrip() {
        let sig = BlsSignature([0x11; 96]);
        let encoded = bincode::serialize(&sig).unwrap();
        let decoded: BlsSignature = bincode::deserialize(&encoded).unwrap();
        assert_eq!(sig, decoded);
    }

    #[test]
    fn bls_signature_wrong_length_rejected() {
        let encoded = bincode::serialize(&vec![0u8; 95]).unwrap();
        assert!(bincode::deserialize::<BlsSignature>(&encoded).is_err());
    }
}
