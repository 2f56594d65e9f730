//! Artifact registration and deploy transactions.
//!
//! Registration announces metadata for an `(image, kind)` pair; deploy
//! uploads the blob itself. The dispatcher stages deployed blobs to disk
//! before calling out to the external verifier.

use attest_types::{Signature, Timestamp, TxId, ValidatorAddress};
use serde::{Deserialize, Serialize};

/// Announce artifact metadata for an image.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterArtifactTx {
    pub id: TxId,
    pub publisher: ValidatorAddress,
    pub image_id: TxId,
    /// Artifact kind (program, inputs, outputs).
    pub kind: u16,
    /// Size of each uploaded chunk in bytes.
    pub chunk_size: u16,
    /// Total artifact size in bytes.
    pub total_bytes: u64,
    pub timestamp: Timestamp,
    pub signature: Signature,
}

/// Upload an artifact blob for a previously registered image.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeployArtifactTx {
    pub id: TxId,
    pub publisher: ValidatorAddress,
    pub image_id: TxId,
    pub kind: u16,
    #[serde(with = "serde_bytes_hex")]
    pub data: Vec<u8>,
    pub timestamp: Timestamp,
    pub signature: Signature,
}

/// Hex-encode artifact payloads in human-readable formats, raw bytes otherwise.
mod serde_bytes_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&hex::encode(data))
        } else {
            serializer.serialize_bytes(data)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            hex::decode(&s).map_err(serde::de::Error::custom)
        } else {
            Vec::<u8>::deserialize(deserializer)
        }
    }
}
