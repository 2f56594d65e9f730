//! All attest transaction types and their structural validation.
//!
//! Transaction types:
//! - **VerificationRequest**: register a proof for delegated verification
//! - **ValidatorVote**: a validator attests to a verification verdict
//! - **RegisterArtifact**: announce artifact metadata for an image
//! - **DeployArtifact**: upload an artifact blob for an image

pub mod artifact;
pub mod error;
pub mod request;
pub mod validation;
pub mod vote;

use attest_types::{Signature, Timestamp, TxId, ValidatorAddress};
use serde::{Deserialize, Serialize};

pub use error::TxError;

/// The unified transaction enum wrapping all attest transaction types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Transaction {
    VerificationRequest(request::VerificationRequestTx),
    ValidatorVote(vote::ValidatorVoteTx),
    RegisterArtifact(artifact::RegisterArtifactTx),
    DeployArtifact(artifact::DeployArtifactTx),
}

impl Transaction {
    /// Get the id of this transaction.
    pub fn id(&self) -> &TxId {
        match self {
            Self::VerificationRequest(tx) => &tx.id,
            Self::ValidatorVote(tx) => &tx.id,
            Self::RegisterArtifact(tx) => &tx.id,
            Self::DeployArtifact(tx) => &tx.id,
        }
    }

    /// Get the acting account of this transaction.
    pub fn actor(&self) -> &ValidatorAddress {
        match self {
            Self::VerificationRequest(tx) => &tx.requester,
            Self::ValidatorVote(tx) => &tx.voter,
            Self::RegisterArtifact(tx) => &tx.publisher,
            Self::DeployArtifact(tx) => &tx.publisher,
        }
    }

    /// Get the timestamp.
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::VerificationRequest(tx) => tx.timestamp,
            Self::ValidatorVote(tx) => tx.timestamp,
            Self::RegisterArtifact(tx) => tx.timestamp,
            Self::DeployArtifact(tx) => tx.timestamp,
        }
    }

    /// Get the account signature.
    pub fn signature(&self) -> &Signature {
        match self {
            Self::VerificationRequest(tx) => &tx.signature,
            Self::ValidatorVote(tx) => &tx.signature,
            Self::RegisterArtifact(tx) => &tx.signature,
            Self::DeployArtifact(tx) => &tx.signature,
        }
    }

    /// Canonical signing bytes: the JSON encoding with id and signature zeroed.
    pub fn signing_bytes(&self) -> Result<Vec<u8>, TxError> {
        let mut blank = self.clone();
        match &mut blank {
            Self::VerificationRequest(tx) => {
                tx.id = TxId::ZERO;
                tx.signature = Signature([0u8; 64]);
            }
            Self::ValidatorVote(tx) => {
                tx.id = TxId::ZERO;
                tx.signature = Signature([0u8; 64]);
            }
            Self::RegisterArtifact(tx) => {
                tx.id = TxId::ZERO;
                tx.signature = Signature([0u8; 64]);
            }
            Self::DeployArtifact(tx) => {
                tx.id = TxId::ZERO;
                tx.signature = Signature([0u8; 64]);
            }
        }
        serde_json::to_vec(&blank).map_err(|e| TxError::Other(e.to_string()))
    }

    /// Derive the transaction id from the canonical signing bytes.
    pub fn compute_id(&self) -> Result<TxId, TxError> {
        Ok(attest_crypto::hash_transaction(&self.signing_bytes()?))
    }

    /// Check the Ed25519 account signature over the canonical signing bytes.
    pub fn verify_account_signature(
        &self,
        public_key: &attest_types::PublicKey,
    ) -> Result<(), TxError> {
        let bytes = self.signing_bytes()?;
        let ok = attest_crypto::verify_signature(public_key, &bytes, self.signature())
            .map_err(|e| TxError::Other(e.to_string()))?;
        if ok {
            Ok(())
        } else {
            Err(TxError::InvalidSignature {
                tx_id: self.id().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_types::ProofSystem;

    fn sample_tx() -> Transaction {
        Transaction::VerificationRequest(request::VerificationRequestTx {
            id: TxId::ZERO,
            requester: ValidatorAddress::new([1; 32]),
            proof_system: ProofSystem::Sp1,
            image_id: TxId::new([2; 32]),
            timeout_budget_secs: 60,
            timestamp: Timestamp::new(1000),
            signature: Signature([0u8; 64]),
        })
    }

    #[test]
    fn compute_id_ignores_id_and_signature_fields() {
        let mut tx = sample_tx();
        let id = tx.compute_id().unwrap();
        if let Transaction::VerificationRequest(req) = &mut tx {
            req.id = id;
            req.signature = Signature([7u8; 64]);
        }
        assert_eq!(tx.compute_id().unwrap(), id);
    }

    #[test]
    fn compute_id_changes_with_content() {
        let tx = sample_tx();
        let mut other = sample_tx();
        if let Transaction::VerificationRequest(req) = &mut other {
            req.timeout_budget_secs = 61;
        }
        assert_ne!(tx.compute_id().unwrap(), other.compute_id().unwrap());
    }

    #[test]
    fn account_signature_roundtrip() {
        let keypair = attest_crypto::generate_keypair();
        let mut tx = sample_tx();
        let bytes = tx.signing_bytes().unwrap();
        let sig = attest_crypto::sign_message(&keypair.private, &bytes);
        if let Transaction::VerificationRequest(req) = &mut tx {
            req.signature = sig;
        }
        assert!(tx.verify_account_signature(&keypair.public).is_ok());

        let other = attest_crypto::generate_keypair();
        assert!(matches!(
            tx.verify_account_signature(&other.public),
            Err(TxError::InvalidSignature { .. })
        ));
    }
}
