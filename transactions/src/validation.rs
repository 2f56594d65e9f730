//! Structural transaction validation.

use attest_types::Timestamp;

use crate::error::TxError;
use crate::Transaction;

/// Validate a transaction's basic structure.
///
/// This performs stateless validation only. Stateful checks (registration
/// existence, validator membership, double votes) are done by the
/// verification transitions.
pub fn validate_transaction(
    tx: &Transaction,
    now: Timestamp,
    time_tolerance_secs: u64,
) -> Result<(), TxError> {
    let tx_secs = tx.timestamp().as_secs();
    let now_secs = now.as_secs();
    let time_diff = tx_secs.abs_diff(now_secs);
    if time_diff > time_tolerance_secs {
        return Err(TxError::InvalidTimestamp {
            reason: format!(
                "timestamp {} is {} seconds away from now {}, tolerance is {}",
                tx.timestamp(),
                time_diff,
                now,
                time_tolerance_secs
            ),
        });
    }

    match tx {
        Transaction::VerificationRequest(req) => {
            if req.image_id.is_zero() {
                return Err(TxError::ZeroId);
            }
            if req.timeout_budget_secs == 0 {
                return Err(TxError::Other(
                    "verification request timeout budget must be positive".into(),
                ));
            }
        }
        Transaction::ValidatorVote(vote) => {
            if vote.request.is_zero() {
                return Err(TxError::ZeroId);
            }
        }
        Transaction::RegisterArtifact(reg) => {
            if reg.image_id.is_zero() {
                return Err(TxError::ZeroId);
            }
            if reg.chunk_size == 0 {
                return Err(TxError::Other(
                    "artifact registration chunk size must be positive".into(),
                ));
            }
            if reg.total_bytes == 0 {
                return Err(TxError::Other(
                    "artifact registration total size must be positive".into(),
                ));
            }
        }
        Transaction::DeployArtifact(deploy) => {
            if deploy.image_id.is_zero() {
                return Err(TxError::ZeroId);
            }
            if deploy.data.is_empty() {
                return Err(TxError::Other("deployed artifact must not be empty".into()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{DeployArtifactTx, RegisterArtifactTx};
    use crate::request::VerificationRequestTx;
    use crate::vote::ValidatorVoteTx;
    use attest_types::{
        BlsPublicKey, BlsSignature, ProofSystem, Signature, Timestamp, TxId, ValidatorAddress,
    };

    fn dummy_actor() -> ValidatorAddress {
        ValidatorAddress::new([1u8; 32])
    }

    fn dummy_id() -> TxId {
        TxId::new([2u8; 32])
    }

    fn dummy_signature() -> Signature {
        Signature([0u8; 64])
    }

    fn request_tx(budget: u64, image: TxId, ts: Timestamp) -> Transaction {
        Transaction::VerificationRequest(VerificationRequestTx {
            id: dummy_id(),
            requester: dummy_actor(),
            proof_system: ProofSystem::Sp1,
            image_id: image,
            timeout_budget_secs: budget,
            timestamp: ts,
            signature: dummy_signature(),
        })
    }

    #[test]
    fn timestamp_too_old_is_rejected() {
        let now = Timestamp::new(1000);
        let tx = request_tx(60, dummy_id(), Timestamp::new(500));
        assert!(matches!(
            validate_transaction(&tx, now, 100),
            Err(TxError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn timestamp_too_far_in_future_is_rejected() {
        let now = Timestamp::new(1000);
        let tx = request_tx(60, dummy_id(), Timestamp::new(1200));
        assert!(matches!(
            validate_transaction(&tx, now, 100),
            Err(TxError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn timestamp_within_tolerance_is_accepted() {
        let now = Timestamp::new(1000);
        let tx = request_tx(60, dummy_id(), Timestamp::new(1050));
        assert!(validate_transaction(&tx, now, 100).is_ok());
    }

    #[test]
    fn zero_image_id_is_rejected() {
        let now = Timestamp::new(1000);
        let tx = request_tx(60, TxId::ZERO, now);
        assert!(matches!(
            validate_transaction(&tx, now, 100),
            Err(TxError::ZeroId)
        ));
    }

    #[test]
    fn zero_timeout_budget_is_rejected() {
        let now = Timestamp::new(1000);
        let tx = request_tx(0, dummy_id(), now);
        assert!(matches!(
            validate_transaction(&tx, now, 100),
            Err(TxError::Other(_))
        ));
    }

    #[test]
    fn vote_on_zero_request_is_rejected() {
        let now = Timestamp::new(1000);
        let tx = Transaction::ValidatorVote(ValidatorVoteTx {
            id: dummy_id(),
            voter: dummy_actor(),
            request: TxId::ZERO,
            vote: true,
            bls_signature: BlsSignature([0u8; 96]),
            bls_public_key: BlsPublicKey([0u8; 48]),
            timestamp: now,
            signature: dummy_signature(),
        });
        assert!(matches!(
            validate_transaction(&tx, now, 100),
            Err(TxError::ZeroId)
        ));
    }

    #[test]
    fn zero_chunk_size_registration_is_rejected() {
        let now = Timestamp::new(1000);
        let tx = Transaction::RegisterArtifact(RegisterArtifactTx {
            id: dummy_id(),
            publisher: dummy_actor(),
            image_id: dummy_id(),
            kind: 1,
            chunk_size: 0,
            total_bytes: 100,
            timestamp: now,
            signature: dummy_signature(),
        });
        assert!(matches!(
            validate_transaction(&tx, now, 100),
            Err(TxError::Other(_))
        ));
    }

    #[test]
    fn empty_deploy_is_rejected() {
        let now = Timestamp::new(1000);
        let tx = Transaction::DeployArtifact(DeployArtifactTx {
            id: dummy_id(),
            publisher: dummy_actor(),
            image_id: dummy_id(),
            kind: 1,
            data: vec![],
            timestamp: now,
            signature: dummy_signature(),
        });
        assert!(matches!(
            validate_transaction(&tx, now, 100),
            Err(TxError::Other(_))
        ));
    }

    #[test]
    fn valid_deploy_is_accepted() {
        let now = Timestamp::new(1000);
        let tx = Transaction::DeployArtifact(DeployArtifactTx {
            id: dummy_id(),
            publisher: dummy_actor(),
            image_id: dummy_id(),
            kind: 1,
            data: vec![1, 2, 3],
            timestamp: now,
            signature: dummy_signature(),
        });
        assert!(validate_transaction(&tx, now, 100).is_ok());
    }
}
