//! Artifact registration and deploy transitions.
//!
//! Registration announces the chunking metadata for an `(image, kind)`
//! pair; deploy appends uploaded bytes under the artifact key. The
//! off-chain dispatcher later stages complete blobs to disk for the
//! external verifier.

use attest_store::{state, StateRead, StateWrite};
use attest_types::TxId;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("no registration for image {image} kind {kind}")]
    NotRegistered { image: String, kind: u16 },

    #[error("deployed size {got} exceeds registered total {registered}")]
    TooLarge { got: u64, registered: u64 },

    #[error("storage error: {0}")]
    Storage(#[from] attest_store::StoreError),
}

/// Record registration metadata for an artifact.
pub fn register_artifact(
    st: &mut impl StateWrite,
    image: &TxId,
    kind: u16,
    chunk_size: u16,
    total_bytes: u64,
) -> Result<(), ArtifactError> {
    state::set_registration(st, image, kind, chunk_size, total_bytes)?;
    debug!(image = %image, kind, chunk_size, total_bytes, "artifact registered");
    Ok(())
}

/// Append deployed bytes to a previously registered artifact.
///
/// Deploys may arrive in several transactions; each appends to the stored
/// blob. The combined size may never exceed the registered total.
pub fn deploy_artifact(
    st: &mut impl StateWrite,
    image: &TxId,
    kind: u16,
    data: &[u8],
) -> Result<(), ArtifactError> {
    let (_chunk_size, total_bytes) = state::get_registration(st, image, kind)?.ok_or(
        ArtifactError::NotRegistered {
            image: image.to_string(),
            kind,
        },
    )?;

    let mut blob = state::get_artifact(st, image, kind)?.unwrap_or_default();
    let combined = blob.len() as u64 + data.len() as u64;
    if combined > total_bytes {
        return Err(ArtifactError::TooLarge {
            got: combined,
            registered: total_bytes,
        });
    }
    blob.extend_from_slice(data);
    state::put_artifact(st, image, kind, &blob)?;
    debug!(image = %image, kind, stored = blob.len(), "artifact chunk deployed");
    Ok(())
}

/// Fetch the complete deployed blob, if fully uploaded.
pub fn complete_artifact(
    st: &impl StateRead,
    image: &TxId,
    kind: u16,
) -> Result<Option<Vec<u8>>, ArtifactError> {
    let Some((_chunk_size, total_bytes)) = state::get_registration(st, image, kind)? else {
        return Ok(None);
    };
    match state::get_artifact(st, image, kind)? {
        Some(blob) if blob.len() as u64 == total_bytes => Ok(Some(blob)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_store::MemoryState;
    use attest_types::artifact_kind;

    #[test]
    fn deploy_without_registration_fails() {
        let mut st = MemoryState::new();
        let image = TxId::new([1; 32]);
        assert!(matches!(
            deploy_artifact(&mut st, &image, artifact_kind::PROGRAM, b"x"),
            Err(ArtifactError::NotRegistered { .. })
        ));
    }

    #[test]
    fn chunked_deploy_assembles_blob() {
        let mut st = MemoryState::new();
        let image = TxId::new([1; 32]);
        register_artifact(&mut st, &image, artifact_kind::PROGRAM, 4, 8).unwrap();

        deploy_artifact(&mut st, &image, artifact_kind::PROGRAM, b"abcd").unwrap();
        assert_eq!(complete_artifact(&st, &image, artifact_kind::PROGRAM).unwrap(), None);

        deploy_artifact(&mut st, &image, artifact_kind::PROGRAM, b"efgh").unwrap();
        assert_eq!(
            complete_artifact(&st, &image, artifact_kind::PROGRAM).unwrap(),
            Some(b"abcdefgh".to_vec())
        );
    }

    #[test]
    fn oversized_deploy_is_rejected() {
        let mut st = MemoryState::new();
        let image = TxId::new([1; 32]);
        register_artifact(&mut st, &image, artifact_kind::PROGRAM, 4, 4).unwrap();
        assert!(matches!(
            deploy_artifact(&mut st, &image, artifact_kind::PROGRAM, b"abcdef"),
            Err(ArtifactError::TooLarge { .. })
        ));
    }

    #[test]
    fn kinds_are_independent() {
        let mut st = MemoryState::new();
        let image = TxId::new([1; 32]);
        register_artifact(&mut st, &image, artifact_kind::PROGRAM, 4, 4).unwrap();
        register_artifact(&mut st, &image, artifact_kind::INPUTS, 4, 4).unwrap();
        deploy_artifact(&mut st, &image, artifact_kind::PROGRAM, b"prog").unwrap();
        assert_eq!(
            complete_artifact(&st, &image, artifact_kind::INPUTS).unwrap(),
            None
        );
    }
}
