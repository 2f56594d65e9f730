//! Content-addressed artifact staging.
//!
//! The external verifier reads artifacts from the local filesystem. Before
//! dispatching a request, the node pulls each required artifact kind out of
//! durable state and writes it to a deterministic path under the artifact
//! directory. Paths embed the image id, so re-staging is idempotent.

use std::path::{Path, PathBuf};

use attest_store::StateRead;
use attest_types::{ProofSystem, TxId};
use attest_verification::artifacts::complete_artifact;
use tracing::debug;

use crate::NodeError;

/// Deterministic on-disk path for `(image, kind)`.
pub fn artifact_path(dir: &Path, image: &TxId, kind: u16) -> PathBuf {
    dir.join(format!("{image}-{kind}.bin"))
}

/// Write one artifact blob to its staged path, creating the directory as
/// needed. Skips the write when the file already exists with the right
/// length.
pub fn stage_artifact(
    dir: &Path,
    image: &TxId,
    kind: u16,
    data: &[u8],
) -> Result<PathBuf, NodeError> {
    std::fs::create_dir_all(dir)?;
    let path = artifact_path(dir, image, kind);
    match std::fs::metadata(&path) {
        Ok(meta) if meta.len() == data.len() as u64 => {
            debug!(path = %path.display(), "artifact already staged");
        }
        _ => {
            std::fs::write(&path, data)?;
            debug!(path = %path.display(), bytes = data.len(), "staged artifact");
        }
    }
    Ok(path)
}

/// Stage every artifact kind the proof system needs for `image`.
///
/// Fails with [`NodeError::ArtifactMissing`] when any required kind has not
/// been fully deployed yet; a partial dispatch would only waste a verifier
/// round-trip.
pub fn stage_for_dispatch(
    st: &impl StateRead,
    dir: &Path,
    image: &TxId,
    proof_system: ProofSystem,
) -> Result<Vec<(u16, PathBuf)>, NodeError> {
    let mut staged = Vec::new();
    for &kind in proof_system.required_artifact_kinds() {
        let blob = complete_artifact(st, image, kind)
            .map_err(|e| NodeError::Store(attest_store::StoreError::Backend(e.to_string())))?
            .ok_or_else(|| NodeError::ArtifactMissing {
                image: image.to_string(),
                kind,
            })?;
        staged.push((kind, stage_artifact(dir, image, kind, &blob)?));
    }
    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_store::MemoryState;
    use attest_types::artifact_kind;
    use attest_verification::artifacts::{deploy_artifact, register_artifact};

    #[test]
    fn staging_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let image = TxId::new([1; 32]);
        let p1 = stage_artifact(dir.path(), &image, artifact_kind::PROGRAM, b"abc").unwrap();
        let p2 = stage_artifact(dir.path(), &image, artifact_kind::PROGRAM, b"abc").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(std::fs::read(&p1).unwrap(), b"abc");
    }

    #[test]
    fn dispatch_staging_requires_complete_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut st = MemoryState::new();
        let image = TxId::new([2; 32]);

        // Gnark needs program and inputs; only the program is deployed.
        register_artifact(&mut st, &image, artifact_kind::PROGRAM, 4, 4).unwrap();
        deploy_artifact(&mut st, &image, artifact_kind::PROGRAM, b"prog").unwrap();

        let result = stage_for_dispatch(&st, dir.path(), &image, ProofSystem::Gnark);
        assert!(matches!(result, Err(NodeError::ArtifactMissing { .. })));
    }

    #[test]
    fn dispatch_staging_writes_all_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let mut st = MemoryState::new();
        let image = TxId::new([2; 32]);

        register_artifact(&mut st, &image, artifact_kind::PROGRAM, 4, 4).unwrap();
        deploy_artifact(&mut st, &image, artifact_kind::PROGRAM, b"prog").unwrap();
        register_artifact(&mut st, &image, artifact_kind::INPUTS, 4, 3).unwrap();
        deploy_artifact(&mut st, &image, artifact_kind::INPUTS, b"inp").unwrap();

        let staged = stage_for_dispatch(&st, dir.path(), &image, ProofSystem::Gnark).unwrap();
        assert_eq!(staged.len(), 2);
        for (_, path) in &staged {
            assert!(path.exists());
        }
    }
}
