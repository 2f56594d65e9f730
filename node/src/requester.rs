//! HTTP client for the external verifier service.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use attest_types::{artifact_kind, ProofSystem, ProtocolParams, TxId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::artifacts::stage_for_dispatch;
use crate::tracker::DispatchTracker;
use crate::NodeError;

#[derive(Serialize)]
struct DispatchRequest {
    tx_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    program_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inputs_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outputs_path: Option<String>,
}

#[derive(Deserialize)]
struct DispatchResponse {
    is_submitted: bool,
}

#[derive(Serialize)]
struct VerifyIntent {
    tx_id: String,
    verify_type: u16,
}

#[derive(Deserialize)]
struct PingResponse {
    success: bool,
}

/// Client for dispatching verification work to the external verifier.
///
/// The verifier is untrusted and may be slow or down; every call carries
/// the protocol dispatch timeout, and a failed call never mutates durable
/// state. The connection pool is sized for bursts of dispatches at block
/// boundaries.
pub struct VerifierClient {
    base_url: String,
    client: reqwest::Client,
}

impl VerifierClient {
    pub fn new(base_url: impl Into<String>, params: &ProtocolParams) -> Result<Self, NodeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(params.dispatch_timeout_secs))
            .pool_max_idle_per_host(params.dispatch_max_idle_connections)
            .build()
            .map_err(|e| NodeError::Dispatch(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Dispatch a request to the proof system's endpoint.
    ///
    /// Returns whether the verifier accepted the work. On acceptance a
    /// verify-intent notification is fired off in a spawned task so block
    /// processing never waits on it.
    pub async fn dispatch(
        &self,
        request_id: &TxId,
        proof_system: ProofSystem,
        staged: &[(u16, PathBuf)],
    ) -> Result<bool, NodeError> {
        let paths: BTreeMap<u16, String> = staged
            .iter()
            .map(|(kind, path)| (*kind, path.display().to_string()))
            .collect();
        let body = DispatchRequest {
            tx_id: request_id.to_string(),
            program_path: paths.get(&artifact_kind::PROGRAM).cloned(),
            inputs_path: paths.get(&artifact_kind::INPUTS).cloned(),
            outputs_path: paths.get(&artifact_kind::OUTPUTS).cloned(),
        };

        let url = format!("{}{}", self.base_url, proof_system.endpoint());
        let response: DispatchResponse = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NodeError::Dispatch(e.to_string()))?
            .json()
            .await
            .map_err(|e| NodeError::Dispatch(e.to_string()))?;

        debug!(request = %request_id, %url, submitted = response.is_submitted, "dispatched");

        if response.is_submitted {
            self.notify_verify_intent(request_id, proof_system);
        }
        Ok(response.is_submitted)
    }

    /// Fire-and-forget verify-intent notification.
    fn notify_verify_intent(&self, request_id: &TxId, proof_system: ProofSystem) {
        let client = self.client.clone();
        let url = format!("{}/verify", self.base_url);
        let intent = VerifyIntent {
            tx_id: request_id.to_string(),
            verify_type: proof_system.id(),
        };
        let request = *request_id;
        tokio::spawn(async move {
            if let Err(e) = client.post(&url).json(&intent).send().await {
                warn!(request = %request, error = %e, "verify-intent notification failed");
            }
        });
    }

    /// Stage artifacts, dispatch the request, and start tracking it.
    ///
    /// Called when a registered verification request reaches this node.
    /// Returns whether the verifier accepted the work; the tracker only
    /// learns about accepted dispatches.
    pub async fn dispatch_and_track(
        &self,
        st: &impl attest_store::StateRead,
        artifact_dir: &std::path::Path,
        tracker: &DispatchTracker,
        request_id: &TxId,
        image: &TxId,
        proof_system: ProofSystem,
        budget_secs: u64,
    ) -> Result<bool, NodeError> {
        let staged = stage_for_dispatch(st, artifact_dir, image, proof_system)?;
        let submitted = self.dispatch(request_id, proof_system, &staged).await?;
        if submitted {
            tracker.track(*request_id, budget_secs);
        }
        Ok(submitted)
    }

    /// Health-check the verifier service.
    pub async fn ping(&self) -> Result<bool, NodeError> {
        let url = format!("{}/ping", self.base_url);
        let response: PingResponse = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NodeError::Dispatch(e.to_string()))?
            .json()
            .await
            .map_err(|e| NodeError::Dispatch(e.to_string()))?;
        Ok(response.success)
    }
}
