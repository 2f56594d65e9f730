//! Result ingestion service.
//!
//! The external verifier calls back into this HTTP listener with a verdict
//! for each dispatched request. Each verdict is turned into a BLS-signed
//! validator vote transaction and handed to the mempool through the
//! [`TxSubmitter`] seam. Nothing durable is written here; the vote takes
//! effect when it executes on-chain.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, warn};

use attest_crypto::{sign_message, vote_message, BlsKeyPair};
use attest_transactions::vote::ValidatorVoteTx;
use attest_transactions::Transaction;
use attest_types::{
    ChainId, KeyPair, NetworkId, Signature, Timestamp, TxId, ValidatorAddress,
};

use crate::tracker::DispatchTracker;
use crate::NodeError;

/// Seam between the ingestion service and the surrounding mempool.
pub trait TxSubmitter: Send + Sync {
    fn submit(&self, tx: Transaction) -> Result<(), NodeError>;
}

/// Signing identity of this validator process: the Ed25519 account key for
/// the transaction envelope and the BLS key for the attestation itself.
pub struct VoteSigner {
    pub network: NetworkId,
    pub chain: ChainId,
    pub address: ValidatorAddress,
    pub account_keys: KeyPair,
    pub bls_keys: BlsKeyPair,
}

impl VoteSigner {
    /// Build a signed vote transaction attesting `vote` for `request`.
    pub fn build_vote(
        &self,
        request: TxId,
        vote: bool,
        now: Timestamp,
    ) -> Result<Transaction, NodeError> {
        let message = vote_message(self.network, &self.chain, &request, vote);
        let bls_signature = self.bls_keys.sign(&message);

        let mut tx = Transaction::ValidatorVote(ValidatorVoteTx {
            id: TxId::ZERO,
            voter: self.address,
            request,
            vote,
            bls_signature,
            bls_public_key: self.bls_keys.public_key(),
            timestamp: now,
            signature: Signature([0u8; 64]),
        });

        let id = tx.compute_id().map_err(|e| NodeError::Tx(e.to_string()))?;
        let bytes = tx.signing_bytes().map_err(|e| NodeError::Tx(e.to_string()))?;
        let signature = sign_message(&self.account_keys.private, &bytes);
        if let Transaction::ValidatorVote(inner) = &mut tx {
            inner.id = id;
            inner.signature = signature;
        }
        Ok(tx)
    }
}

/// Shared state behind the ingestion routes.
pub struct ServiceContext {
    pub tracker: Arc<DispatchTracker>,
    pub signer: VoteSigner,
    pub submitter: Arc<dyn TxSubmitter>,
}

impl ServiceContext {
    /// Handle one verdict: record it, build and submit the vote.
    ///
    /// Returns the id of the generated vote transaction.
    pub fn process_result(&self, tx_id_hex: &str, is_valid: bool) -> Result<TxId, NodeError> {
        let request = TxId::from_str(tx_id_hex)
            .map_err(|e| NodeError::Tx(format!("bad tx_id: {e}")))?;

        self.tracker.record_verdict(request, is_valid);

        let tx = self.signer.build_vote(request, is_valid, Timestamp::now())?;
        let vote_id = *tx.id();
        self.submitter.submit(tx)?;

        info!(request = %request, vote = is_valid, vote_tx = %vote_id, "submitted validator vote");
        Ok(vote_id)
    }
}

#[derive(Deserialize)]
struct SubmitResultRequest {
    tx_id: String,
    is_valid: bool,
}

/// The HTTP listener the external verifier posts verdicts to.
pub struct ResultIngestionService {
    pub port: u16,
    pub context: Arc<ServiceContext>,
}

impl ResultIngestionService {
    pub fn new(port: u16, context: Arc<ServiceContext>) -> Self {
        Self { port, context }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/ping", get(ping_handler))
            .route("/submit-result", post(submit_result_handler))
            .with_state(self.context.clone())
    }

    /// Bind and serve until shut down.
    pub async fn start(&self) -> Result<(), NodeError> {
        let addr = format!("0.0.0.0:{}", self.port);
        info!("result ingestion listener on {}", addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

async fn ping_handler() -> &'static str {
    "Pong"
}

async fn submit_result_handler(
    State(context): State<Arc<ServiceContext>>,
    Json(body): Json<SubmitResultRequest>,
) -> Result<String, (StatusCode, String)> {
    match context.process_result(&body.tx_id, body.is_valid) {
        Ok(vote_id) => Ok(format!("submitted vote {vote_id}")),
        Err(e @ NodeError::Tx(_)) => {
            warn!(error = %e, "rejected malformed result submission");
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            warn!(error = %e, "failed to process result submission");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
