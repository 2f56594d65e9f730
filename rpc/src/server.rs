//! The axum status server.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;

use attest_store::{state, StateRead};
use attest_types::TxId;

use crate::error::RpcError;
use crate::handlers::{StatusRequest, StatusResponse};

/// Read-only status server over durable verification state.
pub struct RpcServer {
    pub port: u16,
    state: Arc<dyn StateRead + Send + Sync>,
}

impl RpcServer {
    pub fn new(port: u16, chain_state: Arc<dyn StateRead + Send + Sync>) -> Self {
        Self {
            port,
            state: chain_state,
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/ping", get(ping_handler))
            .route("/status", post(status_handler))
            .with_state(self.state.clone())
    }

    /// Bind and serve until shut down.
    pub async fn start(&self) -> Result<(), RpcError> {
        let addr = format!("0.0.0.0:{}", self.port);
        info!("status RPC listening on {}", addr);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        axum::serve(listener, self.router())
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        Ok(())
    }
}

/// Pure status lookup, shared by the handler and tests.
pub fn lookup_status(
    chain_state: &dyn StateRead,
    request_id_hex: &str,
) -> Result<StatusResponse, RpcError> {
    let request = TxId::from_str(request_id_hex)
        .map_err(|e| RpcError::InvalidRequest(format!("bad request_id: {e}")))?;

    let deadline = state::get_deadline(chain_state, &request)?
        .ok_or_else(|| RpcError::RequestNotFound(request.to_string()))?;

    Ok(StatusResponse {
        finalized: state::is_finalized(chain_state, &request)?,
        accumulated_weight: state::get_accumulated_weight(chain_state, &request)?,
        deadline: deadline.as_secs(),
    })
}

async fn ping_handler() -> &'static str {
    "Pong"
}

async fn status_handler(
    State(chain_state): State<Arc<dyn StateRead + Send + Sync>>,
    Json(body): Json<StatusRequest>,
) -> Result<Json<StatusResponse>, (StatusCode, String)> {
    match lookup_status(chain_state.as_ref(), &body.request_id) {
        Ok(response) => Ok(Json(response)),
        Err(e @ RpcError::InvalidRequest(_)) => Err((StatusCode::BAD_REQUEST, e.to_string())),
        Err(e @ RpcError::RequestNotFound(_)) => Err((StatusCode::NOT_FOUND, e.to_string())),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}
