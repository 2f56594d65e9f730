//! RPC request and response payloads.

use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct StatusRequest {
    /// Hex-encoded request id.
    pub request_id: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub finalized: bool,
    pub accumulated_weight: u64,
    /// Absolute deadline in Unix seconds.
    pub deadline: u64,
}
