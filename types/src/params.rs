//! Protocol parameters.
//!
//! Bounds and budgets shared by the on-chain transitions and the off-chain
//! dispatch path. On-chain code reads only the clamp bounds; everything else
//! configures the node-side service plumbing.

use serde::{Deserialize, Serialize};

/// Parameters every node agrees on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProtocolParams {
    // ── Verification requests ────────────────────────────────────────────
    /// Lower clamp bound for a request's timeout budget (seconds). A caller
    /// asking for less still gets this much.
    pub min_timeout_secs: u64,

    /// Upper clamp bound for a request's timeout budget (seconds). Prevents
    /// griefing via absurd timeouts.
    pub max_timeout_secs: u64,

    // ── External verifier dispatch ───────────────────────────────────────
    /// Client-side timeout for a single dispatch HTTP call (seconds).
    pub dispatch_timeout_secs: u64,

    /// Idle connections kept pooled toward the external verifier, to
    /// tolerate bursty verification traffic.
    pub dispatch_max_idle_connections: usize,

    // ── Deployed artifacts ───────────────────────────────────────────────
    /// Chunk-count size hint for single-word state values.
    pub value_chunks: u16,

    /// Chunk-count size hint for deployed artifact blobs.
    pub artifact_chunks_max: u16,
}

impl ProtocolParams {
    /// The intended configuration for the live network.
    pub fn attest_defaults() -> Self {
        Self {
            min_timeout_secs: 20,
            max_timeout_secs: 300,
            dispatch_timeout_secs: 8,
            dispatch_max_idle_connections: 1000,
            value_chunks: 1,
            artifact_chunks_max: 10,
        }
    }
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self::attest_defaults()
    }
}
