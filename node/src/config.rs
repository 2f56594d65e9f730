//! Node configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use attest_types::{NetworkId, ProtocolParams};

use crate::NodeError;

/// Configuration for an attest validator node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Which network to connect to.
    #[serde(default = "default_network")]
    pub network: NetworkId,

    /// Data directory for durable state and staged artifacts.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Protocol parameters (fixed per network, not TOML config).
    #[serde(skip)]
    pub params: ProtocolParams,

    /// Port the result ingestion listener binds to.
    #[serde(default = "default_listener_port")]
    pub listener_port: u16,

    /// Whether to enable the status RPC server.
    #[serde(default = "default_true")]
    pub enable_rpc: bool,

    /// RPC port (if enabled).
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Base URL of the external verifier service.
    #[serde(default = "default_verifier_url")]
    pub verifier_url: String,

    /// Hex-encoded 32-byte seed for the Ed25519 account key.
    #[serde(default)]
    pub account_seed: Option<String>,

    /// Hex-encoded 32-byte seed for the BLS attestation key.
    #[serde(default)]
    pub bls_seed: Option<String>,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// LMDB map size in bytes.
    #[serde(default = "default_map_size")]
    pub map_size: usize,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_network() -> NetworkId {
    NetworkId::Dev
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./attest_data")
}

fn default_listener_port() -> u16 {
    NetworkId::Dev.default_listener_port()
}

fn default_true() -> bool {
    true
}

fn default_rpc_port() -> u16 {
    7087
}

fn default_verifier_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_map_size() -> usize {
    1024 * 1024 * 1024
}

// ── Impl ───────────────────────────────────────────────────────────────

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, NodeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NodeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, NodeError> {
        toml::from_str(s).map_err(|e| NodeError::Config(e.to_string()))
    }

    /// Directory staged artifacts are written to.
    pub fn artifact_dir(&self) -> PathBuf {
        self.data_dir.join("artifacts")
    }

    /// Directory the LMDB environment lives in.
    pub fn db_dir(&self) -> PathBuf {
        self.data_dir.join("db")
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            data_dir: default_data_dir(),
            params: ProtocolParams::default(),
            listener_port: default_listener_port(),
            enable_rpc: default_true(),
            rpc_port: default_rpc_port(),
            verifier_url: default_verifier_url(),
            account_seed: None,
            bls_seed: None,
            log_format: default_log_format(),
            log_level: default_log_level(),
            map_size: default_map_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = NodeConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.rpc_port, 7087);
        assert_eq!(config.listener_port, NetworkId::Dev.default_listener_port());
        assert_eq!(config.log_format, "human");
        assert!(config.account_seed.is_none());
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            rpc_port = 9999
            verifier_url = "http://10.0.0.5:8080"
        "#;
        let config = NodeConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.rpc_port, 9999);
        assert_eq!(config.verifier_url, "http://10.0.0.5:8080");
        assert_eq!(config.log_level, "info"); // default
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = NodeConfig::from_toml_file("/nonexistent/attest.toml");
        assert!(matches!(result, Err(NodeError::Config(_))));
    }

    #[test]
    fn derived_dirs_nest_under_data_dir() {
        let config = NodeConfig {
            data_dir: PathBuf::from("/var/lib/attest"),
            ..NodeConfig::default()
        };
        assert_eq!(config.artifact_dir(), PathBuf::from("/var/lib/attest/artifacts"));
        assert_eq!(config.db_dir(), PathBuf::from("/var/lib/attest/db"));
    }
}
