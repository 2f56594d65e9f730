//! Attest daemon — entry point for running a validator process.

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use attest_crypto::{bls_keypair_from_seed, derive_validator_address, keypair_from_seed};
use attest_node::service::{ResultIngestionService, ServiceContext, TxSubmitter, VoteSigner};
use attest_node::{DispatchTracker, NodeConfig, NodeError};
use attest_rpc::RpcServer;
use attest_store_lmdb::{LmdbEnvironment, LmdbState};
use attest_transactions::Transaction;
use attest_types::{ChainId, NetworkId, Timestamp};

#[derive(Parser)]
#[command(name = "attest-daemon", about = "attest protocol validator daemon")]
struct Cli {
    /// Network to connect to: "live", "test", or "dev".
    /// When a config file is provided, defaults to the file's network value.
    #[arg(long, env = "ATTEST_NETWORK")]
    network: Option<String>,

    /// Data directory for durable state and staged artifacts.
    #[arg(long, env = "ATTEST_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Port for the result ingestion listener (defaults to network default).
    #[arg(long, env = "ATTEST_LISTENER_PORT")]
    listener_port: Option<u16>,

    /// Enable the status RPC server.
    #[arg(long, default_value_t = true, env = "ATTEST_ENABLE_RPC")]
    rpc: bool,

    /// Status RPC server port.
    #[arg(long, env = "ATTEST_RPC_PORT")]
    rpc_port: Option<u16>,

    /// Base URL of the external verifier service.
    #[arg(long, env = "ATTEST_VERIFIER_URL")]
    verifier_url: Option<String>,

    /// Hex-encoded 32-byte seed for the Ed25519 account key.
    #[arg(long, env = "ATTEST_ACCOUNT_SEED")]
    account_seed: Option<String>,

    /// Hex-encoded 32-byte seed for the BLS attestation key.
    #[arg(long, env = "ATTEST_BLS_SEED")]
    bls_seed: Option<String>,

    /// Hex-encoded 32-byte chain id votes are bound to.
    #[arg(long, env = "ATTEST_CHAIN_ID")]
    chain_id: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "ATTEST_LOG_LEVEL")]
    log_level: String,

    /// Log output format: "human" or "json".
    /// When a config file is provided, defaults to the file's value.
    #[arg(long, env = "ATTEST_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Start the validator process.
    Run,
}

/// Stand-in for the surrounding mempool: signed vote transactions are
/// appended as JSON lines to an outbox file for the block builder to pick
/// up.
struct OutboxSubmitter {
    file: Mutex<std::fs::File>,
}

impl OutboxSubmitter {
    fn open(path: &std::path::Path) -> anyhow::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening outbox {}", path.display()))?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl TxSubmitter for OutboxSubmitter {
    fn submit(&self, tx: Transaction) -> Result<(), NodeError> {
        let line = serde_json::to_string(&tx).map_err(|e| NodeError::Submit(e.to_string()))?;
        let mut file = self
            .file
            .lock()
            .map_err(|_| NodeError::Submit("outbox lock poisoned".into()))?;
        writeln!(file, "{line}").map_err(|e| NodeError::Submit(e.to_string()))?;
        Ok(())
    }
}

fn parse_network(s: &str) -> NetworkId {
    match s.to_lowercase().as_str() {
        "live" => NetworkId::Live,
        "test" => NetworkId::Test,
        _ => NetworkId::Dev,
    }
}

fn parse_seed(hex_seed: &str, what: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = hex::decode(hex_seed).with_context(|| format!("decoding {what}"))?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| anyhow::anyhow!("{what} must be 32 bytes, got {}", bytes.len()))
}

fn merge_config(cli: &Cli) -> anyhow::Result<NodeConfig> {
    let mut config = if let Some(ref path) = cli.config {
        let path = path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("config path is not valid UTF-8"))?;
        NodeConfig::from_toml_file(path)?
    } else {
        NodeConfig::default()
    };

    if let Some(ref network) = cli.network {
        config.network = parse_network(network);
    }
    if let Some(ref data_dir) = cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    config.listener_port = cli
        .listener_port
        .unwrap_or_else(|| config.network.default_listener_port());
    config.enable_rpc = cli.rpc;
    if let Some(rpc_port) = cli.rpc_port {
        config.rpc_port = rpc_port;
    }
    if let Some(ref url) = cli.verifier_url {
        config.verifier_url = url.clone();
    }
    if cli.account_seed.is_some() {
        config.account_seed = cli.account_seed.clone();
    }
    if cli.bls_seed.is_some() {
        config.bls_seed = cli.bls_seed.clone();
    }
    config.log_level = cli.log_level.clone();
    if let Some(ref format) = cli.log_format {
        config.log_format = format.clone();
    }
    Ok(config)
}

fn build_signer(config: &NodeConfig, chain: ChainId) -> anyhow::Result<VoteSigner> {
    let account_keys = match config.account_seed.as_deref() {
        Some(seed) => keypair_from_seed(&parse_seed(seed, "account seed")?),
        None => {
            warn!("no account seed configured; using an ephemeral key");
            attest_crypto::generate_keypair()
        }
    };
    let bls_keys = match config.bls_seed.as_deref() {
        Some(seed) => bls_keypair_from_seed(&parse_seed(seed, "BLS seed")?)?,
        None => {
            warn!("no BLS seed configured; using an ephemeral key");
            attest_crypto::generate_bls_keypair()?
        }
    };
    let address = derive_validator_address(&account_keys.public);
    info!(validator = %address, "validator identity ready");
    Ok(VoteSigner {
        network: config.network,
        chain,
        address,
        account_keys,
        bls_keys,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = merge_config(&cli)?;
    attest_utils::init_tracing(&config.log_level, config.log_format == "json");
    if let Some(ref path) = cli.config {
        info!("loaded config from {}", path.display());
    }
    let chain = match cli.chain_id.as_deref() {
        Some(hex_id) => ChainId::new(parse_seed(hex_id, "chain id")?),
        None => ChainId::ZERO,
    };

    match cli.command {
        Command::Run => {
            info!(
                "starting attest validator on {} network (listener:{}, rpc:{})",
                config.network.as_str(),
                config.listener_port,
                if config.enable_rpc {
                    config.rpc_port.to_string()
                } else {
                    "off".into()
                },
            );

            std::fs::create_dir_all(&config.data_dir)
                .with_context(|| format!("creating data dir {}", config.data_dir.display()))?;
            let env = LmdbEnvironment::open(&config.db_dir(), config.map_size)?;

            let signer = build_signer(&config, chain)?;
            let submitter = Arc::new(OutboxSubmitter::open(
                &config.data_dir.join("outbox.jsonl"),
            )?);
            let context = Arc::new(ServiceContext {
                tracker: Arc::new(DispatchTracker::new()),
                signer,
                submitter,
            });

            // Drop dispatches whose budget elapsed without a verdict so the
            // pending count stays an honest liveness signal.
            let sweep_tracker = context.tracker.clone();
            tokio::spawn(async move {
                let mut tick = tokio::time::interval(std::time::Duration::from_secs(60));
                loop {
                    tick.tick().await;
                    sweep_tracker.sweep_expired(Timestamp::now());
                }
            });

            let ingestion = ResultIngestionService::new(config.listener_port, context);

            if config.enable_rpc {
                let rpc_state = Arc::new(LmdbState::new(&env));
                let rpc = RpcServer::new(config.rpc_port, rpc_state);
                tokio::try_join!(
                    async { ingestion.start().await.map_err(anyhow::Error::from) },
                    async { rpc.start().await.map_err(anyhow::Error::from) },
                )?;
            } else {
                ingestion.start().await?;
            }
        }
    }

    Ok(())
}
