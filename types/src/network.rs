//! Network and chain identifiers.
//!
//! Both identifiers are embedded in the message a validator BLS-signs when
//! attesting a verification verdict, so a vote for one chain can never be
//! replayed on another.

use serde::{Deserialize, Serialize};

/// Identifies which attest network a node is connected to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkId {
    /// The production network.
    Live,
    /// The public test network.
    Test,
    /// Local development network.
    Dev,
}

impl NetworkId {
    /// Numeric id embedded in signed vote messages.
    pub fn id(&self) -> u32 {
        match self {
            Self::Live => 1,
            Self::Test => 2,
            Self::Dev => 3,
        }
    }

    /// Default result-listener port for this network.
    pub fn default_listener_port(&self) -> u16 {
        match self {
            Self::Live => 9650,
            Self::Test => 19650,
            Self::Dev => 29650,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Test => "test",
            Self::Dev => "dev",
        }
    }
}

/// A 32-byte chain identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub [u8; 32]);

impl ChainId {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}
