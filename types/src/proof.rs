//! Proof-system tags.
//!
//! Every supported proof system goes through the same request/dispatch/vote
//! lifecycle; the tag only selects the external verifier endpoint and which
//! deployed artifacts accompany the proof. Proof bytes themselves are opaque
//! to this chain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Artifact kind discriminants within an image's deployed-artifact family.
///
/// The proof artifact for a given request uses a caller-chosen kind above
/// these reserved values.
pub mod artifact_kind {
    /// Program image (ELF, Miden assembly, Gnark verifying key, ...).
    pub const PROGRAM: u16 = 1;
    /// Auxiliary public inputs.
    pub const INPUTS: u16 = 2;
    /// Auxiliary public outputs.
    pub const OUTPUTS: u16 = 3;
}

/// A supported external proof system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProofSystem {
    Sp1,
    RiscZero,
    Miden,
    Gnark,
    Jolt,
    Plonky2,
}

impl ProofSystem {
    pub const ALL: [ProofSystem; 6] = [
        Self::Sp1,
        Self::RiscZero,
        Self::Miden,
        Self::Gnark,
        Self::Jolt,
        Self::Plonky2,
    ];

    /// Wire discriminant used in transactions and verify-intent callbacks.
    pub fn id(&self) -> u16 {
        match self {
            Self::Sp1 => 4,
            Self::Miden => 5,
            Self::RiscZero => 6,
            Self::Gnark => 7,
            Self::Jolt => 8,
            Self::Plonky2 => 9,
        }
    }

    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Path of this system's submission endpoint on the external verifier.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Sp1 => "/sp1",
            Self::RiscZero => "/risc-zero",
            Self::Miden => "/miden",
            Self::Gnark => "/gnark",
            Self::Jolt => "/jolt",
            Self::Plonky2 => "/plonky2",
        }
    }

    /// Deployed artifact kinds that must be staged alongside the proof.
    pub fn required_artifact_kinds(&self) -> &'static [u16] {
        use artifact_kind::*;
        match self {
            Self::Sp1 | Self::RiscZero | Self::Jolt | Self::Plonky2 => &[PROGRAM],
            Self::Gnark => &[PROGRAM, INPUTS],
            Self::Miden => &[PROGRAM, INPUTS, OUTPUTS],
        }
    }
}

impl fmt::Display for ProofSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sp1 => "sp1",
            Self::RiscZero => "risc-zero",
            Self::Miden => "miden",
            Self::Gnark => "gnark",
            Self::Jolt => "jolt",
            Self::Plonky2 => "plonky2",
        };
        write!(f, "{name}")
    }
}
