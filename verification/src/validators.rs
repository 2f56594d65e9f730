//! The validator weight table supplied per executing height.

use attest_types::{BlsPublicKey, ValidatorAddress};
use serde::{Deserialize, Serialize};

/// One registered validator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Validator {
    pub address: ValidatorAddress,
    pub bls_public_key: BlsPublicKey,
    pub weight: u64,
}

/// The validator set at a given height. Read-only from the transitions'
/// point of view; membership is by BLS public key.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ValidatorSet {
    validators: Vec<Validator>,
}

impl ValidatorSet {
    pub fn new(validators: Vec<Validator>) -> Self {
        Self { validators }
    }

    /// Look up a validator by its BLS public key.
    pub fn by_bls_key(&self, key: &BlsPublicKey) -> Option<&Validator> {
        self.validators.iter().find(|v| &v.bls_public_key == key)
    }

    /// Sum of all validator weights. `None` on overflow.
    pub fn total_weight(&self) -> Option<u64> {
        self.validators
            .iter()
            .try_fold(0u64, |acc, v| acc.checked_add(v.weight))
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
