//! Validator address derivation from account public keys.
//!
//! The address is Blake2b-256 of the Ed25519 public key. Fixed 32 bytes so
//! it can sit inside fixed-width state keys.

use attest_types::{PublicKey, ValidatorAddress};

use crate::hash::blake2b_256;

/// Derive the validator account address for a public key.
pub fn derive_validator_address(public_key: &PublicKey) -> ValidatorAddress {
    ValidatorAddress::new(blake2b_256(&public_key.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keypair_from_seed;

    #[test]
    fn derivation_is_deterministic() {
        let kp = keypair_from_seed(&[9u8; 32]);
        let a1 = derive_validator_address(&kp.public);
        let a2 = derive_validator_address(&kp.public);
        assert_eq!(a1, a2);
    }

    #[test]
    fn different_keys_different_addresses() {
        let kp1 = keypair_from_seed(&[1u8; 32]);
        let kp2 = keypair_from_seed(&[2u8; 32]);
        assert_ne!(
            derive_validator_address(&kp1.public),
            derive_validator_address(&kp2.public)
        );
    }
}
