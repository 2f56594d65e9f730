//! LMDB implementation of the state traits.
//!
//! Each operation runs in its own transaction. The key layout from
//! `attest_store::keys` already makes every fact a distinct key, so no
//! range scans or composite encodings are needed here.

use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env};

use attest_store::{StateRead, StateWrite, StoreError};

use crate::environment::LmdbEnvironment;
use crate::LmdbError;

/// Durable state backed by a single LMDB database.
pub struct LmdbState {
    env: Arc<Env>,
    db: Database<Bytes, Bytes>,
}

impl LmdbState {
    pub fn new(environment: &LmdbEnvironment) -> Self {
        Self {
            env: Arc::clone(&environment.env),
            db: environment.state_db,
        }
    }
}

impl StateRead for LmdbState {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let val = self
            .db
            .get(&rtxn, key)
            .map_err(LmdbError::from)?
            .map(|b| b.to_vec());
        Ok(val)
    }
}

impl StateWrite for LmdbState {
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.db
            .put(&mut wtxn, key, value)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn remove(&mut self, key: &[u8]) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.db
            .delete(&mut wtxn, key)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }
}
