//! LMDB environment setup.

use std::path::Path;
use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};
use tracing::info;

use crate::LmdbError;

const STATE_DB_NAME: &str = "state";
const MAX_DBS: u32 = 4;

/// Wraps the LMDB environment and the database handles opened in it.
pub struct LmdbEnvironment {
    pub(crate) env: Arc<Env>,
    pub(crate) state_db: Database<Bytes, Bytes>,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment at the given path.
    ///
    /// `map_size` is the maximum size of the memory map in bytes; LMDB
    /// grows the file lazily, so a generous value costs nothing up front.
    pub fn open(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(MAX_DBS)
                .open(path)?
        };
        let mut wtxn = env.write_txn()?;
        let state_db = env.create_database(&mut wtxn, Some(STATE_DB_NAME))?;
        wtxn.commit()?;
        info!(path = %path.display(), map_size, "opened LMDB environment");
        Ok(Self {
            env: Arc::new(env),
            state_db,
        })
    }
}
