use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};
use pool_logic::{PoolLogic, PoolState};
use tracing::info;

/// Try to get `PoolLogic` from `path`. If `path` describes a non-existing file, an uninitialized
/// pool is returned. Nothing is written until [`save_pool_state`] is called.
pub fn get_pool_logic(path: &PathBuf) -> Result<PoolLogic> {
    match path.exists() {
        true => {
            info!("File with state was found. Reading the state from {path:?}.");
            let state = read_from(path)?;
            PoolLogic::from_state(state).map_err(|e| anyhow!("Stored state is invalid: {e}"))
        }
        false => {
            info!("File with state not found. Starting from an uninitialized pool.");
            Ok(PoolLogic::new())
        }
    }
}

/// Save `state` to `path`.
pub fn save_pool_state(state: &PoolState, path: &PathBuf) -> Result<()> {
    let serialized =
        serde_json::to_string_pretty(state).map_err(|e| anyhow!("Failed to serialize: {e}"))?;
    fs::write(path, serialized).map_err(|e| anyhow!("Failed to save pool state: {e}"))
}

fn read_from(path: &Path) -> Result<PoolState> {
    let file_content =
        fs::read_to_string(path).map_err(|e| anyhow!("Failed to read file content: {e}"))?;
    serde_json::from_str::<PoolState>(&file_content)
        .map_err(|e| anyhow!("Failed to deserialize pool state: {e}"))
}
