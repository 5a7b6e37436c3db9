use crate::error::SyncError;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// SHA-256 hex digest of a file's full contents.
///
/// Available for content-addressed change detection; the sync driver itself
/// decides staleness from modification times only and does not call this.
pub fn file_digest(path: &Path) -> Result<String, SyncError> {
    let data = fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&data);
    let digest = hasher.finalize();
    Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
}
