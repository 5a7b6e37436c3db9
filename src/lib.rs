/// Run configuration and compiler path probing
pub mod config;

/// Content digest utility
pub mod digest;

/// Error types for sync operations
pub mod error;

/// Stale-asset detection and compiler invocation loop
pub mod sync;

/// Asset classification and run reporting types
pub mod types;

pub use config::{compiler_candidates, locate_compiler, SyncConfig};
pub use error::SyncError;
pub use sync::compile_assets;
pub use types::{AssetEntry, AssetKind, SyncReport};
