use std::path::PathBuf;

/// Errors that can occur while syncing assets.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// I/O error creating directories or launching the compiler.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The asset compiler executable was not found at any candidate path.
    #[error("asset compiler not found, tried: {}", format_candidates(.candidates))]
    CompilerNotFound { candidates: Vec<PathBuf> },
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
