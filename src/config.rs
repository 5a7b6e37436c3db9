use std::path::{Path, PathBuf};

/// Compiler executable name, probed with the Windows suffix first.
const COMPILER_NAME: &str = "tinygl_ac";

/// Paths for one sync run. Constructed once at entry and passed explicitly
/// to the driver; there is no ambient or global configuration.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Root of the source asset tree.
    pub input_dir: PathBuf,
    /// Root of the compiled artifact tree, mirroring the input layout.
    pub output_dir: PathBuf,
    /// Path of the external asset compiler executable.
    pub compiler_path: PathBuf,
}

impl SyncConfig {
    /// Build a config from the standard build-tree layout under `root`:
    /// assets in `tests/assets`, artifacts in `build/tests/assets`, compiler
    /// under `build/tools/asset_compiler`.
    pub fn with_root(root: &Path) -> SyncConfig {
        SyncConfig {
            input_dir: root.join("tests").join("assets"),
            output_dir: root.join("build").join("tests").join("assets"),
            compiler_path: locate_compiler(root),
        }
    }
}

/// Ordered compiler path candidates under `root`: the `.exe` variant first,
/// then the bare name.
pub fn compiler_candidates(root: &Path) -> Vec<PathBuf> {
    let dir = root.join("build").join("tools").join("asset_compiler");
    vec![
        dir.join(format!("{COMPILER_NAME}.exe")),
        dir.join(COMPILER_NAME),
    ]
}

/// Probe the candidate list and return the first existing path. Falls back
/// to the last candidate when none exist, so the driver's existence check
/// reports a concrete path.
pub fn locate_compiler(root: &Path) -> PathBuf {
    let candidates = compiler_candidates(root);
    candidates
        .iter()
        .find(|p| p.exists())
        .cloned()
        .unwrap_or_else(|| candidates.last().cloned().unwrap_or_default())
}
