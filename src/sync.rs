use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::types::{AssetEntry, AssetKind, SyncReport};
use std::fs;
use std::path::Path;
use std::process::Command;
use walkdir::WalkDir;

/// Classify one source file and derive its destination under `output_dir`,
/// mirroring the path relative to `input_dir` with the extension substituted.
/// Returns `None` for unrecognized extensions and files outside `input_dir`.
pub fn plan_entry(source: &Path, input_dir: &Path, output_dir: &Path) -> Option<AssetEntry> {
    let ext = source.extension()?.to_str()?;
    let kind = AssetKind::from_extension(ext)?;
    let relative = source.strip_prefix(input_dir).ok()?.to_path_buf();
    let dest = output_dir
        .join(&relative)
        .with_extension(kind.output_extension());

    Some(AssetEntry {
        source: source.to_path_buf(),
        relative,
        dest,
        kind,
    })
}

/// Whether `dest` must be recompiled from `source`. A destination is fresh
/// only if it exists and its mtime is >= the source's; equal timestamps
/// count as fresh to avoid redundant work on coarse-resolution filesystems.
/// Unreadable metadata on either side counts as stale.
pub fn needs_compile(source: &Path, dest: &Path) -> bool {
    let Ok(dest_meta) = dest.metadata() else {
        return true;
    };
    let Ok(source_meta) = source.metadata() else {
        return true;
    };
    match (dest_meta.modified(), source_meta.modified()) {
        (Ok(dest_time), Ok(source_time)) => dest_time < source_time,
        _ => true,
    }
}

/// Walk the input tree and recompile every stale recognized asset through
/// the external compiler, sequentially, one file at a time.
///
/// A nonzero compiler exit is logged and counted but does not stop the run.
/// A compiler that cannot be spawned at all aborts with an error, as does a
/// compiler path that does not exist (checked before any traversal).
pub fn compile_assets(config: &SyncConfig) -> Result<SyncReport, SyncError> {
    if !config.compiler_path.exists() {
        return Err(SyncError::CompilerNotFound {
            candidates: vec![config.compiler_path.clone()],
        });
    }

    let mut report = SyncReport::default();

    for file in WalkDir::new(&config.input_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let Some(entry) = plan_entry(file.path(), &config.input_dir, &config.output_dir) else {
            continue;
        };

        if let Some(parent) = entry.dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if !needs_compile(&entry.source, &entry.dest) {
            report.up_to_date += 1;
            continue;
        }

        log::info!(
            "Compiling: {} -> {}",
            entry.relative.display(),
            entry.relative.with_extension(entry.kind.output_extension()).display()
        );

        let status = Command::new(&config.compiler_path)
            .arg(&entry.source)
            .arg(&entry.dest)
            .status()?;

        if status.success() {
            report.compiled += 1;
        } else {
            log::error!("Failed to compile {}", entry.source.display());
            report.failed += 1;
        }
    }

    Ok(report)
}
