use std::path::PathBuf;

/// Category of a recognized source asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// 3D model source (.obj, .fbx, .gltf, .glb) compiled to .tmodel
    Model,
    /// Texture image source (.png, .jpg, .jpeg, .tga, .bmp) compiled to .ttex
    Texture,
}

impl AssetKind {
    /// Classify a file extension (without the leading dot), case-insensitively.
    /// Returns `None` for unrecognized extensions; such files are skipped.
    pub fn from_extension(ext: &str) -> Option<AssetKind> {
        match ext.to_ascii_lowercase().as_str() {
            "obj" | "fbx" | "gltf" | "glb" => Some(AssetKind::Model),
            "png" | "jpg" | "jpeg" | "tga" | "bmp" => Some(AssetKind::Texture),
            _ => None,
        }
    }

    /// Compiled artifact extension for this kind (without the leading dot).
    pub fn output_extension(&self) -> &'static str {
        match self {
            AssetKind::Model => "tmodel",
            AssetKind::Texture => "ttex",
        }
    }
}

/// One source asset scheduled for the compiler.
///
/// Built per file during traversal and consumed immediately; nothing is
/// persisted between runs beyond the filesystem timestamps themselves.
#[derive(Debug, Clone)]
pub struct AssetEntry {
    /// Absolute path of the source file.
    pub source: PathBuf,
    /// Source path relative to the input root.
    pub relative: PathBuf,
    /// Absolute destination path with the output extension substituted.
    pub dest: PathBuf,
    /// Asset category.
    pub kind: AssetKind,
}

/// Summary of one sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Files handed to the compiler that succeeded.
    pub compiled: usize,
    /// Recognized files whose destination was already fresh.
    pub up_to_date: usize,
    /// Files for which the compiler exited nonzero.
    pub failed: usize,
}

impl SyncReport {
    /// Total recognized assets seen during the run.
    pub fn total(&self) -> usize {
        self.compiled + self.up_to_date + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_extensions_map_to_tmodel() {
        for ext in ["obj", "fbx", "gltf", "glb"] {
            let kind = AssetKind::from_extension(ext).unwrap();
            assert_eq!(kind, AssetKind::Model);
            assert_eq!(kind.output_extension(), "tmodel");
        }
    }

    #[test]
    fn test_texture_extensions_map_to_ttex() {
        for ext in ["png", "jpg", "jpeg", "tga", "bmp"] {
            let kind = AssetKind::from_extension(ext).unwrap();
            assert_eq!(kind, AssetKind::Texture);
            assert_eq!(kind.output_extension(), "ttex");
        }
    }

    #[test]
    fn test_uppercase_extensions_match() {
        assert_eq!(AssetKind::from_extension("OBJ"), Some(AssetKind::Model));
        assert_eq!(AssetKind::from_extension("PNG"), Some(AssetKind::Texture));
        assert_eq!(AssetKind::from_extension("Jpeg"), Some(AssetKind::Texture));
    }

    #[test]
    fn test_unrecognized_extensions_are_none() {
        for ext in ["txt", "wav", "tmodel", "ttex", "ob", ""] {
            assert_eq!(AssetKind::from_extension(ext), None);
        }
    }

    #[test]
    fn test_report_total() {
        let report = SyncReport {
            compiled: 2,
            up_to_date: 3,
            failed: 1,
        };
        assert_eq!(report.total(), 6);
    }
}
