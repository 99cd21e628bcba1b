//! Output configuration types

use std::path::{Path, PathBuf};

/// Name of the output file written into the target directory by default.
pub const DEFAULT_OUTPUT_FILE: &str = "tree.txt";

/// Configuration for the emitted document.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Append the summary block.
    pub show_stats: bool,
    /// Include the total size in the summary.
    pub show_size: bool,
    /// Emit a JSON document instead of plain text.
    pub json: bool,
}

/// Resolve where the document is written.
///
/// An explicit path is made absolute against the current directory; without
/// one the document goes to `tree.txt` inside `root`.
pub fn resolve_output_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
        None => root.join(DEFAULT_OUTPUT_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_inside_root() {
        let root = Path::new("/tmp/project");
        assert_eq!(
            resolve_output_path(root, None),
            PathBuf::from("/tmp/project/tree.txt")
        );
    }

    #[test]
    fn test_explicit_output_is_absolute() {
        let root = Path::new("/tmp/project");
        let resolved = resolve_output_path(root, Some(Path::new("out/listing.txt")));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("out/listing.txt"));
    }
}
