//! TreeBuilder - depth-first rendering of a directory into tree lines

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TreeError};
use crate::output::NodeFormatter;
use crate::stats::TreeStats;

use super::config::RenderConfig;
use super::entry::{list_dir, partition_sorted};
use super::utils::child_prefix;

/// Lines and statistics produced by one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedTree {
    pub lines: Vec<String>,
    pub stats: TreeStats,
}

/// Check that `path` names an existing directory and make it absolute.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(TreeError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(TreeError::NotADirectory(path.to_path_buf()));
    }
    canonicalize(path)
}

/// Renders a directory as tree lines, files before directories at each level.
pub struct TreeBuilder<'a> {
    config: &'a RenderConfig,
    formatter: NodeFormatter,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            formatter: NodeFormatter::from_config(config),
        }
    }

    /// Render everything below `root`. The root itself gets no line.
    pub fn build(&self, root: &Path) -> Result<RenderedTree> {
        let canonical = canonicalize(root)?;
        let mut tree = RenderedTree::default();
        let mut ancestors = vec![canonical];
        self.walk_dir(root, "", 0, &mut ancestors, &mut tree.stats, &mut tree.lines)?;
        debug!(
            root = %root.display(),
            directories = tree.stats.directories,
            files = tree.stats.files,
            "tree built"
        );
        Ok(tree)
    }

    /// Render the contents of `dir` into `lines`.
    ///
    /// `depth` is the recursion depth of `dir`, the root being 0. A level's
    /// files are always rendered; its subdirectories only below `max_depth`.
    /// `ancestors` holds the canonical paths from the root down to `dir`.
    fn walk_dir(
        &self,
        dir: &Path,
        prefix: &str,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
        stats: &mut TreeStats,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        let entries = list_dir(dir)?;
        debug!(path = %dir.display(), entries = entries.len(), depth, "listed directory");

        let (mut files, mut dirs) = partition_sorted(entries);
        files.retain(|e| !self.config.is_excluded(&e.name));
        dirs.retain(|e| !self.config.is_excluded(&e.name));

        stats.record_level(&files, dirs.len(), self.config.show_size);

        for (index, file) in files.iter().enumerate() {
            let is_last = index + 1 == files.len() && dirs.is_empty();
            lines.push(self.formatter.format_node(file, prefix, is_last));
        }

        if self.config.at_max_depth(depth) {
            return Ok(());
        }

        for (index, sub) in dirs.iter().enumerate() {
            let is_last = index + 1 == dirs.len();
            lines.push(self.formatter.format_node(sub, prefix, is_last));

            let canonical = if sub.is_symlink {
                canonicalize(&sub.path)?
            } else {
                match ancestors.last() {
                    Some(parent) => parent.join(&sub.name),
                    None => canonicalize(&sub.path)?,
                }
            };

            // A link back to a directory we are already inside would recurse forever.
            if ancestors.contains(&canonical) {
                debug!(path = %sub.path.display(), "not following symlink cycle");
                continue;
            }

            let sub_prefix = child_prefix(prefix, is_last);
            ancestors.push(canonical);
            let walked =
                self.walk_dir(&sub.path, &sub_prefix, depth + 1, ancestors, stats, lines);
            ancestors.pop();
            walked?;
        }

        Ok(())
    }
}

fn canonicalize(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })
}
