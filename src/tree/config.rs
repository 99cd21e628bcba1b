//! Configuration for tree rendering

use crate::patterns::PatternMatcher;

/// Settings for one traversal. Built once, then only borrowed.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Append `[size]` to file lines and accumulate the total size.
    pub show_size: bool,
    /// Append `[YYYY-MM-DD HH:MM]` to every line.
    pub show_time: bool,
    pub use_color: bool,
    /// Directories at recursion depth `max_depth` show their files but not
    /// their subdirectories. The root is depth 0. `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Entries whose bare name matches are dropped with their whole subtree.
    pub matcher: Option<PatternMatcher>,
}

impl RenderConfig {
    /// Check if subdirectories of a directory at `depth` are cut off
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }

    /// Check if an entry name is hidden by the exclusion matcher
    pub fn is_excluded(&self, name: &str) -> bool {
        self.matcher.as_ref().is_some_and(|m| m.is_excluded(name))
    }
}
