//! Treeprint - renders a directory as an ASCII tree with optional sizes,
//! timestamps, colors and regex-based exclusion

pub mod error;
pub mod output;
pub mod patterns;
pub mod stats;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{ColorScheme, NodeFormatter, OutputOptions};
pub use patterns::{DEFAULT_IGNORE_PATTERNS, ExclusionPatternSet, PatternMatcher};
pub use stats::TreeStats;
pub use tree::{DirectoryEntry, RenderConfig, RenderedTree, TreeBuilder, format_size, resolve_root};
