//! Directory tree generation
//!
//! `TreeBuilder` lists each directory once, filters and sorts its entries,
//! and renders files before subdirectories, recursing depth-first.
//!
//! # Module Structure
//!
//! - `config` - Render configuration
//! - `entry` - Directory listing snapshots
//! - `utils` - Connectors, prefixes and size formatting
//! - `walker` - The recursive traversal

mod config;
mod entry;
mod utils;
mod walker;

pub use config::RenderConfig;
pub use entry::{DirectoryEntry, EntryKind, list_dir, partition_sorted};
pub use utils::{BRANCH, LAST_BRANCH, child_prefix, connector, format_size};
pub use walker::{RenderedTree, TreeBuilder, resolve_root};
