//! Tree formatting and document output
//!
//! # Module Structure
//!
//! - `color` - ANSI color scheme for entries
//! - `config` - Output options and output path resolution
//! - `node` - Single-entry line formatter
//! - `document` - Document assembly, JSON form and file writing

mod color;
mod config;
mod document;
mod node;

pub use color::{ColorScheme, EXTENSION_COLORS};
pub use config::{DEFAULT_OUTPUT_FILE, OutputOptions, resolve_output_path};
pub use document::{LINE_ENDING, render_document, render_json, write_document};
pub use node::NodeFormatter;
