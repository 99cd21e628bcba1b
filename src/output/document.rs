//! Assembly and writing of the final document
//!
//! The document is the root name, the rendered tree lines and an optional
//! summary block. It is written to the output file with CRLF line endings.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, TreeError};
use crate::tree::{RenderedTree, format_size};

use super::config::OutputOptions;

/// Line terminator used in the output file.
pub const LINE_ENDING: &str = "\r\n";

/// Plain-text document lines: root name, tree lines, then the summary.
pub fn render_document(
    root_name: &str,
    tree: &RenderedTree,
    options: &OutputOptions,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(tree.lines.len() + 6);
    lines.push(root_name.to_string());
    lines.extend(tree.lines.iter().cloned());
    if options.show_stats {
        lines.extend(tree.stats.summary_lines(options.show_size));
    }
    lines
}

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    root: &'a str,
    lines: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<JsonStats>,
}

#[derive(Debug, Serialize)]
struct JsonStats {
    directories: usize,
    files: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_size_human: Option<String>,
}

/// Pretty-printed JSON form of the document.
pub fn render_json(
    root_name: &str,
    tree: &RenderedTree,
    options: &OutputOptions,
) -> Result<String> {
    let stats = options.show_stats.then(|| JsonStats {
        directories: tree.stats.directories,
        files: tree.stats.files,
        total_size: options.show_size.then_some(tree.stats.total_size),
        total_size_human: options
            .show_size
            .then(|| format_size(tree.stats.total_size)),
    });

    let doc = JsonDocument {
        root: root_name,
        lines: &tree.lines,
        stats,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Write `lines` to `path`, joined with CRLF and without a trailing terminator.
pub fn write_document(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, lines.join(LINE_ENDING)).map_err(|source| TreeError::Output {
        path: path.to_path_buf(),
        source,
    })
}
