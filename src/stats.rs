//! Summary statistics accumulated during tree traversal
//!
//! One `TreeStats` is created per traversal and passed down the recursion by
//! mutable reference. Counts only ever grow; they are meaningful once the
//! traversal has returned.

use serde::Serialize;

use crate::tree::{DirectoryEntry, format_size};

/// Running totals for one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Directories that survived filtering
    pub directories: usize,
    /// Files that survived filtering
    pub files: usize,
    /// Sum of file sizes in bytes; only accumulated when sizes are shown
    pub total_size: u64,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the surviving entries of one directory level.
    pub fn record_level(
        &mut self,
        files: &[DirectoryEntry],
        directories: usize,
        include_size: bool,
    ) {
        self.directories += directories;
        self.files += files.len();
        if include_size {
            self.total_size += files.iter().map(|f| f.size).sum::<u64>();
        }
    }

    /// Lines of the summary block, starting with the blank separator line.
    pub fn summary_lines(&self, show_size: bool) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            "Summary:".to_string(),
            format!("Directories: {}", self.directories),
            format!("Files: {}", self.files),
        ];
        if show_size {
            lines.push(format!("Total size: {}", format_size(self.total_size)));
        }
        lines
    }
}
