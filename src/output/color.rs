//! ANSI color codes for tree entries
//!
//! The escape sequences are rendered once through `termcolor::Ansi` and kept
//! as plain strings, so the same codes end up on stdout and in the output
//! file.

use std::collections::HashMap;
use std::path::Path;

use termcolor::{Ansi, Color, ColorSpec, WriteColor};

use crate::tree::DirectoryEntry;

/// Extension table for plain files.
pub const EXTENSION_COLORS: &[(Color, &[&str])] = &[
    (Color::Green, &["exe", "sh", "bat", "cmd", "ps1", "py"]),
    (
        Color::Cyan,
        &[
            "mp3", "wav", "flac", "m4a", "ogg", "mp4", "avi", "mkv", "mov", "jpg", "jpeg", "png",
            "gif", "bmp",
        ],
    ),
    (Color::Magenta, &["zip", "rar", "7z", "tar", "gz"]),
    (Color::Red, &["json", "xml", "yaml", "yml", "ini", "conf"]),
];

/// Start and reset codes for every kind of entry.
#[derive(Debug, Clone, Default)]
pub struct ColorScheme {
    directory: String,
    symlink: String,
    extensions: HashMap<String, String>,
    reset: String,
}

impl ColorScheme {
    /// Blue directories, yellow symlinks, files colored by extension.
    pub fn standard() -> Self {
        Self::from_table(Color::Blue, Color::Yellow, EXTENSION_COLORS)
    }

    /// A scheme whose codes are all empty strings.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn from_table(directory: Color, symlink: Color, table: &[(Color, &[&str])]) -> Self {
        let extensions = table
            .iter()
            .flat_map(|(color, exts)| {
                let code = start_code(*color);
                exts.iter()
                    .map(move |ext| (ext.to_lowercase(), code.clone()))
            })
            .collect();

        Self {
            directory: start_code(directory),
            symlink: start_code(symlink),
            extensions,
            reset: reset_code(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Codes to wrap an entry's name with.
    ///
    /// Directories win over symlinks, symlinks over extensions. A file with
    /// an unknown extension gets no start code but still gets the reset.
    pub fn codes_for(&self, entry: &DirectoryEntry) -> (&str, &str) {
        if !self.is_enabled() {
            return ("", "");
        }

        let start = if entry.is_dir() {
            self.directory.as_str()
        } else if entry.is_symlink {
            self.symlink.as_str()
        } else {
            Path::new(&entry.name)
                .extension()
                .and_then(|ext| self.extensions.get(&ext.to_string_lossy().to_lowercase()))
                .map_or("", String::as_str)
        };

        (start, self.reset.as_str())
    }
}

/// Render the escape sequence that switches the foreground to a bright `color`.
fn start_code(color: Color) -> String {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_intense(true).set_reset(false);

    let mut ansi = Ansi::new(Vec::new());
    if ansi.set_color(&spec).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&ansi.into_inner()).into_owned()
}

fn reset_code() -> String {
    let mut ansi = Ansi::new(Vec::new());
    if ansi.reset().is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&ansi.into_inner()).into_owned()
}
