//! Rendering of a single tree entry

use chrono::{DateTime, Local};

use crate::tree::{DirectoryEntry, RenderConfig, connector, format_size};

use super::color::ColorScheme;

const TIME_FORMAT: &str = "[%Y-%m-%d %H:%M]";

/// Turns one directory entry into one line of tree output.
///
/// Directories are always rendered with a trailing `/`, whether or not color
/// is enabled.
#[derive(Debug, Clone)]
pub struct NodeFormatter {
    colors: ColorScheme,
    show_size: bool,
    show_time: bool,
}

impl NodeFormatter {
    pub fn new(colors: ColorScheme, show_size: bool, show_time: bool) -> Self {
        Self {
            colors,
            show_size,
            show_time,
        }
    }

    /// Build a formatter matching a render configuration, with the standard
    /// color scheme when color is on.
    pub fn from_config(config: &RenderConfig) -> Self {
        let colors = if config.use_color {
            ColorScheme::standard()
        } else {
            ColorScheme::disabled()
        };
        Self::new(colors, config.show_size, config.show_time)
    }

    /// Format `entry` as `{prefix}{connector}{color}{name}{/}{reset}{info}`.
    pub fn format_node(&self, entry: &DirectoryEntry, prefix: &str, is_last: bool) -> String {
        let (color_start, color_end) = self.colors.codes_for(entry);
        let suffix = if entry.is_dir() { "/" } else { "" };

        let mut line = format!(
            "{}{}{}{}{}{}",
            prefix,
            connector(is_last),
            color_start,
            entry.name,
            suffix,
            color_end
        );

        let info = self.file_info(entry);
        if !info.is_empty() {
            line.push(' ');
            line.push_str(&info.join(" "));
        }
        line
    }

    /// Bracketed size and modification time, as enabled.
    fn file_info(&self, entry: &DirectoryEntry) -> Vec<String> {
        let mut parts = Vec::new();
        if self.show_size && entry.is_file() {
            parts.push(format!("[{}]", format_size(entry.size)));
        }
        if self.show_time {
            if let Some(modified) = entry.modified {
                let local: DateTime<Local> = modified.into();
                parts.push(local.format(TIME_FORMAT).to_string());
            }
        }
        parts
    }
}
