//! Shared helpers for tree rendering

/// Connector for an entry that has more siblings after it.
pub const BRANCH: &str = "├───";
/// Connector for the last entry at its level.
pub const LAST_BRANCH: &str = "└───";

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Pick the connector glyph for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for the children of an entry
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}

/// Format a size in bytes with binary prefixes and one decimal place.
///
/// Divides by 1024 until the value drops below 1024, falling back to PB.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in SIZE_UNITS {
        if size < 1024.0 {
            return format!("{:.1}{}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1}PB", size)
}
