//! Regex-based exclusion of directory entries by name
//!
//! An `ExclusionPatternSet` collects pattern strings; compiling it yields a
//! single `PatternMatcher` that ORs every pattern together.

use std::collections::BTreeSet;
use std::path::Path;

use regex::Regex;

use crate::error::{Result, TreeError};

/// Names of common build, VCS and cache directories that are hidden by default.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    r"^\.git$",
    r"^\.pytest_cache$",
    r"^\.mypy_cache$",
    r"^__pycache__$",
    r"^node_modules$",
    r"^\.vscode$",
    r"^\.idea$",
    r"^\.vs$",
    r"^\.venv$",
    r"^venv$",
    r"^env$",
    r"^\.env$",
    r"^\.tox$",
    r"^\.coverage$",
    r"^\.sass-cache$",
    r"^\.next$",
    r"^dist$",
    r"^build$",
    r"^\..+_cache$",
];

/// A set of exclusion patterns. Duplicates collapse and order does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionPatternSet {
    patterns: BTreeSet<String>,
}

impl ExclusionPatternSet {
    /// An empty set, which compiles to no matcher at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in set of build/VCS/cache directory names.
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.extend(DEFAULT_IGNORE_PATTERNS.iter().copied());
        set
    }

    pub fn insert(&mut self, pattern: impl Into<String>) -> bool {
        self.patterns.insert(pattern.into())
    }

    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// Read newline-separated patterns from a file.
    ///
    /// Lines are trimmed; blank lines and lines starting with `#` are skipped.
    pub fn from_pattern_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TreeError::PatternFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mut set = Self::new();
        set.extend(parse_patterns(&content));
        Ok(set)
    }

    /// Compile every pattern into one alternation anchored at the start.
    ///
    /// Returns `Ok(None)` for an empty set. Each pattern is validated on its
    /// own first so the error names the pattern at fault.
    pub fn compile(&self) -> Result<Option<PatternMatcher>> {
        if self.patterns.is_empty() {
            return Ok(None);
        }

        for pattern in &self.patterns {
            Regex::new(pattern).map_err(|source| TreeError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }

        let alternation = self
            .patterns
            .iter()
            .map(|p| format!("(?:{})", p))
            .collect::<Vec<_>>()
            .join("|");
        let combined = format!("^(?:{})", alternation);
        let regex = Regex::new(&combined).map_err(|source| TreeError::InvalidPattern {
            pattern: combined.clone(),
            source,
        })?;

        Ok(Some(PatternMatcher { regex }))
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionPatternSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Extract patterns from pattern-file content.
pub fn parse_patterns(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// A compiled exclusion matcher tested against bare entry names.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    /// Whether `name` matches any pattern in the set.
    ///
    /// Matching starts at the first character of the name but may stop
    /// anywhere: `log` excludes `logs`, not `debug.log`.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}
