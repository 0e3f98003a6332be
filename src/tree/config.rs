//! Configuration types for tree scanning

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::utils::{normalize_extension, resolve_root};

/// Directory names skipped unless the caller replaces the set.
pub fn default_exclude_dirs() -> BTreeSet<String> {
    [
        "node_modules",
        ".git",
        "__pycache__",
        ".venv",
        "venv",
        "dist",
        "build",
        ".idea",
        ".vscode",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// OS artifact file names skipped unless the caller replaces the set.
pub fn default_exclude_files() -> BTreeSet<String> {
    [".DS_Store", "Thumbs.db"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// How directories whose name starts with `.` are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HiddenPolicy {
    /// Skip every dot-directory, listed in `exclude_dirs` or not.
    #[default]
    Exclude,
    /// Dot-directories are only skipped when named in `exclude_dirs`.
    Include,
}

/// Configuration for a single scan.
///
/// Every `ScanConfig` owns its own exclusion sets; the defaults are rebuilt
/// by [`ScanConfig::new`] each time.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub exclude_dirs: BTreeSet<String>,
    pub exclude_files: BTreeSet<String>,
    /// Allow-list of normalized extensions (`.rs`). `None` allows everything.
    pub include_extensions: Option<BTreeSet<String>>,
    /// Normalized extensions to reject. Takes precedence over the allow-list.
    pub exclude_extensions: BTreeSet<String>,
    pub max_depth: Option<usize>,
    pub hidden: HiddenPolicy,
    /// Descend into symlinked directories. There is no cycle detection, so
    /// pair this with `max_depth` on untrusted trees.
    pub follow_links: bool,
}

impl ScanConfig {
    /// Create a config rooted at `root` with the default exclusions.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: resolve_root(root.as_ref()),
            exclude_dirs: default_exclude_dirs(),
            exclude_files: default_exclude_files(),
            include_extensions: None,
            exclude_extensions: BTreeSet::new(),
            max_depth: None,
            hidden: HiddenPolicy::default(),
            follow_links: false,
        }
    }

    /// Replace the excluded directory names.
    pub fn with_exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add directory names on top of the current set.
    pub fn add_exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Replace the excluded file names.
    pub fn with_exclude_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_files = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add file names on top of the current set.
    pub fn add_exclude_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_files.extend(names.into_iter().map(Into::into));
        self
    }

    /// Only keep files with one of these extensions. Tokens are normalized;
    /// an empty list clears the allow-list.
    pub fn with_include_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = exts
            .into_iter()
            .filter_map(|e| normalize_extension(e.as_ref()))
            .collect();
        self.include_extensions = if set.is_empty() { None } else { Some(set) };
        self
    }

    /// Reject files with any of these extensions. Tokens are normalized.
    pub fn with_exclude_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_extensions = exts
            .into_iter()
            .filter_map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_hidden(mut self, hidden: HiddenPolicy) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Whether a directory at `depth` (root = 0) may be listed.
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_fresh_per_config() {
        let first = ScanConfig::new(".").add_exclude_dirs(["target"]);
        let second = ScanConfig::new(".");
        assert!(first.exclude_dirs.contains("target"));
        assert!(!second.exclude_dirs.contains("target"));
        assert!(second.exclude_dirs.contains("node_modules"));
        assert!(second.exclude_files.contains(".DS_Store"));
    }

    #[test]
    fn test_replace_exclude_dirs() {
        let config = ScanConfig::new(".").with_exclude_dirs(["only"]);
        assert_eq!(config.exclude_dirs.len(), 1);
        assert!(config.exclude_dirs.contains("only"));
    }

    #[test]
    fn test_extensions_are_normalized() {
        let config = ScanConfig::new(".")
            .with_include_extensions(["py", ".RS", " js ", ""])
            .with_exclude_extensions(["LOG"]);
        let include = config.include_extensions.expect("allow-list set");
        assert_eq!(
            include.into_iter().collect::<Vec<_>>(),
            vec![".js", ".py", ".rs"]
        );
        assert!(config.exclude_extensions.contains(".log"));
    }

    #[test]
    fn test_empty_allow_list_is_none() {
        let config = ScanConfig::new(".").with_include_extensions([" ", ""]);
        assert!(config.include_extensions.is_none());
    }

    #[test]
    fn test_root_is_absolute() {
        let config = ScanConfig::new(".");
        assert!(config.root.is_absolute());
    }

    #[test]
    fn test_allows_depth() {
        let unbounded = ScanConfig::new(".");
        assert!(unbounded.allows_depth(1000));

        let bounded = ScanConfig::new(".").with_max_depth(Some(1));
        assert!(bounded.allows_depth(0));
        assert!(bounded.allows_depth(1));
        assert!(!bounded.allows_depth(2));
    }
}
