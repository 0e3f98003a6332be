//! Entries produced by a scan

use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    File,
    Dir,
}

/// A discovered file or directory, relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    path: PathBuf,
    kind: EntryKind,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::File)
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::Dir)
    }

    /// Path relative to the scan root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Number of path segments below the root.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Last path segment.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Segments joined with `/` regardless of platform.
    pub fn path_string(&self) -> String {
        self.segments()
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn segments(&self) -> impl Iterator<Item = &std::ffi::OsStr> {
        self.path.components().filter_map(|c| match c {
            Component::Normal(s) => Some(s),
            _ => None,
        })
    }
}

/// Files and directories found by one scan, in encounter order.
#[derive(Debug, Clone)]
pub struct ScanResult {
    root: PathBuf,
    files: Vec<Entry>,
    directories: Vec<Entry>,
}

impl ScanResult {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
            directories: Vec::new(),
        }
    }

    /// Build a result from already collected entries.
    pub fn from_entries(root: impl Into<PathBuf>, files: Vec<Entry>, directories: Vec<Entry>) -> Self {
        Self {
            root: root.into(),
            files,
            directories,
        }
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        match entry.kind {
            EntryKind::File => self.files.push(entry),
            EntryKind::Dir => self.directories.push(entry),
        }
    }

    /// Absolute root the entries are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[Entry] {
        &self.files
    }

    pub fn directories(&self) -> &[Entry] {
        &self.directories
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn dir_count(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_depth_and_name() {
        let entry = Entry::file("src/tree/walker.rs");
        assert_eq!(entry.depth(), 3);
        assert_eq!(entry.name(), "walker.rs");
        assert_eq!(entry.path_string(), "src/tree/walker.rs");
        assert!(!entry.is_dir());
    }

    #[test]
    fn test_push_sorts_by_kind() {
        let mut result = ScanResult::new("/tmp/project");
        result.push(Entry::dir("sub"));
        result.push(Entry::file("sub/a.rs"));
        result.push(Entry::file("b.rs"));
        assert_eq!(result.file_count(), 2);
        assert_eq!(result.dir_count(), 1);
        assert_eq!(result.files()[0].path(), Path::new("sub/a.rs"));
        assert!(!result.is_empty());
    }
}
