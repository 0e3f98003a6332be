//! TreeWalker - filtered depth-first scan of a directory tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AccessError;

use super::config::ScanConfig;
use super::entry::{Entry, ScanResult};
use super::filter::FileFilter;
use super::utils::get_name;

/// Receives directories that could not be listed during a scan.
pub trait WarningSink {
    fn access_denied(&mut self, error: AccessError);
}

/// Default sink: reports each unreadable directory through `log::warn!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWarnings;

impl WarningSink for LogWarnings {
    fn access_denied(&mut self, error: AccessError) {
        log::warn!("{}", error);
    }
}

impl WarningSink for Vec<AccessError> {
    fn access_denied(&mut self, error: AccessError) {
        self.push(error);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildKind {
    Dir { symlink: bool },
    File,
}

/// Walks a tree according to a [`ScanConfig`].
///
/// Traversal uses an explicit work-list, so tree depth never grows the
/// native stack. Output order is encounter order; sorting is left to the
/// renderers.
pub struct TreeWalker {
    config: ScanConfig,
}

impl TreeWalker {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan, logging unreadable directories.
    pub fn scan(&self) -> ScanResult {
        self.scan_with(&mut LogWarnings)
    }

    /// Scan, delivering unreadable directories to `warnings`.
    pub fn scan_with<W: WarningSink + ?Sized>(&self, warnings: &mut W) -> ScanResult {
        let root = &self.config.root;
        let filter = FileFilter::new(&self.config);
        let mut result = ScanResult::new(root.clone());
        let mut pending = vec![(root.clone(), 0usize)];

        while let Some((dir, depth)) = pending.pop() {
            let children = match read_children(&dir) {
                Ok(children) => children,
                Err(source) => {
                    warnings.access_denied(AccessError::new(dir, source));
                    continue;
                }
            };

            let mut subdirs = Vec::new();
            for (path, kind) in children {
                let Ok(relative) = path.strip_prefix(root) else {
                    continue;
                };

                match kind {
                    ChildKind::Dir { symlink } => {
                        if filter.should_exclude_dir(&get_name(&path)) {
                            log::debug!("skipping directory {}", relative.display());
                            continue;
                        }
                        result.push(Entry::dir(relative));

                        // Recorded above even when too deep to list
                        let descend = self.config.allows_depth(depth + 1)
                            && (!symlink || self.config.follow_links);
                        if descend {
                            subdirs.push((path, depth + 1));
                        }
                    }
                    ChildKind::File => {
                        if filter.should_include_file(&path) {
                            result.push(Entry::file(relative));
                        } else {
                            log::debug!("skipping file {}", relative.display());
                        }
                    }
                }
            }

            // Reversed so the first child is visited first
            pending.extend(subdirs.into_iter().rev());
        }

        result
    }
}

/// Scan `config.root` with the default logging sink.
pub fn scan(config: &ScanConfig) -> ScanResult {
    TreeWalker::new(config.clone()).scan()
}

/// List the immediate children of `dir`. The directory handle is released
/// before returning, on success and on error.
fn read_children(dir: &Path) -> io::Result<Vec<(PathBuf, ChildKind)>> {
    let mut children = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if let Some(kind) = classify(&entry, &path) {
            children.push((path, kind));
        }
    }

    Ok(children)
}

/// Decide whether an entry is a file or directory. Symlinks take the kind
/// of their target; broken links and special files yield `None`.
fn classify(entry: &fs::DirEntry, path: &Path) -> Option<ChildKind> {
    let file_type = match entry.file_type() {
        Ok(t) => t,
        Err(e) => {
            log::debug!("cannot stat {}: {}", path.display(), e);
            return None;
        }
    };

    if file_type.is_symlink() {
        let target = fs::metadata(path).ok()?;
        return if target.is_dir() {
            Some(ChildKind::Dir { symlink: true })
        } else if target.is_file() {
            Some(ChildKind::File)
        } else {
            None
        };
    }

    if file_type.is_dir() {
        Some(ChildKind::Dir { symlink: false })
    } else if file_type.is_file() {
        Some(ChildKind::File)
    } else {
        None
    }
}
