//! Name and extension filters applied during scanning

use std::path::Path;

use super::config::{HiddenPolicy, ScanConfig};
use super::utils::file_suffix;

/// Exclusion predicates derived from a [`ScanConfig`].
pub struct FileFilter<'a> {
    config: &'a ScanConfig,
}

impl<'a> FileFilter<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// A directory is skipped when its name is excluded, or when it is a
    /// dot-directory under [`HiddenPolicy::Exclude`].
    pub fn should_exclude_dir(&self, name: &str) -> bool {
        if self.config.exclude_dirs.contains(name) {
            return true;
        }
        self.config.hidden == HiddenPolicy::Exclude && name.starts_with('.')
    }

    /// Check file name, then excluded extensions, then the allow-list.
    pub fn should_include_file(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        if self.config.exclude_files.contains(&*name) {
            return false;
        }

        let ext = file_suffix(path);
        if !self.config.exclude_extensions.is_empty()
            && self.config.exclude_extensions.contains(&ext)
        {
            return false;
        }

        if let Some(ref allowed) = self.config.include_extensions {
            if !allowed.contains(&ext) {
                return false;
            }
        }

        true
    }
}
