//! JSON output formatting

use serde::Serialize;

use crate::tree::{Entry, ScanResult};

/// Summary written for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub total_files: usize,
    pub total_dirs: usize,
    pub files: Vec<String>,
    pub directories: Vec<String>,
}

impl JsonReport {
    /// File and directory paths are sorted independently as plain strings.
    pub fn from_result(result: &ScanResult) -> Self {
        let mut files: Vec<String> = result.files().iter().map(Entry::path_string).collect();
        let mut directories: Vec<String> = result
            .directories()
            .iter()
            .map(Entry::path_string)
            .collect();
        files.sort();
        directories.sort();

        Self {
            total_files: files.len(),
            total_dirs: directories.len(),
            files,
            directories,
        }
    }
}

/// Pretty-printed report with two-space indentation. Non-ASCII names are
/// written as-is.
pub fn render_json(result: &ScanResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from_result(result))
}
