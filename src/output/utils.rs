//! Shared helpers for building the indented tree body

use std::collections::BTreeMap;

use crate::tree::{Entry, ScanResult, get_name};

/// One indent unit per path segment.
pub const INDENT: &str = "    ";

/// One rendered row of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub depth: usize,
    pub name: String,
    pub is_dir: bool,
}

impl TreeLine {
    /// The row as written to reports, without the newline.
    pub fn render(&self) -> String {
        let indent = INDENT.repeat(self.depth);
        if self.is_dir {
            format!("{}{}/", indent, self.name)
        } else {
            format!("{}{}", indent, self.name)
        }
    }
}

/// Name of the scanned root as shown on the first tree line.
pub fn root_name(result: &ScanResult) -> String {
    get_name(result.root())
}

/// Files and directories merged and ordered by their `/`-joined path.
///
/// Names that are not valid UTF-8 can collapse to the same lossy string,
/// so the raw path bytes break ties and keep both entries.
pub fn sorted_entries(result: &ScanResult) -> Vec<&Entry> {
    let mut by_path: BTreeMap<(String, Vec<u8>), &Entry> = BTreeMap::new();
    for entry in result.directories().iter().chain(result.files()) {
        let raw = entry.path().as_os_str().as_encoded_bytes().to_vec();
        by_path.insert((entry.path_string(), raw), entry);
    }
    by_path.into_values().collect()
}

/// Tree rows in rendering order.
pub fn tree_lines(result: &ScanResult) -> Vec<TreeLine> {
    sorted_entries(result)
        .into_iter()
        .map(|entry| TreeLine {
            depth: entry.depth(),
            name: entry.name(),
            is_dir: entry.is_dir(),
        })
        .collect()
}

/// Append `<root>/` followed by every tree row, each newline-terminated.
pub fn push_tree_body(output: &mut String, result: &ScanResult) {
    output.push_str(&root_name(result));
    output.push_str("/\n");
    for line in tree_lines(result) {
        output.push_str(&line.render());
        output.push('\n');
    }
}
