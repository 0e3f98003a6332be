//! scantree - scan a project directory and save its filtered path tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{AccessError, WriteError};
pub use output::{
    OutputConfig, OutputFormat, TreeFormatter, print_preview, render, render_tree_preview,
    write_output,
};
pub use tree::{
    Entry, EntryKind, HiddenPolicy, LogWarnings, ScanConfig, ScanResult, TreeWalker, WarningSink,
    scan,
};
