//! Directory scanning
//!
//! `TreeWalker` enumerates a root directory depth-first, applying the
//! directory, file name, extension and depth filters of a `ScanConfig`.
//! The result is two flat collections of root-relative entries; turning
//! them into a tree is the job of the `output` module.

mod config;
mod entry;
mod filter;
mod utils;
mod walker;

// Re-export public types
pub use config::{HiddenPolicy, ScanConfig, default_exclude_dirs, default_exclude_files};
pub use entry::{Entry, EntryKind, ScanResult};
pub use filter::FileFilter;
pub use utils::{file_suffix, get_name, normalize_extension, split_list};
pub use walker::{LogWarnings, TreeWalker, WarningSink, scan};
