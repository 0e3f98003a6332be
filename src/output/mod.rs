//! Report rendering and writing
//!
//! This module turns a `ScanResult` into its saved or displayed form:
//! - Plain text with a header block
//! - JSON summary
//! - Markdown with a fenced tree
//! - Console preview, optionally coloured
//!
//! # Module Structure
//!
//! - `config` - Output format and console configuration
//! - `utils` - Sorting and indentation shared by all tree formats
//! - `tree` - Console preview formatter
//! - `markdown`, `text`, `json` - Report formats

mod config;
mod json;
mod markdown;
mod text;
mod tree;
mod utils;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::WriteError;
use crate::tree::ScanResult;

// Re-export public types and functions
pub use config::{OutputConfig, OutputFormat};
pub use json::{JsonReport, render_json};
pub use markdown::render_markdown;
pub use text::render_text;
pub use tree::TreeFormatter;
pub use utils::{INDENT, TreeLine, root_name, sorted_entries, tree_lines};

/// Destination name that means "write to stdout".
pub const STDOUT_DESTINATION: &str = "-";

/// Render `result` in `format`. Output is deterministic for a given result.
pub fn render(result: &ScanResult, format: OutputFormat) -> io::Result<String> {
    match format {
        OutputFormat::Json => render_json(result).map_err(io::Error::other),
        OutputFormat::Markdown => Ok(render_markdown(result)),
        OutputFormat::Text => Ok(render_text(result)),
    }
}

/// Uncoloured console preview.
pub fn render_tree_preview(result: &ScanResult) -> String {
    TreeFormatter::new(OutputConfig { use_color: false }).format(result)
}

/// Print the console preview to stdout.
pub fn print_preview(result: &ScanResult, use_color: bool) -> io::Result<()> {
    TreeFormatter::new(OutputConfig { use_color }).print(result)
}

/// Render and save the report. `-` writes to stdout. Failures are not retried.
pub fn write_output(
    result: &ScanResult,
    format: OutputFormat,
    destination: &Path,
) -> Result<(), WriteError> {
    let rendered = render(result, format).map_err(|e| WriteError::new(destination, e))?;

    if destination.as_os_str() == STDOUT_DESTINATION {
        let mut stdout = io::stdout().lock();
        return stdout
            .write_all(rendered.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| WriteError::new(destination, e));
    }

    fs::write(destination, rendered).map_err(|e| WriteError::new(destination, e))
}
