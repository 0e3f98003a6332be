//! Output configuration types

use clap::ValueEnum;

/// Format of the saved report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with a header block
    #[value(name = "txt", alias = "text")]
    Text,
    /// Counts plus sorted file and directory lists
    Json,
    /// Title, summary line and a fenced tree
    #[default]
    #[value(alias = "md")]
    Markdown,
}

/// Configuration for console output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_color: true }
    }
}
