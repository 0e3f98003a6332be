//! Console tree preview
//!
//! This module provides `TreeFormatter`, which renders the interactive
//! preview shown before the report is saved, either as a string or
//! printed to stdout with coloured directory names.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::ScanResult;

use super::config::OutputConfig;
use super::utils::{INDENT, push_tree_body, root_name, tree_lines};

/// Formatter for the console preview.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn summary(result: &ScanResult) -> String {
        format!(
            "统计: {} 个文件, {} 个目录",
            result.file_count(),
            result.dir_count()
        )
    }

    pub fn format(&self, result: &ScanResult) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::summary(result));
        output.push_str("\n\n");
        push_tree_body(&mut output, result);
        output
    }

    pub fn print(&self, result: &ScanResult) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_colored(&mut stdout, result)
    }

    /// Same layout as [`TreeFormatter::format`], with directories in bold blue.
    pub fn write_colored<W: WriteColor>(&self, out: &mut W, result: &ScanResult) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", Self::summary(result))?;
        writeln!(out)?;

        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}/", root_name(result))?;
        out.reset()?;
        writeln!(out)?;

        for line in tree_lines(result) {
            write!(out, "{}", INDENT.repeat(line.depth))?;
            if line.is_dir {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}/", line.name)?;
                out.reset()?;
            } else {
                write!(out, "{}", line.name)?;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}
