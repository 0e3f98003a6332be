//! Markdown output formatting
//!
//! The tree is placed in a fenced code block so indentation survives
//! rendering, under a title and a one-line summary.

use crate::tree::ScanResult;

use super::utils::{push_tree_body, root_name};

pub fn render_markdown(result: &ScanResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", root_name(result)));
    output.push_str(&format!(
        "**统计:** {} 个文件, {} 个目录\n\n",
        result.file_count(),
        result.dir_count()
    ));
    output.push_str("```\n");
    push_tree_body(&mut output, result);
    output.push_str("```\n");
    output
}
