//! Plain text output formatting

use crate::tree::ScanResult;

use super::utils::{push_tree_body, root_name};

const RULE_WIDTH: usize = 60;

pub fn render_text(result: &ScanResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();
    output.push_str(&root_name(result));
    output.push('\n');
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!("文件总数: {}\n", result.file_count()));
    output.push_str(&format!("目录总数: {}\n", result.dir_count()));
    output.push_str(&rule);
    output.push_str("\n\n");
    push_tree_body(&mut output, result);
    output
}
