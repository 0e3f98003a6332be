//! CLI entry point for scantree

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use scantree::output::STDOUT_DESTINATION;
use scantree::tree::split_list;
use scantree::{HiddenPolicy, OutputFormat, ScanConfig, TreeWalker, print_preview, write_output};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "scantree")]
#[command(about = "Scan a project directory and save its filtered path tree")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file ("-" for stdout)
    #[arg(short, long, default_value = "project_path_tree.md")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Only include these extensions, comma separated (e.g. .py,.js,html)
    #[arg(short = 'e', long = "extensions", value_name = "LIST")]
    extensions: Option<String>,

    /// Exclude these extensions, comma separated
    #[arg(short = 'x', long = "exclude-extensions", value_name = "LIST")]
    exclude_extensions: Option<String>,

    /// Maximum scan depth (0 lists only the top level)
    #[arg(short = 'd', long = "max-depth")]
    max_depth: Option<usize>,

    /// Extra directory names to exclude, comma separated
    #[arg(long = "exclude-dirs", value_name = "LIST")]
    exclude_dirs: Option<String>,

    /// Extra file names to exclude, comma separated
    #[arg(long = "exclude-files", value_name = "LIST")]
    exclude_files: Option<String>,

    /// Do not skip directories whose name starts with '.'
    #[arg(long)]
    hidden: bool,

    /// Descend into symlinked directories
    #[arg(long = "follow-links")]
    follow_links: bool,

    /// Do not print the tree preview
    #[arg(long = "no-tree")]
    no_tree: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig::new(&self.path)
            .with_max_depth(self.max_depth)
            .with_follow_links(self.follow_links);

        if let Some(ref list) = self.extensions {
            config = config.with_include_extensions(split_list(list));
        }
        if let Some(ref list) = self.exclude_extensions {
            config = config.with_exclude_extensions(split_list(list));
        }
        if let Some(ref list) = self.exclude_dirs {
            config = config.add_exclude_dirs(split_list(list));
        }
        if let Some(ref list) = self.exclude_files {
            config = config.add_exclude_files(split_list(list));
        }
        if self.hidden {
            config = config.with_hidden(HiddenPolicy::Include);
        }
        config
    }

    fn to_stdout(&self) -> bool {
        self.output.as_os_str() == STDOUT_DESTINATION
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "scantree: {}: {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        })
        .init();
}

fn main() {
    init_logging();
    let args = Args::parse();

    let config = args.scan_config();
    log::info!("scanning {}", config.root.display());
    let result = TreeWalker::new(config).scan();

    // The preview would interleave with the report on stdout
    if !args.no_tree && !args.to_stdout() {
        if let Err(e) = print_preview(&result, should_use_color(args.color)) {
            log::warn!("cannot print preview: {}", e);
        }
    }

    if let Err(e) = write_output(&result, args.format, &args.output) {
        eprintln!("scantree: {}", e);
        process::exit(1);
    }

    let summary = format!(
        "扫描完成！找到 {} 个文件和 {} 个目录",
        result.file_count(),
        result.dir_count()
    );
    if args.to_stdout() {
        eprintln!("scantree: {}", summary);
    } else {
        // A closed stdout must not undo a report that is already saved
        let _ = print_summary(&args.output, &summary);
    }
}

fn print_summary(output: &Path, summary: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout)?;
    writeln!(stdout, "结果已保存到: {}", output.display())?;
    writeln!(stdout, "{}", summary)
}
