//! CLI entry point for crumbs

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use crumbs::{
    JsonFormatter, OutputConfig, PlainFormatter, ScanConfig, ScanSummary, SmallFileWalker,
    parse_size,
};

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
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "crumbs")]
#[command(about = "Print the contents of every small file in a directory tree")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Print files strictly smaller than SIZE. Suffixes: K, M, G (e.g., 2K)
    #[arg(short = 's', long = "max-size", value_name = "SIZE", default_value = "150")]
    max_size: String,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Skip entries whose name matches pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Skip hidden files and honor .gitignore/.ignore files
    #[arg(short = 'g', long = "respect-ignore")]
    respect_ignore: bool,

    /// Report unreadable or non-text files and keep scanning
    #[arg(short = 'k', long = "keep-going")]
    keep_going: bool,

    /// Output in JSON format
    #[arg(long = "json", conflicts_with = "summary")]
    json: bool,

    /// Print a count line after the output
    #[arg(long = "summary")]
    summary: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let max_size = parse_size(&args.max_size).unwrap_or_else(|e| {
        eprintln!("crumbs: invalid --max-size '{}': {}", args.max_size, e);
        process::exit(1);
    });

    let scan_config = ScanConfig {
        max_size,
        max_depth: args.level,
        ignore_patterns: args.ignore.clone(),
        respect_ignore_files: args.respect_ignore,
        keep_going: args.keep_going,
    };

    let walker = SmallFileWalker::new(scan_config).unwrap_or_else(|e| {
        eprintln!("crumbs: {}", e);
        process::exit(1);
    });

    // JSON output buffers every match until the walk finishes
    let result = if args.json {
        let mut formatter = JsonFormatter::new();
        walker.walk_streaming(&args.path, &mut formatter)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            summary: args.summary,
        };
        let mut formatter = PlainFormatter::new(output_config);
        walker.walk_streaming(&args.path, &mut formatter)
    };

    match result {
        Ok(ScanSummary { failed, .. }) if failed > 0 => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("crumbs: {}", e);
            process::exit(1);
        }
    }
}
