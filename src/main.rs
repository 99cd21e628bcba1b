//! CLI entry point for treeprint

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgGroup, Parser};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use treeprint::output::{render_document, render_json, resolve_output_path, write_document};
use treeprint::{
    ExclusionPatternSet, OutputOptions, RenderConfig, Result, TreeBuilder, TreeError, resolve_root,
};

#[derive(Parser, Debug)]
#[command(name = "treeprint")]
#[command(about = "Generate a directory tree structure")]
#[command(version)]
#[command(group(
    ArgGroup::new("ignore_mode")
        .args(["ignore_pattern", "ignore_patterns", "no_ignore", "show_all"])
))]
struct Args {
    /// Directory path to map
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Maximum depth to traverse
    #[arg(short = 'd', long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Show file sizes
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Show modification times
    #[arg(short = 't', long = "time")]
    time: bool,

    /// Colorize output (only when stdout is a terminal)
    #[arg(short = 'c', long = "color")]
    color: bool,

    /// Output file path (default: tree.txt in the target directory)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Show summary statistics
    #[arg(long = "stats")]
    stats: bool,

    /// Disable color even if supported
    #[arg(long = "no-color")]
    no_color: bool,

    /// Additional regex pattern to ignore
    #[arg(short = 'i', long = "ignore-pattern", value_name = "REGEX")]
    ignore_pattern: Option<String>,

    /// File containing patterns to ignore, one per line
    #[arg(short = 'I', long = "ignore-patterns", value_name = "FILE")]
    ignore_patterns: Option<PathBuf>,

    /// Disable default ignore patterns
    #[arg(long = "no-ignore")]
    no_ignore: bool,

    /// Show all files (same as --no-ignore)
    #[arg(long = "show-all")]
    show_all: bool,

    /// Emit a JSON document instead of plain text
    #[arg(long = "json")]
    json: bool,
}

/// Determine whether to use color output based on flags and environment.
fn should_use_color(args: &Args) -> bool {
    if !args.color || args.no_color {
        return false;
    }
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stdout().is_terminal()
}

/// Build the exclusion set from the defaults and the ignore flags.
///
/// An unreadable pattern file is reported and the defaults are kept.
fn collect_patterns(args: &Args) -> ExclusionPatternSet {
    if args.no_ignore || args.show_all {
        return ExclusionPatternSet::new();
    }

    let mut patterns = ExclusionPatternSet::with_defaults();
    if let Some(ref pattern) = args.ignore_pattern {
        // An empty pattern matches every name
        if !pattern.is_empty() {
            patterns.insert(pattern.clone());
        }
    } else if let Some(ref file) = args.ignore_patterns {
        match ExclusionPatternSet::from_pattern_file(file) {
            Ok(extra) => patterns.extend(extra.iter()),
            Err(e) => warn!("{}", e),
        }
    }
    patterns
}

fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

fn print_lines(lines: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line)?;
    }
    stdout.flush()
}

fn run(args: &Args) -> Result<()> {
    let root = resolve_root(&args.path)?;
    let patterns = collect_patterns(args);
    debug!(patterns = patterns.len(), "exclusion patterns collected");

    let config = RenderConfig {
        show_size: args.size,
        show_time: args.time,
        use_color: should_use_color(args),
        max_depth: args.max_depth,
        matcher: patterns.compile()?,
    };
    let options = OutputOptions {
        show_stats: args.stats,
        show_size: args.size,
        json: args.json,
    };

    let tree = TreeBuilder::new(&config).build(&root)?;
    let name = root_name(&root);
    let output_path = resolve_output_path(&root, args.output.as_deref());

    if options.json {
        let json = render_json(&name, &tree, &options)?;
        let lines: Vec<String> = json.lines().map(String::from).collect();
        write_document(&output_path, &lines)?;
        print_lines(&lines).map_err(TreeError::Stdout)?;
        // stdout carries only the JSON document
        eprintln!("Tree structure has been written to {}", output_path.display());
    } else {
        let lines = render_document(&name, &tree, &options);
        write_document(&output_path, &lines)?;
        print_lines(&lines).map_err(TreeError::Stdout)?;
        println!();
        println!("Tree structure has been written to {}", output_path.display());
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("treeprint: {}", e);
        process::exit(1);
    }
}
