//! Command-line interface for mdtoc.
//!
//! This binary walks a directory and writes its Markdown table of contents,
//! with the contents of text files inlined, to a `.md` file.

use clap::{ArgAction, Parser};
use mdtoc::{OverwritePolicy, TocBuilder, TocError, TocOptions, generate};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::exit;

const EXAMPLES: &str = "\
Most known extensions for files with raw text content are included automatically in the
generated Markdown TOC.

Example usages:

  1. Generate a TOC for a directory, force including .xyz files:
     mdtoc -i /path/to/directory -o output_filename -ext xyz

  2. Generate a TOC, excluding all .log files and everything in the 'temp' directory:
     mdtoc -i /path/to/directory -o output_filename -x \"*.log\" \"temp/*\"

  3. Generate a TOC, treating .py files as text and excluding .git folders:
     mdtoc -i /path/to/directory -o output_filename -ext py -x \".git\"";

/// mdtoc — generate a Markdown TOC for a directory
#[derive(Parser)]
#[command(
    name = "mdtoc",
    version,
    about = "Generate a Markdown TOC for a directory.",
    after_help = EXAMPLES,
    arg_required_else_help = true
)]
struct Cli {
    /// Path to the input directory to process
    #[arg(short, long)]
    input: PathBuf,

    /// Output file name (.md is appended if missing)
    #[arg(short, long)]
    output: PathBuf,

    /// Treat files with this extension as text files (also accepted as -ext)
    #[arg(long = "extension", visible_alias = "ext")]
    extension: Option<String>,

    /// Files/folders to exclude, as glob patterns relative to the input directory
    #[arg(short = 'x', long = "exclude", num_args = 0..)]
    exclude: Vec<String>,

    /// Overwrite an existing output file without asking (otherwise only `y` confirms)
    #[arg(short, long)]
    force: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Do not descend into symlinked directories (they are still listed)
    #[arg(long)]
    no_follow_links: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_options(self) -> (TocOptions, PathBuf, OverwritePolicy) {
        let mut builder = TocBuilder::new(self.input)
            .extra_extension(self.extension)
            .exclude_patterns(self.exclude)
            .follow_links(!self.no_follow_links);

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        let policy = if self.force {
            OverwritePolicy::Always
        } else {
            OverwritePolicy::Ask
        };

        (builder.build(), self.output, policy)
    }
}

/// Rewrites the single-dash `-ext` flag into `--extension` so clap can parse it.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-ext") => OsString::from("--extension"),
            Some(s) if s.starts_with("-ext=") => {
                OsString::from(format!("--extension={}", &s["-ext=".len()..]))
            }
            _ => arg,
        })
        .collect()
}

#[cfg(feature = "logging")]
fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn,globset=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    #[cfg(feature = "logging")]
    setup_logging(cli.verbose);

    let (options, output, policy) = cli.into_options();

    match generate(&options, output, policy) {
        Ok(_) => {}
        Err(TocError::OverwriteDeclined(_)) => {
            println!("Operation cancelled.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
