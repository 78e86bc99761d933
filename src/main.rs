//! typegen CLI
//!
//! Usage:
//!   typegen [OPTIONS] [TEMPLATES]...
//!
//! Options:
//!   -f, --types <FILE>  Type descriptor (TOML), may be repeated
//!   -d, --dir <DIR>     Destination directory (default: current directory)
//!   -n, --dry-run       Print the files that would be generated
//!   -v, --verbose       Increase log verbosity
//!   --format-help       Show the descriptor and template format reference
//!   -h, --help          Print help

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use typegen::{generate, preview, GenerateConfig};

#[derive(Parser)]
#[command(name = "typegen")]
#[command(about = "Expand @key@ templates once per type descriptor entry")]
struct Cli {
    /// Template files to expand
    templates: Vec<PathBuf>,

    /// Type descriptor file (TOML with a `types_list`), may be repeated
    #[arg(short = 'f', long = "types", value_name = "FILE")]
    descriptors: Vec<PathBuf>,

    /// Destination directory (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Print the files that would be generated without writing them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Show the descriptor and template format reference
    #[arg(long)]
    format_help: bool,
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.format_help {
        print_format_help();
        return;
    }

    setup_logging(cli.verbose);

    let destination = match cli.dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error resolving current directory: {}", e);
                std::process::exit(1);
            }
        },
    };

    let config = GenerateConfig::new(destination)
        .with_descriptors(cli.descriptors)
        .with_templates(cli.templates);

    let result = if cli.dry_run {
        preview(&config).map(|jobs| {
            for job in &jobs {
                println!("{}", job.destination.display());
            }
        })
    } else {
        generate(&config).map(|_| ())
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e.format());
        std::process::exit(1);
    }
}

fn print_format_help() {
    println!(
        r#"TYPEGEN FORMAT REFERENCE
========================

DESCRIPTORS
-----------
A descriptor is a TOML file with a top-level `types_list` array.
Each element is a table of placeholder keys to replacement strings:

    [[types_list]]
    t = "d"
    type = "gdouble"

    [[types_list]]
    t = "z"
    type = "gcomplex128"

or, inline:

    types_list = [
      {{ TYPE = "int", SUFFIX = "i" }},
      {{ TYPE = "float", SUFFIX = "f" }},
    ]

Keys must be non-empty and may not contain '@' or line breaks.
Values must be strings. Other top-level keys are ignored.

TEMPLATES
---------
A key k is written as @k@ in template text and in template file names:

    arancoefficientbuffer@t@.h
        typedef @type@ (*AranCoefficientBuffer@t@Generator) (guint n);

Matching is literal. Keys are applied in the order they are declared,
each one rewriting the output of the previous one, so a value may
contain the token of a key declared after it.

OUTPUT
------
One file per (entry, template) pair, named by substituting the
template's file name, written to --dir. Existing files are overwritten."#
    );
}
