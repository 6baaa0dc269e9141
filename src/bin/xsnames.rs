//! Command line tool to inspect bxslib name tables
//!
//! Very simple reader for the nuclide and edit names stored near the start of
//! a PartiSn binary cross section library, skipping the need for a hex editor
//! just to check what a library contains.
//!
//! # Usage
//!
//! ```text
//! Usage: xsnames <file> [options]
//! ```
//!
//! Help is printed with the `-h` flag, and `--help` will show examples, default
//! values, examples, and any important behaviour.
//!
//! ## Options
//!
//! By default a simple summary of the names is logged.
//!
//! ```bash
//! # Print the name table
//! xsnames bxslib
//! ```
//!
//! ### Convert to JSON file
//!
//! ```bash
//! # Output a file named 'xsnames.json'
//! xsnames bxslib --json
//! ```
//!
//! ### Different library versions
//!
//! The name table offset is only known for one library version. Others can
//! be tried by changing the header length.
//!
//! ```bash
//! xsnames bxslib --header 200
//! ```

// standard libraries
use std::fs::File;
use std::io::BufWriter;

// crate modules
use partisn::readers::read_library;
use partisn::utils::f;
use partisn::xslib::{LibraryLayout, LibraryNames, HEADER_BYTES};

// external crates
use anyhow::{Context, Result};
use clap::{arg, Parser};
use log::*;

#[doc(hidden)]
fn main() -> Result<()> {
    // set up the command line interface and match arguments
    let cli: Cli = Cli::parse();

    // set up logging (+2 to make 'Info' the default)
    let verbosity = cli.verbose as usize + 2;
    logging_init(verbosity, cli.quiet);

    let layout = LibraryLayout {
        header_bytes: cli.header,
        ..Default::default()
    };

    // Try to read the name table
    info!("Reading {}", &cli.file);
    let names = read_library(&cli.file, layout)
        .with_context(|| f!("Could not read names from {}", cli.file))?;

    if !cli.quiet {
        print_summary(&names);
    }

    if cli.json {
        write_json(&names, &cli)?;
    }

    Ok(())
}

/// Inspect PartiSn bxslib name tables
///
/// Very simple reader for the nuclide and edit names stored in a PartiSn
/// binary cross section library.
///
/// Examples
/// --------
///
///  Print the name table
///     $ xsnames bxslib
///
///  Convert to JSON
///     $ xsnames bxslib --json
///     $ xsnames bxslib --json --output mylib
///
/// Notes
/// -----
///
/// The 180 byte header length is taken from one library version and is not
/// checked against the file. Names are printed without their padding, but
/// the JSON output keeps them exactly as stored.
#[doc(hidden)]
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: xsnames bxslib\n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    hide_possible_values(true),
    override_usage("xsnames <file> [options]")
)]
struct Cli {
    // * Positional
    /// Path to bxslib binary file
    #[arg(name = "file")]
    file: String,

    /// Generate a JSON file ('xsnames.json' default)
    #[arg(help_heading("Library options"))]
    #[arg(short, long)]
    json: bool,

    /// Bytes to skip before the name table
    #[arg(help_heading("Library options"))]
    #[arg(long, default_value_t = HEADER_BYTES)]
    #[arg(value_name = "bytes")]
    header: u64,

    /// Name of output file (excl. extension)
    ///
    /// Defaults to `xsnames.json`, and will automatically set the relevant
    /// extension.
    #[arg(help_heading("Library options"))]
    #[arg(short, long)]
    #[arg(value_name = "path")]
    output: Option<String>,

    // * Flags
    /// Verbose logging (-v, -vv)
    ///
    /// If specified, the default log level of INFO is increased to DEBUG (-v)
    /// or TRACE (-vv). Errors and Warnings are always logged unless in quiet
    /// (-q) mode.
    #[arg(short, long)]
    #[arg(action = clap::ArgAction::Count)]
    verbose: u8,

    /// Supress all log output (overrules --verbose)
    #[arg(short, long)]
    quiet: bool,
}

/// Sets up logging at runtime to allow for multiple verbosity levels
#[doc(hidden)]
fn logging_init(verbosity: usize, quiet: bool) {
    stderrlog::new()
        .modules(vec![module_path!(), "partisn"])
        .quiet(quiet)
        .verbosity(verbosity)
        .show_level(false)
        .color(stderrlog::ColorChoice::Never)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
        .unwrap();
}

/// Creates a banner fot the command line
#[doc(hidden)]
fn banner() -> String {
    let mut s = f!("{:-<1$}\n", "", 70);
    s += &f!("{:^70}\n", "PartiSn :: Library Name Inspector");
    s += &f!("{:-<1$}", "", 70);
    s
}

#[doc(hidden)]
/// Write name table to json
fn write_json(names: &LibraryNames, cli: &Cli) -> Result<()> {
    let output = match &cli.output {
        Some(o) => f!("{o}.json"),
        None => "xsnames.json".to_string(),
    };

    debug!("Writing JSON format to {}", output);
    let file = File::create(&output).with_context(|| f!("Could not create {output}"))?;
    Ok(serde_json::to_writer_pretty(BufWriter::new(file), names)?)
}

#[doc(hidden)]
/// Write summary to the terminal
fn print_summary(names: &LibraryNames) {
    println!("{names}")
}
