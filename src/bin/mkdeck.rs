//! Command line tool to build PartiSn input decks
//!
//! Reads a structured mesh description and writes a PartiSn deck referencing
//! the given bxslib cross section library.
//!
//! # Usage
//!
//! ```text
//! Usage: mkdeck <mesh> <bxslib> [options]
//! ```
//!
//! Help is printed with the `-h` flag, and `--help` will show examples, default
//! values, examples, and any important behaviour.
//!
//! ## Mesh files
//!
//! Plain text, one record per line, with `#` for comments:
//!
//! ```text
//! # coarse divisions
//! x 0.0 10.0 20.0
//! y 0.0 10.0
//! z 0.0 10.0
//! # fine intervals per coarse bin
//! xints 5 5
//! yints 5
//! zints 5
//! # cell materials in x-fastest order, 'cell' alone is void
//! cell steel:1.0
//! cell
//! ```
//!
//! Files ending in `.json` are read as JSON with the same fields.
//!
//! ## Options
//!
//! ### Fine intervals
//!
//! If the mesh file has no `xints`/`yints`/`zints` records every coarse bin
//! gets the same number of fine intervals.
//!
//! ```bash
//! # 10 fine intervals in every coarse bin
//! mkdeck mesh.txt bxslib --intervals 10
//! ```
//!
//! ### Options file
//!
//! Formatting and library layout settings can come from a JSON file instead
//! of `--width`, `--header`, and `--groups`. Missing fields keep their default.
//!
//! ```bash
//! # {"wrap_width": 72, "layout": {"neutron_groups": 30}}
//! mkdeck mesh.txt bxslib --options options.json
//! ```
//!
//! ### Placeholder blocks
//!
//! Several blocks are not generated yet and only contain placeholders. These
//! are warned about by default, and `--strict` refuses to write the deck.
//!
//! ```bash
//! mkdeck mesh.txt bxslib --strict
//! ```

// standard library
use std::path::Path;

// crate modules
use partisn::capability;
use partisn::deck::{self, DeckOptions};
use partisn::mesh::IntervalCounts;
use partisn::readers::read_mesh_file;
use partisn::utils::f;
use partisn::xslib::{LibraryLayout, HEADER_BYTES, NEUTRON_GROUPS};

// external crates
use anyhow::{bail, Context, Result};
use clap::{arg, Parser};
use log::*;

#[doc(hidden)]
fn main() -> Result<()> {
    // set up the command line interface and match arguments
    let cli: Cli = Cli::parse();

    // set up logging (+2 to make 'Info' the default)
    let verbosity = cli.verbose as usize + 2;
    logging_init(verbosity, cli.quiet);

    // let the user know about anything missing before doing any work
    let capabilities = capability::probe();
    for warning in capabilities.warnings() {
        warn!("{warning}");
    }

    info!("Reading {}", &cli.mesh);
    let input = read_mesh_file(&cli.mesh).with_context(|| f!("Could not read {}", cli.mesh))?;
    debug!("{}", input.mesh);

    // interval counts from the file win over the command line default
    let bounds = match input.bounds {
        Some(bounds) => bounds,
        None => {
            info!("Using {} fine intervals per coarse bin", cli.intervals);
            IntervalCounts::uniform(&input.mesh, cli.intervals)?
        }
    };

    let options = match &cli.options {
        Some(path) => {
            info!("Reading options from {path}");
            DeckOptions::from_json(path).with_context(|| f!("Could not read {path}"))?
        }
        None => DeckOptions {
            wrap_width: cli.width,
            layout: LibraryLayout {
                header_bytes: cli.header,
                neutron_groups: cli.groups,
                ..Default::default()
            },
            ..Default::default()
        },
    };

    info!("Building deck");
    let deck = deck::synthesize_with(&input.mesh, &bounds, Path::new(&cli.bxslib), &options)?;

    if cli.strict {
        if let Err(e) = deck.ensure_complete() {
            bail!("{e}, refusing to write deck (--strict)");
        }
    } else {
        deck.warn_placeholders();
    }

    info!("Writing to {}", cli.output);
    deck::persist(&deck, &cli.output)?;

    info!("Deck complete");
    Ok(())
}

/// Build PartiSn input decks from structured meshes
///
/// Reads a structured mesh description and writes a PartiSn deck that
/// references the given bxslib cross section library.
///
/// Examples
/// --------
///
///  Typical use
///     $ mkdeck mesh.txt bxslib
///
///  Uniform fine intervals if none are in the mesh file
///     $ mkdeck mesh.txt bxslib --intervals 10
///
///  Change the output file name
///     $ mkdeck mesh.json bxslib --output problem.inp
///
///  Formatting and library layout from a JSON file
///     $ mkdeck mesh.txt bxslib --options options.json
///
/// Notes
/// -----
///
/// Blocks 1, 4, and 5 are placeholders, and material mixing is not done yet
/// so every zone is void. Use --strict to refuse to write such decks.
///
/// The bxslib header length and group count are only known for one library
/// version and are not read from the file.
#[doc(hidden)]
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: mkdeck mesh.txt bxslib\n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    hide_possible_values(true),
    override_usage("mkdeck <mesh> <bxslib> [options]")
)]
struct Cli {
    // * Positional
    /// Path to mesh description (text or .json)
    #[arg(name = "mesh")]
    mesh: String,

    /// Path to bxslib cross section library
    #[arg(name = "bxslib")]
    bxslib: String,

    /// Name of output deck
    #[arg(help_heading("Deck options"))]
    #[arg(short, long, default_value = "partisn.inp")]
    #[arg(value_name = "path")]
    output: String,

    /// Fine intervals per coarse bin if not in the mesh file
    #[arg(help_heading("Deck options"))]
    #[arg(short, long, default_value_t = 1)]
    #[arg(value_name = "num")]
    intervals: u32,

    /// Maximum line length for directives
    #[arg(help_heading("Deck options"))]
    #[arg(long, default_value_t = deck::WRAP_WIDTH)]
    #[arg(value_name = "chars")]
    width: usize,

    /// JSON file of deck and library options
    #[arg(help_heading("Deck options"))]
    #[arg(long, conflicts_with_all = ["width", "header", "groups"])]
    #[arg(value_name = "path")]
    options: Option<String>,

    /// Refuse to write decks with placeholder blocks
    #[arg(help_heading("Deck options"))]
    #[arg(long)]
    strict: bool,

    /// Bytes to skip before the library name table
    #[arg(help_heading("Library options"))]
    #[arg(long, default_value_t = HEADER_BYTES)]
    #[arg(value_name = "bytes")]
    header: u64,

    /// Neutron groups written as 'lng'
    #[arg(help_heading("Library options"))]
    #[arg(long, default_value_t = NEUTRON_GROUPS)]
    #[arg(value_name = "num")]
    groups: u32,

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
    s += &f!("{:^70}\n", "PartiSn :: Deck Builder");
    s += &f!("{:-<1$}", "", 70);
    s
}
