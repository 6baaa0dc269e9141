//! PartiSn input deck synthesis
//!
//! # Overview
//!
//! A deck is five blocks of free-form input, each closed with a `t` line,
//! between a short fixed preamble and trailer:
//!
//! | Block | Content                                   | Status      |
//! | ----- | ----------------------------------------- | ----------- |
//! | 1     | Problem sizing and initialisation         | placeholder |
//! | 2     | Coarse/fine mesh and zone assignments     | geometry    |
//! | 3     | Cross section library and group structure | `lib`/`lng` |
//! | 4     | Material and mixture definitions          | placeholder |
//! | 5     | Source and normalisation                  | placeholder |
//!
//! The zone ids written in block 2 are only given meaning by the mixtures in
//! block 4, which is why both come from one [ZoneMap].
//!
//! Placeholder blocks are still syntactically valid, but the deck keeps track
//! of them so the caller can decide whether that is acceptable.
//!
//! # Example
//!
//! ```rust, ignore
//! use partisn::deck;
//! use partisn::mesh::{IntervalCounts, RectilinearMesh};
//!
//! let mesh = RectilinearMesh::new(vec![0.0, 5.0, 10.0], vec![0.0, 10.0], vec![0.0, 10.0])?;
//! let bounds = IntervalCounts::uniform(&mesh, 5)?;
//!
//! // everything is built in memory first
//! let deck = deck::synthesize(&mesh, &bounds, "path/to/bxslib")?;
//! deck.warn_placeholders();
//!
//! // then written in one go, replacing any existing file
//! deck::persist(&deck, "partisn.inp")?;
//! ```

// Split into subfiles for development, but anything important is re-exported
mod assemble;
mod core;
mod geometry;
mod material;

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// external crates
use log::debug;
use serde::Deserialize;

// internal modules
use crate::error::{Error, Result};
use crate::utils::f;
use crate::xslib::LibraryLayout;

#[doc(inline)]
pub use crate::deck::assemble::{persist, synthesize, synthesize_with, write_deck};

#[doc(inline)]
pub use crate::deck::core::{Block, Deck};

#[doc(inline)]
pub use crate::deck::geometry::geometry_text;

#[doc(inline)]
pub use crate::deck::material::{material_text, ZoneMap, VOID_ZONE};

/// Default maximum line length for wrapped directives
pub const WRAP_WIDTH: usize = 50;

/// Default number of decimal places for mesh coordinates
pub const PRECISION: usize = 6;

/// Settings for deck synthesis
///
/// The defaults reproduce the standard deck format and should rarely need
/// changing, other than the library layout for a different bxslib version.
///
/// Options can also be loaded from JSON with [DeckOptions::from_json], where
/// any missing field keeps its default:
///
/// ```json
/// { "wrap_width": 72, "layout": { "neutron_groups": 30 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeckOptions {
    /// Maximum characters per directive line
    pub wrap_width: usize,
    /// Decimal places for coarse mesh coordinates
    pub precision: usize,
    /// Assumed layout of the cross section library
    pub layout: LibraryLayout,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            wrap_width: WRAP_WIDTH,
            precision: PRECISION,
            layout: LibraryLayout::default(),
        }
    }
}

impl DeckOptions {
    /// Read options from a JSON file
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading deck options from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        serde_json::from_reader(reader)
            .map_err(|e| Error::invalid(f!("bad options file {}: {e}", path.display())))
    }
}
