//! # The PartiSn crate
//!
//! Tools for building input decks for the PartiSn discrete ordinates
//! transport code from structured meshes and bxslib cross section libraries.
//!
//! ## Installation
//!
//! Direct install from github:
//!
//! ```shell
//! cargo install --git https://github.com/repositony/partisn.git
//! ```
//!
//! ## Overview
//!
//! The crate contains a couple of command line tools for common tasks. More
//! may be added as the deck generation fills out.
//!
//! | Command line | Description                                          |
//! | ------------ | ---------------------------------------------------- |
//! | `mkdeck`     | Build a PartiSn deck from a mesh file and a bxslib   |
//! | `xsnames`    | Inspect the nuclide/edit name table of a bxslib file |
//!
//! All tools are fully documented with detailed `--help` messages.
//!
//! ### Deck status
//!
//! Only the geometry and library reference are generated properly so far.
//! The remaining blocks are written as valid placeholders, and every [Deck]
//! reports which blocks are placeholders so nothing incomplete gets run by
//! accident.
//!
//! | Block                                      | Generated                     |
//! | ------------------------------------------ | ----------------------------- |
//! | [Block::ProblemSetup](crate::deck::Block)  | placeholder                   |
//! | [Block::Geometry](crate::deck::Block)      | mesh yes, material mixing no  |
//! | [Block::CrossSections](crate::deck::Block) | `lib`, fixed `lng`            |
//! | [Block::Materials](crate::deck::Block)     | placeholder                   |
//! | [Block::Source](crate::deck::Block)        | placeholder                   |
//!
//! ## Advanced use
//!
//! The deck generation works with anything implementing the
//! [StructuredMesh](crate::mesh::StructuredMesh) trait, so meshes from other
//! tools can be used directly without going through a file.
//!
//! ```rust, ignore
//! use partisn::mesh::{IntervalCounts, RectilinearMesh};
//!
//! // check what the crate can do before relying on it
//! for warning in partisn::capability::probe().warnings() {
//!     eprintln!("{warning}");
//! }
//!
//! let mesh = RectilinearMesh::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0], vec![0.0, 1.0])?;
//! let bounds = IntervalCounts::new(vec![1, 1], vec![1], vec![1]);
//!
//! let deck = partisn::synthesize(&mesh, &bounds, "path/to/bxslib")?;
//! partisn::persist(&deck, "partisn.inp")?;
//! ```
//!
//! As an overview:
//! - The [mesh] module contains the mesh trait and simple structured mesh
//! types.
//! - The [deck] module builds and writes the decks.
//! - The [xslib] module describes what is known of the bxslib format.
//! - The [capability] module reports what the crate supports.
//!
//! In the background, `nom` handles the mesh description files, `clap` is
//! used for command line interfaces, and `serde` for JSON in and out.

// Public facing modules
pub mod capability;
pub mod deck;
pub mod error;
pub mod mesh;
pub mod utils;
pub mod xslib;

// note that docs are hidden to prevent confusing the current simple API
pub mod readers;

// Re-exports of useful data structures
#[doc(inline)]
pub use crate::deck::{persist, synthesize, write_deck, Deck};

#[doc(inline)]
pub use crate::error::{Error, Result};

#[doc(inline)]
pub use crate::readers::{read_library_names, read_mesh_file};
