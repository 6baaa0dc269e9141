//! Structured mesh inputs for deck synthesis
//!
//! # Overview
//!
//! Deck synthesis only needs two things from a mesh: the coarse division
//! coordinates on each axis, and the cells in a stable order. Anything that
//! can provide these implements the [StructuredMesh] trait, so an external
//! mesh/material library can be plugged in directly.
//!
//! The crate ships a simple [RectilinearMesh] for everything else, which is
//! also what the `mkdeck` tool reads from file.
//!
//! ```rust
//! use partisn::mesh::{Axis, IntervalCounts, RectilinearMesh, StructuredMesh};
//!
//! // 2x1x1 coarse bins
//! let mesh = RectilinearMesh::new(
//!     vec![0.0, 1.0, 2.0],
//!     vec![0.0, 1.0],
//!     vec![0.0, 1.0],
//! ).unwrap();
//!
//! assert_eq!(mesh.coarse_bins(Axis::X).unwrap(), 2);
//! assert_eq!(mesh.cells().len(), 2);
//!
//! // one fine interval in every coarse bin
//! let bounds = IntervalCounts::new(vec![1, 1], vec![1], vec![1]);
//! assert!(bounds.validate(&mesh).is_ok());
//! ```
//!
//! Fine interval counts are kept separate from the mesh in [IntervalCounts]
//! since they are a solver setting rather than a property of the geometry.

// Split into subfiles for development, but anything important is re-exported
mod bounds;
mod core;
mod rectilinear;

// inline important the mesh-related modules for a nice public API
#[doc(inline)]
pub use crate::mesh::core::{Axis, Cell, MaterialFraction, StructuredMesh};

#[doc(inline)]
pub use crate::mesh::bounds::IntervalCounts;

#[doc(inline)]
pub use crate::mesh::rectilinear::RectilinearMesh;
