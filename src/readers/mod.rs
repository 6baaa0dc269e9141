#![doc(hidden)]
//! Library of readers for the binary library and mesh description files

// internal modules
use crate::error::Result;
use crate::xslib::{LibraryLayout, LibraryNames};

// standard library
use std::path::Path;

// files under the readers module
mod mesh_file;
pub mod parsers;
mod xslib_file;

// inline important the reader types for a nice API
#[doc(inline)]
pub use crate::readers::mesh_file::{MeshFileReader, MeshInput};

#[doc(inline)]
pub use crate::readers::xslib_file::XsLibReader;

/// Read the nuclide and edit names from a bxslib file
///
/// Returns the names in file order, padding included, for the library at
/// `path`. Uses the default [LibraryLayout].
///
/// - `path` - Path to the bxslib file, can be [&str], [String], [Path], etc...
///
/// Example
/// ```ignore
/// // Which nuclides does this library provide?
/// let names: Vec<String> = partisn::read_library_names("path/to/bxslib")?;
/// ```
pub fn read_library_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    Ok(read_library(path, LibraryLayout::default())?.names)
}

/// Read the full name table of a bxslib file with an explicit layout
///
/// Same as [read_library_names] but keeps the source path alongside the
/// names, and allows a non-default layout for other library versions.
pub fn read_library<P: AsRef<Path>>(path: P, layout: LibraryLayout) -> Result<LibraryNames> {
    let path: &Path = Path::new(path.as_ref());
    let reader = XsLibReader::with_layout(layout);
    reader.parse(path)
}

/// Read a structured mesh description
///
/// Returns the mesh and any fine interval counts given in the file at
/// `path`. Files ending in `.json` are deserialised, anything else is read
/// as the plain text format described in [MeshFileReader].
///
/// Example
/// ```ignore
/// let input = partisn::read_mesh_file("path/to/mesh.txt")?;
/// ```
pub fn read_mesh_file<P: AsRef<Path>>(path: P) -> Result<MeshInput> {
    let path: &Path = Path::new(path.as_ref());
    let mut reader = MeshFileReader::new();
    reader.parse(path)
}
