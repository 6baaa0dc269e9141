//! Module for dealing with PartiSn binary cross section libraries
//!
//! Only a tiny part of the bxslib format is understood: the table of nuclide
//! and edit names near the start of the file. This is enough to see what is
//! available in a library before writing a deck that references it.
//!
//! ## Reading the name table
//!
//! To read the binary file, the path is provided via the readers module.
//!
//! ```rust, ignore
//! # use partisn::readers;
//! let names = readers::read_library_names("./data/bxslib").unwrap();
//! ```
//!
//! ## Layout
//!
//! The layout is not self-describing. Everything here comes from inspecting
//! one library version, so the offsets are kept in [LibraryLayout] rather
//! than scattered through the code.
//!
//! ```text
//! <180 byte header, not interpreted>
//! <name 1, 8 bytes> <name 2, 8 bytes> ... <field containing a null byte>
//! <remainder of library, not interpreted>
//! ```

// standard library
use std::path::PathBuf;

// internal modules
use crate::error::{Error, Result};
use crate::utils::f;

// external crates
use serde::{Deserialize, Serialize};

/// Byte offset of the first name field in the known library version
///
/// Found by inspection, not derived from anything in the file and never
/// validated against it.
pub const HEADER_BYTES: u64 = 180;

/// Width of a single name field in bytes
pub const NAME_FIELD_BYTES: usize = 8;

/// Number of neutron energy groups in the known library version
///
/// Written to the deck as `lng`. The group structure should eventually be
/// read from the library itself, but where it lives in the file is not yet
/// known.
pub const NEUTRON_GROUPS: u32 = 175;

/// Fixed offsets and sizes assumed for a bxslib file
///
/// The default is the only layout seen so far. A different library version
/// can be handled by building a layout by hand and passing it to the reader
/// and deck options until these values can be derived from the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LibraryLayout {
    /// Bytes to skip before the first name field
    pub header_bytes: u64,
    /// Width of each name field
    pub field_bytes: usize,
    /// Neutron energy groups written as `lng` in the deck
    pub neutron_groups: u32,
}

impl LibraryLayout {
    /// Minimum file size needed to hold the header and one name field
    ///
    /// Fails for zero width fields, or a header so large the total does not
    /// fit in a file offset.
    pub fn minimum_length(&self) -> Result<u64> {
        if self.field_bytes == 0 {
            return Err(Error::invalid("name fields must be at least one byte wide"));
        }
        u64::try_from(self.field_bytes)
            .ok()
            .and_then(|width| self.header_bytes.checked_add(width))
            .ok_or_else(|| {
                Error::invalid(f!(
                    "library header of {} bytes plus {} byte fields is too large",
                    self.header_bytes,
                    self.field_bytes
                ))
            })
    }
}

impl Default for LibraryLayout {
    fn default() -> Self {
        Self {
            header_bytes: HEADER_BYTES,
            field_bytes: NAME_FIELD_BYTES,
            neutron_groups: NEUTRON_GROUPS,
        }
    }
}

/// Name table decoded from a cross section library
///
/// Names are exactly as stored, including any space padding, in the order
/// they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LibraryNames {
    /// Library the names were read from
    pub path: PathBuf,
    /// Nuclide and edit names
    pub names: Vec<String>,
}

impl LibraryNames {
    /// Number of names in the table
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names with the padding removed, for display
    pub fn trimmed(&self) -> Vec<&str> {
        self.names.iter().map(|n| n.trim()).collect()
    }
}

impl std::fmt::Display for LibraryNames {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "LibraryNames {\n".to_string();
        s += &f!("    path: {}\n", self.path.display());
        s += &f!("    names: {}\n", self.names.len());
        for chunk in self.trimmed().chunks(8) {
            s += &f!("        {}\n", chunk.join(" "));
        }
        s += "}";
        write!(f, "{}", s)
    }
}
