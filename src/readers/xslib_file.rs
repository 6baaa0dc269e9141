//! Reader for PartiSn bxslib binary cross section files
//!
//! Decoding is a two state machine driven one byte at a time. Fixed width
//! name fields are collected until the first null byte is seen, at which
//! point the partial field is dropped and the table is complete.

// standard library
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::xslib::{LibraryLayout, LibraryNames};

// external crates
use log::{debug, trace};

/// Decoder state while walking the name table
#[derive(Debug, PartialEq)]
enum DecodeState {
    /// Collecting the bytes of the current name field
    ReadingField(Vec<u8>),
    /// A null byte was seen, the table is complete
    Terminated,
}

/// A simple reader for the name table of a bxslib file
#[derive(Debug, Default)]
pub struct XsLibReader {
    layout: LibraryLayout,
}

impl XsLibReader {
    /// Reader for the default (and only known) library layout
    pub fn new() -> Self {
        Default::default()
    }

    /// Reader for a library with a different layout
    pub fn with_layout(layout: LibraryLayout) -> Self {
        Self { layout }
    }

    /// Decode the nuclide/edit name table from the library at `path`
    ///
    /// The file is only held open for the duration of the call.
    pub fn parse(&self, path: &Path) -> Result<LibraryNames> {
        let minimum = self.layout.minimum_length()?;
        let file = File::open(path)?;
        let found = file.metadata()?.len();

        // need the header and at least one field for there to be a table
        if found < minimum {
            return Err(Error::TruncatedRecord {
                path: path.to_path_buf(),
                expected: minimum,
                found,
            });
        }

        let mut reader = BufReader::new(file);
        reader.seek(SeekFrom::Start(self.layout.header_bytes))?;
        debug!(
            "Reading {}-byte names from {} at offset {}",
            self.layout.field_bytes,
            path.display(),
            self.layout.header_bytes
        );

        let names = self.decode(reader.bytes(), path, found)?;
        debug!("Found {} names", names.len());

        Ok(LibraryNames {
            path: path.to_path_buf(),
            names,
        })
    }

    /// Run the state machine over the bytes following the header
    fn decode<I>(&self, mut bytes: I, path: &Path, found: u64) -> Result<Vec<String>>
    where
        I: Iterator<Item = std::io::Result<u8>>,
    {
        let field_bytes = self.layout.field_bytes;
        let mut names = Vec::new();
        let mut state = DecodeState::ReadingField(Vec::with_capacity(field_bytes));

        while let DecodeState::ReadingField(mut field) = state {
            state = match bytes.next().transpose()? {
                Some(0) => {
                    trace!("Null byte after {} bytes of field, done", field.len());
                    DecodeState::Terminated
                }
                Some(byte) => {
                    field.push(byte);
                    if field.len() == field_bytes {
                        let name = decode_name(&field);
                        trace!("[ Name ] \"{name}\"");
                        names.push(name);
                        field.clear();
                    }
                    DecodeState::ReadingField(field)
                }
                None => {
                    // ran out of file before the terminating field
                    let fields = (names.len() as u64 + 1).saturating_mul(field_bytes as u64);
                    return Err(Error::TruncatedRecord {
                        path: path.to_path_buf(),
                        expected: self.layout.header_bytes.saturating_add(fields),
                        found,
                    });
                }
            };
        }

        Ok(names)
    }
}

/// Names are plain single-byte text, so map every byte straight to a char
fn decode_name(field: &[u8]) -> String {
    field.iter().map(|&b| b as char).collect()
}
