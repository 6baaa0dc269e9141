//! The assembled deck and its blocks

// internal modules
use crate::error::{Error, Result};

// external crates
use log::warn;

/// Line ending used for the final document on this platform
#[cfg(windows)]
pub(crate) const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub(crate) const LINE_ENDING: &str = "\n";

/// The five ordered blocks of a PartiSn deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Block {
    /// Problem sizing and initialisation
    ProblemSetup,
    /// Geometry and zone material assignments
    Geometry,
    /// Cross section library reference
    CrossSections,
    /// Material and mixture definitions
    Materials,
    /// Source and normalisation
    Source,
}

impl Block {
    /// All blocks in deck order
    pub const ALL: [Block; 5] = [
        Block::ProblemSetup,
        Block::Geometry,
        Block::CrossSections,
        Block::Materials,
        Block::Source,
    ];

    /// Block number as used in the `/A# block N` header
    pub const fn number(&self) -> u8 {
        match self {
            Self::ProblemSetup => 1,
            Self::Geometry => 2,
            Self::CrossSections => 3,
            Self::Materials => 4,
            Self::Source => 5,
        }
    }

    /// Header comment line that opens the block
    pub fn header(&self) -> String {
        format!("/A# block {}\n", self.number())
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::ProblemSetup => "problem setup",
            Self::Geometry => "geometry",
            Self::CrossSections => "cross sections",
            Self::Materials => "materials",
            Self::Source => "source",
        };
        write!(f, "{} ({name})", self.number())
    }
}

/// A complete PartiSn input deck, held in memory
///
/// Blocks that still only contain placeholder text are listed by
/// [Deck::placeholders], so a syntactically valid deck is never mistaken for
/// a physically complete one. Use [Deck::ensure_complete] to turn this into
/// an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub(crate) text: String,
    pub(crate) placeholders: Vec<Block>,
    pub(crate) library_names: Vec<String>,
}

impl Deck {
    /// Full document text, exactly as it will be written
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Blocks containing placeholder text rather than real input
    pub fn placeholders(&self) -> &[Block] {
        &self.placeholders
    }

    /// True only if no block relies on placeholder text
    pub fn is_complete(&self) -> bool {
        self.placeholders.is_empty()
    }

    /// Error on the first block that is still a placeholder
    pub fn ensure_complete(&self) -> Result<()> {
        match self.placeholders.first() {
            Some(block) => Err(Error::UnimplementedBlock(*block)),
            None => Ok(()),
        }
    }

    /// Names decoded from the referenced cross section library
    pub fn library_names(&self) -> &[String] {
        &self.library_names
    }

    /// Log a warning for every placeholder block
    pub fn warn_placeholders(&self) {
        for block in &self.placeholders {
            warn!("Block {block} only contains placeholder text");
        }
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Convert the internal '\n' separated text to the platform convention
pub(crate) fn to_host_line_endings(text: String) -> String {
    if LINE_ENDING == "\n" {
        text
    } else {
        text.replace('\n', LINE_ENDING)
    }
}
