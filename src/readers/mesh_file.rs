// internal modules
use crate::error::{Error, Result};
use crate::mesh::{Axis, Cell, IntervalCounts, RectilinearMesh};
use crate::readers::parsers;
use crate::utils::*;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// external crates
use log::{debug, trace, warn};
use nom::IResult;
use serde::{Deserialize, Serialize};

/// Mesh and optional fine interval counts read from a mesh file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshInput {
    /// Structured mesh with cell material content
    #[serde(flatten)]
    pub mesh: RectilinearMesh,
    /// Fine interval counts, if given in the file
    #[serde(default)]
    pub bounds: Option<IntervalCounts>,
}

/// A simple reader for structured mesh description files
///
/// Files ending in `.json` are deserialised directly. Anything else is read
/// as plain text with one record per line:
///
/// | Example line             | Interpretation                   |
/// | ------------------------ | -------------------------------- |
/// | Starts with `#`          | comment                          |
/// | `x 0.0 10.0 20.0`        | coarse divisions along x         |
/// | `xints 5 10`             | fine intervals per coarse x bin  |
/// | `cell steel:0.4 h2o:0.6` | next cell's material fractions   |
/// | `cell`                   | next cell is void                |
///
/// Cells are given in mesh iteration order (x fastest). If there are no
/// `cell` records at all every cell is void.
#[derive(Debug, Default)]
pub struct MeshFileReader {
    divisions: [Option<Vec<f64>>; 3],
    intervals: [Option<Vec<u32>>; 3],
    cells: Vec<Cell>,
}

impl MeshFileReader {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Parse a mesh description file, choosing the format by extension
    pub fn parse(&mut self, path: &Path) -> Result<MeshInput> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            debug!("Reading {} as JSON", path.display());
            let mut input: MeshInput = serde_json::from_reader(reader)
                .map_err(|e| Error::invalid(f!("bad mesh file {}: {e}", path.display())))?;
            input.mesh.validate()?;
            return Ok(input);
        }

        debug!("Reading {} as text", path.display());
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            self.parse_line(&line, n + 1)?;
        }
        self.finish()
    }

    /// Interpret a single line of a text mesh file
    fn parse_line(&mut self, line: &str, line_number: usize) -> Result<()> {
        // anything after a '#' is a comment
        let line = match line.split_once('#') {
            Some((content, _)) => content,
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            return Ok(());
        }

        if let IResult::Ok((_, (axis, values))) = parsers::intervals(line) {
            trace!("[Intervals] {line}");
            Self::store(&mut self.intervals[axis.index()], values, axis, "ints")?;
        } else if let IResult::Ok((_, (axis, values))) = parsers::divisions(line) {
            trace!("[Divisions] {line}");
            Self::store(&mut self.divisions[axis.index()], values, axis, "")?;
        } else if let IResult::Ok((_, materials)) = parsers::cell(line) {
            trace!("[  Cell   ] {line}");
            self.cells.push(Cell {
                index: self.cells.len(),
                materials,
            });
        } else {
            return Err(Error::invalid(f!(
                "unrecognised mesh record on line {line_number}: \"{line}\""
            )));
        }

        Ok(())
    }

    /// Duplicate records are almost certainly a mistake, so refuse them
    fn store<T>(slot: &mut Option<Vec<T>>, values: Vec<T>, axis: Axis, suffix: &str) -> Result<()> {
        if slot.is_some() {
            return Err(Error::invalid(f!("{axis}{suffix} is defined more than once")));
        }
        *slot = Some(values);
        Ok(())
    }

    /// Assemble everything collected into a validated mesh
    fn finish(&mut self) -> Result<MeshInput> {
        let [x, y, z] = std::mem::take(&mut self.divisions);
        let missing = |axis: Axis| Error::invalid(f!("no {axis} divisions in mesh file"));
        let x = x.ok_or_else(|| missing(Axis::X))?;
        let y = y.ok_or_else(|| missing(Axis::Y))?;
        let z = z.ok_or_else(|| missing(Axis::Z))?;

        let cells = std::mem::take(&mut self.cells);
        let mesh = RectilinearMesh::with_cells(x, y, z, cells)?;

        let bounds = match std::mem::take(&mut self.intervals) {
            [None, None, None] => None,
            [Some(x), Some(y), Some(z)] => Some(IntervalCounts::new(x, y, z)),
            _ => {
                warn!("Incomplete fine interval records, ignoring them");
                None
            }
        };

        Ok(MeshInput { mesh, bounds })
    }
}
