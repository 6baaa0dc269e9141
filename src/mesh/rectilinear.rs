//! Simple in-memory rectilinear mesh

// internal modules
use crate::error::{Error, Result};
use crate::mesh::core::{Axis, Cell, StructuredMesh};
use crate::utils::*;

// external crates
use log::trace;
use serde::{Deserialize, Serialize};

/// Rectilinear mesh defined by coarse divisions along x, y, and z
///
/// Cells are stored with the x index varying fastest, then y, then z. This
/// is the same order the global `index` of each [Cell] follows.
///
/// For a 2D problem just give the z axis a single coarse bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectilinearMesh {
    /// Division coordinates along x
    pub x: Vec<f64>,
    /// Division coordinates along y
    pub y: Vec<f64>,
    /// Division coordinates along z
    pub z: Vec<f64>,
    /// Cells with their material content, void if not provided
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl RectilinearMesh {
    /// Build a mesh of void cells from the division coordinates
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self> {
        let mut mesh = Self {
            x,
            y,
            z,
            cells: Vec::new(),
        };
        mesh.check_divisions()?;

        let n_cells = mesh.expected_cells()?;
        mesh.cells = (0..n_cells)
            .map(|index| Cell {
                index,
                ..Default::default()
            })
            .collect();

        Ok(mesh)
    }

    /// Build a mesh with explicit cell data
    ///
    /// The cells are re-indexed to match their position in the list.
    pub fn with_cells(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, cells: Vec<Cell>) -> Result<Self> {
        let mut mesh = Self { x, y, z, cells };
        mesh.reindex();
        mesh.validate()?;
        Ok(mesh)
    }

    /// Check the invariants of a mesh, e.g. after deserialising one
    ///
    /// An empty cell list is filled with void cells, anything else must
    /// match the number of coarse bins exactly.
    pub fn validate(&mut self) -> Result<()> {
        self.check_divisions()?;

        let expected = self.expected_cells()?;
        if self.cells.is_empty() {
            trace!("No cell data, filling {expected} void cells");
            self.cells = (0..expected)
                .map(|index| Cell {
                    index,
                    ..Default::default()
                })
                .collect();
        } else if self.cells.len() != expected {
            return Err(Error::invalid(f!(
                "mesh has {} cells but the divisions define {expected}",
                self.cells.len()
            )));
        }

        self.reindex();
        Ok(())
    }

    /// Global cell index from the (i, j, k) coarse bin indices
    ///
    /// ```rust
    /// # use partisn::mesh::RectilinearMesh;
    /// let mesh = RectilinearMesh::new(
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![0.0, 1.0, 2.0, 3.0],
    ///     vec![0.0, 1.0],
    /// ).unwrap();
    /// assert_eq!(mesh.cell_index(1, 2, 0), 5);
    /// ```
    pub fn cell_index(&self, i: usize, j: usize, k: usize) -> usize {
        let ni = self.x.len() - 1;
        let nj = self.y.len() - 1;
        i + j * ni + k * ni * nj
    }

    fn check_divisions(&self) -> Result<()> {
        for axis in Axis::ALL {
            let divisions = self.axis_divisions(axis);
            if divisions.len() < 2 {
                return Err(Error::invalid(f!(
                    "{axis} divisions need at least two coordinates, found {}",
                    divisions.len()
                )));
            }
            if !is_strictly_increasing(divisions) {
                return Err(Error::invalid(f!(
                    "{axis} divisions must be strictly increasing"
                )));
            }
        }
        Ok(())
    }

    fn reindex(&mut self) {
        for (index, cell) in self.cells.iter_mut().enumerate() {
            cell.index = index;
        }
    }

    fn axis_divisions(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl StructuredMesh for RectilinearMesh {
    fn divisions(&self, axis: Axis) -> Result<&[f64]> {
        Ok(self.axis_divisions(axis))
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn describe(&self) -> String {
        f!(
            "rectilinear mesh ({}x{}x{})",
            self.x.len().saturating_sub(1),
            self.y.len().saturating_sub(1),
            self.z.len().saturating_sub(1)
        )
    }
}

impl std::fmt::Display for RectilinearMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} with {} cells", self.describe(), self.cells.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MaterialFraction;

    #[test]
    fn void_cells_are_generated() {
        let mesh = RectilinearMesh::new(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 1.0, 2.0],
            vec![0.0, 5.0],
        )
        .unwrap();
        assert_eq!(mesh.cells().len(), 4);
        assert!(mesh.cells().iter().all(Cell::is_void));
        assert_eq!(mesh.cells()[3].index, 3);
    }

    #[test]
    fn non_monotonic_divisions() {
        let err = RectilinearMesh::new(vec![0.0, 2.0, 1.0], vec![0.0, 1.0], vec![0.0, 1.0])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn single_coordinate_axis() {
        let err = RectilinearMesh::new(vec![0.0, 1.0], vec![0.0], vec![0.0, 1.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn cell_count_mismatch() {
        let cells = vec![Cell::default(); 3];
        let err = RectilinearMesh::with_cells(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            cells,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn explicit_cells_are_reindexed() {
        let cells = vec![
            Cell {
                index: 7,
                materials: vec![MaterialFraction::new("steel", 1.0)],
            },
            Cell::default(),
        ];
        let mesh =
            RectilinearMesh::with_cells(vec![0.0, 1.0, 2.0], vec![0.0, 1.0], vec![0.0, 1.0], cells)
                .unwrap();
        assert_eq!(mesh.cells()[0].index, 0);
        assert_eq!(mesh.cells()[1].index, 1);
        assert!(!mesh.cells()[0].is_void());
        assert!(mesh.cells()[1].is_void());
    }
}
