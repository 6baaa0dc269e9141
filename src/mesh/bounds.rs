//! Fine mesh interval counts for each coarse bin

// internal modules
use crate::error::{Error, Result};
use crate::mesh::core::{Axis, StructuredMesh};
use crate::utils::*;

// external crates
use serde::{Deserialize, Serialize};

/// Number of fine intervals in every coarse bin, per axis
///
/// Each list must have one entry per coarse bin of the mesh it is used with,
/// and every entry must be positive. See [IntervalCounts::validate].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalCounts {
    /// Fine intervals per coarse bin along x
    pub x: Vec<u32>,
    /// Fine intervals per coarse bin along y
    pub y: Vec<u32>,
    /// Fine intervals per coarse bin along z
    pub z: Vec<u32>,
}

impl IntervalCounts {
    pub fn new(x: Vec<u32>, y: Vec<u32>, z: Vec<u32>) -> Self {
        Self { x, y, z }
    }

    /// Build from a generic 3-element collection in x, y, z order
    ///
    /// ```rust
    /// # use partisn::mesh::IntervalCounts;
    /// let bounds = IntervalCounts::from_nested(vec![vec![2, 4], vec![1], vec![1]]).unwrap();
    /// assert_eq!(bounds.x, vec![2, 4]);
    ///
    /// assert!(IntervalCounts::from_nested(vec![vec![1], vec![1]]).is_err());
    /// ```
    pub fn from_nested(nested: Vec<Vec<u32>>) -> Result<Self> {
        match <[Vec<u32>; 3]>::try_from(nested) {
            Ok([x, y, z]) => Ok(Self { x, y, z }),
            Err(nested) => Err(Error::invalid(f!(
                "interval counts need exactly 3 axes, found {}",
                nested.len()
            ))),
        }
    }

    /// Every coarse bin split into the same number of fine intervals
    pub fn uniform<M: StructuredMesh + ?Sized>(mesh: &M, intervals: u32) -> Result<Self> {
        Ok(Self {
            x: vec![intervals; mesh.coarse_bins(Axis::X)?],
            y: vec![intervals; mesh.coarse_bins(Axis::Y)?],
            z: vec![intervals; mesh.coarse_bins(Axis::Z)?],
        })
    }

    /// Interval counts along a single axis
    pub fn get(&self, axis: Axis) -> &[u32] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Total number of fine intervals along an axis
    pub fn total(&self, axis: Axis) -> u64 {
        self.get(axis).iter().map(|&n| n as u64).sum()
    }

    /// Ensure the counts line up with the coarse bins of a mesh
    pub fn validate<M: StructuredMesh + ?Sized>(&self, mesh: &M) -> Result<()> {
        for axis in Axis::ALL {
            let expected = mesh.coarse_bins(axis)?;
            let counts = self.get(axis);

            if counts.len() != expected {
                return Err(Error::invalid(f!(
                    "{axis}ints has {} entries but the mesh has {expected} coarse {axis} bins",
                    counts.len()
                )));
            }

            if let Some(position) = counts.iter().position(|&n| n == 0) {
                return Err(Error::invalid(f!(
                    "{axis}ints entry {position} is zero, every coarse bin needs at least one fine interval"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::RectilinearMesh;
    use rstest::{fixture, rstest};

    #[fixture]
    fn mesh() -> RectilinearMesh {
        RectilinearMesh::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0], vec![0.0, 1.0]).unwrap()
    }

    #[rstest]
    fn matching_counts(mesh: RectilinearMesh) {
        let bounds = IntervalCounts::new(vec![1, 1], vec![1], vec![1]);
        assert!(bounds.validate(&mesh).is_ok());
    }

    #[rstest]
    #[case(vec![1], vec![1], vec![1])]
    #[case(vec![1, 1, 1], vec![1], vec![1])]
    #[case(vec![1, 1], vec![], vec![1])]
    #[case(vec![1, 1], vec![1], vec![1, 2])]
    #[case(vec![1, 0], vec![1], vec![1])]
    fn mismatched_counts(
        mesh: RectilinearMesh,
        #[case] x: Vec<u32>,
        #[case] y: Vec<u32>,
        #[case] z: Vec<u32>,
    ) {
        let err = IntervalCounts::new(x, y, z).validate(&mesh).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[rstest]
    fn uniform_counts(mesh: RectilinearMesh) {
        let bounds = IntervalCounts::uniform(&mesh, 4).unwrap();
        assert_eq!(bounds.x, vec![4, 4]);
        assert_eq!(bounds.total(Axis::X), 8);
        assert_eq!(bounds.total(Axis::Z), 4);
    }
}
