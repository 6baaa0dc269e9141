//! Core mesh abstractions shared by every mesh provider

// internal modules
use crate::error::{Error, Result};
use crate::utils::*;

// external crates
use serde::{Deserialize, Serialize};

/// Cartesian axes of a structured mesh, in deck order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in the order PartiSn expects them
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lowercase designator used as the directive prefix, e.g. `x` in `xmesh`
    ///
    /// ```rust
    /// # use partisn::mesh::Axis;
    /// assert_eq!(Axis::Y.name(), "y");
    /// ```
    pub const fn name(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// Position of the axis in `[x, y, z]` ordered collections
    pub const fn index(&self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = Error;

    /// Look up an axis by name, as mesh libraries tend to do
    ///
    /// ```rust
    /// # use partisn::mesh::Axis;
    /// let axis: Axis = "z".parse().unwrap();
    /// assert_eq!(axis, Axis::Z);
    /// assert!("r".parse::<Axis>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            _ => Err(Error::invalid(f!("unknown axis \"{s}\", expected x, y, or z"))),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Volume fraction of a single material within a cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialFraction {
    /// Material name as known to the mesh/material library
    pub material: String,
    /// Volume fraction in the range 0-1
    pub fraction: f64,
}

impl MaterialFraction {
    pub fn new(material: impl Into<String>, fraction: f64) -> Self {
        Self {
            material: material.into(),
            fraction,
        }
    }
}

/// A single mesh cell and the materials it contains
///
/// The global `index` follows the iteration order of the owning mesh. A cell
/// with no materials is void.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Global cell index
    #[serde(default)]
    pub index: usize,
    /// Material fractions making up the cell
    #[serde(default)]
    pub materials: Vec<MaterialFraction>,
}

impl Cell {
    /// True if the cell has no material content
    pub fn is_void(&self) -> bool {
        self.materials.iter().all(|m| m.fraction <= 0.0)
    }
}

/// Anything that can describe itself as a structured mesh
///
/// This is the boundary with external mesh/material libraries. Division
/// coordinates must be strictly increasing, and the cells must come back in
/// the same deterministic order on every call since the zone array and any
/// material definitions are built from separate passes over them.
pub trait StructuredMesh {
    /// Coarse division coordinates along an axis
    fn divisions(&self, axis: Axis) -> Result<&[f64]>;

    /// Every cell of the mesh in iteration order
    fn cells(&self) -> &[Cell];

    /// Whether the provider actually has structured mesh support
    ///
    /// Providers backed by optional tooling should return `false` when that
    /// tooling is missing rather than returning half-populated data.
    fn is_structured(&self) -> bool {
        true
    }

    /// Short human readable description used in errors and logs
    fn describe(&self) -> String {
        "structured mesh".to_string()
    }

    /// Number of coarse bins along an axis
    fn coarse_bins(&self, axis: Axis) -> Result<usize> {
        Ok(self.divisions(axis)?.len().saturating_sub(1))
    }

    /// Expected number of cells from the coarse divisions
    fn expected_cells(&self) -> Result<usize> {
        let mut n_cells = 1;
        for axis in Axis::ALL {
            n_cells *= self.coarse_bins(axis)?;
        }
        Ok(n_cells)
    }
}
