//! Zone to material mapping and the material assignment text
//!
//! PartiSn refers to materials by integer zone id in the geometry block, and
//! only defines what those ids mean in the materials block. Both blocks must
//! therefore come from the same [ZoneMap], built from a single pass over the
//! mesh cells.
//!
//! Material mixing is not implemented yet, so every cell maps to the void
//! zone and the mixture table stays empty. When mixing is added, ids should
//! be handed out in the order unique mixtures are first encountered in that
//! pass.

// internal modules
use crate::mesh::{MaterialFraction, StructuredMesh};

// external crates
use log::{debug, warn};

/// Zone id reserved for void
pub const VOID_ZONE: u32 = 0;

/// Integer zone id for every mesh cell, and the mixtures those ids stand for
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneMap {
    /// Zone id of each cell, in mesh iteration order
    zones: Vec<u32>,
    /// Mixture for zone `i + 1`, void (zone 0) has no entry
    mixtures: Vec<Vec<MaterialFraction>>,
}

impl ZoneMap {
    /// Assign a zone to every cell of the mesh
    pub fn from_mesh<M: StructuredMesh + ?Sized>(mesh: &M) -> Self {
        let cells = mesh.cells();
        let zones = vec![VOID_ZONE; cells.len()];

        let with_material = cells.iter().filter(|c| !c.is_void()).count();
        if with_material > 0 {
            warn!("{with_material} cells contain material but mixing is not implemented, all zones set to void");
        }
        let zone_map = Self {
            zones,
            mixtures: Vec::new(),
        };
        debug!(
            "Assigned {} cells to {} zones",
            zone_map.zones.len(),
            zone_map.number_of_zones()
        );
        zone_map
    }

    /// Zone id of each cell in mesh iteration order
    pub fn zones(&self) -> &[u32] {
        &self.zones
    }

    /// Unique mixtures, where index `i` is zone `i + 1`
    pub fn mixtures(&self) -> &[Vec<MaterialFraction>] {
        &self.mixtures
    }

    /// Number of distinct zones including void
    pub fn number_of_zones(&self) -> usize {
        self.mixtures.len() + 1
    }

    /// False while every cell is mapped to void by default
    pub fn is_populated(&self) -> bool {
        !self.mixtures.is_empty()
    }
}

/// Material assignment text for the geometry block
///
/// Only a placeholder comment until the mixture table can be populated, at
/// which point each zone gets a pure material and a mixture definition here.
pub fn material_text(zone_map: &ZoneMap) -> String {
    debug!("Writing materials for {} zones", zone_map.number_of_zones());
    "* material mixtures not yet implemented\n".to_string()
}
