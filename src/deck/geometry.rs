//! Coarse mesh, fine mesh, and zone assignment directives
//!
//! Produces the geometry half of block 2:
//!
//! ```text
//! / coarse bins
//! xmesh =0.000000 1.000000 2.000000
//! ymesh =0.000000 1.000000
//! zmesh =0.000000 1.000000
//! / fine bins
//! xints =1 1
//! yints =1
//! zints =1
//! / material assignments
//! zones= 0 0
//! * zone material differentiation not yet implemented
//! ```
//!
//! Every directive goes through [wrap_fixed_width](crate::utils::wrap_fixed_width)
//! so long meshes are continued over several lines.

// internal modules
use crate::deck::material::ZoneMap;
use crate::deck::DeckOptions;
use crate::error::Result;
use crate::mesh::{Axis, IntervalCounts, StructuredMesh};
use crate::utils::*;

// external crates
use itertools::Itertools;
use log::debug;

/// Geometry directives for a structured mesh
///
/// The mesh and interval counts are expected to have been validated against
/// each other already. Zone ids come from `zone_map`, which must have been
/// built from the same mesh.
pub fn geometry_text<M: StructuredMesh + ?Sized>(
    mesh: &M,
    bounds: &IntervalCounts,
    zone_map: &ZoneMap,
    options: &DeckOptions,
) -> Result<String> {
    let width = options.wrap_width;

    // coarse bin boundaries
    let mut geom = "/ coarse bins\n".to_string();
    for axis in Axis::ALL {
        let coords = mesh
            .divisions(axis)?
            .iter()
            .map(|x| x.fixed(options.precision))
            .join(" ");
        geom += &wrap_fixed_width(&f!("{axis}mesh ={coords}"), width)?;
    }

    // number of fine mesh intervals between each coarse bin
    geom += "/ fine bins\n";
    for axis in Axis::ALL {
        let ints = bounds.get(axis).iter().join(" ");
        geom += &wrap_fixed_width(&f!("{axis}ints ={ints}"), width)?;
    }

    // integer zone id for every cell, 0 being void
    geom += "/ material assignments\n";
    let zones = zone_map.zones().iter().join(" ");
    geom += &wrap_fixed_width(&f!("zones= {zones}"), width)?;
    geom += "* zone material differentiation not yet implemented\n";

    debug!(
        "Geometry: {}x{}x{} coarse, {}x{}x{} fine",
        bounds.x.len(),
        bounds.y.len(),
        bounds.z.len(),
        bounds.total(Axis::X),
        bounds.total(Axis::Y),
        bounds.total(Axis::Z)
    );

    Ok(geom)
}
