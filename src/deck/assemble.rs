//! Block construction and assembly of the full deck

// standard library
use std::fs::{self, Permissions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

// internal modules
use crate::capability::require_structured;
use crate::deck::core::{to_host_line_endings, Block, Deck};
use crate::deck::geometry::geometry_text;
use crate::deck::material::{material_text, ZoneMap};
use crate::deck::DeckOptions;
use crate::error::{Error, Result};
use crate::mesh::{Axis, IntervalCounts, StructuredMesh};
use crate::readers::read_library;
use crate::utils::*;

// external crates
use log::{debug, info, trace};
use tempfile::Builder;

/// Fixed lines at the top of every deck
const PREAMBLE: &str = "   1    0    0\n\
                        * PartiSn input deck produced automatically\n\
                        * by the partisn deck module\n";

/// Fixed lines at the end of every deck
const TRAILER: &str = "/ *********************\n\
                       * You must produce your own edits\n";

/// Line closing every block
const TERMINATOR: &str = "t\n";

/// Build a deck with the default [DeckOptions]
///
/// See [synthesize_with] for details.
pub fn synthesize<M, P>(mesh: &M, bounds: &IntervalCounts, library: P) -> Result<Deck>
where
    M: StructuredMesh + ?Sized,
    P: AsRef<Path>,
{
    synthesize_with(mesh, bounds, library, &DeckOptions::default())
}

/// Build a complete PartiSn deck in memory
///
/// - `mesh` - Any structured mesh provider
/// - `bounds` - Fine intervals for every coarse bin of the mesh
/// - `library` - Path to the bxslib cross section library
/// - `options` - Formatting and library layout settings
///
/// Nothing is written to disk, use [persist] for that. The library name
/// table is read as part of building block 3, so a missing or truncated
/// library fails here before any output exists.
pub fn synthesize_with<M, P>(
    mesh: &M,
    bounds: &IntervalCounts,
    library: P,
    options: &DeckOptions,
) -> Result<Deck>
where
    M: StructuredMesh + ?Sized,
    P: AsRef<Path>,
{
    let library = library.as_ref();

    // fail early if anything about the inputs is off
    require_structured(mesh)?;
    check_divisions(mesh)?;
    bounds.validate(mesh)?;

    // one pass over the cells shared by geometry and materials
    let zone_map = ZoneMap::from_mesh(mesh);

    let mut placeholders = Vec::new();
    let mut text = PREAMBLE.to_string();

    text += &block_1(&mut placeholders);
    text += &block_2(mesh, bounds, &zone_map, options, &mut placeholders)?;

    let names = read_library(library, options.layout)?;
    for name in &names.names {
        trace!("[Library] {name}");
    }
    text += &block_3(library, options);

    text += &block_4(&mut placeholders);
    text += &block_5(&mut placeholders);
    text += TRAILER;

    info!(
        "Deck built for {} with {} library names",
        mesh.describe(),
        names.len()
    );

    Ok(Deck {
        text: to_host_line_endings(text),
        placeholders,
        library_names: names.names,
    })
}

/// Write a deck to `path`, replacing anything already there
///
/// The text goes to a temporary file next to the target which is then
/// renamed over it. If anything fails the original file, if any, is left
/// exactly as it was and the temporary file is removed.
///
/// An existing file keeps its permissions, and a read-only one is refused.
/// Symbolic links are followed so the file they point to is replaced rather
/// than the link itself. New files get the usual `0o666` less the umask.
pub fn persist<P: AsRef<Path>>(deck: &Deck, path: P) -> Result<()> {
    let path = resolve_link(path.as_ref())?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = existing_permissions(&path)?;
    let mut builder = Builder::new();
    if let Some(permissions) = existing.clone().or_else(new_file_permissions) {
        builder.permissions(permissions);
    }

    let mut file = builder.tempfile_in(directory)?;
    debug!("Staging deck in {}", file.path().display());

    // the umask applies on creation, so put back the exact mode being replaced
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }

    file.write_all(deck.text().as_bytes())?;
    file.flush()?;

    file.persist(&path).map_err(|e| e.error)?;
    info!("Deck written to {}", path.display());
    Ok(())
}

/// Follow a symbolic link to the file it points at
fn resolve_link(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            let target = fs::canonicalize(path)?;
            debug!("{} links to {}", path.display(), target.display());
            Ok(target)
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Permissions of a file about to be replaced, `None` if there is no file
fn existing_permissions(path: &Path) -> Result<Option<Permissions>> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        let message = f!("{} is a directory", path.display());
        return Err(io::Error::new(io::ErrorKind::Other, message).into());
    }

    let permissions = metadata.permissions();
    if permissions.readonly() {
        let message = f!("{} is read-only", path.display());
        return Err(io::Error::new(io::ErrorKind::PermissionDenied, message).into());
    }
    Ok(Some(permissions))
}

/// Mode for a brand new deck, before the umask is applied
#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

/// Synthesise a deck and write it straight to `output`
pub fn write_deck<M, P, Q>(mesh: &M, bounds: &IntervalCounts, library: P, output: Q) -> Result<Deck>
where
    M: StructuredMesh + ?Sized,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let deck = synthesize(mesh, bounds, library)?;
    persist(&deck, output)?;
    Ok(deck)
}

/// External meshes may not have checked their own divisions or cells
fn check_divisions<M: StructuredMesh + ?Sized>(mesh: &M) -> Result<()> {
    for axis in Axis::ALL {
        let divisions = mesh.divisions(axis)?;
        if divisions.len() < 2 || !is_strictly_increasing(divisions) {
            return Err(Error::invalid(f!(
                "{axis} divisions of {} need at least two strictly increasing values",
                mesh.describe()
            )));
        }
    }

    // the zone array has one entry per cell and must cover every coarse bin
    let expected = mesh.expected_cells()?;
    let found = mesh.cells().len();
    if found != expected {
        return Err(Error::invalid(f!(
            "{} has {found} cells but its divisions describe {expected}",
            mesh.describe()
        )));
    }
    Ok(())
}

/// Problem sizing, not yet generated
fn block_1(placeholders: &mut Vec<Block>) -> String {
    debug!("Building block 1");
    placeholders.push(Block::ProblemSetup);
    Block::ProblemSetup.header() + TERMINATOR
}

/// Geometry and the zone material assignments
fn block_2<M: StructuredMesh + ?Sized>(
    mesh: &M,
    bounds: &IntervalCounts,
    zone_map: &ZoneMap,
    options: &DeckOptions,
    placeholders: &mut Vec<Block>,
) -> Result<String> {
    debug!("Building block 2");
    let mut s = Block::Geometry.header();
    s += &geometry_text(mesh, bounds, zone_map, options)?;
    s += &material_text(zone_map);
    s += TERMINATOR;

    if !zone_map.is_populated() {
        placeholders.push(Block::Geometry);
    }
    Ok(s)
}

/// Library reference and group structure
fn block_3(library: &Path, options: &DeckOptions) -> String {
    debug!("Building block 3");
    let mut s = Block::CrossSections.header();
    s += &f!("lib={}\n", library.display());
    s += &f!("lng={}\n", options.layout.neutron_groups);
    s += TERMINATOR;
    s
}

/// Material definitions, not yet generated
fn block_4(placeholders: &mut Vec<Block>) -> String {
    debug!("Building block 4");
    placeholders.push(Block::Materials);
    Block::Materials.header() + TERMINATOR
}

/// Source and normalisation, not yet generated
fn block_5(placeholders: &mut Vec<Block>) -> String {
    debug!("Building block 5");
    placeholders.push(Block::Source);
    Block::Source.header() + TERMINATOR
}
