use std::fs;
use std::path::{Path, PathBuf};

use partisn::deck::{self, Block, DeckOptions};
use partisn::mesh::{Axis, Cell, IntervalCounts, RectilinearMesh, StructuredMesh};
use partisn::xslib::HEADER_BYTES;
use partisn::{persist, synthesize, Error};
use rstest::{fixture, rstest};
use tempfile::TempDir;

/// Scratch directory holding a small valid library
struct Workspace {
    dir: TempDir,
    library: PathBuf,
}

impl Workspace {
    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = TempDir::new().unwrap();
    let mut bytes = vec![0_u8; HEADER_BYTES as usize];
    bytes.extend_from_slice(b"U235    U238    \0\0\0\0\0\0\0\0");
    let library = dir.path().join("bxslib");
    fs::write(&library, bytes).unwrap();
    Workspace { dir, library }
}

#[fixture]
fn mesh() -> RectilinearMesh {
    RectilinearMesh::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0], vec![0.0, 1.0]).unwrap()
}

#[fixture]
fn bounds() -> IntervalCounts {
    IntervalCounts::new(vec![1, 1], vec![1], vec![1])
}

fn expected_deck(library: &Path) -> String {
    let text = format!(
        "   1    0    0\n\
         * PartiSn input deck produced automatically\n\
         * by the partisn deck module\n\
         /A# block 1\n\
         t\n\
         /A# block 2\n\
         / coarse bins\n\
         xmesh =0.000000 1.000000 2.000000\n\
         ymesh =0.000000 1.000000\n\
         zmesh =0.000000 1.000000\n\
         / fine bins\n\
         xints =1 1\n\
         yints =1\n\
         zints =1\n\
         / material assignments\n\
         zones= 0 0\n\
         * zone material differentiation not yet implemented\n\
         * material mixtures not yet implemented\n\
         t\n\
         /A# block 3\n\
         lib={}\n\
         lng=175\n\
         t\n\
         /A# block 4\n\
         t\n\
         /A# block 5\n\
         t\n\
         / *********************\n\
         * You must produce your own edits\n",
        library.display()
    );
    if cfg!(windows) {
        text.replace('\n', "\r\n")
    } else {
        text
    }
}

#[rstest]
fn full_deck_text(workspace: Workspace, mesh: RectilinearMesh, bounds: IntervalCounts) {
    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();
    assert_eq!(deck.text(), expected_deck(&workspace.library));
    assert_eq!(deck.library_names(), &["U235    ", "U238    "]);
}

#[rstest]
fn every_block_is_terminated(workspace: Workspace, mesh: RectilinearMesh, bounds: IntervalCounts) {
    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();
    let lines: Vec<&str> = deck.text().lines().collect();

    for block in Block::ALL {
        let header = block.header();
        let start = lines
            .iter()
            .position(|l| *l == header.trim_end())
            .unwrap();

        // the line before the next header (or the trailer) is the terminator
        let end = lines[start + 1..]
            .iter()
            .position(|l| l.starts_with("/A# block") || l.starts_with("/ *****"))
            .map(|p| p + start + 1)
            .unwrap();
        assert_eq!(lines[end - 1], "t", "block {block} is not terminated");
    }
}

#[rstest]
fn placeholders_are_reported(workspace: Workspace, mesh: RectilinearMesh, bounds: IntervalCounts) {
    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();
    assert!(!deck.is_complete());
    assert_eq!(
        deck.placeholders(),
        &[
            Block::ProblemSetup,
            Block::Geometry,
            Block::Materials,
            Block::Source
        ]
    );
    assert!(matches!(
        deck.ensure_complete(),
        Err(Error::UnimplementedBlock(Block::ProblemSetup))
    ));
}

#[rstest]
fn mismatched_bounds(workspace: Workspace, mesh: RectilinearMesh) {
    let bounds = IntervalCounts::new(vec![1], vec![1], vec![1]);
    let err = synthesize(&mesh, &bounds, &workspace.library).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[rstest]
fn missing_library_writes_nothing(workspace: Workspace, mesh: RectilinearMesh, bounds: IntervalCounts) {
    let output = workspace.path("deck.inp");
    let err = deck::write_deck(&mesh, &bounds, workspace.path("missing"), &output).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(!output.exists());
}

#[rstest]
fn zero_wrap_width(workspace: Workspace, mesh: RectilinearMesh, bounds: IntervalCounts) {
    let options = DeckOptions {
        wrap_width: 0,
        ..Default::default()
    };
    let err = deck::synthesize_with(&mesh, &bounds, &workspace.library, &options).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[rstest]
fn persist_round_trip(workspace: Workspace, mesh: RectilinearMesh, bounds: IntervalCounts) {
    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();
    let output = workspace.path("deck.inp");

    persist(&deck, &output).unwrap();
    assert_eq!(fs::read(&output).unwrap(), deck.text().as_bytes());
}

#[rstest]
fn persist_overwrites(workspace: Workspace, mesh: RectilinearMesh, bounds: IntervalCounts) {
    let output = workspace.path("deck.inp");
    fs::write(&output, "a much longer existing file that should be entirely replaced\n".repeat(100))
        .unwrap();

    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();
    persist(&deck, &output).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), deck.text());
}

#[rstest]
fn failed_persist_leaves_existing_file(
    workspace: Workspace,
    mesh: RectilinearMesh,
    bounds: IntervalCounts,
) {
    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();

    // a non-empty directory can never be replaced by a file
    let output = workspace.path("existing");
    fs::create_dir(&output).unwrap();
    fs::write(output.join("keep.txt"), "original").unwrap();

    let err = persist(&deck, &output).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(fs::read_to_string(output.join("keep.txt")).unwrap(), "original");

    // no staging files left behind
    let mut entries: Vec<String> = fs::read_dir(workspace.dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    entries.sort();
    assert_eq!(entries, vec!["bxslib", "existing"]);
}

#[cfg(unix)]
fn mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).unwrap().permissions().mode() & 0o777
}

#[cfg(unix)]
#[rstest]
#[case(0o644)]
#[case(0o640)]
#[case(0o666)]
fn persist_keeps_existing_mode(
    workspace: Workspace,
    mesh: RectilinearMesh,
    bounds: IntervalCounts,
    #[case] original: u32,
) {
    use std::os::unix::fs::PermissionsExt;

    let output = workspace.path("deck.inp");
    fs::write(&output, "old deck\n").unwrap();
    fs::set_permissions(&output, fs::Permissions::from_mode(original)).unwrap();

    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();
    persist(&deck, &output).unwrap();

    assert_eq!(mode(&output), original);
    assert_eq!(fs::read_to_string(&output).unwrap(), deck.text());
}

#[cfg(unix)]
#[rstest]
fn new_deck_mode_follows_umask(workspace: Workspace, mesh: RectilinearMesh, bounds: IntervalCounts) {
    // any ordinary file created here gets the same umask applied
    let reference = workspace.path("reference.txt");
    fs::write(&reference, "").unwrap();

    let output = workspace.path("deck.inp");
    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();
    persist(&deck, &output).unwrap();

    assert_eq!(mode(&output), mode(&reference));
}

#[cfg(unix)]
#[rstest]
fn read_only_deck_is_not_replaced(
    workspace: Workspace,
    mesh: RectilinearMesh,
    bounds: IntervalCounts,
) {
    use std::os::unix::fs::PermissionsExt;

    let output = workspace.path("deck.inp");
    fs::write(&output, "old deck\n").unwrap();
    fs::set_permissions(&output, fs::Permissions::from_mode(0o444)).unwrap();

    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();
    let err = persist(&deck, &output).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "old deck\n");
    assert_eq!(mode(&output), 0o444);
}

#[cfg(unix)]
#[rstest]
fn persist_follows_symlinks(workspace: Workspace, mesh: RectilinearMesh, bounds: IntervalCounts) {
    let target = workspace.path("real.inp");
    fs::write(&target, "old deck\n").unwrap();
    let link = workspace.path("link.inp");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();
    persist(&deck, &link).unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&target).unwrap(), deck.text());
}

#[rstest]
fn persist_to_missing_directory(workspace: Workspace, mesh: RectilinearMesh, bounds: IntervalCounts) {
    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();
    let err = persist(&deck, workspace.path("nope").join("deck.inp")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

/// Mesh from some other tool that only supports unstructured grids
struct Tetrahedral;

impl StructuredMesh for Tetrahedral {
    fn divisions(&self, _axis: Axis) -> partisn::Result<&[f64]> {
        Err(Error::invalid("no divisions on an unstructured mesh"))
    }

    fn cells(&self) -> &[Cell] {
        &[]
    }

    fn is_structured(&self) -> bool {
        false
    }
}

#[rstest]
fn unstructured_mesh_is_unsupported(workspace: Workspace, bounds: IntervalCounts) {
    let err = synthesize(&Tetrahedral, &bounds, &workspace.library).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperation { .. }));
}

/// External provider that reports more cells than its divisions allow
struct Overfilled {
    cells: Vec<Cell>,
}

impl StructuredMesh for Overfilled {
    fn divisions(&self, axis: Axis) -> partisn::Result<&[f64]> {
        match axis {
            Axis::X => Ok(X_DIVISIONS),
            _ => Ok(UNIT_DIVISIONS),
        }
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

const X_DIVISIONS: &[f64] = &[0.0, 1.0, 2.0];
const UNIT_DIVISIONS: &[f64] = &[0.0, 1.0];

#[rstest]
fn cell_count_contradicting_divisions(workspace: Workspace, bounds: IntervalCounts) {
    let mesh = Overfilled {
        cells: vec![Cell::default(); 5],
    };
    let err = synthesize(&mesh, &bounds, &workspace.library).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[rstest]
fn large_mesh_lines_fit_width(workspace: Workspace) {
    let x: Vec<f64> = (0..=40).map(|i| -100.0 + 5.0 * i as f64).collect();
    let y: Vec<f64> = (0..=10).map(|i| 2.0 * i as f64).collect();
    let mesh = RectilinearMesh::new(x, y, vec![0.0, 50.0, 100.0]).unwrap();
    let bounds = IntervalCounts::uniform(&mesh, 3).unwrap();

    let deck = synthesize(&mesh, &bounds, &workspace.library).unwrap();
    let geometry: Vec<&str> = deck
        .text()
        .lines()
        .skip_while(|l| !l.starts_with("/ coarse bins"))
        .take_while(|l| !l.starts_with("* zone"))
        .collect();
    assert!(geometry.iter().all(|l| l.chars().count() <= 50));

    // one zone per cell once the continuation lines are joined
    let zones: String = geometry
        .iter()
        .skip_while(|l| !l.starts_with("zones="))
        .copied()
        .collect();
    assert_eq!(zones.split_whitespace().count(), 1 + 40 * 10 * 2);
}
