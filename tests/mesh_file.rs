use std::fs;

use partisn::mesh::{Axis, IntervalCounts, StructuredMesh};
use partisn::{read_mesh_file, Error};
use tempfile::TempDir;

#[test]
fn example_text_mesh() {
    let input = read_mesh_file("./data/mesh.txt").unwrap();

    assert_eq!(input.mesh.divisions(Axis::X).unwrap(), &[0.0, 10.0, 20.0, 30.0]);
    assert_eq!(input.mesh.cells().len(), 6);
    assert!(input.mesh.cells()[3].is_void());
    assert_eq!(input.mesh.cells()[1].materials.len(), 2);

    let bounds = input.bounds.unwrap();
    assert_eq!(bounds, IntervalCounts::new(vec![5, 10, 5], vec![6, 6], vec![20]));
    assert!(bounds.validate(&input.mesh).is_ok());
}

#[test]
fn json_mesh() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mesh.json");
    fs::write(
        &path,
        r#"{
            "x": [0.0, 1.0, 2.0],
            "y": [0.0, 1.0],
            "z": [0.0, 1.0],
            "bounds": { "x": [2, 2], "y": [1], "z": [1] }
        }"#,
    )
    .unwrap();

    let input = read_mesh_file(&path).unwrap();
    assert_eq!(input.mesh.cells().len(), 2);
    assert!(input.mesh.cells().iter().all(|c| c.is_void()));
    assert_eq!(input.bounds.unwrap().x, vec![2, 2]);
}

#[test]
fn json_mesh_with_bad_divisions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mesh.json");
    fs::write(&path, r#"{ "x": [1.0, 0.0], "y": [0.0, 1.0], "z": [0.0, 1.0] }"#).unwrap();

    let err = read_mesh_file(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn missing_mesh_file() {
    let err = read_mesh_file("./data/not_a_mesh.txt").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
