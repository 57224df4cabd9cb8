//! End-to-end coverage of the PCN file codec via the filesystem.

use urp_bdd::pcn::{self, Cube, PcnError};

#[test]
fn writes_and_reads_back_a_mixed_cube_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.pcn");

    let cubes = vec![
        Cube::new(vec![1, -3]),
        Cube::new(vec![2]),
        Cube::dont_care(),
    ];
    pcn::write(&path, &cubes, 3).unwrap();

    let value = pcn::parse(&path).unwrap();
    assert_eq!(value.num_vars, 3);
    assert_eq!(value.cubes.len(), 3);
    assert!(value.cubes.contains(&Cube::dont_care()));
}

#[test]
fn duplicate_cubes_collapse_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.pcn");

    let cubes = vec![Cube::new(vec![1, 2]), Cube::new(vec![2, 1])];
    pcn::write(&path, &cubes, 2).unwrap();

    let value = pcn::parse(&path).unwrap();
    assert_eq!(value.cubes.len(), 1);
}

#[test]
fn out_of_range_literal_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.pcn");
    std::fs::write(&path, "2\n1\n1 3\n").unwrap();

    let err = pcn::parse(&path).unwrap_err();
    assert!(matches!(err, PcnError::BadPcnFile { .. }));
}

#[test]
fn truncated_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.pcn");
    std::fs::write(&path, "2\n2\n1 1\n").unwrap();

    let err = pcn::parse(&path).unwrap_err();
    assert!(matches!(err, PcnError::BadPcnFile { .. }));
}

#[test]
fn empty_cube_list_round_trips_as_false() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("false.pcn");
    pcn::write(&path, &Vec::new(), 4).unwrap();

    let value = pcn::parse(&path).unwrap();
    assert_eq!(value.num_vars, 4);
    assert!(value.cubes.is_empty());
}
