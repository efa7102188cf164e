// tests/integration_tests/edge_cases_test.rs
use super::common::{create_binary_file, create_test_file, setup_scenario_trees};
use anyhow::Result;
use tempfile::TempDir;
use treecmp::{EngineOptions, OneSidedPolicy, PatternSet, compare_trees};

#[test]
fn test_empty_trees() -> Result<()> {
    let left = TempDir::new()?;
    let right = TempDir::new()?;

    let result = compare_trees(
        left.path(),
        right.path(),
        &PatternSet::default(),
        EngineOptions::default(),
    )?;

    assert!(result.is_empty());
    assert_eq!(result.total.ratio, 1.0);
    assert_eq!(result.total.distance, 0);
    assert_eq!(result.total.lines_delta, 0);
    Ok(())
}

#[test]
fn test_nothing_matches() -> Result<()> {
    let (left, right) = setup_scenario_trees()?;

    let result = compare_trees(
        left.path(),
        right.path(),
        &PatternSet::new(&["*.rs"], &[] as &[&str]),
        EngineOptions::default(),
    )?;

    assert!(result.is_empty(), "No file should match *.rs");
    assert_eq!(result.total.ratio, 1.0);
    Ok(())
}

#[test]
fn test_empty_files() -> Result<()> {
    let left = TempDir::new()?;
    let right = TempDir::new()?;
    create_test_file(left.path(), "empty.txt", "")?;
    create_test_file(right.path(), "empty.txt", "")?;
    create_test_file(left.path(), "grows.txt", "")?;
    create_test_file(right.path(), "grows.txt", "twelve chars")?;

    let result = compare_trees(
        left.path(),
        right.path(),
        &PatternSet::default(),
        EngineOptions::default(),
    )?;

    let empty = result.row("empty.txt").expect("empty.txt row");
    assert_eq!((empty.distance, empty.ratio), (0, 1.0));

    let grows = result.row("grows.txt").expect("grows.txt row");
    assert_eq!((grows.distance, grows.ratio), (12, 0.0));
    assert_eq!(grows.lines_delta, 1);
    Ok(())
}

#[test]
fn test_binary_content_is_compared() -> Result<()> {
    let left = TempDir::new()?;
    let right = TempDir::new()?;
    create_binary_file(left.path(), "blob.bin", &[0xff, 0xfe, 0x00, 0x01])?;
    create_binary_file(right.path(), "blob.bin", &[0xff, 0xfe, 0x00, 0x02])?;

    let result = compare_trees(
        left.path(),
        right.path(),
        &PatternSet::default(),
        EngineOptions::default(),
    )?;

    let blob = result.row("blob.bin").expect("blob.bin row");
    assert_eq!(blob.distance, 1);
    assert_eq!(blob.length, 4);
    Ok(())
}

#[test]
fn test_skip_one_sided() -> Result<()> {
    let (left, right) = setup_scenario_trees()?;

    let result = compare_trees(
        left.path(),
        right.path(),
        &PatternSet::default(),
        EngineOptions {
            one_sided: OneSidedPolicy::Skip,
            ..EngineOptions::default()
        },
    )?;

    assert_eq!(result.rows.len(), 1);
    assert!((result.total.ratio - 0.8).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_empty_one_sided_file_is_identical() -> Result<()> {
    let left = TempDir::new()?;
    let right = TempDir::new()?;
    create_test_file(left.path(), "gone.txt", "")?;

    let result = compare_trees(
        left.path(),
        right.path(),
        &PatternSet::default(),
        EngineOptions::default(),
    )?;

    let gone = result.row("gone.txt").expect("gone.txt row");
    assert_eq!(gone.ratio, 1.0, "An empty file against the implied empty side is identical");
    Ok(())
}
