// tests/integration_tests/end_to_end_test.rs
use super::common::{setup_project_tree, setup_scenario_trees};
use anyhow::Result;
use tempfile::TempDir;
use treecmp::{EngineOptions, Method, PairKind, PatternSet, compare_trees};

#[test]
fn test_rename_scenario() -> Result<()> {
    let (left, right) = setup_scenario_trees()?;

    let result = compare_trees(
        left.path(),
        right.path(),
        &PatternSet::default(),
        EngineOptions::default(),
    )?;

    let rows: Vec<(&str, u64, Option<PairKind>)> = result
        .rows
        .iter()
        .map(|r| (r.path.as_str(), r.distance, r.kind))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("a.txt", 1, Some(PairKind::Common)),
            ("b.txt", 5, Some(PairKind::LeftOnly)),
            ("c.txt", 5, Some(PairKind::RightOnly)),
        ],
        "A rename is not detected: old name left-only, new name right-only"
    );

    let a = result.row("a.txt").expect("a.txt row");
    assert!((a.ratio - 0.8).abs() < 1e-12);
    assert_eq!(result.row("b.txt").map(|r| r.ratio), Some(0.0));
    assert_eq!(result.row("c.txt").map(|r| r.ratio), Some(0.0));

    let expected_total = 1.0 - 11.0 / 15.0;
    assert!(
        (result.total.ratio - expected_total).abs() < 1e-12,
        "Total ratio should be 1 - 11/15, got {}",
        result.total.ratio
    );
    Ok(())
}

#[test]
fn test_identity() -> Result<()> {
    let tree = TempDir::new()?;
    setup_project_tree(tree.path())?;

    let result = compare_trees(
        tree.path(),
        tree.path(),
        &PatternSet::default(),
        EngineOptions::default(),
    )?;

    assert_eq!(result.rows.len(), 8);
    for row in &result.rows {
        assert_eq!(row.kind, Some(PairKind::Common), "{} should be common", row.path);
        assert_eq!(row.distance, 0, "{} should be unchanged", row.path);
        assert_eq!(row.ratio, 1.0, "{} should be identical", row.path);
        assert_eq!(row.lines_delta, 0);
    }
    assert_eq!(result.total.ratio, 1.0);
    assert_eq!(result.total.distance, 0);
    Ok(())
}

#[test]
fn test_determinism() -> Result<()> {
    let left = TempDir::new()?;
    let right = TempDir::new()?;
    setup_project_tree(left.path())?;
    setup_project_tree(right.path())?;
    super::common::create_test_file(right.path(), "src/lib.rs", "pub fn lib() -> u8 { 1 }\n")?;
    super::common::create_test_file(right.path(), "src/new.rs", "pub fn new() {}\n")?;

    let run = |jobs: usize| {
        compare_trees(
            left.path(),
            right.path(),
            &PatternSet::default(),
            EngineOptions {
                jobs,
                method: Method::Distance,
                ..EngineOptions::default()
            },
        )
    };

    let first = run(1)?;
    let second = run(4)?;
    assert_eq!(first, second, "Worker count must not change the result");

    let paths: Vec<&str> = first.rows.iter().map(|r| r.path.as_str()).collect();
    let mut sorted = paths.clone();
    sorted.sort_unstable();
    assert_eq!(paths, sorted, "Rows should be sorted by path");
    Ok(())
}
