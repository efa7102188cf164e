// tests/integration_tests/filter_test.rs
use super::common::setup_project_tree;
use anyhow::Result;
use tempfile::TempDir;
use treecmp::{AggregateResult, EngineOptions, PatternSet, compare_trees};

const NONE: [&str; 0] = [];

fn compare_project(pattern_set: &PatternSet) -> Result<AggregateResult> {
    let left = TempDir::new()?;
    let right = TempDir::new()?;
    setup_project_tree(left.path())?;
    setup_project_tree(right.path())?;
    compare_trees(left.path(), right.path(), pattern_set, EngineOptions::default())
}

#[test]
fn test_exclude_test_directories() -> Result<()> {
    let result = compare_project(&PatternSet::new(&NONE, &["*/test/*"]))?;

    assert!(!result.is_empty());
    for row in &result.rows {
        assert!(
            !row.path.split('/').any(|segment| segment == "test"),
            "{} should have been excluded",
            row.path
        );
    }
    assert!(result.row("src/lib.rs").is_some());
    Ok(())
}

#[test]
fn test_include_extension() -> Result<()> {
    let result = compare_project(&PatternSet::new(&["*.sol"], &NONE))?;

    let paths: Vec<&str> = result.rows.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "contracts/Token.sol",
            "contracts/Vault.sol",
            "contracts/test/Token.t.sol",
            "test/helpers.sol",
        ]
    );
    assert!(paths.iter().all(|p| p.ends_with(".sol")));
    Ok(())
}

#[test]
fn test_exclude_wins_over_include() -> Result<()> {
    let result = compare_project(&PatternSet::new(&["*.sol"], &["*/test/*", "Vault.sol"]))?;

    let paths: Vec<&str> = result.rows.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["contracts/Token.sol"]);
    Ok(())
}

#[test]
fn test_brace_group_include() -> Result<()> {
    let result = compare_project(&PatternSet::new(&["*.{rs,md}"], &NONE))?;

    let paths: Vec<&str> = result.rows.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["README.md", "src/lib.rs", "src/test/lib_test.rs"]);
    Ok(())
}

#[test]
fn test_malformed_patterns_do_not_abort() -> Result<()> {
    let result = compare_project(&PatternSet::new(&["[broken", "*.md"], &["{oops"]))?;

    let paths: Vec<&str> = result.rows.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["README.md"], "Valid patterns still apply");
    Ok(())
}
