// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    create_binary_file(dir, name, content.as_bytes())
}

pub fn create_binary_file(dir: &Path, name: &str, content: &[u8]) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    Ok(())
}

/// The rename scenario: `b.txt` on the left became `c.txt` on the right.
pub fn setup_scenario_trees() -> Result<(TempDir, TempDir)> {
    let left = TempDir::new()?;
    let right = TempDir::new()?;

    create_test_file(left.path(), "a.txt", "hello")?;
    create_test_file(left.path(), "b.txt", "world")?;

    create_test_file(right.path(), "a.txt", "hallo")?;
    create_test_file(right.path(), "c.txt", "world")?;

    Ok((left, right))
}

/// A small project layout with sources, tests and build output.
pub fn setup_project_tree(dir: &Path) -> Result<()> {
    create_test_file(dir, "contracts/Token.sol", "contract Token {\n    uint total;\n}\n")?;
    create_test_file(dir, "contracts/Vault.sol", "contract Vault {}\n")?;
    create_test_file(dir, "contracts/test/Token.t.sol", "contract TokenTest {}\n")?;
    create_test_file(dir, "test/helpers.sol", "library Helpers {}\n")?;
    create_test_file(dir, "src/lib.rs", "pub fn lib() {}\n")?;
    create_test_file(dir, "src/test/lib_test.rs", "#[test]\nfn t() {}\n")?;
    create_test_file(dir, "build/out/Token.json", "{}\n")?;
    create_test_file(dir, "README.md", "# Project\n\nNotes.\n")?;
    Ok(())
}
