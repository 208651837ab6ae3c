//! Integration tests for the snippetgen binary.
//!
//! These tests exercise the compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use snippet_test_utils::TestTree;

const SOURCE: &str = "class Demo\n{\n    #region Snippet:Demo\n    Run();\n    #endregion\n}\n";

/// Get a Command for the snippetgen binary
fn snippetgen() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("snippetgen"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    snippetgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--check"))
        .stdout(predicate::str::contains("[ROOT]"));
}

#[test]
fn test_version_output() {
    snippetgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("snippetgen"));
}

// ============================================================================
// Processing Tests
// ============================================================================

#[test]
fn test_updates_document_in_place() {
    let tree = TestTree::new()
        .with_file("src/Demo.cs", SOURCE)
        .with_file("docs/README.md", "```csharp Snippet:Demo\n```\n");

    snippetgen()
        .arg(tree.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"))
        .stdout(predicate::str::contains("docs/README.md"))
        .stderr(predicate::str::contains("Replaced"));

    tree.assert_file_eq("docs/README.md", "```csharp Snippet:Demo\nRun();\n```\n");
}

#[test]
fn test_logs_discovered_snippets() {
    let tree = TestTree::new()
        .with_file("src/Demo.cs", SOURCE)
        .with_file("README.md", "```csharp Snippet:Demo\n```\n");

    snippetgen()
        .arg(tree.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("Discovered snippet"))
        .stderr(predicate::str::contains("Snippet:Demo"))
        .stderr(predicate::str::contains("Processing"));
}

#[test]
fn test_quiet_suppresses_logs() {
    let tree = TestTree::new()
        .with_file("src/Demo.cs", SOURCE)
        .with_file("README.md", "```csharp Snippet:Demo\n```\n");

    snippetgen()
        .arg(tree.root())
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_snippet_exits_non_zero() {
    let tree = TestTree::new()
        .with_file("src/Demo.cs", SOURCE)
        .with_file("README.md", "```csharp Snippet:Absent\n```\n");

    snippetgen()
        .arg(tree.root())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Snippet 'Snippet:Absent' not found"));
}

#[test]
fn test_duplicate_snippet_exits_non_zero() {
    let tree = TestTree::new()
        .with_file("src/Demo.cs", SOURCE)
        .with_file("src/Copy.cs", SOURCE)
        .with_file("README.md", "```csharp Snippet:Demo\n```\n");

    snippetgen()
        .arg(tree.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Multiple snippets with the name 'Snippet:Demo'"));

    tree.assert_file_eq("README.md", "```csharp Snippet:Demo\n```\n");
}

#[test]
fn test_missing_root_exits_non_zero() {
    snippetgen()
        .arg("/nonexistent/snippetgen-root")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_check_fails_on_stale_document() {
    let stale = "```csharp Snippet:Demo\nOld();\n```\n";
    let tree = TestTree::new()
        .with_file("src/Demo.cs", SOURCE)
        .with_file("README.md", stale);

    snippetgen()
        .arg(tree.root())
        .arg("--check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("stale"))
        .stdout(predicate::str::contains("+Run();"))
        .stderr(predicate::str::contains("1 document(s) out of date"));

    tree.assert_file_eq("README.md", stale);
}

#[test]
fn test_check_passes_when_current() {
    let tree = TestTree::new()
        .with_file("src/Demo.cs", SOURCE)
        .with_file("README.md", "```csharp Snippet:Demo\nRun();\n```\n");

    snippetgen().arg(tree.root()).arg("--check").assert().success();
}

#[test]
fn test_extension_flags_override_defaults() {
    let tree = TestTree::new()
        .with_file("src/demo.rs", "// #region Snippet:Rs\nlet x = 1;\n// #endregion\n")
        .with_file("guide.txt", "```rust Snippet:Rs\n```\n");

    snippetgen()
        .arg(tree.root())
        .args(["--source-ext", "rs", "--doc-ext", "txt"])
        .assert()
        .success();

    tree.assert_file_eq("guide.txt", "```rust Snippet:Rs\nlet x = 1;\n```\n");
}

#[test]
fn test_config_file_is_discovered() {
    let tree = TestTree::new()
        .with_file(".snippetgen.toml", "source_extensions = [\"rs\"]\nexclude = [\"vendor\"]\n")
        .with_file("src/demo.rs", "// #region Snippet:Rs\nlet x = 1;\n// #endregion\n")
        .with_file("vendor/README.md", "```rust Snippet:Unknown\n```\n")
        .with_file("README.md", "```rust Snippet:Rs\n```\n");

    snippetgen().arg(tree.root()).assert().success();

    tree.assert_file_eq("README.md", "```rust Snippet:Rs\nlet x = 1;\n```\n");
}

#[test]
fn test_invalid_config_exits_non_zero() {
    let tree = TestTree::new().with_file(".snippetgen.toml", "source_extensions = 3\n");

    snippetgen()
        .arg(tree.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML config"));
}
