use std::fs;
use std::path::Path;

use predicates::prelude::*;
use tempfile::TempDir;

const ALPHA: &str = "\
package demo;

import java.util.List;

class Alpha {
    private int total;

    public void bump() {
        this.total = this.total + 1;
    }
}
";

const BETA: &str = "\
package demo;

class Beta {
    private int unusedCount;

    public int size() {
        return 4;
    }
}
";

const GAMMA: &str = "\
package demo;

import java.util.List;

class Gamma {
    private List<String> names;

    public int size() {
        return names.size();
    }
}
";

/// One file with an unused import, one with an unused private field, one
/// fully clean.
fn fixture_tree() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "A.java", ALPHA);
    write_file(dir.path(), "B.java", BETA);
    write_file(dir.path(), "C.java", GAMMA);
    dir
}

fn write_file(root: &Path, name: &str, content: &str) {
    fs::write(root.join(name), content).expect("write fixture");
}

#[test]
fn imports_exit_code_counts_flagged_files() {
    let dir = fixture_tree();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("javasweep");
    cmd.args(["imports", dir.path().to_str().expect("utf8")]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("A.java"))
        .stdout(predicate::str::contains("java.util.List"));
}

#[test]
fn imports_clean_tree_exits_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "C.java", GAMMA);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("javasweep");
    cmd.args(["imports", dir.path().to_str().expect("utf8")]);
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("No unused imports found"));
}

#[test]
fn members_reports_single_unused_field() {
    let dir = fixture_tree();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("javasweep");
    cmd.args(["members", dir.path().to_str().expect("utf8")]);
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("Files scanned: 3"))
        .stdout(predicate::str::contains("Unused members: 1"))
        .stdout(predicate::str::contains("Unused percentage: 33.33%"))
        .stdout(predicate::str::contains("[private_field] Beta.unusedCount (B.java)"));
}

#[test]
fn members_fail_on_findings_exits_one() {
    let dir = fixture_tree();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("javasweep");
    cmd.args([
        "members",
        dir.path().to_str().expect("utf8"),
        "--fail-on-findings",
    ]);
    cmd.assert().code(1);
}

#[test]
fn members_missing_root_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("no-such-dir");
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("javasweep");
    cmd.args(["members", missing.to_str().expect("utf8")]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn members_ai_format_emits_json_lines() {
    let dir = fixture_tree();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("javasweep");
    cmd.args([
        "members",
        dir.path().to_str().expect("utf8"),
        "--format",
        "ai",
    ]);
    let out = cmd.assert().code(0).get_output().stdout.clone();
    let text = String::from_utf8(out).expect("utf8");
    let mut lines = text.lines();

    let summary: serde_json::Value =
        serde_json::from_str(lines.next().expect("summary line")).expect("json");
    assert_eq!(summary["summary"]["unused_members"], 1);

    let finding: serde_json::Value =
        serde_json::from_str(lines.next().expect("finding line")).expect("json");
    assert_eq!(finding["k"], "field");
    assert_eq!(finding["t"], "Beta");
    assert_eq!(finding["n"], "unusedCount");
}

#[test]
fn reports_are_idempotent_across_runs() {
    let dir = fixture_tree();
    let path = dir.path().to_str().expect("utf8");

    let first = run_members(path);
    let second = run_members(path);
    assert_eq!(first, second);

    let first = run_imports(path);
    let second = run_imports(path);
    assert_eq!(first, second);
}

fn run_members(path: &str) -> Vec<u8> {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("javasweep");
    cmd.args(["members", path]);
    cmd.assert().code(0).get_output().stdout.clone()
}

fn run_imports(path: &str) -> Vec<u8> {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("javasweep");
    cmd.args(["imports", path]);
    cmd.assert().code(1).get_output().stdout.clone()
}
