use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn vermatch_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vermatch").unwrap();
    cmd.current_dir(dir.path())
        .env("VERMATCH_HOME", dir.path().join(".vermatch"))
        .env_remove("VERMATCH_CATALOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_check_prints_clauses() {
    let tmp = TempDir::new().unwrap();
    vermatch_cmd(&tmp)
        .args(["check", ">=1.0,<2.0"])
        .assert()
        .success()
        .stdout(">= 1.0\n< 2.0\n")
        .stderr(predicate::str::contains("2 clauses"));
}

#[test]
fn test_check_rejects_empty_clause() {
    let tmp = TempDir::new().unwrap();
    vermatch_cmd(&tmp)
        .args(["check", ">= 1.0,,< 2.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty clause"));
}

#[test]
fn test_versions_lists_highest_first() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("Versions.toml"),
        "[modules.\"acme/foo\"]\nversions = [\"1.0.0\", \"junk\", \"2.0.0-rc.1\", \"1.10.0\"]\n",
    )
    .unwrap();

    vermatch_cmd(&tmp)
        .args(["versions", "acme/foo"])
        .assert()
        .success()
        .stdout("1.10.0\n1.0.0\n");

    vermatch_cmd(&tmp)
        .args(["versions", "acme/foo", "--prerelease"])
        .assert()
        .success()
        .stdout("2.0.0-rc.1\n1.10.0\n1.0.0\n");
}

#[test]
fn test_versions_unknown_module_warns() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("Versions.toml"),
        "[modules.\"acme/foo\"]\nversions = [\"1.0.0\"]\n",
    )
    .unwrap();

    vermatch_cmd(&tmp)
        .args(["versions", "acme/bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No versions found for acme/bar."))
        .stderr(predicate::str::contains("known: acme/foo"));
}

#[test]
fn test_id_is_stable_and_flag_sensitive() {
    let tmp = TempDir::new().unwrap();
    let first = vermatch_cmd(&tmp)
        .args(["id", "acme/foo", "> 1.0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = vermatch_cmd(&tmp)
        .args(["id", "acme/foo", "> 1.0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let with_pre = vermatch_cmd(&tmp)
        .args(["id", "acme/foo", "> 1.0", "--prerelease"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(first, second);
    assert_ne!(first, with_pre);
    assert_eq!(String::from_utf8(first).unwrap().trim().len(), 64);
}
