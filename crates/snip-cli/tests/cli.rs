use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Each test points SNIP_CONFIG_DIR at its own tempdir so stores never
// collide. The clipboard path (`snip <key>`) needs a display server and is
// exercised by the unit tests on the expander instead.
fn snip(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("snip").unwrap();
    cmd.env("SNIP_CONFIG_DIR", dir.path());
    cmd
}

#[test]
fn no_arguments_prints_help() {
    let dir = TempDir::new().unwrap();
    snip(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn create_list_update_delete_cycle() {
    let dir = TempDir::new().unwrap();

    snip(&dir)
        .arg("greet='hello $1'")
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully created"));

    snip(&dir).arg("ls").assert().success().stdout(
        predicate::str::contains("greet")
            .and(predicate::str::contains("hello $1"))
            .and(predicate::str::contains("KEY")),
    );

    snip(&dir)
        .args(["update", "greet='hi $1'"])
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully updated"));

    snip(&dir)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("hi $1"));

    snip(&dir)
        .args(["delete", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully deleted"));

    snip(&dir)
        .args(["delete", "greet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no snippet found"));
}

#[test]
fn duplicate_create_fails() {
    let dir = TempDir::new().unwrap();

    snip(&dir).arg("dup='one'").assert().success();
    snip(&dir)
        .arg("dup='two'")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn update_of_missing_key_fails() {
    let dir = TempDir::new().unwrap();

    snip(&dir)
        .args(["update", "ghost='boo'"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no snippet found"));
}

#[test]
fn reset_empties_the_store() {
    let dir = TempDir::new().unwrap();

    snip(&dir).arg("a='1'").assert().success();
    snip(&dir).arg("b='2'").assert().success();
    snip(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully reset"));

    snip(&dir)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 snippets"));
}

#[test]
fn export_then_import_into_a_fresh_store() {
    let dir = TempDir::new().unwrap();
    snip(&dir).arg("greet='hello $1'").assert().success();
    snip(&dir).arg("listy='a, b'").assert().success();

    let out = TempDir::new().unwrap();
    snip(&dir)
        .args(["export", "--path"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully created at path"));

    let csv = exported_file(out.path().into());

    let fresh = TempDir::new().unwrap();
    snip(&fresh)
        .args(["import", "--path"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully imported"));

    snip(&fresh).arg("ls").assert().success().stdout(
        predicate::str::contains("hello $1").and(predicate::str::contains("a, b")),
    );
}

#[test]
fn import_keeps_existing_values_on_conflict() {
    let dir = TempDir::new().unwrap();
    snip(&dir).arg("kept='old'").assert().success();

    let csv = TempDir::new().unwrap();
    let file = csv.path().join("snippets.csv");
    fs::write(&file, "key,value\nkept,new\nfresh,value\n").unwrap();

    snip(&dir).args(["import", "--path"]).arg(&file).assert().success();

    snip(&dir).arg("ls").assert().success().stdout(
        predicate::str::contains("old")
            .and(predicate::str::contains("fresh"))
            .and(predicate::str::contains("new").not()),
    );
}

#[test]
fn import_without_a_source_fails() {
    let dir = TempDir::new().unwrap();

    snip(&dir)
        .arg("import")
        .assert()
        .failure()
        .stderr(predicate::str::contains("path or url"));
}

#[test]
fn import_of_header_only_csv_fails() {
    let dir = TempDir::new().unwrap();
    let csv = TempDir::new().unwrap();
    let file = csv.path().join("empty.csv");
    fs::write(&file, "key,value\n").unwrap();

    snip(&dir)
        .args(["import", "--path"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid snippets"));
}

fn exported_file(dir: PathBuf) -> PathBuf {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);
    entries.pop().unwrap()
}
