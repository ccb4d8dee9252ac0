use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn treesnap_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("treesnap").expect("Failed to find treesnap binary");
    cmd.current_dir(dir);
    cmd
}

fn read_snapshot(dir: &Path) -> String {
    fs::read_to_string(dir.join("project_contents.txt")).expect("snapshot written")
}

#[test]
fn writes_snapshot_without_filters() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello\n");
    write_file(&temp.path().join("b/c.txt"), "world\n");

    treesnap_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Output File"));

    let output = read_snapshot(temp.path());
    assert!(output.starts_with("Project Structure:\n"));
    assert!(output.contains("a.txt"));
    assert!(output.contains("b/c.txt"));
    assert!(output.contains("File Contents:"));
    assert!(output.contains("hello"));
    assert!(output.contains("world"));
}

#[test]
fn ignore_list_prunes_directories() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello\n");
    write_file(&temp.path().join("b/c.txt"), "world\n");
    write_file(&temp.path().join(".il"), "b\n");

    treesnap_cmd(temp.path()).arg("--il").assert().success();

    let output = read_snapshot(temp.path());
    assert!(output.contains("a.txt"));
    assert!(!output.contains("c.txt"));
    assert!(!output.contains("world"));
}

#[test]
fn whitelist_restricts_snapshot() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("x.py"), "print('x')\n");
    write_file(&temp.path().join("x.txt"), "notes\n");
    write_file(&temp.path().join(".wl"), "*.py\n");

    treesnap_cmd(temp.path()).arg("--wl").assert().success();

    let output = read_snapshot(temp.path());
    assert!(output.contains("x.py"));
    assert!(!output.contains("x.txt"));
}

#[test]
fn flags_off_means_no_filtering() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello\n");
    write_file(&temp.path().join("b/c.txt"), "world\n");
    // lists present but neither flag given
    write_file(&temp.path().join(".il"), "b\n");
    write_file(&temp.path().join(".wl"), "*.py\n");

    treesnap_cmd(temp.path()).assert().success();

    let output = read_snapshot(temp.path());
    assert!(output.contains("a.txt"));
    assert!(output.contains("b/c.txt"));
}

#[test]
fn show_locations_prints_resolved_paths_and_skips_traversal() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello\n");
    write_file(&temp.path().join(".il"), "b\n");

    treesnap_cmd(temp.path())
        .arg("--show-locations")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("IL file in use:")
                .and(predicate::str::contains("(local)"))
                .and(predicate::str::contains("WL file in use:"))
                .and(predicate::str::contains("(default)")),
        );

    assert!(!temp.path().join("project_contents.txt").exists());
}

#[test]
fn missing_list_file_is_not_fatal() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello\n");

    treesnap_cmd(temp.path())
        .arg("--il")
        .assert()
        .success()
        .stderr(predicate::str::contains("List file not found"));

    let output = read_snapshot(temp.path());
    assert!(output.contains("a.txt"));
}

#[test]
fn consecutive_runs_produce_identical_snapshots() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello\n");
    write_file(&temp.path().join("sub/b.txt"), "world\n");

    treesnap_cmd(temp.path()).assert().success();
    let first = read_snapshot(temp.path());

    treesnap_cmd(temp.path()).assert().success();
    let second = read_snapshot(temp.path());

    assert_eq!(first, second);
}
