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

fn scantree() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("scantree"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_filter_flags() {
    scantree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--exclude-extensions"))
        .stdout(predicate::str::contains("--max-depth"))
        .stdout(predicate::str::contains("--no-tree"));
}

#[test]
fn rejects_unknown_format() {
    let temp = tempdir().unwrap();
    scantree()
        .current_dir(temp.path())
        .args(["-f", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn preview_prints_sorted_tree() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("proj/b.txt"), "b");
    write_file(&temp.path().join("proj/a.txt"), "a");
    write_file(&temp.path().join("proj/sub/zz.md"), "z");

    scantree()
        .current_dir(temp.path())
        .args(["proj", "-o", "out.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "proj/\n    a.txt\n    b.txt\n    sub/\n        zz.md\n",
        ));
}

#[test]
fn markdown_alias_writes_fenced_tree() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("proj/main.rs"), "");

    scantree()
        .current_dir(temp.path())
        .args(["proj", "-f", "md", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# proj\n"))
        .stdout(predicate::str::contains("```\nproj/\n    main.rs\n```\n"));
}

#[test]
fn excluded_file_names_are_dropped() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("proj/.DS_Store"), "");
    write_file(&temp.path().join("proj/secret.env"), "");
    write_file(&temp.path().join("proj/keep.rs"), "");

    scantree()
        .current_dir(temp.path())
        .args(["proj", "--exclude-files", "secret.env", "-f", "json", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"keep.rs\""))
        .stdout(predicate::str::contains("secret.env").not())
        .stdout(predicate::str::contains(".DS_Store").not());
}
