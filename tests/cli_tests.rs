//! Integration tests for the typegen command line

use std::fs;
use std::process::Command;

use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;

fn typegen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_typegen"))
}

#[test]
fn test_help_flag() {
    typegen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--types"))
        .stdout(predicate::str::contains("--dir"));
}

#[test]
fn test_format_help() {
    typegen()
        .arg("--format-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[[types_list]]"))
        .stdout(predicate::str::contains("@k@"));
}

#[test]
fn test_generates_into_dir() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let types = src.path().join("types.toml");
    fs::write(
        &types,
        r#"types_list = [{ TYPE = "int", SUFFIX = "i" }, { TYPE = "float", SUFFIX = "f" }]"#,
    )
    .unwrap();
    let template = src.path().join("tmpl_@SUFFIX@.c");
    fs::write(&template, "@TYPE@ value;\n").unwrap();

    typegen()
        .arg("-f")
        .arg(&types)
        .arg("--dir")
        .arg(out.path())
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(out.path().join("tmpl_i.c")).unwrap(),
        "int value;\n"
    );
    assert_eq!(
        fs::read_to_string(out.path().join("tmpl_f.c")).unwrap(),
        "float value;\n"
    );
}

#[test]
fn test_defaults_to_current_directory() {
    let work = tempfile::tempdir().unwrap();
    fs::write(work.path().join("types.toml"), r#"types_list = [{ t = "d" }]"#).unwrap();
    fs::write(work.path().join("buf@t@.h"), "@t@\n").unwrap();

    typegen()
        .current_dir(work.path())
        .args(["-f", "types.toml", "buf@t@.h"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(work.path().join("bufd.h")).unwrap(),
        "d\n"
    );
}

#[test]
fn test_dry_run_lists_destinations() {
    let work = tempfile::tempdir().unwrap();
    fs::write(
        work.path().join("types.toml"),
        r#"types_list = [{ t = "d" }, { t = "z" }]"#,
    )
    .unwrap();
    fs::write(work.path().join("buf@t@.h"), "@t@\n").unwrap();

    typegen()
        .current_dir(work.path())
        .args(["-n", "-f", "types.toml", "-d", "out", "buf@t@.h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bufd.h"))
        .stdout(predicate::str::contains("bufz.h"));

    assert!(!work.path().join("out").exists());
}

#[test]
fn test_missing_types_list_fails() {
    let work = tempfile::tempdir().unwrap();
    fs::write(work.path().join("types.toml"), "name = \"empty\"\n").unwrap();

    typegen()
        .current_dir(work.path())
        .args(["-f", "types.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("types_list not found"))
        .stderr(predicate::str::contains("types.toml"));
}

#[test]
fn test_syntax_error_reports_descriptor() {
    let work = tempfile::tempdir().unwrap();
    fs::write(work.path().join("broken.toml"), "types_list = [\n  { t = }\n]\n").unwrap();

    typegen()
        .current_dir(work.path())
        .args(["-f", "broken.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.toml"));
}
