use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("techform");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("techform"))
        .stdout(contains("--email-suffix"));
}

#[test]
fn rejects_existing_output_without_force() {
    let path = std::env::temp_dir().join(format!("techform-help-{}.json", std::process::id()));
    std::fs::write(&path, "{}").expect("seed output file");

    let mut cmd = cargo::cargo_bin_cmd!("techform");
    cmd.arg("-o")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("already exists"));

    let _ = std::fs::remove_file(&path);
}
