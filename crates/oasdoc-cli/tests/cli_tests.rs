use std::fs;
use std::process::Command;

const PETSTORE: &str = include_str!("../../oasdoc-core/tests/fixtures/petstore.yaml");

fn oasdoc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_oasdoc"))
}

#[test]
fn convert_writes_markdown_file() {
    let tmp = tempfile::tempdir().unwrap();
    let spec = tmp.path().join("petstore.yaml");
    let out = tmp.path().join("api.md");
    fs::write(&spec, PETSTORE).unwrap();

    let status = oasdoc()
        .current_dir(tmp.path())
        .args(["convert", "--input"])
        .arg(&spec)
        .arg("--output")
        .arg(&out)
        .args(["--format", "markdown", "--toc"])
        .status()
        .unwrap();
    assert!(status.success());

    let rendered = fs::read_to_string(&out).unwrap();
    assert!(rendered.starts_with("# Pet Store\n"));
    assert!(rendered.contains("| /pets | [`GET`](#get-pets) | List pets |"));
    assert!(rendered.contains("<a name=\"Pet\"></a>"));
}

#[test]
fn convert_defaults_to_stdout() {
    let tmp = tempfile::tempdir().unwrap();
    let spec = tmp.path().join("petstore.yaml");
    fs::write(&spec, PETSTORE).unwrap();

    let output = oasdoc()
        .current_dir(tmp.path())
        .args(["convert", "--format", "confluence", "--input"])
        .arg(&spec)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("h1. Pet Store\n"));
    assert!(stdout.contains("{anchor:get-pets}"));
}

#[test]
fn validate_accepts_good_and_rejects_bad() {
    let tmp = tempfile::tempdir().unwrap();
    let good = tmp.path().join("good.yaml");
    let bad = tmp.path().join("bad.yaml");
    fs::write(&good, PETSTORE).unwrap();
    fs::write(&bad, "swagger: [unclosed").unwrap();

    let ok = oasdoc()
        .current_dir(tmp.path())
        .args(["validate", "--input"])
        .arg(&good)
        .status()
        .unwrap();
    assert!(ok.success());

    let err = oasdoc()
        .current_dir(tmp.path())
        .args(["validate", "--input"])
        .arg(&bad)
        .status()
        .unwrap();
    assert!(!err.success());
}

#[test]
fn init_writes_config_and_convert_picks_it_up() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("swagger.yaml"), PETSTORE).unwrap();

    let status = oasdoc()
        .current_dir(tmp.path())
        .arg("init")
        .status()
        .unwrap();
    assert!(status.success());
    assert!(tmp.path().join(".oasdoc.yaml").exists());

    // Second init without --force refuses to clobber.
    let again = oasdoc()
        .current_dir(tmp.path())
        .arg("init")
        .status()
        .unwrap();
    assert!(!again.success());

    // Config supplies the input path; no flags needed.
    let output = oasdoc()
        .current_dir(tmp.path())
        .arg("convert")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# Pet Store\n"));
}
