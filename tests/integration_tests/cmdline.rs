use assert_cmd::Command;
use assertables::assert_contains;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const SVG: &str = r#"<svg viewBox="0 0 1024 1024"><g id="layer-strokes"><path id="s1" d="M 0 0 L 100 100"/></g></svg>"#;

#[test]
fn test_cmdline_help() {
    for bin in ["svg2hanzi", "hanzi-center"] {
        let mut cmd = Command::cargo_bin(bin).expect("binary exists");
        let output = String::from_utf8(cmd.arg("-h").assert().success().get_output().stdout.clone())
            .expect("non-UTF8");
        assert_contains!(output, "Usage");
        assert_contains!(output, "--pad-x");
    }
}

#[test]
fn test_cmdline_bad_arg() {
    let mut cmd = Command::cargo_bin("svg2hanzi").expect("binary exists");
    cmd.arg("--no-such-flag").assert().failure().code(2);
}

#[test]
fn test_cmdline_stdin_stdout() {
    let mut cmd = Command::cargo_bin("svg2hanzi").expect("binary exists");
    let assert = cmd.arg("--center").write_stdin(SVG).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).expect("non-UTF8");
    assert_eq!(
        output.trim_end(),
        r#"{"character":"","strokes":["M 462 562 L 562 462"],"medians":[],"radStrokes":[]}"#
    );
}

#[test]
fn test_cmdline_files() {
    let mut infile = NamedTempFile::new().expect("could not create tmpfile");
    write!(infile, "{SVG}").expect("tmpfile write failed");
    let jsonfile = NamedTempFile::new().expect("could not create outfile");
    Command::cargo_bin("svg2hanzi")
        .expect("binary exists")
        .arg(infile.path())
        .arg("-o")
        .arg(jsonfile.path())
        .args(["--char", "丿"])
        .assert()
        .success();
    let json = fs::read_to_string(jsonfile.path()).expect("readable");
    assert_contains!(json, r#""strokes":["M 0 1024 L 100 924"]"#);

    let centered = NamedTempFile::new().expect("could not create outfile");
    Command::cargo_bin("hanzi-center")
        .expect("binary exists")
        .arg(jsonfile.path())
        .arg("-o")
        .arg(centered.path())
        .args(["--fit", "--pad", "12"])
        .assert()
        .success();
    let json = fs::read_to_string(centered.path()).expect("readable");
    assert_contains!(json, r#""character":"丿""#);
    assert_contains!(json, r#""strokes":["M 12 1012 L 1012 12"]"#);
}

#[test]
fn test_cmdline_failure_keeps_output() {
    let mut infile = NamedTempFile::new().expect("could not create tmpfile");
    write!(infile, "<svg><g id='other'/></svg>").expect("tmpfile write failed");
    let outfile = NamedTempFile::new().expect("could not create outfile");
    fs::write(outfile.path(), "previous").expect("write failed");
    let assert = Command::cargo_bin("svg2hanzi")
        .expect("binary exists")
        .arg(infile.path())
        .arg("-o")
        .arg(outfile.path())
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("non-UTF8");
    assert_contains!(stderr, "MissingLayer");
    assert_eq!(fs::read_to_string(outfile.path()).expect("readable"), "previous");
}

#[test]
fn test_cmdline_same_file() {
    let infile = NamedTempFile::new().expect("could not create tmpfile");
    Command::cargo_bin("hanzi-center")
        .expect("binary exists")
        .arg(infile.path())
        .arg("-o")
        .arg(infile.path())
        .assert()
        .failure();
}
