use assert_cmd::cargo;
use rstest::rstest;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, content).expect("Failed to write file");
}

#[test]
fn test_cli_default_form_converts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "doc.md", "Hello\n=====\n\nSome *text*.");
    let output = dir.path().join("doc.html");

    let mut cmd = cargo::cargo_bin_cmd!("mdtohtml");
    cmd.arg(dir.path().join("doc.md"))
        .arg(&output)
        .assert()
        .success()
        .code(0);

    let html = fs::read_to_string(&output)?;
    assert!(html.contains("<title>Hello</title>"));
    assert!(html.contains("<em>text</em>"));
    assert_eq!(html.matches("<style>").count(), 1);
    Ok(())
}

#[test]
fn test_cli_convert_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "in.md", "# Title\n\n\"quoted\" 1/2");
    let output = dir.path().join("out").join("in.html");

    let assert = cargo::cargo_bin_cmd!("mdtohtml")
        .arg("convert")
        .arg(dir.path().join("in.md"))
        .arg(&output)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.contains("Converted"));

    let html = fs::read_to_string(&output)?;
    assert!(html.contains('\u{201C}'));
    assert!(html.contains('½'));
    Ok(())
}

#[rstest]
#[case::smartypants_off(vec!["--smartypants=false", "--latexdashes=false", "--fractions=false"], false, false)]
#[case::fractions_off(vec!["--fractions=false"], true, false)]
#[case::explicit_true(vec!["--smartypants=true", "--fractions"], true, true)]
fn test_cli_typography_flags(
    #[case] flags: Vec<&str>,
    #[case] expect_quotes: bool,
    #[case] expect_fraction: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "in.md", "\"quoted\" and 1/2 cup");
    let output = dir.path().join("in.html");

    cargo::cargo_bin_cmd!("mdtohtml")
        .arg("convert")
        .args(&flags)
        .arg(dir.path().join("in.md"))
        .arg(&output)
        .assert()
        .success();

    let html = fs::read_to_string(&output)?;
    assert_eq!(html.contains('\u{201C}'), expect_quotes);
    assert_eq!(html.contains('½'), expect_fraction);
    Ok(())
}

#[test]
fn test_cli_convert_missing_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    let assert = cargo::cargo_bin_cmd!("mdtohtml")
        .arg("convert")
        .arg(dir.path().join("missing.md"))
        .arg(dir.path().join("out.html"))
        .assert()
        .failure()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone())?;
    assert!(stderr.contains("Input does not exist"));
    assert!(!dir.path().join("out.html").exists());
    Ok(())
}

#[test]
fn test_cli_batch() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = dir.path().join("docs");
    let out = dir.path().join("site");
    write_file(&input, "a.md", "# A");
    write_file(&input, "b.md", "# B");
    write_file(&input, "notes.txt", "ignored");

    let assert = cargo::cargo_bin_cmd!("mdtohtml")
        .arg("batch")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert!(stdout.contains("Converting 2 files..."));
    assert!(stdout.contains("Successfully converted 2 files"));
    assert!(out.join("a.html").exists());
    assert!(out.join("b.html").exists());
    assert!(!out.join("notes.html").exists());
    Ok(())
}

#[rstest]
#[case::flat(vec![], false)]
#[case::recursive(vec!["--recursive"], true)]
#[case::recursive_short(vec!["-r"], true)]
fn test_cli_batch_recursion(
    #[case] flags: Vec<&str>,
    #[case] expect_nested: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = dir.path().join("docs");
    let out = dir.path().join("site");
    write_file(&input, "top.md", "# Top");
    write_file(&input, "guide/nested.md", "# Nested");

    cargo::cargo_bin_cmd!("mdtohtml")
        .arg("batch")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out)
        .args(&flags)
        .assert()
        .success();

    assert!(out.join("top.html").exists());
    assert_eq!(out.join("guide").join("nested.html").exists(), expect_nested);
    Ok(())
}

#[test]
fn test_cli_batch_no_matches() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "readme.txt", "text");

    let assert = cargo::cargo_bin_cmd!("mdtohtml")
        .arg("batch")
        .arg(dir.path())
        .arg("-o")
        .arg(dir.path().join("out"))
        .arg("-p")
        .arg("*.markdown")
        .assert()
        .success()
        .code(0);
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.contains("No files matching pattern '*.markdown' found"));
    Ok(())
}

#[test]
fn test_cli_batch_missing_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    let assert = cargo::cargo_bin_cmd!("mdtohtml")
        .arg("batch")
        .arg(dir.path().join("nope"))
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone())?;
    assert!(stderr.contains("Directory does not exist"));
    Ok(())
}

#[test]
fn test_cli_validate() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "doc.md", "# Doc\n\n- item");

    let assert = cargo::cargo_bin_cmd!("mdtohtml")
        .arg("validate")
        .arg(dir.path().join("doc.md"))
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.contains("is valid Markdown"));

    let entries = fs::read_dir(dir.path())?.count();
    assert_eq!(entries, 1);
    Ok(())
}

#[test]
fn test_cli_validate_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    cargo::cargo_bin_cmd!("mdtohtml")
        .arg("validate")
        .arg(dir.path().join("missing.md"))
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_cli_version() -> Result<(), Box<dyn std::error::Error>> {
    let assert = cargo::cargo_bin_cmd!("mdtohtml")
        .arg("version")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
