//! Integration tests for the boldpress CLI
//!
//! Tests command-line interface functionality including:
//! - Keyword emphasis output
//! - Cover letter and layout generation
//! - Error handling for bad input files

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

/// Test helper to get the CLI binary path
fn get_cli_path() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    if path.ends_with("deps") {
        path.pop(); // Remove "deps" directory
    }
    path.push("boldpress");
    #[cfg(windows)]
    path.set_extension("exe");
    path
}

/// Test helper to create a temporary directory
fn setup_temp_dir() -> TempDir {
    tempdir().expect("Failed to create temp directory")
}

/// Test helper to run CLI command and return output
fn run_cli_command(args: &[&str]) -> Result<std::process::Output> {
    let output = Command::new(get_cli_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let profile = dir.join("profile.json");
    fs::write(
        &profile,
        r#"{
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "0700 000 000",
            "degree": "B.Sc. Statistics"
        }"#,
    )
    .unwrap();

    let template = dir.join("template.json");
    fs::write(
        &template,
        r#"{
            "opening": "I am writing to apply for the {job_title} role at {company}.",
            "body": ["I build reporting pipelines in Python and SQL."],
            "closing": "Thank you for considering my application.",
            "keywords": ["Python", "SQL"]
        }"#,
    )
    .unwrap();

    let layout = dir.join("layout.json");
    fs::write(
        &layout,
        r#"{
            "title": "{name} - CV",
            "keywords": ["Python"],
            "blocks": [
                {"kind": "contact_header"},
                {"kind": "heading", "text": "Summary"},
                {"kind": "paragraph", "text": "Analyst working with Python."},
                {"kind": "bullets", "items": ["Built dashboards"]}
            ]
        }"#,
    )
    .unwrap();

    (profile, template, layout)
}

fn read_document_xml(path: &Path) -> String {
    let file = fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut part = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn test_cli_emphasize_marked_output() {
    let output = run_cli_command(&[
        "emphasize",
        "-k",
        "Python",
        "-k",
        "Senior Python Automation Engineer",
        "Senior Python Automation Engineer using Python",
    ])
    .expect("Failed to run CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        "**Senior Python Automation Engineer** using **Python**"
    );
}

#[test]
fn test_cli_emphasize_segments() {
    let output = run_cli_command(&["emphasize", "--segments", "-k", "python", "I use PYTHON daily"])
        .expect("Failed to run CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["plain\t\"I use \"", "bold\t\"PYTHON\"", "plain\t\" daily\""]
    );
}

#[test]
fn test_cli_emphasize_rejects_empty_keyword() {
    let output = run_cli_command(&["emphasize", "-k", "", "some text"]).expect("Failed to run CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid keyword list"));
}

#[test]
fn test_cli_letter_command() {
    let temp_dir = setup_temp_dir();
    let (profile, template, _) = write_inputs(temp_dir.path());
    let out_dir = temp_dir.path().join("letters");

    let output = run_cli_command(&[
        "letter",
        "--profile",
        profile.to_str().unwrap(),
        "--template",
        template.to_str().unwrap(),
        "--job-title",
        "Data Analyst",
        "--company",
        "Acme Corp",
        "--recruiter",
        "Ms. Smith",
        "--output-dir",
        out_dir.to_str().unwrap(),
        "--date",
        "2025-03-01",
    ])
    .expect("Failed to run CLI");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let docx_path = out_dir.join("cover_letter_Acme_Corp_Data_Analyst.docx");
    let txt_path = out_dir.join("cover_letter_Acme_Corp_Data_Analyst.txt");
    assert!(docx_path.exists());
    assert!(txt_path.exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saved cover letter to:"));
    assert!(stdout.contains("Saved plain-text version to:"));
    assert!(stdout.contains("Preview:"));

    let text = fs::read_to_string(&txt_path).unwrap();
    assert!(text.contains("March 01, 2025"));
    assert!(text.contains("Dear Ms. Smith,"));
    assert!(text.contains("the Data Analyst role at Acme Corp."));

    let xml = read_document_xml(&docx_path);
    assert!(xml.contains(r#"<w:b/></w:rPr><w:t xml:space="preserve">Python</w:t>"#));
    assert!(xml.contains(r#"<w:b/></w:rPr><w:t xml:space="preserve">Acme Corp</w:t>"#));
}

#[test]
fn test_cli_letter_preview_is_wrapped() {
    let temp_dir = setup_temp_dir();
    let (profile, template, _) = write_inputs(temp_dir.path());

    let output = run_cli_command(&[
        "letter",
        "--profile",
        profile.to_str().unwrap(),
        "--template",
        template.to_str().unwrap(),
        "--company",
        "A Company With A Rather Long Name For Wrapping Purposes Limited",
        "--output-dir",
        temp_dir.path().to_str().unwrap(),
    ])
    .expect("Failed to run CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let preview = stdout.split("Preview:").nth(1).unwrap();
    for line in preview.lines() {
        assert!(line.chars().count() <= 80, "line too long: {line}");
    }
}

#[test]
fn test_cli_letter_personalize_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let temp_dir = setup_temp_dir();
    let (profile, template, _) = write_inputs(temp_dir.path());

    let mut child = Command::new(get_cli_path())
        .args([
            "letter",
            "--profile",
            profile.to_str().unwrap(),
            "--template",
            template.to_str().unwrap(),
            "--company",
            "Acme",
            "--output-dir",
            temp_dir.path().to_str().unwrap(),
            "--personalize",
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"My own opening.\n\n\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let text =
        fs::read_to_string(temp_dir.path().join("cover_letter_Acme_Data_Analyst.txt")).unwrap();
    assert!(text.contains("My own opening."));
    assert!(!text.contains("I am writing to apply"));
    assert!(text.contains("Thank you for considering my application."));
}

#[test]
fn test_cli_build_command() {
    let temp_dir = setup_temp_dir();
    let (profile, _, layout) = write_inputs(temp_dir.path());
    let output_path = temp_dir.path().join("cv.docx");

    let output = run_cli_command(&[
        "build",
        "--profile",
        profile.to_str().unwrap(),
        "--layout",
        layout.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
        "--font",
        "Cambria",
    ])
    .expect("Failed to run CLI");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Saved document to:"));

    let xml = read_document_xml(&output_path);
    assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
    assert!(xml.contains(r#"<w:pStyle w:val="ListBullet"/>"#));
    assert!(xml.contains("Jane Doe"));
}

#[test]
fn test_cli_build_plain_text() {
    let temp_dir = setup_temp_dir();
    let (profile, _, layout) = write_inputs(temp_dir.path());
    let output_path = temp_dir.path().join("cv.txt");

    let output = run_cli_command(&[
        "build",
        "--profile",
        profile.to_str().unwrap(),
        "--layout",
        layout.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ])
    .expect("Failed to run CLI");

    assert!(output.status.success());
    let text = fs::read_to_string(&output_path).unwrap();
    assert!(text.starts_with("Jane Doe\n"));
    assert!(text.contains("Summary\n-------\n"));
    assert!(text.contains("- Built dashboards\n"));
}

#[test]
fn test_cli_build_unsupported_extension() {
    let temp_dir = setup_temp_dir();
    let (profile, _, layout) = write_inputs(temp_dir.path());
    let output_path = temp_dir.path().join("cv.pdf");

    let output = run_cli_command(&[
        "build",
        "--profile",
        profile.to_str().unwrap(),
        "--layout",
        layout.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ])
    .expect("Failed to run CLI");

    assert!(!output.status.success());
    assert!(!output_path.exists());
}

#[test]
fn test_cli_missing_profile_file() {
    let temp_dir = setup_temp_dir();
    let (_, template, _) = write_inputs(temp_dir.path());
    let missing = temp_dir.path().join("nope.json");

    let output = run_cli_command(&[
        "letter",
        "--profile",
        missing.to_str().unwrap(),
        "--template",
        template.to_str().unwrap(),
    ])
    .expect("Failed to run CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load profile"));
}

#[test]
fn test_cli_invalid_profile_json() {
    let temp_dir = setup_temp_dir();
    let (_, template, _) = write_inputs(temp_dir.path());
    let profile = temp_dir.path().join("blank.json");
    fs::write(&profile, r#"{"full_name": "   "}"#).unwrap();

    let output = run_cli_command(&[
        "letter",
        "--profile",
        profile.to_str().unwrap(),
        "--template",
        template.to_str().unwrap(),
        "--output-dir",
        temp_dir.path().to_str().unwrap(),
    ])
    .expect("Failed to run CLI");

    assert!(!output.status.success());
}

#[test]
fn test_cli_help_command() {
    let output = run_cli_command(&["--help"]).expect("Failed to run CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("emphasize"));
    assert!(stdout.contains("letter"));
    assert!(stdout.contains("build"));
}

#[test]
fn test_cli_version_command() {
    let output = run_cli_command(&["--version"]).expect("Failed to run CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("boldpress"));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_cli_command(&["invalid-command"]).expect("Failed to run CLI");

    assert!(!output.status.success());
}

#[test]
fn test_cli_missing_required_arguments() {
    let output = run_cli_command(&["emphasize", "text only"]).expect("Failed to run CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--keyword"));
}
