use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_moddoc-docgen")))
}

fn fixture() -> String {
    format!("{}/tests/fixtures/module", env!("CARGO_MANIFEST_DIR"))
}

fn generate(dir: &Path, extra: &[&str]) {
    cmd()
        .args(["-o", dir.to_str().unwrap(), "--fixture", &fixture()])
        .args(extra)
        .assert()
        .success();
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn one_page_per_documentable_command() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), &[]);

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(
        names,
        [
            "json.md",
            "markdown-document.md",
            "markdown-table.md",
            "markdown.md",
            "pretty.md",
            "xml.md",
            "yaml.md",
        ]
    );
}

#[test]
fn json_page_embeds_live_output() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), &[]);

    let page = read(dir.path(), "json.md");
    assert!(page.starts_with("## moddoc json\n\n"));
    assert!(page.contains("### Synopsis"));
    assert!(page.contains("```shell\nmoddoc json ./examples/\n```"));
    assert!(page.contains("generates the following output:"));
    // formatter output is indented four spaces inside the page
    assert!(page.contains("\n    {\n"));
    assert!(page.contains("    \"name\": \"vpc\","));
    assert!(page.contains("###### Auto generated by moddoc on "));
}

#[test]
fn pretty_page_documents_no_color_invocation() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), &[]);

    let page = read(dir.path(), "pretty.md");
    assert!(page.contains("```shell\nmoddoc pretty --no-color ./examples/\n```"));
    assert!(page.contains("### Options"));
    assert!(page.contains("--no-color"));
    // embedded output keeps blank lines blank — no whitespace-only lines
    for line in page.lines() {
        assert!(
            line.is_empty() || !line.trim_end().is_empty(),
            "whitespace-only line in pretty.md"
        );
    }
}

#[test]
fn grouping_page_has_no_usage_and_no_embedded_output() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), &[]);

    let page = read(dir.path(), "markdown.md");
    assert!(page.starts_with("## moddoc markdown\n\n"));
    // not runnable: no usage fence
    assert!(!page.contains("<COMMAND>"));
    // no formatter registered under "markdown": shell block only
    assert!(page.contains("```shell\nmoddoc markdown ./examples/\n```"));
    let tail = page.split("generates the following output:").nth(1).unwrap();
    assert!(!tail.contains("\n    "));
    // global flag listed as inherited
    assert!(page.contains("### Options inherited from parent commands"));
    assert!(page.contains("--sort-by-required"));
}

#[test]
fn nested_command_path_hyphenated() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), &[]);

    let page = read(dir.path(), "markdown-table.md");
    assert!(page.starts_with("## moddoc markdown table\n\n"));
    assert!(page.contains("```shell\nmoddoc markdown table ./examples/\n```"));
    assert!(page.contains("    | Name | Type | Description | Default | Required |"));
}

#[test]
fn regeneration_is_idempotent() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), &[]);
    let first = read(dir.path(), "yaml.md");
    generate(dir.path(), &[]);
    let second = read(dir.path(), "yaml.md");
    assert_eq!(first, second);
}

#[test]
fn autogen_footer_can_be_suppressed() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), &["--no-autogen-tag"]);
    let page = read(dir.path(), "json.md");
    assert!(!page.contains("Auto generated"));
}

#[test]
fn missing_fixture_aborts_run() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["-o", dir.path().to_str().unwrap(), "--fixture", "/nonexistent"])
        .assert()
        .failure();
}
