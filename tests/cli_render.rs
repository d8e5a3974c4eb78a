use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use figspan_lib::FigspanOutput;
use tempfile::TempDir;

fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test_assets/sample_document.json")
}

fn figspan(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_figspan"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("HOME", env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("run figspan")
}

fn parse(output: &Output) -> FigspanOutput {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("valid JSON output")
}

#[test]
fn render_json_includes_page_and_fonts() {
    let sample = sample_path();
    let out = figspan(&["render", "--input", sample.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));

    match parse(&out) {
        FigspanOutput::Render(render) => {
            assert_eq!(render.text_node_id, "1:4");
            assert_eq!(render.container_node_id, "0:1");
            let families: Vec<&str> = render.fonts.iter().map(|f| f.family.as_str()).collect();
            assert_eq!(families, vec!["Inter", "Roboto"]);
            let html = render.html.expect("inline html");
            assert!(html.contains(r#"<span style="font-weight: 700; color: rgba(255, 0, 0, 1);">Hello</span><br /> <br />"#));
            assert!(render.output_path.is_none());
        }
        other => panic!("expected render output, got {other:?}"),
    }
}

#[test]
fn render_html_format_prints_the_page() {
    let sample = sample_path();
    let out = figspan(&[
        "render",
        "--input",
        sample.to_str().unwrap(),
        "--format",
        "html",
    ]);
    assert_eq!(out.status.code(), Some(0));

    let html = String::from_utf8_lossy(&out.stdout);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("family=Roboto:wght@700&display=swap"));
    assert!(html.contains("white-space: pre-wrap;"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn render_writes_page_to_output_path() {
    let dir = TempDir::new().expect("tempdir");
    let page = dir.path().join("page.html");
    let sample = sample_path();
    let out = figspan(&[
        "render",
        "--input",
        sample.to_str().unwrap(),
        "--output",
        page.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(0));

    let written = std::fs::read_to_string(&page).expect("read page");
    assert!(written.contains("<pre style="));
    match parse(&out) {
        FigspanOutput::Render(render) => {
            assert!(render.html.is_none());
            assert_eq!(render.output_path.as_deref(), Some(page.as_path()));
        }
        other => panic!("expected render output, got {other:?}"),
    }
}

#[test]
fn render_reads_stdin() {
    let raw = std::fs::read(sample_path()).expect("read sample");
    let mut child = Command::new(env!("CARGO_BIN_EXE_figspan"))
        .args(["render", "--input", "-", "--format", "html"])
        .env("HOME", env!("CARGO_MANIFEST_DIR"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn figspan");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(&raw)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait figspan");

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("rld!</span>"));
}

#[test]
fn unknown_text_node_exits_with_error_envelope() {
    let sample = sample_path();
    let out = figspan(&[
        "render",
        "--input",
        sample.to_str().unwrap(),
        "--text-node",
        "42:42",
    ]);
    assert_eq!(out.status.code(), Some(2));

    match parse(&out) {
        FigspanOutput::Error(err) => {
            assert!(err.error.message.contains("42:42"));
            let remediation = err.error.remediation.unwrap_or_default();
            assert!(remediation.contains("--text-node"));
        }
        other => panic!("expected error output, got {other:?}"),
    }
}

#[test]
fn malformed_json_exits_with_input_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"document\": ").expect("write broken doc");

    let out = figspan(&["render", "--input", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("error envelope is JSON");
    assert_eq!(value["mode"], "error");
    assert_eq!(value["error"]["category"], "input");
}

#[test]
fn config_file_selects_nodes_and_flags_override_it() {
    let dir = TempDir::new().expect("tempdir");
    let cfg = dir.path().join("figspan.toml");
    std::fs::write(&cfg, "[nodes]\ntext = \"9:9\"\n").expect("write config");
    let sample = sample_path();

    let from_config = figspan(&[
        "render",
        "--input",
        sample.to_str().unwrap(),
        "--config",
        cfg.to_str().unwrap(),
    ]);
    assert_eq!(from_config.status.code(), Some(2));

    let overridden = figspan(&[
        "render",
        "--input",
        sample.to_str().unwrap(),
        "--config",
        cfg.to_str().unwrap(),
        "--text-node",
        "1:4",
    ]);
    assert_eq!(overridden.status.code(), Some(0));
}

#[test]
fn invalid_config_exits_with_config_error() {
    let dir = TempDir::new().expect("tempdir");
    let cfg = dir.path().join("figspan.toml");
    std::fs::write(&cfg, "break_sentinels = [132, 132]\n").expect("write config");
    let sample = sample_path();

    let out = figspan(&[
        "render",
        "--input",
        sample.to_str().unwrap(),
        "--config",
        cfg.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(2));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(value["error"]["category"], "config");
}

#[test]
fn inspect_reports_styles_and_runs() {
    let sample = sample_path();
    let out = figspan(&["inspect", "--input", sample.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(value["mode"], "inspect");
    assert_eq!(
        value["cssTable"]["2"],
        " text-decoration: line-through; font-tyle: true;"
    );
    assert_eq!(value["fonts"][1]["family"], "Roboto");
    assert_eq!(value["runs"][1]["kind"], "break");
    assert_eq!(value["runs"][1]["start"], 5);
    assert_eq!(value["runs"][3]["styleIndex"], 0);
}
