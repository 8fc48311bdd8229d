//! CLI smoke tests against the built binary.

#![cfg(not(target_arch = "wasm32"))]

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(args: &[&str], dir: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_after-site"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

#[test]
fn gen_config_prints_valid_toml() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["gen-config"], tmp.path());
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    let config = after_site::config::parse_config(&text).unwrap();
    assert_eq!(config.gallery.page_size, 12);
}

#[test]
fn check_lists_stock_catalog() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["check"], tmp.path());
    assert!(
        out.status.success(),
        "check failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("Portfolio (13 entries, 2 pages of 12)"));
    assert!(text.contains("Page 2"));
    assert!(text.contains("==> Site inputs are valid"));
}

#[test]
fn check_uses_config_page_size() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("after-site.toml"), "[gallery]\npage_size = 5\n").unwrap();
    let out = run(&["check"], tmp.path());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("Portfolio (13 entries, 3 pages of 5)"));
}

#[test]
fn check_rejects_invalid_catalog() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("broken.toml"),
        "[[entries]]\ntitle = \"\"\nthumbnail = \"a.jpg\"\n",
    )
    .unwrap();
    let out = run(&["check", "--catalog", "broken.toml"], tmp.path());
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("empty title"));
}

#[test]
fn render_prints_requested_page() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["render", "--page", "2"], tmp.path());
    assert!(out.status.success());
    let html = String::from_utf8(out.stdout).unwrap();
    assert_eq!(html.matches(r#"class="portfolio-item""#).count(), 1);
    assert!(html.contains("에너지 혁신 포럼"));
}

#[test]
fn catalog_prints_normalized_json() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["catalog"], tmp.path());
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 13);
    assert_eq!(entries[12]["images"].as_array().unwrap().len(), 1);
}
