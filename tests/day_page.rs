//! End-to-end checks of the day page against a real plot directory.
//!
//! Library tests use a fixed clock; CLI tests run the built binary with an
//! explicit date so the wall clock never matters.

use chrono::NaiveDate;
use fireplot::config::ViewerConfig;
use fireplot::date::FixedClock;
use fireplot::viewer::Viewer;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const MAP: &str = "<area shape=\"rect\" coords=\"10,20,30,40\" href=\"details.html?ip=10.0.0.1&port=22\" title=\"ssh\">\n<area shape=\"default\" nohref>\n";

fn viewer(dir: &Path) -> Viewer {
    let config = ViewerConfig {
        plot_dir: dir.to_path_buf(),
        ..ViewerConfig::default()
    };
    Viewer::new(config, FixedClock(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()))
}

fn page(dir: &Path, date: Option<&str>) -> String {
    String::from_utf8(viewer(dir).render(date).unwrap()).unwrap()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn plot_without_map() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("fireplot-64-2024-06-01.png"), b"png").unwrap();

    let html = page(tmp.path(), Some("2024-06-01"));
    assert!(html.contains(r#"src="fireplot-64-2024-06-01.png""#));
    assert!(!html.contains("usemap"));
    assert!(!html.contains("<map"));
}

#[test]
fn plot_with_map_inlines_exact_bytes() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("fireplot-64-2024-06-01.png"), b"png").unwrap();
    fs::write(tmp.path().join("imagemap-2024-06-01.map"), MAP).unwrap();

    let html = page(tmp.path(), Some("2024-06-01"));
    assert!(html.contains(r#"src="fireplot-64-2024-06-01.png""#));
    assert!(html.contains(r##"usemap="#fireplot-2024-06-01""##));
    assert!(html.contains(&format!(r#"<map name="fireplot-2024-06-01">{MAP}</map>"#)));
}

#[test]
fn map_outside_utf8_is_inlined_unchanged() {
    let tmp = TempDir::new().unwrap();
    let map = b"<area title=\"caf\xe9\" coords=\"0,0,1,1\">";
    fs::write(tmp.path().join("fireplot-64-2024-06-01.png"), b"png").unwrap();
    fs::write(tmp.path().join("imagemap-2024-06-01.map"), map).unwrap();

    let html = viewer(tmp.path()).render(Some("2024-06-01")).unwrap();
    assert!(contains(&html, map));
    assert!(!contains(&html, "\u{fffd}".as_bytes()));
}

#[test]
fn neither_file_still_renders() {
    let tmp = TempDir::new().unwrap();
    let html = page(tmp.path(), Some("2024-06-01"));
    assert!(html.contains("Firewall plot 2024-06-01"));
    assert!(html.contains("<img"));
    assert!(!html.contains("src="));
}

#[test]
fn navigation_links() {
    let tmp = TempDir::new().unwrap();
    let html = page(tmp.path(), Some("2024-03-01"));
    assert!(html.contains(r#"<a href="?date=2024-06-10">today</a>"#));
    assert!(html.contains(r#"<a href="?date=2024-02-29">previous day</a>"#));
    assert!(html.contains(r#"<a href="?date=2024-03-02">next day</a>"#));
}

#[test]
fn invalid_date_shows_today() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("fireplot-64-2024-06-10.png"), b"png").unwrap();

    for raw in [None, Some(""), Some("2024-6-10"), Some("../../etc/passwd")] {
        let html = page(tmp.path(), raw);
        assert!(html.contains("Firewall plot 2024-06-10"), "{raw:?}");
        assert!(html.contains(r#"src="fireplot-64-2024-06-10.png""#), "{raw:?}");
    }
}

#[test]
fn calendar_invalid_date_is_kept() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("fireplot-64-2024-13-99.png"), b"png").unwrap();

    let html = page(tmp.path(), Some("2024-13-99"));
    assert!(html.contains("Firewall plot 2024-13-99"));
    assert!(html.contains(r#"src="fireplot-64-2024-13-99.png""#));
    assert!(html.contains(r#"<a href="?date=">previous day</a>"#));
}

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

fn fireplot(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fireplot"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fireplot")
}

#[test]
fn cli_render_to_stdout() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("fireplot-64-2024-06-01.png"), b"png").unwrap();
    fs::write(tmp.path().join("imagemap-2024-06-01.map"), MAP).unwrap();

    let out = fireplot(&[
        "--plot-dir",
        tmp.path().to_str().unwrap(),
        "render",
        "--date",
        "2024-06-01",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("<!DOCTYPE html>"));
    assert!(stdout.ends_with("</html>"));
    assert!(stdout.contains(MAP));
}

#[test]
fn cli_stdout_and_file_output_are_identical() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("fireplot-64-2024-06-01.png"), b"png").unwrap();
    fs::write(
        tmp.path().join("imagemap-2024-06-01.map"),
        b"<area title=\"caf\xe9\">\n",
    )
    .unwrap();
    let target = tmp.path().join("index.html");
    let dir = tmp.path().to_str().unwrap();

    let to_stdout = fireplot(&["--plot-dir", dir, "render", "--date", "2024-06-01"]);
    let to_file = fireplot(&[
        "--plot-dir",
        dir,
        "render",
        "--date",
        "2024-06-01",
        "--output",
        target.to_str().unwrap(),
    ]);
    assert!(to_stdout.status.success());
    assert!(to_file.status.success());
    assert_eq!(to_stdout.stdout, fs::read(&target).unwrap());
}

#[test]
fn cli_render_to_file() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("index.html");

    let out = fireplot(&[
        "--plot-dir",
        tmp.path().to_str().unwrap(),
        "render",
        "--date",
        "2023-01-01",
        "--output",
        target.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    let html = fs::read_to_string(&target).unwrap();
    assert!(html.contains(r#"<a href="?date=2022-12-31">previous day</a>"#));
}

#[test]
fn cli_check_lists_days() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("fireplot-64-2024-06-01.png"), b"png").unwrap();
    fs::write(tmp.path().join("fireplot-64-2024-06-03.png"), b"png").unwrap();
    fs::write(tmp.path().join("imagemap-2024-06-03.map"), MAP).unwrap();

    let out = fireplot(&["--plot-dir", tmp.path().to_str().unwrap(), "check"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("001 2024-06-01"));
    assert!(stdout.contains("002 2024-06-03 (image map)"));
    assert!(stdout.contains("Missing days\n    2024-06-02"));
}

#[test]
fn cli_gen_config_is_valid() {
    let out = fireplot(&["gen-config"]);
    assert!(out.status.success());
    let config: ViewerConfig = toml::from_str(&String::from_utf8(out.stdout).unwrap()).unwrap();
    assert_eq!(config.server.port, 8080);
}

#[test]
fn cli_missing_explicit_config_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.toml");
    let out = fireplot(&["--config", missing.to_str().unwrap(), "check"]);
    assert!(!out.status.success());
}
