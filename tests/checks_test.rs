use std::fs;
use std::path::Path;

use htmlcheck::{check_file, load_checks, Error};
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("expected fixture write to succeed");
    path
}

#[test]
fn load_checks_reads_selector_list_in_file_order() {
    let dir = TempDir::new().expect("expected tempdir");
    let path = write_fixture(&dir, "checks.json", r##"["span", "div", "#x"]"##);

    let selectors = load_checks(&path).expect("expected Ok(_)");
    assert_eq!(selectors, vec!["span", "div", "#x"]);
}

#[test]
fn load_checks_missing_file_reports_the_path() {
    let err = load_checks(Path::new("no/such/checks.json")).unwrap_err();
    match &err {
        Error::MissingInput { path } => {
            assert_eq!(path, Path::new("no/such/checks.json"));
        }
        other => panic!("expected Error::MissingInput, got {other:?}"),
    }
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn load_checks_rejects_object_document() {
    let dir = TempDir::new().expect("expected tempdir");
    let path = write_fixture(&dir, "checks.json", r#"{"div": true}"#);

    let err = load_checks(&path).unwrap_err();
    assert!(matches!(err, Error::ChecksFormat(_)));
}

#[test]
fn check_file_missing_html_reports_the_path() {
    let dir = TempDir::new().expect("expected tempdir");
    let checks = write_fixture(&dir, "checks.json", r#"["div"]"#);

    let err = check_file(&dir.path().join("absent.html"), &checks).unwrap_err();
    assert!(matches!(err, Error::MissingInput { .. }));
}

#[test]
fn check_file_evaluates_document_against_checks() {
    let dir = TempDir::new().expect("expected tempdir");
    let checks = write_fixture(&dir, "checks.json", r#"["h1", "table"]"#);
    let html = write_fixture(
        &dir,
        "page.html",
        "<html><body><h1>Heading</h1></body></html>",
    );

    let report = check_file(&html, &checks).expect("expected Ok(_)");
    assert_eq!(report.get("h1"), Some(true));
    assert_eq!(report.get("table"), Some(false));
}

#[test]
fn check_file_with_empty_checks_yields_empty_report() {
    let dir = TempDir::new().expect("expected tempdir");
    let checks = write_fixture(&dir, "checks.json", "[]");
    let html = write_fixture(&dir, "page.html", "<html><body></body></html>");

    let report = check_file(&html, &checks).expect("expected Ok(_)");
    assert!(report.is_empty());
}
