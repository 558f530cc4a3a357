//! Integration tests for the `export` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn failed_export_writes_nothing() {
    let fixture = TestFixture::new();
    fixture.create_config("[export]\ncapture_timeout_ms = 0\n");

    fixture
        .command()
        .args(["export", "--output-dir", "out", "--settle-delay-ms", "0", "--scale", "0.5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("PDF export failed"));

    assert!(!fixture.path().join("out").exists());
}

#[test]
fn lang_and_all_languages_conflict() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["export", "--lang", "en", "--all-languages"])
        .assert()
        .failure();
}

#[cfg(feature = "pdf")]
#[test]
fn export_writes_dated_pdf() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args([
            "export",
            "--output-dir",
            "out",
            "--settle-delay-ms",
            "0",
            "--scale",
            "0.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("telegram-analytics-"));

    let entries: Vec<_> = std::fs::read_dir(fixture.path().join("out"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("telegram-analytics-"));
    assert!(entries[0].ends_with(".pdf"));
}

#[cfg(feature = "pdf")]
#[test]
fn export_all_languages() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args([
            "export",
            "--all-languages",
            "--output-dir",
            "out",
            "--settle-delay-ms",
            "0",
            "--scale",
            "0.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard-russian.pdf"))
        .stdout(predicate::str::contains("dashboard-english.pdf"));

    let pdf = std::fs::read(fixture.path().join("out/dashboard-english.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}
