//! Integration tests for the persisted theme preference.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn default_theme_is_dark() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout("dark\n");
}

#[test]
fn toggle_persists_across_runs() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout("light\n");

    fixture
        .command()
        .args(["render"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"data-theme="light""#));

    fixture
        .command()
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout("dark\n");
}

#[test]
fn set_is_idempotent() {
    let fixture = TestFixture::new();

    for _ in 0..2 {
        fixture
            .command()
            .args(["theme", "set", "light"])
            .assert()
            .success()
            .stdout("light\n");
    }
}

#[test]
fn config_default_applies_without_preference() {
    let fixture = TestFixture::new();
    fixture.create_config("[theme]\ndefault = \"light\"\n");

    fixture
        .command()
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout("light\n");
}

#[test]
fn persisted_preference_beats_terminal_hint() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["theme", "set", "dark"])
        .assert()
        .success();

    fixture
        .command()
        .env("COLORFGBG", "0;15")
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout("dark\n");
}

#[test]
fn terminal_hint_applies_without_preference() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .env("COLORFGBG", "0;15")
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout("light\n");
}

#[test]
fn quiet_suppresses_output() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-q", "theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
