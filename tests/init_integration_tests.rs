//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_writes_sample_snapshot() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created snapshot file"));

    assert!(fixture.read("snapshot.toml").contains("[channel]"));
}

#[test]
fn init_fails_without_parent_directory() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["init", "-o", "missing/snap.toml"])
        .assert()
        .code(2);
}

#[test]
fn init_output_is_usable_as_data() {
    let fixture = TestFixture::new();
    fixture.create_file("data/.keep", "");
    fixture
        .command()
        .args(["init", "-o", "data/snap.toml"])
        .assert()
        .success();

    fixture
        .command()
        .args(["--data", "data/snap.toml", "render", "--format", "svg"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"));
}

#[test]
fn init_fails_if_file_exists() {
    let fixture = TestFixture::new();
    fixture.create_file("snapshot.toml", "# existing\n");

    fixture
        .command()
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fixture.read("snapshot.toml"), "# existing\n");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_file("snapshot.toml", "# existing\n");

    fixture
        .command()
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fixture.read("snapshot.toml").contains("[channel]"));
}
