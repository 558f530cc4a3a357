#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the tg-report binary.
#[macro_export]
macro_rules! tg_report {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("tg-report"))
    };
}

/// Temporary working directory that also acts as the user's home, so
/// preferences and user config never leak between tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a local `.tg-report.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".tg-report.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Command running in the fixture with an isolated home and no
    /// terminal theme hint.
    pub fn command(&self) -> assert_cmd::Command {
        let home = self.dir.path().join("home");
        let mut cmd = tg_report!();
        cmd.current_dir(self.dir.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("XDG_DATA_HOME", home.join(".local/share"))
            .env_remove("COLORFGBG")
            .env_remove("RUST_LOG");
        cmd
    }
}
