use std::collections::HashMap;
use std::io::{Error, ErrorKind};

use super::*;
use crate::data::Lang;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/tg-report")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn no_config_returns_defaults() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load().unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn local_config_takes_precedence() {
    let fs = MockFileSystem::new()
        .with_file("/project/.tg-report.toml", "[report]\nlanguage = \"en\"\n")
        .with_file("/home/user/.config/tg-report/config.toml", "[report]\nlanguage = \"ru\"\n");
    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.report.language, Lang::En);
    assert_eq!(result.source, Some(PathBuf::from("/project/.tg-report.toml")));
}

#[test]
fn user_config_is_the_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/tg-report/config.toml",
        "[export]\nsettle_delay_ms = 50\n",
    );
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.export.settle_delay_ms, 50);
}

#[test]
fn missing_config_dir_is_tolerated() {
    let fs = MockFileSystem::new().with_config_dir(None);
    assert!(FileConfigLoader::with_fs(fs).load().is_ok());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn explicit_missing_path_is_a_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();
    assert!(matches!(err, DashboardError::FileRead { .. }));
}

#[test]
fn syntax_errors_are_reported() {
    let fs = MockFileSystem::new().with_file("/project/.tg-report.toml", "[report\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, DashboardError::TomlParse(_)));
}

#[test]
fn validation_errors_name_the_file() {
    let fs = MockFileSystem::new().with_file("/project/.tg-report.toml", "[export]\nscale = 0.0\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("/project/.tg-report.toml"), "{message}");
    assert!(message.contains("export.scale"), "{message}");
}
