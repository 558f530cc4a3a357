//! Configuration model and file discovery.

mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{Config, ExportConfig, LayoutConfig, ReportConfig, ThemeConfig};
