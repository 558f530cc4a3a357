pub mod context;
pub mod export;
pub mod init;
pub mod render;
pub mod specs;
pub mod theme;

pub use context::{CommandContext, SessionStore, load_config, load_snapshot, write_output};
pub use export::{run_export, run_export_impl};
pub use init::{run_init, run_init_impl};
pub use render::{run_render, run_render_impl};
pub use specs::{run_specs, run_specs_impl};
pub use theme::{run_theme, run_theme_impl};
