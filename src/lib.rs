pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod export;
pub mod i18n;
pub mod render;
pub mod state;

pub use error::{DashboardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_EXPORT_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
