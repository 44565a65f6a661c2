//! Core module - settings and error plumbing for the `qxiangqi` binary

pub mod error;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use settings_persistence::{save_settings, settings_path, try_load_settings, Settings};
