//! Error types for the command-line front end
//!
//! Rule violations stay [`XiangqiError`]s; this layer only adds settings
//! file failures.

use qxiangqi_engine::XiangqiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    #[error(transparent)]
    Rules(#[from] XiangqiError),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
