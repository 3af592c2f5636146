//! Error types for the portfolio shell

use folio_core::CoreError;
use thiserror::Error;

/// Errors raised while assembling or driving the portfolio shell
#[derive(Error, Debug)]
pub enum FolioError {
    /// A controller rejected its configuration
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration text could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Viewport dimensions must be finite and positive
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Catalog could not be parsed or is inconsistent
    #[error("Invalid catalog: {0}")]
    Catalog(String),

    /// The page was torn down
    #[error("Portfolio is not mounted")]
    NotMounted,

    /// No project with this id in the catalog
    #[error("Unknown project id {0}")]
    UnknownProject(u32),

    /// Scenario JSON could not be parsed
    #[error("Invalid scenario: {0}")]
    Scenario(#[from] serde_json::Error),
}

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, FolioError>;
