//! Core error types

use thiserror::Error;

/// Errors raised while constructing controllers from configuration
///
/// Input handling itself never fails; out-of-range values are clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The typewriter needs at least one role to cycle through
    #[error("role list must contain at least one label")]
    EmptyRoleList,

    /// A role label has no characters to type
    #[error("role at index {index} is empty")]
    EmptyRole { index: usize },

    /// Item widths must be positive and finite
    #[error("invalid item width: {0}")]
    InvalidItemWidth(f32),

    /// Tick and close delays must be non-zero
    #[error("invalid delay for {name}: {value}ms")]
    InvalidDelay { name: &'static str, value: u64 },

    /// Edge margin and compact breakpoint must be finite and non-negative
    #[error("invalid scroll setting {name}: {value}")]
    InvalidScrollSetting { name: &'static str, value: f32 },

    /// Drag amplification must be positive and finite
    #[error("invalid drag amplification: {0}")]
    InvalidAmplification(f32),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
