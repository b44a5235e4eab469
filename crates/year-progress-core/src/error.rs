//! Error types for progress computation and bar rendering.

use crate::progress::Period;

/// Result type for progress operations.
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors raised while computing or rendering progress.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Invalid or missing launch input (life expectancy, birth date).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A period produced a non-positive maximum or overshot it.
    #[error("Clock anomaly in {period} progress: current {current} out of range for max {max}")]
    ClockAnomaly {
        /// Period whose computation went wrong.
        period: Period,
        /// Computed elapsed units.
        current: i64,
        /// Computed period length.
        max: i64,
    },

    /// Tick width that cannot produce a bar.
    #[error("Invalid tick width: {0}% per tick (expected 1..=100)")]
    InvalidTickWidth(u8),

    /// Calendar arithmetic left the supported date range.
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] time::error::ComponentRange),
}

impl ProgressError {
    /// Shorthand for a [`ProgressError::Configuration`] error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether this error stems from user-supplied configuration.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
