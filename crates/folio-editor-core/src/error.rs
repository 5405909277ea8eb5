//! Error types for layout configuration.
//!
//! Dragging itself never fails. Only building controls from configuration
//! can.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while validating or loading layout configuration.
#[derive(Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum LayoutError {
    /// Lower bound is above the upper bound.
    #[error("invalid bounds: min {min} is greater than max {max}")]
    #[diagnostic(code(folio::layout::invalid_bounds))]
    InvalidBounds { min: f64, max: f64 },

    /// A numeric field was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    #[diagnostic(code(folio::layout::non_finite))]
    NonFinite { field: &'static str, value: f64 },

    /// A length that must not be negative was negative.
    #[error("{field} must not be negative, got {value}")]
    #[diagnostic(code(folio::layout::negative))]
    Negative { field: &'static str, value: f64 },

    #[error("zoom must be finite and greater than zero, got {0}")]
    #[diagnostic(code(folio::layout::invalid_zoom))]
    InvalidZoom(f64),

    #[error("axis length must be finite, greater than zero and at most 1000in, got {0}")]
    #[diagnostic(code(folio::layout::invalid_axis_length))]
    InvalidAxisLength(f64),

    #[error("unknown page size: {0}")]
    #[diagnostic(
        code(folio::layout::unknown_page_size),
        help("expected one of: letter, legal, a4, a5")
    )]
    UnknownPageSize(String),

    #[error("failed to parse JSON configuration: {0}")]
    #[diagnostic(code(folio::config::json))]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML configuration: {0}")]
    #[diagnostic(code(folio::config::toml))]
    Toml(#[from] toml::de::Error),

    #[error("unsupported configuration format: {0}")]
    #[diagnostic(code(folio::config::format), help("use a .json or .toml file"))]
    UnsupportedFormat(String),

    #[error("io error: {0}")]
    #[diagnostic(code(folio::config::io))]
    Io(#[from] std::io::Error),
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::NonFinite { field, value })
    }
}

/// Reject NaN, infinities and negative values.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, LayoutError> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        Err(LayoutError::Negative { field, value })
    } else {
        Ok(value)
    }
}
