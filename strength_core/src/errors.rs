//! # Error Types
//!
//! Structured error types for strength_core. Every engine entry point fails
//! synchronously with one of these variants before any partial result is
//! built, so callers never see a half-computed record.
//!
//! ## Example
//!
//! ```rust
//! use strength_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_mm: f64) -> CalcResult<()> {
//!     if span_mm <= 0.0 {
//!         return Err(CalcError::invalid_geometry(
//!             "span_mm",
//!             span_mm.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for strength_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Three families: geometry of a member is unusable (`InvalidGeometry`),
/// a load entry is out of range (`InvalidLoad`), or the relative ordering
/// of supports and loads breaks a solver precondition (`GeometryViolation`).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A cross-section or span violates a dimensional invariant
    /// (negative/zero dimension, inner not smaller than outer, zero modulus)
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// A load's position, magnitude, or contact width is outside its valid range
    #[error("Invalid load '{label}': {value} - {reason}")]
    InvalidLoad {
        label: String,
        value: String,
        reason: String,
    },

    /// Support/load relative ordering breaks the solver's precondition
    /// (zero span, loads outside interior supports, overlapping supports)
    #[error("Geometry violation: {reason}")]
    GeometryViolation { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidLoad error
    pub fn invalid_load(
        label: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidLoad {
            label: label.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a GeometryViolation error
    pub fn geometry_violation(reason: impl Into<String>) -> Self {
        CalcError::GeometryViolation {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidLoad { .. } => "INVALID_LOAD",
            CalcError::GeometryViolation { .. } => "GEOMETRY_VIOLATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_geometry("b_mm", "-50", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_load("W1", "0", "zero width").error_code(),
            "INVALID_LOAD"
        );
        assert_eq!(
            CalcError::geometry_violation("zero span").error_code(),
            "GEOMETRY_VIOLATION"
        );
    }

    #[test]
    fn test_error_message() {
        let error = CalcError::geometry_violation("supports overlap at x=1200 mm");
        assert!(error.to_string().contains("supports overlap"));
    }
}
