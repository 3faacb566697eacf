//! # Error Types
//!
//! Domain-specific error types for roman-core.
//!
//! ## Outcome Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Encoding Outcomes                                  │
//! │                                                                         │
//! │  n <= 0              → Ok(None)        no Roman form (NOT an error)     │
//! │  1 <= n <= max       → Ok(Some(..))    canonical numeral                │
//! │  n > max             → Err(OutOfRange) explicit, never truncated        │
//! │                                                                         │
//! │  Config errors (this file)                                              │
//! │  └── ConfigError     - rejected encoder configuration                   │
//! │                                                                         │
//! │  Flow: ConfigError → RomanError → caller                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value and the bound in every message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Roman Error
// =============================================================================

/// Encoding errors.
///
/// Zero and negative inputs are deliberately absent from this enum: they
/// have no Roman form and are reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanError {
    /// Value is above the encoder's maximum supported value.
    ///
    /// ## When This Occurs
    /// - `n > 39_999` with the extended symbol set (default)
    /// - `n > 3_999` with the classical preset
    /// - An unsigned value too large to fit `i64` (`value` is saturated)
    #[error("{value} is out of the supported range 1..={max}")]
    OutOfRange { value: i64, max: i64 },

    /// Encoder configuration was rejected (wraps ConfigError).
    #[error("Invalid encoder configuration: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Config Error
// =============================================================================

/// Encoder configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_value` lies outside what the symbol table can encode.
    #[error("max_value {value} must be between {min} and {max}")]
    MaxValueOutOfBounds { value: i64, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RomanError.
pub type RomanResult<T> = Result<T, RomanError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RomanError::OutOfRange {
            value: 40_000,
            max: 39_999,
        };
        assert_eq!(
            err.to_string(),
            "40000 is out of the supported range 1..=39999"
        );
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::MaxValueOutOfBounds {
            value: 0,
            min: 1,
            max: 39_999,
        };
        assert_eq!(err.to_string(), "max_value 0 must be between 1 and 39999");
    }

    #[test]
    fn test_config_converts_to_roman_error() {
        let config_err = ConfigError::MaxValueOutOfBounds {
            value: 50_000,
            min: 1,
            max: 39_999,
        };
        let err: RomanError = config_err.into();
        assert!(matches!(err, RomanError::Config(_)));
    }
}
