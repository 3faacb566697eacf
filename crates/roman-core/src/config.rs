//! # Encoder Configuration
//!
//! The range policy for an encoder.
//!
//! ## Presets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Range Presets                                    │
//! │                                                                         │
//! │  EXTENDED (Default)                                                     │
//! │  ──────────────────                                                     │
//! │  • 1..=39,999                                                           │
//! │  • Uses ↁ (5,000) and ↂ (10,000) above 3,999                            │
//! │                                                                         │
//! │  CLASSICAL                                                              │
//! │  ─────────                                                              │
//! │  • 1..=3,999                                                            │
//! │  • Latin letters I..M only                                              │
//! │                                                                         │
//! │  CUSTOM                                                                 │
//! │  ──────                                                                 │
//! │  • Any max_value in 1..=39,999                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration Format
//! The config is serde-enabled so an embedding application can keep it in
//! whatever document it already loads. As JSON:
//! ```json
//! { "max_value": 3999 }
//! ```
//! A missing `max_value` falls back to the extended preset.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{CLASSICAL_MAX_VALUE, EXTENDED_MAX_VALUE, MIN_VALUE};

// =============================================================================
// Encoder Configuration
// =============================================================================

/// Range policy for a [`RomanEncoder`](crate::RomanEncoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Largest value the encoder accepts. Anything above is `OutOfRange`.
    pub max_value: i64,
}

impl EncoderConfig {
    /// Seven Latin letters only, up to 3,999.
    pub const fn classical() -> Self {
        EncoderConfig {
            max_value: CLASSICAL_MAX_VALUE,
        }
    }

    /// Full symbol table including ↁ and ↂ, up to 39,999.
    pub const fn extended() -> Self {
        EncoderConfig {
            max_value: EXTENDED_MAX_VALUE,
        }
    }

    /// Replaces the maximum value. Not validated until [`validate`](Self::validate).
    pub const fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Checks that `max_value` lies in `1..=EXTENDED_MAX_VALUE`.
    ///
    /// ## Example
    /// ```rust
    /// use roman_core::EncoderConfig;
    ///
    /// assert!(EncoderConfig::classical().validate().is_ok());
    /// assert!(EncoderConfig::extended().with_max_value(0).validate().is_err());
    /// assert!(EncoderConfig::extended().with_max_value(40_000).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_VALUE..=EXTENDED_MAX_VALUE).contains(&self.max_value) {
            return Err(ConfigError::MaxValueOutOfBounds {
                value: self.max_value,
                min: MIN_VALUE,
                max: EXTENDED_MAX_VALUE,
            });
        }

        Ok(())
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig::extended()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
