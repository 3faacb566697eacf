//! # roman-core: Pure Roman Numeral Encoding
//!
//! Converts positive integers into Roman numerals. Every function is pure:
//! no I/O, no global mutable state, no allocation beyond the output string.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ★ roman-core (THIS CRATE) ★                         │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐            │
//! │   │  config   │  │  encoder  │  │  symbols  │  │  numeral  │            │
//! │   │  Encoder  │─►│  Roman    │─►│  SYMBOL_  │  │  Roman    │            │
//! │   │  Config   │  │  Encoder  │  │  TABLE    │  │  Numeral  │            │
//! │   └───────────┘  └─────┬─────┘  └───────────┘  └─────▲─────┘            │
//! │                        └──────────────────────────────┘                 │
//! │                                                                         │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] - Greedy encoder, `to_roman`, the `ToRoman` trait
//! - [`symbols`] - Glyphs and the value→text table
//! - [`numeral`] - The `RomanNumeral` output type
//! - [`config`] - Range policy (`EncoderConfig`)
//! - [`error`] - Error types
//!
//! ## Range Policy
//!
//! | Input            | Result                      |
//! |------------------|-----------------------------|
//! | `n <= 0`         | `Ok(None)`                  |
//! | `1..=max_value`  | `Ok(Some(numeral))`         |
//! | `n > max_value`  | `Err(RomanError::OutOfRange)` |
//!
//! `max_value` defaults to [`EXTENDED_MAX_VALUE`]. Above 39,999 the table
//! would need a glyph for 50,000, which the alphabet does not have.
//!
//! ## Example Usage
//!
//! ```rust
//! use roman_core::{to_roman, ToRoman};
//!
//! assert_eq!(to_roman(1994).unwrap().unwrap(), "MCMXCIV");
//! assert_eq!(4_000i32.to_roman().unwrap().unwrap(), "Mↁ");
//! assert_eq!(to_roman(0).unwrap(), None);
//! assert!(to_roman(40_000).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod encoder;
pub mod error;
pub mod numeral;
pub mod symbols;

#[cfg(test)]
mod tests;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::EncoderConfig;
pub use encoder::{to_roman, RomanEncoder, ToRoman};
pub use error::{ConfigError, RomanError, RomanResult};
pub use numeral::RomanNumeral;
pub use symbols::{Symbol, SymbolPair, FIVE_THOUSAND, SYMBOL_TABLE, TEN_THOUSAND};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest value with a Roman form.
pub const MIN_VALUE: i64 = 1;

/// Largest value writable with the seven Latin letters (MMMCMXCIX).
pub const CLASSICAL_MAX_VALUE: i64 = 3_999;

/// Largest value writable with ↁ and ↂ (ↂↂↂMↂCMXCIX).
///
/// 40,000 would need four stacked ↂ, which is not standard notation.
pub const EXTENDED_MAX_VALUE: i64 = 39_999;
