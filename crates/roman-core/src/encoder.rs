//! # Encoder Module
//!
//! Converts integers into Roman numerals with the greedy table algorithm.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GREEDY SUBTRACTIVE-PAIR ENCODING                                       │
//! │                                                                         │
//! │  remaining = 1994                                                       │
//! │    │                                                                    │
//! │    ├── largest row <= 1994 is 1000 "M"   → "M"        remaining  994    │
//! │    ├── largest row <=  994 is  900 "CM"  → "MCM"      remaining   94    │
//! │    ├── largest row <=   94 is   90 "XC"  → "MCMXC"    remaining    4    │
//! │    └── largest row <=    4 is    4 "IV"  → "MCMXCIV"  remaining    0    │
//! │                                                                         │
//! │  Work is proportional to the glyphs emitted, never to n itself.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use roman_core::{to_roman, RomanEncoder, RomanError, ToRoman};
//!
//! assert_eq!(to_roman(4).unwrap().unwrap(), "IV");
//! assert_eq!(to_roman(0).unwrap(), None);
//!
//! let classical = RomanEncoder::classical();
//! assert!(matches!(
//!     classical.encode(4_000),
//!     Err(RomanError::OutOfRange { value: 4_000, max: 3_999 })
//! ));
//!
//! assert_eq!(42u8.to_roman().unwrap().unwrap(), "XLII");
//! ```

use tracing::{debug, trace};

use crate::config::EncoderConfig;
use crate::error::{ConfigError, RomanError, RomanResult};
use crate::numeral::RomanNumeral;
use crate::symbols::SYMBOL_TABLE;

// =============================================================================
// Encoder
// =============================================================================

/// A Roman numeral encoder bound to a validated range policy.
///
/// Encoders hold no mutable state and are `Copy`; share one freely across
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanEncoder {
    config: EncoderConfig,
}

impl RomanEncoder {
    /// Creates an encoder from a configuration, validating it first.
    ///
    /// ## Example
    /// ```rust
    /// use roman_core::{EncoderConfig, RomanEncoder};
    ///
    /// let encoder = RomanEncoder::new(EncoderConfig::default().with_max_value(100)).unwrap();
    /// assert_eq!(encoder.max_value(), 100);
    ///
    /// assert!(RomanEncoder::new(EncoderConfig::default().with_max_value(0)).is_err());
    /// ```
    pub fn new(config: EncoderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(RomanEncoder { config })
    }

    /// Encoder limited to 1..=3,999 and the seven Latin letters.
    pub const fn classical() -> Self {
        RomanEncoder {
            config: EncoderConfig::classical(),
        }
    }

    /// Encoder for 1..=39,999 using ↁ and ↂ for the thousands.
    pub const fn extended() -> Self {
        RomanEncoder {
            config: EncoderConfig::extended(),
        }
    }

    /// The configuration this encoder was built from.
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Largest value this encoder accepts.
    pub const fn max_value(&self) -> i64 {
        self.config.max_value
    }

    /// True when `n` has a Roman form under this encoder.
    pub const fn supports(&self, n: i64) -> bool {
        n > 0 && n <= self.config.max_value
    }

    /// Encodes `n`.
    ///
    /// ## Outcomes
    /// - `n <= 0` → `Ok(None)`: zero and negatives have no Roman form
    /// - `1 <= n <= max_value` → `Ok(Some(numeral))`
    /// - `n > max_value` → `Err(RomanError::OutOfRange)`
    ///
    /// ## Example
    /// ```rust
    /// use roman_core::RomanEncoder;
    ///
    /// let encoder = RomanEncoder::extended();
    /// assert_eq!(encoder.encode(3_999).unwrap().unwrap(), "MMMCMXCIX");
    /// assert_eq!(encoder.encode(5_000).unwrap().unwrap(), "ↁ");
    /// assert_eq!(encoder.encode(-1).unwrap(), None);
    /// assert!(encoder.encode(40_000).is_err());
    /// ```
    pub fn encode(&self, n: i64) -> RomanResult<Option<RomanNumeral>> {
        if n <= 0 {
            return Ok(None);
        }

        if n > self.config.max_value {
            debug!(value = n, max = self.config.max_value, "value out of range");
            return Err(RomanError::OutOfRange {
                value: n,
                max: self.config.max_value,
            });
        }

        let text = encode_positive(n);
        trace!(value = n, numeral = %text, "encoded");
        Ok(Some(RomanNumeral::from_encoded(text)))
    }
}

impl Default for RomanEncoder {
    fn default() -> Self {
        RomanEncoder::extended()
    }
}

impl TryFrom<EncoderConfig> for RomanEncoder {
    type Error = ConfigError;

    fn try_from(config: EncoderConfig) -> Result<Self, Self::Error> {
        RomanEncoder::new(config)
    }
}

/// Greedy walk over the table. `n` must be positive.
fn encode_positive(mut n: i64) -> String {
    let mut out = String::with_capacity(32);

    for pair in SYMBOL_TABLE.iter() {
        while n >= pair.value {
            out.push_str(pair.text);
            n -= pair.value;
        }
        if n == 0 {
            break;
        }
    }

    out
}

// =============================================================================
// Free Function
// =============================================================================

/// Encodes `n` with the default (extended, 1..=39,999) encoder.
///
/// ## Example
/// ```rust
/// use roman_core::to_roman;
///
/// assert_eq!(to_roman(1994).unwrap().unwrap(), "MCMXCIV");
/// assert_eq!(to_roman(9_000).unwrap().unwrap(), "Mↂ");
/// assert_eq!(to_roman(0).unwrap(), None);
/// ```
pub fn to_roman(n: i64) -> RomanResult<Option<RomanNumeral>> {
    RomanEncoder::extended().encode(n)
}

// =============================================================================
// Extension Trait
// =============================================================================

/// `value.to_roman()` on the primitive integer types.
///
/// Uses the default extended encoder. Unsigned values too large for `i64`
/// are reported as `OutOfRange` with `value` saturated to `i64::MAX`.
pub trait ToRoman {
    /// Encodes `self`; see [`RomanEncoder::encode`] for the outcomes.
    fn to_roman(&self) -> RomanResult<Option<RomanNumeral>>;
}

macro_rules! impl_to_roman {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToRoman for $t {
                fn to_roman(&self) -> RomanResult<Option<RomanNumeral>> {
                    let n = i64::try_from(*self).unwrap_or(i64::MAX);
                    RomanEncoder::extended().encode(n)
                }
            }
        )*
    };
}

impl_to_roman!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(n: i64) -> String {
        to_roman(n)
            .unwrap()
            .map(RomanNumeral::into_string)
            .unwrap_or_default()
    }

    #[test]
    fn test_subtractive_pairs() {
        assert_eq!(encode(1), "I");
        assert_eq!(encode(4), "IV");
        assert_eq!(encode(9), "IX");
        assert_eq!(encode(40), "XL");
        assert_eq!(encode(90), "XC");
        assert_eq!(encode(400), "CD");
        assert_eq!(encode(900), "CM");
    }

    #[test]
    fn test_classical_values() {
        assert_eq!(encode(3), "III");
        assert_eq!(encode(14), "XIV");
        assert_eq!(encode(49), "XLIX");
        assert_eq!(encode(444), "CDXLIV");
        assert_eq!(encode(1994), "MCMXCIV");
        assert_eq!(encode(2024), "MMXXIV");
        assert_eq!(encode(3888), "MMMDCCCLXXXVIII");
        assert_eq!(encode(3999), "MMMCMXCIX");
    }

    #[test]
    fn test_extended_values() {
        assert_eq!(encode(4_000), "Mↁ");
        assert_eq!(encode(5_000), "ↁ");
        assert_eq!(encode(6_000), "ↁM");
        assert_eq!(encode(9_000), "Mↂ");
        assert_eq!(encode(10_000), "ↂ");
        assert_eq!(encode(14_999), "ↂMↁCMXCIX");
        assert_eq!(encode(39_999), "ↂↂↂMↂCMXCIX");
    }

    #[test]
    fn test_non_positive_has_no_representation() {
        assert_eq!(to_roman(0), Ok(None));
        assert_eq!(to_roman(-1), Ok(None));
        assert_eq!(to_roman(i64::MIN), Ok(None));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            to_roman(40_000),
            Err(RomanError::OutOfRange {
                value: 40_000,
                max: 39_999
            })
        );
        assert!(to_roman(i64::MAX).is_err());
    }

    #[test]
    fn test_classical_encoder() {
        let encoder = RomanEncoder::classical();
        assert_eq!(encoder.max_value(), 3_999);
        assert_eq!(encoder.encode(3_999).unwrap().unwrap(), "MMMCMXCIX");
        assert_eq!(
            encoder.encode(4_000),
            Err(RomanError::OutOfRange {
                value: 4_000,
                max: 3_999
            })
        );
    }

    #[test]
    fn test_custom_max_value() {
        let encoder = RomanEncoder::new(EncoderConfig::default().with_max_value(50)).unwrap();
        assert!(encoder.supports(50));
        assert!(!encoder.supports(51));
        assert!(!encoder.supports(0));
        assert_eq!(encoder.encode(50).unwrap().unwrap(), "L");
        assert!(encoder.encode(51).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = RomanEncoder::try_from(EncoderConfig::default().with_max_value(100_000));
        assert!(matches!(
            result,
            Err(ConfigError::MaxValueOutOfBounds { value: 100_000, .. })
        ));
    }

    #[test]
    fn test_extension_trait() {
        assert_eq!(7u8.to_roman().unwrap().unwrap(), "VII");
        assert_eq!(2024i32.to_roman().unwrap().unwrap(), "MMXXIV");
        assert_eq!(12usize.to_roman().unwrap().unwrap(), "XII");
        assert_eq!((-3i16).to_roman().unwrap(), None);
        assert_eq!(0u32.to_roman().unwrap(), None);
        assert_eq!(
            u64::MAX.to_roman(),
            Err(RomanError::OutOfRange {
                value: i64::MAX,
                max: 39_999
            })
        );
    }

    #[test]
    fn test_encoder_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RomanEncoder>();
        assert_send_sync::<RomanNumeral>();
    }
}
