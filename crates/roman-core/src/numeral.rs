//! # Numeral Module
//!
//! Provides the `RomanNumeral` type returned by the encoder.
//!
//! ## Why a Newtype?
//! A bare `String` could hold anything. A `RomanNumeral` can only be built by
//! the encoder, so holding one proves the text is a canonical numeral over
//! the nine-glyph alphabet.
//!
//! ## Usage
//! ```rust
//! use roman_core::to_roman;
//!
//! let numeral = to_roman(1994).unwrap().unwrap();
//! assert_eq!(numeral.as_str(), "MCMXCIV");
//! assert_eq!(numeral.to_string(), "MCMXCIV");
//! assert_eq!(numeral.symbol_count(), 7);
//! ```

use serde::Serialize;
use std::fmt;

use crate::symbols::Symbol;

// =============================================================================
// RomanNumeral Type
// =============================================================================

/// A canonical Roman numeral.
///
/// ## Design Decisions
/// - **Single field tuple struct**: zero-cost wrapper over `String`
/// - **No public constructor**: only the encoder produces values
/// - **Serialize only**: serialized as the plain numeral text; parsing
///   numerals back is out of scope
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RomanNumeral(String);

impl RomanNumeral {
    pub(crate) fn from_encoded(text: String) -> Self {
        RomanNumeral(text)
    }

    /// Returns the numeral text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the numeral and returns the owned text.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of glyphs in the numeral.
    ///
    /// ## Note
    /// ↁ and ↂ are three bytes each in UTF-8, so this is not `len()`.
    ///
    /// ```rust
    /// use roman_core::to_roman;
    ///
    /// let numeral = to_roman(9_000).unwrap().unwrap();
    /// assert_eq!(numeral.symbol_count(), 2);
    /// assert_eq!(numeral.as_str().len(), 4);
    /// ```
    pub fn symbol_count(&self) -> usize {
        self.0.chars().count()
    }

    /// True when the numeral uses only the seven Latin letters.
    pub fn is_classical(&self) -> bool {
        self.0
            .chars()
            .filter_map(Symbol::from_char)
            .all(Symbol::is_classical)
    }

    /// Iterates the glyphs of the numeral.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.chars().filter_map(Symbol::from_char)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RomanNumeral> for String {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.0
    }
}

impl PartialEq<str> for RomanNumeral {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RomanNumeral {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
