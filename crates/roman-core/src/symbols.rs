//! # Symbol Table
//!
//! The glyphs and the ordered value→text table driving the greedy encoder.
//!
//! ## Alphabet
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Roman Alphabet                                  │
//! │                                                                         │
//! │  Classical (Latin letters)         Apostrophus thousands                │
//! │  ─────────────────────────         ─────────────────────                │
//! │  I = 1      C = 100                ↁ U+2181 =  5,000                    │
//! │  V = 5      D = 500                ↂ U+2182 = 10,000                    │
//! │  X = 10     M = 1,000                                                   │
//! │  L = 50                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The Latin letters are used rather than the Unicode "Roman numeral"
//! compatibility block (U+2160..), following the Unicode recommendation for
//! Roman numerals. Only the two thousands glyphs have no Latin counterpart.

use serde::{Deserialize, Serialize};

/// ROMAN NUMERAL FIVE THOUSAND (U+2181).
pub const FIVE_THOUSAND: char = '\u{2181}';

/// ROMAN NUMERAL TEN THOUSAND (U+2182).
pub const TEN_THOUSAND: char = '\u{2182}';

// =============================================================================
// Symbol
// =============================================================================

/// A single Roman numeral glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
    FiveThousand,
    TenThousand,
}

impl Symbol {
    /// All glyphs, smallest value first.
    pub const ALL: [Symbol; 9] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
        Symbol::FiveThousand,
        Symbol::TenThousand,
    ];

    /// Returns the character written for this glyph.
    pub const fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
            Symbol::FiveThousand => FIVE_THOUSAND,
            Symbol::TenThousand => TEN_THOUSAND,
        }
    }

    /// Returns the numeric value of this glyph.
    pub const fn value(self) -> i64 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1_000,
            Symbol::FiveThousand => 5_000,
            Symbol::TenThousand => 10_000,
        }
    }

    /// Looks up the glyph written as `c`.
    pub fn from_char(c: char) -> Option<Symbol> {
        Symbol::ALL.into_iter().find(|s| s.as_char() == c)
    }

    /// True for the seven Latin letters I through M.
    pub const fn is_classical(self) -> bool {
        !matches!(self, Symbol::FiveThousand | Symbol::TenThousand)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// =============================================================================
// Symbol Pair
// =============================================================================

/// One row of the encoding table: a value and the text emitted for it.
///
/// Subtractive rows (`CM`, `Mↂ`, ...) carry two-glyph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolPair {
    pub value: i64,
    pub text: &'static str,
}

impl SymbolPair {
    const fn new(value: i64, text: &'static str) -> Self {
        SymbolPair { value, text }
    }
}

/// Encoding table, largest value first.
///
/// ## Invariants
/// - Values are strictly decreasing
/// - The last row is `1 → "I"`, so any positive remainder always matches
pub const SYMBOL_TABLE: [SymbolPair; 17] = [
    SymbolPair::new(10_000, "\u{2182}"),
    SymbolPair::new(9_000, "M\u{2182}"),
    SymbolPair::new(5_000, "\u{2181}"),
    SymbolPair::new(4_000, "M\u{2181}"),
    SymbolPair::new(1_000, "M"),
    SymbolPair::new(900, "CM"),
    SymbolPair::new(500, "D"),
    SymbolPair::new(400, "CD"),
    SymbolPair::new(100, "C"),
    SymbolPair::new(90, "XC"),
    SymbolPair::new(50, "L"),
    SymbolPair::new(40, "XL"),
    SymbolPair::new(10, "X"),
    SymbolPair::new(9, "IX"),
    SymbolPair::new(5, "V"),
    SymbolPair::new(4, "IV"),
    SymbolPair::new(1, "I"),
];

// =============================================================================
// Unit Tests
// =============================================================================
