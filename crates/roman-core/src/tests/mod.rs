//! Cross-module tests and the decoder they check against.


use crate::symbols::Symbol;

/// Test-only decoder, written independently of the encoding table.
///
/// Standard rule: a glyph smaller than its right neighbour is subtracted.
/// Returns `None` for any character outside the alphabet.
pub(crate) fn decode(text: &str) -> Option<i64> {
    let values: Vec<i64> = text
        .chars()
        .map(|c| Symbol::from_char(c).map(Symbol::value))
        .collect::<Option<_>>()?;

    let mut total = 0;
    for (i, value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(next) if value < next => total -= value,
            _ => total += value,
        }
    }
    Some(total)
}

#[test]
fn test_decoder_sanity() {
    assert_eq!(decode("MCMXCIV"), Some(1994));
    assert_eq!(decode("Mↂ"), Some(9_000));
    assert_eq!(decode("ABC"), None);
}

#[test]
fn test_classical_range_round_trips() {
    for n in 1..=crate::CLASSICAL_MAX_VALUE {
        let numeral = crate::to_roman(n).unwrap().unwrap();
        assert_eq!(decode(numeral.as_str()), Some(n), "{} -> {}", n, numeral);
        assert!(numeral.is_classical(), "{} -> {}", n, numeral);
    }
}

#[test]
fn test_extended_range_round_trips() {
    for n in (crate::CLASSICAL_MAX_VALUE + 1)..=crate::EXTENDED_MAX_VALUE {
        let numeral = crate::to_roman(n).unwrap().unwrap();
        assert_eq!(decode(numeral.as_str()), Some(n), "{} -> {}", n, numeral);
    }
}

#[test]
fn test_no_glyph_repeats_more_than_three_times() {
    // Canonical form never writes IIII, XXXX, ↂↂↂↂ and so on.
    for n in 1..=crate::EXTENDED_MAX_VALUE {
        let numeral = crate::to_roman(n).unwrap().unwrap();
        let glyphs: Vec<Symbol> = numeral.symbols().collect();
        for run in glyphs.windows(4) {
            assert!(
                !run.iter().all(|g| *g == run[0]),
                "{} -> {} repeats {}",
                n,
                numeral,
                run[0]
            );
        }
    }
}
