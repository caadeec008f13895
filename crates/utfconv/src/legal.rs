//! UTF-8 legality checks.
//!
//! Overlong forms, encoded surrogates and values above U+10FFFF are all
//! rejected by bounding the byte right after the lead, so no full decode is
//! needed to tell a legal sequence from an illegal one.

use crate::tables::trailing_units;

/// Returns whether `sequence` is exactly one legal UTF-8 encoded code point.
///
/// The declared length is `sequence.len()` and is normally derived from the
/// lead byte with [`trailing_units`]. Lengths outside `1..=4` are never legal.
///
/// ```rust
/// use utfconv::is_legal_utf8;
///
/// assert!(is_legal_utf8(b"A"));
/// assert!(is_legal_utf8(&[0xE2, 0x82, 0xAC]));
/// // Overlong encoding of U+0000.
/// assert!(!is_legal_utf8(&[0xC0, 0x80]));
/// // Encoded surrogate U+D800.
/// assert!(!is_legal_utf8(&[0xED, 0xA0, 0x80]));
/// ```
#[must_use]
pub fn is_legal_utf8(sequence: &[u8]) -> bool {
    let Some((&lead, rest)) = sequence.split_first() else {
        return false;
    };
    if rest.len() > 3 {
        return false;
    }

    // Walk the continuation bytes from the last one back to the second.
    for (i, &unit) in rest.iter().enumerate().rev() {
        if !(0x80..=0xBF).contains(&unit) {
            return false;
        }
        // The byte after the lead is narrowed further for some leads.
        let in_bounds = i > 0
            || match lead {
                0xE0 => unit >= 0xA0,
                0xED => unit <= 0x9F,
                0xF0 => unit >= 0x90,
                0xF4 => unit <= 0x8F,
                _ => true,
            };
        if !in_bounds {
            return false;
        }
    }

    !(0x80..0xC2).contains(&lead) && lead <= 0xF4
}

/// Returns whether `source` starts with a complete, legal UTF-8 sequence.
///
/// The sequence length is taken from the first byte. An empty source, or one
/// that ends before the declared length, is not legal.
///
/// ```rust
/// use utfconv::is_legal_utf8_sequence;
///
/// assert!(is_legal_utf8_sequence("€uro".as_bytes()));
/// assert!(!is_legal_utf8_sequence(&[0xF0, 0x90]));
/// assert!(!is_legal_utf8_sequence(&[]));
/// ```
#[must_use]
pub fn is_legal_utf8_sequence(source: &[u8]) -> bool {
    let Some(&lead) = source.first() else {
        return false;
    };
    let length = usize::from(trailing_units(lead)) + 1;
    source.get(..length).is_some_and(is_legal_utf8)
}
