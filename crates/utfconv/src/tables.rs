//! Static lookup tables and fundamental constants shared by every direction.
//!
//! Everything here is plain `const`/`static` data: there is no runtime
//! initialization, so the tables are safe to read from any thread.

/// Substituted for irregular input under [`ConversionFlags::Lenient`], and for
/// out-of-range values written as UTF-8 under either policy.
///
/// [`ConversionFlags::Lenient`]: crate::ConversionFlags::Lenient
pub const REPLACEMENT_CHAR: u32 = 0xFFFD;
/// Largest code point of the Basic Multilingual Plane.
pub const MAX_BMP: u32 = 0xFFFF;
/// Largest code point representable in UTF-16.
pub const MAX_UTF16: u32 = 0x10_FFFF;
/// Largest value a (historical) UTF-32 unit may carry.
pub const MAX_UTF32: u32 = 0x7FFF_FFFF;
/// Largest legal Unicode code point.
pub const MAX_LEGAL_UTF32: u32 = 0x10_FFFF;

pub(crate) const SUR_HIGH_START: u32 = 0xD800;
pub(crate) const SUR_HIGH_END: u32 = 0xDBFF;
pub(crate) const SUR_LOW_START: u32 = 0xDC00;
pub(crate) const SUR_LOW_END: u32 = 0xDFFF;

pub(crate) const HALF_SHIFT: u32 = 10;
pub(crate) const HALF_BASE: u32 = 0x1_0000;
pub(crate) const HALF_MASK: u32 = 0x3FF;

/// Number of trailing bytes expected after each possible lead byte.
///
/// Legal UTF-8 never uses the 4 and 5 entries; they are kept so that such
/// sequences are measured (and then rejected) instead of misread.
#[rustfmt::skip]
static TRAILING_BYTES_FOR_UTF8: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5,
];

/// Subtracted after accumulating a sequence, indexed by its trailing count.
/// Removes the lead mark and every `10xxxxxx` continuation prefix in one step.
static OFFSETS_FROM_UTF8: [u32; 6] = [
    0x0000_0000,
    0x0000_3080,
    0x000E_2080,
    0x03C8_2080,
    0xFA08_2080,
    0x8208_2080,
];

/// OR-ed into the lead byte, indexed by total sequence length.
static FIRST_BYTE_MARK: [u8; 7] = [0x00, 0x00, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC];

/// Returns how many continuation bytes follow `lead` in a UTF-8 sequence.
///
/// The result is in `0..=5`. Anything above 3 is never legal.
#[inline]
#[must_use]
pub fn trailing_units(lead: u8) -> u8 {
    TRAILING_BYTES_FOR_UTF8[usize::from(lead)]
}

/// Returns the offset subtracted from an accumulated sequence with `extra`
/// trailing bytes.
///
/// # Panics
///
/// Panics if `extra > 5`.
#[inline]
#[must_use]
pub fn decode_offset(extra: usize) -> u32 {
    OFFSETS_FROM_UTF8[extra]
}

/// Returns the mark OR-ed into the lead byte of a `byte_count`-byte sequence.
///
/// # Panics
///
/// Panics if `byte_count > 6`.
#[inline]
#[must_use]
pub fn encode_lead_mark(byte_count: usize) -> u8 {
    FIRST_BYTE_MARK[byte_count]
}

#[inline]
pub(crate) fn is_surrogate(cp: u32) -> bool {
    (SUR_HIGH_START..=SUR_LOW_END).contains(&cp)
}

#[inline]
pub(crate) fn is_high_surrogate(cp: u32) -> bool {
    (SUR_HIGH_START..=SUR_HIGH_END).contains(&cp)
}

#[inline]
pub(crate) fn is_low_surrogate(cp: u32) -> bool {
    (SUR_LOW_START..=SUR_LOW_END).contains(&cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_units_by_lead_class() {
        assert_eq!(trailing_units(0x00), 0);
        assert_eq!(trailing_units(0x7F), 0);
        // Continuation bytes are measured as single units and rejected later.
        assert_eq!(trailing_units(0x80), 0);
        assert_eq!(trailing_units(0xBF), 0);
        assert_eq!(trailing_units(0xC0), 1);
        assert_eq!(trailing_units(0xDF), 1);
        assert_eq!(trailing_units(0xE0), 2);
        assert_eq!(trailing_units(0xEF), 2);
        assert_eq!(trailing_units(0xF0), 3);
        assert_eq!(trailing_units(0xF7), 3);
        assert_eq!(trailing_units(0xF8), 4);
        assert_eq!(trailing_units(0xFB), 4);
        assert_eq!(trailing_units(0xFC), 5);
        assert_eq!(trailing_units(0xFF), 5);
    }

    #[test]
    fn offsets_strip_marks() {
        // "é" is C3 A9: (0xC3 << 6) + 0xA9 - offset == 0xE9
        assert_eq!((0xC3 << 6) + 0xA9 - decode_offset(1), 0xE9);
        // U+20AC is E2 82 AC
        let acc = (((0xE2 << 6) + 0x82) << 6) + 0xAC;
        assert_eq!(acc - decode_offset(2), 0x20AC);
    }

    #[test]
    fn lead_marks() {
        assert_eq!(encode_lead_mark(1), 0x00);
        assert_eq!(encode_lead_mark(2), 0xC0);
        assert_eq!(encode_lead_mark(3), 0xE0);
        assert_eq!(encode_lead_mark(4), 0xF0);
    }

    #[test]
    fn surrogate_ranges() {
        assert!(!is_surrogate(0xD7FF));
        assert!(is_high_surrogate(0xD800));
        assert!(is_high_surrogate(0xDBFF));
        assert!(!is_low_surrogate(0xDBFF));
        assert!(is_low_surrogate(0xDC00));
        assert!(is_surrogate(0xDFFF));
        assert!(!is_surrogate(0xE000));
    }
}
