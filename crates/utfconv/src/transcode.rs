//! The six conversion directions.
//!
//! Every direction runs the same loop: scan one code point off the source,
//! apply the policy, confirm the target has room for all of its units, then
//! write them. Nothing is written for a code point that cannot be finished,
//! so both cursors always sit on a sequence boundary.
//!
//! # Examples
//!
//! Draining a small target in a loop:
//!
//! ```rust
//! use utfconv::{ConversionFlags, ConversionResult, utf8_to_utf16};
//!
//! let mut src: &[u8] = "grüße, 世界".as_bytes();
//! let mut out = Vec::new();
//! let mut dst = [0u16; 4];
//! loop {
//!     let conversion = utf8_to_utf16(src, &mut dst, ConversionFlags::Strict);
//!     out.extend_from_slice(&dst[..conversion.written]);
//!     src = &src[conversion.read..];
//!     match conversion.result {
//!         ConversionResult::TargetExhausted => continue,
//!         ConversionResult::Success => break,
//!         other => panic!("unexpected {other:?}"),
//!     }
//! }
//! assert_eq!(String::from_utf16(&out).unwrap(), "grüße, 世界");
//! ```

use crate::{
    Conversion, ConversionFlags, ConversionResult,
    tables::{MAX_LEGAL_UTF32, REPLACEMENT_CHAR, is_surrogate},
    unit::{Scan, SourceUnit, TargetUnit},
};

/// What the policy makes of a scanned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    /// Emit the value as is.
    Emit(u32),
    /// Emit U+FFFD in its place and carry on.
    Replace,
    /// Stop before the value with `SourceIllegal`.
    Reject,
    /// Emit U+FFFD, consume the value, then stop with `SourceIllegal`.
    ReplaceAndStop,
}

/// `soft_over_range` selects `ReplaceAndStop` over `Reject` for strict
/// handling of values above U+10FFFF.
fn judge(cp: u32, flags: ConversionFlags, soft_over_range: bool) -> Verdict {
    if is_surrogate(cp) {
        if flags.is_strict() {
            Verdict::Reject
        } else {
            Verdict::Replace
        }
    } else if cp > MAX_LEGAL_UTF32 {
        match (flags.is_strict(), soft_over_range) {
            (false, _) => Verdict::Replace,
            (true, true) => Verdict::ReplaceAndStop,
            (true, false) => Verdict::Reject,
        }
    } else {
        Verdict::Emit(cp)
    }
}

pub(crate) fn transcode<S: SourceUnit, T: TargetUnit>(
    src: &[S],
    dst: &mut [T],
    flags: ConversionFlags,
) -> Conversion {
    let mut read = 0;
    let mut written = 0;

    let conversion = loop {
        let Some(rest) = src.get(read..).filter(|rest| !rest.is_empty()) else {
            break Conversion::new(ConversionResult::Success, read, written);
        };

        let (cp, len) = match S::scan(rest) {
            Scan::Value { cp, len } => (cp, len),
            Scan::Exhausted => {
                break Conversion::new(ConversionResult::SourceExhausted, read, written);
            }
            Scan::Illegal => {
                break Conversion::new(ConversionResult::SourceIllegal, read, written);
            }
        };

        let verdict = judge(cp, flags, T::SOFT_OVER_RANGE);
        let cp = match verdict {
            Verdict::Emit(cp) => cp,
            Verdict::Replace | Verdict::ReplaceAndStop => REPLACEMENT_CHAR,
            Verdict::Reject => {
                break Conversion::new(ConversionResult::SourceIllegal, read, written);
            }
        };

        let needed = T::encoded_len(cp);
        let Some(out) = dst.get_mut(written..written + needed) else {
            break Conversion::new(ConversionResult::TargetExhausted, read, written);
        };
        T::encode(cp, out);
        read += len;
        written += needed;

        if verdict == Verdict::ReplaceAndStop {
            break Conversion::soft_illegal(read, written);
        }
    };

    #[cfg(any(test, feature = "fuzzing"))]
    assert!(
        conversion.read <= src.len() && conversion.written <= dst.len(),
        "cursor out of bounds: {conversion:?}"
    );

    if !conversion.is_success() {
        trace!(
            "{} -> {}: {:?} after reading {} and writing {} units",
            S::ENCODING,
            T::ENCODING,
            conversion.result,
            conversion.read,
            conversion.written
        );
    }

    conversion
}

/// Converts UTF-8 to UTF-16.
///
/// Supplementary-plane code points become surrogate pairs; a pair is only
/// written when both units fit.
///
/// ```rust
/// use utfconv::{ConversionFlags, ConversionResult, utf8_to_utf16};
///
/// let mut dst = [0u16; 2];
/// let conversion = utf8_to_utf16("𐀀".as_bytes(), &mut dst, ConversionFlags::Strict);
/// assert_eq!(conversion.result, ConversionResult::Success);
/// assert_eq!(dst, [0xD800, 0xDC00]);
/// ```
pub fn utf8_to_utf16(src: &[u8], dst: &mut [u16], flags: ConversionFlags) -> Conversion {
    transcode(src, dst, flags)
}

/// Converts UTF-16 to UTF-8.
///
/// A high surrogate that ends the source is left unconsumed with
/// [`ConversionResult::SourceExhausted`], since its partner may still arrive.
///
/// ```rust
/// use utfconv::{ConversionFlags, ConversionResult, utf16_to_utf8};
///
/// let mut dst = [0u8; 8];
/// let conversion = utf16_to_utf8(&[0x0041, 0xD83D], &mut dst, ConversionFlags::Strict);
/// assert_eq!(conversion.result, ConversionResult::SourceExhausted);
/// assert_eq!((conversion.read, conversion.written), (1, 1));
/// ```
pub fn utf16_to_utf8(src: &[u16], dst: &mut [u8], flags: ConversionFlags) -> Conversion {
    transcode(src, dst, flags)
}

/// Converts UTF-8 to UTF-32.
///
/// ```rust
/// use utfconv::{ConversionFlags, ConversionResult, utf8_to_utf32};
///
/// let mut dst = [0u32; 1];
/// let conversion = utf8_to_utf32("€$".as_bytes(), &mut dst, ConversionFlags::Strict);
/// assert_eq!(conversion.result, ConversionResult::TargetExhausted);
/// assert_eq!((conversion.read, conversion.written), (3, 1));
/// assert_eq!(dst, [0x20AC]);
/// ```
pub fn utf8_to_utf32(src: &[u8], dst: &mut [u32], flags: ConversionFlags) -> Conversion {
    transcode(src, dst, flags)
}

/// Converts UTF-32 to UTF-8.
///
/// Values above U+10FFFF are written as U+FFFD. Under
/// [`ConversionFlags::Strict`] the call then stops with
/// [`ConversionResult::SourceIllegal`], having consumed the offending unit.
///
/// ```rust
/// use utfconv::{ConversionFlags, ConversionResult, utf32_to_utf8};
///
/// let mut dst = [0u8; 8];
/// let conversion = utf32_to_utf8(&[0x11_0000, 0x41], &mut dst, ConversionFlags::Strict);
/// assert_eq!(conversion.result, ConversionResult::SourceIllegal);
/// assert_eq!((conversion.read, conversion.written), (1, 3));
/// assert_eq!(&dst[..3], "\u{FFFD}".as_bytes());
/// ```
pub fn utf32_to_utf8(src: &[u32], dst: &mut [u8], flags: ConversionFlags) -> Conversion {
    transcode(src, dst, flags)
}

/// Converts UTF-16 to UTF-32, joining surrogate pairs.
///
/// ```rust
/// use utfconv::{ConversionFlags, ConversionResult, utf16_to_utf32};
///
/// let mut dst = [0u32; 2];
/// let conversion = utf16_to_utf32(&[0xD83D, 0xDE00, 0x0021], &mut dst, ConversionFlags::Strict);
/// assert_eq!(conversion.result, ConversionResult::Success);
/// assert_eq!(dst, [0x1F600, 0x21]);
/// ```
pub fn utf16_to_utf32(src: &[u16], dst: &mut [u32], flags: ConversionFlags) -> Conversion {
    transcode(src, dst, flags)
}

/// Converts UTF-32 to UTF-16, splitting supplementary code points.
///
/// Unlike [`utf32_to_utf8`], values above U+10FFFF are rejected outright
/// under [`ConversionFlags::Strict`]: nothing is written for them and the
/// cursor stays on the offending unit.
///
/// ```rust
/// use utfconv::{ConversionFlags, ConversionResult, utf32_to_utf16};
///
/// let mut dst = [0u16; 3];
/// let conversion = utf32_to_utf16(&[0xDFFF, 0x10FFFF], &mut dst, ConversionFlags::Lenient);
/// assert_eq!(conversion.result, ConversionResult::Success);
/// assert_eq!(dst, [0xFFFD, 0xDBFF, 0xDFFF]);
/// ```
pub fn utf32_to_utf16(src: &[u32], dst: &mut [u16], flags: ConversionFlags) -> Conversion {
    transcode(src, dst, flags)
}
