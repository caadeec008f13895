/// Error-tolerance policy for a conversion.
///
/// The policy only decides what happens to input that is *irregular* but
/// still well formed at the code-unit level: unpaired surrogates and values
/// above U+10FFFF. Malformed UTF-8 (bad continuation bytes, overlong forms,
/// lead bytes above `0xF4`) is [`SourceIllegal`] under both policies.
///
/// # Examples
///
/// ```rust
/// use utfconv::{ConversionFlags, ConversionResult, utf16_to_utf8};
///
/// let src = [0xDC00_u16, u16::from(b'a')];
/// let mut dst = [0u8; 8];
///
/// let strict = utf16_to_utf8(&src, &mut dst, ConversionFlags::Strict);
/// assert_eq!(strict.result, ConversionResult::SourceIllegal);
///
/// let lenient = utf16_to_utf8(&src, &mut dst, ConversionFlags::Lenient);
/// assert_eq!(lenient.result, ConversionResult::Success);
/// assert_eq!(&dst[..lenient.written], "\u{FFFD}a".as_bytes());
/// ```
///
/// # Default
///
/// [`ConversionFlags::Strict`].
///
/// [`SourceIllegal`]: crate::ConversionResult::SourceIllegal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConversionFlags {
    /// Every irregularity stops the conversion with
    /// [`ConversionResult::SourceIllegal`](crate::ConversionResult::SourceIllegal).
    #[default]
    Strict,
    /// Unpaired surrogates and out-of-range values are replaced with U+FFFD
    /// and the conversion carries on.
    Lenient,
}

impl ConversionFlags {
    /// Returns `true` for [`ConversionFlags::Strict`].
    #[inline]
    #[must_use]
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}
