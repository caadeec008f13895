use crate::error::TranscodeError;

/// How a conversion call ended.
///
/// Only the first problem encountered is reported; the conversion stops there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConversionResult {
    /// The whole source was converted.
    Success,
    /// The source ends in the middle of a sequence. Supply more input
    /// starting at [`Conversion::read`] and call again.
    SourceExhausted,
    /// The target has no room for the next code point. Drain or grow the
    /// target and call again from the reported positions.
    TargetExhausted,
    /// The source holds a malformed sequence, or one the policy rejects.
    SourceIllegal,
}

/// Outcome of one conversion call, with both cursors.
///
/// `read` is the index of the first source unit that was not consumed, and
/// `written` is the number of target units that were completely written. A
/// follow-up call on `&src[read..]` and `&mut dst[written..]` resumes exactly
/// where this one stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Conversion {
    /// Terminal state of the call.
    pub result: ConversionResult,
    /// Source units consumed.
    pub read: usize,
    /// Target units produced.
    pub written: usize,
    /// The last consumed unit was out of range and written as U+FFFD before
    /// the call stopped with [`ConversionResult::SourceIllegal`].
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) soft_error: bool,
}

impl Conversion {
    pub(crate) fn new(result: ConversionResult, read: usize, written: usize) -> Self {
        Self {
            result,
            read,
            written,
            soft_error: false,
        }
    }

    pub(crate) fn soft_illegal(read: usize, written: usize) -> Self {
        Self {
            result: ConversionResult::SourceIllegal,
            read,
            written,
            soft_error: true,
        }
    }

    /// Returns `true` if the whole source was converted.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result == ConversionResult::Success
    }

    /// Maps the source-side failures onto [`TranscodeError`].
    ///
    /// [`ConversionResult::TargetExhausted`] is not a source problem and maps
    /// to `Ok`, as does [`ConversionResult::Success`]; callers that care check
    /// [`Conversion::result`] first.
    ///
    /// # Errors
    ///
    /// [`TranscodeError::Truncated`] for [`ConversionResult::SourceExhausted`],
    /// and [`TranscodeError::Illegal`] for [`ConversionResult::SourceIllegal`].
    /// The offset is [`Conversion::read`] for hard errors. For the soft
    /// out-of-range error the offending unit was consumed, so the offset
    /// points one unit back.
    ///
    /// ```rust
    /// use utfconv::{ConversionFlags, TranscodeError, utf8_to_utf32};
    ///
    /// let mut dst = [0u32; 4];
    /// let conversion = utf8_to_utf32(b"ab\xC0\x80", &mut dst, ConversionFlags::Strict);
    /// assert_eq!(
    ///     conversion.into_result(),
    ///     Err(TranscodeError::Illegal { offset: 2 })
    /// );
    /// ```
    pub fn into_result(self) -> Result<Self, TranscodeError> {
        match self.result {
            ConversionResult::Success | ConversionResult::TargetExhausted => Ok(self),
            ConversionResult::SourceExhausted => {
                Err(TranscodeError::Truncated { offset: self.read })
            }
            ConversionResult::SourceIllegal => Err(TranscodeError::Illegal {
                offset: self.illegal_offset(),
            }),
        }
    }

    /// Index of the unit that caused [`ConversionResult::SourceIllegal`].
    pub(crate) fn illegal_offset(&self) -> usize {
        self.read - usize::from(self.soft_error)
    }
}
