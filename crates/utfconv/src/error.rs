use thiserror::Error;

/// A conversion stopped because of its source.
///
/// Returned by [`Conversion::into_result`](crate::Conversion::into_result) and
/// by the owned-buffer adapters. `offset` is the index, in source units, of
/// the first unit of the offending sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscodeError {
    /// The source ends in the middle of a sequence.
    #[error("truncated sequence at offset {offset}")]
    Truncated {
        /// Start of the incomplete sequence.
        offset: usize,
    },
    /// The source holds a malformed sequence, or one the policy rejects.
    #[error("illegal sequence at offset {offset}")]
    Illegal {
        /// Start of the rejected sequence.
        offset: usize,
    },
}

impl TranscodeError {
    /// Source offset of the offending sequence.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            Self::Truncated { offset } | Self::Illegal { offset } => offset,
        }
    }

    #[cfg(any(test, feature = "alloc"))]
    pub(crate) fn shifted(self, base: usize) -> Self {
        match self {
            Self::Truncated { offset } => Self::Truncated {
                offset: base + offset,
            },
            Self::Illegal { offset } => Self::Illegal {
                offset: base + offset,
            },
        }
    }
}
