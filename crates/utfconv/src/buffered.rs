//! Owned-buffer adapters over the slice functions.
//!
//! These run the "target exhausted, grow and retry" loop for the caller and
//! report the first source problem as a [`TranscodeError`]. They are only
//! available with the `alloc` feature.
//!
//! The adapters always see the whole input, so under
//! [`ConversionFlags::Lenient`] a high surrogate that ends UTF-16 input is
//! unpaired and becomes U+FFFD, where the slice functions would report
//! [`ConversionResult::SourceExhausted`](crate::ConversionResult::SourceExhausted)
//! and wait for more input.
//!
//! ```rust
//! use utfconv::{ConversionFlags, TranscodeError, buffered};
//!
//! let utf16 = buffered::utf8_to_utf16_vec("añ𝄞".as_bytes(), ConversionFlags::Strict)?;
//! assert_eq!(utf16, [0x61, 0xF1, 0xD834, 0xDD1E]);
//!
//! let text = buffered::utf16_to_string(&utf16, ConversionFlags::Strict)?;
//! assert_eq!(text, "añ𝄞");
//! # Ok::<(), TranscodeError>(())
//! ```

use alloc::{string::String, vec, vec::Vec};

use crate::{
    ConversionFlags, ConversionResult, TranscodeError,
    tables::REPLACEMENT_CHAR,
    transcode::transcode,
    unit::{SourceUnit, TargetUnit},
};

/// Smallest target handed to the core; any single code point fits in it.
const MIN_CAPACITY: usize = 4;

fn transcode_to_vec<S: SourceUnit, T: TargetUnit + Default>(
    src: &[S],
    flags: ConversionFlags,
    capacity: usize,
) -> Result<Vec<T>, TranscodeError> {
    let mut out = vec![T::default(); capacity.max(MIN_CAPACITY)];
    let mut read = 0;
    let mut written = 0;

    loop {
        let conversion = transcode(&src[read..], &mut out[written..], flags);
        if conversion.result == ConversionResult::SourceExhausted
            && !flags.is_strict()
            && S::dangles(&src[read + conversion.read..])
        {
            read += conversion.read + 1;
            written += conversion.written;
            let end = written + T::encoded_len(REPLACEMENT_CHAR);
            if out.len() < end {
                out.resize(end, T::default());
            }
            T::encode(REPLACEMENT_CHAR, &mut out[written..end]);
            written = end;
            trace!(
                "{} -> {}: replaced unpaired unit at end of input",
                S::ENCODING,
                T::ENCODING
            );
            continue;
        }

        let conversion = conversion
            .into_result()
            .map_err(|err| err.shifted(read))?;
        read += conversion.read;
        written += conversion.written;

        if conversion.is_success() {
            out.truncate(written);
            return Ok(out);
        }

        let grown = out.len() * 2;
        trace!(
            "{} -> {}: growing target from {} to {grown} units at offset {read}",
            S::ENCODING,
            T::ENCODING,
            out.len()
        );
        out.resize(grown, T::default());
    }
}

/// Converts UTF-8 to a new UTF-16 buffer.
///
/// # Errors
///
/// Returns the first truncated or illegal sequence in `src`.
pub fn utf8_to_utf16_vec(src: &[u8], flags: ConversionFlags) -> Result<Vec<u16>, TranscodeError> {
    transcode_to_vec(src, flags, src.len())
}

/// Converts UTF-16 to a new UTF-8 buffer.
///
/// # Errors
///
/// Returns the first truncated or illegal sequence in `src`.
pub fn utf16_to_utf8_vec(src: &[u16], flags: ConversionFlags) -> Result<Vec<u8>, TranscodeError> {
    transcode_to_vec(src, flags, src.len() * 3 / 2)
}

/// Converts UTF-8 to a new UTF-32 buffer.
///
/// # Errors
///
/// Returns the first truncated or illegal sequence in `src`.
pub fn utf8_to_utf32_vec(src: &[u8], flags: ConversionFlags) -> Result<Vec<u32>, TranscodeError> {
    transcode_to_vec(src, flags, src.len())
}

/// Converts UTF-32 to a new UTF-8 buffer.
///
/// # Errors
///
/// Returns the first illegal value in `src`.
pub fn utf32_to_utf8_vec(src: &[u32], flags: ConversionFlags) -> Result<Vec<u8>, TranscodeError> {
    transcode_to_vec(src, flags, src.len() * 2)
}

/// Converts UTF-16 to a new UTF-32 buffer.
///
/// # Errors
///
/// Returns the first truncated or illegal sequence in `src`.
pub fn utf16_to_utf32_vec(
    src: &[u16],
    flags: ConversionFlags,
) -> Result<Vec<u32>, TranscodeError> {
    transcode_to_vec(src, flags, src.len())
}

/// Converts UTF-32 to a new UTF-16 buffer.
///
/// # Errors
///
/// Returns the first illegal value in `src`.
pub fn utf32_to_utf16_vec(
    src: &[u32],
    flags: ConversionFlags,
) -> Result<Vec<u16>, TranscodeError> {
    transcode_to_vec(src, flags, src.len())
}

/// Decodes UTF-16 into a [`String`].
///
/// # Errors
///
/// Returns the first truncated or illegal sequence in `src`.
pub fn utf16_to_string(src: &[u16], flags: ConversionFlags) -> Result<String, TranscodeError> {
    into_string(utf16_to_utf8_vec(src, flags)?)
}

/// Decodes UTF-32 into a [`String`].
///
/// # Errors
///
/// Returns the first illegal value in `src`.
pub fn utf32_to_string(src: &[u32], flags: ConversionFlags) -> Result<String, TranscodeError> {
    into_string(utf32_to_utf8_vec(src, flags)?)
}

// The core only ever writes scalar values, so this never fails in practice.
fn into_string(bytes: Vec<u8>) -> Result<String, TranscodeError> {
    String::from_utf8(bytes).map_err(|err| TranscodeError::Illegal {
        offset: err.utf8_error().valid_up_to(),
    })
}
