//! Resumable buffer-to-buffer transcoding between UTF-8, UTF-16 and UTF-32.
//!
//! Each direction is a single function taking a source slice, a target slice
//! and a [`ConversionFlags`] policy. It returns a [`Conversion`] holding the
//! terminal [`ConversionResult`] and how many units were read and written.
//! Both counts always land on a code point boundary, so a call that ran out of
//! input or output space can be resumed from them without losing or repeating
//! anything.
//!
//! The core never allocates. Owned-buffer helpers live in [`buffered`] behind
//! the `alloc` feature (on by default).
//!
//! ```rust
//! use utfconv::{ConversionFlags, ConversionResult, utf8_to_utf32};
//!
//! let mut dst = [0u32; 8];
//! let conversion = utf8_to_utf32("héllo".as_bytes(), &mut dst, ConversionFlags::Strict);
//! assert_eq!(conversion.result, ConversionResult::Success);
//! assert_eq!(&dst[..conversion.written], [0x68, 0xE9, 0x6C, 0x6C, 0x6F]);
//! ```

#![no_std]
#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod flags;
mod legal;
mod result;
pub mod tables;
mod transcode;
mod unit;

#[cfg(feature = "alloc")]
pub mod buffered;

#[cfg(test)]
mod tests;

pub use error::TranscodeError;
pub use flags::ConversionFlags;
pub use legal::{is_legal_utf8, is_legal_utf8_sequence};
pub use result::{Conversion, ConversionResult};
pub use transcode::{
    utf8_to_utf16, utf8_to_utf32, utf16_to_utf8, utf16_to_utf32, utf32_to_utf8, utf32_to_utf16,
};
