//! Per-width reading and writing of code units.
//!
//! [`SourceUnit`] reads one code point worth of units off the front of a
//! source slice, and [`TargetUnit`] measures and writes one code point into a
//! target slice. The generic driver in [`crate::transcode`] combines any pair
//! of them, so each direction is a plain instantiation.
#![allow(clippy::cast_possible_truncation)]

use crate::{
    legal::is_legal_utf8,
    tables::{
        HALF_BASE, HALF_MASK, HALF_SHIFT, MAX_BMP, MAX_LEGAL_UTF32, SUR_HIGH_START,
        SUR_LOW_START, decode_offset, encode_lead_mark, is_high_surrogate, is_low_surrogate,
        trailing_units,
    },
};

/// What the front of a source slice holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan {
    /// A value spanning `len` units. It can still be a lone surrogate or out
    /// of range; the driver applies the policy.
    Value { cp: u32, len: usize },
    /// The sequence continues past the end of the slice.
    Exhausted,
    /// The sequence is malformed.
    Illegal,
}

pub(crate) trait SourceUnit: Copy {
    /// Encoding name used in trace records.
    #[cfg(feature = "log")]
    const ENCODING: &'static str;

    /// Reads the code point at the front of `src`, which is never empty.
    fn scan(src: &[Self]) -> Scan;

    /// Returns `true` if `rest` is a single unit that [`SourceUnit::scan`]
    /// reports as exhausted only because its partner has not arrived yet.
    #[cfg(feature = "alloc")]
    fn dangles(_rest: &[Self]) -> bool {
        false
    }
}

pub(crate) trait TargetUnit: Copy {
    #[cfg(feature = "log")]
    const ENCODING: &'static str;

    /// Whether an out-of-range value is written as U+FFFD before a strict
    /// conversion stops, rather than rejected outright.
    const SOFT_OVER_RANGE: bool;

    /// Number of units `cp` occupies. `cp` is a scalar value or U+FFFD.
    fn encoded_len(cp: u32) -> usize;

    /// Writes `cp` into `dst`, which is exactly `encoded_len(cp)` long.
    fn encode(cp: u32, dst: &mut [Self]);
}

impl SourceUnit for u8 {
    #[cfg(feature = "log")]
    const ENCODING: &'static str = "UTF-8";

    fn scan(src: &[u8]) -> Scan {
        let extra = usize::from(trailing_units(src[0]));
        let Some(sequence) = src.get(..=extra) else {
            return Scan::Exhausted;
        };
        if !is_legal_utf8(sequence) {
            return Scan::Illegal;
        }
        Scan::Value {
            cp: accumulate_utf8(sequence),
            len: sequence.len(),
        }
    }
}

/// Folds a legal sequence into its code point.
///
/// Each byte is added whole and shifted; the marker bits left behind are
/// removed by a single subtraction of the per-length offset.
fn accumulate_utf8(sequence: &[u8]) -> u32 {
    let mut cp = 0u32;
    for (i, &unit) in sequence.iter().enumerate() {
        if i > 0 {
            cp <<= 6;
        }
        cp += u32::from(unit);
    }
    cp.wrapping_sub(decode_offset(sequence.len() - 1))
}

impl SourceUnit for u16 {
    #[cfg(feature = "log")]
    const ENCODING: &'static str = "UTF-16";

    fn scan(src: &[u16]) -> Scan {
        let first = u32::from(src[0]);
        if !is_high_surrogate(first) {
            return Scan::Value { cp: first, len: 1 };
        }
        match src.get(1).map(|&unit| u32::from(unit)) {
            Some(second) if is_low_surrogate(second) => Scan::Value {
                cp: ((first - SUR_HIGH_START) << HALF_SHIFT) + (second - SUR_LOW_START) + HALF_BASE,
                len: 2,
            },
            // Unpaired; reported as the lone surrogate itself.
            Some(_) => Scan::Value { cp: first, len: 1 },
            None => Scan::Exhausted,
        }
    }

    #[cfg(feature = "alloc")]
    fn dangles(rest: &[u16]) -> bool {
        matches!(rest, [unit] if is_high_surrogate(u32::from(*unit)))
    }
}

impl SourceUnit for u32 {
    #[cfg(feature = "log")]
    const ENCODING: &'static str = "UTF-32";

    fn scan(src: &[u32]) -> Scan {
        Scan::Value { cp: src[0], len: 1 }
    }
}

impl TargetUnit for u8 {
    #[cfg(feature = "log")]
    const ENCODING: &'static str = "UTF-8";
    const SOFT_OVER_RANGE: bool = true;

    fn encoded_len(cp: u32) -> usize {
        match cp {
            0..0x80 => 1,
            0x80..0x800 => 2,
            0x800..0x1_0000 => 3,
            _ => {
                debug_assert!(cp <= MAX_LEGAL_UTF32, "unresolved code point {cp:#X}");
                4
            }
        }
    }

    fn encode(cp: u32, dst: &mut [u8]) {
        const BYTE_MASK: u32 = 0xBF;
        const BYTE_MARK: u32 = 0x80;

        let len = dst.len();
        let mut cp = cp;
        let (lead, continuation) = dst.split_at_mut(1);
        // Fill from the back so each byte takes the low six bits.
        for unit in continuation.iter_mut().rev() {
            *unit = ((cp | BYTE_MARK) & BYTE_MASK) as u8;
            cp >>= 6;
        }
        lead[0] = cp as u8 | encode_lead_mark(len);
    }
}

impl TargetUnit for u16 {
    #[cfg(feature = "log")]
    const ENCODING: &'static str = "UTF-16";
    const SOFT_OVER_RANGE: bool = false;

    fn encoded_len(cp: u32) -> usize {
        if cp <= MAX_BMP { 1 } else { 2 }
    }

    fn encode(cp: u32, dst: &mut [u16]) {
        match dst {
            [unit] => *unit = cp as u16,
            [high, low] => {
                let offset = cp - HALF_BASE;
                *high = ((offset >> HALF_SHIFT) + SUR_HIGH_START) as u16;
                *low = ((offset & HALF_MASK) + SUR_LOW_START) as u16;
            }
            _ => unreachable!("UTF-16 code points take one or two units"),
        }
    }
}

impl TargetUnit for u32 {
    #[cfg(feature = "log")]
    const ENCODING: &'static str = "UTF-32";
    const SOFT_OVER_RANGE: bool = false;

    fn encoded_len(_cp: u32) -> usize {
        1
    }

    fn encode(cp: u32, dst: &mut [u32]) {
        dst[0] = cp;
    }
}
