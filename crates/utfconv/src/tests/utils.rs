use alloc::{string::String, vec::Vec};

use super::arbitrary::Scalar;

pub(crate) fn scalars_to_string(scalars: &[Scalar]) -> String {
    scalars.iter().map(|s| s.0).collect()
}

pub(crate) fn to_utf32(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

pub(crate) fn to_utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Number of quickcheck cases to run, larger on CI.
pub(crate) fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
