#![allow(missing_docs)]
#![allow(dead_code)]

use core::fmt::UpperHex;

/// `"héllo, 世界 🦀!"` as a terminal might deliver it, with reads ending in
/// the middle of multi-byte characters.
pub const CHUNKS: [&[u8]; 4] = [
    b"h\xC3",
    b"\xA9llo, \xE4\xB8",
    b"\x96\xE7\x95\x8C \xF0\x9F",
    b"\xA6\x80!",
];

pub const TEXT: &str = "héllo, 世界 🦀!";

/// Renders code units as space-separated hex, `width` digits each.
pub fn hex<T: UpperHex>(units: &[T], width: usize) -> String {
    units
        .iter()
        .map(|unit| format!("{unit:0width$X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
