//! Behavior every direction shares, stamped out once per direction.

use alloc::vec;

use super::utils::{to_utf16, to_utf32};
use crate::{
    ConversionFlags, ConversionResult, utf8_to_utf16, utf8_to_utf32, utf16_to_utf8,
    utf16_to_utf32, utf32_to_utf8, utf32_to_utf16,
};

const SAMPLE: &str = "a\u{7FF}\u{FFFD}\u{1F980}z";

fn sample_utf8() -> alloc::vec::Vec<u8> {
    SAMPLE.as_bytes().to_vec()
}

macro_rules! direction_tests {
    ($from:ident => $to:ident, $src:expr, $expected:expr, $target:ty) => {
        paste::paste! {
            #[test]
            fn [<$from _to_ $to _empty_source>]() {
                let mut dst: [$target; 0] = [];
                let conversion = [<$from _to_ $to>](&[], &mut dst, ConversionFlags::Strict);
                assert_eq!(conversion.result, ConversionResult::Success);
                assert_eq!((conversion.read, conversion.written), (0, 0));
            }

            #[test]
            fn [<$from _to_ $to _zero_room>]() {
                let src = $src;
                let mut dst: [$target; 0] = [];
                let conversion = [<$from _to_ $to>](&src, &mut dst, ConversionFlags::Strict);
                assert_eq!(conversion.result, ConversionResult::TargetExhausted);
                assert_eq!((conversion.read, conversion.written), (0, 0));
            }

            #[test]
            fn [<$from _to_ $to _exact_room>]() {
                let src = $src;
                let expected = $expected;
                let mut dst = vec![<$target>::default(); expected.len()];
                for flags in [ConversionFlags::Strict, ConversionFlags::Lenient] {
                    let conversion = [<$from _to_ $to>](&src, &mut dst, flags);
                    assert_eq!(conversion.result, ConversionResult::Success);
                    assert_eq!((conversion.read, conversion.written), (src.len(), expected.len()));
                    assert_eq!(dst, expected);
                }
            }

            #[test]
            fn [<$from _to_ $to _one_short>]() {
                let src = $src;
                let expected = $expected;
                let mut dst = vec![<$target>::default(); expected.len() - 1];
                let conversion = [<$from _to_ $to>](&src, &mut dst, ConversionFlags::Strict);
                assert_eq!(conversion.result, ConversionResult::TargetExhausted);
                // The last code point never goes out half-written.
                assert!(conversion.read < src.len());
                assert!(conversion.written < expected.len());
                assert_eq!(&dst[..conversion.written], &expected[..conversion.written]);

                let mut rest = vec![<$target>::default(); expected.len() - conversion.written];
                let resumed = [<$from _to_ $to>](
                    &src[conversion.read..],
                    &mut rest,
                    ConversionFlags::Strict,
                );
                assert_eq!(resumed.result, ConversionResult::Success);
                assert_eq!(&rest[..], &expected[conversion.written..]);
            }
        }
    };
}

direction_tests!(utf8 => utf16, sample_utf8(), to_utf16(SAMPLE), u16);
direction_tests!(utf8 => utf32, sample_utf8(), to_utf32(SAMPLE), u32);
direction_tests!(utf16 => utf8, to_utf16(SAMPLE), sample_utf8(), u8);
direction_tests!(utf16 => utf32, to_utf16(SAMPLE), to_utf32(SAMPLE), u32);
direction_tests!(utf32 => utf8, to_utf32(SAMPLE), sample_utf8(), u8);
direction_tests!(utf32 => utf16, to_utf32(SAMPLE), to_utf16(SAMPLE), u16);
