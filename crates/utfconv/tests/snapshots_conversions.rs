#![expect(missing_docs)]

use core::fmt::Write;

use insta::assert_snapshot;
use utfconv::{ConversionFlags, ConversionResult, utf8_to_utf16, utf16_to_utf8, utf32_to_utf16};

mod common;

#[test]
fn snapshot_chunked_utf8_stream() {
    assert_eq!(common::CHUNKS.concat(), common::TEXT.as_bytes());

    let mut pending: Vec<u8> = Vec::new();
    let mut dst = [0u16; 3];
    let mut lines = String::new();
    let mut utf16 = Vec::new();

    for chunk in common::CHUNKS {
        pending.extend_from_slice(chunk);
        loop {
            let conversion = utf8_to_utf16(&pending, &mut dst, ConversionFlags::Strict);
            let written = &dst[..conversion.written];
            writeln!(
                lines,
                "{:?} read={} written={} [{}]",
                conversion.result,
                conversion.read,
                conversion.written,
                common::hex(written, 4)
            )
            .unwrap();
            utf16.extend_from_slice(written);
            pending.drain(..conversion.read);
            if conversion.result != ConversionResult::TargetExhausted {
                break;
            }
        }
    }

    assert!(pending.is_empty());
    assert_eq!(String::from_utf16(&utf16).unwrap(), common::TEXT);

    // Inline snapshot; run `cargo insta test` then `cargo insta review` after
    // changing the stream.
    assert_snapshot!(lines, @r"
    SourceExhausted read=1 written=1 [0068]
    TargetExhausted read=4 written=3 [00E9 006C 006C]
    SourceExhausted read=3 written=3 [006F 002C 0020]
    SourceExhausted read=7 written=3 [4E16 754C 0020]
    Success read=5 written=3 [D83E DD80 0021]
    ");
}

#[test]
fn snapshot_lenient_utf16_drain() {
    let mut src: &[u16] = &[0x48, 0xD800, 0x69, 0xDC00, 0xD83D, 0xDE00, 0xD83D];
    let mut dst = [0u8; 4];
    let mut lines = String::new();

    loop {
        let conversion = utf16_to_utf8(src, &mut dst, ConversionFlags::Lenient);
        writeln!(
            lines,
            "{:?} read={} written={} [{}]",
            conversion.result,
            conversion.read,
            conversion.written,
            common::hex(&dst[..conversion.written], 2)
        )
        .unwrap();
        src = &src[conversion.read..];
        if conversion.result != ConversionResult::TargetExhausted {
            break;
        }
    }

    // The trailing high surrogate is held back for the next call.
    assert_eq!(src, [0xD83D]);
    assert_snapshot!(lines, @r"
    TargetExhausted read=2 written=4 [48 EF BF BD]
    TargetExhausted read=2 written=4 [69 EF BF BD]
    SourceExhausted read=2 written=4 [F0 9F 98 80]
    ");
}

#[test]
fn snapshot_strict_utf32_skipping_errors() {
    let mut src: &[u32] = &[0x41, 0x11_0000, 0x42, 0xDFFF, 0x43];
    let mut dst = [0u16; 8];
    let mut lines = String::new();

    loop {
        let conversion = utf32_to_utf16(src, &mut dst, ConversionFlags::Strict);
        writeln!(
            lines,
            "{:?} read={} written={} [{}]",
            conversion.result,
            conversion.read,
            conversion.written,
            common::hex(&dst[..conversion.written], 4)
        )
        .unwrap();
        match conversion.into_result() {
            Ok(conversion) => {
                src = &src[conversion.read..];
                if conversion.is_success() {
                    break;
                }
            }
            Err(err) => {
                writeln!(lines, "  {err}").unwrap();
                src = &src[err.offset() + 1..];
            }
        }
    }

    assert_snapshot!(lines, @r"
    SourceIllegal read=1 written=1 [0041]
      illegal sequence at offset 1
    SourceIllegal read=1 written=1 [0042]
      illegal sequence at offset 1
    Success read=1 written=1 [0043]
    ");
}
