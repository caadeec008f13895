#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};
use utfconv::{
    Conversion, ConversionFlags, ConversionResult, utf8_to_utf16, utf16_to_utf8, utf16_to_utf32,
    utf32_to_utf16,
};

#[derive(Debug, Arbitrary)]
struct Input {
    lenient: bool,
    split_seed: u64,
    bytes: Vec<u8>,
    units: Vec<u16>,
    words: Vec<u32>,
}

type Convert<S, T> = fn(&[S], &mut [T], ConversionFlags) -> Conversion;

/// Runs `convert` over `src` through a source window that grows by random
/// amounts and targets of random small sizes, resuming from the reported
/// cursors. Returns the output, the final result, and the units read.
fn chunked<S, T: Copy + Default>(
    src: &[S],
    convert: Convert<S, T>,
    flags: ConversionFlags,
    rng: &mut SmallRng,
) -> (Vec<T>, ConversionResult, usize) {
    let mut out = Vec::new();
    let mut start = 0;
    let mut end = 0;
    let mut dst = [T::default(); 8];

    loop {
        end = (end + rng.random_range(0..=8)).min(src.len());
        // Any code point fits in four units, so progress is guaranteed once
        // the window is full.
        let room = rng.random_range(4..=dst.len());

        let conversion = convert(&src[start..end], &mut dst[..room], flags);
        assert!(conversion.read <= end - start);
        assert!(conversion.written <= room);
        out.extend_from_slice(&dst[..conversion.written]);
        start += conversion.read;

        match conversion.result {
            ConversionResult::SourceIllegal => return (out, conversion.result, start),
            ConversionResult::Success | ConversionResult::SourceExhausted if end == src.len() => {
                return (out, conversion.result, start);
            }
            _ => {}
        }
    }
}

fn transcode(input: Input) {
    let flags = if input.lenient {
        ConversionFlags::Lenient
    } else {
        ConversionFlags::Strict
    };
    let mut rng = SmallRng::seed_from_u64(input.split_seed);

    // UTF-8 stops exactly at the end of its longest valid prefix, and what it
    // produced round-trips back to that prefix.
    let (utf16, _, read) = chunked(&input.bytes, utf8_to_utf16, flags, &mut rng);
    let valid = match core::str::from_utf8(&input.bytes) {
        Ok(text) => text,
        Err(err) => core::str::from_utf8(&input.bytes[..err.valid_up_to()]).unwrap(),
    };
    assert_eq!(read, valid.len());
    assert_eq!(utf16, valid.encode_utf16().collect::<Vec<_>>());

    let (utf8, result, _) = chunked(&utf16, utf16_to_utf8, ConversionFlags::Strict, &mut rng);
    assert_eq!(result, ConversionResult::Success);
    assert_eq!(utf8, valid.as_bytes());

    // Lenient UTF-16 always yields scalar values.
    let (utf32, result, read) =
        chunked(&input.units, utf16_to_utf32, ConversionFlags::Lenient, &mut rng);
    assert_ne!(result, ConversionResult::SourceIllegal);
    assert!(read + 1 >= input.units.len());
    assert!(utf32.iter().all(|&cp| char::from_u32(cp).is_some()));

    // Whatever UTF-32 produces under either policy is well-formed UTF-16.
    let (units, _, _) = chunked(&input.words, utf32_to_utf16, flags, &mut rng);
    assert!(char::decode_utf16(units.iter().copied()).all(|r| r.is_ok()));
}

fuzz_target!(|input: Input| transcode(input));
