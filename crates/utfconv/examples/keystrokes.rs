//! Feeds terminal input to a UTF-16 text widget as the bytes arrive.
//!
//! A terminal hands over whatever bytes it has, so a read can end in the
//! middle of a multi-byte character. The widget keeps a small fixed buffer of
//! UTF-16 units and repaints whenever it fills. Both situations are handled by
//! resuming from the cursors the conversion reports:
//!
//! - [`ConversionResult::SourceExhausted`] keeps the unread tail of the input
//!   until the next read completes it.
//! - [`ConversionResult::TargetExhausted`] flushes the buffer and carries on.
//!
//! One read also contains a stray byte. The example skips it and shows
//! U+FFFD in its place, which is how an editor would recover.
//!
//! Run with
//!
//! ```bash
//! cargo run -p utfconv --example keystrokes
//! ```

use utfconv::{ConversionFlags, ConversionResult, utf8_to_utf16};

/// Units the widget can hold before it repaints.
const WIDGET_UNITS: usize = 8;

fn main() {
    // "añ€ 🎹 ok" typed in bursts, with a lone continuation byte in the
    // middle of the third read.
    let reads: [&[u8]; 5] = [
        b"a\xC3",
        b"\xB1\xE2\x82",
        b"\xAC \xBF\xF0\x9F",
        b"\x8E",
        b"\xB9 ok",
    ];

    let mut pending: Vec<u8> = Vec::new();
    let mut widget = [0u16; WIDGET_UNITS];
    let mut filled = 0;
    let mut screen = String::new();

    for (n, read) in reads.iter().enumerate() {
        pending.extend_from_slice(read);
        println!("read #{n}: {read:02X?}");

        loop {
            let conversion =
                utf8_to_utf16(&pending, &mut widget[filled..], ConversionFlags::Strict);
            filled += conversion.written;
            pending.drain(..conversion.read);

            match conversion.result {
                ConversionResult::Success => break,
                ConversionResult::SourceExhausted => {
                    println!("  holding {} byte(s) for the next read", pending.len());
                    break;
                }
                ConversionResult::TargetExhausted => {
                    repaint(&mut screen, &widget[..filled]);
                    filled = 0;
                }
                ConversionResult::SourceIllegal => {
                    println!("  skipping stray byte {:02X}", pending[0]);
                    pending.remove(0);
                    if filled == WIDGET_UNITS {
                        repaint(&mut screen, &widget[..filled]);
                        filled = 0;
                    }
                    widget[filled] = 0xFFFD;
                    filled += 1;
                }
            }
        }
    }
    repaint(&mut screen, &widget[..filled]);

    assert!(pending.is_empty());
    assert_eq!(screen, "añ€ \u{FFFD}🎹 ok");
    println!("screen: {screen}");
}

fn repaint(screen: &mut String, units: &[u16]) {
    let text = String::from_utf16_lossy(units);
    println!("  repaint {units:04X?} -> {text:?}");
    screen.push_str(&text);
}
