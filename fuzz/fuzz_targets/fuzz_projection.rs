#![no_main]
use arbitrary::Arbitrary;
use bstr::BStr;
use libfuzzer_sys::fuzz_target;
use strbytes::{
    ByteArrayEncoder, EncoderOptions, TextSource, bytes_to_byte_array, string_to_byte_array,
    utf16_to_byte_array,
};

#[derive(Debug, Arbitrary)]
enum Input {
    Text(String),
    Utf16(Vec<u16>),
    Bytes(Vec<u8>),
}

#[derive(Debug, Arbitrary)]
struct Case {
    flags: u8,
    input: Input,
}

fn options(flags: u8) -> EncoderOptions {
    EncoderOptions {
        reject_truncated: flags & 1 != 0,
        reject_astral: flags & 2 != 0,
        reject_ill_formed: flags & 4 != 0,
    }
}

/// The checked encoder either agrees with the total projection or refuses an
/// element that really is lossy, leaving the buffer untouched.
fn check<S: TextSource + ?Sized>(input: &S, expected: &[u8], flags: u8) {
    assert_eq!(expected.len(), input.element_count());

    let encoder = ByteArrayEncoder::new(options(flags));
    let mut out = vec![0xA5];
    match encoder.encode_into(input, &mut out) {
        Ok(written) => {
            assert_eq!(written, expected.len());
            assert_eq!(&out[1..], expected);
        }
        Err(err) => {
            assert!(!encoder.options().is_lenient());
            assert_eq!(out, [0xA5]);
            let (offset, element) = input
                .elements()
                .nth(err.index())
                .expect("refused element exists");
            assert_eq!(offset, err.offset());
            assert_eq!(element.lossiness(), Some(err.lossy()));
        }
    }
}

fuzz_target!(|case: Case| {
    match &case.input {
        Input::Text(text) => {
            let expected = string_to_byte_array(text);
            let units: Vec<u16> = text.encode_utf16().collect();
            assert_eq!(utf16_to_byte_array(&units), expected);
            assert_eq!(bytes_to_byte_array(text.as_bytes()), expected);
            check(text.as_str(), &expected, case.flags);
        }
        Input::Utf16(units) => {
            let expected = utf16_to_byte_array(units);
            assert!(expected.len() <= units.len());
            check(&units[..], &expected, case.flags);
        }
        Input::Bytes(bytes) => {
            let expected = bytes_to_byte_array(bytes);
            assert!(expected.len() <= bytes.len());
            check(BStr::new(bytes), &expected, case.flags);
        }
    }
});
