use alloc::{string::ToString, vec, vec::Vec};

use bstr::BStr;
use rstest::rstest;

use crate::{ByteArrayEncoder, EncodeError, EncoderOptions, Lossy};

fn reject_truncated() -> ByteArrayEncoder {
    ByteArrayEncoder::new(EncoderOptions {
        reject_truncated: true,
        ..Default::default()
    })
}

fn reject_astral() -> ByteArrayEncoder {
    ByteArrayEncoder::new(EncoderOptions {
        reject_astral: true,
        ..Default::default()
    })
}

fn reject_ill_formed() -> ByteArrayEncoder {
    ByteArrayEncoder::new(EncoderOptions {
        reject_ill_formed: true,
        ..Default::default()
    })
}

fn err_parts(err: &EncodeError) -> (Lossy, usize, usize) {
    (err.lossy(), err.index(), err.offset())
}

#[rstest]
#[case::first("Āb", (Lossy::Truncated(0x100), 0, 0))]
#[case::after_latin1("éÿ€", (Lossy::Truncated(0x20AC), 2, 4))]
#[case::after_astral("😀x日", (Lossy::Truncated(0x65E5), 2, 5))]
fn truncated_is_refused(#[case] input: &str, #[case] expected: (Lossy, usize, usize)) {
    let err = reject_truncated().encode(input).unwrap_err();
    assert_eq!(err_parts(&err), expected);
}

#[test]
fn reject_truncated_still_accepts_astral() {
    assert_eq!(reject_truncated().encode("a😀").unwrap(), vec![0x61, 0x3D]);
}

#[rstest]
#[case::emoji("ab😀", (Lossy::Astral(0x1F600), 2, 2))]
#[case::after_bmp("€\u{10000}", (Lossy::Astral(0x10000), 1, 3))]
fn astral_is_refused(#[case] input: &str, #[case] expected: (Lossy, usize, usize)) {
    let err = reject_astral().encode(input).unwrap_err();
    assert_eq!(err_parts(&err), expected);
}

#[test]
fn astral_offsets_in_utf16_are_code_units() {
    let units: Vec<u16> = "a😀b😀".encode_utf16().collect();
    let err = reject_astral().encode(&units[..]).unwrap_err();
    assert_eq!(err_parts(&err), (Lossy::Astral(0x1F600), 1, 1));
}

#[test]
fn reject_astral_still_accepts_truncation() {
    assert_eq!(reject_astral().encode("Ā€").unwrap(), vec![0x00, 0xAC]);
}

#[test]
fn lone_surrogate_is_refused() {
    let units: [u16; 4] = [0xD83D, 0xDE00, 0x0061, 0xDC00];
    let err = reject_ill_formed().encode(&units[..]).unwrap_err();
    assert_eq!(err_parts(&err), (Lossy::LoneSurrogate(0xDC00), 2, 3));
}

#[test]
fn invalid_utf8_is_refused() {
    let err = reject_ill_formed()
        .encode(BStr::new(b"ok\xFFno"))
        .unwrap_err();
    assert_eq!(err_parts(&err), (Lossy::InvalidUtf8, 2, 2));
}

#[test]
fn reject_ill_formed_accepts_genuine_replacement_character() {
    let out = reject_ill_formed()
        .encode(BStr::new("\u{FFFD}".as_bytes()))
        .unwrap();
    assert_eq!(out, vec![0xFD]);
}

#[test]
fn strict_reports_first_refusal() {
    let encoder = ByteArrayEncoder::new(EncoderOptions::strict());
    let err = encoder.encode("ok😀Ā").unwrap_err();
    assert_eq!(err_parts(&err), (Lossy::Astral(0x1F600), 2, 2));
}

#[test]
fn encode_into_restores_buffer_on_error() {
    let mut out = vec![1, 2, 3];
    let err = reject_truncated()
        .encode_into("abcĀ", &mut out)
        .unwrap_err();
    assert_eq!(err.index(), 3);
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn error_messages() {
    let err = reject_truncated().encode("xĀ").unwrap_err();
    assert_eq!(
        err.to_string(),
        "code point U+0100 does not fit in one byte at element 1 (offset 1)"
    );

    let err = reject_astral().encode("😀").unwrap_err();
    assert_eq!(
        err.to_string(),
        "astral code point U+1F600 is projected from its high surrogate only at element 0 (offset 0)"
    );

    let units: [u16; 1] = [0xDFFF];
    let err = reject_ill_formed().encode(&units[..]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unpaired surrogate 0xDFFF at element 0 (offset 0)"
    );

    assert_eq!(Lossy::InvalidUtf8.to_string(), "invalid UTF-8 sequence");
}

#[test]
fn error_source_is_the_loss() {
    use core::error::Error;

    let err = reject_truncated().encode("Ā").unwrap_err();
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), Lossy::Truncated(0x100).to_string());
}
