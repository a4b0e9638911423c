//! Tests for encoding selection and code-point decoding.

use proptest::prelude::*;

use crate::encoding::{DecodeError, Encoding};

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn test_from_option_unset_uses_default() {
    assert_eq!(Encoding::from_option(None), Encoding::Utf16);
    assert_eq!(Encoding::DEFAULT, Encoding::Utf16);
}

#[test]
fn test_from_option_recognized_names() {
    assert_eq!(Encoding::from_option(Some("UTF8")), Encoding::Utf8);
    assert_eq!(Encoding::from_option(Some("UTF16")), Encoding::Utf16);
    assert_eq!(Encoding::from_option(Some("UTF32")), Encoding::Utf32);
}

#[test]
fn test_from_option_unrecognized_falls_back() {
    // Permissive by design: a bad option value must not abort generation.
    assert_eq!(Encoding::from_option(Some("EBCDIC")), Encoding::DEFAULT);
    assert_eq!(Encoding::from_option(Some("utf8")), Encoding::DEFAULT);
}

#[test]
fn test_max_code_values() {
    assert_eq!(Encoding::Utf8.max_code_value(), 0xFF);
    assert_eq!(Encoding::Utf16.max_code_value(), 0xFFFF);
    assert_eq!(Encoding::Utf32.max_code_value(), 0x10FFFF);
}

#[test]
fn test_literal_prefixes() {
    assert_eq!(Encoding::Utf8.literal_prefix(), "u8");
    assert_eq!(Encoding::Utf16.literal_prefix(), "u");
    assert_eq!(Encoding::Utf32.literal_prefix(), "U");
}

#[test]
fn test_utf8_single_code_bounded_by_byte() {
    assert!(Encoding::Utf8.is_single_code(&[0x41]));
    assert!(Encoding::Utf8.is_single_code(&[0xFF]), "0xFF is the 8-bit maximum");
    assert!(!Encoding::Utf8.is_single_code(&[0x100]), "0x100 exceeds one byte");
    assert!(!Encoding::Utf8.is_single_code(&units("ab")));
}

#[test]
fn test_utf16_single_code_is_one_unit() {
    assert!(Encoding::Utf16.is_single_code(&[0xFFFF]));
    assert!(
        !Encoding::Utf16.is_single_code(&units("𝄞")),
        "a surrogate pair is two UTF-16 code points, not one"
    );
}

#[test]
fn test_utf32_surrogate_pair_is_single_code() {
    // U+1D11E as a high/low surrogate pair
    let pair = [0xD834, 0xDD1E];
    assert!(Encoding::Utf32.is_single_code(&pair));
    assert_eq!(Encoding::Utf32.decode(&pair), Ok(vec![0x1D11E]));
    assert_eq!(Encoding::Utf32.single_code_value(&pair), Some(0x1D11E));
}

#[test]
fn test_utf32_two_high_surrogates_not_single() {
    let bad = [0xD834, 0xD834];
    assert!(!Encoding::Utf32.is_single_code(&bad), "two high surrogates do not pair");
    assert_eq!(
        Encoding::Utf32.decode(&bad),
        Err(DecodeError::UnpairedSurrogate { unit: 0xD834, index: 0 })
    );
}

#[test]
fn test_utf32_lone_surrogate_has_no_code_value() {
    // One unit short-circuits is_single_code, but there is no scalar value.
    assert!(Encoding::Utf32.is_single_code(&[0xD800]));
    assert_eq!(Encoding::Utf32.single_code_value(&[0xD800]), None);
    assert!(Encoding::Utf32.decode(&[0xD800]).is_err());
}

#[test]
fn test_utf16_decode_passes_surrogates_through() {
    // 16-bit code units are code points as-is; no pairing happens.
    assert_eq!(Encoding::Utf16.decode(&[0xD800]), Ok(vec![0xD800]));
    assert_eq!(
        Encoding::Utf16.decode(&units("𝄞")),
        Ok(vec![0xD834, 0xDD1E])
    );
}

#[test]
fn test_utf8_decode_yields_utf8_bytes() {
    assert_eq!(Encoding::Utf8.decode(&units("A")), Ok(vec![0x41]));
    assert_eq!(Encoding::Utf8.decode(&units("é")), Ok(vec![0xC3, 0xA9]));
    assert_eq!(
        Encoding::Utf8.decode(&units("𝄞")),
        Ok(vec![0xF0, 0x9D, 0x84, 0x9E])
    );
}

#[test]
fn test_utf8_decode_rejects_unpaired_surrogate() {
    assert_eq!(
        Encoding::Utf8.decode(&[0x41, 0xDC00]),
        Err(DecodeError::UnpairedSurrogate { unit: 0xDC00, index: 1 })
    );
}

#[test]
fn test_decode_empty() {
    for encoding in [Encoding::Utf8, Encoding::Utf16, Encoding::Utf32] {
        assert_eq!(encoding.decode(&[]), Ok(vec![]));
        assert!(!encoding.is_single_code(&[]));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Properties over well-formed input
// ══════════════════════════════════════════════════════════════════════════════

proptest! {
    /// decode → reconstruct → decode is stable for every encoding.
    #[test]
    fn prop_round_trip_stable(s in "\\PC*") {
        let us = units(&s);

        // UTF16: code points are the units themselves.
        let codes16 = Encoding::Utf16.decode(&us).unwrap();
        let rebuilt16: Vec<u16> = codes16.iter().map(|&c| c as u16).collect();
        prop_assert_eq!(Encoding::Utf16.decode(&rebuilt16).unwrap(), codes16);

        // UTF8: code points are UTF-8 bytes of the text.
        let codes8 = Encoding::Utf8.decode(&us).unwrap();
        let bytes: Vec<u8> = codes8.iter().map(|&c| c as u8).collect();
        let rebuilt8 = units(std::str::from_utf8(&bytes).unwrap());
        prop_assert_eq!(Encoding::Utf8.decode(&rebuilt8).unwrap(), codes8);

        // UTF32: code points are scalar values.
        let codes32 = Encoding::Utf32.decode(&us).unwrap();
        let text: String = codes32.iter().map(|&c| char::from_u32(c).unwrap()).collect();
        prop_assert_eq!(Encoding::Utf32.decode(&units(&text)).unwrap(), codes32);
    }

    /// is_single_code agrees with decode for the 16- and 32-bit rules,
    /// including text whose UTF-16 form is a surrogate pair.
    #[test]
    fn prop_single_code_matches_decode(s in "\\PC*") {
        let us = units(&s);

        let n16 = Encoding::Utf16.decode(&us).unwrap().len();
        prop_assert_eq!(Encoding::Utf16.is_single_code(&us), n16 == 1);

        let n32 = Encoding::Utf32.decode(&us).unwrap().len();
        prop_assert_eq!(Encoding::Utf32.is_single_code(&us), n32 == 1);
    }

    /// For ASCII text the 8-bit rule agrees with decode as well.
    #[test]
    fn prop_utf8_single_code_matches_decode_ascii(s in "[ -~]*") {
        let us = units(&s);
        let n = Encoding::Utf8.decode(&us).unwrap().len();
        prop_assert_eq!(Encoding::Utf8.is_single_code(&us), n == 1);
    }
}
