//! Text encodings for generated recognizers.
//!
//! The generated C++ lexer matches code units of a fixed width, selected once
//! per generation run. Each encoding defines how a sequence of UTF-16 code
//! units (the form grammar literals arrive in after unescaping) maps to the
//! integer code points the recognizer will compare against:
//!
//! - **UTF8**: the text re-encoded as UTF-8, one code point per byte
//! - **UTF16**: one code point per UTF-16 code unit (surrogates pass through)
//! - **UTF32**: one code point per Unicode scalar value (surrogate pairs
//!   combine into a single code point)
//!
//! There are exactly three encodings and no extension point, so this is a
//! closed enum dispatched by `match` rather than a trait object.

use thiserror::Error;

/// Encoding option names as they appear on the generator command line.
pub const UTF8_NAME: &str = "UTF8";
pub const UTF16_NAME: &str = "UTF16";
pub const UTF32_NAME: &str = "UTF32";

const HIGH_SURROGATE: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATE: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// A decode failure for the configured encoding.
///
/// Malformed input is reported to the caller rather than patched over with
/// replacement characters; the literal synthesizer decides how to degrade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A surrogate code unit with no valid partner, at the given unit index.
    #[error("unpaired surrogate 0x{unit:04X} at code unit {index}")]
    UnpairedSurrogate { unit: u16, index: usize },
}

/// Code-unit width of the generated recognizer's text representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// 8-bit code units; code points are UTF-8 bytes.
    Utf8,
    /// 16-bit code units; code points are UTF-16 code units.
    Utf16,
    /// 32-bit code units; code points are Unicode scalar values.
    Utf32,
}

impl Encoding {
    /// The encoding used when the option is unset or unrecognized.
    pub const DEFAULT: Encoding = Encoding::Utf16;

    /// Resolve the `-encoding` option to an encoding.
    ///
    /// Unrecognized names fall back to [`Encoding::DEFAULT`] with a warning.
    /// This permissive policy is deliberate: an unknown encoding is a bad
    /// option value, not a broken grammar, and generation proceeds.
    pub fn from_option(option: Option<&str>) -> Encoding {
        match option {
            None => Encoding::DEFAULT,
            Some(UTF8_NAME) => Encoding::Utf8,
            Some(UTF16_NAME) => Encoding::Utf16,
            Some(UTF32_NAME) => Encoding::Utf32,
            Some(other) => {
                log::warn!(
                    "unrecognized encoding option {:?}; using {}",
                    other,
                    Encoding::DEFAULT.name()
                );
                Encoding::DEFAULT
            }
        }
    }

    /// The option name for this encoding.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => UTF8_NAME,
            Encoding::Utf16 => UTF16_NAME,
            Encoding::Utf32 => UTF32_NAME,
        }
    }

    /// Largest code point a single code unit sequence may represent.
    pub fn max_code_value(self) -> u32 {
        match self {
            Encoding::Utf8 => 0xFF,
            Encoding::Utf16 => 0xFFFF,
            Encoding::Utf32 => 0x10FFFF,
        }
    }

    /// C++ literal prefix selecting this encoding's character type
    /// (`char` / `char16_t` / `char32_t`).
    pub fn literal_prefix(self) -> &'static str {
        match self {
            Encoding::Utf8 => "u8",
            Encoding::Utf16 => "u",
            Encoding::Utf32 => "U",
        }
    }

    /// Whether `units` represents exactly one code point under this encoding.
    ///
    /// For UTF32 a two-unit sequence qualifies only when it is a valid
    /// high/low surrogate pair; two units that do not pair report `false`
    /// rather than an error, so callers can branch on it.
    pub fn is_single_code(self, units: &[u16]) -> bool {
        match self {
            Encoding::Utf8 => units.len() == 1 && u32::from(units[0]) <= self.max_code_value(),
            Encoding::Utf16 => units.len() == 1,
            Encoding::Utf32 => match units {
                [_] => true,
                [hi, lo] => HIGH_SURROGATE.contains(hi) && LOW_SURROGATE.contains(lo),
                _ => false,
            },
        }
    }

    /// The single code point `units` represents, or `None` when the sequence
    /// is not a single code point under this encoding.
    ///
    /// For UTF8 and UTF16 this is the code unit's own value (the 8-bit rule
    /// admits any unit up to 0xFF, so a character literal can name every
    /// representable code value directly). For UTF32 a surrogate pair
    /// combines into its scalar value; a lone surrogate unit has no scalar
    /// value and yields `None`.
    pub fn single_code_value(self, units: &[u16]) -> Option<u32> {
        if !self.is_single_code(units) {
            return None;
        }
        match self {
            Encoding::Utf8 | Encoding::Utf16 => Some(u32::from(units[0])),
            Encoding::Utf32 => {
                let codes = self.decode(units).ok()?;
                match codes.as_slice() {
                    [code] => Some(*code),
                    _ => None,
                }
            }
        }
    }

    /// Decode `units` into the ordered code points the recognizer matches.
    ///
    /// Defined for every input `is_single_code` accepts and for longer
    /// sequences; malformed UTF-16 (an unpaired surrogate) is an error for
    /// the UTF8 and UTF32 rules. The UTF16 rule never fails: every unit is
    /// its own code point.
    pub fn decode(self, units: &[u16]) -> Result<Vec<u32>, DecodeError> {
        match self {
            Encoding::Utf8 => {
                let mut codes = Vec::with_capacity(units.len());
                let mut buf = [0u8; 4];
                for ch in decode_scalars(units)? {
                    for b in ch.encode_utf8(&mut buf).bytes() {
                        codes.push(u32::from(b));
                    }
                }
                Ok(codes)
            }
            Encoding::Utf16 => Ok(units.iter().map(|&u| u32::from(u)).collect()),
            Encoding::Utf32 => Ok(decode_scalars(units)?
                .into_iter()
                .map(|ch| ch as u32)
                .collect()),
        }
    }
}

/// Decode UTF-16 code units into scalar values, erroring on the first
/// unpaired surrogate.
fn decode_scalars(units: &[u16]) -> Result<Vec<char>, DecodeError> {
    let mut out = Vec::with_capacity(units.len());
    let mut index = 0;
    for item in char::decode_utf16(units.iter().copied()) {
        match item {
            Ok(ch) => {
                out.push(ch);
                index += ch.len_utf16();
            }
            Err(e) => {
                return Err(DecodeError::UnpairedSurrogate {
                    unit: e.unpaired_surrogate(),
                    index,
                })
            }
        }
    }
    Ok(out)
}
