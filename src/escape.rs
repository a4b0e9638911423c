//! Escape sequences for emitted C++ literals.
//!
//! A small set of code points always uses its canonical backslash escape;
//! everything else outside the printable ASCII range becomes a hexadecimal
//! escape. Character and string literals need different hex syntax: a
//! character-context value is emitted as a bare `0x…` integer (the generated
//! recognizer compares it as a code value, so it never needs quoting), while
//! a string-context value must use C++ in-string escape syntax.

use crate::encoding::Encoding;

/// First printable code point; anything below is escaped.
pub const PRINTABLE_LOW: u32 = 0x20;
/// First code point above the safe ASCII range; it and anything above is
/// escaped.
pub const PRINTABLE_HIGH: u32 = 0x80;

/// Canonical escape text for the reserved code points, or `None`.
///
/// Looked up before any numeric fallback, so a newline is always `\n`,
/// never `0x0A`.
pub fn reserved_escape(code: u32) -> Option<&'static str> {
    match code {
        0x08 => Some("\\b"),
        0x09 => Some("\\t"),
        0x0A => Some("\\n"),
        0x0C => Some("\\f"),
        0x0D => Some("\\r"),
        0x22 => Some("\\\""),
        0x27 => Some("\\'"),
        0x5C => Some("\\\\"),
        _ => None,
    }
}

/// Whether `code` must be escaped rather than emitted as a raw character.
pub fn needs_numeric_escape(code: u32) -> bool {
    code < PRINTABLE_LOW || code >= PRINTABLE_HIGH
}

/// Hex digit width for numeric escapes under `encoding`: 2 when every code
/// value fits in one byte, 4 otherwise. Values wider than the padding print
/// at their natural width.
pub fn hex_padding(encoding: Encoding) -> usize {
    if encoding.max_code_value() < 0x100 {
        2
    } else {
        4
    }
}

/// Numeric escape in character-literal context: an unquoted `0x…` integer,
/// zero-padded to the encoding's hex width, uppercase.
pub fn char_numeric_escape(code: u32, encoding: Encoding) -> String {
    format!("0x{:01$X}", code, hex_padding(encoding))
}

/// Numeric escape in string-literal context, using C++ in-string syntax:
/// `\xNN` for 8-bit code values, `\uNNNN` up to U+FFFF, `\UNNNNNNNN` above.
pub fn string_numeric_escape(code: u32, encoding: Encoding) -> String {
    if encoding.max_code_value() < 0x100 {
        format!("\\x{:02X}", code)
    } else if code <= 0xFFFF {
        format!("\\u{:04X}", code)
    } else {
        format!("\\U{:08X}", code)
    }
}
