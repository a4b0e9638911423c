//! Grammar-literal unescaping and C++ literal synthesis.
//!
//! Grammar literals arrive in the grammar's own escape syntax
//! (`'a'`, `'\n'`, `'ሴ'`, `'xyz\n'`). Synthesis unescapes them to
//! UTF-16 code units, decodes those under the active [`Encoding`], and
//! re-escapes each code point for the C++ lexical grammar.

use std::fmt;

use thiserror::Error;

use crate::encoding::{DecodeError, Encoding};
use crate::escape;

/// A failure to turn a grammar literal into C++ literal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// The grammar literal itself is malformed (bad escape, missing quotes).
    #[error("malformed grammar literal {0:?}")]
    Malformed(String),
    /// The unescaped text does not decode under the active encoding.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Result of character-literal synthesis.
///
/// When the grammar literal cannot be resolved to a single code point
/// (malformed escape, multi-character text, a code point the encoding
/// cannot represent), synthesis degrades to a zero-value literal instead
/// of failing the whole generation pass. The fallback is a distinct
/// variant so callers that want strict validation can detect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharLiteral {
    /// A well-formed C++ character value: `'a'`, `'\n'`, or a bare `0x…`
    /// code value for non-printable code points.
    Synthesized(String),
    /// The zero-value fallback, rendered as `0`.
    ZeroFallback,
}

impl CharLiteral {
    /// The C++ source text to embed.
    pub fn text(&self) -> &str {
        match self {
            CharLiteral::Synthesized(text) => text,
            CharLiteral::ZeroFallback => "0",
        }
    }

    /// Whether synthesis degraded to the zero-value fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, CharLiteral::ZeroFallback)
    }
}

impl fmt::Display for CharLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Grammar-literal unescaping
// ══════════════════════════════════════════════════════════════════════════════

/// Unescape a quoted grammar literal into UTF-16 code units.
///
/// Strips the surrounding quotes and resolves the grammar's backslash
/// escapes: `\n \r \t \b \f \' \" \\ \>` and `\uXXXX` (one UTF-16 unit;
/// two adjacent `\uXXXX` escapes may form a surrogate pair). Returns
/// `None` for malformed input: missing quotes, a dangling backslash, an
/// unknown escape character, or bad hex digits.
pub fn unescape_grammar_literal(raw: &str) -> Option<Vec<u16>> {
    let inner = raw.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut units = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            let mut buf = [0u16; 2];
            units.extend_from_slice(ch.encode_utf16(&mut buf));
            continue;
        }
        match chars.next()? {
            'n' => units.push(u16::from(b'\n')),
            'r' => units.push(u16::from(b'\r')),
            't' => units.push(u16::from(b'\t')),
            'b' => units.push(0x08),
            'f' => units.push(0x0C),
            '\'' => units.push(u16::from(b'\'')),
            '"' => units.push(u16::from(b'"')),
            '\\' => units.push(u16::from(b'\\')),
            '>' => units.push(u16::from(b'>')),
            'u' | 'U' => {
                let mut value: u16 = 0;
                for _ in 0..4 {
                    let digit = chars.next()?.to_digit(16)?;
                    value = (value << 4) | digit as u16;
                }
                units.push(value);
            }
            _ => return None,
        }
    }
    Some(units)
}

// ══════════════════════════════════════════════════════════════════════════════
// Synthesis
// ══════════════════════════════════════════════════════════════════════════════

/// Synthesize the C++ character value for a grammar character literal.
///
/// Escape selection, in order: the reserved escape table, then a bare
/// hexadecimal code value for anything outside the printable ASCII range
/// (zero-padded to the encoding's hex width), then the plain character.
/// Unresolvable literals degrade to [`CharLiteral::ZeroFallback`].
pub fn char_literal(raw: &str, encoding: Encoding) -> CharLiteral {
    let Some(units) = unescape_grammar_literal(raw) else {
        log::warn!("char literal {:?} is malformed; emitting 0", raw);
        return CharLiteral::ZeroFallback;
    };
    let Some(code) = encoding.single_code_value(&units) else {
        log::warn!(
            "char literal {:?} is not a single {} code point; emitting 0",
            raw,
            encoding.name()
        );
        return CharLiteral::ZeroFallback;
    };

    if let Some(esc) = escape::reserved_escape(code) {
        return CharLiteral::Synthesized(format!("'{}'", esc));
    }
    if escape::needs_numeric_escape(code) {
        return CharLiteral::Synthesized(escape::char_numeric_escape(code, encoding));
    }
    // Printable ASCII by the checks above.
    CharLiteral::Synthesized(format!("'{}'", char::from(code as u8)))
}

/// Synthesize a C++ string literal for a grammar string literal.
///
/// The output starts with the encoding's literal prefix (`u8` / `u` / `U`)
/// so the generated string has the recognizer's character type, then each
/// decoded code point is emitted under the same escape rules as
/// [`char_literal`], with in-string hex syntax for the numeric form.
pub fn string_literal(raw: &str, encoding: Encoding) -> Result<String, LiteralError> {
    let units =
        unescape_grammar_literal(raw).ok_or_else(|| LiteralError::Malformed(raw.to_string()))?;
    let codes = encoding.decode(&units)?;

    let mut out = String::with_capacity(codes.len() + 4);
    out.push_str(encoding.literal_prefix());
    out.push('"');
    for code in codes {
        if let Some(esc) = escape::reserved_escape(code) {
            out.push_str(esc);
        } else if escape::needs_numeric_escape(code) {
            out.push_str(&escape::string_numeric_escape(code, encoding));
        } else {
            out.push(char::from(code as u8));
        }
    }
    out.push('"');
    Ok(out)
}
