//! The target capability interface and its C++ implementation.
//!
//! The generator core is target-neutral; everything lexical about the
//! output language lives behind [`Target`], selected once at configuration
//! time. [`CxxTarget`] is the C++ implementation: encoding-prefixed
//! literals, the extra header/include action scopes, and analysis
//! thresholds tuned for C++ compilers.

use crate::encoding::Encoding;
use crate::heuristics::AnalysisThresholds;
use crate::literal::{self, CharLiteral, LiteralError};
use crate::namespace::{self, ActionMap};
use crate::scope::{self, GrammarKind};

/// Target-language capabilities the generator calls while emitting code.
pub trait Target {
    /// The text encoding the generated recognizer matches against.
    fn encoding(&self) -> Encoding;

    /// Whether this target can generate recognizers for the named encoding.
    fn supports_encoding(&self, encoding_name: &str) -> bool;

    /// Character value text for a grammar character literal.
    fn char_literal(&self, raw: &str) -> CharLiteral;

    /// String literal text for a grammar string literal.
    fn string_literal(&self, raw: &str) -> Result<String, LiteralError>;

    /// Whether `@scope::name { ... }` is valid for this kind of grammar.
    fn is_valid_action_scope(&self, kind: GrammarKind, scope: &str) -> bool;

    /// Adjust analysis thresholds before grammar analysis runs.
    ///
    /// Must be invoked once per generation pass, strictly before the
    /// analysis stage reads `thresholds`.
    fn configure_analysis(&self, thresholds: &mut AnalysisThresholds);
}

/// The C++ target.
#[derive(Debug, Clone, Copy)]
pub struct CxxTarget {
    encoding: Encoding,
}

impl CxxTarget {
    pub fn new(encoding: Encoding) -> Self {
        CxxTarget { encoding }
    }

    /// Build a target from the generator's `-encoding` option, falling back
    /// to the default encoding when unset or unrecognized.
    pub fn from_option(option: Option<&str>) -> Self {
        CxxTarget::new(Encoding::from_option(option))
    }

    /// Namespace components for the grammar's generated files, from its
    /// `@namespace` action. Empty when no namespace action is present.
    pub fn namespace_components(&self, actions: &ActionMap, kind: GrammarKind) -> Vec<String> {
        namespace::namespace_components(actions, kind)
    }
}

impl Target for CxxTarget {
    fn encoding(&self) -> Encoding {
        self.encoding
    }

    fn supports_encoding(&self, _encoding_name: &str) -> bool {
        // Option resolution handles unknown names; nothing to veto here.
        true
    }

    fn char_literal(&self, raw: &str) -> CharLiteral {
        literal::char_literal(raw, self.encoding)
    }

    fn string_literal(&self, raw: &str) -> Result<String, LiteralError> {
        literal::string_literal(raw, self.encoding)
    }

    fn is_valid_action_scope(&self, kind: GrammarKind, scope: &str) -> bool {
        scope::is_valid_action_scope(kind, scope)
    }

    fn configure_analysis(&self, thresholds: &mut AnalysisThresholds) {
        thresholds.merge_preferred(&AnalysisThresholds::cxx_preferred());
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// File-level attribute helpers
// ══════════════════════════════════════════════════════════════════════════════

/// A token entry in the header file's token-constant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAttr {
    pub name: String,
    pub token_type: u32,
}

/// Remove the `EOF` token from the header's token list.
///
/// `EOF` is defined by every C standard library header; the runtime exposes
/// the end-of-input token as `EOF_TOKEN` instead, so the generated header
/// must not redefine `EOF`.
pub fn strip_eof_token(tokens: &mut Vec<TokenAttr>) {
    if let Some(pos) = tokens.iter().position(|t| t.name == "EOF") {
        tokens.remove(pos);
    }
}

/// Header file name for a recognizer, from the generated `.cpp` name.
///
/// `MyLexer.cpp` with extension `.hpp` becomes `MyLexer.hpp`.
pub fn header_file_name(recognizer_file_name: &str, ext: &str) -> String {
    let base = recognizer_file_name
        .strip_suffix(".cpp")
        .unwrap_or(recognizer_file_name);
    format!("{}{}", base, ext)
}
