//! Grammar kinds and `@scope::name` action placement rules.
//!
//! The C++ target accepts a few extra action scopes beyond the grammar-kind
//! ones (`header`, `includes`, `preincludes`, `overrides` work everywhere,
//! feeding the header/preamble templates). Validation is a pure lookup;
//! an ill-placed action is simply rejected by the caller, never an error
//! raised here.

/// The kind of grammar being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarKind {
    Lexer,
    Parser,
    /// Combined lexer+parser grammar.
    Combined,
    /// Tree-walker grammar.
    TreeParser,
}

/// Scopes accepted for every grammar kind.
const COMMON_SCOPES: &[&str] = &["header", "includes", "preincludes", "overrides"];

impl GrammarKind {
    /// The action scope an unqualified `@actions { ... }` block binds to.
    ///
    /// A combined grammar's top-level actions belong to its parser half.
    pub fn default_action_scope(self) -> &'static str {
        match self {
            GrammarKind::Lexer => "lexer",
            GrammarKind::Parser => "parser",
            GrammarKind::Combined => "parser",
            GrammarKind::TreeParser => "treeparser",
        }
    }

    /// Scopes valid only for this kind, beyond [`COMMON_SCOPES`].
    fn kind_scopes(self) -> &'static [&'static str] {
        match self {
            GrammarKind::Lexer => &["lexer"],
            GrammarKind::Parser => &["parser"],
            GrammarKind::Combined => &["parser", "lexer"],
            GrammarKind::TreeParser => &["treeparser"],
        }
    }
}

/// Whether `@scope::name { ... }` is valid for this kind of grammar.
///
/// Unrecognized names return `false`; the caller treats the action block
/// as rejected. Only placement is policed here — the action names inside
/// a valid scope are left to the templates.
pub fn is_valid_action_scope(kind: GrammarKind, scope: &str) -> bool {
    COMMON_SCOPES.contains(&scope) || kind.kind_scopes().contains(&scope)
}
