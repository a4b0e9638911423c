//! # cxx-target — C++ target emission core for a parser generator
//!
//! The generator front end parses grammars and builds recognizer tables; the
//! template layer turns attributes into output text. This crate sits between
//! the two and owns everything that is specific to emitting **C++** source
//! with a pluggable text encoding:
//!
//! - Converting grammar-level character/string literals into C++ literal
//!   text, correct for the configured code-unit width (8/16/32-bit)
//! - Raising the analysis heuristics (inline-DFA / switch thresholds) to
//!   values a C++ compiler handles comfortably
//! - Validating `@scope::name { ... }` action placement per grammar kind
//! - Resolving the `@namespace` action into nested-namespace components
//!
//! ## Architecture
//!
//! ```text
//! grammar literal ("'\\n'", "'xyz'")
//!        │
//!        ▼
//!  ┌──────────────┐   unescape    ┌──────────────┐   decode     ┌─────────────┐
//!  │ literal       │──────────────▶│ UTF-16 units │─────────────▶│ Encoding     │
//!  │ synthesizer   │               └──────────────┘  code points │ (8/16/32-bit)│
//!  └──────┬───────┘◀──────────────────────────────────────────── └─────────────┘
//!         │ escape table + hex fallback
//!         ▼
//!   C++ literal text ("'\\n'", "0x1D11E", "u8\"xyz\\n\"")
//! ```
//!
//! The generator configures one [`CxxTarget`] per run (encoding resolved once
//! from the `-encoding` option), calls [`Target::configure_analysis`] before
//! grammar analysis, and then asks the target for literal text, scope
//! validity, and namespace components while rendering.
//!
//! Everything here is a pure computation; no I/O happens in this crate.

pub mod encoding;
pub mod escape;
pub mod heuristics;
pub mod literal;
pub mod namespace;
pub mod scope;
pub mod target;

#[cfg(test)]
mod tests;

pub use encoding::{DecodeError, Encoding};
pub use heuristics::AnalysisThresholds;
pub use literal::{CharLiteral, LiteralError};
pub use scope::GrammarKind;
pub use target::{CxxTarget, Target, TokenAttr};
