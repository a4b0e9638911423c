//! `@namespace` action resolution.
//!
//! The grammar's `@namespace { foo::bar }` action names the C++ namespace
//! the generated recognizer is wrapped in. The action body reaches us as
//! the ordered text fragments the grammar parser collected; we join them,
//! split on `::`, and hand the trimmed components to the template layer.
//! No identifier validation happens here — malformed namespace text passes
//! through as written and the C++ compiler reports it.

use std::collections::BTreeMap;

use crate::scope::GrammarKind;

/// Actions collected from a grammar: scope name → action name → the
/// action body's text fragments, in source order.
pub type ActionMap = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// C++ scope separator in namespace text.
const SEPARATOR: &str = "::";

/// Split raw namespace text into trimmed components.
///
/// `"  foo :: bar::baz  "` becomes `["foo", "bar", "baz"]`.
pub fn split_namespace(raw: &str) -> Vec<String> {
    raw.split(SEPARATOR).map(|part| part.trim().to_string()).collect()
}

/// Resolve the namespace components for a grammar's generated files.
///
/// Looks up the `namespace` action under the grammar kind's default action
/// scope. Absent action (or absent scope) means no namespace: the empty
/// list, and the templates emit the recognizer at global scope.
pub fn namespace_components(actions: &ActionMap, kind: GrammarKind) -> Vec<String> {
    let Some(scope_actions) = actions.get(kind.default_action_scope()) else {
        return Vec::new();
    };
    let Some(fragments) = scope_actions.get("namespace") else {
        return Vec::new();
    };
    split_namespace(&fragments.concat())
}
