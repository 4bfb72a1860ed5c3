//! Rule registry: every built-in rule under its stable name and code.

use crate::{
    AutoloaderLayout, InheritsAcrossNamespaces, NestedClassesOrDefines, ParameterOrder,
    RightToLeftRelationship, VariableScope,
};
use pp_lint_core::RuleBox;
use tracing::warn;

/// Returns all built-in rules, in code order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(RightToLeftRelationship::new()),
        Box::new(AutoloaderLayout::new()),
        Box::new(ParameterOrder::new()),
        Box::new(InheritsAcrossNamespaces::new()),
        Box::new(NestedClassesOrDefines::new()),
        Box::new(VariableScope::new()),
    ]
}

/// Looks up a built-in rule by name or code.
#[must_use]
pub fn rule_by_name(name: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name() == name || rule.code() == name)
}

/// Returns the rules named in `names`, warning about unknown names.
#[must_use]
pub fn rules_by_name<S: AsRef<str>>(names: &[S]) -> Vec<RuleBox> {
    names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let rule = rule_by_name(name);
            if rule.is_none() {
                warn!("Unknown rule: {}", name);
            }
            rule
        })
        .collect()
}
