//! Rule to flag unqualified references to variables that are not in the
//! local scope.
//!
//! Inside a class or defined type, a variable is in scope when it is one of
//! the built-in top-scope variables, a parameter, or assigned somewhere in
//! the construct. Any other unqualified reference probably means a
//! top-scope variable and should be written `$::name`.
//!
//! Names containing a digit are never flagged, which covers regex capture
//! references such as `$1`.
//!
//! # Configuration
//!
//! - `extra_variables`: additional names to treat as always in scope

use pp_lint_core::stream::{next_kind, significant};
use pp_lint_core::{
    parameter_list, FileContext, Rule, RuleConfig, Severity, Suggestion, TokenKind, Violation,
};
use std::collections::HashSet;

/// Rule code for variable-scope.
pub const CODE: &str = "PL006";

/// Rule name for variable-scope.
pub const NAME: &str = "variable-scope";

/// Variables the language makes available in every scope.
pub const BUILTIN_VARIABLES: &[&str] = &[
    "name",
    "title",
    "module_name",
    "environment",
    "clientcert",
    "clientversion",
    "servername",
    "serverip",
    "serverversion",
    "caller_module_name",
];

/// Flags top-scope variables used without an explicit namespace.
#[derive(Debug, Clone)]
pub struct VariableScope {
    /// Names treated as in scope in addition to [`BUILTIN_VARIABLES`].
    pub extra_variables: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for VariableScope {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableScope {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extra_variables: Vec::new(),
            severity: Severity::Warning,
        }
    }

    /// Treats `name` as always in scope.
    #[must_use]
    pub fn allow_variable(mut self, name: impl Into<String>) -> Self {
        self.extra_variables.push(name.into());
        self
    }

    fn initial_scope(&self) -> HashSet<&str> {
        BUILTIN_VARIABLES
            .iter()
            .copied()
            .chain(self.extra_variables.iter().map(String::as_str))
            .collect()
    }
}

impl Rule for VariableScope {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires top-scope variables to be referenced with an explicit namespace"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn configure(&mut self, config: &RuleConfig) {
        if config.options.contains_key("extra_variables") {
            self.extra_variables = config.get_str_array("extra_variables");
        }
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for construct in ctx.constructs() {
            let mut in_scope = self.initial_scope();

            if let Some((open, close)) = parameter_list(ctx.tokens, construct) {
                let params = significant(ctx.tokens, open..=close);
                for (idx, token) in params.iter().enumerate() {
                    if token.kind == TokenKind::Variable
                        && matches!(
                            next_kind(&params, idx),
                            Some(TokenKind::Comma | TokenKind::Equals | TokenKind::RParen)
                        )
                    {
                        in_scope.insert(token.variable_name());
                    }
                }
            }

            let tokens = ctx.construct_tokens(construct, 0);
            let mut referenced = Vec::new();
            for (idx, token) in tokens.iter().enumerate() {
                if token.kind != TokenKind::Variable {
                    continue;
                }
                if next_kind(&tokens, idx) == Some(TokenKind::Equals) {
                    in_scope.insert(token.variable_name());
                } else {
                    referenced.push(*token);
                }
            }

            for token in referenced {
                let name = token.variable_name();
                if name.contains("::")
                    || in_scope.contains(name)
                    || name.chars().any(|c| c.is_ascii_digit())
                {
                    continue;
                }
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        ctx.location(token),
                        "top-scope variable being used without an explicit namespace",
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "Use $::{name} for a top-scope variable, or declare it locally"
                    ))),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pp_lint_core::test_support::tokenize;
    use std::path::Path;

    fn check_with(rule: &VariableScope, code: &str) -> Vec<(usize, usize)> {
        let tokens = tokenize(code);
        let ctx = FileContext::new(Path::new("test.pp"), &tokens);
        rule.check(&ctx)
            .iter()
            .map(|v| (v.location.line, v.location.column))
            .collect()
    }

    fn flagged(code: &str) -> Vec<(usize, usize)> {
        check_with(&VariableScope::new(), code)
    }

    #[test]
    fn test_parameter_in_scope() {
        assert!(flagged("class foo($env) {\n  notify { $env: }\n}\n").is_empty());
    }

    #[test]
    fn test_undeclared_variable() {
        let tokens = tokenize("class foo {\n  notify { $undeclared: }\n}\n");
        let ctx = FileContext::new(Path::new("test.pp"), &tokens);
        let violations = VariableScope::new().check(&ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "top-scope variable being used without an explicit namespace"
        );
        assert_eq!(
            (violations[0].location.line, violations[0].location.column),
            (2, 12)
        );
        assert_eq!(
            violations[0].suggestion.as_ref().map(|s| s.message.as_str()),
            Some("Use $::undeclared for a top-scope variable, or declare it locally")
        );
    }

    #[test]
    fn test_namespaced_reference_never_flagged() {
        assert!(flagged("class foo {\n  notify { $foo::bar: }\n  notify { $::osfamily: }\n}\n")
            .is_empty());
    }

    #[test]
    fn test_local_assignment_in_scope() {
        // assignment after use still counts
        let code = "define foo {\n  notify { $msg: }\n  $msg = 'hi'\n}\n";
        assert!(flagged(code).is_empty());
    }

    #[test]
    fn test_builtins_in_scope() {
        let code = "define foo {\n  notify { \"${title}\": }\n  file { $name: }\n  $x = $module_name\n}\n";
        assert!(flagged(code).is_empty());
    }

    #[test]
    fn test_digit_names_are_excluded() {
        let code = "class foo {\n  if $x =~ /(a)/ { notify { $1: } }\n  notify { $value2: }\n}\n";
        assert_eq!(flagged(code), vec![(2, 6)]);
    }

    #[test]
    fn test_parameter_defaults_and_typed_parameters() {
        let code = "class foo(String $a = $b, $c) {\n  notify { [$a, $c]: }\n}\n";
        assert!(flagged(code).is_empty());
    }

    #[test]
    fn test_scope_does_not_leak_between_constructs() {
        let code = "class a($p) { notify { $p: } }\nclass b { notify { $p: } }\n";
        assert_eq!(flagged(code), vec![(2, 20)]);
    }

    #[test]
    fn test_nested_construct_uses_own_scope() {
        // the inner define's parameter is not in the outer class's scope
        let code = "class a {\n  define b($q) { notify { $q: } }\n}\n";
        assert_eq!(flagged(code), vec![(2, 12), (2, 27)]);
    }

    #[test]
    fn test_extra_variables() {
        let code = "class foo {\n  notify { $facts: }\n}\n";
        assert_eq!(flagged(code).len(), 1);
        let rule = VariableScope::new().allow_variable("facts");
        assert!(check_with(&rule, code).is_empty());

        let config = pp_lint_core::Config::parse(
            "[rules.variable-scope]\nextra_variables = [\"facts\"]\n",
        )
        .expect("valid config");
        let mut rule = VariableScope::new();
        rule.configure(&config.rules[NAME]);
        assert!(check_with(&rule, code).is_empty());
    }

    #[test]
    fn test_severity_only_config_keeps_extra_variables() {
        let code = "class foo {\n  notify { $facts: }\n}\n";
        let config =
            pp_lint_core::Config::parse("[rules.variable-scope]\nseverity = \"error\"\n")
                .expect("valid config");
        let mut rule = VariableScope::new().allow_variable("facts");
        rule.configure(&config.rules[NAME]);
        assert_eq!(rule.extra_variables, vec!["facts".to_string()]);
        assert!(check_with(&rule, code).is_empty());
    }

    #[test]
    fn test_interpolated_variables() {
        // braced interpolations are checked, bare `$x` inside quotes is not
        let code = "class foo($p) {\n  notify { \"${p} ${undeclared} $bare\": }\n}\n";
        assert_eq!(flagged(code), vec![(2, 20)]);
    }

    #[test]
    fn test_outside_any_construct() {
        assert!(flagged("notify { $undeclared: }\n").is_empty());
    }
}
