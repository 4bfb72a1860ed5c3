//! Rule to flag classes inheriting from a class outside their own namespace.
//!
//! `class foo::bar inherits foo` is fine, `class foo::bar inherits baz` is
//! not. Only classes are checked; defined types cannot inherit.

use pp_lint_core::stream::{kind_at, token_at};
use pp_lint_core::{matching_close, Delimiter, FileContext, Rule, Severity, TokenKind, Violation};

/// Rule code for inherits-across-namespaces.
pub const CODE: &str = "PL004";

/// Rule name for inherits-across-namespaces.
pub const NAME: &str = "inherits-across-namespaces";

/// Flags `inherits` clauses naming a class outside the child's namespace.
#[derive(Debug, Clone)]
pub struct InheritsAcrossNamespaces {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for InheritsAcrossNamespaces {
    fn default() -> Self {
        Self::new()
    }
}

impl InheritsAcrossNamespaces {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }
}

/// Returns true if `child` is a sub-namespace of `parent`.
fn is_within_namespace(child: &str, parent: &str) -> bool {
    let child = child.trim_start_matches("::");
    let parent = parent.trim_start_matches("::");
    child
        .strip_prefix(parent)
        .is_some_and(|rest| rest.starts_with("::"))
}

impl Rule for InheritsAcrossNamespaces {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids classes inheriting across module namespaces"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for construct in ctx.classes() {
            // keyword, name, optional parameter list, then `inherits parent`
            let tokens = ctx.construct_tokens(construct, 0);
            let mut idx = 2;
            if kind_at(&tokens, idx) == Some(TokenKind::LParen) {
                match matching_close(&tokens, idx, Delimiter::Paren) {
                    Ok(close) => idx = close + 1,
                    Err(_) => continue,
                }
            }
            if kind_at(&tokens, idx) != Some(TokenKind::Inherits) {
                continue;
            }
            let Some(parent) = token_at(&tokens, idx + 1) else {
                continue;
            };

            let child = construct.name_token(ctx.tokens);
            if !is_within_namespace(&child.text, &parent.text) {
                violations.push(Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(parent),
                    "class inherits across namespaces",
                ));
            }
        }

        violations
    }
}
