//! Rule to forbid declaring classes or defined types inside a class.
//!
//! A `class` keyword followed directly by `{` is a resource-like class
//! declaration (`class { 'foo': }`) and is allowed. Any other `class`
//! keyword in a class body starts a nested class definition. A `define`
//! keyword in a class body is always a nested definition.

use pp_lint_core::stream::next_kind;
use pp_lint_core::{FileContext, Rule, Severity, TokenKind, Violation};

/// Rule code for nested-classes-or-defines.
pub const CODE: &str = "PL005";

/// Rule name for nested-classes-or-defines.
pub const NAME: &str = "nested-classes-or-defines";

/// Flags classes and defined types defined inside a class.
#[derive(Debug, Clone)]
pub struct NestedClassesOrDefines {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NestedClassesOrDefines {
    fn default() -> Self {
        Self::new()
    }
}

impl NestedClassesOrDefines {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }
}

impl Rule for NestedClassesOrDefines {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids classes and defines defined inside a class"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for construct in ctx.classes() {
            // Skip the class's own keyword.
            let body = ctx.construct_tokens(construct, 1);

            for (idx, token) in body.iter().enumerate() {
                let message = match token.kind {
                    TokenKind::Class => match next_kind(&body, idx) {
                        Some(next) if next != TokenKind::LBrace => "class defined inside a class",
                        _ => continue,
                    },
                    TokenKind::Define => "define defined inside a class",
                    _ => continue,
                };

                violations.push(Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(token),
                    message,
                ));
            }
        }

        violations
    }
}
