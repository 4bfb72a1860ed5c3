//! Rule to flag right-to-left (`<-`) relationship chaining.
//!
//! # Rationale
//!
//! Relationships read left to right everywhere else in a manifest. A `<-`
//! arrow reverses the direction of evaluation and is easy to misread.

use pp_lint_core::{FileContext, Rule, Severity, Suggestion, TokenKind, Violation};

/// Rule code for right-to-left-relationship.
pub const CODE: &str = "PL001";

/// Rule name for right-to-left-relationship.
pub const NAME: &str = "right-to-left-relationship";

/// Flags every `<-` relationship operator.
#[derive(Debug, Clone)]
pub struct RightToLeftRelationship {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for RightToLeftRelationship {
    fn default() -> Self {
        Self::new()
    }
}

impl RightToLeftRelationship {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }
}

impl Rule for RightToLeftRelationship {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids right-to-left (<-) relationship chaining"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        ctx.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::OutEdge)
            .map(|token| {
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(token),
                    "right-to-left (<-) relationship",
                )
                .with_suggestion(Suggestion::new(
                    "Swap the operands and use the left-to-right (->) operator",
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pp_lint_core::test_support::tokenize;
    use std::path::Path;

    fn check_code(code: &str) -> Vec<Violation> {
        let tokens = tokenize(code);
        let ctx = FileContext::new(Path::new("test.pp"), &tokens);
        RightToLeftRelationship::new().check(&ctx)
    }

    #[test]
    fn test_no_arrows() {
        assert!(check_code("Package['a'] -> Service['a']\n").is_empty());
    }

    #[test]
    fn test_detects_each_arrow_in_order() {
        let violations = check_code(
            "Service['a'] <- Package['a']\nFile['b'] <- Package['b'] <- Exec['c']\n",
        );
        let positions: Vec<_> = violations
            .iter()
            .map(|v| (v.location.line, v.location.column))
            .collect();
        assert_eq!(positions, vec![(1, 14), (2, 11), (2, 27)]);
        assert_eq!(violations[0].message, "right-to-left (<-) relationship");
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn test_ignores_notify_arrow_and_strings() {
        assert!(check_code("Service['a'] <~ File['b']\nnotify { '<-': }\n").is_empty());
    }
}
