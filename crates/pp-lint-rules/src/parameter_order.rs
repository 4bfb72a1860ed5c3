//! Rule to require mandatory parameters before optional ones.
//!
//! # Rationale
//!
//! A parameter without a default that follows one with a default reads as
//! optional but is not. Listing required parameters first keeps the
//! signature honest.
//!
//! Default values may contain nested parentheses, brackets and braces;
//! variables inside them are never treated as parameters.

use pp_lint_core::stream::{next_kind, prev_kind, significant};
use pp_lint_core::{
    parameter_list, FileContext, Rule, Severity, Suggestion, Token, TokenKind, Violation,
};
use tracing::debug;

/// Rule code for parameter-order.
pub const CODE: &str = "PL003";

/// Rule name for parameter-order.
pub const NAME: &str = "parameter-order";

/// Flags required parameters listed after optional ones.
#[derive(Debug, Clone)]
pub struct ParameterOrder {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ParameterOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterOrder {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Checks one parameter list (delimiters excluded, formatting removed).
    fn check_parameters(&self, ctx: &FileContext, params: &[&Token], out: &mut Vec<Violation>) {
        let mut depth = 0usize;
        let mut seen_default = false;

        for (idx, token) in params.iter().enumerate() {
            match token.kind {
                TokenKind::LParen | TokenKind::LBrack | TokenKind::LBrace => {
                    depth += 1;
                    continue;
                }
                TokenKind::RParen | TokenKind::RBrack | TokenKind::RBrace => {
                    let Some(outer) = depth.checked_sub(1) else {
                        debug!(
                            "Unbalanced default value at {}:{}, skipping parameter list",
                            token.line, token.column
                        );
                        return;
                    };
                    depth = outer;
                    continue;
                }
                _ => {}
            }

            if depth > 0 {
                continue;
            }

            match token.kind {
                TokenKind::Equals => seen_default = true,
                TokenKind::Variable
                    if matches!(next_kind(params, idx), None | Some(TokenKind::Comma)) =>
                {
                    if seen_default && prev_kind(params, idx) != Some(TokenKind::Equals) {
                        out.push(
                            Violation::new(
                                CODE,
                                NAME,
                                self.severity,
                                ctx.location(token),
                                "optional parameter listed before required parameter",
                            )
                            .with_suggestion(Suggestion::new(
                                "Move required parameters before any parameter with a default value",
                            )),
                        );
                    }
                }
                _ => {}
            }
        }
    }
}

impl Rule for ParameterOrder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires required parameters to be listed before optional ones"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for construct in ctx.constructs() {
            let Some((open, close)) = parameter_list(ctx.tokens, construct) else {
                continue;
            };
            let params = significant(ctx.tokens, open + 1..=close - 1);
            self.check_parameters(ctx, &params, &mut violations);
        }

        violations
    }
}
