//! Rule trait for defining lint rules.

use crate::config::RuleConfig;
use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// A per-file lint rule over a token stream.
///
/// Rules are pure functions of the file context: they read the token stream
/// and the located constructs and return their findings in source order.
/// They hold no mutable state, so the same rule may run on many files
/// concurrently.
///
/// # Example
///
/// ```ignore
/// use pp_lint_core::{FileContext, Rule, Severity, TokenKind, Violation};
///
/// pub struct NoNodeBlocks;
///
/// impl Rule for NoNodeBlocks {
///     fn name(&self) -> &'static str { "no-node-blocks" }
///     fn code(&self) -> &'static str { "PL100" }
///
///     fn check(&self, ctx: &FileContext) -> Vec<Violation> {
///         ctx.tokens
///             .iter()
///             .filter(|t| t.kind == TokenKind::Node)
///             .map(|t| Violation::new(self.code(), self.name(), Severity::Warning,
///                 ctx.location(t), "node block in module"))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "parameter-order").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "PL003").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Applies rule-specific options from configuration.
    ///
    /// The default implementation ignores all options.
    fn configure(&mut self, _config: &RuleConfig) {}

    /// Checks a single file and returns any violations found.
    fn check(&self, ctx: &FileContext) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
