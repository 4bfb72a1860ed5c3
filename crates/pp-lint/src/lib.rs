//! # pp-lint
//!
//! Token-stream linter for Puppet manifests.
//!
//! This is the facade crate that re-exports the core framework and the
//! built-in rules, and offers one-call entry points for hosts that already
//! hold a token stream.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pp_lint::{lint_source, SourceFile};
//!
//! let source = SourceFile::from_json(&dump)?;
//! for violation in lint_source(&source) {
//!     println!("{violation}");
//! }
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use pp_lint::{Analyzer, Config};
//! use pp_lint::rules::all_rules;
//!
//! let analyzer = Analyzer::builder()
//!     .rules(all_rules())
//!     .config(Config::from_file("pp-lint.toml".as_ref())?)
//!     .build();
//!
//! let result = analyzer.analyze(&sources)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Re-export core types and traits
pub use pp_lint_core::*;

/// Built-in rules and the rule registry.
pub mod rules {
    pub use pp_lint_rules::*;
}

/// Builds an analyzer with every built-in rule and the given configuration.
#[must_use]
pub fn default_analyzer(config: Config) -> Analyzer {
    Analyzer::builder()
        .rules(pp_lint_rules::all_rules())
        .config(config)
        .build()
}

/// Runs every built-in rule over one file with the default configuration.
#[must_use]
pub fn lint_source(source: &SourceFile) -> Vec<Violation> {
    default_analyzer(Config::default()).analyze_file(source)
}

/// Runs every built-in rule over a token stream.
///
/// An empty `path` disables the autoloader layout check.
#[must_use]
pub fn lint_tokens(path: &str, tokens: Vec<Token>) -> Vec<Violation> {
    lint_source(&SourceFile::new(path, tokens))
}
