//! # pp-lint-core
//!
//! Core framework for linting Puppet manifests from their token stream.
//!
//! Manifests arrive already tokenized. This crate provides what every rule
//! builds on:
//!
//! - [`Token`] and [`TokenKind`] for the flat token stream
//! - [`locate_constructs`] for finding class and defined-type declarations
//! - [`matching_close`] and [`parameter_list`] for delimiter balancing
//! - [`Rule`] trait for per-file rules
//! - [`Analyzer`] for running rules over one or many files
//! - [`Violation`] and [`LintResult`] for findings
//!
//! ## Example
//!
//! ```ignore
//! use pp_lint_core::{Analyzer, SourceFile};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let source = SourceFile::from_json(&dump)?;
//! let violations = analyzer.analyze_file(&source);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod balance;
mod config;
mod construct;
mod context;
mod rule;
mod token;
mod types;

pub mod stream;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use analyzer::{load_source, Analyzer, AnalyzerBuilder, AnalyzerError};
pub use balance::{matching_close, parameter_list, BalanceError, Delimiter};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use construct::{locate_constructs, Construct, ConstructKind};
pub use context::{FileContext, SourceFile};
pub use rule::{Rule, RuleBox};
pub use token::{Token, TokenKind};
pub use types::{LintResult, Location, Severity, Suggestion, Violation};
