//! Core analyzer for orchestrating lint execution.

use crate::config::{Config, RuleConfig};
use crate::context::{FileContext, SourceFile};
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading a token dump.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Token dump is not valid JSON or has the wrong shape.
    #[error("Invalid token dump {path}: {source}")]
    Dump {
        /// Path of the dump.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The bounded worker pool could not be created.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules to the analyzer.
    #[must_use]
    pub fn rules<I: IntoIterator<Item = RuleBox>>(mut self, rules: I) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer, applying per-rule options from the configuration.
    #[must_use]
    pub fn build(self) -> Analyzer {
        let config = self.config.unwrap_or_default();
        let mut rules = self.rules;
        for rule in &mut rules {
            if let Some(rule_config) = config.rules.get(rule.name()) {
                rule.configure(rule_config);
            }
        }
        Analyzer { rules, config }
    }
}

/// The main analyzer that runs rules over token streams.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the effective configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyzes every source and returns the combined results.
    ///
    /// Files are analyzed in parallel; findings are reported in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if a bounded thread pool was configured and could
    /// not be created.
    pub fn analyze(&self, sources: &[SourceFile]) -> Result<LintResult, AnalyzerError> {
        info!(
            "Analyzing {} file(s) with {} rule(s)",
            sources.len(),
            self.rules.len()
        );

        let per_file: Vec<Vec<Violation>> = match self.config.analyzer.parallelism {
            Some(1) => sources.iter().map(|s| self.analyze_file(s)).collect(),
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(|| sources.par_iter().map(|s| self.analyze_file(s)).collect()),
            None => sources.par_iter().map(|s| self.analyze_file(s)).collect(),
        };

        let mut result = LintResult::new();
        for violations in per_file {
            result.violations.extend(violations);
            result.files_checked += 1;
        }

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes a single file and returns its violations.
    ///
    /// Rules run in registration order; each rule's findings keep the order
    /// the rule reported them in.
    #[must_use]
    pub fn analyze_file(&self, source: &SourceFile) -> Vec<Violation> {
        debug!("Analyzing: {}", source.path.display());

        let ctx = FileContext::from_source(source);
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let rule_violations = rule.check(&ctx);
            let rule_violations = self.apply_severity_override(rule.name(), rule_violations);
            violations.extend(rule_violations);
        }

        violations
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.config.rules.get(rule_name)
    }
}

/// Reads a JSON token dump from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a token dump.
pub fn load_source(path: &Path) -> Result<SourceFile, AnalyzerError> {
    let content = std::fs::read_to_string(path).map_err(|e| AnalyzerError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    SourceFile::from_json(&content).map_err(|e| AnalyzerError::Dump {
        path: path.to_path_buf(),
        source: e,
    })
}
