//! Check command implementation.

use anyhow::{Context, Result};
use pp_lint_core::{load_source, Analyzer, Config, LintResult, RuleBox};
use pp_lint_rules::{all_rules, rules_by_name};
use std::path::PathBuf;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    dumps: &[PathBuf],
    format: OutputFormat,
    rules_filter: Option<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = load_config(source)?;
    let fail_on = config.fail_on();

    let result = analyze_dumps(dumps, config, rules_filter.as_deref())?;

    super::output::print(&result, format)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads the resolved configuration, or the defaults when none was found.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Loads every dump and runs the selected rules over it.
pub fn analyze_dumps(
    dumps: &[PathBuf],
    config: Config,
    rules_filter: Option<&str>,
) -> Result<LintResult> {
    let sources = dumps
        .iter()
        .map(|path| {
            load_source(path).with_context(|| format!("Failed to load dump: {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let analyzer = Analyzer::builder()
        .rules(select_rules(rules_filter))
        .config(config)
        .build();

    tracing::info!(
        "Analyzing {} file(s) with {} rules",
        sources.len(),
        analyzer.rule_count()
    );

    analyzer.analyze(&sources).context("Analysis failed")
}

fn select_rules(filter: Option<&str>) -> Vec<RuleBox> {
    match filter {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            rules_by_name(&names)
        }
        None => all_rules(),
    }
}
