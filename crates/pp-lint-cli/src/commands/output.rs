//! Output formatting for lint results.

use anyhow::Result;
use pp_lint_core::{LintResult, Severity, Violation};
use std::path::Path;

use crate::OutputFormat;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Compact => {
            for violation in &result.violations {
                println!("{violation}");
            }
        }
    }
    Ok(())
}

fn severity_label(severity: Severity) -> String {
    let color = match severity {
        Severity::Error => RED,
        Severity::Warning => YELLOW,
    };
    format!("{color}{severity}{RESET}")
}

/// Renders findings grouped under a header per manifest.
///
/// Violations arrive in file order, so a new header starts whenever the
/// file changes.
fn render_text(result: &LintResult) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let mut current: Option<&Path> = None;

    for violation in &result.violations {
        let file = violation.location.file.as_path();
        if current != Some(file) {
            let name = if file.as_os_str().is_empty() {
                "<unknown manifest>".to_string()
            } else {
                file.display().to_string()
            };
            let _ = writeln!(out, "{name}");
            current = Some(file);
        }
        write_violation(&mut out, violation);
    }

    let (errors, warnings) = result.count_by_severity();
    let color = if errors > 0 {
        RED
    } else if warnings > 0 {
        YELLOW
    } else {
        GREEN
    };
    let _ = writeln!(
        out,
        "{color}Found {errors} error(s), {warnings} warning(s) in {} file(s){RESET}",
        result.files_checked
    );

    out
}

fn write_violation(out: &mut String, violation: &Violation) {
    use std::fmt::Write;

    let _ = writeln!(
        out,
        "  {:>4}:{:<3} {} {} [{} {}]",
        violation.location.line,
        violation.location.column,
        severity_label(violation.severity),
        violation.message,
        violation.code,
        violation.rule,
    );
    if let Some(suggestion) = &violation.suggestion {
        let _ = writeln!(out, "           = help: {}", suggestion.message);
    }
}
