//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "pp-lint.toml";

const DEFAULT_CONFIG: &str = r#"# pp-lint configuration

# Severity at or above which `pp-lint check` exits non-zero
fail_on = "error"

[analyzer]
# Maximum threads for per-file analysis (default: all cores)
# parallelism = 4

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.right-to-left-relationship]
enabled = true

[rules.autoloader-layout]
enabled = true
# severity = "warning"  # Override default severity
extension = "pp"

[rules.parameter-order]
enabled = true

[rules.inherits-across-namespaces]
enabled = true

[rules.nested-classes-or-defines]
enabled = true

[rules.variable-scope]
enabled = true
# Names treated as in scope besides the built-in top-scope variables
extra_variables = []
"#;

/// Runs the init command, writing the config into `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: pp-lint check <DUMP>...");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pp_lint_core::{Config, Severity};
    use tempfile::TempDir;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.fail_on(), Severity::Error);
        assert_eq!(config.rules.len(), 6);
        assert_eq!(
            config.rules["autoloader-layout"].get_str("extension", "x"),
            "pp"
        );
        assert!(config.is_rule_enabled("variable-scope"));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(run(tmp.path(), false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        run(tmp.path(), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
