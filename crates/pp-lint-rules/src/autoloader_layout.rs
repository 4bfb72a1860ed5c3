//! Rule to require classes and defined types to live where the autoloader
//! looks for them.
//!
//! # Layout
//!
//! - `foo` must be declared in `foo/manifests/init.pp`
//! - `foo::bar::baz` must be declared in `foo/manifests/bar/baz.pp`
//!
//! The file path only has to end with the expected suffix, so absolute and
//! relative paths both work. Files with an unknown path are not checked.
//!
//! # Configuration
//!
//! - `extension`: manifest file extension (default: `pp`)

use pp_lint_core::{FileContext, Rule, RuleConfig, Severity, Suggestion, Violation};

/// Rule code for autoloader-layout.
pub const CODE: &str = "PL002";

/// Rule name for autoloader-layout.
pub const NAME: &str = "autoloader-layout";

const DEFAULT_EXTENSION: &str = "pp";

/// Requires declarations to follow the module autoload layout.
#[derive(Debug, Clone)]
pub struct AutoloaderLayout {
    /// Manifest file extension, without the dot.
    pub extension: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for AutoloaderLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoloaderLayout {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            severity: Severity::Error,
        }
    }

    /// Sets the manifest file extension.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Returns the path suffix a declaration named `name` must live at.
    #[must_use]
    pub fn expected_path(&self, name: &str) -> String {
        let mut segments = name.split("::");
        let module = segments.next().unwrap_or(name);
        let rest: Vec<&str> = segments.collect();
        if rest.is_empty() {
            format!("{module}/manifests/init.{}", self.extension)
        } else {
            format!("{module}/manifests/{}.{}", rest.join("/"), self.extension)
        }
    }
}

impl Rule for AutoloaderLayout {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires classes and defines to be in their autoload module path"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn configure(&mut self, config: &RuleConfig) {
        if config.options.contains_key("extension") {
            self.extension = config.get_str("extension", DEFAULT_EXTENSION).to_string();
        }
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        if !ctx.has_path() {
            return Vec::new();
        }

        let path = ctx.path.to_string_lossy().replace('\\', "/");
        let mut violations = Vec::new();

        for construct in ctx.constructs() {
            let title = construct.name_token(ctx.tokens);
            let expected = self.expected_path(&title.text);

            if !path.ends_with(&expected) {
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        ctx.location(title),
                        format!("{} not in autoload module layout", title.text),
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "Move it to a file ending in {expected}"
                    ))),
                );
            }
        }

        violations
    }
}
