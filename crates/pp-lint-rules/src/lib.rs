//! # pp-lint-rules
//!
//! Built-in structural and scoping rules for pp-lint.
//!
//! Every rule works on the flat token stream of one manifest plus the class
//! and defined-type ranges located by `pp-lint-core`. Rules keep no state
//! between runs and skip constructs whose structure they cannot recover.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | PL001 | `right-to-left-relationship` | Forbids `<-` relationship chaining |
//! | PL002 | `autoloader-layout` | Requires declarations to live at their autoload path |
//! | PL003 | `parameter-order` | Requires required parameters before optional ones |
//! | PL004 | `inherits-across-namespaces` | Forbids inheriting from another module's class |
//! | PL005 | `nested-classes-or-defines` | Forbids classes and defines inside a class |
//! | PL006 | `variable-scope` | Requires top-scope variables to be namespaced |
//!
//! ## Usage
//!
//! ```ignore
//! use pp_lint_core::Analyzer;
//! use pp_lint_rules::all_rules;
//!
//! let analyzer = Analyzer::builder().rules(all_rules()).build();
//! let violations = analyzer.analyze_file(&source);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod autoloader_layout;
mod inherits_across_namespaces;
mod nested_classes_or_defines;
mod parameter_order;
mod registry;
mod right_to_left_relationship;
mod variable_scope;

pub use autoloader_layout::AutoloaderLayout;
pub use inherits_across_namespaces::InheritsAcrossNamespaces;
pub use nested_classes_or_defines::NestedClassesOrDefines;
pub use parameter_order::ParameterOrder;
pub use registry::{all_rules, rule_by_name, rules_by_name};
pub use right_to_left_relationship::RightToLeftRelationship;
pub use variable_scope::{VariableScope, BUILTIN_VARIABLES};

/// Re-export core types for convenience.
pub use pp_lint_core::{Rule, Severity, Violation};
