//! List rules command implementation.

use pp_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<28} {:<9} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(96));

    for rule in all_rules() {
        println!(
            "{:<8} {:<28} {:<9} {}",
            rule.code(),
            rule.name(),
            rule.default_severity(),
            rule.description()
        );
    }

    println!("\nAll rules run by default. Use --rules to select a subset, e.g.:");
    println!("  pp-lint check --rules variable-scope,parameter-order dump.json");
    println!("  pp-lint check --rules PL001,PL004 dump.json");
}
