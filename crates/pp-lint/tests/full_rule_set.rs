//! Integration test: every built-in rule over realistic manifests.
//!
//! Exercises the full pipeline: token stream → construct location → rules →
//! severity overrides → results.

use pp_lint::test_support::tokenize;
use pp_lint::rules::{AutoloaderLayout, VariableScope};
use pp_lint::{
    default_analyzer, lint_source, lint_tokens, load_source, Analyzer, Config, Severity,
    SourceFile, TokenKind,
};
use std::path::PathBuf;

const MANIFEST: &str = r"# Manages the ntp service
class ntp::server(
  $servers,
  $package_ensure = 'present',
  $config_file,
) inherits ntp::params {
  package { 'ntp':
    ensure => $package_ensure,
  }

  file { $config_file:
    content => template('ntp/ntp.conf.erb'),
    notify  => Service['ntp'],
  }

  Service['ntp'] <- Package['ntp']

  $local = $servers
  notify { $restrict: }

  define ntp::server::peer($address) {
    notify { $address: }
  }
}
";

fn source(path: &str, code: &str) -> SourceFile {
    SourceFile::new(path, tokenize(code))
}

fn summary(source: &SourceFile) -> Vec<(String, usize, usize)> {
    lint_source(source)
        .into_iter()
        .map(|v| (v.rule, v.location.line, v.location.column))
        .collect()
}

#[test]
fn reports_every_rule_in_rule_order() {
    let findings = summary(&source("modules/ntp/manifests/server.pp", MANIFEST));
    let expected: Vec<(String, usize, usize)> = vec![
        ("right-to-left-relationship", 16, 18),
        ("autoloader-layout", 21, 10),
        ("parameter-order", 5, 3),
        ("inherits-across-namespaces", 6, 12),
        ("nested-classes-or-defines", 21, 3),
        ("variable-scope", 19, 12),
        // the nested define's parameter is not in the enclosing class's scope
        ("variable-scope", 21, 28),
        ("variable-scope", 22, 14),
    ]
    .into_iter()
    .map(|(rule, line, col)| (rule.to_string(), line, col))
    .collect();
    assert_eq!(findings, expected);
}

#[test]
fn clean_manifest_has_no_findings() {
    let code = "class ntp::config($servers, $file = '/etc/ntp.conf') inherits ntp {\n  file { $file:\n    content => join($servers, ' '),\n  }\n  Package['ntp'] -> File[$file]\n}\n";
    assert!(lint_source(&source("/srv/modules/ntp/manifests/config.pp", code)).is_empty());
}

#[test]
fn empty_path_disables_only_the_layout_rule() {
    let with_path = summary(&source("x.pp", MANIFEST));
    let without_path = summary(&source("", MANIFEST));
    assert!(with_path.iter().any(|f| f.0 == "autoloader-layout"));
    assert!(!without_path.iter().any(|f| f.0 == "autoloader-layout"));
    assert_eq!(with_path.len(), without_path.len() + 2);
}

#[test]
fn running_twice_is_idempotent() {
    let source = source("modules/ntp/manifests/server.pp", MANIFEST);
    let analyzer = default_analyzer(Config::default());
    let first = analyzer.analyze_file(&source);
    let second = analyzer.analyze_file(&source);
    assert_eq!(first, second);
    assert_eq!(first, lint_source(&source));
}

#[test]
fn malformed_construct_does_not_hide_other_findings() {
    let code = "class broken($a = 1, $b {\n  notify { 'x': }\n\nclass ok($a = 1, $b) {\n  Service['a'] <- Package['a']\n}\n";
    let findings = lint_tokens("", tokenize(code));
    let rules: Vec<_> = findings.iter().map(|v| v.rule.as_str()).collect();
    assert!(rules.contains(&"right-to-left-relationship"));
    assert!(findings.iter().all(|v| v.location.line >= 4));
}

#[test]
fn truncated_streams_do_not_panic() {
    let code = "class foo::bar($a = 1, $b) inherits baz {\n  class inner {\n    define d { notify { $x: } }\n  }\n}\n";
    let tokens = tokenize(code);
    for len in 0..=tokens.len() {
        let _ = lint_tokens("foo/manifests/bar.pp", tokens[..len].to_vec());
    }
}

#[test]
fn config_overrides_apply_across_rules() {
    let config = Config::parse(
        r#"
fail_on = "warning"

[rules.variable-scope]
enabled = false

[rules.right-to-left-relationship]
severity = "error"
"#,
    )
    .expect("valid config");
    let analyzer = default_analyzer(config);
    let result = analyzer
        .analyze(&[source("modules/ntp/manifests/server.pp", MANIFEST)])
        .expect("analysis succeeds");

    assert!(result.by_rule("variable-scope").is_empty());
    let edges = result.by_rule("right-to-left-relationship");
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].severity, Severity::Error);
    assert!(result.has_violations_at(analyzer.config().fail_on()));
}

#[test]
fn severity_only_tables_keep_builder_options() {
    let config = Config::parse(
        r#"
[rules.autoloader-layout]
severity = "warning"

[rules.variable-scope]
severity = "error"
"#,
    )
    .expect("valid config");
    let analyzer = Analyzer::builder()
        .rule(AutoloaderLayout::new().extension("epp"))
        .rule(VariableScope::new().allow_variable("facts"))
        .config(config)
        .build();
    let code = "class foo {\n  notify { $facts: }\n  notify { $other: }\n}\n";
    let result = analyzer
        .analyze(&[source("modules/foo/manifests/init.epp", code)])
        .expect("analysis succeeds");

    assert!(result.by_rule("autoloader-layout").is_empty());
    let scope = result.by_rule("variable-scope");
    assert_eq!(scope.len(), 1);
    assert_eq!((scope[0].location.line, scope[0].location.column), (3, 12));
    assert_eq!(scope[0].severity, Severity::Error);
}

#[test]
fn json_token_dump_round_trip_through_rules() {
    let dump = r#"{
        "path": "modules/foo/manifests/init.pp",
        "tokens": [
            {"kind": "CLASS", "text": "class", "line": 1, "column": 1},
            {"kind": "WHITESPACE", "text": " ", "line": 1, "column": 6},
            {"kind": "NAME", "text": "foo", "line": 1, "column": 7},
            {"kind": "WHITESPACE", "text": " ", "line": 1, "column": 10},
            {"kind": "LBRACE", "text": "{", "line": 1, "column": 11},
            {"kind": "NEWLINE", "text": "\n", "line": 1, "column": 12},
            {"kind": "VARIABLE", "text": "undeclared", "line": 2, "column": 3},
            {"kind": "NEWLINE", "text": "\n", "line": 2, "column": 14},
            {"kind": "RBRACE", "text": "}", "line": 3, "column": 1}
        ]
    }"#;
    let source = SourceFile::from_json(dump).expect("valid dump");
    let findings = lint_source(&source);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "variable-scope");
    assert_eq!((findings[0].location.line, findings[0].location.column), (2, 3));
}

#[test]
fn lexer_dump_with_interpolation_and_unmodelled_kinds() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/lexer_kinds.json");
    let source = load_source(&path).expect("dump with every string and operator kind loads");

    let kinds: Vec<_> = source.tokens.iter().map(|t| t.kind).collect();
    for kind in [
        TokenKind::SString,
        TokenKind::DqPre,
        TokenKind::DqMid,
        TokenKind::DqPost,
        TokenKind::Plus,
        TokenKind::Question,
        TokenKind::Other,
    ] {
        assert!(kinds.contains(&kind), "{kind:?}");
    }

    // `msg` is assigned locally; only the interpolated `missing` is flagged
    let findings = summary(&source);
    assert_eq!(findings, vec![("variable-scope".to_string(), 3, 26)]);
}
