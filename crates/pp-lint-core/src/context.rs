//! Context types for rule execution.

use crate::construct::{locate_constructs, Construct, ConstructKind};
use crate::stream::significant;
use crate::token::Token;
use crate::types::Location;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A tokenized manifest as handed over by the lexer.
///
/// This is also the on-disk shape of a JSON token dump:
///
/// ```json
/// { "path": "modules/foo/manifests/init.pp",
///   "tokens": [{ "kind": "CLASS", "text": "class", "line": 1, "column": 1 }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the manifest. Empty when unknown.
    #[serde(default)]
    pub path: PathBuf,
    /// Token stream of the manifest.
    pub tokens: Vec<Token>,
}

impl SourceFile {
    /// Creates a new source file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, tokens: Vec<Token>) -> Self {
        Self {
            path: path.into(),
            tokens,
        }
    }

    /// Parses a JSON token dump.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a token dump.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Context provided to rules for one file.
///
/// Constructs are located once when the context is built and shared by
/// every rule.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the manifest (may be empty).
    pub path: &'a Path,
    /// The full token stream.
    pub tokens: &'a [Token],
    constructs: Vec<Construct>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context and locates its constructs.
    #[must_use]
    pub fn new(path: &'a Path, tokens: &'a [Token]) -> Self {
        Self {
            path,
            tokens,
            constructs: locate_constructs(tokens),
        }
    }

    /// Creates a context for a [`SourceFile`].
    #[must_use]
    pub fn from_source(source: &'a SourceFile) -> Self {
        Self::new(&source.path, &source.tokens)
    }

    /// Returns true if the manifest path is known.
    #[must_use]
    pub fn has_path(&self) -> bool {
        !self.path.as_os_str().is_empty()
    }

    /// All classes and defined types, in source order.
    #[must_use]
    pub fn constructs(&self) -> &[Construct] {
        &self.constructs
    }

    /// Class declarations only.
    pub fn classes(&self) -> impl Iterator<Item = &Construct> {
        self.constructs
            .iter()
            .filter(|c| c.kind == ConstructKind::Class)
    }

    /// Non-formatting tokens of a construct, from `offset` past its keyword
    /// to its closing brace.
    #[must_use]
    pub fn construct_tokens(&self, construct: &Construct, offset: usize) -> Vec<&'a Token> {
        significant(self.tokens, construct.start + offset..=construct.end)
    }

    /// Location of a token in this file.
    #[must_use]
    pub fn location(&self, token: &Token) -> Location {
        Location::at(self.path.to_path_buf(), token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tokenize;
    use crate::token::TokenKind;

    #[test]
    fn locates_constructs_once() {
        let tokens = tokenize("class a { define b { } }\ndefine c { }\n");
        let ctx = FileContext::new(Path::new("a/manifests/init.pp"), &tokens);
        assert_eq!(ctx.constructs().len(), 3);
        assert_eq!(ctx.classes().count(), 1);
        assert!(ctx.has_path());
    }

    #[test]
    fn empty_path_is_unknown() {
        let tokens = tokenize("class a { }");
        let ctx = FileContext::new(Path::new(""), &tokens);
        assert!(!ctx.has_path());
    }

    #[test]
    fn construct_tokens_drop_formatting() {
        let tokens = tokenize("class a {\n  # note\n  $x = 1\n}\n");
        let ctx = FileContext::new(Path::new(""), &tokens);
        let construct = ctx.constructs()[0];
        let body: Vec<_> = ctx
            .construct_tokens(&construct, 1)
            .iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            body,
            vec![
                TokenKind::Name,
                TokenKind::LBrace,
                TokenKind::Variable,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::RBrace
            ]
        );
    }

    #[test]
    fn source_file_from_json_dump() {
        let json = r#"{
            "path": "foo/manifests/init.pp",
            "tokens": [
                {"kind": "CLASS", "text": "class", "line": 1, "column": 1},
                {"kind": "WHITESPACE", "text": " ", "line": 1, "column": 6},
                {"kind": "NAME", "text": "foo", "line": 1, "column": 7}
            ]
        }"#;
        let source = SourceFile::from_json(json).unwrap();
        assert_eq!(source.path, PathBuf::from("foo/manifests/init.pp"));
        assert_eq!(source.tokens.len(), 3);
        assert_eq!(source.tokens[2].kind, TokenKind::Name);
    }

    #[test]
    fn source_file_path_defaults_to_empty() {
        let source = SourceFile::from_json(r#"{"tokens": []}"#).unwrap();
        assert!(!FileContext::from_source(&source).has_path());
    }
}
