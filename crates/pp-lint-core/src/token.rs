//! Token types consumed by the analyzer.
//!
//! Tokens are produced by an external lexer and handed over as a flat,
//! positionally ordered sequence. Indices into that sequence are the only
//! addressing mechanism used by rules.

use serde::{Deserialize, Serialize};

/// Kind of a lexed manifest token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    /// Bare word or namespaced name (`foo`, `foo::bar`).
    Name,
    /// Capitalized type or class reference (`File`, `Foo::Bar`).
    ClassRef,
    /// Variable reference (`$foo`, `$foo::bar`, or `foo` inside `"${foo}"`).
    Variable,
    /// Unbraced variable inside a double-quoted string (`"$foo"`).
    #[serde(rename = "UNENC_VARIABLE")]
    UnencVariable,
    /// Data type name (`String`, `Integer`).
    Type,

    /// `class` keyword.
    Class,
    /// `define` keyword.
    Define,
    /// `inherits` keyword.
    Inherits,
    /// `node` keyword.
    Node,
    /// `if` keyword.
    If,
    /// `elsif` keyword.
    Elsif,
    /// `else` keyword.
    Else,
    /// `unless` keyword.
    Unless,
    /// `case` keyword.
    Case,
    /// `default` keyword.
    Default,
    /// `true` literal.
    True,
    /// `false` literal.
    False,
    /// `undef` literal.
    Undef,
    /// `import` keyword.
    Import,
    /// `and` operator.
    And,
    /// `or` operator.
    Or,
    /// `in` operator.
    In,

    /// Double-quoted string without interpolation.
    String,
    /// Single-quoted string.
    SString,
    /// Start of an interpolated string, up to the first interpolation.
    DqPre,
    /// Literal text between two interpolations.
    DqMid,
    /// End of an interpolated string, after the last interpolation.
    DqPost,
    /// Numeric literal.
    Number,
    /// Regular expression literal.
    Regex,

    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBrack,
    /// `]`
    RBrack,
    /// `,`
    Comma,
    /// `=`
    Equals,
    /// `=>`
    FArrow,
    /// `+>`
    Parrow,
    /// `:`
    Colon,
    /// `;`
    Semic,
    /// `.`
    Dot,
    /// `?`
    #[serde(rename = "QMARK")]
    Question,
    /// `+=`
    Appends,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Div,
    /// `%`
    Modulo,
    /// `<<`
    LShift,
    /// `>>`
    RShift,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `@`
    At,
    /// `\`
    Backslash,
    /// `<|`
    LCollect,
    /// `|>`
    RCollect,
    /// `==`
    IsEqual,
    /// `!=`
    NotEqual,
    /// `=~`
    Match,
    /// `!~`
    NoMatch,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `!`
    Not,

    /// `->` relationship operator.
    #[serde(rename = "IN_EDGE")]
    InEdge,
    /// `~>` notifying relationship operator.
    #[serde(rename = "IN_EDGE_SUB")]
    InEdgeSub,
    /// `<-` right-to-left relationship operator.
    #[serde(rename = "OUT_EDGE")]
    OutEdge,
    /// `<~` right-to-left notifying relationship operator.
    #[serde(rename = "OUT_EDGE_SUB")]
    OutEdgeSub,

    /// Horizontal whitespace.
    Whitespace,
    /// Line break.
    Newline,
    /// Leading indentation.
    Indent,
    /// `# comment`
    Comment,
    /// `/* comment */`
    MlComment,
    /// `// comment`
    #[serde(rename = "SLASH_COMMENT")]
    SlashComment,

    /// Any kind this crate does not model. Rules treat it as opaque.
    #[serde(other)]
    Other,
}

impl TokenKind {
    /// Returns true for kinds that carry no structure (whitespace and comments).
    #[must_use]
    pub fn is_formatting(self) -> bool {
        matches!(
            self,
            Self::Whitespace
                | Self::Newline
                | Self::Indent
                | Self::Comment
                | Self::MlComment
                | Self::SlashComment
        )
    }
}

/// A single lexed token with its 1-indexed source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Token text as it appears in the source.
    ///
    /// For [`TokenKind::Variable`] the leading `$` may or may not be present.
    pub text: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Returns true if this token is whitespace or a comment.
    #[must_use]
    pub fn is_formatting(&self) -> bool {
        self.kind.is_formatting()
    }

    /// Returns the variable name without its `$` sigil.
    #[must_use]
    pub fn variable_name(&self) -> &str {
        self.text.strip_prefix('$').unwrap_or(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_kinds() {
        assert!(TokenKind::Whitespace.is_formatting());
        assert!(TokenKind::Comment.is_formatting());
        assert!(!TokenKind::Name.is_formatting());
        assert!(!TokenKind::OutEdge.is_formatting());
    }

    #[test]
    fn variable_name_strips_sigil() {
        let with = Token::new(TokenKind::Variable, "$foo::bar", 1, 1);
        let without = Token::new(TokenKind::Variable, "foo", 1, 1);
        assert_eq!(with.variable_name(), "foo::bar");
        assert_eq!(without.variable_name(), "foo");
    }

    #[test]
    fn deserializes_lexer_kind_names() {
        let token: Token =
            serde_json::from_str(r#"{"kind":"OUT_EDGE","text":"<-","line":3,"column":7}"#)
                .unwrap();
        assert_eq!(token.kind, TokenKind::OutEdge);
        assert_eq!((token.line, token.column), (3, 7));

        let kind: TokenKind = serde_json::from_str(r#""LBRACE""#).unwrap();
        assert_eq!(kind, TokenKind::LBrace);
    }

    #[test]
    fn deserializes_string_and_operator_kinds() {
        let cases = [
            ("SSTRING", TokenKind::SString),
            ("DQPRE", TokenKind::DqPre),
            ("DQMID", TokenKind::DqMid),
            ("DQPOST", TokenKind::DqPost),
            ("UNENC_VARIABLE", TokenKind::UnencVariable),
            ("QMARK", TokenKind::Question),
            ("PLUS", TokenKind::Plus),
            ("APPENDS", TokenKind::Appends),
            ("LCOLLECT", TokenKind::LCollect),
            ("TYPE", TokenKind::Type),
            ("IN", TokenKind::In),
        ];
        for (name, expected) in cases {
            let kind: TokenKind = serde_json::from_str(&format!("\"{name}\"")).unwrap();
            assert_eq!(kind, expected, "{name}");
        }
    }

    #[test]
    fn unknown_kinds_fall_back_to_other() {
        let kind: TokenKind = serde_json::from_str(r#""HEREDOC_OPEN""#).unwrap();
        assert_eq!(kind, TokenKind::Other);
        assert!(!kind.is_formatting());
    }
}
