//! Minimal manifest tokenizer for tests.
//!
//! Real token streams come from an external lexer. This one covers enough of
//! the surface syntax to write rule tests as source snippets instead of
//! hand-built token vectors. It does not validate anything.

use crate::token::{Token, TokenKind};

const OPERATORS: &[(&str, TokenKind)] = &[
    ("<-", TokenKind::OutEdge),
    ("<~", TokenKind::OutEdgeSub),
    ("->", TokenKind::InEdge),
    ("~>", TokenKind::InEdgeSub),
    ("=>", TokenKind::FArrow),
    ("+>", TokenKind::Parrow),
    ("==", TokenKind::IsEqual),
    ("!=", TokenKind::NotEqual),
    ("=~", TokenKind::Match),
    ("!~", TokenKind::NoMatch),
    ("+=", TokenKind::Appends),
    (">=", TokenKind::GreaterEqual),
    ("<=", TokenKind::LessEqual),
    ("<<", TokenKind::LShift),
    (">>", TokenKind::RShift),
    ("<|", TokenKind::LCollect),
    ("|>", TokenKind::RCollect),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    ("[", TokenKind::LBrack),
    ("]", TokenKind::RBrack),
    (",", TokenKind::Comma),
    ("=", TokenKind::Equals),
    (":", TokenKind::Colon),
    (";", TokenKind::Semic),
    (".", TokenKind::Dot),
    ("?", TokenKind::Question),
    ("<", TokenKind::LessThan),
    (">", TokenKind::GreaterThan),
    ("!", TokenKind::Not),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Times),
    ("/", TokenKind::Div),
    ("%", TokenKind::Modulo),
    ("@", TokenKind::At),
];

/// Splits manifest source into tokens with 1-indexed positions.
///
/// Variables keep their `$` sigil in [`Token::text`], except `${name}`
/// interpolations, where the token text is the bare name. Double-quoted
/// strings with interpolation are split into `DqPre`, variable, `DqMid`
/// and `DqPost` pieces; the literal pieces include their quote and `${`/`}`
/// delimiters so positions stay exact.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut line = 1;
    let mut column = 1;

    while pos < chars.len() {
        for (kind, len) in next_pieces(&chars, pos, column) {
            let text: String = chars[pos..pos + len].iter().collect();
            tokens.push(Token::new(kind, text.as_str(), line, column));

            for ch in text.chars() {
                if ch == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }
            pos += len;
        }
    }

    tokens
}

/// Kinds and lengths of the token(s) starting at `pos`.
fn next_pieces(chars: &[char], pos: usize, column: usize) -> Vec<(TokenKind, usize)> {
    let c = chars[pos];
    let rest: String = chars[pos..chars.len().min(pos + 2)].iter().collect();

    let piece = if c == '\n' {
        (TokenKind::Newline, 1)
    } else if c == ' ' || c == '\t' || c == '\r' {
        let kind = if column == 1 {
            TokenKind::Indent
        } else {
            TokenKind::Whitespace
        };
        (kind, run(chars, pos, |c| c == ' ' || c == '\t' || c == '\r'))
    } else if c == '#' {
        (TokenKind::Comment, run(chars, pos, |c| c != '\n'))
    } else if rest == "//" {
        (TokenKind::SlashComment, run(chars, pos, |c| c != '\n'))
    } else if rest == "/*" {
        (TokenKind::MlComment, block_comment_len(chars, pos))
    } else if c == '$' {
        (TokenKind::Variable, 1 + name_len(chars, pos + 1))
    } else if c == '\'' {
        (TokenKind::SString, string_len(chars, pos))
    } else if c == '"' {
        return double_quoted(chars, pos);
    } else if c.is_ascii_digit() {
        (TokenKind::Number, run(chars, pos, |c| c.is_alphanumeric() || c == '.'))
    } else if c.is_alphabetic() || c == '_' || rest == "::" {
        let len = name_len(chars, pos);
        let word: String = chars[pos..pos + len].iter().collect();
        (word_kind(&word), len)
    } else if let Some((op, kind)) = OPERATORS
        .iter()
        .find(|(op, _)| chars[pos..].iter().take(op.len()).copied().eq(op.chars()))
    {
        (*kind, op.len())
    } else {
        (TokenKind::Name, 1)
    };

    vec![piece]
}

/// Splits a double-quoted string at its `${name}` and `$name` interpolations.
fn double_quoted(chars: &[char], start: usize) -> Vec<(TokenKind, usize)> {
    let end = start + string_len(chars, start);
    let mut pieces = Vec::new();
    let mut literal_start = start;
    let mut idx = start + 1;

    let literal_kind = |pieces: &[(TokenKind, usize)]| {
        if pieces.is_empty() {
            TokenKind::DqPre
        } else {
            TokenKind::DqMid
        }
    };

    while idx < end {
        match (chars[idx], chars.get(idx + 1)) {
            ('\\', _) => idx += 2,
            ('$', Some(&'{')) => {
                pieces.push((literal_kind(&pieces), idx + 2 - literal_start));
                let name_start = idx + 2;
                let close = (name_start..end)
                    .find(|&i| chars[i] == '}')
                    .unwrap_or(end);
                pieces.push((TokenKind::Variable, close - name_start));
                literal_start = close;
                idx = close + 1;
            }
            ('$', Some(&next)) if next.is_alphabetic() || next == '_' => {
                pieces.push((literal_kind(&pieces), idx - literal_start));
                let len = 1 + name_len(chars, idx + 1);
                pieces.push((TokenKind::UnencVariable, len));
                literal_start = idx + len;
                idx = literal_start;
            }
            _ => idx += 1,
        }
    }

    if pieces.is_empty() {
        return vec![(TokenKind::String, end - start)];
    }
    pieces.push((TokenKind::DqPost, end - literal_start));
    pieces
}

fn run(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    chars[start..].iter().take_while(|&&c| pred(c)).count()
}

/// Length of a possibly namespaced name (`foo::bar`, `::foo`).
fn name_len(chars: &[char], start: usize) -> usize {
    let mut idx = start;
    while idx < chars.len() {
        if chars[idx].is_alphanumeric() || chars[idx] == '_' {
            idx += 1;
        } else if chars[idx] == ':' && chars.get(idx + 1) == Some(&':') {
            idx += 2;
        } else {
            break;
        }
    }
    idx - start
}

fn string_len(chars: &[char], start: usize) -> usize {
    let quote = chars[start];
    let mut idx = start + 1;
    while idx < chars.len() {
        match chars[idx] {
            '\\' => idx += 2,
            c if c == quote => return idx + 1 - start,
            _ => idx += 1,
        }
    }
    chars.len() - start
}

fn block_comment_len(chars: &[char], start: usize) -> usize {
    let mut idx = start + 2;
    while idx + 1 < chars.len() {
        if chars[idx] == '*' && chars[idx + 1] == '/' {
            return idx + 2 - start;
        }
        idx += 1;
    }
    chars.len() - start
}

fn word_kind(word: &str) -> TokenKind {
    match word {
        "class" => TokenKind::Class,
        "define" => TokenKind::Define,
        "inherits" => TokenKind::Inherits,
        "node" => TokenKind::Node,
        "if" => TokenKind::If,
        "elsif" => TokenKind::Elsif,
        "else" => TokenKind::Else,
        "unless" => TokenKind::Unless,
        "case" => TokenKind::Case,
        "default" => TokenKind::Default,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "undef" => TokenKind::Undef,
        w if w.starts_with(|c: char| c.is_uppercase()) => TokenKind::ClassRef,
        _ => TokenKind::Name,
    }
}
