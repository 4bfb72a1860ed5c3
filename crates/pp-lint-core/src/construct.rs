//! Locating class and defined-type declarations in a token stream.

use crate::balance::{matching_close, Delimiter};
use crate::stream::next_significant;
use crate::token::{Token, TokenKind};
use serde::Serialize;
use tracing::debug;

/// Kind of a located declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConstructKind {
    /// `class name { ... }`
    Class,
    /// `define name { ... }`
    DefinedType,
}

/// Index range of one class or defined-type declaration.
///
/// `start..=end` spans from the keyword to the closing body brace. Ranges of
/// nested declarations lie inside the range of their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Construct {
    /// Declaration kind.
    pub kind: ConstructKind,
    /// Index of the `class` or `define` keyword.
    pub start: usize,
    /// Index of the closing body brace.
    pub end: usize,
    /// Index of the name token.
    pub name: usize,
}

impl Construct {
    /// Returns the name token of this construct.
    ///
    /// # Panics
    ///
    /// Panics if `tokens` is not the stream this construct was located in.
    #[must_use]
    pub fn name_token<'t>(&self, tokens: &'t [Token]) -> &'t Token {
        &tokens[self.name]
    }

    /// Returns true if `other` starts inside this construct's range.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start < other.start && other.start <= self.end
    }
}

/// Finds every class and defined-type declaration, nested ones included.
///
/// A `class` keyword not followed by a name (the resource-like
/// `class { 'foo': }` form) is not a declaration. Declarations whose body
/// cannot be found or never closes are skipped.
#[must_use]
pub fn locate_constructs(tokens: &[Token]) -> Vec<Construct> {
    let mut constructs = Vec::new();

    for (idx, token) in tokens.iter().enumerate() {
        let kind = match token.kind {
            TokenKind::Class => ConstructKind::Class,
            TokenKind::Define => ConstructKind::DefinedType,
            _ => continue,
        };

        let Some(name) =
            next_significant(tokens, idx).filter(|&n| tokens[n].kind == TokenKind::Name)
        else {
            continue;
        };

        let Some(open) = body_open(tokens, name) else {
            debug!(
                "No body found for {} at {}:{}",
                tokens[name].text, token.line, token.column
            );
            continue;
        };

        match matching_close(tokens, open, Delimiter::Brace) {
            Ok(end) => constructs.push(Construct {
                kind,
                start: idx,
                end,
                name,
            }),
            Err(e) => debug!("Skipping {}: {e}", tokens[name].text),
        }
    }

    constructs
}

/// Finds the body `{` of a declaration, skipping braces inside its
/// parameter list.
fn body_open(tokens: &[Token], name: usize) -> Option<usize> {
    let mut paren_depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(name + 1) {
        match token.kind {
            TokenKind::LParen => paren_depth += 1,
            TokenKind::RParen => paren_depth = paren_depth.checked_sub(1)?,
            TokenKind::LBrace if paren_depth == 0 => return Some(idx),
            _ => {}
        }
    }
    None
}
