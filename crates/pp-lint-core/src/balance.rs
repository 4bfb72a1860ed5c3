//! Delimiter balancing over flat token streams.

use crate::construct::Construct;
use crate::token::{Token, TokenKind};
use std::borrow::Borrow;
use thiserror::Error;
use tracing::debug;

/// A paired delimiter tracked by [`matching_close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `(` and `)`.
    Paren,
    /// `{` and `}`.
    Brace,
    /// `[` and `]`.
    Bracket,
}

impl Delimiter {
    /// Token kind that opens this delimiter.
    #[must_use]
    pub fn open(self) -> TokenKind {
        match self {
            Self::Paren => TokenKind::LParen,
            Self::Brace => TokenKind::LBrace,
            Self::Bracket => TokenKind::LBrack,
        }
    }

    /// Token kind that closes this delimiter.
    #[must_use]
    pub fn close(self) -> TokenKind {
        match self {
            Self::Paren => TokenKind::RParen,
            Self::Brace => TokenKind::RBrace,
            Self::Bracket => TokenKind::RBrack,
        }
    }
}

/// Errors from delimiter balancing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// The start index does not hold the expected opening delimiter.
    #[error("token {index} is not an opening {delimiter:?}")]
    NotAnOpener {
        /// Index that was inspected.
        index: usize,
        /// Delimiter that was expected.
        delimiter: Delimiter,
    },

    /// The stream ended before the delimiter was closed.
    #[error("{delimiter:?} opened at token {open} is never closed")]
    Unbalanced {
        /// Index of the opening delimiter.
        open: usize,
        /// Delimiter being balanced.
        delimiter: Delimiter,
    },
}

/// Finds the index of the delimiter closing the one opened at `open`.
///
/// Nested pairs of the same delimiter are skipped over. Other delimiter
/// kinds are ignored.
///
/// # Errors
///
/// Returns [`BalanceError::NotAnOpener`] if `open` does not hold the opening
/// delimiter, or [`BalanceError::Unbalanced`] if the stream ends first.
pub fn matching_close<T: Borrow<Token>>(
    tokens: &[T],
    open: usize,
    delimiter: Delimiter,
) -> Result<usize, BalanceError> {
    match tokens.get(open).map(|t| t.borrow().kind) {
        Some(kind) if kind == delimiter.open() => {}
        _ => {
            return Err(BalanceError::NotAnOpener {
                index: open,
                delimiter,
            })
        }
    }

    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open) {
        let kind = token.borrow().kind;
        if kind == delimiter.open() {
            depth += 1;
        } else if kind == delimiter.close() {
            depth -= 1;
            if depth == 0 {
                return Ok(idx);
            }
        }
    }

    Err(BalanceError::Unbalanced { open, delimiter })
}

/// Locates the top-level parameter list of a construct.
///
/// Scans forward from the token after the construct's name for the first
/// `(` that appears before the body `{`, and returns the inclusive index pair
/// of that parenthesis and its match. Returns `None` when the construct has
/// no parameter list or the list is malformed.
///
/// The search stops at the body brace, so a parenthesised call inside the
/// body is never taken for the construct's parameters.
#[must_use]
pub fn parameter_list(tokens: &[Token], construct: &Construct) -> Option<(usize, usize)> {
    let end = construct.end.min(tokens.len().saturating_sub(1));
    for idx in construct.name + 1..=end {
        match tokens[idx].kind {
            TokenKind::LBrace => return None,
            TokenKind::RParen => {
                debug!(
                    "Stray ')' at {}:{} before parameter list",
                    tokens[idx].line, tokens[idx].column
                );
                return None;
            }
            TokenKind::LParen => {
                return match matching_close(tokens, idx, Delimiter::Paren) {
                    Ok(close) if close <= end => Some((idx, close)),
                    Ok(_) => None,
                    Err(e) => {
                        debug!("Skipping parameter list: {e}");
                        None
                    }
                };
            }
            _ => {}
        }
    }
    None
}
