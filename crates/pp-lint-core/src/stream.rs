//! Bounds-safe lookups over token slices.
//!
//! Every helper accepts both `&[Token]` and `&[&Token]` so rules can work on
//! the raw stream or on a filtered view of it. Out-of-range lookups return
//! `None` instead of panicking.

use crate::token::{Token, TokenKind};
use std::borrow::Borrow;
use std::ops::RangeInclusive;

/// Returns the token at `idx`, if any.
#[must_use]
pub fn token_at<T: Borrow<Token>>(tokens: &[T], idx: usize) -> Option<&Token> {
    tokens.get(idx).map(Borrow::borrow)
}

/// Returns the kind of the token at `idx`, if any.
#[must_use]
pub fn kind_at<T: Borrow<Token>>(tokens: &[T], idx: usize) -> Option<TokenKind> {
    token_at(tokens, idx).map(|t| t.kind)
}

/// Returns the kind of the token following `idx`, if any.
#[must_use]
pub fn next_kind<T: Borrow<Token>>(tokens: &[T], idx: usize) -> Option<TokenKind> {
    idx.checked_add(1).and_then(|next| kind_at(tokens, next))
}

/// Returns the kind of the token preceding `idx`, if any.
#[must_use]
pub fn prev_kind<T: Borrow<Token>>(tokens: &[T], idx: usize) -> Option<TokenKind> {
    idx.checked_sub(1).and_then(|prev| kind_at(tokens, prev))
}

/// Returns the index of the first non-formatting token after `idx`.
#[must_use]
pub fn next_significant<T: Borrow<Token>>(tokens: &[T], idx: usize) -> Option<usize> {
    let start = idx.checked_add(1)?;
    tokens
        .get(start..)?
        .iter()
        .position(|t| !t.borrow().is_formatting())
        .map(|offset| start + offset)
}

/// Collects the non-formatting tokens within `range`.
///
/// The range is clamped to the end of the stream.
#[must_use]
pub fn significant(tokens: &[Token], range: RangeInclusive<usize>) -> Vec<&Token> {
    let (start, end) = range.into_inner();
    let end = end.min(tokens.len().saturating_sub(1));
    tokens
        .get(start..=end)
        .unwrap_or_default()
        .iter()
        .filter(|t| !t.is_formatting())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream() -> Vec<Token> {
        vec![
            Token::new(TokenKind::Class, "class", 1, 1),
            Token::new(TokenKind::Whitespace, " ", 1, 6),
            Token::new(TokenKind::Name, "foo", 1, 7),
            Token::new(TokenKind::Comment, "# x", 1, 11),
        ]
    }

    #[test]
    fn lookups_past_the_end_are_absent() {
        let tokens = stream();
        assert_eq!(kind_at(&tokens, 2), Some(TokenKind::Name));
        assert_eq!(kind_at(&tokens, 4), None);
        assert_eq!(next_kind(&tokens, 3), None);
        assert_eq!(next_kind(&tokens, usize::MAX), None);
        assert_eq!(prev_kind(&tokens, 0), None);
    }

    #[test]
    fn next_significant_skips_formatting() {
        let tokens = stream();
        assert_eq!(next_significant(&tokens, 0), Some(2));
        assert_eq!(next_significant(&tokens, 2), None);
        assert_eq!(next_significant(&tokens, 10), None);
    }

    #[test]
    fn significant_filters_and_clamps() {
        let tokens = stream();
        let kinds: Vec<_> = significant(&tokens, 0..=99).iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Class, TokenKind::Name]);
        assert!(significant(&tokens, 10..=12).is_empty());
    }

    #[test]
    fn works_on_filtered_views() {
        let tokens = stream();
        let view = significant(&tokens, 0..=3);
        assert_eq!(next_kind(&view, 0), Some(TokenKind::Name));
        assert_eq!(token_at(&view, 1).map(|t| t.text.as_str()), Some("foo"));
    }
}
