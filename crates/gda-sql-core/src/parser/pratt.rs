//! Binding powers for the two operator-precedence layers of the grammar:
//! arithmetic inside field items and `AND`/`OR`/`NOT` inside WHERE trees.

use crate::ast::{CompareOp, FieldOp, LogicOp};
use crate::lexer::{Keyword, TokenKind};

/// Prefix binding power of `NOT` in a WHERE tree. Binds tighter than both
/// connectives, so `NOT a AND b` is `(NOT a) AND b`.
pub const NOT_BINDING_POWER: u8 = 5;

/// Returns the infix binding power of an arithmetic operator token.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: left_bp < right_bp
///
/// Returns `None` if the token is not an arithmetic operator.
#[must_use]
pub const fn field_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Plus | TokenKind::Minus => Some((1, 2)),
        TokenKind::Star | TokenKind::Slash => Some((3, 4)),
        _ => None,
    }
}

/// Returns the infix binding power of a logical connective.
#[must_use]
pub const fn logic_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some((1, 2)),
        TokenKind::Keyword(Keyword::And) => Some((3, 4)),
        _ => None,
    }
}

/// Converts a token to an arithmetic operator.
#[must_use]
pub const fn token_to_field_op(kind: &TokenKind) -> Option<FieldOp> {
    match kind {
        TokenKind::Plus => Some(FieldOp::Plus),
        TokenKind::Minus => Some(FieldOp::Minus),
        TokenKind::Star => Some(FieldOp::Times),
        TokenKind::Slash => Some(FieldOp::Div),
        _ => None,
    }
}

/// Converts a token to a logical connective.
#[must_use]
pub const fn token_to_logic_op(kind: &TokenKind) -> Option<LogicOp> {
    match kind {
        TokenKind::Keyword(Keyword::And) => Some(LogicOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(LogicOp::Or),
        _ => None,
    }
}

/// Converts a single-token comparison operator. Keyword operators
/// (`IS`, `IN`, `LIKE`, `NOT …`, `SIMILAR TO`, `BETWEEN`) are handled by
/// the parser because they may span several tokens.
#[must_use]
pub const fn token_to_compare_op(kind: &TokenKind) -> Option<CompareOp> {
    match kind {
        TokenKind::Eq => Some(CompareOp::Eq),
        TokenKind::NotEq => Some(CompareOp::Diff),
        TokenKind::Lt => Some(CompareOp::Lt),
        TokenKind::LtEq => Some(CompareOp::Leq),
        TokenKind::Gt => Some(CompareOp::Gt),
        TokenKind::GtEq => Some(CompareOp::Geq),
        TokenKind::Tilde => Some(CompareOp::Regexp),
        TokenKind::TildeStar => Some(CompareOp::RegexpCi),
        TokenKind::NotTilde => Some(CompareOp::NotRegexp),
        TokenKind::NotTildeStar => Some(CompareOp::NotRegexpCi),
        _ => None,
    }
}
