/// Core evaluation entry point.
///
/// Contains the shared result type and the top grammar rule that the other
/// layers recurse back into.
pub mod core;

/// Primary-layer evaluation.
///
/// Handles the atomic expressions: numeric literals, unary negation, and
/// parenthesized groupings.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the precedence-ordered layers for `+ - * /` and `^`.
pub mod binary;
