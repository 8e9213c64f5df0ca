//! # quickexpr
//!
//! quickexpr is a quick arithmetic expression evaluator written in Rust.
//! It lexes and evaluates one line of input in a single recursive-descent
//! pass, producing either an `f64` result or the byte offset at which a
//! syntax error was detected.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::SyntaxError,
    interpreter::{lexer::Lexer, parser::core::eval_expression},
};

/// Provides the error type for failed evaluations.
///
/// This module defines the single error that evaluation can produce. There
/// are no distinct categories for unexpected tokens, missing parentheses, or
/// malformed numbers: every failure collapses to one structured payload, the
/// byte offset at which the error was detected. All user-facing presentation
/// (caret rendering, messages) belongs to the caller.
///
/// # Responsibilities
/// - Defines `SyntaxError` and its offset payload.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the lexing and evaluation of one expression.
///
/// This module ties together the lexer and the fused parser/evaluator. There
/// is no intermediate syntax tree: grammar layers pull tokens from the lexer
/// on demand and combine numeric results immediately as the recursion
/// unwinds.
///
/// # Responsibilities
/// - Coordinates the token cursor and the grammar layers.
/// - Propagates the first syntax error unchanged to the caller.
/// - Holds no state between evaluations.
pub mod interpreter;

/// Evaluates a single arithmetic expression.
///
/// The input is lexed and evaluated in one pass. Numbers accept both `.` and
/// `,` as decimal separator, `(`/`[` and `)`/`]` are interchangeable, and
/// the binary operators `+ - * / ^` are all right-associative. Division by
/// zero is not an error; it follows IEEE-754 semantics.
///
/// # Errors
/// Returns a [`SyntaxError`] carrying the byte offset of the first offending
/// token when the input is not a valid expression.
///
/// # Examples
/// ```
/// use quickexpr::evaluate;
///
/// assert_eq!(evaluate("1 + 2 * 3"), Ok(7.0));
/// assert_eq!(evaluate("2^3^2"), Ok(512.0));
///
/// // Errors carry the byte offset of the offending token.
/// assert_eq!(evaluate("1 + *").unwrap_err().position, 4);
/// ```
pub fn evaluate(input: &str) -> Result<f64, SyntaxError> {
    let mut lexer = Lexer::new(input);
    lexer.advance();
    eval_expression(&mut lexer)
}
