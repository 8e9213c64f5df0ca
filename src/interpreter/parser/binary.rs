use crate::interpreter::{
    lexer::{Lexer, TokenKind},
    parser::{core::EvalResult, unary::eval_primary},
};

/// Evaluates addition and subtraction expressions.
///
/// Handles the binary operators `+` and `-`. The right-hand side recurses
/// into this same rule, so both operators are right-associative: an input
/// like `8 - 3 - 1` combines as `8 - (3 - 1)`.
///
/// The rule is: `additive := multiplicative (("+" | "-") additive)?`
///
/// # Parameters
/// - `lexer`: Token cursor with lookahead.
///
/// # Returns
/// The combined numeric value.
pub fn eval_additive(lexer: &mut Lexer) -> EvalResult {
    let left = eval_multiplicative(lexer)?;

    match lexer.current().kind {
        TokenKind::Add => {
            lexer.advance();
            let right = eval_additive(lexer)?;
            Ok(left + right)
        },
        TokenKind::Sub => {
            lexer.advance();
            let right = eval_additive(lexer)?;
            Ok(left - right)
        },
        _ => Ok(left),
    }
}

/// Evaluates multiplication and division expressions.
///
/// Handles the binary operators `*` and `/`, right-associatively for the
/// same structural reason as [`eval_additive`]: `8 / 4 / 2` combines as
/// `8 / (4 / 2)`. Division by zero is not detected here; it follows IEEE-754
/// semantics and yields an infinity or NaN.
///
/// The rule is: `multiplicative := exponent (("*" | "/") multiplicative)?`
///
/// # Parameters
/// - `lexer`: Token cursor with lookahead.
///
/// # Returns
/// The combined numeric value.
pub fn eval_multiplicative(lexer: &mut Lexer) -> EvalResult {
    let left = eval_exponent(lexer)?;

    match lexer.current().kind {
        TokenKind::Mul => {
            lexer.advance();
            let right = eval_multiplicative(lexer)?;
            Ok(left * right)
        },
        TokenKind::Div => {
            lexer.advance();
            let right = eval_multiplicative(lexer)?;
            Ok(left / right)
        },
        _ => Ok(left),
    }
}

/// Evaluates exponentiation expressions.
///
/// Handles right-associative `^`: `2 ^ 3 ^ 2` combines as `2 ^ (3 ^ 2)`.
/// The base comes from the primary layer, so a leading `-` has already been
/// folded into it: `-5 ^ 2` is `(-5) ^ 2`.
///
/// The rule is: `exponent := primary ("^" exponent)?`
///
/// # Parameters
/// - `lexer`: Token cursor with lookahead.
///
/// # Returns
/// The combined numeric value.
pub fn eval_exponent(lexer: &mut Lexer) -> EvalResult {
    let left = eval_primary(lexer)?;

    match lexer.current().kind {
        TokenKind::Pow => {
            lexer.advance();
            let right = eval_exponent(lexer)?;
            Ok(left.powf(right))
        },
        _ => Ok(left),
    }
}
