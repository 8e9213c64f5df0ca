use crate::{
    error::SyntaxError,
    interpreter::{lexer::Lexer, parser::binary::eval_additive},
};

/// The outcome of evaluating (part of) an expression: a numeric value, or
/// the byte offset at which a syntax error was detected. This is the single
/// return contract used by every grammar layer.
pub type EvalResult = Result<f64, SyntaxError>;

/// Evaluates a full expression.
///
/// This is the entry point for expression evaluation. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through the precedence hierarchy, combining results as the
/// recursion unwinds.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `lexer`: Token cursor with the lookahead already primed.
///
/// # Returns
/// The numeric value of the expression.
pub fn eval_expression(lexer: &mut Lexer) -> EvalResult {
    eval_additive(lexer)
}
