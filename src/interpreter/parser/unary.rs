use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Lexer, TokenKind},
        parser::core::{EvalResult, eval_expression},
    },
};

/// Evaluates a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - numeric literals
/// - unary negation, which recurses into this same rule and therefore
///   stacks (`--5` is `5`) and binds tighter than any binary operator
/// - parenthesized sub-expressions, where `(`/`[` and `)`/`]` are
///   interchangeable
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "-" primary
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `lexer`: Token cursor positioned at the start of a primary expression.
///
/// # Returns
/// The numeric value of the primary expression.
///
/// # Errors
/// Any other lookahead token fails with the token's start offset; for the
/// `Eof` token that is the input length, pointing at the missing token. A
/// grouping whose inner expression is not followed by a closing paren fails
/// at the start of whatever token was found instead.
pub(crate) fn eval_primary(lexer: &mut Lexer) -> EvalResult {
    let token = lexer.current();

    match token.kind {
        TokenKind::Number(value) => {
            lexer.advance();
            Ok(value)
        },
        TokenKind::Sub => {
            lexer.advance();
            let value = eval_primary(lexer)?;
            Ok(-value)
        },
        TokenKind::LParen => {
            lexer.advance();
            let value = eval_expression(lexer)?;

            match lexer.current().kind {
                TokenKind::RParen => {
                    lexer.advance();
                    Ok(value)
                },
                _ => Err(SyntaxError { position: lexer.current().start }),
            }
        },
        _ => Err(SyntaxError { position: token.start }),
    }
}
