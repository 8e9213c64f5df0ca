/// The lexer module tokenizes one line of input for evaluation.
///
/// The lexer reads the raw input bytes and produces tokens on demand, one at
/// a time, holding a single token of lookahead. Each token records the
/// half-open byte range it was read from, which is the basis for all error
/// reporting.
///
/// # Responsibilities
/// - Converts the input byte stream into tokens with kind and source span.
/// - Handles numeric literals with `.` or `,` as decimal separator.
/// - Surfaces unrecognized bytes as error tokens instead of failing.
pub mod lexer;
/// The parser module evaluates tokens directly, without building a tree.
///
/// The parser pulls tokens from the lexer in precedence-ordered grammar
/// layers and combines the numeric results immediately as the recursion
/// unwinds. Parsing and evaluation are fused: there is no AST and no state
/// beyond the call stack.
///
/// # Responsibilities
/// - Implements the precedence hierarchy for `+ - * / ^`.
/// - Handles grouping and unary negation at the primary layer.
/// - Aborts on the first syntax error, reporting its byte offset.
pub mod parser;
