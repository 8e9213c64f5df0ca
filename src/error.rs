/// Represents a syntax error detected while evaluating an expression.
///
/// The payload is the byte offset into the original input at which the error
/// was detected, pointing at the first character of the offending token. For
/// input that ends too early the offset equals the input length, pointing at
/// the missing token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxError {
    /// Byte offset into the original input.
    pub position: usize,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.position;
        write!(f, "Syntax error at position {position}.")
    }
}

impl std::error::Error for SyntaxError {}
