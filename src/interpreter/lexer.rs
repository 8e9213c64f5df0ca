/// Classifies a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `,5`.
    Number(f64),
    /// Reserved for named constants; the current lexer never produces it.
    Identifier,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `(` or `[`
    LParen,
    /// `)` or `]`
    RParen,
    /// A byte that forms no valid token, or a malformed numeric literal.
    Error,
    /// End of input.
    Eof,
}

/// A token together with the half-open byte range it was read from.
///
/// `start..end` indexes into the original input and is carried for every
/// kind; error reporting uses `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:  TokenKind,
    /// Byte offset of the first byte of the token.
    pub start: usize,
    /// Byte offset one past the last byte of the token.
    pub end:   usize,
}

/// A cursor over one line of input, holding one token of lookahead.
///
/// The lexer borrows the input, scans it byte by byte, and produces tokens
/// on demand via [`advance`](Self::advance). The cursor is monotonically
/// non-decreasing within one evaluation; once the end of input is reached
/// the lookahead becomes a [`TokenKind::Eof`] token spanning `len..len`.
pub struct Lexer<'a> {
    input:   &'a [u8],
    len:     usize,
    cursor:  usize,
    current: Token,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`, positioned before the first token.
    ///
    /// The lookahead starts out as `Eof`; callers prime it with a first call
    /// to [`advance`](Self::advance).
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        let bytes = input.as_bytes();
        Self { input:   bytes,
               len:     bytes.len(),
               cursor:  0,
               current: Token { kind:  TokenKind::Eof,
                                start: bytes.len(),
                                end:   bytes.len(), }, }
    }

    /// Returns the current lookahead token.
    #[must_use]
    pub const fn current(&self) -> Token {
        self.current
    }

    /// Advances the lookahead to the next token.
    ///
    /// ASCII spaces are skipped; no other whitespace is. The next byte is
    /// then classified:
    /// - `+ - * / ^` and the interchangeable paren pairs `(`/`[` and
    ///   `)`/`]` become single-byte operator tokens,
    /// - a digit, `.` or `,` enters number scanning,
    /// - anything else becomes an `Error` token spanning that one byte.
    ///
    /// # Returns
    /// `true` whenever a token (including an `Error` token) was produced,
    /// `false` once the cursor has reached the end of input, in which case
    /// the lookahead is an `Eof` token at the input length.
    pub fn advance(&mut self) -> bool {
        let mut index = self.cursor;

        while index < self.len && self.input[index] == b' ' {
            index += 1;
        }

        if index >= self.len {
            self.cursor = index;
            self.current = Token { kind:  TokenKind::Eof,
                                   start: self.len,
                                   end:   self.len, };
            return false;
        }

        match self.input[index] {
            b'+' => self.single(TokenKind::Add, index),
            b'-' => self.single(TokenKind::Sub, index),
            b'*' => self.single(TokenKind::Mul, index),
            b'/' => self.single(TokenKind::Div, index),
            b'^' => self.single(TokenKind::Pow, index),
            b'(' | b'[' => self.single(TokenKind::LParen, index),
            b')' | b']' => self.single(TokenKind::RParen, index),
            b'0'..=b'9' | b'.' | b',' => self.scan_number(index),
            _ => self.single(TokenKind::Error, index),
        }

        true
    }

    /// Produces a single-byte token at `index` and steps past it.
    fn single(&mut self, kind: TokenKind, index: usize) {
        self.cursor = index + 1;
        self.current = Token { kind,
                               start: index,
                               end:   index + 1, };
    }

    /// Scans a numeric literal starting at `start`.
    ///
    /// Digits accumulate into the integer part until the first `.` or `,`
    /// switches to fractional mode, where each digit carries successively
    /// smaller weight starting at `0.1`. A lone separator is a valid start
    /// of fractional mode, so `.5` reads as `0.5` and `.` alone as `0.0`.
    ///
    /// A second separator while already fractional cannot extend the number:
    /// it terminates scanning with an `Error` token starting at the
    /// separator, and the cursor stays on the separator. Any other non-digit
    /// byte ends the number and is left unconsumed; running off the end of
    /// the input ends the number with its span closed at the input length.
    fn scan_number(&mut self, start: usize) {
        let mut index = start;
        let mut value = 0.0;
        let mut fractional = matches!(self.input[index], b'.' | b',');
        let mut weight = 0.1;

        if fractional {
            index += 1;
        }

        while index < self.len {
            match self.input[index] {
                b'.' | b',' => {
                    if fractional {
                        self.cursor = index;
                        self.current = Token { kind:  TokenKind::Error,
                                               start: index,
                                               end:   index + 1, };
                        return;
                    }

                    index += 1;
                    fractional = true;
                },
                byte @ b'0'..=b'9' => {
                    let digit = f64::from(byte - b'0');

                    if fractional {
                        value += digit * weight;
                        weight *= 0.1;
                    } else {
                        value = 10.0 * value + digit;
                    }

                    index += 1;
                },
                _ => break,
            }
        }

        self.cursor = index;
        self.current = Token { kind:  TokenKind::Number(value),
                               start,
                               end:   index, };
    }
}
