use quickexpr::{
    evaluate,
    interpreter::lexer::{Lexer, TokenKind},
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "`{src}` evaluated to {value}, expected {expected}"),
        Err(e) => panic!("`{src}` failed unexpectedly: {e}"),
    }
}

fn assert_error_at(src: &str, position: usize) {
    match evaluate(src) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.position, position, "`{src}` failed at the wrong offset"),
    }
}

#[test]
fn integer_literals_are_exact() {
    assert_eq!(evaluate("0"), Ok(0.0));
    assert_eq!(evaluate("7"), Ok(7.0));
    assert_eq!(evaluate("42"), Ok(42.0));
    assert_eq!(evaluate("123456"), Ok(123_456.0));
    assert_eq!(evaluate("9007199254740991"), Ok(9_007_199_254_740_991.0));
}

#[test]
fn decimal_separators() {
    assert_value("1.5", 1.5);
    assert_value(",5", 0.5);
    assert_value(".5", 0.5);
    assert_value("3,25", 3.25);
    assert_value("1.2 + ,8", 2.0);
    // A trailing or lone separator still forms a number.
    assert_value("12.", 12.0);
    assert_value(".", 0.0);
}

#[test]
fn doubled_separator_is_an_error() {
    assert_error_at("1.2.3", 3);
    assert_error_at("1,2,3", 3);
    assert_error_at("1.2,3", 3);
    assert_error_at(",,", 1);
}

#[test]
fn subtraction_and_division_are_right_associative() {
    assert_value("8-3-1", 6.0);
    assert_value("8/4/2", 4.0);
    assert_value("1-2-3-4", -2.0);
}

#[test]
fn operator_precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("2*3^2", 18.0);
    assert_value("1+2*3^2", 19.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2^3^2", 512.0);
    assert_value("2^10", 1024.0);
    assert_value("2^-1", 0.5);
}

#[test]
fn unary_minus_stacks_and_binds_into_primary() {
    assert_value("-5", -5.0);
    assert_value("--5", 5.0);
    assert_value("---5", -5.0);
    // The minus is consumed at the primary layer, before `^` is seen.
    assert_value("-5^2", 25.0);
    assert_value("-(2+3)", -5.0);
}

#[test]
fn parentheses_and_brackets_are_interchangeable() {
    assert_value("(1+2)", 3.0);
    assert_value("[1+2)", 3.0);
    assert_value("(1+2]", 3.0);
    assert_value("[(1+2)*2]", 6.0);
    assert_value("2*(3+4)", 14.0);
}

#[test]
fn unmatched_parenthesis_fails_at_input_end() {
    assert_error_at("(1+2", 4);
    assert_error_at("(", 1);
    assert_error_at("((1)", 4);
}

#[test]
fn spaces_are_skipped() {
    assert_value("1 + 1", 2.0);
    assert_value("  2 *  3 ", 6.0);
}

#[test]
fn trailing_tokens_are_ignored() {
    // Evaluation stops at the first token that cannot extend the
    // expression; whatever follows is never inspected.
    assert_value("1\t+1", 1.0);
    assert_value("1 2", 1.0);
    assert_value("5)", 5.0);
}

#[test]
fn empty_input_fails_at_input_length() {
    assert_error_at("", 0);
    assert_error_at("   ", 3);
}

#[test]
fn stray_tokens_fail_at_their_offset() {
    assert_error_at("a", 0);
    assert_error_at("2+$", 2);
    assert_error_at("1 + *", 4);
    assert_error_at("()", 1);
    assert_error_at("-", 1);
}

#[test]
fn division_follows_ieee_semantics() {
    assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
    assert_eq!(evaluate("-1/0"), Ok(f64::NEG_INFINITY));
    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn lexer_reports_byte_spans() {
    let mut lexer = Lexer::new("  12.5 +");

    assert!(lexer.advance());
    let number = lexer.current();
    assert!(matches!(number.kind, TokenKind::Number(v) if (v - 12.5).abs() < 1e-9));
    assert_eq!((number.start, number.end), (2, 6));

    assert!(lexer.advance());
    let plus = lexer.current();
    assert_eq!(plus.kind, TokenKind::Add);
    assert_eq!((plus.start, plus.end), (7, 8));

    assert!(!lexer.advance());
    assert_eq!(lexer.current().kind, TokenKind::Eof);
    assert_eq!(lexer.current().start, 8);
}

#[test]
fn number_at_end_of_input_closes_at_input_length() {
    let mut lexer = Lexer::new("42");

    assert!(lexer.advance());
    let token = lexer.current();
    assert_eq!(token.kind, TokenKind::Number(42.0));
    assert_eq!((token.start, token.end), (0, 2));
    assert!(!lexer.advance());
}

#[test]
fn doubled_separator_leaves_cursor_on_the_separator() {
    let mut lexer = Lexer::new("1.2.3");

    assert!(lexer.advance());
    let token = lexer.current();
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(token.start, 3);
}
