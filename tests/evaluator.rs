use flatcalc::{
    error::{Error, LexError, ParseError},
    evaluate,
    interpreter::evaluator::core::{DEFAULT_MAX_DEPTH, Evaluator},
};

fn assert_value(source: &str, expected: f64) {
    match evaluate(source) {
        Ok(value) => assert_eq!(value, expected, "expression: {source}"),
        Err(e) => panic!("Expression {source:?} failed: {e}"),
    }
}

fn assert_parse_error(source: &str, expected: ParseError) {
    assert_eq!(evaluate(source), Err(Error::Parse(expected)), "expression: {source}");
}

#[test]
fn single_number() {
    assert_value("2.6543", 2.6543);
    assert_value("  42  ", 42.0);
}

#[test]
fn basic_arithmetic() {
    assert_value("2.50+6.50", 9.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
}

#[test]
fn precedence() {
    assert_value("2 + 2 * 2 / 2", 4.0);
    assert_value("2*3-4/2", 4.0);
    assert_value("1+2*3", 7.0);
}

#[test]
fn equal_precedence_is_left_associative() {
    assert_value("8-3-2", 3.0);
    assert_value("1-1+1", 1.0);
    assert_value("16/4/2", 2.0);
}

#[test]
fn mixed_multiplication_and_division() {
    assert_value("8*2/4", 4.0);
    assert_value("8/2*4", 16.0);
}

#[test]
fn nested_groups() {
    assert_value("(1.0 + (1.0 + 3.0 / (1.0 + 1.0))) * (2.0 / 2.0) + 8.0", 11.5);
    assert_value("(2+(7+90/(1+1))) * (2 /2) + 76", 130.0);
    assert_value("((2))", 2.0);
}

#[test]
fn duplicate_group_text() {
    assert_value("(1+1)+(1+1)", 4.0);
    assert_value("(2*3)*(2*3)-(2*3)", 30.0);
}

#[test]
fn negative_group_results() {
    assert_value("(1-3)*2", -4.0);
    assert_value("1-(2-(3-4))", -2.0);
    assert_value("10/(2-4)", -5.0);
}

#[test]
fn division_by_zero_is_a_value() {
    assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
    assert!(evaluate("0/0").unwrap().is_nan());
    assert_eq!(evaluate("1/(1-1)*0-1/0").map(f64::is_nan), Ok(true));
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("1 2 + 3", 15.0);
    assert_value("\t( 1 +\n1 )", 2.0);
}

#[test]
fn unary_minus_is_rejected() {
    assert_parse_error("-3", ParseError::MissingOperand { operator: '-',
                                                          position: 0, });
    assert_parse_error("(-3)", ParseError::MissingOperand { operator: '-',
                                                            position: 1, });
    assert_parse_error("2*-3", ParseError::MissingOperand { operator: '-',
                                                            position: 2, });
}

#[test]
fn missing_operands_and_operators() {
    assert_parse_error("2+", ParseError::MissingOperand { operator: '+',
                                                          position: 1, });
    assert_parse_error("2+*3", ParseError::MissingOperand { operator: '*',
                                                            position: 2, });
    assert_parse_error("(2)(3)", ParseError::MissingOperator { position: 3 });
    assert_parse_error("2(3)", ParseError::MissingOperator { position: 1 });
}

#[test]
fn unbalanced_parentheses() {
    assert_parse_error("(1+2", ParseError::UnclosedParen { position: 0 });
    assert_parse_error("1+2)", ParseError::UnmatchedClosingParen { position: 3 });
    assert_parse_error("(1))", ParseError::UnmatchedClosingParen { position: 3 });
    assert_parse_error(")1+2(", ParseError::UnclosedParen { position: 4 });
}

#[test]
fn empty_input_and_groups() {
    assert_parse_error("", ParseError::EmptyExpression);
    assert_parse_error("   ", ParseError::EmptyExpression);
    assert_parse_error("()", ParseError::EmptyGroup { position: 0 });
    assert_parse_error("1+( )", ParseError::EmptyGroup { position: 2 });
}

#[test]
fn invalid_numbers() {
    assert_parse_error("1.2.3+1", ParseError::InvalidNumber { text:     "1.2.3".to_string(),
                                                              position: 0, });
}

#[test]
fn unknown_characters() {
    assert_eq!(evaluate("2#3"),
               Err(Error::Lex(LexError::UnknownCharacter { character: '#',
                                                           position:  1, })));
    assert_eq!(evaluate("(1+x)"),
               Err(Error::Lex(LexError::UnknownCharacter { character: 'x',
                                                           position:  3, })));
    assert_eq!(evaluate("2^3"),
               Err(Error::Lex(LexError::UnknownCharacter { character: '^',
                                                           position:  1, })));
}

#[test]
fn error_messages() {
    assert_eq!(evaluate("2#3").unwrap_err().to_string(),
               "Unknown character '#' at position 1.");
    assert_eq!(evaluate("(1+2").unwrap_err().to_string(),
               "Unclosed parenthesis '(' at position 0.");
}

#[test]
fn nesting_limit() {
    let shallow = Evaluator::new().with_max_depth(2);
    assert_eq!(shallow.evaluate("((1))"), Ok(1.0));
    assert_eq!(shallow.evaluate("(((1)))"),
               Err(Error::Parse(ParseError::NestingTooDeep { limit: 2 })));

    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(evaluate(&deep),
               Err(Error::Parse(ParseError::NestingTooDeep { limit: DEFAULT_MAX_DEPTH })));
}

#[test]
fn evaluator_is_reusable() {
    let evaluator = Evaluator::default();

    assert_eq!(evaluator.max_depth(), DEFAULT_MAX_DEPTH);
    assert_eq!(evaluator.evaluate("1+1"), Ok(2.0));
    assert_eq!(evaluator.evaluate("2*3"), Ok(6.0));
    assert_eq!(evaluator.evaluate("1+1"), Ok(2.0));
}
