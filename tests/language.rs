use std::{fs, io, io::Read};

use simcalc::{
    error::{CalcError, LexicalError, ParseError, RuntimeError},
    get_result, interpret,
    interpreter::{lexer::Token, parser::MAX_NESTING_DEPTH},
    parse,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "calc")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        let actual = match get_result(&source) {
            Ok(output) => output,
            Err(e) => e.to_string(),
        };
        assert_eq!(actual, expected.trim_end(), "program {path:?} produced the wrong output");
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

fn assert_output(src: &str, expected: &str) {
    match get_result(src) {
        Ok(output) => assert_eq!(output, expected, "wrong output for {src:?}"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn expect_failure(src: &str) -> CalcError {
    match get_result(src) {
        Ok(output) => panic!("Script {src:?} succeeded with {output:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn single_number_is_unchanged() {
    assert_output("0.", "0.");
    assert_output("42.", "42.");
    assert_output("007.", "7.");
    assert_output("9223372036854775807.", "9223372036854775807.");
}

#[test]
fn addition_and_subtraction_are_left_associative() {
    assert_output("5 - 2 - 1.", "2.");
    assert_output("10 - 4 + 3.", "9.");
    assert_output("1 - 5.", "-4.");
}

#[test]
fn multiplication_and_division_are_left_associative() {
    assert_output("100 / 10 / 5.", "2.");
    assert_output("2 * 3 / 4.", "1.");
    assert_output("12 / 4 * 3.", "9.");
}

#[test]
fn exponentiation_is_right_associative() {
    assert_output("2^3^2.", "512.");
    assert_output("(2^3)^2.", "64.");
    assert_output("2^0.", "1.");
}

#[test]
fn precedence() {
    assert_output("2 + 3 * 4.", "14.");
    assert_output("(2 + 3) * 4.", "20.");
    assert_output("2 * 3 ^ 2.", "18.");
    assert_output("1 + 2 * 3 - 4 / 2.", "5.");
}

#[test]
fn absolute_value() {
    assert_output("|2 - 5|^2.", "9.");
    assert_output("|3 - 10|.", "7.");
    assert_output("||1 - 4| - 10|.", "7.");
    assert_output("2 ^ |1 - 3|.", "4.");
}

#[test]
fn sequences_print_every_value() {
    assert_output("1 + 1; 2 * 2.", "2; 4.");
    assert_output("1;2;3.", "1; 2; 3.");
    assert_output(" 1 +\n 1 ;\r\n 5 .", "2; 5.");
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("7 / 2.", "3.");
    assert_output("(0 - 7) / 2.", "-3.");
    assert_output("7 / (0 - 2).", "-3.");
}

#[test]
fn negative_exponents_truncate() {
    assert_output("2 ^ (0 - 1).", "0.");
    assert_output("1 ^ (0 - 5).", "1.");
    assert_output("(0 - 1) ^ (0 - 3).", "-1.");
    assert_output("(0 - 1) ^ (0 - 4).", "1.");
}

#[test]
fn text_after_the_terminator_is_ignored() {
    assert_output("1 + 2. this & is never read", "3.");
}

#[test]
fn parsing_is_repeatable() {
    let source = "1 + 2 * |3 - 9| ^ 2; (4 - 1) / 2.";
    let first = parse(source.as_bytes()).unwrap();
    let second = parse(source.as_bytes()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.eval().unwrap(), second.eval().unwrap());
    assert_eq!(get_result(source).unwrap(), get_result(source).unwrap());
}

#[test]
fn canonical_text_parses_to_the_same_tree() {
    for source in ["1+2*3.", "2^3^2;(1-2)^2.", "||1-4|-10|/3.", "((7)).", "1-2-3*4/5^6."] {
        let program = parse(source.as_bytes()).unwrap();
        let printed = program.to_string();
        let reparsed = parse(printed.as_bytes()).unwrap();
        assert_eq!(program, reparsed, "{source:?} printed as {printed:?}");
    }
    assert_eq!(parse("(1+2)^|3|;4.".as_bytes()).unwrap().to_string(),
               "(1 + 2) ^ |3|; 4.");
}

#[test]
fn missing_operand_is_parse_error() {
    let err = expect_failure("1 + .");
    assert!(matches!(err, CalcError::Parse(ParseError::InvalidToken { token: Token::Stop })));
    assert_eq!(err.to_string(), "Parse error: Token . is invalid here");
}

#[test]
fn mismatched_token_names_both_tokens() {
    let err = expect_failure("(1 + 2.");
    assert!(matches!(err,
                     CalcError::Parse(ParseError::Mismatch { expected: Token::Close,
                                                             found:    Token::Stop, })));
    assert_eq!(err.to_string(), "Parse error: Expected: ). Found: .");

    let err = expect_failure("|1 + 2.");
    assert_eq!(err.to_string(), "Parse error: Expected: |. Found: .");

    let err = expect_failure("1 2.");
    assert_eq!(err.to_string(), "Parse error: Expected: .. Found: integer");
}

#[test]
fn missing_terminator_is_parse_error() {
    let err = expect_failure("1 + 2");
    assert!(matches!(err,
                     CalcError::Parse(ParseError::Mismatch { expected: Token::Stop,
                                                             found:    Token::Eof, })));
}

#[test]
fn empty_program_is_parse_error() {
    assert_eq!(expect_failure("").to_string(), "Parse error: Token eof is invalid here");
    assert_eq!(expect_failure(".").to_string(), "Parse error: Token . is invalid here");
}

#[test]
fn unknown_character_is_lexical_error() {
    let err = expect_failure("1 & 2.");
    assert!(matches!(err,
                     CalcError::Lexical(LexicalError::InvalidCharacter { character: '&' })));
    assert_eq!(err.to_string(), "Lexical error: Invalid character '&'");
}

#[test]
fn oversized_literal_is_lexical_error() {
    let err = expect_failure("9223372036854775808.");
    assert!(matches!(err, CalcError::Lexical(LexicalError::LiteralTooLarge { .. })));
}

#[test]
fn division_by_zero_is_runtime_error() {
    let err = expect_failure("1 / 0.");
    assert!(matches!(err, CalcError::Runtime(RuntimeError::DivisionByZero)));
    assert_eq!(err.to_string(), "Runtime error: Division by zero");

    assert!(expect_failure("0 ^ (0 - 1).").is_runtime());
}

#[test]
fn a_failing_expression_fails_the_program() {
    assert!(expect_failure("1; 2 / 0; 3.").is_runtime());
}

#[test]
fn overflow_is_runtime_error() {
    assert!(matches!(expect_failure("9223372036854775807 + 1."),
                     CalcError::Runtime(RuntimeError::Overflow { .. })));
    assert!(expect_failure("0 - 9223372036854775807 - 2.").is_runtime());
    assert!(expect_failure("3037000500 * 3037000500.").is_runtime());
    assert!(expect_failure("2 ^ 63.").is_runtime());
    assert!(expect_failure("2 ^ 9999999999.").is_runtime());
    assert!(matches!(expect_failure("|0 - 9223372036854775807 - 1|."),
                     CalcError::Runtime(RuntimeError::AbsOverflow)));
    assert_output("2 ^ 62.", "4611686018427387904.");
    assert_output("1 ^ 9999999999.", "1.");
}

#[test]
fn nesting_limit() {
    let shapes: [fn(usize) -> String; 3] =
        [|depth| format!("{}1{}.", "(".repeat(depth), ")".repeat(depth)),
         |depth| format!("{}1{}.", "|".repeat(depth), "|".repeat(depth)),
         |depth| format!("{}1.", "1^".repeat(depth))];

    for nested in shapes {
        assert_output(&nested(MAX_NESTING_DEPTH), "1.");
        let err = expect_failure(&nested(MAX_NESTING_DEPTH + 1));
        assert!(matches!(err,
                         CalcError::Parse(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH })));
    }
}

#[test]
fn long_chains_do_not_overflow_the_stack() {
    let source = format!("1{}.", " + 1".repeat(100_000));
    assert_output(&source, "100001.");

    let program = parse(source.as_bytes()).unwrap();
    let copy = program.clone();
    assert_eq!(program, copy);
    assert_eq!(program, parse(source.as_bytes()).unwrap());
    assert_ne!(program, parse("1 + 1.".as_bytes()).unwrap());
    assert!(format!("{program:?}").len() > 100_000);

    let source = format!("1{}.", " * 1 / 1".repeat(50_000));
    let program = parse(source.as_bytes()).unwrap();
    assert_eq!(program.clone(), program);
    assert_eq!(program.eval().unwrap(), vec![1]);

    let source = format!("1{}.", "; 1".repeat(50_000));
    let program = parse(source.as_bytes()).unwrap();
    assert_eq!(program.clone(), program);
    assert_eq!(program.eval().unwrap().len(), 50_001);
}

#[test]
fn operators_keep_their_kind() {
    let program = parse("8 - 2 + 1 / 1 * 3 - 4 / 2.".as_bytes()).unwrap();
    assert_eq!(program.to_string(), "8 - 2 + 1 / 1 * 3 - 4 / 2.");
    assert_eq!(program.eval().unwrap(), vec![7]);
    assert_ne!(program, parse("8 + 2 + 1 * 1 * 3 + 4 * 2.".as_bytes()).unwrap());
}

/// Yields `prefix`, then fails every read.
struct FailingReader {
    prefix: &'static [u8],
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.prefix.is_empty() {
            return Err(io::Error::other("disk on fire"));
        }
        let n = self.prefix.len().min(buf.len());
        buf[..n].copy_from_slice(&self.prefix[..n]);
        self.prefix = &self.prefix[n..];
        Ok(n)
    }
}

#[test]
fn read_failure_is_lexical_error() {
    let err = interpret(FailingReader { prefix: b"1 + " }).unwrap_err();
    assert!(matches!(err, CalcError::Lexical(LexicalError::Io { .. })));
    assert_eq!(err.to_string(), "Lexical error: I/O error");
}
