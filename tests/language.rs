use std::fs;

use quartz::{Error, NumberValue, Session, parse, run, tokenize};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_quartz_blocks(&content).into_iter().enumerate() {
            let mut session = Session::new();
            for line in code.lines().filter(|l| !l.trim().is_empty() && !l.starts_with('#')) {
                count += 1;
                if let Err(e) = run(&mut session, "<book>", line) {
                    panic!("Example {} in {:?} failed on `{}`:\n{}", i + 1, path, line, e);
                }
            }
        }
    }

    assert!(count > 0, "No quartz examples found in book/src");
}

fn extract_quartz_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```quartz") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval(src: &str) -> NumberValue {
    let mut session = Session::new();
    match run(&mut session, "<test>", src) {
        Ok(value) => value.value(),
        Err(e) => panic!("`{src}` failed:\n{e}"),
    }
}

fn eval_err(src: &str) -> Error {
    let mut session = Session::new();
    match run(&mut session, "<test>", src) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_int(src: &str, expected: i64) {
    assert_eq!(eval(src), NumberValue::Int(expected), "evaluating `{src}`");
}

fn assert_float(src: &str, expected: f64) {
    assert_eq!(eval(src), NumberValue::Float(expected), "evaluating `{src}`");
}

#[test]
fn basic_arithmetic() {
    assert_int("1 + 2", 3);
    assert_int("8 - 5", 3);
    assert_int("7 * 9", 63);
    assert_float("10 / 4", 2.5);
    assert_float("10 / 5", 2.0);
    assert_int("17 % 5", 2);
    assert_int("2 ^ 10", 1024);
}

#[test]
fn precedence_and_grouping() {
    assert_int("1 + 2 * 3", 7);
    assert_int("(1 + 2) * 3", 9);
    assert_int("10 - 4 - 3", 3);
    assert_float("2 * 3 / 4", 1.5);
    assert_int("2 * 3 ^ 2", 18);
    assert_int("-2 ^ 2", -4);
    assert_int("(-2) ^ 2", 4);
    assert_int("7 % 4 * 2", 6);
}

#[test]
fn power_is_right_associative() {
    assert_int("2 ^ 3 ^ 2", 512);
    assert_float("2 ^ -1", 0.5);
    assert_eq!(parse("t", "2 ^ 3 ^ 2").unwrap().to_string(), "(2 ^ (3 ^ 2))");
    assert_eq!(parse("t", "8 - 2 - 1").unwrap().to_string(), "((8 - 2) - 1)");
}

#[test]
fn float_promotion() {
    assert_float("1 + 0.5", 1.5);
    assert_float("2.5 * 2", 5.0);
    assert_float("1.5 ^ 2", 2.25);
    assert_float("4 ^ 0.5", 2.0);
    assert_float("3.", 3.0);
}

#[test]
fn modulo_takes_sign_of_divisor() {
    assert_int("-7 % 3", 2);
    assert_int("7 % -3", -2);
    assert_int("-7 % -3", -1);
    assert_float("5.5 % 2", 1.5);
    assert_float("-0.5 % 2", 1.5);
}

#[test]
fn smallest_integer_modulo_minus_one_is_zero() {
    assert_int("(-9223372036854775807 - 1) % -1", 0);
    assert_int("(-9223372036854775807 - 1) % 1", 0);
}

#[test]
fn unary_operators() {
    assert_int("-5", -5);
    assert_int("--5", 5);
    assert_int("+5", 5);
    assert_int("%5", 5);
    assert_int("-%5", -5);
    assert_float("-2.5", -2.5);
    assert_int("3 - -2", 5);
}

#[test]
fn results_display_like_numbers() {
    let mut session = Session::new();
    let shown = |session: &mut Session, src: &str| run(session, "t", src).unwrap().to_string();

    assert_eq!(shown(&mut session, "5"), "5");
    assert_eq!(shown(&mut session, "4 / 2"), "2.0");
    assert_eq!(shown(&mut session, "0.1 + 0.2"), "0.30000000000000004");
    assert_eq!(shown(&mut session, "-3"), "-3");
}

#[test]
fn definitions_persist_across_runs() {
    let mut session = Session::new();

    let defined = run(&mut session, "<stdin>", "def x : 5").unwrap();
    assert_eq!(defined.value(), NumberValue::Int(5));

    let read = run(&mut session, "<stdin>", "x").unwrap();
    assert_eq!(read.value(), NumberValue::Int(5));

    run(&mut session, "<stdin>", "def x : x * 2 + 1").unwrap();
    assert_eq!(session.get("x"), Some(NumberValue::Int(11)));
}

#[test]
fn definitions_are_expressions() {
    let mut session = Session::new();

    let value = run(&mut session, "t", "(def a : 3) + 4").unwrap();
    assert_eq!(value.value(), NumberValue::Int(7));
    assert_eq!(session.get("a"), Some(NumberValue::Int(3)));

    run(&mut session, "t", "def b : def c : 2").unwrap();
    assert_eq!(session.get("b"), Some(NumberValue::Int(2)));
    assert_eq!(session.get("c"), Some(NumberValue::Int(2)));
}

#[test]
fn sessions_are_independent() {
    let mut first = Session::new();
    let mut second = Session::new();

    run(&mut first, "t", "def only_here : 1").unwrap();
    assert!(run(&mut second, "t", "only_here").is_err());
}

#[test]
fn null_is_predefined() {
    assert_int("null", 0);
    assert_int("null + 1", 1);
}

#[test]
fn variables_bound_to_zero_are_defined() {
    let mut session = Session::new();
    run(&mut session, "t", "def zero : 0").unwrap();

    let value = run(&mut session, "t", "zero").unwrap();
    assert_eq!(value.value(), NumberValue::Int(0));

    run(&mut session, "t", "def fzero : 0.0").unwrap();
    assert_eq!(run(&mut session, "t", "fzero + 1").unwrap().value(), NumberValue::Float(1.0));
}

#[test]
fn reruns_are_idempotent() {
    let mut session = Session::new();
    run(&mut session, "t", "def k : 3").unwrap();

    let first = run(&mut session, "t", "k * 2 - 1").unwrap().value();
    let second = run(&mut session, "t", "k * 2 - 1").unwrap().value();
    assert_eq!(first, second);

    let first = run(&mut session, "t", "k / 0").unwrap_err();
    let second = run(&mut session, "t", "k / 0").unwrap_err();
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn failed_runs_leave_no_bindings() {
    let mut session = Session::new();
    assert!(run(&mut session, "t", "def q : 1 / 0").is_err());
    assert_eq!(session.get("q"), None);

    assert!(run(&mut session, "t", "def r : 1 +").is_err());
    assert_eq!(session.get("r"), None);
}

#[test]
fn undefined_variable_is_error() {
    let error = eval_err("y");
    assert_eq!(error.kind(), "RuntimeError");
    assert_eq!(error.details(), "'y' is not defined");
    assert_eq!(error.span().start.column, 0);
    assert_eq!(error.span().end.column, 1);
}

#[test]
fn division_by_zero_points_at_divisor() {
    for src in ["5 / 0", "5 % 0", "12345 / 0.0"] {
        let error = eval_err(src);
        assert_eq!(error.kind(), "RuntimeError");
        assert_eq!(error.details(), "Cannot divide by zero");

        let divisor = src.rfind('0').unwrap();
        assert_eq!(error.span().start.column, src.find(" 0").unwrap() + 1, "`{src}`");
        assert!(error.span().end.column > divisor, "`{src}`");
    }
}

#[test]
fn division_by_computed_zero() {
    let error = eval_err("1 / (2 - 2)");
    assert_eq!(error.details(), "Cannot divide by zero");
    assert_eq!(error.span().start.column, 5);
    assert_eq!(error.span().end.column, 10);
}

#[test]
fn left_operand_errors_win() {
    let error = eval_err("missing + 1 / 0");
    assert_eq!(error.details(), "'missing' is not defined");
}

#[test]
fn integer_overflow_is_error() {
    let error = eval_err("9223372036854775807 + 1");
    assert_eq!(error.kind(), "RuntimeError");
    assert_eq!(error.details(), "Integer overflow while computing result");

    assert_eq!(eval_err("2 ^ 64").details(), "Integer overflow while computing result");
    assert_float("2.0 ^ 64", 18_446_744_073_709_551_616.0);
}

#[test]
fn unmatched_parenthesis_is_syntax_error() {
    let error = eval_err("(1 + 2");
    assert_eq!(error.kind(), "SyntaxError");
    assert_eq!(error.details(), "Expected ')'");
    assert_eq!(error.span().start.column, 6);
}

#[test]
fn trailing_tokens_are_syntax_error() {
    let error = eval_err("1 2");
    assert_eq!(error.kind(), "SyntaxError");
    assert_eq!(error.details(), "Expected '+', '-', '*', '/', '%' or '^'");
    assert_eq!(error.span().start.column, 2);

    assert_eq!(eval_err("(1))").details(), "Expected '+', '-', '*', '/', '%' or '^'");
}

#[test]
fn empty_input_is_syntax_error() {
    for src in ["", "   ", "\t"] {
        let error = eval_err(src);
        assert_eq!(error.kind(), "SyntaxError", "input {src:?}");
        assert_eq!(error.details(),
                   "Expected 'def', int, float, identifier, '+', '-', '%' or '('");
    }
}

#[test]
fn missing_operand_is_syntax_error() {
    let error = eval_err("1 +");
    assert_eq!(error.kind(), "SyntaxError");
    assert_eq!(error.details(), "Expected int, float, identifier, '+', '-', '%' or '('");
    assert_eq!(error.span().start.column, 3);

    assert_eq!(eval_err("* 2").details(),
               "Expected 'def', int, float, identifier, '+', '-', '%' or '('");
}

#[test]
fn malformed_definitions_report_the_precise_problem() {
    let error = eval_err("def 5 : 1");
    assert_eq!(error.kind(), "SyntaxError");
    assert_eq!(error.details(), "Expected identifier");
    assert_eq!(error.span().start.column, 4);

    let error = eval_err("def x 5");
    assert_eq!(error.details(), "Expected ':'");
    assert_eq!(error.span().start.column, 6);

    let error = eval_err("def x :");
    assert_eq!(error.details(),
               "Expected 'def', int, float, identifier, '+', '-', '%' or '('");
    assert_eq!(error.span().start.column, 7);

    let error = eval_err("(def x 5)");
    assert_eq!(error.details(), "Expected ':'");
}

#[test]
fn unexpected_character_is_char_error() {
    let error = eval_err("1 @ 2");
    assert_eq!(error.kind(), "CharError");
    assert_eq!(error.details(), "Unexpected '@'");
    assert_eq!(error.span().start.column, 2);
    assert_eq!(error.span().end.column, 3);
}

#[test]
fn newline_is_char_error() {
    let error = eval_err("1\n+ 2");
    assert_eq!(error.kind(), "CharError");
    assert_eq!(error.details(), "Unexpected '\n'");
    assert_eq!(error.span().start.column, 1);
    assert_eq!(error.span().end.line, 1);
}

#[test]
fn moderate_nesting_evaluates() {
    let src = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_int(&src, 1);

    let src = format!("{}7", "-".repeat(100));
    assert_int(&src, 7);

    let src = vec!["1"; 100].join(" + ");
    assert_int(&src, 100);
}

#[test]
fn deep_parenthesis_nesting_is_syntax_error() {
    let src = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    let error = eval_err(&src);
    assert_eq!(error.kind(), "SyntaxError");
    assert_eq!(error.details(), "Expression is nested too deeply");
    assert_eq!(error.span().start.column, 256);
}

#[test]
fn deep_prefix_nesting_is_syntax_error() {
    let src = format!("{}1", "-".repeat(2000));
    let error = eval_err(&src);
    assert_eq!(error.kind(), "SyntaxError");
    assert_eq!(error.details(), "Expression is nested too deeply");

    let src = format!("{}-1{}", "(".repeat(256), ")".repeat(256));
    assert_eq!(eval_err(&src).details(), "Expression is nested too deeply");
}

#[test]
fn long_operator_chains_are_bounded() {
    for src in [vec!["2"; 2000].join(" ^ "),
                vec!["1"; 5000].join(" + "),
                format!("{}0", "def x : ".repeat(1000))]
    {
        let error = eval_err(&src);
        assert_eq!(error.details(), "Expression is nested too deeply");
    }
}

#[test]
fn second_decimal_point_ends_the_number() {
    let tokens = tokenize("t", "1.5").unwrap();
    assert_eq!(tokens.len(), 2);

    let error = eval_err("1.2.3");
    assert_eq!(error.kind(), "CharError");
    assert_eq!(error.details(), "Unexpected '.'");
    assert_eq!(error.span().start.column, 3);
}

#[test]
fn oversized_integer_literal_is_char_error() {
    let error = eval_err("1 + 99999999999999999999");
    assert_eq!(error.kind(), "CharError");
    assert_eq!(error.details(), "Integer literal '99999999999999999999' is too large");
    assert_eq!(error.span().start.column, 4);
    assert_eq!(error.span().end.column, 24);
}

#[test]
fn keywords_and_identifiers() {
    assert!(tokenize("t", "define_it").is_ok());
    assert_int("def define_it : 4", 4);
    assert_int("def x_1 : 2", 2);

    // `def` alone cannot be used as a name.
    assert_eq!(eval_err("def").details(), "Expected identifier");
}

#[test]
fn char_error_renders_excerpt() {
    let error = eval_err("1 @ 2");
    assert_eq!(error.to_string(), "CharError: Unexpected '@'\n  at <test>:1:3\n1 @ 2\n  ^");
}

#[test]
fn syntax_error_renders_excerpt() {
    let error = eval_err("(1 + 2");
    assert_eq!(error.to_string(),
               "SyntaxError: Expected ')'\n  at <test>:1:7\n(1 + 2\n      ^");
}

#[test]
fn runtime_error_renders_traceback() {
    let error = eval_err("5 / 0");
    assert_eq!(error.to_string(),
               "Traceback (most recent call last):\n  at <test>:1:5 in <program>\n\
                RuntimeError: Cannot divide by zero\n5 / 0\n    ^");

    let error = eval_err("unknown * 2");
    assert_eq!(error.to_string(),
               "Traceback (most recent call last):\n  at <test>:1:1 in <program>\n\
                RuntimeError: 'unknown' is not defined\nunknown * 2\n^~~~~~~");
}

#[test]
fn wide_spans_are_marked_with_tildes() {
    let error = eval_err("4 / (1 - 1)");
    assert!(error.to_string().ends_with("4 / (1 - 1)\n     ^~~~~"), "{error}");
}

#[test]
fn errors_use_the_source_name() {
    let mut session = Session::new();
    let error = run(&mut session, "calc.qz", "1 +").unwrap_err();
    assert!(error.to_string().contains("at calc.qz:1:4"), "{error}");
}
