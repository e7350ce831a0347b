use std::fs::{self};

use gramcalc::{
    Error, Grammar, Session,
    error::{ParseError, RuntimeError},
    calc_expression, run_block,
};
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

        for (i, (code, expected)) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            let lines: Vec<&str> = code.lines().filter(|line| !line.trim().is_empty()).collect();
            match run_block(&lines, &Grammar::full()) {
                Ok(value) => {
                    if let Some(expected) = expected {
                        assert_eq!(value,
                                   Some(expected),
                                   "DSL example {} in {:?} produced the wrong value:\n{}",
                                   i + 1,
                                   path,
                                   code);
                    }
                },
                Err(e) => panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 code,
                                 e),
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

/// Collects every ```` ```gramcalc ```` block, with the value given by an
/// optional `expect=<number>` attribute on the fence.
fn extract_dsl_blocks(content: &str) -> Vec<(String, Option<f64>)> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut expected = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if let Some(info) = trimmed.strip_prefix("```gramcalc") {
            inside = true;
            expected = info.split_whitespace()
                           .find_map(|attr| attr.strip_prefix("expect="))
                           .map(|value| {
                               value.parse::<f64>()
                                    .unwrap_or_else(|e| panic!("Bad expect value '{value}': {e}"))
                           });
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push((buf.clone(), expected));
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: f64) {
    match calc_expression(src, &Grammar::full()) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("Expression `{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if calc_expression(src, &Grammar::full()).is_ok() {
        panic!("Expression `{src}` succeeded but was expected to fail")
    }
}

fn assert_block(block: &[&str], expected: f64) {
    match run_block(block, &Grammar::full()) {
        Ok(value) => assert_eq!(value, Some(expected), "{block:?}"),
        Err(e) => panic!("Block {block:?} failed: {e}"),
    }
}

fn assert_block_failure(block: &[&str]) -> Error {
    match run_block(block, &Grammar::full()) {
        Ok(value) => panic!("Block {block:?} produced {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn literals_and_signs() {
    assert_value("0", 0.0);
    assert_value("+0", 0.0);
    assert_value("-0", 0.0);
    assert_value("1", 1.0);
    assert_value("+2", 2.0);
    assert_value("-3", -3.0);
    assert_value("--1", 1.0);
    assert_value("++1", 1.0);
    assert_value("+-1", -1.0);
    assert_value("2.5", 2.5);
    assert_value(".5", 0.5);
}

#[test]
fn sign_chains_are_identities() {
    for n in [0.0, 1.0, 2.5, 17.0, 1234.5] {
        assert_value(&format!("+{n}"), n);
        assert_value(&format!("--{n}"), n);
        assert_value(&format!("+-{n}"), -n);
        assert_value(&format!("-+-{n}"), n);
    }
}

#[test]
fn addition_and_precedence() {
    assert_value("1+1", 2.0);
    assert_value("1+-1", 0.0);
    assert_value("3+4*5", 23.0);
    assert_value("3+(4*5)", 23.0);
    assert_value("(3+4)*5", 35.0);
    assert_value("-(3+4)*5", -35.0);
    assert_value("(2+3) * (7-4) + 11", 26.0);
    assert_value("(2+3) * -(7-4) + 11", -4.0);
}

#[test]
fn subtraction_and_division_are_left_associative() {
    assert_value("10 - 4 - 3", 3.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("2 * 3 / 4", 1.5);
}

#[test]
fn power() {
    assert_value("2**2", 4.0);
    assert_value("-2**2", 4.0);
    assert_value("2**-2", 0.25);
    assert_value("3*3**3", 81.0);
    assert_value("2**2**2", 16.0);
    assert_value("2**3**2", 512.0);
}

#[test]
fn malformed_expressions_fail() {
    for src in ["", "+", "(", ")", "2+", "$", "2$", "-((2+3)", "-(2+3))", "2* *2", "1[2]"] {
        assert_failure(src);
    }
}

#[test]
fn end_of_input_errors_point_past_the_source() {
    for (src, position) in [("", 0), ("+", 1), ("2+", 2), ("(", 1), ("-((2+3)", 7)] {
        match calc_expression(src, &Grammar::full()) {
            Err(Error::Parse(e @ ParseError::UnexpectedEndOfInput { .. })) => {
                assert_eq!(e.position(), position, "`{src}`");
            },
            other => panic!("`{src}` gave {other:?}"),
        }
    }
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let parens = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(calc_expression(&parens, &Grammar::full()),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
    assert!(matches!(calc_expression(&"(".repeat(10_000), &Grammar::full()),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
    assert!(matches!(run_block(&[format!("{}1", "-".repeat(10_000))], &Grammar::basic()),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));

    let moderate = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_value(&moderate, 1.0);
}

#[test]
fn ieee_results_are_not_errors() {
    assert_eq!(calc_expression("1/0", &Grammar::full()).unwrap(), f64::INFINITY);
    assert_eq!(calc_expression("-1/0", &Grammar::full()).unwrap(), f64::NEG_INFINITY);
    assert!(calc_expression("0/0", &Grammar::full()).unwrap().is_nan());
    assert!(calc_expression("(-8)**(1/3)", &Grammar::full()).unwrap().is_nan());
}

#[test]
fn unset_scalar_reads_as_nan() {
    assert!(calc_expression("q", &Grammar::full()).unwrap().is_nan());
    assert!(calc_expression("q + 1", &Grammar::full()).unwrap().is_nan());
}

#[test]
fn blocks() {
    assert_block(&["a=1", "a"], 1.0);
    assert_block(&["a=3", "b=5", "a+b"], 8.0);
    assert_block(&["a=b=5", "a*b"], 25.0);
    assert_block(&["a=44"], 44.0);
    assert_block(&["(a)=177"], 177.0);
    assert_block(&["@defmap zz", "zz[1]=50"], 50.0);
    assert_block(&["@defmap zxcv", "(zxcv[1])=255", "(zxcv[(3-2)]-2)"], 253.0);
    assert_block(&["@defmap yx", "yx[1]=50", "yx[2]=yx[3]=4", "mm=8", "yx[1]*mm + yx[2]/yx[3]"],
                 401.0);
}

#[test]
fn blocks_that_fail() {
    assert!(matches!(assert_block_failure(&["@hello"]), Error::Parse(ParseError::Lex(_))));
    assert!(matches!(assert_block_failure(&["1[2]"]),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { position: 1, .. })));
    assert!(matches!(assert_block_failure(&["(c=d)=3"]),
                     Error::Runtime(RuntimeError::Assignment(_))));
}

#[test]
fn invalid_assignment_targets() {
    for src in ["2=3", "(a+b)=1", "(-a)=1"] {
        assert!(matches!(assert_block_failure(&[src]), Error::Runtime(RuntimeError::Assignment(_))),
                "`{src}`");
    }
    for src in ["-a=1", "a+b=1", "a*2=3"] {
        assert!(matches!(assert_block_failure(&[src]), Error::Parse(_)), "`{src}`");
    }
}

#[test]
fn assignment_is_right_associative_and_yields_its_value() {
    let mut session = Session::new(Grammar::full());
    assert_eq!(session.execute("a = b = c = 2 + 1").unwrap(), Some(3.0));
    assert_eq!(session.execute("a * b * c").unwrap(), Some(27.0));
    assert_eq!(session.execute("(a = 4) + a").unwrap(), Some(8.0));
}

#[test]
fn map_errors() {
    assert!(matches!(assert_block_failure(&["qq[1]"]),
                     Error::Runtime(RuntimeError::UnknownMap { .. })));
    assert!(matches!(assert_block_failure(&["qq[1] = 2"]),
                     Error::Runtime(RuntimeError::UnknownMap { .. })));
    assert!(matches!(assert_block_failure(&["@defmap qq", "qq[7]"]),
                     Error::Runtime(RuntimeError::MissingKey { key, .. }) if key == 7.0));
}

#[test]
fn map_keys_compare_by_value() {
    assert_block(&["@defmap m", "m[1] = 10", "m[3 - 2] + m[0.5 * 2]"], 20.0);
    assert_block(&["@defmap m", "k = 2", "m[k] = 5", "m[k ** 1] * 2"], 10.0);
}

#[test]
fn signed_zero_keys_are_one_element() {
    assert_block(&["@defmap m", "m[0] = 3", "m[-0]"], 3.0);
    assert_block(&["@defmap m", "m[-0] = 3", "m[0] = 5", "m[-0]"], 5.0);
}

#[test]
fn defmap_resets_an_existing_map() {
    assert!(matches!(assert_block_failure(&["@defmap m", "m[1] = 1", "@defmap m", "m[1]"]),
                     Error::Runtime(RuntimeError::MissingKey { .. })));
}

#[test]
fn scalars_and_maps_share_names() {
    assert_block(&["@defmap m", "m = 3", "m[1] = 4", "m + m[1]"], 7.0);
}

#[test]
fn failed_statement_keeps_earlier_writes() {
    let mut session = Session::new(Grammar::full());
    session.execute("x = 9").unwrap();
    assert!(session.execute("x = (").is_err());
    assert!(session.execute("@defmap m").is_ok());
    assert!(session.execute("y = m[1]").is_err());
    assert_eq!(session.execute("x").unwrap(), Some(9.0));
    assert!(session.execute("y").unwrap().is_some_and(f64::is_nan));
}

#[test]
fn evaluation_is_repeatable() {
    let block = ["@defmap yx", "yx[1]=50", "yx[2]=yx[3]=4", "mm=8", "yx[1]*mm + yx[2]/yx[3]"];
    let first = run_block(&block, &Grammar::full()).unwrap();
    let second = run_block(&block, &Grammar::full()).unwrap();
    assert_eq!(first, second);

    let mut session = Session::new(Grammar::full());
    for line in &block[..4] {
        session.execute(line).unwrap();
    }
    let before = session.context().clone();
    let once = session.execute(block[4]).unwrap();
    let twice = session.execute(block[4]).unwrap();
    assert_eq!(once, Some(401.0));
    assert_eq!(once, twice);
    assert_eq!(session.context(), &before);
}

#[test]
fn basic_grammar_has_no_power_or_names() {
    let basic = Grammar::basic();
    assert_eq!(calc_expression("(2+3) * -(7-4) + 11", &basic).unwrap(), -4.0);
    assert!(calc_expression("2**2", &basic).is_err());
    assert!(calc_expression("a", &basic).is_err());
    assert!(run_block(&["@defmap m"], &basic).is_err());
    assert!(run_block(&["a = 1"], &basic).is_err());
}

#[test]
fn arithmetic_grammar_has_power_but_no_names() {
    let arithmetic = Grammar::arithmetic();
    assert_eq!(calc_expression("2**3**2", &arithmetic).unwrap(), 512.0);
    assert_eq!(calc_expression("-2**2", &arithmetic).unwrap(), 4.0);
    assert!(calc_expression("a", &arithmetic).is_err());
    assert!(run_block(&["a = 1"], &arithmetic).is_err());
}

#[test]
fn block_without_values_returns_none() {
    assert_eq!(run_block(&["@defmap m"], &Grammar::full()).unwrap(), None);
    assert_eq!(run_block::<&str>(&[], &Grammar::full()).unwrap(), None);
}
