use pretty_assertions::assert_eq;

use ttgen::parser::*;
use ttgen::{Error, ParsedFormula};

#[test]
fn test_basic_tokens() {
    let test_strs: Vec<&str> = vec![
        "a",
        "a & b",
        "(a & b )",
        "( a & b)",
        "  a ",
        "a  &b",
        "a|b",
        "a | b",
        "a|b|c",
        "(a&b)|c",
        "a->b",
        "a<->b",
        "¬a ∧ b",
    ];

    for test_str in test_strs {
        let tokens = tokenize(test_str);
        assert!(tokens.is_ok(), "{test_str}: {tokens:?}");
        assert_eq!(tokens.ok().and_then(|t| t.last().copied()), Some(Token::Eof));
    }
}

#[test]
fn test_parser() {
    let test_strs: Vec<&str> = vec![
        "a",
        "a & b",
        "(a & b )",
        "( a & b)",
        "  a ",
        "a  &b",
        "a|b",
        "a | b",
        "a|b|c",
        "(a&b)|c",
        "a|a|a",
        "((a))",
        "~~a",
        "a ^ b ^ c",
    ];

    for test_str in test_strs {
        let result = ParsedFormula::new(test_str);
        assert!(result.is_ok(), "{test_str}: {result:?}");
    }
}

fn parse_and_evaluate(test_str: &str, assignment: &[bool]) -> Result<bool, Error> {
    Ok(ParsedFormula::new(test_str)?.eval(assignment))
}

fn truth_column(test_str: &str) -> Result<Vec<bool>, Error> {
    let formula = ParsedFormula::new(test_str)?;
    let n = formula.vars.len();

    Ok((0..1usize << n)
        .map(|i| {
            let assignment: Vec<bool> = (0..n).map(|b| (i >> (n - 1 - b)) & 1 == 1).collect();
            formula.eval(&assignment)
        })
        .collect())
}

#[test]
fn test_material_conditional() -> Result<(), Error> {
    assert_eq!(parse_and_evaluate("p -> q", &[false, false])?, true);
    assert_eq!(parse_and_evaluate("p -> q", &[true, false])?, false);
    assert_eq!(parse_and_evaluate("p -> q", &[false, true])?, true);
    assert_eq!(parse_and_evaluate("p -> q", &[true, true])?, true);

    Ok(())
}

#[test]
fn test_biconditional_is_equality() -> Result<(), Error> {
    for p in [false, true] {
        for q in [false, true] {
            assert_eq!(parse_and_evaluate("p <-> q", &[p, q])?, p == q);
        }
    }

    Ok(())
}

#[test]
fn test_and_binds_tighter_than_conditional() -> Result<(), Error> {
    assert_eq!(truth_column("p & q -> r")?, truth_column("(p & q) -> r")?);
    assert_ne!(truth_column("p & q -> r")?, truth_column("p & (q -> r)")?);

    // p=0, q=1, r=0
    assert_eq!(parse_and_evaluate("p & q -> r", &[false, true, false])?, true);
    assert_eq!(parse_and_evaluate("p & (q -> r)", &[false, true, false])?, false);

    Ok(())
}

#[test]
fn test_lowest_tier_is_left_to_right() -> Result<(), Error> {
    assert_eq!(truth_column("a -> b | c")?, truth_column("(a -> b) | c")?);
    assert_eq!(truth_column("a | b -> c")?, truth_column("(a | b) -> c")?);
    assert_ne!(truth_column("a | b -> c")?, truth_column("a | (b -> c)")?);
    assert_eq!(truth_column("a | b <-> c")?, truth_column("(a | b) <-> c")?);
    assert_eq!(truth_column("a <-> b -> c")?, truth_column("(a <-> b) -> c")?);

    Ok(())
}

#[test]
fn test_xor_between_and_and_or() -> Result<(), Error> {
    assert_eq!(truth_column("a | b ^ c")?, truth_column("a | (b ^ c)")?);
    assert_eq!(truth_column("a ^ b & c")?, truth_column("a ^ (b & c)")?);

    Ok(())
}

#[test]
fn test_glyphs_and_ascii_agree() -> Result<(), Error> {
    assert_eq!(
        truth_column("~(p & q) <-> (~p | ~q)")?,
        truth_column("¬(p ∧ q) ↔ (¬p ∨ ¬q)")?
    );
    assert_eq!(truth_column("p ^ q")?, truth_column("p ⊕ q")?);
    assert_eq!(truth_column("p -> q")?, truth_column("p → q")?);

    Ok(())
}

#[test]
fn test_parsed_solutions() -> Result<(), Error> {
    // simple tautologies and contradictions
    assert_eq!(truth_column("~a & a")?, vec![false, false]);
    assert_eq!(truth_column("~a | a")?, vec![true, true]);
    assert_eq!(truth_column("a ^ a")?, vec![false, false]);
    assert_eq!(truth_column("a <-> a")?, vec![true, true]);

    // variables are evaluated in sorted order
    assert_eq!(truth_column("b & ~a")?, vec![false, true, false, false]);

    Ok(())
}

#[test]
fn test_grammar_violations_after_validation() {
    for test_str in ["p q", "p & & q", "(p) (q)", "p ~ q", "()"] {
        assert!(
            matches!(ParsedFormula::new(test_str), Err(Error::Parse { .. })),
            "{test_str}"
        );
    }
}
