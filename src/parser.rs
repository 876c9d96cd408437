use crate::error::{Error, Result};
use crate::symbols::{self, Variable, OPERATORS};
use crate::validate;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::iter::Peekable;
use std::slice::Iter;

lazy_static! {
    static ref TOKENIZER: Regex = Regex::new(r"(?P<symbol><->|->|[~&|^¬∧⊕∨→↔])|(?P<variable>\p{Alphabetic})|(?P<open>\()|(?P<close>\))|(?P<space>\s+)|(?P<unknown>.)")
        .expect("tokenizer pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Var(char),
    Not,
    And,
    Xor,
    Or,
    Implies,
    Iff,
    OpenParen,
    CloseParen,
    Eof,
}

impl Token {
    const fn binary_operator(self) -> Option<BinaryOperator> {
        match self {
            Self::And => Some(BinaryOperator::And),
            Self::Xor => Some(BinaryOperator::Xor),
            Self::Or => Some(BinaryOperator::Or),
            Self::Implies => Some(BinaryOperator::Implies),
            Self::Iff => Some(BinaryOperator::Iff),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    And,
    Xor,
    Or,
    Implies,
    Iff,
}

impl BinaryOperator {
    /// Tier of the loosest-binding operators.
    const LOWEST_TIER: u8 = 0;
    const HIGHEST_TIER: u8 = 2;

    /// Binding power, higher binds tighter. OR, CONDITIONAL and BICONDITIONAL
    /// share one tier and group strictly from left to right.
    pub const fn tier(self) -> u8 {
        match self {
            Self::And => 2,
            Self::Xor => 1,
            Self::Or | Self::Implies | Self::Iff => 0,
        }
    }

    pub const fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Self::And => a & b,
            Self::Xor => a ^ b,
            Self::Or => a | b,
            Self::Implies => !a | b,
            Self::Iff => !(a ^ b),
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Iff => OPERATORS[0].glyph,
            Self::Implies => OPERATORS[1].glyph,
            Self::Xor => OPERATORS[3].glyph,
            Self::And => OPERATORS[4].glyph,
            Self::Or => OPERATORS[5].glyph,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.glyph())
    }
}

/// Parse tree of a propositional formula. Grouping is implicit in the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Var(Variable),
    Not(Box<Expression>),
    BinaryOp(BinaryOperator, Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Evaluates the formula; `assignment[i]` is the value of the variable with id `i`.
    pub fn eval(&self, assignment: &[bool]) -> bool {
        match self {
            Self::Var(v) => assignment.get(v.id).copied().unwrap_or(false),
            Self::Not(e) => !e.eval(assignment),
            Self::BinaryOp(op, l, r) => op.apply(l.eval(assignment), r.eval(assignment)),
        }
    }

    /// The variables occurring in the formula, sorted by column.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars.into_iter().sorted().dedup().collect()
    }

    fn collect_variables(&self, vars: &mut Vec<Variable>) {
        match self {
            Self::Var(v) => vars.push(*v),
            Self::Not(e) => e.collect_variables(vars),
            Self::BinaryOp(_, l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }
}

/// Fully parenthesized canonical rendering, mostly useful to inspect grouping.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(v) => write!(f, "{v}"),
            Self::Not(e) => write!(f, "{} {e}", OPERATORS[2].glyph),
            Self::BinaryOp(op, l, r) => write!(f, "( {l} {op} {r} )"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFormula {
    pub vars: Vec<Variable>,
    pub expression: Expression,
    /// Normalized form of the source, used as the result column label.
    pub display: String,
}

type TokenReader<'a> = Peekable<Iter<'a, Token>>;

impl ParsedFormula {
    /// Validates and parses `src`.
    pub fn new(src: &str) -> Result<Self> {
        validate::validate(src)?;

        parse(src).inspect_err(|e| {
            log::warn!("expression passed validation but failed to parse: {e}");
        })
    }

    pub fn eval(&self, assignment: &[bool]) -> bool {
        self.expression.eval(assignment)
    }
}

/// Parses `src` without running the validator first.
pub fn parse(src: &str) -> Result<ParsedFormula> {
    let parse_error = |message: String| Error::Parse {
        expression: src.to_string(),
        message,
    };

    let tokens = tokenize(src).map_err(parse_error)?;

    let vars: Vec<Variable> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Var(name) => Some(*name),
            _ => None,
        })
        .sorted()
        .dedup()
        .enumerate()
        .map(|(id, name)| Variable::new(name, id))
        .collect();

    let expression = parse_formula(&mut tokens.iter().peekable(), &vars).map_err(parse_error)?;

    log::debug!("parsed '{}' as {expression}", src.trim());

    Ok(ParsedFormula {
        vars,
        expression,
        display: symbols::normalize(src),
    })
}

pub fn tokenize(src: &str) -> std::result::Result<Vec<Token>, String> {
    let mut result = Vec::new();

    for c in TOKENIZER.captures_iter(src) {
        if let Some(symbol) = c.name("symbol") {
            match symbol.as_str() {
                "~" | "¬" => result.push(Token::Not),
                "&" | "∧" => result.push(Token::And),
                "^" | "⊕" => result.push(Token::Xor),
                "|" | "∨" => result.push(Token::Or),
                "->" | "→" => result.push(Token::Implies),
                "<->" | "↔" => result.push(Token::Iff),
                other => return Err(format!("Unknown symbol: {other}")),
            }
        } else if let Some(variable) = c.name("variable") {
            if let Some(name) = variable.as_str().chars().next() {
                result.push(Token::Var(name));
            }
        } else if c.name("open").is_some() {
            result.push(Token::OpenParen);
        } else if c.name("close").is_some() {
            result.push(Token::CloseParen);
        } else if let Some(unknown) = c.name("unknown") {
            return Err(format!("Unknown token: {}", unknown.as_str()));
        }
    }

    result.push(Token::Eof);

    Ok(result)
}

fn parse_formula(
    tokens: &mut TokenReader,
    vars: &[Variable],
) -> std::result::Result<Expression, String> {
    let result = parse_tier(tokens, vars, BinaryOperator::LOWEST_TIER, 0)?;

    expect(Token::Eof, tokens)?;

    Ok(result)
}

/// Left-associative chain of operators sharing `tier`, with operands drawn from the next tier up.
///
/// `depth` counts the negations and parentheses enclosing the chain.
fn parse_tier(
    tokens: &mut TokenReader,
    vars: &[Variable],
    tier: u8,
    depth: usize,
) -> std::result::Result<Expression, String> {
    if tier > BinaryOperator::HIGHEST_TIER {
        return parse_unary(tokens, vars, depth);
    }

    let mut left = parse_tier(tokens, vars, tier + 1, depth)?;

    while let Some(op) = tokens
        .peek()
        .and_then(|t| t.binary_operator())
        .filter(|op| op.tier() == tier)
    {
        tokens.next();
        let right = parse_tier(tokens, vars, tier + 1, depth)?;
        left = Expression::BinaryOp(op, Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_unary(
    tokens: &mut TokenReader,
    vars: &[Variable],
    depth: usize,
) -> std::result::Result<Expression, String> {
    if depth > validate::MAX_NESTING {
        return Err(format!(
            "Nested deeper than {} levels",
            validate::MAX_NESTING
        ));
    }

    match tokens.peek() {
        Some(Token::Not) => {
            expect(Token::Not, tokens)?;
            let negated = parse_unary(tokens, vars, depth + 1)?;
            Ok(Expression::Not(Box::new(negated)))
        }
        Some(Token::OpenParen) => parse_parenthesized(tokens, vars, depth + 1),
        Some(&&Token::Var(name)) => {
            expect(Token::Var(name), tokens)?;
            vars.iter()
                .find(|v| v.name == name)
                .map(|v| Expression::Var(*v))
                .ok_or_else(|| format!("Unknown variable {name}"))
        }
        None | Some(Token::Eof) => Err("Unexpected end of expression".to_string()),
        Some(other) => Err(format!("Unexpected token {other:?}")),
    }
}

fn parse_parenthesized(
    tokens: &mut TokenReader,
    vars: &[Variable],
    depth: usize,
) -> std::result::Result<Expression, String> {
    expect(Token::OpenParen, tokens)?;
    let subform = parse_tier(tokens, vars, BinaryOperator::LOWEST_TIER, depth)?;
    expect(Token::CloseParen, tokens)?;

    Ok(subform)
}

fn expect(token: Token, tokens: &mut TokenReader) -> std::result::Result<(), String> {
    match tokens.next() {
        Some(&t) if t == token => Ok(()),
        Some(t) => Err(format!("Expected {token:?}, got {t:?}")),
        None => Err(format!("Expected {token:?}, but got nothing")),
    }
}
