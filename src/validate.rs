//! Gatekeeping checks run on raw input before it reaches the parser.

use crate::error::{Error, Reason, Result};
use crate::symbols::{self, CLOSE_PAREN, OPEN_PAREN};

/// Upper bound on distinct variables, keeping tables at 32 rows or fewer.
pub const MAX_VARIABLES: usize = 5;

/// Upper bound on nested negations and parentheses, see [`nesting_depth`].
pub const MAX_NESTING: usize = 64;

pub fn is_valid(src: &str) -> bool {
    validate(src).is_ok()
}

/// Checks the token alphabet, the number of variables, the parenthesization
/// and the nesting depth.
pub fn validate(src: &str) -> Result<()> {
    let invalid = |reason| Error::InvalidExpression {
        expression: src.to_string(),
        reason,
    };

    let normalized = symbols::normalize(src);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    if tokens.is_empty() {
        return Err(invalid(Reason::Empty));
    }

    if let Some(token) = tokens.iter().find(|t| !is_valid_token(t)) {
        return Err(invalid(Reason::UnknownToken(token.to_string())));
    }

    let found = symbols::variables(&normalized).len();
    if found > MAX_VARIABLES {
        return Err(invalid(Reason::TooManyVariables {
            found,
            max: MAX_VARIABLES,
        }));
    }

    if !is_balanced(&tokens) {
        return Err(invalid(Reason::UnbalancedParentheses));
    }

    let depth = nesting_depth(&tokens);
    if depth > MAX_NESTING {
        return Err(invalid(Reason::TooDeep {
            depth,
            max: MAX_NESTING,
        }));
    }

    Ok(())
}

fn is_valid_token(token: &str) -> bool {
    let mut chars = token.chars();
    let single_letter = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());

    single_letter || symbols::is_canonical_symbol(token)
}

fn is_balanced(tokens: &[&str]) -> bool {
    let mut depth: usize = 0;

    for &token in tokens {
        if token == OPEN_PAREN {
            depth += 1;
        } else if token == CLOSE_PAREN {
            match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            }
        }
    }

    depth == 0
}

/// Deepest chain of negations and parentheses enclosing any token. Every `¬`
/// adds one level for its operand, every `(` adds one level for its contents.
fn nesting_depth(tokens: &[&str]) -> usize {
    let not = symbols::OPERATORS[2].glyph;

    let mut enclosing: Vec<usize> = Vec::new();
    let mut base: usize = 0;
    let mut pending_nots: usize = 0;
    let mut deepest: usize = 0;

    for &token in tokens {
        if token == not {
            pending_nots += 1;
            deepest = deepest.max(base + pending_nots);
        } else if token == OPEN_PAREN {
            enclosing.push(base);
            base += pending_nots + 1;
            pending_nots = 0;
            deepest = deepest.max(base);
        } else if token == CLOSE_PAREN {
            base = enclosing.pop().unwrap_or_default();
        } else {
            pending_nots = 0;
        }
    }

    deepest
}
