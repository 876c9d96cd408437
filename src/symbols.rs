use std::{
    fmt,
    hash::{Hash, Hasher},
};

use itertools::Itertools;

/// Glyphs for grouping, accepted next to the operator glyphs.
pub const OPEN_PAREN: &str = "(";
pub const CLOSE_PAREN: &str = ")";

/// Spelling of a logical operator in each of the supported notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSymbol {
    pub ascii: &'static str,
    pub glyph: &'static str,
    pub latex: &'static str,
    pub name: &'static str,
}

/// All operators in substitution order: multi-character spellings come first
/// so that `<->` is never read as `<` followed by `->`.
pub const OPERATORS: [OperatorSymbol; 6] = [
    OperatorSymbol {
        ascii: "<->",
        glyph: "↔",
        latex: "\\leftrightarrow",
        name: "biconditional",
    },
    OperatorSymbol {
        ascii: "->",
        glyph: "→",
        latex: "\\rightarrow",
        name: "conditional",
    },
    OperatorSymbol {
        ascii: "~",
        glyph: "¬",
        latex: "\\neg",
        name: "not",
    },
    OperatorSymbol {
        ascii: "^",
        glyph: "⊕",
        latex: "\\oplus",
        name: "xor",
    },
    OperatorSymbol {
        ascii: "&",
        glyph: "∧",
        latex: "\\land",
        name: "and",
    },
    OperatorSymbol {
        ascii: "|",
        glyph: "∨",
        latex: "\\lor",
        name: "or",
    },
];

/// Returns true for the canonical operator glyphs and parentheses.
pub fn is_canonical_symbol(token: &str) -> bool {
    token == OPEN_PAREN || token == CLOSE_PAREN || OPERATORS.iter().any(|op| op.glyph == token)
}

/// Rewrites ASCII operators to their glyphs and puts the result in canonical
/// spaced form: every character separated by exactly one space.
///
/// Only meant for display, the parser reads both notations itself.
pub fn normalize(src: &str) -> String {
    OPERATORS
        .iter()
        .fold(src.to_string(), |acc, op| acc.replace(op.ascii, op.glyph))
        .chars()
        .filter(|c| !c.is_whitespace())
        .join(" ")
}

/// Substitutes the typeset-math macro for every glyph of a normalized expression.
pub fn to_latex(display: &str) -> String {
    OPERATORS
        .iter()
        .fold(display.to_string(), |acc, op| acc.replace(op.glyph, op.latex))
}

/// The sorted, de-duplicated variable names occurring in `src`.
pub fn variables(src: &str) -> Vec<char> {
    src.chars()
        .filter(|c| c.is_alphabetic())
        .sorted()
        .dedup()
        .collect()
}

/// A propositional variable together with its column in the truth table.
#[derive(Debug, Clone, Copy)]
pub struct Variable {
    pub name: char,
    pub id: usize,
}

impl Variable {
    pub const fn new(name: char, id: usize) -> Self {
        Self { name, id }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Variable> for usize {
    fn from(v: Variable) -> Self {
        v.id
    }
}
