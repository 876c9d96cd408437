use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::error::{Error, Result};
use crate::parser::ParsedFormula;
use crate::symbols::Variable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Single cell of a truth table, written as `0` or `1` in every output format.
pub enum TruthValue {
    False,
    True,
}

impl TruthValue {
    const fn variants<'a>() -> &'a [Self] {
        &[Self::False, Self::True]
    }

    fn matches(&self, s: &str) -> bool {
        match self {
            Self::True => matches!(s, "true" | "True" | "t" | "T" | "1"),
            Self::False => matches!(s, "false" | "False" | "f" | "F" | "0"),
        }
    }

    pub fn is_true(self) -> bool {
        self == Self::True
    }
}

impl From<bool> for TruthValue {
    fn from(b: bool) -> Self {
        if b {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<TruthValue> for bool {
    fn from(v: TruthValue) -> Self {
        v.is_true()
    }
}

impl Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::True => "1",
            Self::False => "0",
        })
    }
}

impl FromStr for TruthValue {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::variants()
            .iter()
            .find(|variant| variant.matches(s))
            .ok_or_else(|| anyhow::anyhow!("cannot parse {s} as truth value"))
            .copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    /// One value per variable, in variable order.
    pub assignment: Vec<bool>,
    pub result: bool,
}

impl TruthTableRow {
    /// Input values followed by the result.
    pub fn cells(&self) -> impl Iterator<Item = TruthValue> + '_ {
        self.assignment
            .iter()
            .chain(std::iter::once(&self.result))
            .map(|&b| TruthValue::from(b))
    }
}

/// All rows of a formula, in ascending binary order of the assignment with the
/// first variable as the most significant bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    vars: Vec<Variable>,
    display: String,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    pub fn generate(formula: &ParsedFormula) -> Self {
        let n = formula.vars.len();

        let rows: Vec<TruthTableRow> = (0..1usize << n)
            .map(|i| {
                let assignment: Vec<bool> = (0..n).map(|b| (i >> (n - 1 - b)) & 1 == 1).collect();
                let result = formula.eval(&assignment);
                TruthTableRow { assignment, result }
            })
            .collect();

        log::debug!(
            "generated {} rows for '{}' over {} variables",
            rows.len(),
            formula.display,
            n
        );

        Self {
            vars: formula.vars.clone(),
            display: formula.display.clone(),
            rows,
        }
    }

    /// Validates, parses and tabulates `src` in one go.
    pub fn from_expression(src: &str) -> Result<Self> {
        src.parse()
    }

    pub fn vars(&self) -> &[Variable] {
        &self.vars
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Variable names followed by the expression label.
    pub fn headings(&self) -> Vec<String> {
        self.vars
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(self.display.clone()))
            .collect()
    }

    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|r| r.result)
    }

    pub fn is_contradiction(&self) -> bool {
        self.rows.iter().all(|r| !r.result)
    }
}

impl FromStr for TruthTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ParsedFormula::new(s).map(|formula| Self::generate(&formula))
    }
}
