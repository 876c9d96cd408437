use std::fmt;

use itertools::Itertools;

use crate::symbols;
use crate::truth_table::TruthTable;

/// LaTeX article holding the table in a `displaymath` array, so the operator
/// macros in the header are typeset in math mode.
#[derive(Debug, Clone, Copy)]
pub struct Latex<'a> {
    table: &'a TruthTable,
    author: Option<&'a str>,
}

impl<'a> Latex<'a> {
    pub const fn new(table: &'a TruthTable) -> Self {
        Self {
            table,
            author: None,
        }
    }

    pub const fn with_author(mut self, author: Option<&'a str>) -> Self {
        self.author = author;
        self
    }
}

impl fmt::Display for Latex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table;
        let label = symbols::to_latex(table.display());

        writeln!(f, "\\documentclass[a4paper]{{article}}")?;
        writeln!(f, "\\begin{{document}}")?;
        writeln!(f, "\\title{{{} ${label}$}}", super::TITLE)?;
        if let Some(author) = self.author {
            writeln!(f, "\\author{{{author}}}")?;
        }
        writeln!(f, "\\maketitle")?;
        writeln!(f, "\\begin{{displaymath}}")?;

        let columns = table.vars().iter().map(|_| "c").join(" ");
        writeln!(f, "\\begin{{array}}{{|{columns}|c|}}")?;

        let header = table
            .vars()
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(label))
            .join(" & ");
        writeln!(f, "{header}\\\\")?;
        writeln!(f, "\\hline")?;

        for row in table.rows() {
            writeln!(f, "{}\\\\", row.cells().join(" & "))?;
        }

        writeln!(f, "\\end{{array}}")?;
        writeln!(f, "\\end{{displaymath}}")?;
        write!(f, "\\end{{document}}")
    }
}
