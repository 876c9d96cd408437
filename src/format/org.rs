use std::fmt;

use itertools::Itertools;

use crate::truth_table::TruthTable;

/// Org-mode heading followed by a table; rows are newline separated, with no
/// newline after the last one.
#[derive(Debug, Clone, Copy)]
pub struct Org<'a>(pub &'a TruthTable);

impl fmt::Display for Org<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.0;

        writeln!(f, "* {} ~{}~", super::TITLE, table.display())?;

        super::pipe_line(f, table.headings())?;
        writeln!(f)?;

        let rule = std::iter::repeat("-").take(table.vars().len() + 1).join("+");
        write!(f, "|{rule}|")?;

        for row in table.rows() {
            writeln!(f)?;
            super::pipe_line(f, row.cells())?;
        }

        Ok(())
    }
}
