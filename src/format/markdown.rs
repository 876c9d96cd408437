use std::fmt;

use crate::truth_table::TruthTable;

#[derive(Debug, Clone, Copy)]
pub struct Markdown<'a>(pub &'a TruthTable);

impl fmt::Display for Markdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.0;

        writeln!(f, "# {} `{}`", super::TITLE, table.display())?;

        super::pipe_line(f, table.headings())?;
        writeln!(f)?;

        // input columns get a plain rule, the result column is centered
        super::pipe_line(f, table.vars().iter().map(|_| "-").chain(Some(":-:")))?;
        writeln!(f)?;

        for row in table.rows() {
            super::pipe_line(f, row.cells())?;
            writeln!(f)?;
        }

        Ok(())
    }
}
