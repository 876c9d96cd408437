use std::fmt;

use itertools::Itertools;

use crate::truth_table::TruthTable;

/// Compact text view for terminals: one ` | ` separated line per row.
#[derive(Debug, Clone, Copy)]
pub struct Plain<'a>(pub &'a TruthTable);

impl fmt::Display for Plain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.0;

        write!(f, "{}", table.headings().iter().join(" | "))?;

        for row in table.rows() {
            write!(f, "\n{}", row.cells().join(" | "))?;
        }

        Ok(())
    }
}
