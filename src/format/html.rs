use std::fmt;

use crate::truth_table::TruthTable;

const STYLE: &str = r#"th, td {
  border:1px solid black;
  padding:1ex;
}
table {
  border-collapse: collapse;
}
code {
  font-family: Consolas,"courier new";
  background-color: #eee;
  border: 1px solid #999;
  padding: 5px;
}"#;

/// Standalone HTML page with a bordered table.
#[derive(Debug, Clone, Copy)]
pub struct Html<'a>(pub &'a TruthTable);

impl fmt::Display for Html<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.0;

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html>")?;
        writeln!(f, "<style>")?;
        writeln!(f, "{STYLE}")?;
        writeln!(f, "</style>")?;
        writeln!(f, "<body>")?;
        writeln!(f)?;
        writeln!(
            f,
            "<h2>{} <code>{}</code></h2>",
            super::TITLE,
            table.display()
        )?;
        writeln!(f)?;
        writeln!(f, "<table>")?;

        writeln!(f, "  <tr>")?;
        for heading in table.headings() {
            writeln!(f, "    <th>{heading}</th>")?;
        }
        writeln!(f, "  </tr>")?;

        for row in table.rows() {
            writeln!(f, "  <tr>")?;
            for cell in row.cells() {
                writeln!(f, "    <td>{cell}</td>")?;
            }
            writeln!(f, "  </tr>")?;
        }

        writeln!(f, "</table>")?;
        writeln!(f)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}
