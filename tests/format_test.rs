use pretty_assertions::assert_eq;

use ttgen::{render, Document, OutputFormat, TruthTable, TruthValue};

const FORMATS: [OutputFormat; 5] = [
    OutputFormat::Html,
    OutputFormat::Markdown,
    OutputFormat::Latex,
    OutputFormat::Org,
    OutputFormat::Plain,
];

fn table(src: &str) -> TruthTable {
    TruthTable::from_expression(src).expect("valid expression")
}

fn pipe_cells(line: &str) -> Vec<String> {
    line.trim_matches('|').split('|').map(str::to_string).collect()
}

fn between<'a>(line: &'a str, open: &str, close: &str) -> Option<&'a str> {
    line.trim().strip_prefix(open)?.strip_suffix(close)
}

/// Recovers the headings and the body cells from a rendered document.
fn extract(format: OutputFormat, text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    match format {
        OutputFormat::Markdown | OutputFormat::Org => {
            let lines: Vec<&str> = text.lines().filter(|l| l.starts_with('|')).collect();
            let headings = pipe_cells(lines[0]);
            let rows = lines[2..].iter().map(|&l| pipe_cells(l)).collect();
            (headings, rows)
        }
        OutputFormat::Html => {
            let headings = text
                .lines()
                .filter_map(|l| between(l, "<th>", "</th>"))
                .map(str::to_string)
                .collect();
            let mut rows: Vec<Vec<String>> = Vec::new();
            for line in text.lines() {
                if line.trim() == "<tr>" {
                    rows.push(Vec::new());
                } else if let (Some(cell), Some(row)) = (between(line, "<td>", "</td>"), rows.last_mut()) {
                    row.push(cell.to_string());
                }
            }
            rows.retain(|r| !r.is_empty());
            (headings, rows)
        }
        OutputFormat::Latex => {
            let lines: Vec<&str> = text.lines().collect();
            let start = lines.iter().position(|l| l.starts_with("\\begin{array}")).expect("array");
            let end = lines.iter().position(|l| *l == "\\end{array}").expect("array end");
            let cells = |l: &str| -> Vec<String> {
                l.trim_end_matches("\\\\").split(" & ").map(str::to_string).collect()
            };
            let headings = cells(lines[start + 1]);
            let rows = lines[start + 3..end].iter().map(|&l| cells(l)).collect();
            (headings, rows)
        }
        OutputFormat::Plain => {
            let mut lines = text.lines();
            let cells = |l: &str| -> Vec<String> { l.split(" | ").map(str::to_string).collect() };
            let headings = lines.next().map(cells).unwrap_or_default();
            (headings, lines.map(cells).collect())
        }
    }
}

#[test]
fn test_markdown() {
    assert_eq!(
        render(&table("p -> q"), OutputFormat::Markdown),
        "# Truth Table for `p → q`
|p|q|p → q|
|-|-|:-:|
|0|0|1|
|0|1|1|
|1|0|0|
|1|1|1|
"
    );
}

#[test]
fn test_org() {
    assert_eq!(
        render(&table("p -> q"), OutputFormat::Org),
        "* Truth Table for ~p → q~
|p|q|p → q|
|-+-+-|
|0|0|1|
|0|1|1|
|1|0|0|
|1|1|1|"
    );
}

#[test]
fn test_latex() {
    assert_eq!(
        render(&table("p -> q"), OutputFormat::Latex),
        r"\documentclass[a4paper]{article}
\begin{document}
\title{Truth Table for $p \rightarrow q$}
\maketitle
\begin{displaymath}
\begin{array}{|c c|c|}
p & q & p \rightarrow q\\
\hline
0 & 0 & 1\\
0 & 1 & 1\\
1 & 0 & 0\\
1 & 1 & 1\\
\end{array}
\end{displaymath}
\end{document}"
    );
}

#[test]
fn test_latex_author_and_macros() {
    let t = table("~a & b <-> c ^ a");
    let text = Document::new(&t, OutputFormat::Latex)
        .with_author(Some("Ada"))
        .to_string();

    assert!(text.contains("\\title{Truth Table for $\\neg a \\land b \\leftrightarrow c \\oplus a$}\n\\author{Ada}\n\\maketitle"));
    assert!(text.contains("\\begin{array}{|c c c|c|}"));

    // the author is only used by LaTeX
    let md = Document::new(&t, OutputFormat::Markdown)
        .with_author(Some("Ada"))
        .to_string();
    assert!(!md.contains("Ada"));
}

#[test]
fn test_html() {
    let text = render(&table("~p"), OutputFormat::Html);

    assert!(text.starts_with("<!DOCTYPE html>\n<html>\n<style>\n"));
    assert!(text.contains("<h2>Truth Table for <code>¬ p</code></h2>"));
    assert!(text.contains(
        "<table>
  <tr>
    <th>p</th>
    <th>¬ p</th>
  </tr>
  <tr>
    <td>0</td>
    <td>1</td>
  </tr>
  <tr>
    <td>1</td>
    <td>0</td>
  </tr>
</table>"
    ));
    assert!(text.ends_with("</body>\n</html>\n"));
}

#[test]
fn test_plain() {
    assert_eq!(
        render(&table("p | q"), OutputFormat::Plain),
        "p | q | p ∨ q\n0 | 0 | 0\n0 | 1 | 1\n1 | 0 | 1\n1 | 1 | 1"
    );
}

/// Reads `0`/`1` cells back into booleans.
fn parse_cells(rows: &[Vec<String>]) -> Vec<Vec<bool>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.parse::<TruthValue>().map(bool::from).expect("cell is 0 or 1"))
                .collect()
        })
        .collect()
}

#[test]
fn test_every_format_carries_the_same_rows() {
    for src in ["p -> q", "a & b ^ ~c", "(a <-> b) | c -> d & e"] {
        let t = table(src);
        let expected_rows: Vec<Vec<bool>> = t
            .rows()
            .iter()
            .map(|r| r.assignment.iter().copied().chain([r.result]).collect())
            .collect();

        for format in FORMATS {
            let (headings, rows) = extract(format, &render(&t, format));

            let names: Vec<String> = t.vars().iter().map(ToString::to_string).collect();
            assert_eq!(headings[..headings.len() - 1], names[..], "{format} {src}");
            assert_eq!(rows.len(), t.rows().len(), "{format} {src}");
            assert_eq!(parse_cells(&rows), expected_rows, "{format} {src}");
        }
    }
}

#[test]
fn test_format_names() {
    assert_eq!("md".parse::<OutputFormat>().ok(), Some(OutputFormat::Markdown));
    assert_eq!("latex".parse::<OutputFormat>().ok(), Some(OutputFormat::Latex));
    assert_eq!("TXT".parse::<OutputFormat>().ok(), Some(OutputFormat::Plain));
    assert!("pdf".parse::<OutputFormat>().is_err());

    assert_eq!(OutputFormat::from_path("out/table.HTML"), Some(OutputFormat::Html));
    assert_eq!(OutputFormat::from_path("table.org"), Some(OutputFormat::Org));
    assert_eq!(OutputFormat::from_path("table.tex"), Some(OutputFormat::Latex));
    assert_eq!(OutputFormat::from_path("table"), None);

    for format in FORMATS {
        assert_eq!(OutputFormat::from_path(format!("x.{}", format.extension())), Some(format));
        assert_eq!(format.to_string().parse::<OutputFormat>().ok(), Some(format));
    }
}
