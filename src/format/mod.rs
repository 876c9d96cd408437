//! Document renderers for a finished [`TruthTable`].
//!
//! Every format is a [`fmt::Display`] adapter over a borrowed table, so the
//! same rows end up in each document and rendering can never fail.

use std::{
    fmt::{self, Display},
    path::Path,
    str::FromStr,
};

use clap::ValueEnum;

use crate::truth_table::TruthTable;

mod html;
mod latex;
mod markdown;
mod org;
mod plain;

pub use html::Html;
pub use latex::Latex;
pub use markdown::Markdown;
pub use org::Org;
pub use plain::Plain;

/// Title shared by all document formats.
const TITLE: &str = "Truth Table for";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[value(alias = "htm")]
    Html,
    #[value(alias = "md")]
    Markdown,
    #[value(alias = "tex")]
    Latex,
    Org,
    #[value(alias = "txt", alias = "text")]
    Plain,
}

impl OutputFormat {
    /// Guesses the format from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_lowercase();
        extension.parse().ok()
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
            Self::Latex => "tex",
            Self::Org => "org",
            Self::Plain => "txt",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
            Self::Latex => "latex",
            Self::Org => "org",
            Self::Plain => "plain",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| anyhow::anyhow!("unknown output format {s}"))
    }
}

/// A table rendered in one of the output formats.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    table: &'a TruthTable,
    format: OutputFormat,
    author: Option<&'a str>,
}

impl<'a> Document<'a> {
    pub const fn new(table: &'a TruthTable, format: OutputFormat) -> Self {
        Self {
            table,
            format,
            author: None,
        }
    }

    /// Author line of the LaTeX title block; ignored by the other formats.
    pub const fn with_author(mut self, author: Option<&'a str>) -> Self {
        self.author = author;
        self
    }
}

impl Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OutputFormat::Html => Html(self.table).fmt(f),
            OutputFormat::Markdown => Markdown(self.table).fmt(f),
            OutputFormat::Latex => Latex::new(self.table).with_author(self.author).fmt(f),
            OutputFormat::Org => Org(self.table).fmt(f),
            OutputFormat::Plain => Plain(self.table).fmt(f),
        }
    }
}

pub fn render(table: &TruthTable, format: OutputFormat) -> String {
    Document::new(table, format).to_string()
}

/// `|a|b|c|` line used by the markdown and org tables.
fn pipe_line<I>(f: &mut fmt::Formatter<'_>, cells: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    f.write_str("|")?;
    for cell in cells {
        write!(f, "{cell}|")?;
    }
    Ok(())
}
