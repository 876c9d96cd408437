#![warn(clippy::disallowed_types)]

pub use error::{Error, Reason, Result};
pub use format::{render, Document, OutputFormat};
pub use parser::{parse, ParsedFormula};
pub use symbols::{normalize, Variable};
pub use truth_table::{TruthTable, TruthTableRow, TruthValue};
pub use validate::{is_valid, validate, MAX_VARIABLES};

pub mod format;
pub mod parser;
pub mod parser_io;
pub mod symbols;
pub mod validate;

mod error;
mod truth_table;
