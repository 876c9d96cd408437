use clap::Parser;
use itertools::Itertools;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use ttgen::parser_io::SymbolicParseTree;
use ttgen::symbols::OPERATORS;
use ttgen::{Document, OutputFormat, ParsedFormula, TruthTable, MAX_VARIABLES};

/// Expression used when none is given, on the command line or in the input file.
const DEFAULT_EXPRESSION: &str = "p -> q";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "EXPRESSION")]
    /// The boolean expression, e.g. "p & q -> r"
    expression: Option<String>,

    #[clap(short, long, value_parser, value_name = "FILE")]
    /// Read the expression from the first line of a text file
    input: Option<PathBuf>,

    #[clap(short, long, value_enum, ignore_case = true, value_name = "FORMAT")]
    /// Output format (inferred from the output file extension if omitted)
    format: Option<OutputFormat>,

    #[clap(short, long, value_parser, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(long, value_parser, value_name = "FILE")]
    /// Save the expression itself as a plain-text file
    save: Option<PathBuf>,

    #[clap(long, value_parser, value_name = "FILE")]
    /// Write the parse tree in dot (GraphViz) format
    tree: Option<PathBuf>,

    #[clap(long, value_parser, value_name = "NAME", env = "TTGEN_AUTHOR")]
    /// Author shown in the LaTeX title block
    author: Option<String>,

    #[clap(long)]
    /// Print the accepted input syntax and exit
    syntax: bool,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_from(argfile::expand_args_from(
        wild::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?);

    simplelog::TermLogger::init(
        log_level(args.verbose),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    if args.syntax {
        print_syntax();
        return Ok(());
    }

    let expression = read_expression(&args)?;
    log::info!("expression: {}", expression);

    if let Some(path) = &args.save {
        fs::write(path, &expression)?;
        log::info!("saved expression to {}", path.display());
    }

    let formula = match ParsedFormula::new(&expression) {
        Ok(formula) => formula,
        Err(err) => {
            log::error!("{err}");
            anyhow::bail!(err.user_message());
        }
    };

    let table = TruthTable::generate(&formula);

    let format = args
        .format
        .or_else(|| args.output.as_ref().and_then(OutputFormat::from_path))
        .unwrap_or(OutputFormat::Plain);

    // render before touching the output file, so a failure leaves it intact
    let document = Document::new(&table, format)
        .with_author(args.author.as_deref())
        .to_string();

    if let Some(path) = &args.tree {
        let mut writer = BufWriter::new(File::create(path)?);
        SymbolicParseTree::new(&formula.expression).render_dot(&mut writer)?;
        writer.flush()?;
    }

    let mut writer = if let Some(output_file) = &args.output {
        let file = File::create(output_file)?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    write!(writer, "{document}")?;
    if args.output.is_none() && !document.ends_with('\n') {
        writeln!(writer)?;
    }

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}

const fn log_level(verbose: u8) -> simplelog::LevelFilter {
    match verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    }
}

/// The expression argument, or the first line of `--input`. Only a missing
/// argument, an empty argument or an empty file fall back to the default; a
/// blank line is passed on and rejected by the validator.
fn read_expression(args: &Args) -> anyhow::Result<String> {
    let expression = if let Some(input) = &args.input {
        let contents = fs::read_to_string(input)?;
        (!contents.is_empty()).then(|| contents.lines().next().unwrap_or_default().to_string())
    } else {
        args.expression.clone().filter(|e| !e.is_empty())
    };

    Ok(expression.unwrap_or_else(|| DEFAULT_EXPRESSION.to_string()))
}

fn print_syntax() {
    println!("Write boolean expressions in infix notation, e.g. \"p & q | r\".");
    println!(
        "Variables are single letters; at most {} distinct variables per expression.",
        MAX_VARIABLES
    );
    println!();
    println!("  {:<8}{:<8}{}", "Input", "Symbol", "Name");
    for op in OPERATORS.iter().sorted_by_key(|op| op.ascii.len()) {
        println!("  {:<8}{:<8}{}", op.ascii, op.glyph, op.name);
    }
    println!();
    println!("Binding, tightest first: ¬, ∧, ⊕, then ∨ → ↔ on one level, grouped left to right.");
}
