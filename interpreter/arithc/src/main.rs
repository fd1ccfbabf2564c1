use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use arithc::{evaluate_line, parse_line};
use clap::Parser;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "arithc",
    version,
    about = "Evaluate a one-line integer arithmetic expression",
    long_about = "arithc reads a single line containing an integer arithmetic\n\
        expression built from numbers, + - * /, parentheses, and unary minus,\n\
        and prints its value.\n\n\
        EXAMPLES:\n\
        \n  echo '2+3*4' | arithc              Prints 14\n\
        \n  arithc expression.txt              Evaluate the first line of a file\n\
        \n  echo '1/0' | arithc                Fails with a division-by-zero error\n\
        \n  echo '(1+2)*3' | arithc --emit-ast Print the parse tree as JSON"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the parse tree as JSON instead of evaluating it
    #[arg(long = "emit-ast")]
    emit_ast: bool,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}

/// Reads the input to evaluate: a file when given, one line of stdin
/// otherwise. The lexer stops at the first newline either way.
fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let source = match read_input(cli.input.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: failed to read input: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.emit_ast {
        let tree = match parse_line(&source) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        };
        match arith_ast::to_json(&tree) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    match evaluate_line(&source) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
