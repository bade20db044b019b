use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
    process,
};

use clap::Parser;
use simcalc::{
    error::CalcError,
    interpreter::{evaluator::core::render, lexer::Lexer},
    parse,
};

/// simcalc evaluates programs written in a small integer calculator language,
/// such as `1 + 2 * 3; |2 - 5| ^ 2.`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream instead of evaluating the program.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed program in canonical form before its result.
    #[arg(short, long)]
    ast: bool,

    /// The program file. Standard input is read when omitted.
    path: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let result = match &args.path {
        Some(path) => match File::open(path) {
            Ok(file) => run(&args, file),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                eprintln!("File not found: {}", path.display());
                process::exit(1);
            },
            Err(e) => {
                eprintln!("Failed to read '{}': {e}", path.display());
                process::exit(1);
            },
        },
        None => run(&args, io::stdin().lock()),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run<R: Read>(args: &Args, source: R) -> Result<(), CalcError> {
    if args.tokens {
        for token in Lexer::new(source) {
            println!("{:?}", token?);
        }
        return Ok(());
    }

    let program = parse(source)?;
    if args.ast {
        println!("{program}");
    }
    let values = program.eval()?;
    println!("{}", render(&values));
    Ok(())
}
