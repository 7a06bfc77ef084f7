use std::fs;

use clap::Parser;
use flatcalc::{
    interpreter::evaluator::core::{DEFAULT_MAX_DEPTH, Evaluator},
    util::num::format_number,
};
use tracing_subscriber::EnvFilter;

/// flatcalc evaluates arithmetic expressions with `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a path and evaluate every non-blank line of that
    /// file.
    #[arg(short, long)]
    file: bool,

    /// Maximum nesting depth of parentheses.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log evaluation steps to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "flatcalc=debug",
        _ => "flatcalc=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let expressions: Vec<String> = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   &args.contents);
                         std::process::exit(1);
                     });
        script.lines()
              .filter(|line| !line.trim().is_empty())
              .map(str::to_string)
              .collect()
    } else {
        vec![args.contents]
    };

    let evaluator = Evaluator::new().with_max_depth(args.max_depth);
    let mut failed = false;

    for expression in &expressions {
        match evaluator.evaluate(expression) {
            Ok(value) => println!("{}", format_number(value)),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
