use std::fs;

use clap::{Parser, ValueEnum};
use gramcalc::{Grammar, Session, parse_statement};
use log::LevelFilter;

/// gramcalc evaluates arithmetic statements with variables, assignment and
/// named maps, one statement at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads statements from this file, one per non-empty line, instead of
    /// the command line.
    #[arg(short, long)]
    file: Option<String>,

    /// The grammar variant to parse with.
    #[arg(short, long, value_enum, default_value_t = GrammarKind::Full)]
    grammar: GrammarKind,

    /// Prints each parsed statement fully parenthesized instead of
    /// evaluating it.
    #[arg(long)]
    ast: bool,

    /// Log verbosity: 0 logs warnings, 1 adds debug output, 2 and above
    /// trace the parser.
    #[arg(short, long, env = "VERBOSE", default_value_t = 0)]
    verbose: u8,

    /// Statements to run in order in one session.
    contents: Vec<String>,
}

#[derive(ValueEnum, Debug, Copy, Clone)]
enum GrammarKind {
    /// Numbers, parentheses, signs, `+ -` and `* /`.
    Basic,
    /// Basic plus right-associative `**`.
    Arithmetic,
    /// Arithmetic plus variables, assignment and maps.
    Full,
}

impl From<GrammarKind> for Grammar {
    fn from(kind: GrammarKind) -> Self {
        match kind {
            GrammarKind::Basic => Self::basic(),
            GrammarKind::Arithmetic => Self::arithmetic(),
            GrammarKind::Full => Self::full(),
        }
    }
}

const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new().filter_level(level_for(args.verbose))
                              .parse_default_env()
                              .init();

    let statements = if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                         std::process::exit(1);
                     });
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty())
              .map(str::to_string)
              .collect()
    } else {
        args.contents
    };

    let grammar = Grammar::from(args.grammar);

    if args.ast {
        for statement in &statements {
            match parse_statement(statement, &grammar) {
                Ok(parsed) => println!("{parsed}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        return;
    }

    let mut session = Session::new(grammar);
    for statement in &statements {
        if let Err(e) = session.execute(statement) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    if let Some(value) = session.last_value() {
        println!("{value}");
    }
}
