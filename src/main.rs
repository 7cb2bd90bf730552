use std::{fs, io, process};

use clap::Parser;
use linecalc::interpreter::{
    evaluator::core::MAX_NESTING_DEPTH,
    session::{Outcome, Session, SessionConfig},
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{Level, debug, warn};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Enter: ";

/// linecalc evaluates arithmetic one line at a time and remembers
/// single-letter variables between lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linecalc to read lines from a file instead of evaluating a single
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Prints the value stored by each assignment.
    #[arg(short, long)]
    echo: bool,

    /// The line that ends the session.
    #[arg(long, default_value = "E")]
    exit_command: String,

    /// How many levels of parentheses an expression may nest.
    #[arg(long, default_value_t = MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Logs every tokenized line and evaluation step to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// A line to evaluate, or a file path with `--file`. Without it an
    /// interactive session starts.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut session = Session::with_config(SessionConfig { max_depth: args.max_depth });

    let succeeded = match args.contents.as_deref() {
        None => {
            run_interactive(&mut session, &args);
            true
        },
        Some(path) if args.file => {
            let script = fs::read_to_string(path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                             process::exit(1);
                         });
            script.lines()
                  .take_while(|line| *line != args.exit_command)
                  .fold(true, |ok, line| run_line(&mut session, line, args.echo) && ok)
        },
        Some(line) => run_line(&mut session, line, args.echo),
    };

    if !succeeded {
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
                             .with_writer(io::stderr)
                             .init();
}

fn print_banner(exit_command: &str) {
    println!("Welcome to linecalc! Enter {exit_command} at any time to exit");
    println!("Currently can add (+), subtract (-), multiply (*), divide (/), exponentiate (^), \
              and group with parentheses ()");
    println!("Assign single-letter variables with x = 3+4 and use them in later lines");
}

/// Runs one line through the session and prints its outcome or error.
///
/// Returns `false` if the line was rejected.
fn run_line(session: &mut Session, line: &str, echo: bool) -> bool {
    match session.evaluate_line(line) {
        Ok(Some(outcome @ Outcome::Value(_))) => println!("{outcome}"),
        Ok(Some(outcome @ Outcome::Assigned { .. })) if echo => println!("{outcome}"),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            return false;
        },
    }
    true
}

fn run_interactive(session: &mut Session, args: &Args) {
    let mut editor = DefaultEditor::new().unwrap_or_else(|e| {
                                             eprintln!("Failed to start the line editor: {e}");
                                             process::exit(1);
                                         });
    print_banner(&args.exit_command);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line == args.exit_command {
                    break;
                }
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    warn!(error = %e, "could not record history");
                }
                run_line(session, &line, args.echo);
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
    }

    debug!(variables = session.store().len(), "session ended");
}
