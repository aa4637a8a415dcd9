//! KC: Key Calculator. Feed it key sequences, get the display back
use clap::Parser;
use keycalc::authoring::*;
use log::{debug, trace};
use std::io::BufRead;

/// Evaluate calculator key sequences, strictly left to right, the way a
/// pocket calculator does: "2 + 3 x 4 =" gives 20, not 14.
///
/// Each argument (or, if none are given, each line of standard input) is
/// delivered, key by key, to the same calculator, and the display is
/// printed after each of them.
#[derive(Parser, Debug)]
#[command(name = "kc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// What a repeated equals does: "reapply" or "ignore"
    #[arg(long, default_value = "reapply")]
    repeat_equals: RepeatEquals,

    /// Text to show when a calculation fails
    #[arg(long, default_value = "NaN")]
    error_text: String,

    /// Buffer operands on a stack instead of a queue
    #[arg(long)]
    stack: bool,

    /// Print every display change, not just the final display
    #[arg(short, long)]
    tape: bool,

    /// Clear the calculator before each key sequence
    #[arg(short, long)]
    reset: bool,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The key sequences to evaluate
    args: Vec<String>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    trace!("{options:#?}");

    let settings = Settings::default()
        .with_repeat_equals(options.repeat_equals)
        .with_error_text(&options.error_text);

    if options.stack {
        run(Calculator::with_buffer(Stack::new(), settings), &options)
    } else {
        run(Calculator::with_settings(settings), &options)
    }
}

fn run<B: Buffer<Operand>>(calculator: Calculator<B>, options: &Cli) -> Result<(), anyhow::Error> {
    let tape = options.tape;
    let screen = |text: &str| {
        if tape {
            println!("{text}");
        }
    };
    let mut session = Session::with_calculator(calculator, screen);

    if !options.args.is_empty() {
        for keys in &options.args {
            evaluate(&mut session, keys, options)?;
        }
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        evaluate(&mut session, &line, options)?;
    }
    Ok(())
}

fn evaluate<S: Screen, B: Buffer<Operand>>(
    session: &mut Session<S, B>,
    keys: &str,
    options: &Cli,
) -> Result<(), anyhow::Error> {
    if options.reset {
        session.press(Symbol::Clear);
    }
    debug!("keys: {keys}");
    session.press_keys(keys)?;
    if !options.tape {
        println!("{}", session.display());
    }
    Ok(())
}
