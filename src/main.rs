use std::io::{self, BufRead, Write};

use clap::Parser;
use quickexpr::evaluate;

/// quickexpr is a quick interactive evaluator for plain arithmetic
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the prompt.
    expr: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expr) = args.expr {
        match evaluate(&expr) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = prompt_loop() {
        eprintln!("Failed to read from standard input: {e}");
        std::process::exit(1);
    }
}

/// Runs the interactive prompt until the input stream ends.
///
/// Each line is evaluated independently; nothing is carried over between
/// lines. Successful results print as `--> value`. On a syntax error a
/// caret line is printed first, aligning the caret under the offending
/// input column (the `X ` prefix matches the width of the `> ` prompt),
/// followed by the error message.
fn prompt_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("Press Ctrl+D to exit");

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match evaluate(line.trim_end_matches(['\n', '\r'])) {
            Ok(value) => println!("--> {value}"),
            Err(e) => {
                println!("X {:pad$}^", "", pad = e.position);
                println!("{e}");
            },
        }
    }

    Ok(())
}
