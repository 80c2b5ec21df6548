//! The interactive read-eval-print loop.
//!
//! A thin wrapper around [`Evaluator`]: it owns no language logic, only line
//! editing, history persistence, and a couple of introspection commands.

use std::path::PathBuf;

use prattle::interpreter::evaluator::Evaluator;
use rustyline::{DefaultEditor, error::ReadlineError};

const PROMPT: &str = "(calc) ";

const INTRO: &str = "Welcome to the prattle REPL.

Use Ctrl+D (or the 'exit' command) to exit.
Type 'heap' or 'locals' to inspect the session.";

/// Runs the REPL until `exit` or end of input.
///
/// Evaluation errors are reported per line and do not terminate the
/// session; registers and the heap persist across lines.
pub fn run(evaluator: &mut Evaluator) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    let history = history_file();
    if let Some(path) = &history {
        // Missing on first launch.
        let _ = editor.load_history(path);
    }

    println!("{INTRO}");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = editor.add_history_entry(line);

                match line {
                    "exit" => break,

                    "heap" => println!("{:?}", evaluator.dump_heap()),

                    "locals" => {
                        for (alias, value) in evaluator.dump_registers() {
                            println!("{alias} = {value}");
                        }
                    },

                    _ => match evaluator.evaluate(line) {
                        Ok(value) => println!("{value}"),
                        Err(e) => eprintln!("{e}"),
                    },
                }
            },

            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,

            Err(e) => return Err(e),
        }
    }

    if let Some(path) = &history {
        let _ = editor.save_history(path);
    }

    Ok(())
}

fn history_file() -> Option<PathBuf> {
    std::env::home_dir().map(|home| home.join(".prattle_history"))
}
