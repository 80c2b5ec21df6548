use clap::Parser;
use prattle::interpreter::evaluator::Evaluator;

mod repl;

/// prattle is an easy to use, pointer-flavored calculator language built on
/// single-pass Pratt parsing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells prattle to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// The expression (or, with --file, the path) to evaluate. Omit it to
    /// start the interactive REPL.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut evaluator = Evaluator::new();

    let Some(contents) = args.contents else {
        if let Err(e) = repl::run(&mut evaluator) {
            eprintln!("{e}");
            std::process::exit(1);
        }

        return;
    };

    let result = if args.file {
        evaluator.evaluate_file(&contents)
    } else {
        evaluator.evaluate(&contents)
    };

    match result {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
