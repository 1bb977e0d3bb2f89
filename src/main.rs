use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use shoal::Shell;
use tracing_subscriber::EnvFilter;

/// shoal is a small imperative scripting language with a persistent shell
/// environment.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shoal to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Reads units line by line from standard input, printing each result.
    #[arg(short, long)]
    interactive: bool,

    contents: Option<String>,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .init();

    let args = Args::parse();
    let mut shell = Shell::new();

    if args.interactive {
        run_interactive(&mut shell);
        return;
    }

    let Some(contents) = args.contents else {
        eprintln!("No script given. Pass a script, or use --interactive.");
        std::process::exit(2);
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &contents);
            std::process::exit(1);
        })
    } else {
        contents
    };

    println!("{}", shell.submit(&script));
}

/// Feeds stdin lines to the shell one unit at a time.
fn run_interactive(shell: &mut Shell) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let unit = line.trim();
        if unit.is_empty() {
            continue;
        }

        println!("{}", shell.submit(unit));
    }
}
