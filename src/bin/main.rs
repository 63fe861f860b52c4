use clap::Parser;
use lox_scan::lox::{Lox, EX_DATAERR, EX_IOERR, EX_USAGE};
use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

/// Prints the tokens of a Lox script, or of each line typed at the prompt.
#[derive(Parser, Debug)]
#[command(name = "lox-scan", version)]
struct Args {
    /// Script to scan. Starts an interactive prompt when omitted.
    #[arg(value_name = "script")]
    scripts: Vec<PathBuf>,

    /// Log scanner activity to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Never colour diagnostics.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "lox_scan=debug" } else { "lox_scan=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let color = !args.no_color && io::stderr().is_terminal();
    let mut lox = Lox::new(io::stdout(), io::stderr()).with_color(color);

    match args.scripts.as_slice() {
        [] => match lox.run_prompt(io::stdin().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::from(EX_IOERR)
            }
        },
        [script] => match lox.run_file(script) {
            Ok(false) => ExitCode::SUCCESS,
            Ok(true) => ExitCode::from(EX_DATAERR),
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::from(EX_IOERR)
            }
        },
        _ => {
            println!("Usage: lox-scan [script]");
            ExitCode::from(EX_USAGE)
        }
    }
}
