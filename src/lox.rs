//! Drives the scanner over files and interactive input and prints what it
//! finds.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use owo_colors::OwoColorize;
use tracing::{debug, info};

use crate::{
    diagnostics::{Diagnostics, Severity},
    error::Result,
    scanner::Scanner,
};

/// Exit status for bad command-line usage.
pub const EX_USAGE: u8 = 64;
/// Exit status when the script had lexical errors.
pub const EX_DATAERR: u8 = 65;
/// Exit status when the script could not be read.
pub const EX_IOERR: u8 = 74;

pub const PROMPT: &str = "#> ";
pub const EXIT_COMMAND: &str = "LoxExit";

pub struct Lox<Out, ErrOut> {
    out: Out,
    err_out: ErrOut,
    color: bool,
    diagnostics: Diagnostics,
}

impl<Out: Write, ErrOut: Write> Lox<Out, ErrOut> {
    pub fn new(out: Out, err_out: ErrOut) -> Self {
        Self {
            out,
            err_out,
            color: false,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Colours errors red and warnings yellow on `err_out`.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Scans `source`, writes each token on its own line and reports
    /// diagnostics. Diagnostics accumulate across calls until reset.
    pub fn run(&mut self, source: &str) -> Result<()> {
        let already_reported = self.diagnostics.iter().count();
        let tokens = Scanner::new(source).scan_tokens(&mut self.diagnostics);

        for token in tokens.iter() {
            writeln!(self.out, "{}", token)?;
        }

        for diagnostic in self.diagnostics.iter().skip(already_reported) {
            let text = diagnostic.to_string();
            match (self.color, diagnostic.severity()) {
                (false, _) => writeln!(self.err_out, "{}", text)?,
                (true, Severity::Error) => writeln!(self.err_out, "{}", text.red())?,
                (true, Severity::Warning) => writeln!(self.err_out, "{}", text.yellow())?,
            }
        }

        Ok(())
    }

    /// Scans a whole file. Returns whether any lexical error was reported.
    pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        let path = path.as_ref();
        info!(path = %path.display(), "scanning file");
        let contents = std::fs::read_to_string(path)?;
        self.run(contents.as_str())?;
        Ok(self.diagnostics.has_errors())
    }

    /// Reads lines from `input` until end of input or the exit command,
    /// scanning each one on its own. Errors never end the session.
    pub fn run_prompt<In: BufRead>(&mut self, mut input: In) -> Result<()> {
        let mut buffer = String::new();

        loop {
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;

            buffer.clear();

            let num_bytes = input.read_line(&mut buffer)?;
            if num_bytes == 0 { break };

            let line = buffer.trim_end_matches(|c: char| c == '\n' || c == '\r');
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case(EXIT_COMMAND) {
                debug!("exit command received");
                break;
            }

            self.diagnostics.reset();
            self.run(line)?;
        }

        Ok(())
    }
}
