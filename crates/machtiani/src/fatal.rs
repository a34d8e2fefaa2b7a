//! Fail-fast flag parsing and the uniform fatal exit.
//!
//! Subcommands either return a [`Failure`] up to `main`, which hands it to
//! [`exit_with`], or call [`parse_or_exit`] / [`fail_with_message`] directly
//! and let the process end on the spot.

use std::io::{self, Write};
use std::process;

use clap::{CommandFactory, Parser};
use thiserror::Error;

/// A fatal condition. Both kinds end the process with status 1.
#[derive(Debug, Error)]
pub enum Failure {
    /// The flag parser rejected the arguments.
    #[error("Error parsing flags: {}", parse_message(.0))]
    Parse(#[source] clap::Error),

    /// A caller-supplied message, written verbatim.
    #[error("{0}")]
    Explicit(String),
}

impl Failure {
    pub fn explicit(message: impl Into<String>) -> Self {
        Failure::Explicit(message.into())
    }

    /// `--help` and `--version` come back from clap as errors but are not failures.
    pub fn is_informational(&self) -> bool {
        matches!(self, Failure::Parse(err) if !err.use_stderr())
    }
}

/// The leading paragraph of a clap diagnostic folded onto one line, without
/// its `error: ` prefix. Usage and tips follow the first blank line.
fn parse_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let paragraph: Vec<&str> = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect();
    let joined = paragraph.join(" ");
    joined
        .strip_prefix("error: ")
        .map(str::to_string)
        .unwrap_or(joined)
}

/// Something that can be filled in from a subcommand's argument list.
pub trait FlagSpec {
    fn parse(&mut self, args: &[String]) -> Result<(), clap::Error>;
}

impl<F: Parser> FlagSpec for F {
    fn parse(&mut self, args: &[String]) -> Result<(), clap::Error> {
        // clap expects argv[0]; the command name stands in for it.
        let name = F::command().get_name().to_string();
        let argv = std::iter::once(name.as_str()).chain(args.iter().map(String::as_str));
        *self = F::try_parse_from(argv)?;
        Ok(())
    }
}

/// Receives fatal failures. [`ProcessExit`] never returns from `report`.
pub trait FailureReporter {
    fn report(&self, failure: &Failure);
}

/// Reporter that writes the diagnostic to stderr and exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl FailureReporter for ProcessExit {
    fn report(&self, failure: &Failure) {
        exit_with(failure)
    }
}

/// Parse `args` into `spec`, returning the parser's error as a [`Failure`].
pub fn parse_flags<S: FlagSpec + ?Sized>(spec: &mut S, args: &[String]) -> Result<(), Failure> {
    spec.parse(args).map_err(Failure::Parse)
}

/// Parse `args` into `spec`; on error the reporter decides what happens.
/// With [`ProcessExit`] this does not return on bad input.
pub fn parse_or_exit<S, R>(spec: &mut S, args: &[String], reporter: &R)
where
    S: FlagSpec + ?Sized,
    R: FailureReporter + ?Sized,
{
    if let Err(failure) = parse_flags(spec, args) {
        tracing::debug!(%failure, "flag parsing failed");
        reporter.report(&failure);
    }
}

/// Write `message` and a newline to stderr, then exit with status 1.
pub fn fail_with_message(message: &str) -> ! {
    let mut stderr = io::stderr().lock();
    // Nothing useful can be done if stderr is gone; the exit still happens.
    let _ = write_message(&mut stderr, message);
    process::exit(1)
}

fn write_message(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")?;
    out.flush()
}

/// Terminate the process for `failure`.
pub fn exit_with(failure: &Failure) -> ! {
    match failure {
        Failure::Parse(err) if !err.use_stderr() => {
            let _ = err.print();
            process::exit(0)
        }
        Failure::Parse(_) => fail_with_message(&failure.to_string()),
        Failure::Explicit(message) => fail_with_message(message),
    }
}
