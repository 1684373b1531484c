//! flint, a schema-driven argument binding engine with typed values and no panics.
//!
//! Declare the parameters of a program as a [`Schema`], then hand it to [`run`] together with
//! the program body. The body only runs when every argument is bound; a help request prints the
//! usage text and a parse failure prints a single error line.
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! use flint::{ParameterSpec, Schema, ValueType};
//!
//! fn main() -> Result<ExitCode, flint::Error> {
//!     let schema = Schema::new([
//!         ParameterSpec::scalar("x", ValueType::Int),
//!         ParameterSpec::scalar("y", ValueType::Int),
//!     ])?;
//!
//!     Ok(flint::run(&schema, |args, out| {
//!         let x: i64 = args.get_one("x").unwrap_or_default();
//!         let y: i64 = args.get_one("y").unwrap_or_default();
//!         writeln!(out, "{x} + {y} = {}", x + y)
//!     }))
//! }
//! ```
#![deny(missing_docs)]

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::debug;

pub use flint_parser as parser;

pub use parser::{
    Bindings, Outcome, ParamKind, ParameterSpec, Schema, SchemaError, Settings, Value, ValueType,
};

pub mod present;
pub mod report;

pub use present::Presentation;
pub use report::Reporter;

/// Exit code of a successful run and of a help request.
pub const SUCCESS_CODE: u8 = 0;

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An error comes from the parsing of arguments.
    #[error(transparent)]
    Parser(#[from] parser::Error),

    /// The schema is not valid.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Writing to an output channel failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parse the arguments, program name excluded.
///
/// Returns `None` when a help identifier is present.
pub fn try_parse<const N: usize, S: AsRef<str>>(
    schema: &Schema<N>,
    argv: &[S],
) -> Result<Option<Bindings<N>>, Error> {
    match schema.parse(argv) {
        Outcome::Success(bindings) => Ok(Some(bindings)),
        Outcome::HelpRequested => Ok(None),
        Outcome::Failure(error) => Err(error.into()),
    }
}

/// Parse the arguments of the process and report the outcome on the standard channels.
pub fn run<const N: usize, F>(schema: &Schema<N>, program: F) -> ExitCode
where
    F: FnOnce(&Bindings<N>, &mut dyn Write) -> io::Result<()>,
{
    let mut args = env::args();
    let argv0 = args.next().unwrap_or_default();
    let argv: Vec<String> = args.collect();

    debug!(program = %argv0, count = argv.len(), "parsing arguments");

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let reporter = Reporter::invoked_as(schema, &argv0);
    match reporter.report(schema.parse(argv.as_slice()), &mut out, &mut err, program) {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            // Nothing left to report to if stderr itself is broken.
            let _ = writeln!(err, "error: {error}");
            ExitCode::from(schema.settings().failure_code.get())
        }
    }
}

/// Parse `argv` and report the outcome on the given channels.
///
/// Returns the exit code. With no program name in the settings, the usage text falls back to
/// `program`.
pub fn run_with<const N: usize, S, F>(
    schema: &Schema<N>,
    argv: &[S],
    out: &mut dyn Write,
    err: &mut dyn Write,
    program: F,
) -> Result<u8, Error>
where
    S: AsRef<str>,
    F: FnOnce(&Bindings<N>, &mut dyn Write) -> io::Result<()>,
{
    Reporter::new(schema).report(schema.parse(argv), out, err, program)
}
