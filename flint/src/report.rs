//! Output channels and exit codes of one invocation.

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::parser::{Bindings, Outcome, Schema, help};
use crate::{Error, SUCCESS_CODE};

/// Turns the final state of an invocation into output text and an exit code.
///
/// Exactly one channel is written: the program output and the usage text go to `out`, the error
/// line goes to `err`.
#[derive(Debug)]
pub struct Reporter<'s, const N: usize> {
    schema: &'s Schema<N>,
    invoked_as: String,
}

impl<'s, const N: usize> Reporter<'s, N> {
    /// Create a reporter with no invocation name.
    pub fn new(schema: &'s Schema<N>) -> Self {
        Reporter {
            schema,
            invoked_as: String::new(),
        }
    }

    /// Create a reporter for a program started as `argv0`. Only the file name is kept.
    pub fn invoked_as(schema: &'s Schema<N>, argv0: &str) -> Self {
        let invoked_as = Path::new(argv0)
            .file_name()
            .map(|x| x.to_string_lossy().into_owned())
            .unwrap_or_default();

        Reporter { schema, invoked_as }
    }

    /// Write the outcome and return the exit code.
    ///
    /// `program` runs only on success. Its output is held back until it returns, so a failing
    /// program leaves `out` untouched. An I/O failure is returned as an error.
    pub fn report<F>(
        &self,
        outcome: Outcome<N>,
        out: &mut dyn Write,
        err: &mut dyn Write,
        program: F,
    ) -> Result<u8, Error>
    where
        F: FnOnce(&Bindings<N>, &mut dyn Write) -> io::Result<()>,
    {
        let code = match outcome {
            Outcome::Success(bindings) => {
                let mut buffer = Vec::new();
                program(&bindings, &mut buffer)?;

                out.write_all(&buffer)?;
                SUCCESS_CODE
            }

            Outcome::HelpRequested => {
                out.write_all(help::render(self.schema, &self.invoked_as).as_bytes())?;
                SUCCESS_CODE
            }

            Outcome::Failure(error) => {
                writeln!(err, "error: {error}")?;
                self.schema.settings().failure_code.get()
            }
        };

        out.flush()?;
        err.flush()?;

        debug!(code, "outcome reported");
        Ok(code)
    }
}
