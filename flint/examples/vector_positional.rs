use std::io::{self, Write};
use std::process::ExitCode;

use flint::{Bindings, ParameterSpec, Presentation, Schema, SchemaError, ValueType};

#[path = "common/mod.rs"]
mod common;

pub fn schema() -> Result<Schema, SchemaError> {
    Schema::new([
        ParameterSpec::vector("strings", ValueType::String).with_help("Strings to print."),
        ParameterSpec::flag("one-per-line")
            .with_short('o')
            .with_help("Print each string on its own line."),
        ParameterSpec::flag("sort")
            .with_short('s')
            .with_help("Sort the strings."),
    ])
}

pub fn program(args: &Bindings, out: &mut dyn Write) -> io::Result<()> {
    let presentation = Presentation {
        sorted: args.get_one("sort").unwrap_or_default(),
        line_per_value: args.get_one("one-per-line").unwrap_or_default(),
    };

    writeln!(out, "{}", presentation.render(args.values("strings")))
}

fn main() -> Result<ExitCode, flint::Error> {
    common::init_tracing();

    Ok(flint::run(&schema()?, program))
}
