use std::io::{self, Write};
use std::process::ExitCode;

use flint::{Bindings, ParameterSpec, Schema, SchemaError, ValueType};

#[path = "common/mod.rs"]
mod common;

pub fn schema() -> Result<Schema, SchemaError> {
    Schema::new([
        ParameterSpec::positional("a", ValueType::Int),
        ParameterSpec::optional_positional("b", ValueType::Int).with_default(0),
    ])
}

pub fn program(args: &Bindings, out: &mut dyn Write) -> io::Result<()> {
    let a: i64 = args.get_one("a").unwrap_or_default();
    let b: i64 = args.get_one("b").unwrap_or_default();

    writeln!(out, "{a} {b}")
}

fn main() -> Result<ExitCode, flint::Error> {
    common::init_tracing();

    Ok(flint::run(&schema()?, program))
}
