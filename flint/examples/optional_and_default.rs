use std::io::{self, Write};
use std::process::ExitCode;

use flint::{Bindings, ParameterSpec, Schema, SchemaError, ValueType};

#[path = "common/mod.rs"]
mod common;

pub fn schema() -> Result<Schema, SchemaError> {
    Schema::new([
        ParameterSpec::scalar("optional", ValueType::Int).optional(),
        ParameterSpec::scalar("default", ValueType::Int).with_default(0),
    ])
}

pub fn program(args: &Bindings, out: &mut dyn Write) -> io::Result<()> {
    match args.get_one::<i64>("optional") {
        Some(value) => writeln!(out, "optional: {value}")?,
        None => writeln!(out, "optional: [no value]")?,
    }

    let default: i64 = args.get_one("default").unwrap_or_default();
    writeln!(out, "default: {default}")
}

fn main() -> Result<ExitCode, flint::Error> {
    common::init_tracing();

    Ok(flint::run(&schema()?, program))
}
