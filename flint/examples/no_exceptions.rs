use std::io::{self, Write};
use std::process::ExitCode;

use flint::{Bindings, ParameterSpec, Schema, SchemaError, ValueType};

#[path = "common/mod.rs"]
mod common;

pub fn schema() -> Result<Schema, SchemaError> {
    Schema::new([
        ParameterSpec::vector("numbers", ValueType::Int),
        ParameterSpec::scalar("r", ValueType::Int)
            .with_default(1)
            .with_help("Number of repetitions."),
    ])
}

pub fn program(args: &Bindings, out: &mut dyn Write) -> io::Result<()> {
    let numbers: Vec<i64> = args.get_many("numbers").unwrap_or_default();
    let repeat: i64 = args.get_one("r").unwrap_or_default();

    for _ in 0..repeat {
        for number in &numbers {
            write!(out, "{number} ")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn main() -> Result<ExitCode, flint::Error> {
    common::init_tracing();

    Ok(flint::run(&schema()?, program))
}
