use std::io::{self, Write};
use std::process::ExitCode;

use flint::{Bindings, ParameterSpec, Schema, SchemaError, Settings, ValueType};

#[path = "common/mod.rs"]
mod common;

pub fn schema() -> Result<Schema, SchemaError> {
    let settings = Settings {
        description: "Add two integers.".to_owned(),
        ..Settings::default()
    };

    Schema::with_settings(
        [
            ParameterSpec::scalar("x", ValueType::Int).with_help("Left operand."),
            ParameterSpec::scalar("y", ValueType::Int).with_help("Right operand."),
        ],
        settings,
    )
}

pub fn program(args: &Bindings, out: &mut dyn Write) -> io::Result<()> {
    let x: i64 = args.get_one("x").unwrap_or_default();
    let y: i64 = args.get_one("y").unwrap_or_default();

    writeln!(out, "{x} + {y} = {}", x.wrapping_add(y))
}

fn main() -> Result<ExitCode, flint::Error> {
    common::init_tracing();

    Ok(flint::run(&schema()?, program))
}
