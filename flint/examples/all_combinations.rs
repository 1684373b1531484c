use std::io::{self, Write};
use std::process::ExitCode;

use flint::{Bindings, ParameterSpec, Schema, SchemaError, ValueType};

#[path = "common/mod.rs"]
mod common;

pub fn schema() -> Result<Schema, SchemaError> {
    Schema::new([
        ParameterSpec::positional("req", ValueType::Int),
        ParameterSpec::optional_positional("opt", ValueType::Int),
        ParameterSpec::scalar("i", ValueType::Int),
        ParameterSpec::scalar("def-r", ValueType::Float).with_default(0.5),
        ParameterSpec::scalar("opt-s", ValueType::String).optional(),
        ParameterSpec::flag("verbose").with_short('v'),
    ])
}

// Binding is the whole point, nothing is printed.
pub fn program(_: &Bindings, _: &mut dyn Write) -> io::Result<()> {
    Ok(())
}

fn main() -> Result<ExitCode, flint::Error> {
    common::init_tracing();

    Ok(flint::run(&schema()?, program))
}
