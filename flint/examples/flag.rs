use std::io::{self, Write};
use std::process::ExitCode;

use flint::{Bindings, ParameterSpec, Schema, SchemaError};

#[path = "common/mod.rs"]
mod common;

pub fn schema() -> Result<Schema, SchemaError> {
    Schema::new([
        ParameterSpec::flag("flag-a").with_short('a'),
        ParameterSpec::flag("flag-b").with_short('b'),
    ])
}

pub fn program(args: &Bindings, out: &mut dyn Write) -> io::Result<()> {
    let a: bool = args.get_one("flag-a").unwrap_or_default();
    let b: bool = args.get_one("flag-b").unwrap_or_default();

    writeln!(out, "flag-a: {a}   flag-b: {b}")
}

fn main() -> Result<ExitCode, flint::Error> {
    common::init_tracing();

    Ok(flint::run(&schema()?, program))
}
