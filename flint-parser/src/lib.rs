//! The argument binding engine behind `flint`.
//!
//! A [`Schema`] describes the parameters of a program. [`Schema::parse`] turns the raw
//! arguments into an [`Outcome`]: typed [`Bindings`], a help request, or a single [`Error`].
#![no_std]

extern crate alloc;

pub mod help;
pub mod lexer;
pub mod parser;
pub mod schema;
pub mod value;

pub use lexer::{Flag, Token, Tokens};
pub use parser::{Bindings, Error, ErrorKind, LookupError, Outcome, Slot};
pub use schema::{DEFAULT_CAPACITY, ParamKind, ParameterSpec, Schema, SchemaError, Settings};
pub use value::{Value, ValueType};
