use core::panic;

use flint_parser::{Outcome, ParameterSpec, Schema, ValueType};

struct MyArgs {
    field1: i64,
    field2: Option<i64>,
}

fn main() {
    let schema = Schema::new([
        ParameterSpec::scalar("field1", ValueType::Int),
        ParameterSpec::scalar("field2", ValueType::Int).optional(),
    ])
    .expect("valid schema");

    let argv = &["--field1", "42", "--field2=-7"];

    let Outcome::Success(parsed) = schema.parse(argv) else {
        panic!("must be parsed");
    };

    let args = MyArgs {
        field1: parsed.get_one("field1").expect("must be present"),
        field2: parsed.get_one("field2"),
    };

    if 42 != args.field1 {
        panic!("invalid field1");
    }

    if args.field2 != Some(-7) {
        panic!("invalid field2");
    }
}
