//! A parser binding a token stream to the declared parameters.

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use alloc::{format, vec};
use core::fmt;

use tracing::{debug, trace};

use crate::lexer::{Flag, Token, Tokens};
use crate::schema::{DEFAULT_CAPACITY, ParamKind, ParameterSpec, Schema};
use crate::value::{Value, ValueType};

/// Kind of a parse failure, without its details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// See [`Error::UnknownFlag`].
    UnknownFlag,
    /// See [`Error::MissingValue`].
    MissingValue,
    /// See [`Error::TypeMismatch`].
    TypeMismatch,
    /// See [`Error::DuplicateAssignment`].
    DuplicateAssignment,
    /// See [`Error::TooManyPositionals`].
    TooManyPositionals,
    /// See [`Error::MissingRequired`].
    MissingRequired,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::UnknownFlag => "unknown flag",
            ErrorKind::MissingValue => "missing value",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::DuplicateAssignment => "duplicate assignment",
            ErrorKind::TooManyPositionals => "too many positionals",
            ErrorKind::MissingRequired => "missing required",
        };

        f.write_str(name)
    }
}

/// Defines the possible errors that may occur during parsing of arguments.
///
/// Each variant holds the offending token or the display name of the parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The flag is not declared.
    #[error("unknown flag: `{0}`")]
    UnknownFlag(String),

    /// The parameter expects a value and none follows.
    #[error("missing value: `{0}` expects a value")]
    MissingValue(String),

    /// The value cannot be converted to the declared type.
    #[error("type mismatch: `{token}` is not a valid {expected} for `{param}`")]
    TypeMismatch {
        /// Display name of the parameter.
        param: String,
        /// Offending token.
        token: String,
        /// Declared type.
        expected: ValueType,
    },

    /// The parameter is given more than once.
    #[error("duplicate assignment: `{0}` is given more than once")]
    DuplicateAssignment(String),

    /// A positional value is left with no parameter to bind to.
    #[error("too many positionals: unexpected `{0}`")]
    TooManyPositionals(String),

    /// A required parameter is not given.
    #[error("missing required: `{0}` is not given")]
    MissingRequired(String),
}

impl Error {
    /// The kind of failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownFlag(_) => ErrorKind::UnknownFlag,
            Error::MissingValue(_) => ErrorKind::MissingValue,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::DuplicateAssignment(_) => ErrorKind::DuplicateAssignment,
            Error::TooManyPositionals(_) => ErrorKind::TooManyPositionals,
            Error::MissingRequired(_) => ErrorKind::MissingRequired,
        }
    }
}

/// Defines the errors of a look-up in [`Bindings`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LookupError {
    /// No parameter has this name.
    #[error("no parameter named `{0}`")]
    Undeclared(String),

    /// The bound value has another type than requested.
    #[error("parameter `{name}` holds a {found}")]
    WrongType {
        /// Parameter name.
        name: String,
        /// Type of the bound value.
        found: ValueType,
    },
}

/// What is bound to one parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    /// Nothing given and no default.
    Absent,

    /// A single value.
    One(Value),

    /// Values collected by a vector positional, in input order.
    Many(Vec<Value>),
}

/// Defines the result of argument parsing: one slot per declared parameter, in declared order.
#[derive(Clone, Debug, PartialEq)]
pub struct Bindings<const N: usize = DEFAULT_CAPACITY> {
    slots: heapless::Vec<(String, Slot), N>,
}

/// Final state of one invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<const N: usize = DEFAULT_CAPACITY> {
    /// Every parameter is bound.
    Success(Bindings<N>),

    /// A help identifier is present.
    HelpRequested,

    /// The first error encountered.
    Failure(Error),
}

impl<const N: usize> Outcome<N> {
    /// The error, if parsing failed.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// The bindings, if parsing succeeded.
    pub fn bindings(&self) -> Option<&Bindings<N>> {
        match self {
            Outcome::Success(bindings) => Some(bindings),
            _ => None,
        }
    }
}

impl<const N: usize> Schema<N> {
    /// Parse the command line input, program name excluded.
    ///
    /// A help identifier anywhere before `--` wins over any other error.
    pub fn parse<S: AsRef<str>>(&self, argv: &[S]) -> Outcome<N> {
        if self.wants_help(argv) {
            debug!("help requested");
            return Outcome::HelpRequested;
        }

        match Bindings::try_parse(self, argv) {
            Ok(bindings) => Outcome::Success(bindings),
            Err(error) => {
                debug!(error = %error, "parsing failed");
                Outcome::Failure(error)
            }
        }
    }

    /// Check if the input holds a help identifier, alone or in a bundle.
    ///
    /// In a cluster such as `-hx3`, the help letter counts only among the leading letters that
    /// could be bundled.
    pub fn wants_help<S: AsRef<str>>(&self, argv: &[S]) -> bool {
        Tokens::new(argv, |c| self.bundles(c)).any(|token| match token {
            Token::Flag(flag, _) => self.is_help(flag),
            Token::Cluster(input) => input
                .strip_prefix('-')
                .unwrap_or(input)
                .chars()
                .take_while(|&c| self.bundles(c))
                .any(|c| self.is_help(Flag::Short(c))),
            _ => false,
        })
    }
}

fn coerce(param: &ParameterSpec, token: &str) -> Result<Value, Error> {
    Value::parse(token, param.value_type).ok_or_else(|| Error::TypeMismatch {
        param: param.display_name(),
        token: token.to_owned(),
        expected: param.value_type,
    })
}

impl<const N: usize> Bindings<N> {
    fn unbound(schema: &Schema<N>) -> Self {
        let slots = schema
            .params()
            .iter()
            .map(|x| {
                let slot = if x.kind == ParamKind::VectorPositional {
                    Slot::Many(vec![])
                } else {
                    Slot::Absent
                };

                (x.name.clone(), slot)
            })
            .collect();

        Bindings { slots }
    }

    /// Try to bind the input arguments, ignoring help identifiers. See [`Schema::parse`].
    pub fn try_parse<S: AsRef<str>>(schema: &Schema<N>, argv: &[S]) -> Result<Self, Error> {
        let mut out = Self::unbound(schema);

        let positionals: heapless::Vec<usize, N> = schema.positionals().collect();
        let mut next_positional = 0;

        let mut tokens = Tokens::new(argv, |c| schema.bundles(c));

        while let Some(token) = tokens.next() {
            trace!(token = ?token, "matching");

            match token {
                Token::Terminator => {}

                Token::Value(input) => {
                    let Some(&idx) = positionals.get(next_positional) else {
                        return Err(Error::TooManyPositionals(input.to_owned()));
                    };

                    let param = &schema.params()[idx];
                    let value = coerce(param, input)?;

                    if param.kind == ParamKind::VectorPositional {
                        out.push(idx, value);
                    } else {
                        out.slots[idx].1 = Slot::One(value);
                        next_positional += 1;
                    }
                }

                Token::Flag(flag, inline) => {
                    let idx = schema
                        .find_flag(flag)
                        .ok_or_else(|| Error::UnknownFlag(flag.to_string()))?;
                    let param = &schema.params()[idx];

                    if param.kind == ParamKind::Flag {
                        // A boolean flag never takes the next argument.
                        let value = match inline {
                            Some(input) => coerce(param, input)?,
                            None => Value::Bool(true),
                        };
                        out.slots[idx].1 = Slot::One(value);
                    } else {
                        out.ensure_unbound(idx, param)?;

                        let input = inline
                            .or_else(|| tokens.next_value())
                            .ok_or_else(|| Error::MissingValue(param.display_name()))?;
                        out.slots[idx].1 = Slot::One(coerce(param, input)?);
                    }
                }

                Token::Cluster(input) => out.bind_cluster(schema, input)?,
            }
        }

        out.validate(schema)?;

        Ok(out)
    }

    // A cluster is either a short scalar with its value attached (e.g. `-x3`) or a bundle broken
    // by a letter that is not a boolean flag.
    fn bind_cluster(&mut self, schema: &Schema<N>, input: &str) -> Result<(), Error> {
        let body = input.strip_prefix('-').unwrap_or(input);
        let mut chars = body.chars();

        let Some(first) = chars.next() else {
            return Err(Error::UnknownFlag(input.to_owned()));
        };

        let idx = schema
            .find_flag(Flag::Short(first))
            .ok_or_else(|| Error::UnknownFlag(format!("-{first}")))?;
        let param = &schema.params()[idx];

        if param.kind == ParamKind::OptionalScalar {
            self.ensure_unbound(idx, param)?;
            self.slots[idx].1 = Slot::One(coerce(param, chars.as_str())?);
            return Ok(());
        }

        let letter = body.chars().find(|&c| !schema.bundles(c)).unwrap_or(first);

        match schema.find_flag(Flag::Short(letter)) {
            Some(idx) if schema.params()[idx].kind != ParamKind::Flag => Err(
                Error::MissingValue(schema.params()[idx].display_name()),
            ),
            _ => Err(Error::UnknownFlag(format!("-{letter}"))),
        }
    }

    fn ensure_unbound(&self, idx: usize, param: &ParameterSpec) -> Result<(), Error> {
        if matches!(self.slots[idx].1, Slot::Absent) {
            Ok(())
        } else {
            Err(Error::DuplicateAssignment(param.display_name()))
        }
    }

    fn push(&mut self, idx: usize, value: Value) {
        match &mut self.slots[idx].1 {
            Slot::Many(values) => values.push(value),
            slot => *slot = Slot::Many(vec![value]),
        }
    }

    // Fill in defaults and report the first required parameter left unbound.
    fn validate(&mut self, schema: &Schema<N>) -> Result<(), Error> {
        for (param, (_, slot)) in schema.params().iter().zip(self.slots.iter_mut()) {
            if !matches!(slot, Slot::Absent) {
                continue;
            }

            if let Some(default) = &param.default {
                *slot = Slot::One(default.clone());
            } else if param.is_required() {
                return Err(Error::MissingRequired(param.display_name()));
            }
        }

        Ok(())
    }

    fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|x| x.0 == name).map(|x| &x.1)
    }

    /// Check if the parameter holds a value. Vector positionals always do, even when empty.
    #[inline(always)]
    pub fn contains(&self, name: &str) -> bool {
        matches!(self.slot(name), Some(Slot::One(_) | Slot::Many(_)))
    }

    /// Get the single value bound to the parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.slot(name) {
            Some(Slot::One(value)) => Some(value),
            _ => None,
        }
    }

    /// Get every value bound to the parameter, in input order.
    pub fn values(&self, name: &str) -> &[Value] {
        match self.slot(name) {
            Some(Slot::One(value)) => core::slice::from_ref(value),
            Some(Slot::Many(values)) => values,
            _ => &[],
        }
    }

    /// Get one value converted to `T`, or `None` if the parameter is absent.
    pub fn get_one<'s, T>(&'s self, name: &str) -> Option<T>
    where
        T: TryFrom<&'s Value, Error = ValueType>,
    {
        self.try_get_one(name).ok().flatten()
    }

    /// Get many values converted to `T` and collected into `B`.
    pub fn get_many<'s, B, T>(&'s self, name: &str) -> Option<B>
    where
        B: FromIterator<T>,
        T: TryFrom<&'s Value, Error = ValueType>,
    {
        self.try_get_many::<B, T>(name).ok()
    }

    /// Try to get one value converted to `T`.
    pub fn try_get_one<'s, T>(&'s self, name: &str) -> Result<Option<T>, LookupError>
    where
        T: TryFrom<&'s Value, Error = ValueType>,
    {
        let slot = self
            .slot(name)
            .ok_or_else(|| LookupError::Undeclared(name.to_owned()))?;

        match slot {
            Slot::One(value) => T::try_from(value).map(Some).map_err(|found| {
                LookupError::WrongType {
                    name: name.to_owned(),
                    found,
                }
            }),
            _ => Ok(None),
        }
    }

    /// Try to get many values converted to `T`. The collection can be constructed from an
    /// iterator.
    pub fn try_get_many<'s, B, T>(&'s self, name: &str) -> Result<B, LookupError>
    where
        B: FromIterator<T>,
        T: TryFrom<&'s Value, Error = ValueType>,
    {
        if self.slot(name).is_none() {
            return Err(LookupError::Undeclared(name.to_owned()));
        }

        // Collect on Seq<Result<T, _>> can be coerced to Result<Seq<T>, _>.
        self.values(name)
            .iter()
            .map(|value| {
                T::try_from(value).map_err(|found| LookupError::WrongType {
                    name: name.to_owned(),
                    found,
                })
            })
            .collect()
    }

    /// Render the bindings back into arguments that parse to the same bindings.
    ///
    /// Named values use the inline `=` form and positionals follow a `--` terminator, so values
    /// starting with a hyphen survive.
    pub fn to_args(&self, schema: &Schema<N>) -> Vec<String> {
        let mut args = Vec::new();
        let mut positionals = Vec::new();

        for (param, (_, slot)) in schema.params().iter().zip(self.slots.iter()) {
            match (param.kind, slot) {
                // A flag is rendered only when it differs from its default.
                (ParamKind::Flag, Slot::One(value)) if param.default.as_ref() != Some(value) => {
                    match value {
                        Value::Bool(true) => args.push(param.display_name()),
                        _ => args.push(format!("{}={value}", param.display_name())),
                    }
                }
                (ParamKind::Flag, _) => {}
                (ParamKind::OptionalScalar, Slot::One(value)) => {
                    args.push(format!("{}={value}", param.display_name()));
                }
                (_, Slot::One(value)) => positionals.push(value.to_string()),
                (_, Slot::Many(values)) => {
                    positionals.extend(values.iter().map(ToString::to_string));
                }
                (_, Slot::Absent) => {}
            }
        }

        if !positionals.is_empty() {
            args.push("--".to_owned());
            args.append(&mut positionals);
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use crate::schema::Settings;

    use super::*;

    fn split(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    fn kind_of<const N: usize>(schema: &Schema<N>, line: &str) -> Option<ErrorKind> {
        Bindings::try_parse(schema, &split(line)).err().map(|x| x.kind())
    }

    fn basic() -> Schema {
        Schema::new([
            ParameterSpec::scalar("x", ValueType::Int),
            ParameterSpec::scalar("y", ValueType::Int),
        ])
        .unwrap()
    }

    fn flags() -> Schema {
        Schema::new([
            ParameterSpec::flag("flag-a").with_short('a'),
            ParameterSpec::flag("flag-b").with_short('b'),
        ])
        .unwrap()
    }

    fn positional() -> Schema {
        Schema::new([
            ParameterSpec::positional("first", ValueType::Int),
            ParameterSpec::optional_positional("second", ValueType::Int).with_default(0),
        ])
        .unwrap()
    }

    fn vector() -> Schema {
        Schema::new([
            ParameterSpec::flag("o"),
            ParameterSpec::flag("s"),
            ParameterSpec::vector("values", ValueType::String),
        ])
        .unwrap()
    }

    fn all_combinations() -> Schema {
        Schema::new([
            ParameterSpec::positional("req", ValueType::Int),
            ParameterSpec::optional_positional("opt", ValueType::Int),
            ParameterSpec::scalar("i", ValueType::Int),
            ParameterSpec::scalar("def-r", ValueType::Float).with_default(0.0),
            ParameterSpec::scalar("opt-s", ValueType::String).optional(),
            ParameterSpec::flag("verbose").with_short('v'),
        ])
        .unwrap()
    }

    #[test]
    fn it_should_bind_named_values() {
        let args = Bindings::try_parse(&basic(), &split("-x 3 -y 4")).unwrap();

        assert_that!(args.get_one::<i64>("x"), eq(Some(3)));
        assert_that!(args.get_one::<i64>("y"), eq(Some(4)));
    }

    #[test]
    fn it_should_bind_negative_values() {
        for line in ["-x -3 -y 3", "-x=-3 -y=3", "-x-3 -y3"] {
            let args = Bindings::try_parse(&basic(), &split(line)).unwrap();

            assert_that!(args.get_one::<i64>("x"), eq(Some(-3)));
            assert_that!(args.get_one::<i64>("y"), eq(Some(3)));
        }
    }

    #[test]
    fn it_should_fail_on_missing_required() {
        let schema = basic();

        assert_that!(
            Bindings::try_parse(&schema, &split("")),
            eq(&Err(Error::MissingRequired("-x".to_owned())))
        );
        assert_that!(
            Bindings::try_parse(&schema, &split("-x 3")),
            eq(&Err(Error::MissingRequired("-y".to_owned())))
        );
        assert_that!(kind_of(&schema, "-y 4"), eq(Some(ErrorKind::MissingRequired)));
    }

    #[test]
    fn it_should_fail_on_invalid_value() {
        assert_that!(
            Bindings::try_parse(&basic(), &split("-x test")),
            eq(&Err(Error::TypeMismatch {
                param: "-x".to_owned(),
                token: "test".to_owned(),
                expected: ValueType::Int,
            }))
        );
    }

    #[test]
    fn it_should_fail_on_missing_value() {
        let schema = basic();

        assert_that!(kind_of(&schema, "-x"), eq(Some(ErrorKind::MissingValue)));
        assert_that!(kind_of(&schema, "-x -y 4"), eq(Some(ErrorKind::MissingValue)));
        assert_that!(kind_of(&schema, "-x -- 3 -y 4"), eq(Some(ErrorKind::MissingValue)));
    }

    #[test]
    fn it_should_fail_on_unknown_flag() {
        assert_that!(
            Bindings::try_parse(&basic(), &split("--undefined 0")),
            eq(&Err(Error::UnknownFlag("--undefined".to_owned())))
        );
    }

    #[test]
    fn it_should_fail_on_duplicate_assignment() {
        let schema = basic();

        assert_that!(
            Bindings::try_parse(&schema, &split("-x 1 -x 2 -y 3")),
            eq(&Err(Error::DuplicateAssignment("-x".to_owned())))
        );
        assert_that!(
            kind_of(&schema, "-x 1 -y 2 -x"),
            eq(Some(ErrorKind::DuplicateAssignment))
        );
    }

    #[test]
    fn it_should_stop_at_first_error() {
        assert_that!(
            Bindings::try_parse(&basic(), &split("-x test --undefined")),
            eq(&Err(Error::TypeMismatch {
                param: "-x".to_owned(),
                token: "test".to_owned(),
                expected: ValueType::Int,
            }))
        );
    }

    #[test]
    fn it_should_let_help_win() {
        let schema = basic();

        for line in ["-h", "--help", "-x 0 -h", "-h --undefined", "-x test --help", "-x -h"] {
            assert_that!(schema.parse(&split(line)), eq(&Outcome::HelpRequested));
        }
    }

    #[test]
    fn it_should_not_take_help_after_terminator() {
        let outcome = vector().parse(&split("-- -h"));
        let args = outcome.bindings().unwrap();

        assert_that!(args.get_many::<Vec<&str>, _>("values"), eq(&Some(vec!["-h"])));
    }

    #[test]
    fn it_should_find_help_in_bundle() {
        assert_that!(flags().parse(&split("-ah")), eq(&Outcome::HelpRequested));
    }

    #[test]
    fn it_should_find_help_leading_a_cluster() {
        let schema = Schema::new([
            ParameterSpec::flag("a"),
            ParameterSpec::scalar("x", ValueType::Int),
        ])
        .unwrap();

        assert_that!(schema.parse(&split("-hx3")), eq(&Outcome::HelpRequested));
        assert_that!(schema.parse(&split("-ahx3")), eq(&Outcome::HelpRequested));
        assert_that!(
            schema.parse(&split("-x3h")).error().map(Error::kind),
            eq(Some(ErrorKind::TypeMismatch))
        );
    }

    #[test]
    fn it_should_use_custom_help_identifiers() {
        let settings = Settings {
            help_short: Some('?'),
            help_long: Some("usage".to_owned()),
            ..Settings::default()
        };
        let schema = Schema::with_settings([ParameterSpec::flag("h")], settings).unwrap();

        assert_that!(schema.parse(&split("--usage")), eq(&Outcome::HelpRequested));
        assert_that!(schema.parse(&split("-?")), eq(&Outcome::HelpRequested));

        let outcome = schema.parse(&split("-h"));
        assert_that!(outcome.bindings().unwrap().get_one::<bool>("h"), eq(Some(true)));
    }

    #[test]
    fn it_should_parse_flags() {
        let schema = flags();
        let cases = [
            ("", false, false),
            ("-a -b", true, true),
            ("-ab", true, true),
            ("-ba", true, true),
            ("--flag-a", true, false),
            ("--flag-b", false, true),
            ("-a -a", true, false),
            ("--flag-a=false -b", false, true),
        ];

        for (line, a, b) in cases {
            let args = Bindings::try_parse(&schema, &split(line)).unwrap();

            assert_that!(args.get_one::<bool>("flag-a"), eq(Some(a)));
            assert_that!(args.get_one::<bool>("flag-b"), eq(Some(b)));
        }
    }

    #[test]
    fn it_should_not_give_a_value_to_flag() {
        let schema = flags();

        assert_that!(
            Bindings::try_parse(&schema, &split("-a 1")),
            eq(&Err(Error::TooManyPositionals("1".to_owned())))
        );
        assert_that!(kind_of(&schema, "--flag-a=yes"), eq(Some(ErrorKind::TypeMismatch)));
    }

    #[test]
    fn it_should_take_dash_digit_token_as_value() {
        assert_that!(
            Bindings::try_parse(&basic(), &split("-x -5x -y 1")),
            eq(&Err(Error::TypeMismatch {
                param: "-x".to_owned(),
                token: "-5x".to_owned(),
                expected: ValueType::Int,
            }))
        );

        let schema = Schema::new([ParameterSpec::scalar("name", ValueType::String)]).unwrap();
        let args = Bindings::try_parse(&schema, &split("--name -1a")).unwrap();

        assert_that!(args.get_one::<&str>("name"), eq(Some("-1a")));
    }

    #[test]
    fn it_should_pin_cluster_boundary() {
        let schema = Schema::new([
            ParameterSpec::flag("a"),
            ParameterSpec::flag("b"),
            ParameterSpec::scalar("x", ValueType::Int).optional(),
        ])
        .unwrap();

        let args = Bindings::try_parse(&schema, &split("-x3")).unwrap();
        assert_that!(args.get_one::<i64>("x"), eq(Some(3)));

        assert_that!(kind_of(&schema, "-xa"), eq(Some(ErrorKind::TypeMismatch)));
        assert_that!(
            Bindings::try_parse(&schema, &split("-ax")),
            eq(&Err(Error::MissingValue("-x".to_owned())))
        );
        assert_that!(
            Bindings::try_parse(&schema, &split("-abz")),
            eq(&Err(Error::UnknownFlag("-z".to_owned())))
        );
        assert_that!(
            Bindings::try_parse(&schema, &split("-z3")),
            eq(&Err(Error::UnknownFlag("-z".to_owned())))
        );
        assert_that!(kind_of(&schema, "-x3 -x4"), eq(Some(ErrorKind::DuplicateAssignment)));
    }

    #[test]
    fn it_should_bind_positionals_in_order() {
        let schema = positional();

        let args = Bindings::try_parse(&schema, &split("2")).unwrap();
        assert_that!(args.get_one::<i64>("first"), eq(Some(2)));
        assert_that!(args.get_one::<i64>("second"), eq(Some(0)));

        let args = Bindings::try_parse(&schema, &split("2 3")).unwrap();
        assert_that!(args.get_one::<i64>("second"), eq(Some(3)));

        let args = Bindings::try_parse(&schema, &split("-1 -3")).unwrap();
        assert_that!(args.get_one::<i64>("first"), eq(Some(-1)));
        assert_that!(args.get_one::<i64>("second"), eq(Some(-3)));
    }

    #[test]
    fn it_should_fail_on_bad_positionals() {
        let schema = positional();

        assert_that!(
            Bindings::try_parse(&schema, &split("")),
            eq(&Err(Error::MissingRequired("<first>".to_owned())))
        );
        assert_that!(kind_of(&schema, "test"), eq(Some(ErrorKind::TypeMismatch)));
        assert_that!(
            Bindings::try_parse(&schema, &split("2 3 4")),
            eq(&Err(Error::TooManyPositionals("4".to_owned())))
        );
    }

    #[test]
    fn it_should_collect_vector_in_input_order() {
        let schema = vector();

        let args = Bindings::try_parse(&schema, &split("b a -o")).unwrap();
        assert_that!(args.get_many::<Vec<&str>, _>("values"), eq(&Some(vec!["b", "a"])));
        assert_that!(args.get_one::<bool>("o"), eq(Some(true)));

        let args = Bindings::try_parse(&schema, &split("a -- -b")).unwrap();
        assert_that!(args.get_many::<Vec<&str>, _>("values"), eq(&Some(vec!["a", "-b"])));

        let args = Bindings::try_parse(&schema, &split("")).unwrap();
        assert_that!(args.values("values").is_empty(), eq(true));
        assert_that!(args.contains("values"), eq(true));
    }

    #[test]
    fn it_should_keep_optional_absent() {
        let schema = Schema::new([
            ParameterSpec::scalar("optional", ValueType::Int).optional(),
            ParameterSpec::scalar("default", ValueType::Int).with_default(0),
        ])
        .unwrap();

        let args = Bindings::try_parse(&schema, &split("")).unwrap();
        assert_that!(args.contains("optional"), eq(false));
        assert_that!(args.get_one::<i64>("optional"), eq(None));
        assert_that!(args.get_one::<i64>("default"), eq(Some(0)));

        let args = Bindings::try_parse(&schema, &split("--optional -1 --default 1")).unwrap();
        assert_that!(args.get_one::<i64>("optional"), eq(Some(-1)));
        assert_that!(args.get_one::<i64>("default"), eq(Some(1)));
    }

    #[test]
    fn it_should_bind_all_combinations() {
        let schema = all_combinations();

        for line in [
            "0 1 -i=0 --def-r=0.0 --opt-s=string",
            "0 1 -i 0 --def-r 0.0 --opt-s string",
        ] {
            let args = Bindings::try_parse(&schema, &split(line)).unwrap();

            assert_that!(args.get_one::<i64>("opt"), eq(Some(1)));
            assert_that!(args.get_one::<f64>("def-r"), eq(Some(0.0)));
            assert_that!(args.get_one::<&str>("opt-s"), eq(Some("string")));
        }

        let args = Bindings::try_parse(&schema, &split("0 -i=0")).unwrap();
        assert_that!(args.contains("opt"), eq(false));
        assert_that!(args.contains("opt-s"), eq(false));
    }

    #[test]
    fn it_should_report_lookup_errors() {
        let args = Bindings::try_parse(&basic(), &split("-x 3 -y 4")).unwrap();

        assert_that!(
            args.try_get_one::<bool>("x"),
            eq(&Err(LookupError::WrongType {
                name: "x".to_owned(),
                found: ValueType::Int,
            }))
        );
        assert_that!(
            args.try_get_one::<i64>("z"),
            eq(&Err(LookupError::Undeclared("z".to_owned())))
        );
        assert_that!(
            args.try_get_many::<Vec<i64>, _>("x"),
            eq(&Ok(vec![3]))
        );
    }

    #[test]
    fn it_should_parse_rendered_args_to_same_bindings() {
        let schema = all_combinations();
        let lines = [
            "0 -i=0",
            "-5 7 -i -2 --def-r 1.25 --opt-s=-dash -v",
            "0 -i 1 --opt-s a=b",
        ];

        for line in lines {
            let args = Bindings::try_parse(&schema, &split(line)).unwrap();
            let rendered = args.to_args(&schema);

            assert_that!(Bindings::try_parse(&schema, &rendered), eq(&Ok(args)));
        }

        let schema = vector();
        let args = Bindings::try_parse(&schema, &split("b -s -- -a --")).unwrap();
        let rendered = args.to_args(&schema);

        assert_that!(rendered, eq(&vec!["-s", "--", "b", "-a", "--"]));
        assert_that!(Bindings::try_parse(&schema, &rendered), eq(&Ok(args)));

        let schema = Schema::new([
            ParameterSpec::flag("color").with_default(true),
            ParameterSpec::flag("quiet"),
        ])
        .unwrap();

        for line in ["", "--color=false", "--quiet", "--color=false --quiet"] {
            let args = Bindings::try_parse(&schema, &split(line)).unwrap();
            let rendered = args.to_args(&schema);

            assert_that!(Bindings::try_parse(&schema, &rendered), eq(&Ok(args)));
        }

        let args = Bindings::try_parse(&schema, &split("--color=false")).unwrap();
        assert_that!(args.to_args(&schema), eq(&vec!["--color=false"]));
    }
}
