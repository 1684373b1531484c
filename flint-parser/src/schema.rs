//! Declared parameters, engine settings and schema validation.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use core::num::NonZeroU8;

use crate::lexer::Flag;
use crate::value::{Value, ValueType};

/// Number of parameters a [`Schema`] holds unless told otherwise.
pub const DEFAULT_CAPACITY: usize = 16;

/// Defines the possible errors found while building a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// The name is empty, starts with a hyphen, holds `=` or whitespace, or the short name is not
    /// an ASCII letter.
    #[error("parameter name `{0}` is not valid")]
    InvalidName(String),

    /// The name (identity, short or long) is already used by another parameter.
    #[error("parameter name `{0}` is declared more than once")]
    DuplicateName(String),

    /// The flag collides with the help identifiers.
    #[error("flag `{0}` is reserved for help")]
    ReservedName(String),

    /// A flag is declared with a non-boolean type.
    #[error("flag `{0}` must be a boolean")]
    FlagType(String),

    /// The default value does not have the declared type.
    #[error("default value of `{name}` is not a {expected}")]
    DefaultType {
        /// Parameter name.
        name: String,
        /// Declared type.
        expected: ValueType,
    },

    /// Positional parameters have no flag spelling.
    #[error("positional `{0}` cannot have a short name")]
    ShortOnPositional(String),

    /// A required positional follows an optional one.
    #[error("required positional `{0}` is declared after an optional one")]
    PositionalOrder(String),

    /// A positional follows the vector positional (including a second vector).
    #[error("positional `{0}` is declared after the vector positional")]
    VectorNotLast(String),

    /// More parameters than the schema capacity.
    #[error("schema holds more than {0} parameters")]
    Capacity(usize),
}

/// Kind of a declared parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamKind {
    /// Boolean flag, present or absent.
    Flag,

    /// Named parameter taking one value (e.g. `--output out.txt`). Required unless it has a
    /// default or is marked optional.
    OptionalScalar,

    /// Positional parameter that must be given.
    RequiredPositional,

    /// Positional parameter that may be omitted.
    OptionalPositional,

    /// Positional parameter collecting all remaining values.
    VectorPositional,
}

impl ParamKind {
    /// Whether the parameter is bound by position rather than by name.
    pub fn is_positional(&self) -> bool {
        matches!(
            self,
            ParamKind::RequiredPositional
                | ParamKind::OptionalPositional
                | ParamKind::VectorPositional
        )
    }
}

/// Declaration of one parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSpec {
    /// Kind.
    pub kind: ParamKind,

    /// Identity, used for look-ups and in messages.
    pub name: String,

    /// Short spelling (e.g. `-v`).
    pub short: Option<char>,

    /// Long spelling (e.g. `--verbose`).
    pub long: Option<String>,

    /// Type the value is coerced to.
    pub value_type: ValueType,

    /// Value bound when the parameter is not given.
    pub default: Option<Value>,

    /// Whether the parameter may be absent with no value.
    pub optional: bool,

    /// One-line description for usage text.
    pub help: String,
}

impl ParameterSpec {
    fn new(kind: ParamKind, name: &str, value_type: ValueType) -> Self {
        ParameterSpec {
            kind,
            name: name.to_owned(),
            short: None,
            long: None,
            value_type,
            default: None,
            optional: false,
            help: String::new(),
        }
    }

    // A one-letter name is spelled as a short flag, anything longer as a long flag.
    fn named(kind: ParamKind, name: &str, value_type: ValueType) -> Self {
        let mut spec = Self::new(kind, name, value_type);
        let mut chars = name.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => spec.short = Some(c),
            _ => spec.long = Some(name.to_owned()),
        }

        spec
    }

    /// Boolean flag, `false` unless given.
    pub fn flag(name: &str) -> Self {
        Self::named(ParamKind::Flag, name, ValueType::Bool).with_default(false)
    }

    /// Named parameter taking one value.
    pub fn scalar(name: &str, value_type: ValueType) -> Self {
        Self::named(ParamKind::OptionalScalar, name, value_type)
    }

    /// Positional parameter that must be given.
    pub fn positional(name: &str, value_type: ValueType) -> Self {
        Self::new(ParamKind::RequiredPositional, name, value_type)
    }

    /// Positional parameter that may be omitted.
    pub fn optional_positional(name: &str, value_type: ValueType) -> Self {
        Self::new(ParamKind::OptionalPositional, name, value_type).optional()
    }

    /// Positional parameter collecting all remaining values, empty by default.
    pub fn vector(name: &str, value_type: ValueType) -> Self {
        Self::new(ParamKind::VectorPositional, name, value_type).optional()
    }

    /// Add a short spelling.
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Set the value bound when the parameter is not given.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set the description shown in usage text.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help = help.to_owned();
        self
    }

    /// Allow the parameter to be absent with no value.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Whether validation fails when the parameter is not given.
    pub fn is_required(&self) -> bool {
        matches!(
            self.kind,
            ParamKind::OptionalScalar | ParamKind::RequiredPositional
        ) && self.default.is_none()
            && !self.optional
    }

    /// Name as shown to the user: `<name>` for positionals, the long spelling otherwise.
    pub fn display_name(&self) -> String {
        if self.kind.is_positional() {
            return format!("<{}>", self.name);
        }

        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => self.name.clone(),
        }
    }

    fn matches_flag(&self, flag: Flag<'_>) -> bool {
        if self.kind.is_positional() {
            return false;
        }

        match flag {
            Flag::Short(c) => self.short == Some(c),
            Flag::Long(name) => self.long.as_deref() == Some(name),
        }
    }
}

/// Settings of the engine that are not tied to one parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Program name shown in usage text. Left empty, the caller's invocation name is used.
    pub program: String,

    /// Description shown in usage text.
    pub description: String,

    /// Short help identifier.
    pub help_short: Option<char>,

    /// Long help identifier.
    pub help_long: Option<String>,

    /// Exit code of every parse failure.
    pub failure_code: NonZeroU8,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            program: String::new(),
            description: String::new(),
            help_short: Some('h'),
            help_long: Some("help".to_owned()),
            failure_code: NonZeroU8::MIN,
        }
    }
}

/// Ordered list of declared parameters.
///
/// The capacity `N` bounds the number of parameters and the size of the resulting
/// [`Bindings`](crate::Bindings).
#[derive(Clone, Debug)]
pub struct Schema<const N: usize = DEFAULT_CAPACITY> {
    params: heapless::Vec<ParameterSpec, N>,
    settings: Settings,
}

impl Schema {
    /// Build a schema with default settings.
    pub fn new(params: impl IntoIterator<Item = ParameterSpec>) -> Result<Self, SchemaError> {
        Self::try_new(params, Settings::default())
    }

    /// Build a schema with the given settings.
    pub fn with_settings(
        params: impl IntoIterator<Item = ParameterSpec>,
        settings: Settings,
    ) -> Result<Self, SchemaError> {
        Self::try_new(params, settings)
    }
}

impl<const N: usize> Schema<N> {
    /// Build a schema of capacity `N`, checking every declaration.
    pub fn try_new(
        params: impl IntoIterator<Item = ParameterSpec>,
        settings: Settings,
    ) -> Result<Self, SchemaError> {
        let mut schema = Schema {
            params: heapless::Vec::new(),
            settings,
        };

        let mut after_optional = false;
        let mut after_vector = false;

        for param in params {
            schema.check_declaration(&param)?;

            if param.kind.is_positional() {
                if after_vector {
                    return Err(SchemaError::VectorNotLast(param.name));
                }

                if param.is_required() && after_optional {
                    return Err(SchemaError::PositionalOrder(param.name));
                }

                after_optional |= !param.is_required();
                after_vector |= param.kind == ParamKind::VectorPositional;
            }

            schema
                .params
                .push(param)
                .map_err(|_| SchemaError::Capacity(N))?;
        }

        Ok(schema)
    }

    fn check_declaration(&self, param: &ParameterSpec) -> Result<(), SchemaError> {
        let is_valid_name = |name: &str| {
            !name.is_empty()
                && !name.starts_with('-')
                && !name.contains('=')
                && !name.contains(char::is_whitespace)
        };

        if !is_valid_name(&param.name) || !param.long.as_deref().is_none_or(is_valid_name) {
            return Err(SchemaError::InvalidName(param.name.clone()));
        }

        if let Some(short) = param.short {
            if param.kind.is_positional() {
                return Err(SchemaError::ShortOnPositional(param.name.clone()));
            }

            if !short.is_ascii_alphabetic() {
                return Err(SchemaError::InvalidName(format!("-{short}")));
            }
        }

        if param.kind == ParamKind::Flag && param.value_type != ValueType::Bool {
            return Err(SchemaError::FlagType(param.name.clone()));
        }

        if let Some(default) = &param.default {
            if default.value_type() != param.value_type {
                return Err(SchemaError::DefaultType {
                    name: param.name.clone(),
                    expected: param.value_type,
                });
            }
        }

        let short = param.short.map(Flag::Short);
        let long = param.long.as_deref().map(Flag::Long);

        for flag in [short, long].into_iter().flatten() {
            if self.is_help(flag) {
                return Err(SchemaError::ReservedName(format!("{flag}")));
            }

            if self.find_flag(flag).is_some() {
                return Err(SchemaError::DuplicateName(format!("{flag}")));
            }
        }

        if self.find(&param.name).is_some() {
            return Err(SchemaError::DuplicateName(param.name.clone()));
        }

        Ok(())
    }

    /// Declared parameters, in order.
    #[inline(always)]
    pub fn params(&self) -> &[ParameterSpec] {
        &self.params
    }

    /// Engine settings.
    #[inline(always)]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Index of the parameter with the given identity.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|x| x.name == name)
    }

    /// Index of the named parameter spelled by the given flag.
    pub fn find_flag(&self, flag: Flag<'_>) -> Option<usize> {
        self.params.iter().position(|x| x.matches_flag(flag))
    }

    /// Check if the flag is one of the help identifiers.
    pub fn is_help(&self, flag: Flag<'_>) -> bool {
        match flag {
            Flag::Short(c) => self.settings.help_short == Some(c),
            Flag::Long(name) => self.settings.help_long.as_deref() == Some(name),
        }
    }

    /// Check if the letter may appear in a bundle of boolean flags (e.g. `-ab`).
    pub fn bundles(&self, c: char) -> bool {
        self.is_help(Flag::Short(c))
            || self
                .find_flag(Flag::Short(c))
                .is_some_and(|idx| self.params[idx].kind == ParamKind::Flag)
    }

    /// Indices of the positional parameters, in declared order.
    pub fn positionals(&self) -> impl Iterator<Item = usize> + '_ {
        self.params
            .iter()
            .enumerate()
            .filter(|(_, x)| x.kind.is_positional())
            .map(|(idx, _)| idx)
    }

    /// Render the usage text.
    pub fn help(&self) -> String {
        crate::help::render(self, "")
    }
}
