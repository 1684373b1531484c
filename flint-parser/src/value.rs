//! Typed values bound to parameters.

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;

/// The type a parameter value is coerced to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueType {
    /// Boolean, spelled `true` or `false`.
    Bool,

    /// Signed 64-bit integer.
    Int,

    /// 64-bit floating point number.
    Float,

    /// Any string, taken verbatim.
    String,
}

impl ValueType {
    /// The placeholder shown in usage text (e.g. `-x <INTEGER>`).
    pub fn placeholder(&self) -> &'static str {
        match self {
            ValueType::Bool => "BOOL",
            ValueType::Int => "INTEGER",
            ValueType::Float => "REAL",
            ValueType::String => "STRING",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Bool => "boolean",
            ValueType::Int => "integer",
            ValueType::Float => "real number",
            ValueType::String => "string",
        };

        f.write_str(name)
    }
}

/// A value resolved from the command line or from a declared default.
///
/// The [`Display`](fmt::Display) form is the canonical token: parsing it back with the same
/// [`ValueType`] yields an identical value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Boolean value.
    Bool(bool),

    /// Integer value.
    Int(i64),

    /// Floating point value.
    Float(f64),

    /// String value.
    Str(String),
}

impl Value {
    /// Coerce a raw token into a value of the given type. Numbers and booleans are trimmed
    /// first, strings are kept as is.
    pub fn parse(input: &str, ty: ValueType) -> Option<Self> {
        let trimmed = input.trim();

        match ty {
            ValueType::Bool => match trimmed {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            ValueType::Int => trimmed.parse::<i64>().ok().map(Value::Int),
            // `NaN` never equals itself, so only finite reals are accepted.
            ValueType::Float => trimmed
                .parse::<f64>()
                .ok()
                .filter(|x| x.is_finite())
                .map(Value::Float),
            ValueType::String => Some(Value::Str(input.to_owned())),
        }
    }

    /// The type of the held value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::String,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(x) => write!(f, "{x}"),
            Value::Int(x) => write!(f, "{x}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(x) => f.write_str(x),
        }
    }
}

macro_rules! make_from_value_impl {
    ($variant:ident, $target:ty) => {
        impl TryFrom<&Value> for $target {
            type Error = ValueType;

            fn try_from(value: &Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$variant(x) => Ok(*x),
                    other => Err(other.value_type()),
                }
            }
        }

        impl From<$target> for Value {
            fn from(value: $target) -> Self {
                Value::$variant(value)
            }
        }
    };
}

make_from_value_impl!(Bool, bool);
make_from_value_impl!(Int, i64);
make_from_value_impl!(Float, f64);

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ValueType;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(x) => Ok(x.as_str()),
            other => Err(other.value_type()),
        }
    }
}

impl TryFrom<&Value> for String {
    type Error = ValueType;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        <&str>::try_from(value).map(ToOwned::to_owned)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}
