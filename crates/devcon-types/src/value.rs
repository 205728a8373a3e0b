//! Parameter value types and coerced argument values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DevconError;

/// The declared type of a command parameter.
///
/// The set is closed: discovery adapters name a type with a string and
/// unknown names are rejected when the command is registered, never at
/// call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Integer,
    Float,
    Bool,
}

impl ValueType {
    /// Short lowercase name used in labels and messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = DevconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "str" => Ok(ValueType::String),
            "int" | "integer" | "i32" | "i64" | "int32" | "int64" => Ok(ValueType::Integer),
            "float" | "single" | "double" | "f32" | "f64" => Ok(ValueType::Float),
            "bool" | "boolean" => Ok(ValueType::Bool),
            _ => Err(DevconError::UnsupportedType(s.to_string())),
        }
    }
}

/// A typed argument value handed to a command handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// The type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Integer(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Bool,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_type_aliases() {
        assert_eq!("int".parse::<ValueType>().unwrap(), ValueType::Integer);
        assert_eq!("Int32".parse::<ValueType>().unwrap(), ValueType::Integer);
        assert_eq!("I64".parse::<ValueType>().unwrap(), ValueType::Integer);
        assert_eq!("double".parse::<ValueType>().unwrap(), ValueType::Float);
        assert_eq!("Boolean".parse::<ValueType>().unwrap(), ValueType::Bool);
        assert_eq!(" str ".parse::<ValueType>().unwrap(), ValueType::String);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = "Vector3".parse::<ValueType>().unwrap_err();
        assert!(matches!(err, DevconError::UnsupportedType(ref name) if name == "Vector3"));
    }

    #[test]
    fn type_display_names() {
        assert_eq!(ValueType::String.to_string(), "string");
        assert_eq!(ValueType::Integer.to_string(), "integer");
        assert_eq!(ValueType::Float.to_string(), "float");
        assert_eq!(ValueType::Bool.to_string(), "bool");
    }

    #[test]
    fn display_name_parses_back() {
        for ty in [
            ValueType::String,
            ValueType::Integer,
            ValueType::Float,
            ValueType::Bool,
        ] {
            assert_eq!(ty.name().parse::<ValueType>().unwrap(), ty);
        }
    }

    #[test]
    fn accessors_match_variant() {
        assert_eq!(Value::Integer(3).as_int(), Some(3));
        assert_eq!(Value::Integer(3).as_float(), None);
        assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::String("hi".into()).as_str(), Some("hi"));
        assert_eq!(Value::String("hi".into()).as_bool(), None);
    }

    #[test]
    fn value_reports_its_type() {
        assert_eq!(Value::Bool(false).value_type(), ValueType::Bool);
        assert_eq!(Value::String(String::new()).value_type(), ValueType::String);
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::String("a b".into()).to_string(), "a b");
    }

    #[test]
    fn value_type_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            ty: ValueType,
        }
        let w: Wrapper = toml::from_str("ty = \"integer\"").unwrap();
        assert_eq!(w.ty, ValueType::Integer);
    }
}
