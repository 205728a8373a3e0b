//! Conversion of argument tokens to typed parameter values.
//!
//! Parsing is locale-invariant: `.` is the only decimal separator and digit
//! grouping characters are rejected.

use devcon_types::value::{Value, ValueType};

use crate::registry::ParameterSpec;

/// A token that could not be converted to its parameter's type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("argument {position} ({token:?}): expected {target}: {reason}")]
pub struct CoercionError {
    /// Zero-based argument position.
    pub position: usize,
    pub token: String,
    pub target: ValueType,
    pub reason: String,
}

/// Convert `token`, the argument at `position`, to `target`.
pub fn coerce(token: &str, position: usize, target: ValueType) -> Result<Value, CoercionError> {
    let fail = |reason: String| CoercionError {
        position,
        token: token.to_string(),
        target,
        reason,
    };

    match target {
        ValueType::String => Ok(Value::String(token.to_string())),
        ValueType::Integer => token
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|e| fail(e.to_string())),
        ValueType::Float => {
            if token.contains(',') {
                return Err(fail("only '.' is accepted as decimal separator".to_string()));
            }
            token
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| fail(e.to_string()))
        },
        ValueType::Bool => {
            if token.eq_ignore_ascii_case("true") {
                Ok(Value::Bool(true))
            } else if token.eq_ignore_ascii_case("false") {
                Ok(Value::Bool(false))
            } else {
                Err(fail("expected `true` or `false`".to_string()))
            }
        },
    }
}

/// Coerce each token against the parameter at the same position, left to
/// right, stopping at the first failure. Extra tokens or parameters are
/// ignored; arity is the dispatcher's concern.
pub fn coerce_all<S: AsRef<str>>(
    tokens: &[S],
    params: &[ParameterSpec],
) -> Result<Vec<Value>, CoercionError> {
    tokens
        .iter()
        .zip(params)
        .map(|(token, param)| coerce(token.as_ref(), param.position, param.value_type))
        .collect()
}
