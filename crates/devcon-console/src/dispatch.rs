//! Resolution, validation, coercion and invocation of input lines.

use std::panic::{self, AssertUnwindSafe};

use crate::coerce::{CoercionError, coerce_all};
use crate::preprocess::PreprocessorChain;
use crate::registry::Registry;
use crate::tokenizer::tokenize;

/// A dispatch that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The command ran to completion.
    Success { command: String },
    /// Blank input, a preprocessor veto, or nothing to tokenize.
    NoOp,
}

/// Why a line was not (successfully) executed. None of these stop the
/// console; they are reported and the session carries on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
    #[error("command `{name}` is not registered")]
    UnknownCommand { name: String },

    #[error("command `{command}` requires {expected} args, while {actual} were provided")]
    ArityMismatch {
        command: String,
        expected: usize,
        actual: usize,
    },

    #[error("command `{command}`: {error}")]
    CoercionFailed {
        command: String,
        #[source]
        error: CoercionError,
    },

    #[error("command `{command}` failed: {cause}")]
    InvocationFailed { command: String, cause: String },
}

/// Result of dispatching one raw input line.
pub type DispatchResult = Result<DispatchOutcome, DispatchError>;

/// Runs raw input against a registry.
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    preprocessors: &'a PreprocessorChain,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a Registry, preprocessors: &'a PreprocessorChain) -> Self {
        Self {
            registry,
            preprocessors,
        }
    }

    /// Preprocess, tokenize, resolve, check arity, coerce and invoke `raw`.
    ///
    /// Every outcome is returned as a value; malformed input and failing
    /// or panicking handlers never propagate into the caller.
    pub fn dispatch(&self, raw: &str) -> DispatchResult {
        if raw.trim().is_empty() {
            return Ok(DispatchOutcome::NoOp);
        }

        let Some(line) = self.preprocessors.run(raw) else {
            log::debug!("Input vetoed by preprocessor");
            return Ok(DispatchOutcome::NoOp);
        };
        if line.trim().is_empty() {
            return Ok(DispatchOutcome::NoOp);
        }

        let tokens = tokenize(&line);
        if tokens.is_empty() {
            return Ok(DispatchOutcome::NoOp);
        }
        self.dispatch_tokens(&tokens)
    }

    /// Resolve and run an already tokenized line. `tokens[0]` is the command
    /// name; an empty slice is a no-op.
    /// Failures are logged at `warn`.
    pub fn dispatch_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> DispatchResult {
        let result = self.run_tokens(tokens);
        if let Err(e) = &result {
            log::warn!("{e}");
        }
        result
    }

    fn run_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> DispatchResult {
        let Some((name, args)) = tokens.split_first() else {
            return Ok(DispatchOutcome::NoOp);
        };
        let name = name.as_ref();

        let Some(descriptor) = self.registry.resolve(name) else {
            return Err(DispatchError::UnknownCommand {
                name: name.to_string(),
            });
        };
        let command = descriptor.name().to_string();

        if args.len() != descriptor.arity() {
            return Err(DispatchError::ArityMismatch {
                command,
                expected: descriptor.arity(),
                actual: args.len(),
            });
        }

        let values = match coerce_all(args, descriptor.parameters()) {
            Ok(values) => values,
            Err(error) => return Err(DispatchError::CoercionFailed { command, error }),
        };

        match panic::catch_unwind(AssertUnwindSafe(|| descriptor.invoke(&values))) {
            Ok(Ok(())) => {
                log::debug!("Executed `{command}` with {} args", values.len());
                Ok(DispatchOutcome::Success { command })
            },
            Ok(Err(e)) => Err(DispatchError::InvocationFailed {
                command,
                cause: e.to_string(),
            }),
            Err(payload) => Err(DispatchError::InvocationFailed {
                command,
                cause: panic_message(payload.as_ref()),
            }),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}
