//! Demo commands registered by the line host.
//!
//! Handlers write to a shared [`Output`] buffer that the host drains after
//! every submitted line.

use std::sync::{Arc, Mutex};

use devcon_console::CommandDescriptor;
use devcon_types::error::{DevconError, Result};
use devcon_types::value::{Value, ValueType};

/// Lines produced by command handlers, oldest first.
#[derive(Clone, Default)]
pub struct Output {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, line: impl Into<String>) -> Result<()> {
        self.lines
            .lock()
            .map_err(|_| DevconError::Command("output buffer poisoned".into()))?
            .push(line.into());
        Ok(())
    }

    /// Take every buffered line.
    pub fn drain(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(_) => Vec::new(),
        }
    }
}

fn int_arg(args: &[Value], index: usize) -> Result<i64> {
    args.get(index)
        .and_then(Value::as_int)
        .ok_or_else(|| DevconError::Command(format!("argument {index} is not an integer")))
}

/// The demo command set: `print`, `hello`, `add` and `power2`.
pub fn demo_commands(out: &Output) -> Vec<CommandDescriptor> {
    let print = {
        let out = out.clone();
        CommandDescriptor::new("print", move |args: &[Value]| {
            let text = args.first().map(ToString::to_string).unwrap_or_default();
            out.push(text)
        })
        .with_description("Echo the given text")
        .with_param("text", ValueType::String)
    };

    let hello = {
        let out = out.clone();
        CommandDescriptor::new("print_hello", move |_: &[Value]| out.push("Hello!"))
            .with_alias("hello")
            .with_description("Say hello")
    };

    let add = {
        let out = out.clone();
        CommandDescriptor::new("add", move |args: &[Value]| {
            let sum = int_arg(args, 0)?
                .checked_add(int_arg(args, 1)?)
                .ok_or_else(|| DevconError::Command("integer overflow".into()))?;
            out.push(sum.to_string())
        })
        .with_description("Add two integers")
        .with_param("a", ValueType::Integer)
        .with_param("b", ValueType::Integer)
    };

    let power2 = {
        let out = out.clone();
        CommandDescriptor::new("power2", move |args: &[Value]| {
            let x = int_arg(args, 0)? as f64;
            out.push((x * x).to_string())
        })
        .with_description("Square an integer")
        .with_param("x", ValueType::Integer)
    };

    vec![print, hello, add, power2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use devcon_console::{DispatchError, DispatchResult, Dispatcher, PreprocessorChain, Registry};

    fn run(line: &str) -> (DispatchResult, Vec<String>) {
        let out = Output::new();
        let registry = Registry::from_descriptors(demo_commands(&out));
        let chain = PreprocessorChain::new();
        let result = Dispatcher::new(&registry, &chain).dispatch(line);
        (result, out.drain())
    }

    #[test]
    fn add_prints_sum() {
        let (result, lines) = run("add 2 3");
        assert!(result.is_ok());
        assert_eq!(lines, vec!["5"]);
    }

    #[test]
    fn add_overflow_is_invocation_failure() {
        let (result, lines) = run(&format!("add {} 1", i64::MAX));
        assert!(matches!(result, Err(DispatchError::InvocationFailed { .. })));
        assert!(lines.is_empty());
    }

    #[test]
    fn print_quoted_text() {
        let (_, lines) = run("print \"hello world\"");
        assert_eq!(lines, vec!["hello world"]);
    }

    #[test]
    fn hello_is_registered_under_alias() {
        let (result, lines) = run("HELLO");
        assert!(result.is_ok());
        assert_eq!(lines, vec!["Hello!"]);
        let (result, _) = run("print_hello");
        assert!(matches!(result, Err(DispatchError::UnknownCommand { .. })));
    }

    #[test]
    fn power2_squares() {
        let (_, lines) = run("power2 7");
        assert_eq!(lines, vec!["49"]);
    }

    #[test]
    fn drain_empties_buffer() {
        let out = Output::new();
        out.push("x").unwrap();
        assert_eq!(out.drain(), vec!["x"]);
        assert!(out.drain().is_empty());
    }
}
