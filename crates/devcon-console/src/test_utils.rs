//! Shared fixtures for console tests.
//!
//! Provides descriptor builders and a [`CallLog`] that records every
//! handler invocation for assertion.

use std::sync::{Arc, Mutex, Once};

use devcon_types::error::DevconError;
use devcon_types::value::{Value, ValueType};

use crate::registry::CommandDescriptor;

/// A command that accepts no arguments and does nothing.
pub fn noop(name: &str) -> CommandDescriptor {
    CommandDescriptor::new(name, |_| Ok(()))
}

/// Records the arguments of every call made through its descriptors.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<(String, Vec<Value>)>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A descriptor named `name` with the given parameters that logs its
    /// calls.
    pub fn command(&self, name: &str, params: &[(&str, ValueType)]) -> CommandDescriptor {
        let calls = Arc::clone(&self.calls);
        let owned = name.to_string();
        let mut d = CommandDescriptor::new(name, move |args: &[Value]| {
            calls
                .lock()
                .unwrap()
                .push((owned.clone(), args.to_vec()));
            Ok(())
        });
        for (param, ty) in params {
            d = d.with_param(*param, *ty);
        }
        d
    }

    /// `add(a: integer, b: integer)`.
    pub fn add(&self) -> CommandDescriptor {
        self.command("add", &[("a", ValueType::Integer), ("b", ValueType::Integer)])
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

/// A command that always signals failure.
pub fn failing(name: &str) -> CommandDescriptor {
    CommandDescriptor::new(name, |_| Err(DevconError::Command("boom".to_string())))
}

/// A command whose handler panics.
pub fn panicking(name: &str) -> CommandDescriptor {
    CommandDescriptor::new(name, |_| panic!("handler exploded"))
}

/// Process-wide logger that keeps every record for inspection.
struct CaptureLogger;

static RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Install the capturing logger (once per test binary).
pub fn capture_logs() {
    INSTALL.call_once(|| {
        log::set_logger(&CaptureLogger).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Whether a record at `level` containing `needle` has been logged. Tests
/// run in parallel, so pick a needle unique to the test.
pub fn logged(level: log::Level, needle: &str) -> bool {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .any(|(l, msg)| *l == level && msg.contains(needle))
}
