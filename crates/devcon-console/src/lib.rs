//! Command console core.
//!
//! The console is a registry-based dispatch system. Commands are described
//! by a [`CommandDescriptor`] (name, typed parameters, handler) and handed
//! to a [`Registry`]. Raw input lines pass through the preprocessor chain,
//! are tokenized, resolved case-insensitively, coerced to the declared
//! parameter types, and invoked. Every failure comes back as a typed
//! [`DispatchResult`]; nothing escapes into the host.
//!
//! [`Console`] bundles one registry with its history, autocomplete and
//! preprocessors and reduces host input events against them.

pub mod coerce;
pub mod complete;
pub mod console;
pub mod dispatch;
pub mod history;
pub mod preprocess;
pub mod registry;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use coerce::{CoercionError, coerce, coerce_all};
pub use complete::{Candidate, Completer};
pub use console::{Console, Reporter};
pub use dispatch::{DispatchError, DispatchOutcome, DispatchResult, Dispatcher};
pub use history::HistoryBuffer;
pub use preprocess::{Preprocessor, PreprocessorChain, PreprocessorHandle};
pub use registry::{CommandDescriptor, Handler, ParameterSpec, Registry};
pub use tokenizer::tokenize;

pub use devcon_types::config::ConsoleConfig;
pub use devcon_types::error::{DevconError, Result};
pub use devcon_types::input::ConsoleEvent;
pub use devcon_types::value::{Value, ValueType};
