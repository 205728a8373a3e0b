//! Console session: one registry plus the input state around it.
//!
//! The host calls [`Console::handle_event`] once per interaction. The
//! console never draws anything and never blocks; dispatch results go to
//! the configured [`Reporter`].

use devcon_types::config::ConsoleConfig;
use devcon_types::input::ConsoleEvent;

use crate::complete::{Candidate, Completer};
use crate::dispatch::{DispatchOutcome, DispatchResult, Dispatcher};
use crate::history::HistoryBuffer;
use crate::preprocess::{PreprocessorChain, PreprocessorHandle};
use crate::registry::{CommandDescriptor, Registry};

/// Output sink for dispatch results.
pub type Reporter = Box<dyn FnMut(&DispatchResult) + Send>;

/// Default sink. Failures are already logged by the dispatcher.
fn log_result(result: &DispatchResult) {
    if let Ok(DispatchOutcome::Success { command }) = result {
        log::info!("`{command}` succeeded");
    }
}

/// A console session.
///
/// Sessions share nothing: each owns its registry, preprocessors, history
/// and suggestion cache. A session is `Send`, so threaded hosts can keep it
/// behind their own lock.
pub struct Console {
    config: ConsoleConfig,
    registry: Registry,
    preprocessors: PreprocessorChain,
    history: HistoryBuffer,
    completer: Completer,
    input: String,
    visible: bool,
    reporter: Reporter,
}

impl Console {
    /// Create a session with an empty registry.
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            history: HistoryBuffer::with_limit(config.history_limit),
            visible: config.start_visible,
            config,
            registry: Registry::new(),
            preprocessors: PreprocessorChain::new(),
            completer: Completer::new(),
            input: String::new(),
            reporter: Box::new(log_result),
        }
    }

    /// Create a session whose registry is built from `descriptors`.
    pub fn with_commands(
        config: ConsoleConfig,
        descriptors: impl IntoIterator<Item = CommandDescriptor>,
    ) -> Self {
        let mut console = Self::new(config);
        console.register_commands(descriptors);
        console
    }

    /// Rebuild the registry from `descriptors`, replacing every command.
    pub fn register_commands(&mut self, descriptors: impl IntoIterator<Item = CommandDescriptor>) {
        self.registry.register(descriptors);
        log::info!("Console ready with {} commands", self.registry.len());
    }

    /// Route dispatch results to `reporter` instead of the default sink.
    pub fn set_reporter(&mut self, reporter: impl FnMut(&DispatchResult) + Send + 'static) {
        self.reporter = Box::new(reporter);
    }

    /// Register an input preprocessor. `false` if it was already present.
    pub fn add_preprocessor(&mut self, stage: PreprocessorHandle) -> bool {
        self.preprocessors.add(stage)
    }

    /// Unregister an input preprocessor. `false` if it was not present.
    pub fn remove_preprocessor(&mut self, stage: &PreprocessorHandle) -> bool {
        self.preprocessors.remove(stage)
    }

    /// Run one raw line and report the result.
    pub fn dispatch(&mut self, raw: &str) -> DispatchResult {
        let result = Dispatcher::new(&self.registry, &self.preprocessors).dispatch(raw);
        (self.reporter)(&result);
        result
    }

    /// Suggestions for `partial`.
    pub fn complete(&mut self, partial: &str) -> &[Candidate] {
        self.completer.complete(&self.registry, partial)
    }

    /// Suggestions for the current input; empty when the list is disabled.
    pub fn suggestions(&mut self) -> &[Candidate] {
        if !self.config.show_complete_list {
            return &[];
        }
        self.completer.complete(&self.registry, &self.input)
    }

    /// Apply one host event. Returns the dispatch result when the event
    /// executed the input.
    pub fn handle_event(&mut self, event: &ConsoleEvent) -> Option<DispatchResult> {
        if !self.visible && !event.applies_when_hidden() {
            return None;
        }

        match event {
            ConsoleEvent::Toggle => self.visible = !self.visible,
            ConsoleEvent::Show => self.visible = true,
            ConsoleEvent::Hide => self.visible = false,
            ConsoleEvent::TextInput(ch) => self.input.push(*ch),
            ConsoleEvent::Backspace => {
                self.input.pop();
            },
            ConsoleEvent::SetInput(text) => self.input.clone_from(text),
            ConsoleEvent::HistoryUp => {
                if let Some(line) = self.history.previous() {
                    self.input = line.to_string();
                }
            },
            ConsoleEvent::HistoryDown => {
                if let Some(line) = self.history.next() {
                    self.input = line.to_string();
                }
            },
            ConsoleEvent::Submit => {
                let line = std::mem::take(&mut self.input);
                let result = self.dispatch(&line);
                self.history.record(&line);
                if self.config.hide_on_submit {
                    self.visible = false;
                }
                return Some(result);
            },
            ConsoleEvent::Execute => {
                let line = self.input.clone();
                return Some(self.dispatch(&line));
            },
            ConsoleEvent::AcceptSuggestion => {
                if let Some(name) = self.suggestions().first().map(|c| c.name.clone()) {
                    self.input = name;
                }
            },
            ConsoleEvent::SelectSuggestion(index) => {
                if self.config.show_complete_list {
                    self.completer.complete(&self.registry, &self.input);
                    if let Some(name) = self.completer.select(*index, &self.input) {
                        self.input = name;
                    }
                }
            },
        }
        None
    }

    /// Drop every command, preprocessor and history entry.
    pub fn teardown(&mut self) {
        self.registry.clear();
        self.preprocessors.clear();
        self.history.clear();
        self.completer.invalidate();
        self.input.clear();
        self.visible = false;
        log::info!("Console torn down");
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Current contents of the input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
