//! Pluggable input transforms applied before tokenization.

use std::sync::Arc;

/// A transform of raw console input. Returning `None` vetoes the line:
/// later stages are skipped and nothing is dispatched.
pub trait Preprocessor: Send + Sync {
    fn transform(&self, input: &str) -> Option<String>;
}

impl<F> Preprocessor for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn transform(&self, input: &str) -> Option<String> {
        self(input)
    }
}

/// Shared handle to a registered preprocessor. Identity of the handle (not
/// of the function behind it) decides membership in a chain.
pub type PreprocessorHandle = Arc<dyn Preprocessor>;

/// Ordered set of preprocessors.
///
/// Stages run in registration order. A stage can only be added once;
/// adding it again or removing one that is not present does nothing.
#[derive(Default, Clone)]
pub struct PreprocessorChain {
    stages: Vec<PreprocessorHandle>,
}

impl PreprocessorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage. Returns `false` if it was already registered.
    pub fn add(&mut self, stage: PreprocessorHandle) -> bool {
        if self.contains(&stage) {
            return false;
        }
        self.stages.push(stage);
        true
    }

    /// Remove a stage. Returns `false` if it was not registered.
    pub fn remove(&mut self, stage: &PreprocessorHandle) -> bool {
        let before = self.stages.len();
        self.stages.retain(|s| !Arc::ptr_eq(s, stage));
        self.stages.len() != before
    }

    pub fn contains(&self, stage: &PreprocessorHandle) -> bool {
        self.stages.iter().any(|s| Arc::ptr_eq(s, stage))
    }

    /// Remove every stage.
    pub fn clear(&mut self) {
        self.stages.clear();
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Feed `input` through every stage in turn. `None` as soon as one
    /// stage vetoes.
    pub fn run(&self, input: &str) -> Option<String> {
        let mut result = input.to_string();
        for stage in &self.stages {
            result = stage.transform(&result)?;
        }
        Some(result)
    }
}

impl std::fmt::Debug for PreprocessorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreprocessorChain")
            .field("stages", &self.stages.len())
            .finish()
    }
}
