//! Autocomplete suggestions for partial input.

use crate::registry::{CommandDescriptor, Registry};

/// One suggestion in the autocomplete list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Command name that replaces the input when the candidate is chosen.
    pub name: String,
    /// Display text: the name followed by the typed parameter list.
    pub label: String,
}

impl Candidate {
    fn from_descriptor(descriptor: &CommandDescriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            label: descriptor.signature(),
        }
    }
}

/// Whether `name` is suggested for `partial`.
///
/// A single whitespace character matches everything (the field has been
/// touched but nothing typed yet). Otherwise the text up to the first
/// whitespace must prefix the name, ignoring case.
fn matches(partial: &str, name: &str) -> bool {
    let mut chars = partial.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return false,
        (Some(c), None) if c.is_whitespace() => return true,
        _ => {},
    }
    let prefix = partial
        .trim_start()
        .split(char::is_whitespace)
        .next()
        .unwrap_or_default();
    name.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Memoized suggestion list.
///
/// The list is rebuilt only when the input changes (ignoring case) or the
/// registry is rebuilt, so polling it once per frame is cheap and the
/// order never flickers.
#[derive(Debug, Default)]
pub struct Completer {
    cached_input: Option<String>,
    cached_generation: u64,
    candidates: Vec<Candidate>,
}

impl Completer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggestions for `partial`, in registry order.
    pub fn complete(&mut self, registry: &Registry, partial: &str) -> &[Candidate] {
        let key = partial.to_lowercase();
        let stale = self.cached_input.as_deref() != Some(key.as_str())
            || self.cached_generation != registry.generation();
        if stale {
            self.candidates = registry
                .entries()
                .filter(|(name, _)| matches(partial, name))
                .map(|(_, descriptor)| Candidate::from_descriptor(descriptor))
                .collect();
            self.cached_input = Some(key);
            self.cached_generation = registry.generation();
        }
        &self.candidates
    }

    /// The most recently computed suggestions.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The suggestion taken by the "accept first" control.
    pub fn first(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Input after the suggestion at `index` is clicked: the candidate name,
    /// unless `input` already starts with it, in which case typed arguments
    /// are kept and `None` is returned.
    pub fn select(&self, index: usize, input: &str) -> Option<String> {
        let candidate = self.candidates.get(index)?;
        if input.to_lowercase().starts_with(&candidate.name.to_lowercase()) {
            return None;
        }
        Some(candidate.name.clone())
    }

    /// Forget the cached list.
    pub fn invalidate(&mut self) {
        self.cached_input = None;
        self.candidates.clear();
    }
}
