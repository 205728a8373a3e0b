//! Command descriptors and the case-insensitive command registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use devcon_types::error::Result;
use devcon_types::value::{Value, ValueType};

/// Source of registry generations, shared by every registry in the process
/// so two registries never report the same non-zero generation.
static GENERATIONS: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    GENERATIONS.fetch_add(1, Ordering::Relaxed)
}

/// Invocable handle of a command. Receives the coerced arguments in
/// declaration order.
pub type Handler = Arc<dyn Fn(&[Value]) -> Result<()> + Send + Sync>;

/// One declared parameter of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    pub value_type: ValueType,
    /// Zero-based argument position.
    pub position: usize,
}

impl fmt::Display for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value_type)
    }
}

/// Metadata and handle for a registered command.
///
/// Built once by a discovery adapter (or by hand) and never mutated after
/// it has been handed to a [`Registry`].
#[derive(Clone)]
pub struct CommandDescriptor {
    name: String,
    alias_of: Option<String>,
    description: String,
    parameters: Vec<ParameterSpec>,
    handler: Handler,
}

impl CommandDescriptor {
    /// Describe a command with no parameters.
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[Value]) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            alias_of: None,
            description: String::new(),
            parameters: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    /// Register the command under `alias` instead of its own name. The
    /// original name is kept in [`alias_of`](Self::alias_of).
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let original = std::mem::replace(&mut self.name, alias.into());
        if self.alias_of.is_none() {
            self.alias_of = Some(original);
        }
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a parameter; its position is the next free index.
    pub fn with_param(mut self, name: impl Into<String>, value_type: ValueType) -> Self {
        let position = self.parameters.len();
        self.parameters.push(ParameterSpec {
            name: name.into(),
            value_type,
            position,
        });
        self
    }

    /// Append a parameter whose type is named by a discovery source
    /// (e.g. `"int"`, `"Single"`, `"bool"`). Unsupported type names are
    /// rejected here so they can never reach dispatch.
    pub fn with_param_type_name(self, name: impl Into<String>, type_name: &str) -> Result<Self> {
        let value_type = type_name.parse::<ValueType>()?;
        Ok(self.with_param(name, value_type))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias_of(&self) -> Option<&str> {
        self.alias_of.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Number of arguments the command requires.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Human-readable signature, e.g. `add (a: integer, b: integer)`.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(ToString::to_string).collect();
        format!("{} ({})", self.name, params.join(", "))
    }

    /// Call the handler with already coerced arguments.
    pub fn invoke(&self, args: &[Value]) -> Result<()> {
        (self.handler)(args)
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("alias_of", &self.alias_of)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Table of commands keyed by case-insensitive name.
///
/// Iteration follows registration order. Rebuilding the table bumps
/// [`generation`](Self::generation) so views derived from it can tell they
/// are stale.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<CommandDescriptor>,
    index: HashMap<String, usize>,
    generation: u64,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a descriptor table.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = CommandDescriptor>) -> Self {
        let mut reg = Self::new();
        reg.register(descriptors);
        reg
    }

    /// Replace the whole table with `descriptors`.
    ///
    /// On a case-insensitive name collision the later descriptor wins and
    /// takes over the slot of the earlier one. Descriptors whose name is
    /// empty or contains whitespace can never be typed and are skipped.
    pub fn register(&mut self, descriptors: impl IntoIterator<Item = CommandDescriptor>) {
        self.entries.clear();
        self.index.clear();
        for descriptor in descriptors {
            self.insert(descriptor);
        }
        self.generation = next_generation();
        log::debug!("Registered {} console commands", self.entries.len());
    }

    fn insert(&mut self, descriptor: CommandDescriptor) {
        let name = descriptor.name();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            log::warn!("Skipping command with untypeable name {name:?}");
            return;
        }
        let key = name.to_lowercase();
        match self.index.get(&key) {
            Some(&slot) => {
                log::debug!(
                    "Command `{}` replaces `{}`",
                    descriptor.name(),
                    self.entries[slot].name()
                );
                self.entries[slot] = descriptor;
            },
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(descriptor);
            },
        }
    }

    /// Look up a command by name, ignoring case.
    pub fn resolve(&self, name: &str) -> Option<&CommandDescriptor> {
        self.index
            .get(&name.to_lowercase())
            .map(|&slot| &self.entries[slot])
    }

    /// All `(name, descriptor)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CommandDescriptor)> {
        self.entries.iter().map(|d| (d.name(), d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every command (console teardown).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.generation = next_generation();
    }

    /// Stamp renewed by every rebuild or clear. Unique across registries;
    /// `0` means never built.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
