//! Console input events.
//!
//! Hosts map their native key, button and pointer input to these events.
//! The console core never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A single interaction with the console, delivered once per UI update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsoleEvent {
    /// Flip console visibility (toggle key, multi-touch gesture).
    Toggle,
    /// Make the console visible.
    Show,
    /// Hide the console.
    Hide,
    /// Character typed into the input field.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// Replace the whole input field (paste, host-side editing widget).
    SetInput(String),
    /// Recall the previous history entry (up arrow).
    HistoryUp,
    /// Recall the next history entry (down arrow).
    HistoryDown,
    /// Return / keypad enter: execute, record, clear.
    Submit,
    /// The on-screen execute button: execute without touching history.
    Execute,
    /// Replace the input with the first suggestion (tab).
    AcceptSuggestion,
    /// A suggestion in the list was clicked.
    SelectSuggestion(usize),
}

impl ConsoleEvent {
    /// Whether the event is processed while the console is hidden.
    pub fn applies_when_hidden(&self) -> bool {
        matches!(self, ConsoleEvent::Toggle | ConsoleEvent::Show | ConsoleEvent::Hide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_events_apply_when_hidden() {
        assert!(ConsoleEvent::Toggle.applies_when_hidden());
        assert!(ConsoleEvent::Show.applies_when_hidden());
        assert!(ConsoleEvent::Hide.applies_when_hidden());
    }

    #[test]
    fn editing_events_need_visible_console() {
        let events = [
            ConsoleEvent::TextInput('a'),
            ConsoleEvent::Backspace,
            ConsoleEvent::SetInput("add 1 2".into()),
            ConsoleEvent::HistoryUp,
            ConsoleEvent::HistoryDown,
            ConsoleEvent::Submit,
            ConsoleEvent::Execute,
            ConsoleEvent::AcceptSuggestion,
            ConsoleEvent::SelectSuggestion(0),
        ];
        for e in events {
            assert!(!e.applies_when_hidden(), "{e:?}");
        }
    }

    #[test]
    fn text_input_unicode() {
        let e = ConsoleEvent::TextInput('\u{1F600}');
        if let ConsoleEvent::TextInput(ch) = e {
            assert_eq!(ch, '\u{1F600}');
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn select_suggestion_differs_by_index() {
        assert_ne!(
            ConsoleEvent::SelectSuggestion(0),
            ConsoleEvent::SelectSuggestion(1)
        );
    }

    #[test]
    fn event_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Binding {
            event: ConsoleEvent,
        }
        let b: Binding = toml::from_str("event = \"HistoryUp\"").unwrap();
        assert_eq!(b.event, ConsoleEvent::HistoryUp);
    }
}
