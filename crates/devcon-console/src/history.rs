//! Submitted-line history with cyclic navigation.

/// Chronological list of submitted lines plus a navigation cursor.
///
/// The cursor rests "past the end" after every recorded line. Moving
/// before the oldest entry wraps to the newest and moving past the newest
/// wraps to the oldest.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    /// `entries.len()` means past the end.
    cursor: usize,
    limit: Option<usize>,
}

impl HistoryBuffer {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `limit` entries, dropping the
    /// oldest first. `None` keeps everything.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit: limit.map(|n| n.max(1)),
            ..Self::default()
        }
    }

    /// Append a submitted line and reset the cursor. Blank lines are not
    /// stored; returns whether the line was kept.
    pub fn record(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        self.entries.push(line.to_string());
        if let Some(limit) = self.limit
            && self.entries.len() > limit
        {
            let excess = self.entries.len() - limit;
            self.entries.drain(..excess);
        }
        self.reset_cursor();
        true
    }

    /// Step back one entry (up arrow). `None` on an empty history.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = if self.cursor == 0 {
            self.entries.len() - 1
        } else {
            self.cursor - 1
        };
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry (down arrow). `None` on an empty history.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = if self.cursor + 1 >= self.entries.len() {
            0
        } else {
            self.cursor + 1
        };
        Some(&self.entries[self.cursor])
    }

    /// Move the cursor past the newest entry.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Recorded lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
