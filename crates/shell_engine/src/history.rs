use std::collections::HashSet;

/// Submitted lines plus a navigation cursor.
///
/// The cursor ranges over `[0, len]`; `len` means "not navigating".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `line` and stops navigating.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    /// Moves one entry back. Returns `None` when history is empty.
    pub fn up(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        Some(self.current())
    }

    /// Moves one entry forward; past the newest entry yields an empty line.
    /// Returns `None` when history is empty.
    pub fn down(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1).min(self.entries.len());
        Some(self.current())
    }

    fn current(&self) -> String {
        self.entries.get(self.cursor).cloned().unwrap_or_default()
    }

    /// Whether the cursor points at a stored entry.
    pub fn is_navigating(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Stored lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Up to `limit` distinct non-empty lines, most recent first.
    pub fn recent(&self, limit: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .rev()
            .filter(|line| !line.is_empty())
            .filter(|line| seen.insert(line.as_str()))
            .take(limit)
            .cloned()
            .collect()
    }
}
