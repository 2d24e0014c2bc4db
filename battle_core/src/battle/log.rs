//! Battle log - ordered narrative lines tagged with the turn they happened on

use serde::{Deserialize, Serialize};

/// One narrative line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn counter when the line was written (0 = before the first turn)
    pub turn: u32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: u32, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(turn, "{}", text);
        self.entries.push(LogEntry { turn, text });
    }

    pub fn extend(&mut self, turn: u32, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            self.push(turn, line);
        }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Plain text lines, in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().any(|l| l.contains(needle))
    }
}
