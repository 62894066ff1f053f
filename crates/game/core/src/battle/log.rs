//! Append-only battle narration.

/// Ordered narration shown to the player.
///
/// The battle manager only appends. Frontends read it for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattleLog {
    entries: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(target: "battle_log", "{line}");
        self.entries.push(line);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// The newest `limit` lines, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().take(limit).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Lines appended at or after `index`, oldest first.
    pub fn since(&self, index: usize) -> &[String] {
        self.entries.get(index..).unwrap_or(&[])
    }
}
