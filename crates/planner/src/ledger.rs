use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A rolling window of recently used item names, oldest first.
///
/// The ledger is what keeps regenerations varied: freshly drawn names are
/// excluded from later draws while they sit in the window. It is bounded to
/// the most recent `window` entries, but only [`truncate_to_window`] enforces
/// the bound; during a generation pass the working copy is allowed to grow
/// past it so every pick in the pass counts against the ones after it.
///
/// Serializes as a bare array of names, the shape the history has always been
/// persisted in.
///
/// [`truncate_to_window`]: HistoryLedger::truncate_to_window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    entries: Vec<String>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        HistoryLedger::default()
    }

    pub fn from_names(names: Vec<String>) -> Self {
        HistoryLedger { entries: names }
    }

    /// Record one used name at the newest end.
    pub fn push(&mut self, name: impl Into<String>) {
        self.entries.push(name.into());
    }

    /// Record a sequence of used names in order.
    pub fn extend<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.entries.extend(names);
    }

    /// All entries, oldest first.
    pub fn names(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|n| n == name)
    }

    /// The most recent `window` entries, oldest first.
    pub fn window(&self, window: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(window);
        &self.entries[start..]
    }

    /// Every entry as a set, for excluding recent names from a draw.
    pub fn exclusion_set(&self) -> HashSet<&str> {
        self.entries.iter().map(String::as_str).collect()
    }

    /// Drop the oldest entries until at most `window` remain.
    pub fn truncate_to_window(&mut self, window: usize) {
        let len = self.entries.len();
        if len > window {
            self.entries.drain(..len - window);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_of(names: &[&str]) -> HistoryLedger {
        HistoryLedger::from_names(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut ledger = HistoryLedger::new();
        ledger.push("Oatmeal");
        ledger.push("Ramen");
        ledger.push("Tacos");
        assert_eq!(ledger.names(), ["Oatmeal", "Ramen", "Tacos"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn truncate_drops_oldest_first() {
        let mut ledger = ledger_of(&["a", "b", "c", "d", "e"]);
        ledger.truncate_to_window(3);
        assert_eq!(ledger.names(), ["c", "d", "e"]);

        // Already within the bound: untouched.
        ledger.truncate_to_window(10);
        assert_eq!(ledger.names(), ["c", "d", "e"]);
    }

    #[test]
    fn window_returns_most_recent_entries() {
        let ledger = ledger_of(&["a", "b", "c", "d"]);
        assert_eq!(ledger.window(2), ["c", "d"]);
        assert_eq!(ledger.window(0), [] as [&str; 0]);
        assert_eq!(ledger.window(99), ["a", "b", "c", "d"]);
    }

    #[test]
    fn exclusion_set_covers_all_entries() {
        let ledger = ledger_of(&["a", "b", "a"]);
        let set = ledger.exclusion_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(set.contains("b"));
        assert!(!set.contains("c"));
    }

    #[test]
    fn serializes_as_bare_array() {
        let ledger = ledger_of(&["Oatmeal", "Ramen"]);
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"["Oatmeal","Ramen"]"#);
        let back: HistoryLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }
}
