// SPDX-License-Identifier: MIT

//! Word list domain collection.

/// Ordered, append-only collection of unique words for one session.
///
/// Insertion order is preserved for display; exports take a sorted snapshot
/// via [`WordList::sorted()`] without disturbing that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<String>,
}

impl WordList {
    /// Append `entry` unless it is already present.
    ///
    /// Returns `true` when the entry was newly inserted.
    pub fn insert(&mut self, entry: String) -> bool {
        if self.entries.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Current entries in insertion order.
    #[allow(dead_code)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted snapshot for export. Case-sensitive byte order, so uppercase
    /// entries sort before lowercase ones.
    pub fn sorted(&self) -> Vec<String> {
        let mut snapshot = self.entries.clone();
        snapshot.sort_unstable();
        snapshot
    }
}
