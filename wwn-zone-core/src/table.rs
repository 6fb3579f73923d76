use indexmap::IndexMap;
use serde::Serialize;

/// One `<WWN> <Alias>` pair read from an input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WwnEntry {
    /// Port world wide name, kept exactly as written.
    pub wwn: String,
    /// Operator-facing alias used to derive zone names.
    pub alias: String,
}

impl WwnEntry {
    /// Create a new entry from a WWN and its alias.
    pub fn new(wwn: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            wwn: wwn.into(),
            alias: alias.into(),
        }
    }
}

/// WWN to alias mapping that enumerates in first-seen order.
///
/// Inserting a WWN that is already present replaces its alias but keeps the
/// original position, so output order depends only on where each WWN first
/// appeared in the source list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WwnTable {
    entries: IndexMap<String, String>,
}

impl WwnTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the alias it replaced if the WWN was already present.
    pub fn insert(&mut self, entry: WwnEntry) -> Option<String> {
        self.entries.insert(entry.wwn, entry.alias)
    }

    /// Return the alias recorded for `wwn`.
    pub fn get(&self, wwn: &str) -> Option<&str> {
        self.entries.get(wwn).map(String::as_str)
    }

    /// Return `true` if the table holds `wwn`.
    pub fn contains(&self, wwn: &str) -> bool {
        self.entries.contains_key(wwn)
    }

    /// Number of distinct WWNs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if no entries were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(wwn, alias)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(wwn, alias)| (wwn.as_str(), alias.as_str()))
    }

    /// Iterate WWNs in first-seen order.
    pub fn wwns(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<WwnEntry> for WwnTable {
    fn from_iter<I: IntoIterator<Item = WwnEntry>>(iter: I) -> Self {
        let mut table = WwnTable::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

impl Extend<WwnEntry> for WwnTable {
    fn extend<I: IntoIterator<Item = WwnEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}
