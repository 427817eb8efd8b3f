use indexmap::IndexMap;

use super::node_path::NodePath;
use super::source_range::SourceRange;

/// Text spans recorded for one node of the structured value.
///
/// `key_range` covers the object key that introduced the node (including
/// quotes) and is `None` for the root and for array elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMapEntry {
    pub key_range: Option<SourceRange>,
    pub value_range: SourceRange,
}

impl SourceMapEntry {
    pub fn new(key_range: Option<SourceRange>, value_range: SourceRange) -> Self {
        Self {
            key_range,
            value_range,
        }
    }
}

/// Index from node paths to the text spans that produced them.
///
/// Built once per successful parse. Its domain is exactly the set of
/// paths reachable in the `Value` it was built with; it is a derived
/// artifact and is never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceMap {
    entries: IndexMap<NodePath, SourceMapEntry>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the spans for `path`. Returns the previous entry if the
    /// path was already present (which a well-formed build never does).
    pub fn insert(&mut self, path: NodePath, entry: SourceMapEntry) -> Option<SourceMapEntry> {
        self.entries.insert(path, entry)
    }

    pub fn get(&self, path: &NodePath) -> Option<&SourceMapEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &NodePath) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodePath, &SourceMapEntry)> {
        self.entries.iter()
    }

    /// The set of paths this map covers, in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &NodePath> {
        self.entries.keys()
    }
}
