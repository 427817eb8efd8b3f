use avrodraft_core::types::{NodePath, SourceMap, SourceRange};

use crate::error::QueryError;

/// Bidirectional queries over one parse's source map.
///
/// A borrowed view with the same lifetime as the snapshot that owns the
/// map; both operations are deterministic and side-effect free.
#[derive(Debug, Clone, Copy)]
pub struct SourceMapIndex<'a> {
    map: &'a SourceMap,
}

impl<'a> SourceMapIndex<'a> {
    pub fn new(map: &'a SourceMap) -> Self {
        Self { map }
    }

    /// The text range of the node at `path`.
    ///
    /// # Errors
    ///
    /// `QueryError::PathNotFound` if the path is not in the map.
    pub fn range_for(&self, path: &NodePath) -> Result<SourceRange, QueryError> {
        self.map
            .get(path)
            .map(|entry| entry.value_range)
            .ok_or_else(|| QueryError::PathNotFound { path: path.clone() })
    }

    /// The path of the innermost node whose range contains the position.
    ///
    /// Nested containment is expected; the smallest byte span wins. A
    /// hit inside an entry's key range resolves to the same path as a
    /// hit in its value range (key and value belong to one logical
    /// entry). Returns `None` when no range contains the position.
    pub fn path_at(&self, line: u32, column: u32) -> Option<NodePath> {
        let mut best: Option<(usize, &NodePath)> = None;

        for (path, entry) in self.map.iter() {
            let hit_len = if entry.value_range.contains(line, column) {
                entry.value_range.len()
            } else if let Some(key_range) = entry.key_range.filter(|r| r.contains(line, column)) {
                key_range.len()
            } else {
                continue;
            };

            // Strict less keeps the first entry on equal spans, so the
            // result is deterministic for a given map.
            if best.map_or(true, |(len, _)| hit_len < len) {
                best = Some((hit_len, path));
            }
        }

        best.map(|(_, path)| path.clone())
    }
}
