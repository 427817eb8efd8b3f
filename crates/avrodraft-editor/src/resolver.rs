use avrodraft_core::types::{NodePath, SourceRange};

use crate::error::QueryError;
use crate::index::SourceMapIndex;
use crate::snapshot::EditorSnapshot;

/// Cross-representation position queries against a fixed snapshot.
///
/// Lets a cursor in the schema source highlight the corresponding node
/// in the structured view and vice versa. Never mutates the snapshot,
/// so it is safe to use from any reader holding one.
#[derive(Debug, Clone, Copy)]
pub struct PositionResolver<'a> {
    snapshot: &'a EditorSnapshot,
}

impl<'a> PositionResolver<'a> {
    pub fn new(snapshot: &'a EditorSnapshot) -> Self {
        Self { snapshot }
    }

    fn index(&self) -> Result<SourceMapIndex<'a>, QueryError> {
        self.snapshot
            .schema
            .value
            .parsed
            .as_ref()
            .map(|parsed| SourceMapIndex::new(&parsed.source_map))
            .ok_or(QueryError::NoParsedValue)
    }

    /// The path of the node enclosing the cursor position.
    pub fn source_position_to_path(&self, line: u32, column: u32) -> Result<NodePath, QueryError> {
        self.index()?
            .path_at(line, column)
            .ok_or(QueryError::NoNodeAtPosition { line, column })
    }

    /// The canonical text range of the node at `path`.
    pub fn path_to_source_range(&self, path: &NodePath) -> Result<SourceRange, QueryError> {
        self.index()?.range_for(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::store::EditorStateStore;

    fn snapshot_with(source: &str) -> std::sync::Arc<EditorSnapshot> {
        let mut store = EditorStateStore::new();
        store.apply(Command::EditSourceText {
            text: source.to_string(),
        })
    }

    #[test]
    fn resolves_position_to_path_and_back() {
        let source = r#"{"type": "record", "name": "A", "fields": []}"#;
        let snapshot = snapshot_with(source);
        let resolver = PositionResolver::new(&snapshot);

        let bracket_column = source.find('[').unwrap() as u32 + 1;
        let path = resolver.source_position_to_path(1, bracket_column).unwrap();
        assert_eq!(path.to_string(), "/fields");

        let range = resolver.path_to_source_range(&path).unwrap();
        assert_eq!(&source[range.start.offset..range.end.offset], "[]");
    }

    #[test]
    fn no_parsed_value_on_blank_snapshot() {
        let snapshot = EditorSnapshot::blank();
        let resolver = PositionResolver::new(&snapshot);
        assert_eq!(
            resolver.source_position_to_path(1, 1),
            Err(QueryError::NoParsedValue)
        );
        assert_eq!(
            resolver.path_to_source_range(&NodePath::root()),
            Err(QueryError::NoParsedValue)
        );
    }

    #[test]
    fn position_outside_the_document() {
        let snapshot = snapshot_with(r#"{"type": "array", "items": "int"}"#);
        let resolver = PositionResolver::new(&snapshot);
        assert_eq!(
            resolver.source_position_to_path(5, 1),
            Err(QueryError::NoNodeAtPosition { line: 5, column: 1 })
        );
    }

    #[test]
    fn queries_keep_working_against_a_stale_snapshot() {
        let old_source = r#"{"type": "array", "items": "int"}"#;
        let mut store = EditorStateStore::new();
        let old = store.apply(Command::EditSourceText {
            text: old_source.to_string(),
        });
        store.apply(Command::EditSourceText {
            text: r#"{"type": "map", "values": "long"}"#.to_string(),
        });

        // The old snapshot is immutable; the resolver still answers
        // from the state it captured.
        let resolver = PositionResolver::new(&old);
        let column = old_source.find(r#""int""#).unwrap() as u32 + 1;
        let path = resolver.source_position_to_path(1, column).unwrap();
        assert_eq!(path.to_string(), "/items");
    }
}
