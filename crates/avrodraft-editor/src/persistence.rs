use crate::snapshot::EditorSnapshot;

/// Whether the current document may be replaced without losing edits.
///
/// A read-only projection of the pristine flag. The file-I/O
/// collaborator must consult this before opening another document and
/// surface a conflict message instead of silently discarding changes.
pub fn can_replace_document(snapshot: &EditorSnapshot) -> bool {
    snapshot.pristine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::store::EditorStateStore;

    #[test]
    fn blank_document_is_replaceable() {
        assert!(can_replace_document(&EditorSnapshot::blank()));
    }

    #[test]
    fn edits_block_replacement_until_save() {
        let mut store = EditorStateStore::new();

        let snapshot = store.apply(Command::LoadDocument {
            path: "contact.avsc".into(),
            text: r#""string""#.to_string(),
        });
        assert!(can_replace_document(&snapshot));

        let snapshot = store.apply(Command::EditSourceText {
            text: r#""long""#.to_string(),
        });
        assert!(!can_replace_document(&snapshot));

        let snapshot = store.apply(Command::AcknowledgeSave);
        assert!(can_replace_document(&snapshot));
    }

    #[test]
    fn failed_edit_also_blocks_replacement() {
        let mut store = EditorStateStore::new();
        let snapshot = store.apply(Command::EditSourceText {
            text: "{broken".to_string(),
        });
        assert!(!can_replace_document(&snapshot));
    }
}
