//! End-to-end checks of the synchronization engine: parsing, the source
//! map, the command state machine, and position resolution working
//! together the way the editor uses them.

use avrodraft_core::types::NodePath;
use avrodraft_editor::{can_replace_document, Command, EditorStateStore, PositionResolver};
use avrodraft_parse::{parse, parse_schema, print};

const RECORD: &str = r#"{"type":"record","name":"A","fields":[]}"#;
const TRUNCATED: &str = r#"{"type":"record","name":"A","fields":[}"#;

#[test]
fn source_map_domain_matches_value_exactly() {
    let parsed = parse_schema(RECORD).unwrap();
    let mut value_paths = parsed.value.paths();
    let mut map_paths: Vec<NodePath> = parsed.source_map.paths().cloned().collect();
    value_paths.sort();
    map_paths.sort();
    assert_eq!(value_paths, map_paths);
}

#[test]
fn parsing_twice_is_identical() {
    assert_eq!(parse_schema(RECORD).unwrap(), parse_schema(RECORD).unwrap());
}

#[test]
fn print_then_reparse_is_equivalent() {
    let parsed = parse_schema(RECORD).unwrap();
    let reparsed = parse_schema(&print(&parsed.value)).unwrap();
    assert_eq!(parsed.value, reparsed.value);
}

#[test]
fn invalid_edit_preserves_last_valid_parse() {
    let mut store = EditorStateStore::new();
    store.apply(Command::EditSourceText {
        text: RECORD.to_string(),
    });
    let good = store.snapshot().schema.value.parsed.clone();
    assert!(good.is_some());

    let snapshot = store.apply(Command::EditSourceText {
        text: TRUNCATED.to_string(),
    });
    assert_eq!(snapshot.schema.value.parsed, good);
    let error = snapshot.schema.error.as_ref().expect("must be in error");
    assert!(error.position.is_some(), "syntax errors are localizable");
}

#[test]
fn pristine_lifecycle() {
    let mut store = EditorStateStore::new();

    let snapshot = store.apply(Command::LoadDocument {
        path: "contact.avsc".into(),
        text: RECORD.to_string(),
    });
    assert!(snapshot.pristine);

    let snapshot = store.apply(Command::EditSourceText {
        text: print(&parse(RECORD).unwrap().value),
    });
    assert!(!snapshot.pristine);

    let snapshot = store.apply(Command::AcknowledgeSave);
    assert!(snapshot.pristine);
}

#[test]
fn position_strictly_inside_a_leaf_resolves_to_it() {
    let source = r#"{"type": "fixed", "name": "Contact", "size": 16}"#;
    let mut store = EditorStateStore::new();
    let snapshot = store.apply(Command::EditSourceText {
        text: source.to_string(),
    });
    let resolver = PositionResolver::new(&snapshot);

    // Inside the string "Contact", outside any descendant (there are
    // none): exactly /name.
    let column = source.find("Contact").unwrap() as u32 + 1;
    let path = resolver.source_position_to_path(1, column).unwrap();
    assert_eq!(path.to_string(), "/name");
}

#[test]
fn fields_array_scenario() {
    let parsed = parse_schema(RECORD).unwrap();
    let fields: NodePath = "/fields".parse().unwrap();

    let entry = parsed.source_map.get(&fields).expect("entry for /fields");
    let range = entry.value_range;
    assert_eq!(&RECORD[range.start.offset..range.end.offset], "[]");

    let mut store = EditorStateStore::new();
    let snapshot = store.apply(Command::EditSourceText {
        text: RECORD.to_string(),
    });
    let resolver = PositionResolver::new(&snapshot);
    let bracket_column = RECORD.find('[').unwrap() as u32 + 1;
    assert_eq!(
        resolver.source_position_to_path(1, bracket_column).unwrap(),
        fields
    );
}

#[test]
fn truncated_document_scenario() {
    let mut store = EditorStateStore::new();
    store.apply(Command::EditSourceText {
        text: RECORD.to_string(),
    });
    let good = store.snapshot().schema.value.parsed.clone();

    let snapshot = store.apply(Command::EditSourceText {
        text: TRUNCATED.to_string(),
    });
    let error = snapshot.schema.error.as_ref().expect("must be in error");
    assert!(!error.message.is_empty());
    let position = error.position.expect("position of the failure");
    assert_eq!(position.offset, TRUNCATED.len() - 1);
    assert_eq!(snapshot.schema.value.parsed, good);
}

#[test]
fn replacement_policy_follows_the_pristine_flag() {
    let mut store = EditorStateStore::new();

    let snapshot = store.apply(Command::EditSourceText {
        text: RECORD.to_string(),
    });
    assert!(!can_replace_document(&snapshot));

    let snapshot = store.apply(Command::AcknowledgeSave);
    assert!(can_replace_document(&snapshot));

    let snapshot = store.apply(Command::EditSourceText {
        text: TRUNCATED.to_string(),
    });
    assert!(!can_replace_document(&snapshot));

    let snapshot = store.apply(Command::LoadDocument {
        path: "other.avsc".into(),
        text: RECORD.to_string(),
    });
    assert!(can_replace_document(&snapshot));
}

#[test]
fn empty_and_comment_only_documents_have_defined_outcomes() {
    for text in ["", "   \n\t", "// only a comment\n", "/* nothing */"] {
        let mut store = EditorStateStore::new();
        let snapshot = store.apply(Command::EditSourceText {
            text: text.to_string(),
        });
        let error = snapshot.schema.error.as_ref().expect("must be in error");
        assert!(!error.message.is_empty());
        assert!(error.position.is_some());
        assert_eq!(snapshot.schema.value.text, text);
    }
}

#[test]
fn deeply_nested_input_is_rejected_not_fatal() {
    let mut store = EditorStateStore::new();
    let snapshot = store.apply(Command::EditSourceText {
        text: "[".repeat(100_000),
    });
    let error = snapshot.schema.error.as_ref().expect("must be in error");
    assert!(error.message.contains("nesting"));
    assert!(error.position.is_some());
}

#[test]
fn highlight_round_trip_between_representations() {
    let source = r#"{
  "type": "record",
  "name": "Contact",
  "fields": [
    {"name": "id", "type": "long"},
    {"name": "email", "type": ["null", "string"]}
  ]
}"#;
    let mut store = EditorStateStore::new();
    let snapshot = store.apply(Command::EditSourceText {
        text: source.to_string(),
    });
    let resolver = PositionResolver::new(&snapshot);

    // Cursor on "email" (line 6) resolves to the second field's name...
    let path = resolver.source_position_to_path(6, 15).unwrap();
    assert_eq!(path.to_string(), "/fields/1/name");

    // ...and the resolved path maps back to a range that contains the
    // cursor.
    let range = resolver.path_to_source_range(&path).unwrap();
    assert!(range.contains(6, 15));
}
