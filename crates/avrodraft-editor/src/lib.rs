//! # avrodraft-editor
//!
//! The editor state machine that keeps two coupled representations of a
//! schema document in sync: the Avro schema source text and its parsed
//! structured value, plus the source map tying them together.
//!
//! The authoritative state lives in an [`EditorStateStore`]; every
//! external operation is a [`Command`] applied atomically, producing an
//! immutable [`EditorSnapshot`] that readers hold by `Arc`. Cursor and
//! node queries run against a fixed snapshot through
//! [`PositionResolver`] and never mutate state.
//!
//! # Example
//!
//! ```
//! use avrodraft_editor::{Command, EditorStateStore, PositionResolver};
//!
//! let mut store = EditorStateStore::new();
//! let snapshot = store.apply(Command::EditSourceText {
//!     text: r#"{"type": "record", "name": "A", "fields": []}"#.to_string(),
//! });
//!
//! assert!(snapshot.schema.error.is_none());
//! assert!(!snapshot.pristine);
//!
//! let resolver = PositionResolver::new(&snapshot);
//! let path = resolver.source_position_to_path(1, 39).unwrap();
//! assert_eq!(path.to_string(), "/fields");
//! ```

pub mod command;
pub mod error;
pub mod index;
pub mod persistence;
pub mod resolver;
pub mod snapshot;
pub mod store;

pub use command::Command;
pub use error::QueryError;
pub use index::SourceMapIndex;
pub use persistence::can_replace_document;
pub use resolver::PositionResolver;
pub use snapshot::{CursorPos, EditorSnapshot, EditorValue, ErrorInfo, SchemaPane};
pub use store::EditorStateStore;
