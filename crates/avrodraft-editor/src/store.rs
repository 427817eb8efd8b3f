use std::sync::Arc;

use avrodraft_parse::{parse, parse_schema, ParseError};

use crate::command::Command;
use crate::snapshot::{CursorPos, EditorSnapshot, EditorValue, ErrorInfo, SchemaPane};

/// The authoritative owner of editor state.
///
/// One sequential command stream mutates the state: `apply` computes
/// the complete next snapshot and publishes it with a single `Arc`
/// swap, so readers holding a snapshot never observe a half-applied
/// command. Parsing happens synchronously inside `apply`; a command is
/// not applied until its parse has finished.
#[derive(Debug)]
pub struct EditorStateStore {
    snapshot: Arc<EditorSnapshot>,
}

impl EditorStateStore {
    /// A store holding the blank initial document.
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(EditorSnapshot::blank()),
        }
    }

    /// The current snapshot. Cheap to clone and safe to hold across
    /// later commands; it never changes after publication.
    pub fn snapshot(&self) -> Arc<EditorSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Applies one command atomically and returns the new snapshot.
    ///
    /// Every command has a defined outcome for every input; parse
    /// failures are recorded in the snapshot's error status, never
    /// propagated.
    pub fn apply(&mut self, command: Command) -> Arc<EditorSnapshot> {
        tracing::debug!(command = command.name(), "applying editor command");
        let next = self.transition(command);
        self.snapshot = Arc::new(next);
        Arc::clone(&self.snapshot)
    }

    fn transition(&self, command: Command) -> EditorSnapshot {
        let prior = self.snapshot.as_ref();
        match command {
            Command::LoadDocument { path, text } => {
                let mut next = match parse_schema(&text) {
                    Ok(parsed) => EditorSnapshot {
                        schema: SchemaPane {
                            value: EditorValue::from_parse(text, parsed),
                            error: None,
                            cursor: prior.schema.cursor,
                        },
                        ..prior.clone()
                    },
                    // A failed load keeps the last good tree so the
                    // structured view does not go blank.
                    Err(err) => {
                        tracing::warn!(error = %err, "document failed to parse on load");
                        EditorSnapshot {
                            schema: SchemaPane {
                                value: EditorValue {
                                    text,
                                    parsed: prior.schema.value.parsed.clone(),
                                },
                                error: Some(error_info(&err)),
                                cursor: prior.schema.cursor,
                            },
                            ..prior.clone()
                        }
                    }
                };
                // The attempted load changes document identity either
                // way, and the new identity starts as a fresh baseline.
                next.path = Some(path);
                next.pristine = true;
                next
            }

            Command::EditSourceText { text } => {
                let schema = match parse_schema(&text) {
                    Ok(parsed) => SchemaPane {
                        value: EditorValue::from_parse(text, parsed),
                        error: None,
                        cursor: prior.schema.cursor,
                    },
                    // Keep the keystrokes, keep the last good tree,
                    // surface the error.
                    Err(err) => SchemaPane {
                        value: EditorValue {
                            text,
                            parsed: prior.schema.value.parsed.clone(),
                        },
                        error: Some(error_info(&err)),
                        cursor: prior.schema.cursor,
                    },
                };
                EditorSnapshot {
                    schema,
                    pristine: false,
                    ..prior.clone()
                }
            }

            Command::EditStructuredText { text } => match parse(&text) {
                Ok(parsed) => EditorSnapshot {
                    json: EditorValue::from_parse(text, parsed),
                    schema: SchemaPane {
                        error: None,
                        ..prior.schema.clone()
                    },
                    ..prior.clone()
                },
                Err(err) => EditorSnapshot {
                    json: EditorValue {
                        text,
                        parsed: prior.json.parsed.clone(),
                    },
                    schema: SchemaPane {
                        error: Some(error_info(&err)),
                        ..prior.schema.clone()
                    },
                    ..prior.clone()
                },
            },

            Command::MoveCursor { line, column } => EditorSnapshot {
                schema: SchemaPane {
                    cursor: Some(CursorPos { line, column }),
                    ..prior.schema.clone()
                },
                ..prior.clone()
            },

            Command::AcknowledgeSave => EditorSnapshot {
                pristine: true,
                ..prior.clone()
            },

            Command::ChangeDocumentPath { path } => EditorSnapshot {
                path: Some(path),
                pristine: true,
                ..prior.clone()
            },
        }
    }
}

impl Default for EditorStateStore {
    fn default() -> Self {
        Self::new()
    }
}

fn error_info(err: &ParseError) -> ErrorInfo {
    ErrorInfo {
        message: err.to_string(),
        position: err.position(),
    }
}
