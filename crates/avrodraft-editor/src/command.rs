use std::path::PathBuf;

/// Commands accepted by the editor state machine.
///
/// One closed set of fully typed payloads; each command is applied
/// atomically and has a defined outcome for every input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a document: parse `text` and, regardless of the outcome,
    /// adopt `path` as the document identity.
    LoadDocument { path: PathBuf, text: String },

    /// The schema source text changed in the editor.
    EditSourceText { text: String },

    /// The structured-value text changed in the editor. Updates only
    /// the json pane; the schema source is not regenerated.
    EditStructuredText { text: String },

    /// The cursor moved in the schema source view.
    MoveCursor { line: u32, column: u32 },

    /// The file-I/O collaborator confirmed a successful write.
    AcknowledgeSave,

    /// The document identity changed (e.g. "save as").
    ChangeDocumentPath { path: PathBuf },
}

impl Command {
    /// A short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadDocument { .. } => "load_document",
            Self::EditSourceText { .. } => "edit_source_text",
            Self::EditStructuredText { .. } => "edit_structured_text",
            Self::MoveCursor { .. } => "move_cursor",
            Self::AcknowledgeSave => "acknowledge_save",
            Self::ChangeDocumentPath { .. } => "change_document_path",
        }
    }
}
