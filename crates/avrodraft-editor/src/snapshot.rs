use std::path::PathBuf;

use avrodraft_core::types::SourcePos;
use avrodraft_parse::Parsed;

/// One side of the dual representation: the text the user sees and, when
/// the text last parsed successfully, the value and source map that
/// parse produced.
///
/// Holding both halves of a parse inside one `Option<Parsed>` makes the
/// "value and source map are both absent or both from the same parse"
/// invariant impossible to break.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorValue {
    pub text: String,
    pub parsed: Option<Parsed>,
}

impl EditorValue {
    pub fn from_parse(text: String, parsed: Parsed) -> Self {
        Self {
            text,
            parsed: Some(parsed),
        }
    }
}

/// A surfaced parse failure. The position is present whenever the
/// failure could be localized.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    pub message: String,
    pub position: Option<SourcePos>,
}

/// Last known cursor location in the schema source view; tracked
/// independently of parse success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub line: u32,
    pub column: u32,
}

/// The schema-source side of the editor: text, parse result, error
/// status, and cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaPane {
    pub value: EditorValue,
    pub error: Option<ErrorInfo>,
    pub cursor: Option<CursorPos>,
}

impl SchemaPane {
    /// Whether the pane currently carries a parse error.
    pub fn in_error(&self) -> bool {
        self.error.is_some()
    }
}

/// The complete, immutable editor state.
///
/// Exclusively owned and replaced by the store; everything else reads a
/// fixed snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorSnapshot {
    /// Schema source pane (Avro schema text).
    pub schema: SchemaPane,
    /// Structured-value pane (generic JSON text).
    pub json: EditorValue,
    /// Filesystem identity of the open document; `None` means unsaved.
    pub path: Option<PathBuf>,
    /// True iff no edits have occurred since load or last save.
    pub pristine: bool,
}

impl EditorSnapshot {
    /// The initial state: a blank, pristine, error-free document.
    pub fn blank() -> Self {
        Self {
            pristine: true,
            ..Self::default()
        }
    }
}
