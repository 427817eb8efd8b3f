use avrodraft_core::types::NodePath;
use avrodraft_editor::{Command, EditorStateStore, PositionResolver};

use crate::cli::LocateArgs;
use crate::commands::read_schema_file;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `locate` command: bidirectional cursor/node queries.
///
/// `--line/--column` resolves a cursor position to the enclosing node's
/// path; `--path` resolves a node path to its text range.
pub fn run(args: LocateArgs, output: &OutputContext) -> Result<(), CliError> {
    let source_text = read_schema_file(&args.file)?;
    avrodraft_parse::parse_schema(&source_text).map_err(|err| CliError::Parse {
        source: err,
        file: args.file.clone(),
    })?;

    let mut store = EditorStateStore::new();
    let snapshot = store.apply(Command::LoadDocument {
        path: args.file.clone(),
        text: source_text,
    });
    let resolver = PositionResolver::new(&snapshot);

    match (args.line, args.column, args.path) {
        (Some(line), Some(column), None) => {
            let path = resolver.source_position_to_path(line, column)?;
            tracing::debug!(%path, line, column, "resolved cursor position");
            let range = resolver.path_to_source_range(&path)?;
            match output.mode {
                OutputMode::Json => output.print_json(&serde_json::json!({
                    "path": path.to_string(),
                    "start": { "line": range.start.line, "column": range.start.column },
                    "end": { "line": range.end.line, "column": range.end.column },
                })),
                OutputMode::Plain => {
                    println!("{path}\t{}\t{}", range.start, range.end);
                }
                OutputMode::Human => {
                    println!("{path}  ({} .. {})", range.start, range.end);
                }
            }
            Ok(())
        }
        (None, None, Some(path)) => {
            let path: NodePath = path.parse()?;
            let range = resolver.path_to_source_range(&path)?;
            match output.mode {
                OutputMode::Json => output.print_json(&serde_json::json!({
                    "path": path.to_string(),
                    "start": { "line": range.start.line, "column": range.start.column },
                    "end": { "line": range.end.line, "column": range.end.column },
                })),
                OutputMode::Plain => {
                    println!("{path}\t{}\t{}", range.start, range.end);
                }
                OutputMode::Human => {
                    println!("{} .. {}", range.start, range.end);
                }
            }
            Ok(())
        }
        _ => Err(CliError::Other(
            "pass either --line and --column, or --path".to_string(),
        )),
    }
}
