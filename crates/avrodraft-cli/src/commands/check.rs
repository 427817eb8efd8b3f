use crate::cli::CheckArgs;
use crate::commands::{discover_schema_files, read_schema_file};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `check` command: parse and validate schema files.
pub fn run(args: CheckArgs, output: &OutputContext) -> Result<(), CliError> {
    let files = discover_schema_files(&args.paths)?;
    tracing::debug!(files = files.len(), "checking schema files");

    let mut results: Vec<serde_json::Value> = Vec::new();
    let mut first_failure: Option<CliError> = None;
    let mut error_count = 0usize;

    for file in &files {
        let source_text = read_schema_file(file)?;
        let filename = file.display().to_string();

        match avrodraft_parse::parse_schema(&source_text) {
            Ok(parsed) => {
                if output.mode == OutputMode::Json {
                    results.push(serde_json::json!({
                        "file": filename,
                        "ok": true,
                        "nodes": parsed.source_map.len(),
                    }));
                } else {
                    output.file_line(&filename, "ok");
                }
            }
            Err(err) => {
                error_count += 1;
                match output.mode {
                    OutputMode::Human => {
                        output.file_line(&filename, &err.to_string());
                    }
                    OutputMode::Json => {
                        results.push(serde_json::json!({
                            "file": filename,
                            "ok": false,
                            "message": err.to_string(),
                        }));
                    }
                    OutputMode::Plain => {
                        eprintln!("{filename}\terror\t{err}");
                    }
                }
                if first_failure.is_none() {
                    first_failure = Some(CliError::Parse {
                        source: err,
                        file: file.clone(),
                    });
                }
            }
        }
    }

    match output.mode {
        OutputMode::Human => {
            output.summary(
                error_count == 0,
                &format!("{} files checked, {error_count} with errors", files.len()),
            );
        }
        OutputMode::Json => {
            output.print_json(&serde_json::json!({
                "files": files.len(),
                "errors": error_count,
                "results": results,
            }));
        }
        OutputMode::Plain => {
            println!("{}\t{error_count}", files.len());
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
