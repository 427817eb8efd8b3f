use std::path::PathBuf;

use crate::cli::FormatArgs;
use crate::commands::{discover_schema_files, read_schema_file};
use crate::error::CliError;
use crate::output::OutputContext;

/// Run the `format` command: rewrite schema files canonically.
///
/// Without flags the canonical text goes to stdout. `--write` rewrites
/// the files in place; `--check` only reports which files would change.
pub fn run(args: FormatArgs, output: &OutputContext) -> Result<(), CliError> {
    let files = discover_schema_files(&args.paths)?;

    let mut changed = 0usize;

    for file in &files {
        let source_text = read_schema_file(file)?;
        let parsed =
            avrodraft_parse::parse_schema(&source_text).map_err(|err| CliError::Parse {
                source: err,
                file: file.clone(),
            })?;
        let canonical = avrodraft_parse::print(&parsed.value);

        if args.check {
            if canonical != source_text {
                changed += 1;
                output.file_line(&file.display().to_string(), "would be reformatted");
            }
        } else if args.write {
            if canonical != source_text {
                changed += 1;
                write_schema_file(file, &canonical)?;
                output.file_line(&file.display().to_string(), "reformatted");
            }
        } else {
            print!("{canonical}");
        }
    }

    tracing::debug!(files = files.len(), changed, "formatted schema files");
    if args.check && changed > 0 {
        return Err(CliError::NotCanonical { count: changed });
    }
    if args.write {
        output.summary(
            true,
            &format!("{} files formatted, {changed} changed", files.len()),
        );
    }
    Ok(())
}

fn write_schema_file(path: &PathBuf, text: &str) -> Result<(), CliError> {
    std::fs::write(path, text).map_err(|e| CliError::Io {
        path: path.clone(),
        source: e,
    })
}
