use console::{Style, Term};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

/// Rendering context shared by the subcommands.
///
/// Human-readable reporting goes to stderr; data output (canonical
/// text, JSON results, resolved paths) goes to stdout so it can be
/// piped. `check` and `format` report one line per file followed by a
/// summary; `locate` prints only its result.
pub struct OutputContext {
    pub mode: OutputMode,
    quiet: bool,
    use_color: bool,
}

impl OutputContext {
    pub fn from_global(global: &GlobalOpts) -> Self {
        // NO_COLOR, dumb terminals, and redirected stderr all disable
        // styling.
        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode: match global.format.as_str() {
                "json" => OutputMode::Json,
                "plain" => OutputMode::Plain,
                _ => OutputMode::Human,
            },
            quiet: global.quiet,
            use_color,
        }
    }

    fn paint(&self, style: Style, label: &str) -> String {
        if self.use_color {
            style.apply_to(label).to_string()
        } else {
            label.to_string()
        }
    }

    /// One line per processed file: `  <file> .... <outcome>`.
    pub fn file_line(&self, file: &str, outcome: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        eprintln!("  {file} .... {outcome}");
    }

    /// End-of-run summary line; green when the run was clean, yellow
    /// when problems remain.
    pub fn summary(&self, clean: bool, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        if clean {
            eprintln!("{} {msg}", self.paint(Style::new().green().bold(), "ok"));
        } else {
            eprintln!(
                "{} {msg}",
                self.paint(Style::new().yellow().bold(), "warning:")
            );
        }
    }

    /// The error that decided the exit code, in the mode's own shape.
    pub fn print_error(&self, err: &CliError) {
        match self.mode {
            OutputMode::Human => {
                eprintln!("{} {err}", self.paint(Style::new().red().bold(), "error:"));
            }
            OutputMode::Json => eprintln!("{}", err.to_json()),
            OutputMode::Plain => eprintln!("error\t{err}"),
        }
    }

    /// Machine-readable result data on stdout.
    pub fn print_json(&self, value: &serde_json::Value) {
        if let Ok(s) = serde_json::to_string_pretty(value) {
            println!("{s}");
        }
    }
}
