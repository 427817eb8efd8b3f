mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();
    let output = output::OutputContext::from_global(&cli.global);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(match cli.global.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            })
        }))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        cli::Commands::Check(args) => commands::check::run(args, &output),
        cli::Commands::Format(args) => commands::format::run(args, &output),
        cli::Commands::Locate(args) => commands::locate::run(args, &output),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}
