use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use mandato::cli::args::{Cli, Commands, OutputFormat};
use mandato::cli::commands;
use mandato::config::{Config, Paths};
use mandato::error::{ErrorKind, MandatoError};
use mandato::output::format_error_json;

fn main() {
    let cli = Cli::parse();

    let config = match Paths::new().and_then(|paths| Config::load(&paths)) {
        Ok(config) => config,
        Err(e) => {
            report(cli.output.unwrap_or_default(), &anyhow::Error::new(e));
            std::process::exit(1);
        },
    };
    let format = cli.output.unwrap_or(config.default_output);

    match run(&cli, &config, format) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            report(format, &e);
            std::process::exit(1);
        },
    }
}

fn run(cli: &Cli, config: &Config, format: OutputFormat) -> Result<String> {
    let output = match &cli.command {
        Commands::Analyze(args) => commands::analyze(args, config, format)?,
        Commands::Tokens(args) => commands::tokens(args, format)?,
    };
    Ok(output)
}

/// Print a failure in the active format: a JSON envelope on stdout for
/// scripting, or a colored line on stderr for humans.
fn report(format: OutputFormat, e: &anyhow::Error) {
    match format {
        OutputFormat::Json => {
            let (kind, message) = e.downcast_ref::<MandatoError>().map_or_else(
                || (ErrorKind::Other, e.to_string()),
                |err| (err.kind(), err.to_string()),
            );
            println!("{}", format_error_json(kind, &message));
        },
        OutputFormat::Pretty => eprintln!("{}: {}", "error".red().bold(), e),
    }
}
