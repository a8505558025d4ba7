use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "mandato")]
#[command(about = "A Spanish natural-language agenda command analyzer")]
#[command(long_about = "mandato - Spanish agenda commands, compiled

Turns free-text Spanish commands into structured, time-resolved event or
reminder records.

QUICK START:
  mandato analyze \"agendá reunión con Juan viernes a las 15:30\"
  mandato analyze \"anotá comprar leche mañana a las 10:30\"
  mandato tokens \"recordame llamar doctor 15 de marzo 2024\"

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  mandato <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output suitable for scripting. Defaults to the
    /// configured default_output (pretty out of the box).
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a Spanish agenda command end to end
    ///
    /// Tokenizes, parses, and time-resolves a command, printing the
    /// recognized verb, description, and the absolute timestamp.
    ///
    /// # Grammar
    ///
    ///   Verb:   agendá (evento), anotá / recordame (recordatorio)
    ///   Dates:  hoy, mañana, lunes..domingo, 15 de marzo [2024]
    ///   Times:  a las 14, a las 14:30, a las 10am
    ///
    /// # Examples
    ///
    ///   mandato analyze "agendá reunión hoy"
    ///   mandato analyze "anotá comprar leche mañana a las 10:30"
    ///   mandato analyze "recordame llamar doctor 15 de marzo 2024"
    ///   mandato analyze "agendá cita lunes a las 14:00" --now 2024-03-11T09:00:00-03:00
    #[command(alias = "a")]
    Analyze(AnalyzeArgs),

    /// Show the token stream for a command
    ///
    /// Runs only the lexical scanner and prints every classified token,
    /// including illegal characters and the end-of-input marker. Useful
    /// for debugging why a command fails to parse.
    ///
    /// # Examples
    ///
    ///   mandato tokens "agendá reunión hoy"
    ///   mandato tokens "anotá algo a las 25:99" -o json
    #[command(alias = "t")]
    Tokens(TokensArgs),
}

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// The command text, quoted
    pub command: String,

    /// Reference instant, RFC 3339 (e.g. 2024-03-10T08:00:00-03:00) or a
    /// naive YYYY-MM-DDTHH:MM interpreted in the active offset; defaults
    /// to the current time
    #[arg(long)]
    pub now: Option<String>,

    /// UTC offset in hours, overriding the configured default (-3)
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<i32>,
}

/// Arguments for the tokens command.
#[derive(Args)]
pub struct TokensArgs {
    /// The command text, quoted
    pub command: String,
}
