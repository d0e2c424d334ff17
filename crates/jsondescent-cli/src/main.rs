//! `jsondescent` decodes one JSON document, given as a file path or as the
//! argument text itself, and prints the resulting value tree.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use jsondescent::{DEFAULT_MAX_DEPTH, DecoderOptions, Value, decode_values, decode_with};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod input;
mod output;

use input::Input;

#[derive(Parser, Debug)]
#[command(name = "jsondescent", version, about = "Decode a JSON document and print its value tree")]
struct Cli {
    /// A path to a JSON file, or the JSON text itself when no such file exists.
    input: String,

    /// How each decoded value is printed.
    #[arg(long, value_enum, default_value_t = Format::Debug)]
    format: Format,

    /// Maximum nesting depth of arrays and objects.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Accept several whitespace-separated values and print every one.
    #[arg(long)]
    multiple: bool,

    /// Log progress to stderr; `RUST_LOG` overrides the level.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Rust debug form of the value tree.
    Debug,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{source} ({origin})")]
    Decode {
        origin: String,
        #[source]
        source: jsondescent::DecodeError,
    },
    #[error("writing output: {0}")]
    Render(#[from] serde_json::Error),
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        CliError::Io {
            path: "<stdout>".to_owned(),
            source,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = Input::resolve(&cli.input)?;
    info!(origin = %input.origin(), bytes = input.bytes().len(), "decoding input");

    let options = DecoderOptions {
        max_depth: cli.max_depth,
        allow_multiple_json_values: cli.multiple,
    };
    let values = decode_input(&input, options)?;
    info!(count = values.len(), "decoded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for value in &values {
        output::write_value(&mut out, value, cli.format)?;
    }
    out.flush()?;
    Ok(())
}

fn decode_input(input: &Input, options: DecoderOptions) -> Result<Vec<Value>, CliError> {
    let decode_error = |source| CliError::Decode {
        origin: input.origin().to_string(),
        source,
    };
    if options.allow_multiple_json_values {
        decode_values(input.bytes(), options)
            .inspect(|item| {
                if let Ok(value) = item {
                    debug!(kind = output::kind_name(value), "value");
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(decode_error)
    } else {
        decode_with(input.bytes(), options)
            .map(|value| vec![value])
            .map_err(decode_error)
    }
}
