//! # nam-params
//!
//! Print the parameter descriptors declared by a parametric model file.

use clap::{Parser, ValueEnum};
use nam_parametric::config::LoggingPreferences;
use nam_parametric::logging::{self, codes, Code, LogLevel};
use nam_parametric::{log_error, log_info, log_success};
use nam_parametric::{parse_model_parameter_descriptors, parse_parameter_descriptors};
use nam_parametric::{ParameterDescriptor, SchemaError};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Inspect the parametric controls of a `.nam` model
#[derive(Debug, Parser)]
#[command(name = "nam-params", version, about)]
struct Args {
    /// Model file (or bare parametric config with --raw)
    path: PathBuf,

    /// Treat the input as the `config.parametric` object itself
    #[arg(long)]
    raw: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log debug events (overrides NAM_LOGGING_MIN_LEVEL)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Failed to render output: {0}")]
    Render(serde_json::Error),
}

impl CliError {
    fn error_code(&self) -> Code {
        match self {
            CliError::Io { .. } => codes::input::IO_ERROR,
            CliError::Json { .. } => codes::input::INVALID_JSON,
            CliError::Schema(error) => error.error_code(),
            CliError::Render(_) => codes::system::INTERNAL_ERROR,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if !setup_logging(&args) {
        return ExitCode::FAILURE;
    }

    match execute(&args, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(status) => ExitCode::from(status),
        Err(_) => ExitCode::FAILURE,
    }
}

/// Preferences that override the environment for this invocation
fn preferences_for(args: &Args) -> Option<LoggingPreferences> {
    args.verbose.then(|| LoggingPreferences {
        min_log_level: LogLevel::Debug,
        enable_console_logging: true,
        ..LoggingPreferences::default()
    })
}

/// Install the global logger, reporting any failure as ERR002
fn setup_logging(args: &Args) -> bool {
    let result = match preferences_for(args) {
        Some(preferences) => logging::config::init_runtime_preferences(preferences)
            .and_then(|()| logging::init_global_logging()),
        None => logging::init_global_logging(),
    };

    match result {
        Ok(()) => true,
        Err(message) => {
            logging::safe_log_error(
                codes::system::INITIALIZATION_FAILURE,
                &format!("Logging setup failed: {}", message),
            );
            false
        }
    }
}

/// Run the command and print its result, returning the process exit status
fn execute(args: &Args, stdout: &mut dyn Write, stderr: &mut dyn Write) -> io::Result<u8> {
    match run(args) {
        Ok(output) => {
            writeln!(stdout, "{}", output)?;
            Ok(0)
        }
        Err(error) => {
            // The parser already logged schema errors with their parameter
            if !matches!(error, CliError::Schema(_)) {
                log_error!(error.error_code(), &error.to_string(), "path" => args.path.display());
            }
            writeln!(stderr, "Error: {}", error)?;
            Ok(1)
        }
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let document = load_document(&args.path)?;

    let descriptors = if args.raw {
        parse_parameter_descriptors(&document)?
    } else {
        match parse_model_parameter_descriptors(&document)? {
            Some(descriptors) => descriptors,
            None => {
                log_info!("Model is not parametric", "path" => args.path.display());
                return Ok(format!(
                    "{}: no parametric config (`config.parametric` not present)",
                    args.path.display()
                ));
            }
        }
    };

    render(&descriptors, args.format)
}

fn load_document(path: &Path) -> Result<Value, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let document = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.display().to_string(),
        source,
    })?;

    log_success!(
        codes::success::MODEL_LOADED,
        "Model document loaded",
        "path" => path.display(),
        "size_bytes" => text.len()
    );

    Ok(document)
}

fn render(descriptors: &[ParameterDescriptor], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(descriptors).map_err(CliError::Render),
        OutputFormat::Table => Ok(descriptors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
