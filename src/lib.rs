//! pretrain-path: read the pretrain reference out of a JSON training config.
//!
//! A training config may name a pretrained model file in its `pretrain`
//! field as `owner/repo/path/to/file`. This crate loads that field,
//! checks its shape, and splits it into owner, repo and file.
//!
//! # Modules
//!
//! - [`pretrain`]: The path parsing rule and [`PretrainReference`]
//! - [`config`]: Loading the JSON config document
//! - [`observability`]: Diagnostic logging to stderr
//! - [`error`]: Error types for pretrain-path operations
//!
//! # Example
//!
//! ```
//! use pretrain_path::parse_pretrain;
//!
//! let reference = parse_pretrain(" /acme/widgets/model.bin/ ").unwrap().unwrap();
//! assert_eq!(reference.owner(), "acme");
//! assert_eq!(reference.repo(), "widgets");
//! assert_eq!(reference.file(), "acme/widgets/model.bin");
//!
//! assert!(parse_pretrain("").unwrap().is_none());
//! assert!(parse_pretrain("acme/widgets").is_err());
//! ```

pub mod config;
pub mod error;
pub mod observability;
pub mod pretrain;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub use config::{load_pretrain, read_config, PretrainConfig};
pub use error::PretrainError;
pub use pretrain::{normalize_pretrain_path, parse_pretrain, PretrainReference};

/// The pretrain-path CLI application.
#[derive(Parser)]
#[command(name = "pretrain-path")]
#[command(version, about)]
struct Cli {
    /// JSON config file containing an optional "pretrain" field.
    config: PathBuf,

    /// How to print the parsed reference.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Log level for diagnostics on stderr (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

/// Output format for a parsed reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Owner, repo and file on three lines.
    Text,
    /// A single JSON object, or `null` when no pretrain is configured.
    Json,
}

/// Run the pretrain-path CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), PretrainError> {
    let cli = Cli::try_parse()?;
    observability::init(cli.log_level.as_deref())?;

    let reference = load_pretrain(&cli.config)?;

    match cli.output {
        OutputFormat::Text => {
            if let Some(reference) = reference {
                println!("{}", reference);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(&reference).map_err(PretrainError::JsonOutput)?;
            println!("{}", json);
        }
    }

    Ok(())
}
