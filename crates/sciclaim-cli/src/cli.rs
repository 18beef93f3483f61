//! CLI argument definitions and parsing.

use crate::error::Result;
use crate::output::OutputFormat;
use clap::{ArgAction, Parser};
use sciclaim_extractor::ExtractorConfig;
use std::path::PathBuf;

/// Sciclaim - Extract candidate claims from scientific text.
#[derive(Debug, Parser)]
#[command(name = "sciclaim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Text to scan (reads --input or stdin when omitted)
    pub text: Option<String>,

    /// Read text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding en-sent.json and en-token.json
    #[arg(long, env = "SCICLAIM_MODELS_DIR")]
    pub models_dir: Option<PathBuf>,

    /// Sentence model artifact
    #[arg(long, env = "SCICLAIM_SENTENCE_MODEL")]
    pub sentence_model: Option<PathBuf>,

    /// Tokenizer model artifact
    #[arg(long, env = "SCICLAIM_TOKENIZER_MODEL")]
    pub tokenizer_model: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = CliFormat::Text)]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// One block per claim (default)
    Text,
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Build the extractor configuration.
    ///
    /// Starts from the config file (or defaults), then applies the models
    /// directory, then the individual model paths.
    pub fn extractor_config(&self) -> Result<ExtractorConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractorConfig::from_file(path)?,
            None => ExtractorConfig::default(),
        };

        if let Some(dir) = &self.models_dir {
            config = config.with_models_dir(dir);
        }
        if let Some(path) = &self.sentence_model {
            config.sentence_model = path.clone();
        }
        if let Some(path) = &self.tokenizer_model {
            config.tokenizer_model = path.clone();
        }

        Ok(config)
    }

    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
