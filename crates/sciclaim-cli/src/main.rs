//! Sciclaim CLI - Extract candidate claims from scientific text.

use clap::Parser;
use sciclaim_cli::input::read_input;
use sciclaim_cli::{Cli, Formatter};
use sciclaim_extractor::ClaimExtractor;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    if let Err(e) = run(&cli, &formatter) {
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, formatter: &Formatter) -> sciclaim_cli::Result<()> {
    let config = cli.extractor_config()?;

    // Models load before any input is read
    let extractor = ClaimExtractor::from_config(&config)?;
    info!(
        "Loaded models '{}' and '{}'",
        config.sentence_model.display(),
        config.tokenizer_model.display()
    );

    let text = read_input(cli.text.as_deref(), cli.input.as_deref(), io::stdin().lock())?;
    let result = extractor.extract(&text)?;

    println!("{}", formatter.format_claims(&result.claims)?);

    if formatter.shows_summary() {
        eprintln!("{}", formatter.info(&result.metadata.summary()));
    }

    Ok(())
}
