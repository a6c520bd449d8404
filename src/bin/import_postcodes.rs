use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use geo_postcode::adapters::import::import_table;
use geo_postcode::utils::logger;

/// One-shot builder for the postcode lookup table.
#[derive(Debug, Parser)]
#[command(name = "import-postcodes")]
#[command(about = "Build a postcode lookup table from a delimited data file")]
struct ImportConfig {
    /// Delimited source file with a header row naming a 'postcode' column
    input: PathBuf,

    /// Destination table file; must not already exist
    output: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let config = ImportConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!(
        "Importing {} into {}",
        config.input.display(),
        config.output.display()
    );

    let summary = import_table(&config.input, &config.output)
        .with_context(|| format!("importing {}", config.input.display()))?;

    println!(
        "✅ Imported {} records ({} columns) into {}",
        summary.rows,
        summary.columns.len(),
        config.output.display()
    );

    Ok(())
}
