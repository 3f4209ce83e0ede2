mod cli;
mod config;
mod logging;
mod prompt;

use std::io;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use cloud_logging::{cloud_debug, cloud_info};
use log::LevelFilter;
use tagcloud_engine::{CloudEngine, OutputRequest};

use cli::Cli;
use config::load_config;
use prompt::{resolve_count, Prompter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(cli.log, level, &cli.log_file);

    let config = load_config(cli.config.as_deref());
    cloud_debug!("Using config {:?}", config);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let input_path = match cli.input {
        Some(path) => path,
        None => prompter.ask_path("Enter an input file: ")?,
    };
    let engine = CloudEngine::with_stylesheets(config.stylesheets);
    let input = engine
        .load(&input_path)
        .with_context(|| format!("cannot build a tag cloud from {:?}", input_path))?;

    let output = match cli.output {
        Some(path) => path,
        None => prompter.ask_path("Enter an output file: ")?,
    };

    let count = resolve_count(cli.count, input.distinct_words(), &mut prompter)
        .with_context(|| format!("no usable word count for {:?}", input_path))?;

    let request = OutputRequest {
        output,
        count,
        write_manifest: cli.manifest || config.write_manifest,
        generated_utc: Utc::now().to_rfc3339(),
    };
    let report = engine
        .generate(&input, &request)
        .with_context(|| format!("cannot write tag cloud to {:?}", request.output))?;

    cloud_info!(
        "Tag cloud of {} words ({} distinct, {} total) written to {:?}",
        report.words_rendered,
        report.distinct_words,
        report.total_words,
        report.output_path
    );
    if let Some(path) = report.manifest_path {
        cloud_info!("Manifest written to {:?}", path);
    }
    Ok(())
}
