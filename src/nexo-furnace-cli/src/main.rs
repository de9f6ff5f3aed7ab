mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use nexo_furnace::{Converter, TracingReporter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Args;
use config::Config;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::load(args.config.as_deref(), &args.root)?;
    let layout = config.layout.rooted(&args.root);
    tracing::debug!("Layout: {:?}", layout);

    let mut reporter = TracingReporter::new();
    let mut converter = Converter::new(layout).skip_extract(args.skip_extract);
    let summary = converter
        .run(&mut reporter)
        .context("Conversion aborted")?;

    eprintln!("{}", summary);
    if reporter.total() > 0 {
        eprintln!(
            "Warnings: {} invalid entries, {} missing textures, {} failed files",
            reporter.structural, reporter.missing_assets, reporter.failed_files
        );
    }

    Ok(())
}
