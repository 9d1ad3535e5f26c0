use clap::Parser;
use cxr_core::{
    sort_dataset, SortConfig, DEFAULT_DATA_DIR, DEFAULT_MANIFEST, DEFAULT_OUTPUT_DIR,
    DEFAULT_SHARD_MAX, DEFAULT_SHARD_MIN,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cxr")]
#[command(about = "Sorts a labelled chest-radiograph dataset into per-disease folders")]
struct Cli {
    /// Root of the numbered image shard tree
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Manifest file listing image filenames and their label flags
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Destination root for the per-disease folders
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// First shard index to probe
    #[arg(long, default_value_t = DEFAULT_SHARD_MIN)]
    shard_min: u32,

    /// Last shard index to probe
    #[arg(long, default_value_t = DEFAULT_SHARD_MAX)]
    shard_max: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cxr_core=info".parse()?)
                .add_directive("cxr=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = SortConfig::new(
        cli.data_dir,
        cli.manifest,
        cli.output_dir,
        cli.shard_min..=cli.shard_max,
    )?;

    tracing::info!(
        "-- Sorting {} into {}",
        config.data_dir().display(),
        config.output_dir().display()
    );

    let report = sort_dataset(&config)?;

    println!(
        "moved {} file(s), {} move(s) failed, {} image(s) unresolved",
        report.moved, report.failed, report.unresolved
    );

    Ok(())
}
