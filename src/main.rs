//! Fantastic Beasts Dataset CLI
//!
//! Demonstration driver for the dataset adapter: inspect per-category
//! statistics, or decode every indexed sample in order.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use fantastic_beasts::utils::logging::{init_logging, LogConfig};
use fantastic_beasts::FantasticBeastsDataset;

/// Fantastic Beasts segmentation dataset inspector
#[derive(Parser, Debug)]
#[command(name = "fantastic_beasts")]
#[command(version)]
#[command(about = "Index and inspect the Fantastic Beasts segmentation dataset", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Dataset location arguments shared by all subcommands
#[derive(Args, Debug)]
struct DatasetArgs {
    /// Root directory of the creature images
    #[arg(long, default_value = "images")]
    image_root: String,

    /// Root directory of the segmentation masks
    #[arg(long, default_value = "masks")]
    mask_root: String,

    /// Path to the per-category attribute JSON file
    #[arg(long, default_value = "attributes.json")]
    attributes: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show dataset statistics
    Stats {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Decode every sample in index order, reporting progress
    Iterate {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };
    let _ = init_logging(&log_config);

    match cli.command {
        Commands::Stats { dataset } => cmd_stats(&dataset),
        Commands::Iterate { dataset } => cmd_iterate(&dataset),
    }
}

fn open_dataset(args: &DatasetArgs) -> Result<FantasticBeastsDataset> {
    info!("Image root: {}", args.image_root);
    info!("Mask root: {}", args.mask_root);
    info!("Attributes: {}", args.attributes);

    Ok(FantasticBeastsDataset::new(
        &args.image_root,
        &args.mask_root,
        &args.attributes,
    )?)
}

fn cmd_stats(args: &DatasetArgs) -> Result<()> {
    let dataset = open_dataset(args)?;
    dataset.stats().print();
    Ok(())
}

fn cmd_iterate(args: &DatasetArgs) -> Result<()> {
    let dataset = open_dataset(args)?;

    println!(
        "{} {} samples",
        "Iterating".cyan().bold(),
        dataset.len()
    );

    let pb = ProgressBar::new(dataset.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    for (index, sample) in dataset.iter().enumerate() {
        let sample = sample?;
        debug!(
            "sample {}: image {}x{}, mask {}x{}, attributes {}",
            index,
            sample.image.width(),
            sample.image.height(),
            sample.mask.width(),
            sample.mask.height(),
            sample.attributes
        );
        pb.inc(1);
    }
    pb.finish();

    println!(
        "{} decoded {} samples",
        "Done:".green().bold(),
        dataset.len()
    );
    Ok(())
}
