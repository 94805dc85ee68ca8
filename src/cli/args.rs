use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid-snapshot-processor")]
#[command(about = "Reconstruct lat/lon grid snapshots from raster-ordered samples")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide the progress spinner")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Settings file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild value grids and write them as CSV
    Reconstruct {
        #[arg(short, long, help = "Sample stream of `lat lon value` lines")]
        input: PathBuf,

        #[arg(long, help = "Ocean classification of `lat lon` lines")]
        ocean: PathBuf,

        #[arg(short, long, help = "Output CSV path [default: <input stem>.csv]")]
        output: Option<PathBuf>,
    },

    /// Rebuild value grids and derive change statistics between snapshots
    Statistics {
        #[arg(short, long, help = "Sample stream of `lat lon value` lines")]
        input: PathBuf,

        #[arg(long, help = "Ocean classification of `lat lon` lines")]
        ocean: PathBuf,

        #[arg(
            short,
            long,
            help = "Directory for <stem>.csv, <stem>_mean.csv and <stem>_stdev.csv [default: input directory]"
        )]
        output_dir: Option<PathBuf>,
    },

    /// Check that a sample stream is in raster order without writing output
    Validate {
        #[arg(short, long, help = "Sample stream of `lat lon value` lines")]
        input: PathBuf,

        #[arg(long, default_value = "false", help = "Print the report as JSON")]
        json: bool,
    },
}
