use crate::core::ResizeMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "image_resizer")]
#[command(about = "A tool for resizing and converting images in batches")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resize images and write them with a "-resized" suffix
    Resize(ResizeArgs),

    /// Print the native dimensions of images
    Probe {
        /// Image files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Expand directories recursively
        #[arg(short, long)]
        recursive: bool,
    },

    /// List supported output formats
    Formats,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ResizeArgs {
    /// Image files or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// How target dimensions are given
    #[arg(short, long, value_enum)]
    pub mode: Option<ResizeModeArg>,

    /// Target width in pixels
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Target height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Scale relative to the source size (e.g. 50 for half size)
    #[arg(short, long)]
    pub percentage: Option<f64>,

    /// Output format (defaults to the input file's extension)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Encoder quality for lossy formats (1-100)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub quality: Option<u32>,

    /// Output directory (defaults to each input file's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Expand directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// JSON file with processing options; flags override its values
    #[arg(long)]
    pub options_file: Option<PathBuf>,

    /// Write a JSON report of the batch
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Suppress per-file progress output
    #[arg(long)]
    pub quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeModeArg {
    Pixels,
    Percentage,
}

impl From<ResizeModeArg> for ResizeMode {
    fn from(mode: ResizeModeArg) -> Self {
        match mode {
            ResizeModeArg::Pixels => ResizeMode::Pixels,
            ResizeModeArg::Percentage => ResizeMode::Percentage,
        }
    }
}
