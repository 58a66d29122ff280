use clap::Parser;
use std::path::PathBuf;

use iconcrop::{EstimatorKind, FallbackMode, SquareMode};

#[derive(Parser, Debug)]
#[command(
    name = "iconcrop",
    version,
    about = "Crop an icon to its content, square it, and resize it"
)]
pub struct CliArgs {
    /// Source image (any format the image crate decodes, e.g. PNG)
    pub source: PathBuf,

    /// Destination image; the encoder is chosen from the extension
    pub destination: PathBuf,

    /// JSON preset with crop parameters; flags below override it
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Output side in pixels [default: 1024]
    #[arg(long)]
    pub size: Option<u32>,

    /// Added to the background estimate to form the content threshold [default: 15]
    #[arg(long)]
    pub tolerance: Option<u8>,

    /// Fallback margin as a fraction of the image width [default: 0.1]
    #[arg(long)]
    pub margin_ratio: Option<f64>,

    /// Background estimator [default: corners]
    #[arg(long, value_enum)]
    pub estimator: Option<EstimatorKind>,

    /// How the square is fitted into the image [default: clamp]
    #[arg(long, value_enum)]
    pub square_mode: Option<SquareMode>,

    /// Crop used when no content is found [default: trim]
    #[arg(long, value_enum)]
    pub fallback_mode: Option<FallbackMode>,

    /// Enable logging (to stderr)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
