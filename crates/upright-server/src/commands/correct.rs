//! The `correct` subcommand: rotate a single image file back to upright.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use upright_core::{correct_orientation, encode_jpeg};

use super::{build_classifier, resolve_config};

#[derive(Args)]
pub struct CorrectArgs {
    /// Image file to correct
    image: PathBuf,

    /// Output path for the corrected JPEG
    #[arg(short, long, default_value = "corrected.jpg")]
    output: PathBuf,

    /// Path to the ONNX model (overrides config)
    #[arg(short, long)]
    model: Option<PathBuf>,
}

pub async fn run(args: CorrectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = resolve_config(config_path)?;
    let classifier = build_classifier(&config, args.model)?;

    let image = image::open(&args.image)?;
    let prediction = classifier.classify(&image)?;
    info!("Detected orientation: {}", prediction.label);

    let corrected = correct_orientation(&image, prediction.label);
    let jpeg = encode_jpeg(&corrected, config.service.jpeg_quality)?;
    std::fs::write(&args.output, jpeg)?;

    println!("Corrected image written to {}", args.output.display());

    Ok(())
}
