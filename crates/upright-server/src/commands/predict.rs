//! The `predict` subcommand: classify a single image file.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use super::{build_classifier, resolve_config};

#[derive(Args)]
pub struct PredictArgs {
    /// Image file to classify
    image: PathBuf,

    /// Path to the ONNX model (overrides config)
    #[arg(short, long)]
    model: Option<PathBuf>,
}

pub async fn run(args: PredictArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = resolve_config(config_path)?;
    let classifier = build_classifier(&config, args.model)?;

    let image = image::open(&args.image)?;
    let prediction = classifier.classify(&image)?;

    let predictions: Vec<_> = prediction
        .scores
        .iter()
        .map(|(label, probability)| json!({ "label": label, "probability": probability }))
        .collect();

    let output = json!({
        "predictions": predictions,
        "final_label": prediction.label,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
