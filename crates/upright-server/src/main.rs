//! CLI for the upright orientation service.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{correct, predict, serve};

/// Photo orientation classification and correction
#[derive(Parser)]
#[command(name = "upright")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP inference service
    Serve(serve::ServeArgs),

    /// Classify a single image file and print the prediction
    Predict(predict::PredictArgs),

    /// Rotate a single image file back to upright
    Correct(correct::CorrectArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Serve(args) => serve::run(args, cli.config.as_deref()).await,
        Commands::Predict(args) => predict::run(args, cli.config.as_deref()).await,
        Commands::Correct(args) => correct::run(args, cli.config.as_deref()).await,
    }
}
