use clap::Parser;
use snapthread::cli::Cli;
use snapthread::cli::Commands;
use snapthread::AppConfig;
use snapthread::Result;
use snapthread::SnapThread;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        snapthread::logging::init_logging_with_level("debug")?;
    } else {
        snapthread::logging::init_logging()?;
    }

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };
    tracing::debug!("Configuration loaded successfully");

    let snapthread = SnapThread::new(&config)?;

    // Execute the requested command
    match cli.command {
        Commands::Threads { fid, json } => {
            snapthread::cli::handle_threads_command(&snapthread, fid, json).await?;
        }
        Commands::Casts { fid, limit } => {
            snapthread::cli::handle_casts_command(&snapthread, fid, limit).await?;
        }
    }

    Ok(())
}
