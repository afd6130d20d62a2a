//! Slide viewer entry point.

use std::{fs::File, path::PathBuf, sync::Mutex, time::Duration};

use clap::Parser;
use slidedeck_app::{DEFAULT_TITLE, Loader, Runtime, ViewerConfig};
use slidedeck_pptx::PptxDecoder;
use slidedeck_tui::{SourceFetcher, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Terminal viewer for PowerPoint presentations
#[derive(Parser, Debug)]
#[command(name = "slidedeck")]
#[command(about = "View .pptx presentations in the terminal")]
#[command(version)]
struct Args {
    /// Path or http(s) URL of the presentation
    source: String,

    /// Title shown in the header
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to this file
    ///
    /// The viewer owns the terminal, so logging is off unless a file is given.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Input poll interval in milliseconds
    #[arg(long, default_value = "100")]
    tick_ms: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
        let writer = Mutex::new(File::create(path)?);

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .with(filter)
            .init();
    }

    tracing::info!(source = %args.source, "Slide viewer starting");

    let driver = TerminalDriver::new(Duration::from_millis(args.tick_ms))?;
    let loader = Loader::new(SourceFetcher::new(), PptxDecoder::new());
    let mut runtime = Runtime::new(driver, loader, ViewerConfig::new(args.title))
        .with_close_handler(|| tracing::info!("Viewer closed"));

    runtime.open(args.source.into())?;
    runtime.run().await?;

    Ok(())
}
