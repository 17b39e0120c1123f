use clap::Parser;
use normplot::{App, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "normplot")]
#[command(about = "Terminal viewer for the standard normal probability density curve")]
struct Args {
    /// Path to the data directory for log output (default: ~/.normplot/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".normplot")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::new()?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Display dismissed, shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
