mod core;
mod session;
mod suggest;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use crate::core::config::{load_config, resolve};

#[derive(Parser)]
#[command(name = "sprout", about = "Seed keyword idea generator")]
struct Args {
    /// Gemini model to use for generation
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to sprout.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("sprout.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    let resolved = resolve(&config, args.model.as_deref());

    log::info!("Sprout starting up with model: {}", resolved.model_name);

    tui::run(resolved)
}
