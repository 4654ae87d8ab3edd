//! rickdex - A terminal browser for the Rick and Morty character API
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use rickdex::LaunchOptions;
use rickdex_app::{config, Route};
use rickdex_core::prelude::*;

/// rickdex - A terminal browser for the Rick and Morty character API
#[derive(Parser, Debug)]
#[command(name = "rickdex")]
#[command(about = "A terminal browser for the Rick and Morty character API", long_about = None)]
struct Args {
    /// Route to open: `/` for the list, `/profile/{id}` for a character
    #[arg(value_name = "PATH", default_value = "/")]
    path: String,

    /// API base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List page to open first
    #[arg(long, value_name = "N")]
    page: Option<u32>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .or_else(config::default_config_path)
            .ok_or_else(|| Error::config("No config directory on this platform"))?;
        let path = config::init_config_file(&path)?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    let route = Route::parse(&args.path)?;

    rickdex::run(LaunchOptions {
        route,
        config_path: args.config,
        base_url: args.base_url,
        page: args.page,
        headless: args.headless,
    })
    .await
}
