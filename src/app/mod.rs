//! Application entry - settings, state and frontend selection

use std::path::PathBuf;

use rickdex_app::{config, AppState, ApiClient, Engine, Route, Settings};
use rickdex_core::prelude::*;

/// What the command line asked for
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Route to open first
    pub route: Route,

    /// Config file to read instead of the default location
    pub config_path: Option<PathBuf>,

    /// Overrides `[api] base_url` from the config file
    pub base_url: Option<String>,

    /// List page to open first
    pub page: Option<u32>,

    /// Print JSON events instead of running the TUI
    pub headless: bool,
}

/// Main application entry point
pub async fn run(options: LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    rickdex_core::logging::init()?;

    info!("Start route: {}", options.route);
    if options.headless {
        info!("Headless mode");
    }

    let result = run_with_options(options).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("rickdex exiting");
    result
}

async fn run_with_options(options: LaunchOptions) -> Result<()> {
    let headless = options.headless;
    let state = build_state(&options);

    let client =
        ApiClient::new(&state.settings.api.base_url).context("Failed to build API client")?;
    info!("API: {}", client.base_url());

    let engine = Engine::new(state, client);

    if headless {
        crate::headless::runner::run_headless(engine).await
    } else {
        rickdex_tui::run(engine).await
    }
}

/// Resolve settings and build the initial state
pub fn build_state(options: &LaunchOptions) -> AppState {
    let settings = resolve_settings(options);
    let state = AppState::new(options.route, settings);

    match options.page {
        Some(page) => state.with_initial_page(page),
        None => state,
    }
}

fn resolve_settings(options: &LaunchOptions) -> Settings {
    let mut settings = config::load_settings(options.config_path.as_deref());

    if let Some(base_url) = &options.base_url {
        debug!("Base URL overridden from command line: {}", base_url);
        settings.api.base_url = base_url.clone();
    }

    settings
}
