use sr_server::{AppState, DRAIN_TIMEOUT, Server, build_router, logger, wait_for_shutdown_signal};

use std::error::Error;

use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration before anything opens a socket
    dotenvy::dotenv().ok();
    let config = sr_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = sr_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Build router
    let state = AppState {
        validation: config.validation.clone(),
    };
    let app = build_router(state);

    // Start serving on a background task; bind failure is fatal
    let mut server = Server::new(config.bind_addr());
    server.start(app).await?;

    // The main task only does lifecycle work from here on
    wait_for_shutdown_signal().await;
    server.shutdown(DRAIN_TIMEOUT).await;

    Ok(())
}
