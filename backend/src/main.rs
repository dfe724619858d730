//! Career Guidance Backend - Main Entry Point
//!
//! Seeds the catalog and starts the web API server.

use career_guidance::api::{run_server, AppState};
use career_guidance::config::AppConfig;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Career Guidance & College Selection Tool     ║");
    println!("║   Interest + Skill + Score → Career            ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let state = AppState::open(&config).map_err(|e| {
        log::error!("Failed to open career store at {}: {}", config.db_path.display(), e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;

    run_server(config, state).await
}
