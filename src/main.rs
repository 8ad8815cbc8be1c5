//! Bootstrap binary - Prepares the backing store for the app servers.
//!
//! Initializes logging, connects to the database selected by `DATABASE_URL`,
//! ensures all tables exist, and seeds the starter food catalog from
//! config.toml.

use dotenvy::dotenv;
use pantry_buddy::{config, errors::Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Connect and ensure the schema exists
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;

    config::database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;
    info!("Database tables ensured.");

    // 4. Seed the starter food catalog
    let catalog = config::catalog::load_default_config()
        .inspect_err(|e| error!("Failed to load config.toml: {e}"))?;
    let seeded = config::catalog::seed_food_catalog(&db, &catalog)
        .await
        .inspect_err(|e| error!("Failed to seed food catalog: {e}"))?;
    info!(seeded, "Bootstrap complete.");

    Ok(())
}
