//! Listing server entry point

mod config;
mod logging;
mod server;

use anyhow::{Context, Result};
use clap::Parser;
use config::{AppConfig, DatabaseConfig};
use listing_service::ListingServiceModule;
use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "listing-server", version, about = "Real-estate listing HTTP service")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    logging::init(&config.logging);

    let db = connect(&config.database).await?;
    let module = ListingServiceModule::init(config.listings.clone(), &db)?;
    let app = module.register_rest(axum::Router::new());

    server::serve(&config.server, app).await
}

async fn connect(config: &DatabaseConfig) -> Result<Database> {
    let mut options = ClientOptions::parse(&config.uri)
        .await
        .context("invalid MongoDB connection string")?;
    options.app_name = Some(config.app_name.clone());

    let client = Client::with_options(options).context("failed to build MongoDB client")?;
    let db = client.database(&config.name);

    db.run_command(doc! { "ping": 1 })
        .await
        .context("MongoDB is not reachable")?;
    tracing::info!(database = %config.name, "Connected to MongoDB");

    Ok(db)
}
