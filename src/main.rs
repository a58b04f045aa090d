use std::fs;

use clap::Parser;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DbErr};
use serde::Deserialize;
use tokio::main;

use melody::{app, DatabaseState};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, short, default_value_t = 3)]
    verbosity: usize,
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
    #[arg(long, short)]
    config: String,
}

#[derive(Deserialize)]
struct Config {
    port: i32,
    postgres: String,
}

#[main]
async fn main() -> Result<(), DbErr> {
    let args = Args::parse();
    stderrlog::new()
        .verbosity(args.verbosity)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Millisecond)
        .init()
        .unwrap();

    info!("Configuration path: {}", args.config);
    let config_string_result = fs::read_to_string(args.config);
    if let Err(err) = config_string_result {
        error!("Error opening configuration file: {}", err);
        return Ok(());
    }
    let config_string = config_string_result.unwrap();
    let config_result = serde_json::from_str(config_string.as_str());
    if let Err(err) = config_result {
        error!("Malformed configuration: {}", err);
        return Ok(());
    }
    let config: Config = config_result.unwrap();

    let connection_result = Database::connect(config.postgres.as_str()).await;
    if let Err(err) = connection_result {
        error!("Error connecting to database: {}", err);
        return Ok(());
    }
    let connection = connection_result.unwrap();
    Migrator::up(&connection, None).await?;

    let state = DatabaseState { connection };
    let app = app(state);

    info!("🎵 Melody Server is running!");
    info!("📍 Port: {}", config.port);
    info!("🔗 API: http://localhost:{}/api", config.port);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .unwrap();
    Ok(axum::serve(listener, app).await.unwrap())
}
