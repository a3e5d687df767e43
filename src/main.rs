//! judge-seed - Application Entry Point
//!
//! Seeds the problem catalog into the configured database and exits nonzero
//! on any failure.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use judge_seed::{
    catalog,
    config::Config,
    constants::DEFAULT_LOG_FILTER,
    db::MySqlStore,
    error::AppResult,
    services::{SeedReport, SeedService},
};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(report) => {
            tracing::info!(
                inserted = report.inserted.len(),
                skipped = report.skipped.len(),
                test_cases = report.test_cases_inserted,
                elapsed_ms = report.elapsed_ms(),
                "All problems seeded successfully"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "Seed error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AppResult<SeedReport> {
    let config = Config::from_env()?;
    let problems = catalog::embedded()?;
    tracing::info!("Loaded {} problems from catalog", problems.len());

    tracing::info!(
        "Connecting to database {}:{}/{}",
        config.database.host,
        config.database.port,
        config.database.name
    );
    let mut store = MySqlStore::connect(&config.database).await?;

    let result = SeedService::run(&mut store, &problems, &config.seed.organizer_email).await;

    // The connection is closed whether or not seeding succeeded.
    if let Err(e) = store.close().await {
        tracing::warn!("Failed to close database connection: {}", e);
    }

    result
}
