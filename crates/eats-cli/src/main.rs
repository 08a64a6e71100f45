mod browse;
mod pool_args;
mod spin;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use eats_core::Environment;
use tracing_subscriber::EnvFilter;

use crate::pool_args::PoolArgs;

#[derive(Debug, Parser)]
#[command(name = "eats-cli")]
#[command(about = "Whatever Eats: spin a wheel to decide where to eat")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Spin the wheel and reveal one restaurant from the pool
    Spin {
        #[command(flatten)]
        pool: PoolArgs,
        /// Seed for a reproducible spin (overrides `EATS_SPIN_SEED`)
        #[arg(long)]
        seed: Option<u64>,
        /// Reveal the result immediately instead of waiting for the wheel
        #[arg(long)]
        no_animation: bool,
    },
    /// List the restaurants that pass the filters
    List {
        #[command(flatten)]
        pool: PoolArgs,
    },
    /// List the filtered restaurants that can be placed on a map
    Map {
        #[command(flatten)]
        pool: PoolArgs,
    },
    /// Show the cuisine and distance options available for filtering
    Filters,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = eats_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    if uses_compact_logs(&config.env) {
        subscriber.compact().with_target(false).init();
    } else {
        subscriber.init();
    }
    tracing::debug!(env = %config.env, "configuration loaded");

    let Some(command) = cli.command else {
        println!("eats-cli ready; run `eats-cli spin` to pick a restaurant");
        return Ok(());
    };

    let catalog = Arc::new(eats_core::load_catalog(&config.catalog_path)?);
    tracing::debug!(
        path = %config.catalog_path.display(),
        restaurants = catalog.len(),
        "catalog loaded"
    );

    match command {
        Commands::Spin {
            pool,
            seed,
            no_animation,
        } => spin::run_spin(&config, catalog, &pool, seed, no_animation).await,
        Commands::List { pool } => browse::run_list(&config, catalog, &pool),
        Commands::Map { pool } => browse::run_map(&config, catalog, &pool),
        Commands::Filters => {
            browse::run_filters(&catalog);
            Ok(())
        }
    }
}

/// Production runs log one compact line per event without module targets.
fn uses_compact_logs(env: &Environment) -> bool {
    matches!(env, Environment::Production)
}

#[cfg(test)]
mod tests;
