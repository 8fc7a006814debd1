//! Boss battle terminal client.
//!
//! Composition root: reads configuration from the environment, loads the
//! content catalog, picks a progression repository, and hands a
//! [`BattleDriver`] to the command loop.
//!
//! ```bash
//! BOSS_TURN_DELAY_MS=500 RUST_LOG=battle_runtime=debug cargo run -p battle-client
//! ```
mod app;
mod input;
mod presentation;

use std::sync::Arc;

use anyhow::{Context, Result};
use battle_content::{Catalog, ContentFactory};
use battle_core::BattleConfig;
use battle_runtime::{
    BattleDriver, BattleSession, CatalogOracle, EntropyRng, FileProgressionRepository,
    InMemoryProgressionRepository, ProgressionRepository, RuntimeConfig,
};

use app::CliApp;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    let (catalog, rules) = load_content(&config)?;
    let repository = open_repository(&config)?;

    tracing::info!(
        heroes = catalog.characters().len(),
        bosses = catalog.bosses().len(),
        delay_ms = config.boss_turn_delay.as_millis() as u64,
        persistence = config.enable_persistence,
        "Starting boss battle client"
    );

    let session = BattleSession::new(
        Arc::new(CatalogOracle::new(catalog)),
        repository,
        rules,
        Box::new(EntropyRng::new()),
    );
    let driver = BattleDriver::new(session, config.boss_turn_delay);

    CliApp::new(driver).run().await
}

fn load_content(config: &RuntimeConfig) -> Result<(Catalog, BattleConfig)> {
    match &config.content_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            let catalog = factory
                .load_catalog()
                .with_context(|| format!("loading content from {}", dir.display()))?;
            let rules = factory.load_config().unwrap_or_else(|e| {
                tracing::warn!("Using default balance: {:#}", e);
                BattleConfig::default()
            });
            Ok((catalog, rules))
        }
        None => Ok((Catalog::builtin()?, BattleConfig::default())),
    }
}

fn open_repository(config: &RuntimeConfig) -> Result<Arc<dyn ProgressionRepository>> {
    if !config.enable_persistence {
        tracing::info!("Persistence disabled; progress lives in memory");
        return Ok(Arc::new(InMemoryProgressionRepository::new()));
    }

    match config.resolve_save_dir() {
        Some(dir) => {
            let repository = FileProgressionRepository::new(&dir)
                .with_context(|| format!("opening save directory {}", dir.display()))?;
            tracing::info!("Saving progress to {}", repository.path().display());
            Ok(Arc::new(repository))
        }
        None => {
            tracing::warn!("No data directory available; progress lives in memory");
            Ok(Arc::new(InMemoryProgressionRepository::new()))
        }
    }
}
