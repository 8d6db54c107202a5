//! Telegram front-end for the shelving configurator.

use std::sync::Arc;

use anyhow::{Context, Result};
use shelf_application::ShelfUseCase;
use shelf_core::Pricer;
use shelf_infrastructure::{ConfigService, JsonSessionStore, init_tracing, load_bot_token};
use teloxide::prelude::*;

mod handlers;
mod keyboard;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigService::new()?.get_config()?;
    let _guard = init_tracing("info", config.log_dir.as_deref());

    let token = load_bot_token().context("Set BOT_TOKEN env var")?;

    let data_file = config.data_file();
    tracing::info!(
        "[Bootstrap] data file: {}, pricing: {:?}",
        data_file.display(),
        config.pricing.strategy
    );

    let store = Arc::new(JsonSessionStore::new(data_file));
    let pricer: Arc<dyn Pricer> = Arc::from(config.pricing.build_pricer());
    let usecase = Arc::new(ShelfUseCase::new(store, pricer));

    let bot = Bot::new(token);
    Dispatcher::builder(bot, handlers::schema())
        .dependencies(dptree::deps![usecase])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("[Bootstrap] stopped");
    Ok(())
}
