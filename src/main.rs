mod bot;
mod config;
mod data;
mod error;
mod middleware;
mod model;
mod service;
mod startup;
mod state;
mod util;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dioxus_logger::initialize_default();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let permissions = startup::init_permissions(&config).await;
    let state = BotState::new(config.command_prefix.clone(), permissions);

    let client = bot::start::init_bot(&config, state).await?;

    tracing::info!("Starting bot with prefix '{}'", config.command_prefix);

    bot::start::start_bot(client).await
}
