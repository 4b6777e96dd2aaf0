use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    data::{player::PlayerRepository, promotion_date::PromotionDateRepository},
    error::AppError,
    service::stats::HttpStatsApi,
    state::BotState,
    util::clock::SystemClock,
};

/// Upper bound for a single stats API request.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client used for the stats API.
///
/// Redirects are disabled so configured URLs are the only hosts contacted.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Loads the JSON stores and assembles the shared bot state.
///
/// Missing store files are treated as empty; a malformed file aborts startup so that
/// existing records are never silently overwritten.
///
/// # Arguments
/// - `config` - Loaded configuration
///
/// # Returns
/// - `Ok(BotState)` - State ready to hand to the event handler
/// - `Err(AppError)` - A store file could not be read or parsed
pub fn build_state(config: &Config) -> Result<BotState, AppError> {
    let promotion_dates = PromotionDateRepository::load(&config.promotion_store_path)?;
    let players = PlayerRepository::load(&config.player_store_path)?;

    tracing::info!(
        "Loaded {} probation start dates from {}",
        promotion_dates.len(),
        config.promotion_store_path
    );

    let stats_api = HttpStatsApi::new(
        setup_reqwest_client()?,
        config.player_stats_url.clone(),
        config.server_stats_url.clone(),
    );

    Ok(BotState::new(
        config.guild_id,
        config.guild.clone(),
        promotion_dates,
        players,
        Arc::new(stats_api),
        Arc::new(SystemClock),
        config.server_label.clone(),
        config.max_players,
    ))
}
