use std::sync::Arc;

use serenity::all::{ActivityData, Context};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, state::BotState};

/// Starts the presence scheduler
///
/// Runs every minute and shows the game server's player count, queue and map as the
/// bot's activity.
///
/// # Arguments
/// - `ctx`: Gateway context used to set the activity
/// - `state`: Shared bot state holding the stats API and display settings
pub async fn start_scheduler(ctx: Context, state: Arc<BotState>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_ctx = ctx.clone();
    let job_state = state.clone();

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let ctx = job_ctx.clone();
        let state = job_state.clone();

        Box::pin(async move {
            if let Err(e) = update_presence(&ctx, &state).await {
                tracing::error!("Error updating bot presence: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Presence scheduler started");

    Ok(())
}

/// Fetches the server status once and updates the activity.
pub async fn update_presence(ctx: &Context, state: &BotState) -> Result<(), AppError> {
    let status = state.stats_api.server_status().await?;
    let text = status.activity_text(&state.server_label, state.max_players);

    tracing::debug!("Setting activity to '{}'", text);

    ctx.set_activity(Some(ActivityData::playing(text)));

    Ok(())
}
