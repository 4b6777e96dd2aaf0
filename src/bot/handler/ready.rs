//! Ready event handler for bot initialization.
//!
//! Fired when the bot has connected to Discord's gateway. Used to:
//! - Register the user context-menu commands on the managed guild
//! - Show the game server status right away and start the presence scheduler

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serenity::all::{CommandType, Context, CreateCommand, GuildId, Ready};

use crate::{
    model::transition::TransitionKind,
    scheduler::presence,
    state::BotState,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `presence_started` - Whether a previous ready already started the scheduler
/// - `ctx` - Discord context for command registration and activity
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    state: &Arc<BotState>,
    presence_started: &AtomicBool,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let commands = [
        TransitionKind::Promote,
        TransitionKind::Demote,
        TransitionKind::Ban,
    ]
    .into_iter()
    .map(|kind| CreateCommand::new(kind.command_name()).kind(CommandType::User))
    .collect();

    match GuildId::new(state.guild_id)
        .set_commands(&ctx.http, commands)
        .await
    {
        Ok(registered) => tracing::info!(
            "Registered {} context menu commands on guild {}",
            registered.len(),
            state.guild_id
        ),
        Err(e) => tracing::error!("Failed to register context menu commands: {}", e),
    }

    if let Err(e) = presence::update_presence(&ctx, state).await {
        tracing::warn!("Failed to set initial presence: {}", e);
    }

    if !presence_started.swap(true, Ordering::SeqCst) {
        if let Err(e) = presence::start_scheduler(ctx, state.clone()).await {
            tracing::error!("Failed to start presence scheduler: {}", e);
            presence_started.store(false, Ordering::SeqCst);
        }
    }
}
