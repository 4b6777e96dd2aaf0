use serenity::all::{Context, Member};

use crate::{
    service::{guild::DiscordGuildActions, onboarding::OnboardingService},
    state::BotState,
};

/// Handles a member joining the guild by giving them the guest role.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context providing the HTTP client
/// - `new_member` - Member who joined
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    if new_member.guild_id.get() != state.guild_id {
        return;
    }

    let user_id = new_member.user.id.get();
    tracing::info!("Member {} joined the guild", user_id);

    let guild = DiscordGuildActions::new(ctx.http.clone(), state.guild_id);

    if let Err(e) = OnboardingService::new(&guild, &state.guild)
        .welcome(user_id)
        .await
    {
        tracing::error!("Failed to onboard new member {}: {}", user_id, e);
    }
}
