use serenity::all::{Context, Interaction};

use crate::{
    error::{AppError, GENERIC_FAILURE_MESSAGE},
    model::{member::GuildMember, transition::TransitionKind},
    service::{
        conversation::{Conversation, InteractionConversation},
        guild::{DiscordGuildActions, GuildActions},
        transition::TransitionService,
    },
    state::BotState,
};

/// Handle a user context-menu command
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.guild_id.map(|id| id.get()) != Some(state.guild_id) {
        return;
    }

    let Some(kind) = TransitionKind::from_command_name(&command.data.name) else {
        tracing::debug!("Ignoring unknown command '{}'", command.data.name);
        return;
    };
    let Some(target_id) = command.data.target_id else {
        tracing::warn!("Context menu command '{}' without a target", command.data.name);
        return;
    };

    let actor_id = command.user.id.get();
    let target_id = target_id.to_user_id().get();

    let guild = DiscordGuildActions::new(ctx.http.clone(), state.guild_id);
    let conversation = InteractionConversation::new(ctx.http.clone(), ctx.shard.clone(), command);

    if let Err(e) = conversation.acknowledge().await {
        tracing::error!("Failed to acknowledge {} request: {}", kind, e);
    }

    let (actor, target) = match fetch_pair(&guild, actor_id, target_id).await {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!(
                "Failed to fetch members for {} by {} on {}: {}",
                kind,
                actor_id,
                target_id,
                e
            );
            if let Err(e) = conversation.reply(GENERIC_FAILURE_MESSAGE).await {
                tracing::error!("Failed to answer interaction: {}", e);
            }
            return;
        }
    };

    let service = TransitionService::new(
        &guild,
        &state.promotion_dates,
        &state.guild,
        state.clock.as_ref(),
    );

    // The outcome has already been reported to the actor and logged
    let _ = service.respond(kind, &conversation, &actor, &target).await;
}

async fn fetch_pair(
    guild: &DiscordGuildActions,
    actor_id: u64,
    target_id: u64,
) -> Result<(GuildMember, GuildMember), AppError> {
    let actor = guild.member(actor_id).await?;
    let target = guild.member(target_id).await?;

    Ok((actor, target))
}
