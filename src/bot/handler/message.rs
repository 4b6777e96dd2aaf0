use serenity::all::{Context, Message};

use crate::{
    error::GENERIC_FAILURE_MESSAGE,
    model::{command::ChatCommand, member::GuildMember, transition::TransitionKind},
    service::{
        announcement::{AnnouncementService, ANNOUNCEMENT_SENT},
        conversation::{Conversation, MessageConversation},
        guild::{DiscordGuildActions, GuildActions},
        recruit::RecruitService,
        stats::PlayerStatsService,
        transition::TransitionService,
    },
    state::BotState,
};

/// Reply when a `<prefix><name> <verb>` command matches nobody.
const TARGET_NOT_FOUND: &str = "Игрок с таким никнеймом не найден.";

/// Handle message creation in a channel
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    // Only the managed guild, never DMs
    if message.guild_id.map(|id| id.get()) != Some(state.guild_id) {
        return;
    }

    let Some(command) = ChatCommand::parse(&message.content, &state.guild.command_prefix) else {
        return;
    };

    let author_id = message.author.id.get();
    let guild = DiscordGuildActions::new(ctx.http.clone(), state.guild_id);
    let conversation = MessageConversation::new(ctx.http.clone(), ctx.shard.clone(), message);

    tracing::debug!("Member {} issued {:?}", author_id, command);

    if let ChatCommand::Stats = command {
        let service = PlayerStatsService::new(
            state.stats_api.as_ref(),
            &state.players,
            &state.guild.command_prefix,
        );
        if let Err(e) = service.show(&conversation, author_id).await {
            tracing::error!("Failed to handle stats request of {}: {}", author_id, e);
        }
        return;
    }

    let author = match guild.member(author_id).await {
        Ok(author) => author,
        Err(e) => {
            tracing::error!("Failed to fetch command author {}: {}", author_id, e);
            reply(&conversation, GENERIC_FAILURE_MESSAGE).await;
            return;
        }
    };

    match command {
        ChatCommand::Recruit => handle_recruit(state, &guild, &conversation, &author).await,
        ChatCommand::Transition { name_query, kind } => {
            handle_transition(state, &guild, &conversation, &author, &name_query, kind).await
        }
        ChatCommand::Announcement(text) => {
            handle_announcement(state, &guild, &conversation, &author, &text).await
        }
        ChatCommand::Stats => {}
    }
}

async fn handle_recruit(
    state: &BotState,
    guild: &DiscordGuildActions,
    conversation: &MessageConversation,
    author: &GuildMember,
) {
    let service = RecruitService::new(
        guild,
        &state.promotion_dates,
        &state.guild,
        state.clock.as_ref(),
    );

    match service.check(author).await {
        Ok(status) => reply(conversation, &status.reply()).await,
        Err(e) => {
            tracing::info!("Recruit check by {} rejected: {}", author.user_id, e);
            reply(conversation, e.user_message()).await;
        }
    }
}

async fn handle_transition(
    state: &BotState,
    guild: &DiscordGuildActions,
    conversation: &MessageConversation,
    actor: &GuildMember,
    name_query: &str,
    kind: TransitionKind,
) {
    let target = match guild.find_member_by_name(name_query).await {
        Ok(Some(target)) => target,
        Ok(None) => {
            reply(conversation, TARGET_NOT_FOUND).await;
            return;
        }
        Err(e) => {
            tracing::error!("Failed to search members for '{}': {}", name_query, e);
            reply(conversation, GENERIC_FAILURE_MESSAGE).await;
            return;
        }
    };

    let service = TransitionService::new(
        guild,
        &state.promotion_dates,
        &state.guild,
        state.clock.as_ref(),
    );

    // The outcome has already been reported to the actor and logged
    let _ = service.respond(kind, conversation, actor, &target).await;
}

async fn handle_announcement(
    state: &BotState,
    guild: &DiscordGuildActions,
    conversation: &MessageConversation,
    author: &GuildMember,
    text: &str,
) {
    let service = AnnouncementService::new(guild, &state.guild);

    match service.announce(author, text).await {
        Ok(()) => reply(conversation, ANNOUNCEMENT_SENT).await,
        Err(e) => {
            tracing::warn!("Announcement by {} failed: {}", author.user_id, e);
            reply(conversation, e.user_message()).await;
        }
    }
}

async fn reply(conversation: &MessageConversation, content: &str) {
    if let Err(e) = conversation.reply(content).await {
        tracing::error!("Failed to reply to chat command: {}", e);
    }
}
