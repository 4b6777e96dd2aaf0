//! Guild capabilities used by the services.
//!
//! `GuildActions` is the narrow set of Discord operations the rank engine and the
//! other flows need. The production implementation talks to Discord through the
//! shared serenity HTTP client; tests provide an in-memory fake.

use std::{collections::HashMap, sync::Arc};

use serenity::{
    all::{ChannelId, CreateMessage, EditMember, GuildId, Member, Role, RoleId, UserId},
    async_trait,
    http::Http,
};

use crate::{error::AppError, model::member::GuildMember};

/// Page size used when scanning guild members.
const MEMBER_PAGE_SIZE: u64 = 1000;

#[async_trait]
pub trait GuildActions: Send + Sync {
    /// Fetches a member of the guild by user id.
    async fn member(&self, user_id: u64) -> Result<GuildMember, AppError>;

    /// First member whose display name contains `query`, case-insensitive.
    async fn find_member_by_name(&self, query: &str) -> Result<Option<GuildMember>, AppError>;

    /// Name of a guild role, `None` when the role does not exist in the guild.
    async fn role_name(&self, role_id: u64) -> Result<Option<String>, AppError>;

    async fn add_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError>;

    async fn remove_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError>;

    /// Replaces the member's whole role set.
    async fn set_roles(&self, user_id: u64, role_ids: &[u64]) -> Result<(), AppError>;

    /// Sends a direct message to a member.
    async fn send_direct(&self, user_id: u64, content: &str) -> Result<(), AppError>;

    async fn send_channel(&self, channel_id: u64, content: &str) -> Result<(), AppError>;

    /// Removes a member from the guild; they may rejoin.
    async fn kick(&self, user_id: u64, reason: &str) -> Result<(), AppError>;

    /// Bans a member from the guild.
    async fn ban(&self, user_id: u64, reason: &str) -> Result<(), AppError>;
}

/// `GuildActions` backed by Discord's HTTP API for a single guild.
pub struct DiscordGuildActions {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl DiscordGuildActions {
    pub fn new(http: Arc<Http>, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
        }
    }
}

#[async_trait]
impl GuildActions for DiscordGuildActions {
    async fn member(&self, user_id: u64) -> Result<GuildMember, AppError> {
        let member = self.guild_id.member(&self.http, UserId::new(user_id)).await?;

        Ok(GuildMember::from_member(&member))
    }

    async fn find_member_by_name(&self, query: &str) -> Result<Option<GuildMember>, AppError> {
        let mut after: Option<UserId> = None;

        loop {
            let page = self
                .guild_id
                .members(&self.http, Some(MEMBER_PAGE_SIZE), after)
                .await?;

            if let Some(member) = find_by_display_name(&page, query) {
                return Ok(Some(member));
            }

            if (page.len() as u64) < MEMBER_PAGE_SIZE {
                return Ok(None);
            }
            after = page.last().map(|member| member.user.id);
        }
    }

    async fn role_name(&self, role_id: u64) -> Result<Option<String>, AppError> {
        let roles = self.guild_id.roles(&self.http).await?;

        Ok(find_role_name(&roles, role_id))
    }

    async fn add_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.http
            .add_member_role(self.guild_id, UserId::new(user_id), RoleId::new(role_id), None)
            .await?;

        Ok(())
    }

    async fn remove_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.http
            .remove_member_role(self.guild_id, UserId::new(user_id), RoleId::new(role_id), None)
            .await?;

        Ok(())
    }

    async fn set_roles(&self, user_id: u64, role_ids: &[u64]) -> Result<(), AppError> {
        let roles: Vec<RoleId> = role_ids.iter().map(|role| RoleId::new(*role)).collect();

        self.guild_id
            .edit_member(&self.http, UserId::new(user_id), EditMember::new().roles(roles))
            .await?;

        Ok(())
    }

    async fn send_direct(&self, user_id: u64, content: &str) -> Result<(), AppError> {
        UserId::new(user_id)
            .direct_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }

    async fn send_channel(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        ChannelId::new(channel_id).say(&self.http, content).await?;

        Ok(())
    }

    async fn kick(&self, user_id: u64, reason: &str) -> Result<(), AppError> {
        self.guild_id
            .kick_with_reason(&self.http, UserId::new(user_id), reason)
            .await?;

        Ok(())
    }

    async fn ban(&self, user_id: u64, reason: &str) -> Result<(), AppError> {
        self.guild_id
            .ban_with_reason(&self.http, UserId::new(user_id), 0, reason)
            .await?;

        Ok(())
    }
}

/// First member whose display name contains `query`, case-insensitive.
fn find_by_display_name(members: &[Member], query: &str) -> Option<GuildMember> {
    members
        .iter()
        .map(GuildMember::from_member)
        .find(|member| member.matches_name(query))
}

fn find_role_name(roles: &HashMap<RoleId, Role>, role_id: u64) -> Option<String> {
    roles
        .get(&RoleId::new(role_id))
        .map(|role| role.name.clone())
}
