//! Player statistics and game-server status from the external stats API.
//!
//! `!stats` shows the caller's statistics for the SteamID they registered. Members
//! without a registered SteamID, or whose lookup fails, are asked to send one; the
//! next message they post within `STEAM_ID_PROMPT_TIMEOUT` is validated and stored.

use std::{sync::Arc, time::Duration};

use serenity::{
    all::{CreateEmbed, CreateEmbedFooter},
    async_trait,
};

use crate::{
    data::player::PlayerStore,
    error::AppError,
    model::stats::{
        PlayerStatsResponse, PlayerStatsSummary, ServerStatus, ServerStatusResponse, SteamId,
        NOT_AVAILABLE,
    },
    service::conversation::{Conversation, ReplyFilter},
};

/// How long the SteamID prompt waits for an answer.
pub const STEAM_ID_PROMPT_TIMEOUT: Duration = Duration::from_secs(30);

const EMBED_COLOR: u32 = 0x2b2d31;
const EMBED_TITLE: &str = " 📊Ваша статистика";
const EMBED_FOOTER: &str = "источник: Русское Сообщество";

const STEAM_ID_MISSING: &str =
    "Ваш SteamID не найден. Напишите мне свой SteamID, чтоб я его сохранил";
const STATS_FETCH_FAILED: &str = "Произошла ошибка при получении ваших статистик. Пожалуйста, проверьте ваш SteamID и отправьте его заново.";
const STEAM_ID_INVALID: &str = "Неверный SteamID. Он состоит из 17 цифр.";
const STEAM_ID_TIMEOUT: &str = "Вы не предоставили SteamID вовремя. Попробуйте снова.";

/// Read access to the game-stats API.
#[async_trait]
pub trait StatsApi: Send + Sync {
    async fn player_stats(&self, steam_id: &SteamId) -> Result<PlayerStatsResponse, AppError>;

    async fn server_status(&self) -> Result<ServerStatus, AppError>;
}

/// `StatsApi` over HTTP.
pub struct HttpStatsApi {
    client: reqwest::Client,
    player_stats_url: String,
    server_stats_url: String,
}

impl HttpStatsApi {
    pub fn new(client: reqwest::Client, player_stats_url: String, server_stats_url: String) -> Self {
        Self {
            client,
            player_stats_url,
            server_stats_url,
        }
    }
}

#[async_trait]
impl StatsApi for HttpStatsApi {
    async fn player_stats(&self, steam_id: &SteamId) -> Result<PlayerStatsResponse, AppError> {
        let response = self
            .client
            .get(&self.player_stats_url)
            .query(&[("steam_id", steam_id.as_str()), ("full", "true")])
            .send()
            .await?
            .error_for_status()?
            .json::<PlayerStatsResponse>()
            .await?;

        Ok(response)
    }

    async fn server_status(&self) -> Result<ServerStatus, AppError> {
        let response = self
            .client
            .get(&self.server_stats_url)
            .send()
            .await?
            .error_for_status()?
            .json::<ServerStatusResponse>()
            .await?;

        Ok(ServerStatus::from_response(&response)?)
    }
}

/// How a `!stats` request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsOutcome {
    /// Statistics embed sent.
    Shown,
    /// A new SteamID was stored.
    Registered,
    /// The member answered the prompt with something that is not a SteamID.
    InvalidSteamId,
    /// The member did not answer the prompt in time.
    TimedOut,
}

pub struct PlayerStatsService<'a> {
    api: &'a dyn StatsApi,
    players: &'a dyn PlayerStore,
    command_prefix: &'a str,
}

impl<'a> PlayerStatsService<'a> {
    pub fn new(api: &'a dyn StatsApi, players: &'a dyn PlayerStore, command_prefix: &'a str) -> Self {
        Self {
            api,
            players,
            command_prefix,
        }
    }

    /// Answers a `!stats` request.
    ///
    /// # Arguments
    /// - `conversation` - Channel the request came from
    /// - `user_id` - Member who asked
    ///
    /// # Returns
    /// - `Ok(StatsOutcome)` - How the request ended; the member has been answered
    /// - `Err(AppError)` - Replying or storing the SteamID failed
    pub async fn show(
        &self,
        conversation: &dyn Conversation,
        user_id: u64,
    ) -> Result<StatsOutcome, AppError> {
        let Some(steam_id) = self.players.steam_id(user_id) else {
            conversation.reply(STEAM_ID_MISSING).await?;
            return self.register(conversation, user_id, false).await;
        };

        match self.api.player_stats(&steam_id).await {
            Ok(response) => {
                let summary = PlayerStatsSummary::from_response(&response);
                conversation.reply_embed(stats_embed(&summary)).await?;

                Ok(StatsOutcome::Shown)
            }
            Err(e) => {
                tracing::warn!("Failed to fetch stats for SteamID {}: {}", steam_id, e);

                conversation.reply(STATS_FETCH_FAILED).await?;
                self.register(conversation, user_id, true).await
            }
        }
    }

    /// Waits for the member to send a SteamID and stores it.
    async fn register(
        &self,
        conversation: &dyn Conversation,
        user_id: u64,
        replacing: bool,
    ) -> Result<StatsOutcome, AppError> {
        let filter: ReplyFilter = Arc::new(|_: &str| true);
        let Some(answer) = conversation
            .await_reply(filter, STEAM_ID_PROMPT_TIMEOUT)
            .await
        else {
            conversation.reply(STEAM_ID_TIMEOUT).await?;
            return Ok(StatsOutcome::TimedOut);
        };

        let steam_id = match SteamId::parse(answer.trim()) {
            Ok(steam_id) => steam_id,
            Err(e) => {
                tracing::debug!("Member {} sent an invalid SteamID: {}", user_id, e);
                conversation.reply(STEAM_ID_INVALID).await?;
                return Ok(StatsOutcome::InvalidSteamId);
            }
        };

        self.players.put_steam_id(user_id, steam_id)?;

        let verb = if replacing { "обновлён" } else { "сохранён" };
        conversation
            .reply(&format!(
                "Ваш SteamID успешно {}! Используйте команду `{}stats` снова для просмотра статистики.",
                verb, self.command_prefix
            ))
            .await?;

        Ok(StatsOutcome::Registered)
    }
}

/// "Скилл" field body.
pub fn skill_field(summary: &PlayerStatsSummary) -> String {
    format!(
        "**K/D**: {}\n**Время онлайн**: {}\n**Убийства**: {}\n**Смерти**: {}\n**Поднятий**: {}\n**Любимый кит**: {}\n**Матчей сыграно**: {}\n**Винрейт**: {}",
        summary.kd,
        summary.online_time,
        summary.kills,
        summary.deaths,
        summary.revives,
        summary.favorite_kit,
        summary.matches,
        summary.winrate
    )
}

/// "Оружие" and "Убийства" field bodies, one weapon per line.
pub fn weapon_fields(summary: &PlayerStatsSummary) -> (String, String) {
    if summary.weapons.is_empty() {
        return (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string());
    }

    let names = summary
        .weapons
        .iter()
        .map(|weapon| weapon.name.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let kills = summary
        .weapons
        .iter()
        .map(|weapon| weapon.kills.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    (names, kills)
}

fn stats_embed(summary: &PlayerStatsSummary) -> CreateEmbed {
    let (weapons, kills) = weapon_fields(summary);

    CreateEmbed::new()
        .color(EMBED_COLOR)
        .title(EMBED_TITLE)
        .field("Скилл", skill_field(summary), true)
        .field("Оружие", weapons, true)
        .field("Убийства", kills, true)
        .footer(CreateEmbedFooter::new(EMBED_FOOTER))
}
