//! State shared by every event handler and the presence scheduler.
//!
//! Built once at startup and handed to the serenity handler behind an `Arc`. The
//! Discord-facing pieces (`GuildActions`, `Conversation`) are created per event from
//! the context's HTTP client, so only long-lived resources live here.

use std::sync::Arc;

use crate::{
    data::{player::PlayerRepository, promotion_date::PromotionDateRepository},
    model::guild::GuildConfig,
    service::stats::StatsApi,
    util::clock::Clock,
};

pub struct BotState {
    /// Guild the bot manages.
    pub guild_id: u64,

    /// Ladder, privileged roles and target channels.
    pub guild: GuildConfig,

    /// Probation start dates, persisted to `promotionDates.json`.
    pub promotion_dates: PromotionDateRepository,

    /// Registered SteamIDs, persisted to `players.json`.
    pub players: PlayerRepository,

    pub stats_api: Arc<dyn StatsApi>,

    pub clock: Arc<dyn Clock>,

    /// Server name shown in the bot's activity.
    pub server_label: String,

    pub max_players: u32,
}

impl BotState {
    pub fn new(
        guild_id: u64,
        guild: GuildConfig,
        promotion_dates: PromotionDateRepository,
        players: PlayerRepository,
        stats_api: Arc<dyn StatsApi>,
        clock: Arc<dyn Clock>,
        server_label: String,
        max_players: u32,
    ) -> Self {
        Self {
            guild_id,
            guild,
            promotion_dates,
            players,
            stats_api,
            clock,
            server_label,
            max_players,
        }
    }
}
