use std::{ops::RangeInclusive, str::FromStr};

use crate::{
    error::{config::ConfigError, AppError},
    model::guild::{GuildChannels, GuildConfig},
};

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_PROBATION_DAYS: i64 = 14;
const PROBATION_DAYS_RANGE: RangeInclusive<i64> = 1..=365;
const DEFAULT_PROMOTION_STORE_PATH: &str = "promotionDates.json";
const DEFAULT_PLAYER_STORE_PATH: &str = "players.json";
const DEFAULT_SERVER_STATS_URL: &str = "https://sqstat.ru/api/server/stat.php?server=C";
const DEFAULT_PLAYER_STATS_URL: &str = "https://sqstat.ru/api/player/stats.php";
const DEFAULT_SERVER_LABEL: &str = "RU[AAS]";
const DEFAULT_MAX_PLAYERS: u32 = 100;

pub struct Config {
    pub discord_bot_token: String,
    pub guild_id: u64,
    pub guild: GuildConfig,

    pub promotion_store_path: String,
    pub player_store_path: String,

    pub server_stats_url: String,
    pub player_stats_url: String,
    /// Server name shown in the bot's activity.
    pub server_label: String,
    pub max_players: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing or unparsable variable, or an invalid ladder
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional =
            |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let channels = GuildChannels {
            audit_log: parse_id("AUDIT_LOG_CHANNEL_ID", &required("AUDIT_LOG_CHANNEL_ID")?)?,
            public_feed: parse_id(
                "PUBLIC_FEED_CHANNEL_ID",
                &required("PUBLIC_FEED_CHANNEL_ID")?,
            )?,
            announcements: parse_id(
                "ANNOUNCEMENT_CHANNEL_ID",
                &required("ANNOUNCEMENT_CHANNEL_ID")?,
            )?,
        };

        let probation_days = match lookup("PROBATION_DAYS") {
            Some(value) => parse_in_range("PROBATION_DAYS", &value, PROBATION_DAYS_RANGE)?,
            None => DEFAULT_PROBATION_DAYS,
        };
        let max_players = match lookup("MAX_PLAYERS") {
            Some(value) => parse_value::<u32>("MAX_PLAYERS", &value)?,
            None => DEFAULT_MAX_PLAYERS,
        };

        let guild = GuildConfig::new(
            parse_id_list("ADMIN_ROLE_IDS", &required("ADMIN_ROLE_IDS")?)?,
            parse_id_list("RANK_ROLE_IDS", &required("RANK_ROLE_IDS")?)?,
            parse_id("PROBATION_ROLE_ID", &required("PROBATION_ROLE_ID")?)?,
            channels,
            probation_days,
            optional("COMMAND_PREFIX", DEFAULT_COMMAND_PREFIX),
        )?;

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            guild_id: parse_id("DISCORD_GUILD_ID", &required("DISCORD_GUILD_ID")?)?,
            guild,
            promotion_store_path: optional("PROMOTION_STORE_PATH", DEFAULT_PROMOTION_STORE_PATH),
            player_store_path: optional("PLAYER_STORE_PATH", DEFAULT_PLAYER_STORE_PATH),
            server_stats_url: optional("SERVER_STATS_URL", DEFAULT_SERVER_STATS_URL),
            player_stats_url: optional("PLAYER_STATS_URL", DEFAULT_PLAYER_STATS_URL),
            server_label: optional("SERVER_LABEL", DEFAULT_SERVER_LABEL),
            max_players,
        })
    }
}

fn parse_value<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })
}

fn parse_in_range(
    name: &str,
    value: &str,
    range: RangeInclusive<i64>,
) -> Result<i64, ConfigError> {
    let parsed = parse_value::<i64>(name, value)?;
    if !range.contains(&parsed) {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    Ok(parsed)
}

/// Parses a Discord snowflake; zero is not a valid id.
fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    match parse_value::<u64>(name, value)? {
        0 => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
        id => Ok(id),
    }
}

/// Parses a comma-separated list of snowflakes, keeping the given order.
fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_id(name, part))
        .collect()
}
