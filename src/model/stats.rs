//! Game-stats API payloads and their display models.
//!
//! The player endpoint returns an array of stat entries whose meaning is fixed by
//! position. Positions are looked up defensively: a missing or empty entry renders as
//! "N/A" instead of failing the whole display.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::stats::StatsError;

/// Placeholder shown for stats the payload does not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Maximum number of weapons shown in the stats embed.
pub const MAX_WEAPONS: usize = 7;

const STEAM_ID_LENGTH: usize = 17;

// Positions of the named stats in the player payload's `stats` array
const ONLINE_TIME_OFFSET: usize = 0;
const FAVORITE_KIT_OFFSET: usize = 2;
const MATCHES_OFFSET: usize = 3;
const WINRATE_OFFSET: usize = 4;
const KD_OFFSET: usize = 5;
const KILLS_OFFSET: usize = 6;
const DEATHS_OFFSET: usize = 7;
const REVIVES_OFFSET: usize = 8;

/// Validated 17-digit Steam identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamId(String);

impl SteamId {
    /// Parses a SteamID, accepting exactly 17 ASCII digits.
    pub fn parse(value: &str) -> Result<Self, StatsError> {
        if value.len() == STEAM_ID_LENGTH && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value.to_string()))
        } else {
            Err(StatsError::InvalidSteamId(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeaponBlock {
    #[serde(default)]
    pub weapon: Map<String, Value>,
}

/// Response of the player stats endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStatsResponse {
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub weapons: WeaponBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerData {
    #[serde(default)]
    pub players: Option<Vec<Value>>,
    #[serde(default)]
    pub queue_players: Value,
    #[serde(default)]
    pub map: Value,
}

/// Response of the game-server status endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerStatusResponse {
    pub status: String,
    #[serde(default)]
    pub data: Option<ServerData>,
}

/// Weapon and the number of kills made with it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponUsage {
    pub name: String,
    pub kills: u64,
}

/// Named stats extracted from a player payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatsSummary {
    pub online_time: String,
    pub favorite_kit: String,
    pub matches: String,
    pub winrate: String,
    pub kd: String,
    pub kills: String,
    pub deaths: String,
    pub revives: String,
    /// Most used weapons, highest kill count first.
    pub weapons: Vec<WeaponUsage>,
}

impl PlayerStatsSummary {
    pub fn from_response(response: &PlayerStatsResponse) -> Self {
        let stat = |offset: usize| {
            response
                .stats
                .get(offset)
                .map(|entry| display_value(&entry.value))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };

        let mut weapons: Vec<WeaponUsage> = response
            .weapons
            .weapon
            .iter()
            .map(|(name, usage)| WeaponUsage {
                name: name.clone(),
                kills: usage.get("cnt").and_then(value_as_u64).unwrap_or(0),
            })
            .collect();
        weapons.sort_by(|a, b| b.kills.cmp(&a.kills).then_with(|| a.name.cmp(&b.name)));
        weapons.truncate(MAX_WEAPONS);

        Self {
            online_time: stat(ONLINE_TIME_OFFSET),
            favorite_kit: stat(FAVORITE_KIT_OFFSET),
            matches: stat(MATCHES_OFFSET),
            winrate: stat(WINRATE_OFFSET),
            kd: stat(KD_OFFSET),
            kills: stat(KILLS_OFFSET),
            deaths: stat(DEATHS_OFFSET),
            revives: stat(REVIVES_OFFSET),
            weapons,
        }
    }
}

/// Live state of the game server shown as the bot's activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerStatus {
    pub players: usize,
    pub queue: String,
    pub map: String,
}

impl ServerStatus {
    /// Extracts the status, rejecting payloads without an "ok" status or player list.
    pub fn from_response(response: &ServerStatusResponse) -> Result<Self, StatsError> {
        if response.status != "ok" {
            return Err(StatsError::UnexpectedPayload(format!(
                "status '{}'",
                response.status
            )));
        }

        let Some(data) = &response.data else {
            return Err(StatsError::UnexpectedPayload("missing data".to_string()));
        };
        let Some(players) = &data.players else {
            return Err(StatsError::UnexpectedPayload(
                "missing player list".to_string(),
            ));
        };

        Ok(Self {
            players: players.len(),
            queue: display_value(&data.queue_players),
            map: display_value(&data.map),
        })
    }

    /// Activity text, e.g. `RU[AAS] - 87/100 (+3) Narva`.
    pub fn activity_text(&self, label: &str, max_players: u32) -> String {
        format!(
            "{} - {}/{} (+{}) {}",
            label, self.players, max_players, self.queue, self.map
        )
    }
}

/// Renders a JSON scalar for display, "N/A" for null, empty strings and containers.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) if !s.trim().is_empty() => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
