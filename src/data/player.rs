use std::path::Path;

use crate::{data::json_store::JsonFileStore, error::AppError, model::stats::SteamId};

/// Persisted SteamID registrations keyed by member.
pub trait PlayerStore: Send + Sync {
    fn steam_id(&self, user_id: u64) -> Option<SteamId>;

    fn put_steam_id(&self, user_id: u64, steam_id: SteamId) -> Result<(), AppError>;
}

/// `players.json`: member id -> SteamID.
pub struct PlayerRepository {
    store: JsonFileStore<String>,
}

impl PlayerRepository {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        Ok(Self {
            store: JsonFileStore::load(path)?,
        })
    }
}

impl PlayerStore for PlayerRepository {
    /// Stored SteamID of a member; a stored value that no longer validates is ignored.
    fn steam_id(&self, user_id: u64) -> Option<SteamId> {
        let raw = self.store.get(&user_id.to_string())?;

        match SteamId::parse(&raw) {
            Ok(steam_id) => Some(steam_id),
            Err(e) => {
                tracing::warn!("Ignoring stored SteamID of member {}: {}", user_id, e);
                None
            }
        }
    }

    fn put_steam_id(&self, user_id: u64, steam_id: SteamId) -> Result<(), AppError> {
        self.store
            .put(&user_id.to_string(), steam_id.as_str().to_string())
    }
}
