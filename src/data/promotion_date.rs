use std::path::Path;

use chrono::{DateTime, Utc};

use crate::{data::json_store::JsonFileStore, error::AppError};

/// Persisted probation start dates keyed by member.
///
/// Consistency contract: last write wins and every `put` is durable before it
/// returns. Entries are never deleted; a member who left probation is simply no
/// longer queried.
pub trait PromotionDateStore: Send + Sync {
    fn get(&self, user_id: u64) -> Option<DateTime<Utc>>;

    fn put(&self, user_id: u64, started_at: DateTime<Utc>) -> Result<(), AppError>;
}

/// `promotionDates.json`: member id -> ISO-8601 timestamp of probation entry.
pub struct PromotionDateRepository {
    store: JsonFileStore<DateTime<Utc>>,
}

impl PromotionDateRepository {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        Ok(Self {
            store: JsonFileStore::load(path)?,
        })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }
}

impl PromotionDateStore for PromotionDateRepository {
    fn get(&self, user_id: u64) -> Option<DateTime<Utc>> {
        self.store.get(&user_id.to_string())
    }

    fn put(&self, user_id: u64, started_at: DateTime<Utc>) -> Result<(), AppError> {
        self.store.put(&user_id.to_string(), started_at)
    }
}
