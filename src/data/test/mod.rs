use chrono::{DateTime, Utc};
use test_utils::{builder::TestBuilder, time::fixed_now};

use crate::{
    data::{
        json_store::JsonFileStore,
        player::{PlayerRepository, PlayerStore},
        promotion_date::{PromotionDateRepository, PromotionDateStore},
    },
    error::AppError,
    model::stats::SteamId,
};
