//! Persistence layer.
//!
//! Flat JSON-file stores owned by the bot: probation start dates and SteamID
//! registrations. Each store is exposed through a trait so services can be tested
//! against in-memory fakes.

pub mod json_store;
pub mod player;
pub mod promotion_date;

#[cfg(test)]
mod test;
