//! Domain models.
//!
//! Plain data types and pure logic shared by the services: the role ladder and rank
//! resolution, guild configuration, member snapshots, transition requests and
//! outcomes, chat command parsing and the game-stats payloads.

pub mod command;
pub mod guild;
pub mod ladder;
pub mod member;
pub mod stats;
pub mod transition;
