//! Discord gateway integration.
//!
//! The bot connects to a single guild and reacts to chat commands, the user
//! context-menu commands registered at startup and member joins. Each event builds the
//! services it needs from the shared `BotState` and the context's HTTP client.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability and command registration
//! - `GUILD_MEMBERS` - Member joins and member lookups (privileged intent)
//! - `GUILD_MESSAGES` - Chat commands and prompt replies
//! - `MESSAGE_CONTENT` - Reading command text (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
