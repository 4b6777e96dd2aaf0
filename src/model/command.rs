//! Chat command parsing.
//!
//! Recognised messages:
//! - `<prefix>рекрут` - probation time left
//! - `<prefix>stats` - player statistics (case-insensitive)
//! - `<prefix><name> повысить|понизить` - rank transition by display name
//! - `*объявление <text>` - administrator announcement

use crate::model::transition::TransitionKind;

/// Marker that starts an announcement message.
pub const ANNOUNCEMENT_MARKER: &str = "*объявление";

const RECRUIT_COMMAND: &str = "рекрут";
const STATS_COMMAND: &str = "stats";

#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    Recruit,
    Stats,
    Transition {
        /// Display-name fragment used to find the target.
        name_query: String,
        kind: TransitionKind,
    },
    Announcement(String),
}

impl ChatCommand {
    /// Parses a chat message, returning `None` for anything that is not a command.
    pub fn parse(content: &str, prefix: &str) -> Option<Self> {
        if let Some(text) = content.strip_prefix(ANNOUNCEMENT_MARKER) {
            return Some(Self::Announcement(text.trim().to_string()));
        }

        let rest = content.strip_prefix(prefix)?;

        if rest.starts_with(RECRUIT_COMMAND) {
            return Some(Self::Recruit);
        }
        if rest.to_lowercase().starts_with(STATS_COMMAND) {
            return Some(Self::Stats);
        }

        let mut args = rest.split_whitespace();
        let name_query = args.next()?;
        let kind = TransitionKind::from_chat_verb(args.next()?)?;

        Some(Self::Transition {
            name_query: name_query.to_string(),
            kind,
        })
    }
}
