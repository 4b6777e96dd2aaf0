//! Rank transition request and outcome types.

use std::fmt;

use crate::model::member::mention;

/// Context-menu command names registered on the guild.
pub const PROMOTE_COMMAND: &str = "🚀Повысить";
pub const DEMOTE_COMMAND: &str = "Понизить";
pub const BAN_COMMAND: &str = "Забанить";

/// Privileged action requested against a target member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Promote,
    Demote,
    Ban,
}

impl TransitionKind {
    /// Maps a user context-menu command name to the action it triggers.
    pub fn from_command_name(name: &str) -> Option<Self> {
        match name {
            PROMOTE_COMMAND => Some(Self::Promote),
            DEMOTE_COMMAND => Some(Self::Demote),
            BAN_COMMAND => Some(Self::Ban),
            _ => None,
        }
    }

    /// Maps the verb of a `<prefix><name> <verb>` chat command, case-insensitive.
    ///
    /// Banning is only available from the context menu.
    pub fn from_chat_verb(verb: &str) -> Option<Self> {
        match verb.to_lowercase().as_str() {
            "повысить" => Some(Self::Promote),
            "понизить" => Some(Self::Demote),
            _ => None,
        }
    }

    pub fn command_name(&self) -> &'static str {
        match self {
            Self::Promote => PROMOTE_COMMAND,
            Self::Demote => DEMOTE_COMMAND,
            Self::Ban => BAN_COMMAND,
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Promote => "promote",
            Self::Demote => "demote",
            Self::Ban => "ban",
        };
        f.write_str(name)
    }
}

/// Choice offered when a recruit is demoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbationExit {
    /// Option "1": keep the member as a guest.
    Guest,
    /// Option "2": remove the member from the guild.
    Remove,
}

impl ProbationExit {
    /// Parses an exact "1" or "2" reply.
    pub fn from_reply(content: &str) -> Option<Self> {
        match content {
            "1" => Some(Self::Guest),
            "2" => Some(Self::Remove),
            _ => None,
        }
    }
}

/// Completed transition.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// Target moved one rank up; `probation` is set when the new rank is the probation rank.
    Promoted { role_name: String, probation: bool },
    /// Target moved one rank down.
    Demoted { role_name: String },
    /// Recruit replaced by a bare guest role.
    ConvertedToGuest,
    /// Recruit kicked from the guild.
    Removed,
    /// Target banned from the guild.
    Banned,
}

impl TransitionOutcome {
    /// Confirmation shown to the actor.
    pub fn confirmation(&self, target_id: u64) -> String {
        match self {
            Self::Promoted { role_name, .. } => format!("Успешно повышен до роли {}", role_name),
            Self::Demoted { role_name } => format!("Игрок понижен до роли {}.", role_name),
            Self::ConvertedToGuest => "Игрок понижен до гостя.".to_string(),
            Self::Removed => "Игрок исключен из сервера.".to_string(),
            Self::Banned => format!("{} был успешно забанен.", mention(target_id)),
        }
    }
}
