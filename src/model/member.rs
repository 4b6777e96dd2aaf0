//! Guild member domain model.
//!
//! A snapshot of the parts of a Discord member the bot reasons about: identity,
//! display name and held role ids. Converted from serenity's `Member` at the service
//! boundary so the rank logic never touches serenity types.

use serenity::all::Member;

use crate::model::ladder::{Rank, RoleLadder};

#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    /// Discord user ID as a u64.
    pub user_id: u64,
    /// Guild nickname, falling back to the global name and then the username.
    pub display_name: String,
    /// Role ids the member currently holds.
    pub roles: Vec<u64>,
}

impl GuildMember {
    /// Converts a serenity member into the domain model.
    pub fn from_member(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            display_name: member.display_name().to_string(),
            roles: member.roles.iter().map(|role| role.get()).collect(),
        }
    }

    pub fn holds(&self, role_id: u64) -> bool {
        self.roles.contains(&role_id)
    }

    pub fn holds_any(&self, role_ids: &[u64]) -> bool {
        self.roles.iter().any(|role| role_ids.contains(role))
    }

    /// Highest ladder rank held by the member, `None` when no held role is a rank.
    pub fn rank(&self, ladder: &RoleLadder) -> Option<Rank> {
        ladder.highest_rank(&self.roles)
    }

    /// Case-insensitive substring match against the display name.
    pub fn matches_name(&self, query: &str) -> bool {
        self.display_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Discord mention markup for a user id.
pub fn mention(user_id: u64) -> String {
    format!("<@{}>", user_id)
}
