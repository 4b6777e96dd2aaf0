//! Guild configuration domain model.
//!
//! Holds the role ladder together with the role and channel ids the bot acts on.
//! Built once from the environment at startup and injected into every service, so
//! tests can supply a synthetic ladder.

use crate::{error::config::ConfigError, model::ladder::RoleLadder};

/// Number of top non-admin ranks that may promote, demote and ban.
const PRIVILEGED_RANK_COUNT: usize = 2;

/// Channels receiving the bot's posts.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildChannels {
    /// Append-only log of every privileged action and attempt.
    pub audit_log: u64,
    /// Public feed for promotions, demotions, welcomes and removals.
    pub public_feed: u64,
    /// Channel receiving administrator announcements.
    pub announcements: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    /// Full ladder: administrator roles followed by the clan ranks.
    pub ladder: RoleLadder,
    /// Administrator roles (top of the ladder).
    pub admin_roles: Vec<u64>,
    /// Roles allowed to promote, demote and ban.
    pub authorized_roles: Vec<u64>,
    /// Rank whose holders are on timed probation.
    pub probation_role: u64,
    /// Lowest rank, given to newcomers and to recruits converted to guests.
    pub guest_role: u64,
    pub channels: GuildChannels,
    /// Length of the probation period in days.
    pub probation_days: i64,
    /// Prefix of chat commands.
    pub command_prefix: String,
}

impl GuildConfig {
    /// Builds the guild configuration and validates the ladder.
    ///
    /// The ladder is the administrator roles followed by `rank_roles`. The last rank is
    /// the guest rank; the first two ranks together with the administrator roles form
    /// the authorization set.
    ///
    /// # Arguments
    /// - `admin_roles` - Administrator role ids
    /// - `rank_roles` - Clan rank role ids, highest first, guest last
    /// - `probation_role` - Rank subject to the probation timer
    /// - `channels` - Audit, public feed and announcement channels
    /// - `probation_days` - Probation length in days
    /// - `command_prefix` - Prefix for chat commands
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Valid configuration
    /// - `Err(ConfigError::InvalidLadder)` - Duplicate roles, fewer than two ranks, or a
    ///   probation role that is not a rank above guest
    pub fn new(
        admin_roles: Vec<u64>,
        rank_roles: Vec<u64>,
        probation_role: u64,
        channels: GuildChannels,
        probation_days: i64,
        command_prefix: String,
    ) -> Result<Self, ConfigError> {
        if rank_roles.len() < 2 {
            return Err(ConfigError::InvalidLadder(
                "at least two ranks are required".to_string(),
            ));
        }

        let ladder = RoleLadder::new(admin_roles.iter().chain(&rank_roles).copied().collect())?;

        let guest_role = ladder.bottom();
        if probation_role == guest_role || !rank_roles.contains(&probation_role) {
            return Err(ConfigError::InvalidLadder(format!(
                "probation role {} must be a rank above guest",
                probation_role
            )));
        }

        let authorized_roles = admin_roles
            .iter()
            .chain(rank_roles.iter().take(PRIVILEGED_RANK_COUNT))
            .copied()
            .collect();

        Ok(Self {
            ladder,
            admin_roles,
            authorized_roles,
            probation_role,
            guest_role,
            channels,
            probation_days,
            command_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels() -> GuildChannels {
        GuildChannels {
            audit_log: 900,
            public_feed: 901,
            announcements: 902,
        }
    }

    /// Tests the ladder and authorization set derived from the role lists.
    ///
    /// Expected: admins on top, the two top ranks authorized, last rank is guest
    #[test]
    fn derives_ladder_and_authorization_set() {
        let config = GuildConfig::new(
            vec![1, 2],
            vec![10, 20, 30, 40, 50],
            40,
            channels(),
            14,
            "!".to_string(),
        )
        .unwrap();

        assert_eq!(config.ladder.roles(), &[1, 2, 10, 20, 30, 40, 50]);
        assert_eq!(config.authorized_roles, vec![1, 2, 10, 20]);
        assert_eq!(config.guest_role, 50);
    }

    #[test]
    fn rejects_probation_role_outside_ranks() {
        let result = GuildConfig::new(
            vec![1],
            vec![10, 20, 30],
            99,
            channels(),
            14,
            "!".to_string(),
        );

        assert!(matches!(result, Err(ConfigError::InvalidLadder(_))));
    }

    #[test]
    fn rejects_guest_as_probation_role() {
        let result = GuildConfig::new(vec![1], vec![10, 20], 20, channels(), 14, "!".to_string());

        assert!(matches!(result, Err(ConfigError::InvalidLadder(_))));
    }

    #[test]
    fn rejects_admin_role_reused_as_rank() {
        let result = GuildConfig::new(
            vec![10],
            vec![10, 20, 30],
            20,
            channels(),
            14,
            "!".to_string(),
        );

        assert!(matches!(result, Err(ConfigError::InvalidLadder(_))));
    }
}
