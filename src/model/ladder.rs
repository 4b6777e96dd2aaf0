//! Role ladder and rank resolution.
//!
//! The ladder is the ordered list of guild roles that make up the clan hierarchy,
//! highest authority first. A member's rank is the position of the highest ladder role
//! they hold, so a smaller index means more authority. Everything here is pure lookup
//! over configuration fixed at startup.

use std::collections::HashSet;

use crate::error::config::ConfigError;

/// Ordered sequence of role ids, highest authority first.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleLadder {
    roles: Vec<u64>,
}

/// A member's position on the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    /// The ladder role that determines the rank.
    pub role_id: u64,
    /// Position of `role_id` on the ladder (0 = top authority).
    pub index: usize,
}

impl RoleLadder {
    /// Creates a ladder from role ids ordered highest authority first.
    ///
    /// # Arguments
    /// - `roles` - Role ids, highest authority first
    ///
    /// # Returns
    /// - `Ok(RoleLadder)` - Valid ladder
    /// - `Err(ConfigError::InvalidLadder)` - Empty ladder or a role id listed twice
    pub fn new(roles: Vec<u64>) -> Result<Self, ConfigError> {
        if roles.is_empty() {
            return Err(ConfigError::InvalidLadder(
                "ladder must contain at least one role".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(roles.len());
        for role in &roles {
            if !seen.insert(*role) {
                return Err(ConfigError::InvalidLadder(format!(
                    "role {} appears more than once",
                    role
                )));
            }
        }

        Ok(Self { roles })
    }

    /// Position of a role on the ladder, `None` when the role is not a rank.
    pub fn index_of(&self, role_id: u64) -> Option<usize> {
        self.roles.iter().position(|role| *role == role_id)
    }

    /// Role at a ladder position, `None` when out of bounds.
    pub fn role_at(&self, index: usize) -> Option<u64> {
        self.roles.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Lowest rank of the ladder (guest).
    pub fn bottom(&self) -> u64 {
        // `new` rejects empty ladders
        self.roles[self.roles.len() - 1]
    }

    pub fn roles(&self) -> &[u64] {
        &self.roles
    }

    /// Resolves the highest-authority rank among a set of held roles.
    ///
    /// Scans every held role and keeps the smallest ladder index. Roles that are not
    /// on the ladder are ignored. A member left holding both an old and a new rank
    /// after an interrupted transition resolves to the higher one.
    ///
    /// # Arguments
    /// - `held` - Role ids the member currently holds, in any order
    ///
    /// # Returns
    /// - `Some(Rank)` - Highest rank held
    /// - `None` - None of the held roles is on the ladder
    pub fn highest_rank<'a, I>(&self, held: I) -> Option<Rank>
    where
        I: IntoIterator<Item = &'a u64>,
    {
        held.into_iter()
            .filter_map(|role_id| {
                self.index_of(*role_id).map(|index| Rank {
                    role_id: *role_id,
                    index,
                })
            })
            .min_by_key(|rank| rank.index)
    }
}
