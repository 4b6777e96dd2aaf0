//! Rank transition engine.
//!
//! Decides and executes promote, demote and ban requests. Each request runs the same
//! stages: authorize the actor, compare ranks, compute the destination rank, resolve
//! the destination role in the guild, mutate the target's roles, then post the audit
//! log entry and public announcement. Any stage before the mutation can reject the
//! request without side effects.
//!
//! The role mutation itself is two separate Discord calls (add the new rank, remove
//! the old one). If the second call fails the target holds both roles; rank
//! resolution keeps the higher one, so the member never gains less authority than
//! intended. Audit entries, announcements and direct messages are best-effort:
//! their failures are logged and never undo a mutation.

pub mod notice;

use std::{sync::Arc, time::Duration};

use crate::{
    data::promotion_date::PromotionDateStore,
    error::transition::TransitionError,
    model::{
        guild::GuildConfig,
        ladder::Rank,
        member::GuildMember,
        transition::{ProbationExit, TransitionKind, TransitionOutcome},
    },
    service::{
        conversation::{Conversation, ReplyFilter},
        guild::GuildActions,
    },
    util::clock::Clock,
};

/// How long the probation exit prompt waits for "1" or "2".
pub const PROBATION_EXIT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct TransitionService<'a> {
    guild: &'a dyn GuildActions,
    promotion_dates: &'a dyn PromotionDateStore,
    config: &'a GuildConfig,
    clock: &'a dyn Clock,
}

impl<'a> TransitionService<'a> {
    pub fn new(
        guild: &'a dyn GuildActions,
        promotion_dates: &'a dyn PromotionDateStore,
        config: &'a GuildConfig,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            guild,
            promotion_dates,
            config,
            clock,
        }
    }

    /// Runs a transition and replies to the actor with its confirmation or rejection.
    ///
    /// The request is acknowledged before any role change or post is made.
    ///
    /// # Arguments
    /// - `kind` - Requested action
    /// - `conversation` - Channel the request came from
    /// - `actor` - Member issuing the request
    /// - `target` - Member the action applies to
    ///
    /// # Returns
    /// - The result of the transition; the reply has already been sent either way
    pub async fn respond(
        &self,
        kind: TransitionKind,
        conversation: &dyn Conversation,
        actor: &GuildMember,
        target: &GuildMember,
    ) -> Result<TransitionOutcome, TransitionError> {
        // Interactions must be answered within seconds; audit posts and DMs can be slower
        if let Err(e) = conversation.acknowledge().await {
            tracing::error!("Failed to acknowledge {} request: {}", kind, e);
        }

        let result = match kind {
            TransitionKind::Promote => self.promote(actor, target).await,
            TransitionKind::Demote => self.demote(conversation, actor, target).await,
            TransitionKind::Ban => self.ban(actor, target).await,
        };

        let content = match &result {
            Ok(outcome) => {
                tracing::info!(
                    "{} by {} on {} completed: {:?}",
                    kind,
                    actor.user_id,
                    target.user_id,
                    outcome
                );
                outcome.confirmation(target.user_id)
            }
            Err(e) if e.is_rejection() => {
                tracing::info!("{} by {} on {} rejected: {}", kind, actor.user_id, target.user_id, e);
                e.user_message()
            }
            Err(e) => {
                tracing::error!("{} by {} on {} failed: {}", kind, actor.user_id, target.user_id, e);
                e.user_message()
            }
        };

        if let Err(e) = conversation.reply(&content).await {
            tracing::error!("Failed to reply to {} request: {}", kind, e);
        }

        result
    }

    /// Whether the member holds at least one privileged role.
    pub fn is_authorized(&self, member: &GuildMember) -> bool {
        member.holds_any(&self.config.authorized_roles)
    }

    /// Moves the target one rank up.
    ///
    /// Entering the probation rank (re)starts the member's probation: the start date
    /// is overwritten with the current time and persisted, and the member gets the
    /// onboarding direct message and a public welcome.
    ///
    /// # Returns
    /// - `Ok(TransitionOutcome::Promoted)` - Target now holds the next rank up
    /// - `Err(Unauthorized)` - Actor holds no privileged role
    /// - `Err(MissingRank)` - Actor or target holds no ladder role
    /// - `Err(RankOrder)` - Target's rank is equal to or above the actor's
    /// - `Err(LadderBoundary)` - There is no rank above the target
    /// - `Err(UnresolvedRole)` - Next rank is missing from the guild
    /// - `Err(External)` - Discord API failure during the role mutation
    pub async fn promote(
        &self,
        actor: &GuildMember,
        target: &GuildMember,
    ) -> Result<TransitionOutcome, TransitionError> {
        let kind = TransitionKind::Promote;

        self.authorize(kind, actor)?;
        let (actor_rank, target_rank) = self.ranks(actor, target)?;

        if target_rank.index <= actor_rank.index {
            return Err(TransitionError::RankOrder {
                kind,
                actor_index: actor_rank.index,
                target_index: target_rank.index,
            });
        }

        let new_role = target_rank
            .index
            .checked_sub(1)
            .and_then(|index| self.config.ladder.role_at(index))
            .ok_or(TransitionError::LadderBoundary {
                kind,
                index: target_rank.index,
            })?;
        let role_name = self.resolve_role(kind, new_role).await?;

        self.move_rank(target, target_rank, new_role).await?;

        let probation = new_role == self.config.probation_role;
        if probation {
            self.start_probation(actor, target, &role_name).await;
        } else {
            self.post(
                self.config.channels.audit_log,
                &notice::promoted_audit(actor.user_id, target.user_id, &role_name),
            )
            .await;
            self.post(
                self.config.channels.public_feed,
                &notice::promoted_public(target.user_id, &role_name),
            )
            .await;
        }

        Ok(TransitionOutcome::Promoted {
            role_name,
            probation,
        })
    }

    /// Moves the target one rank down.
    ///
    /// A target whose highest rank is the probation rank is not stepped down the
    /// ladder. Instead the actor is asked whether to convert them to a guest or
    /// remove them from the guild.
    ///
    /// # Returns
    /// - `Ok(TransitionOutcome::Demoted)` - Target now holds the next rank down
    /// - `Ok(ConvertedToGuest | Removed)` - Probation exit completed
    /// - `Err(Unauthorized | MissingRank | RankOrder)` - Rule rejection
    /// - `Err(LadderBoundary)` - Target already holds the lowest rank
    /// - `Err(UnresolvedRole)` - Next rank is missing from the guild
    /// - `Err(Timeout)` - Probation exit prompt went unanswered
    /// - `Err(External)` - Discord API failure during the role mutation
    pub async fn demote(
        &self,
        conversation: &dyn Conversation,
        actor: &GuildMember,
        target: &GuildMember,
    ) -> Result<TransitionOutcome, TransitionError> {
        let kind = TransitionKind::Demote;

        self.authorize(kind, actor)?;
        let (actor_rank, target_rank) = self.ranks(actor, target)?;

        if actor_rank.index >= target_rank.index {
            return Err(TransitionError::RankOrder {
                kind,
                actor_index: actor_rank.index,
                target_index: target_rank.index,
            });
        }

        if target_rank.role_id == self.config.probation_role {
            return self.exit_probation(conversation, actor, target).await;
        }

        let new_role = self
            .config
            .ladder
            .role_at(target_rank.index + 1)
            .ok_or(TransitionError::LadderBoundary {
                kind,
                index: target_rank.index,
            })?;
        let role_name = self.resolve_role(kind, new_role).await?;

        self.move_rank(target, target_rank, new_role).await?;

        self.post(
            self.config.channels.audit_log,
            &notice::demoted_audit(actor.user_id, target.user_id, &role_name),
        )
        .await;
        self.post(
            self.config.channels.public_feed,
            &notice::demoted_public(target.user_id, &role_name),
        )
        .await;

        Ok(TransitionOutcome::Demoted { role_name })
    }

    /// Bans the target from the guild.
    ///
    /// Unauthorized attempts are recorded in the audit log before being rejected.
    ///
    /// # Returns
    /// - `Ok(TransitionOutcome::Banned)` - Target banned
    /// - `Err(Unauthorized | MissingRank | RankOrder)` - Rule rejection
    /// - `Err(External)` - Discord API failure while banning
    pub async fn ban(
        &self,
        actor: &GuildMember,
        target: &GuildMember,
    ) -> Result<TransitionOutcome, TransitionError> {
        let kind = TransitionKind::Ban;

        if let Err(e) = self.authorize(kind, actor) {
            self.post(
                self.config.channels.audit_log,
                &notice::unauthorized_ban_audit(actor.user_id, target.user_id),
            )
            .await;
            return Err(e);
        }
        let (actor_rank, target_rank) = self.ranks(actor, target)?;

        if target_rank.index <= actor_rank.index {
            return Err(TransitionError::RankOrder {
                kind,
                actor_index: actor_rank.index,
                target_index: target_rank.index,
            });
        }

        self.guild.ban(target.user_id, notice::BAN_REASON).await?;

        self.post(
            self.config.channels.audit_log,
            &notice::banned_audit(actor.user_id, target.user_id),
        )
        .await;
        self.post(
            self.config.channels.public_feed,
            &notice::banned_public(target.user_id),
        )
        .await;

        Ok(TransitionOutcome::Banned)
    }

    /// Asks the actor how a recruit leaves probation and applies the answer.
    ///
    /// Only the actor's first message reading exactly "1" or "2" in the request
    /// channel counts. Without an answer within `PROBATION_EXIT_TIMEOUT` nothing is
    /// changed.
    async fn exit_probation(
        &self,
        conversation: &dyn Conversation,
        actor: &GuildMember,
        target: &GuildMember,
    ) -> Result<TransitionOutcome, TransitionError> {
        conversation.reply(notice::PROBATION_EXIT_PROMPT).await?;

        let filter: ReplyFilter = Arc::new(|content: &str| ProbationExit::from_reply(content).is_some());
        let choice = conversation
            .await_reply(filter, PROBATION_EXIT_TIMEOUT)
            .await
            .as_deref()
            .and_then(ProbationExit::from_reply);

        match choice {
            None => Err(TransitionError::Timeout),
            Some(ProbationExit::Guest) => {
                self.guild
                    .set_roles(target.user_id, &[self.config.guest_role])
                    .await?;

                self.post(
                    self.config.channels.audit_log,
                    &notice::guest_audit(actor.user_id, target.user_id),
                )
                .await;

                Ok(TransitionOutcome::ConvertedToGuest)
            }
            Some(ProbationExit::Remove) => {
                if let Err(e) = self
                    .guild
                    .send_direct(target.user_id, notice::REMOVAL_DIRECT_MESSAGE)
                    .await
                {
                    tracing::warn!(
                        "Failed to notify member {} about removal: {}",
                        target.user_id,
                        e
                    );
                }

                self.guild
                    .kick(target.user_id, notice::REMOVAL_REASON)
                    .await?;

                self.post(
                    self.config.channels.public_feed,
                    &notice::removed_public(target.user_id),
                )
                .await;

                Ok(TransitionOutcome::Removed)
            }
        }
    }

    /// Records the probation start and sends the onboarding messages.
    async fn start_probation(&self, actor: &GuildMember, target: &GuildMember, role_name: &str) {
        if let Err(e) = self.promotion_dates.put(target.user_id, self.clock.now()) {
            tracing::error!(
                "Failed to persist probation start of member {}: {}",
                target.user_id,
                e
            );
        }

        let onboarding = notice::recruit_onboarding(
            target.user_id,
            self.config.probation_days,
            &self.config.command_prefix,
        );
        if let Err(e) = self.guild.send_direct(target.user_id, &onboarding).await {
            tracing::warn!(
                "Failed to send onboarding message to member {}: {}",
                target.user_id,
                e
            );
        }

        self.post(
            self.config.channels.public_feed,
            &notice::recruit_welcome_public(target.user_id),
        )
        .await;
        self.post(
            self.config.channels.audit_log,
            &notice::promoted_audit(actor.user_id, target.user_id, role_name),
        )
        .await;
    }

    fn authorize(&self, kind: TransitionKind, actor: &GuildMember) -> Result<(), TransitionError> {
        if self.is_authorized(actor) {
            Ok(())
        } else {
            Err(TransitionError::Unauthorized {
                kind,
                actor_id: actor.user_id,
            })
        }
    }

    fn ranks(
        &self,
        actor: &GuildMember,
        target: &GuildMember,
    ) -> Result<(Rank, Rank), TransitionError> {
        let rank_of = |member: &GuildMember| {
            member
                .rank(&self.config.ladder)
                .ok_or(TransitionError::MissingRank {
                    user_id: member.user_id,
                })
        };

        Ok((rank_of(actor)?, rank_of(target)?))
    }

    async fn resolve_role(&self, kind: TransitionKind, role_id: u64) -> Result<String, TransitionError> {
        match self.guild.role_name(role_id).await? {
            Some(name) => Ok(name),
            None => {
                tracing::warn!(
                    "Ladder role {} is missing from the guild, check the rank configuration",
                    role_id
                );
                Err(TransitionError::UnresolvedRole { kind, role_id })
            }
        }
    }

    /// Adds the destination rank, then removes the rank the target held before.
    async fn move_rank(
        &self,
        target: &GuildMember,
        current: Rank,
        new_role: u64,
    ) -> Result<(), TransitionError> {
        self.guild.add_role(target.user_id, new_role).await?;
        self.guild
            .remove_role(target.user_id, current.role_id)
            .await?;

        Ok(())
    }

    /// Posts to a channel, logging instead of failing.
    async fn post(&self, channel_id: u64, content: &str) {
        if let Err(e) = self.guild.send_channel(channel_id, content).await {
            tracing::error!("Failed to post to channel {}: {}", channel_id, e);
        }
    }
}
