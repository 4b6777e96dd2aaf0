//! Recruit probation timer.

use chrono::{DateTime, TimeDelta, Utc};

use crate::{
    data::promotion_date::PromotionDateStore,
    error::recruit::RecruitError,
    model::{
        guild::GuildConfig,
        member::{mention, GuildMember},
    },
    service::guild::GuildActions,
    util::clock::Clock,
};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Reply sent once the probation period is over.
pub const EXPIRED_REPLY: &str =
    "📅2 недели истекло. Я отправил уведомление старшим командирам. Ожидай решения.";

/// Where a recruit stands in their probation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecruitStatus {
    /// Whole days left before a decision is due.
    Remaining(i64),
    /// The period is over; command has been notified.
    Expired,
}

impl RecruitStatus {
    /// Reply shown to the recruit.
    pub fn reply(&self) -> String {
        match self {
            Self::Remaining(days) => format!(
                "⏱️У тебя осталось {} дней до возможного повышения до роли 'Стрелок' или другого вердикта командования.",
                days
            ),
            Self::Expired => EXPIRED_REPLY.to_string(),
        }
    }
}

/// Whole days left of a probation that started at `started_at`.
///
/// Rounds toward negative infinity, so a period that ended any time within the last
/// day yields `-1` and one that has exactly ended yields `0`. `None` when the end of
/// the period is not a representable instant.
pub fn days_remaining(
    started_at: DateTime<Utc>,
    now: DateTime<Utc>,
    probation_days: i64,
) -> Option<i64> {
    let ends_at = TimeDelta::try_days(probation_days)
        .and_then(|period| started_at.checked_add_signed(period))?;

    Some(
        ends_at
            .signed_duration_since(now)
            .num_milliseconds()
            .div_euclid(MILLIS_PER_DAY),
    )
}

pub fn expiry_audit(user_id: u64) -> String {
    format!("📅 Срок рекрутства истек для {}", mention(user_id))
}

pub struct RecruitService<'a> {
    guild: &'a dyn GuildActions,
    promotion_dates: &'a dyn PromotionDateStore,
    config: &'a GuildConfig,
    clock: &'a dyn Clock,
}

impl<'a> RecruitService<'a> {
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

    /// Reports how much of the caller's probation is left.
    ///
    /// When the period is over an expiry entry is posted to the audit log so command
    /// can decide on the recruit. A failed audit post is logged and does not change
    /// the answer.
    ///
    /// # Arguments
    /// - `member` - Member who asked
    ///
    /// # Returns
    /// - `Ok(RecruitStatus)` - Days left, or `Expired`
    /// - `Err(RecruitError::NotOnProbation)` - Member does not hold the probation role
    /// - `Err(RecruitError::MissingStartDate)` - No start date was ever stored
    /// - `Err(RecruitError::PeriodOutOfRange)` - Stored date and period overflow
    pub async fn check(&self, member: &GuildMember) -> Result<RecruitStatus, RecruitError> {
        if !member.holds(self.config.probation_role) {
            return Err(RecruitError::NotOnProbation(member.user_id));
        }

        let started_at = self
            .promotion_dates
            .get(member.user_id)
            .ok_or(RecruitError::MissingStartDate(member.user_id))?;

        let days = days_remaining(started_at, self.clock.now(), self.config.probation_days)
            .ok_or(RecruitError::PeriodOutOfRange(member.user_id))?;
        if days > 0 {
            return Ok(RecruitStatus::Remaining(days));
        }

        tracing::info!(
            "Probation of member {} expired {} days ago",
            member.user_id,
            -days
        );

        if let Err(e) = self
            .guild
            .send_channel(self.config.channels.audit_log, &expiry_audit(member.user_id))
            .await
        {
            tracing::error!(
                "Failed to post probation expiry of member {}: {}",
                member.user_id,
                e
            );
        }

        Ok(RecruitStatus::Expired)
    }
}
