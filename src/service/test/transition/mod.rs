use std::time::Duration;

use test_utils::time::fixed_now;

use crate::{
    data::promotion_date::PromotionDateStore,
    error::transition::TransitionError,
    model::transition::{TransitionKind, TransitionOutcome},
    service::{
        guild::GuildActions,
        recruit::{RecruitService, RecruitStatus},
        transition::{notice, TransitionService, PROBATION_EXIT_TIMEOUT},
    },
};

use super::{
    fake::{FakeConversation, FakeGuild, InMemoryPromotionDates},
    Harness, ADMIN, AUDIT_LOG, COMMANDER, GUEST, PUBLIC_FEED, RECRUIT, RIFLEMAN, ROLES,
    SENIOR_COMMANDER, SERGEANT,
};

mod ban;
mod demote;
mod promote;
mod respond;

impl Harness {
    fn transitions(&self) -> TransitionService<'_> {
        TransitionService::new(&self.guild, &self.dates, &self.config, &self.clock)
    }
}
