use test_utils::time::fixed_now;

use crate::model::guild::{GuildChannels, GuildConfig};

use self::fake::{FakeGuild, FixedClock, InMemoryPromotionDates};

mod transition;

const ADMIN: u64 = 1;
const SENIOR_COMMANDER: u64 = 10;
const COMMANDER: u64 = 20;
const SERGEANT: u64 = 30;
const RIFLEMAN: u64 = 40;
const RECRUIT: u64 = 50;
const GUEST: u64 = 60;

const AUDIT_LOG: u64 = 900;
const PUBLIC_FEED: u64 = 901;
const ANNOUNCEMENTS: u64 = 902;

const ROLES: &[(u64, &str)] = &[
    (ADMIN, "Администратор"),
    (SENIOR_COMMANDER, "КМД"),
    (COMMANDER, "Командир"),
    (SERGEANT, "Сержант"),
    (RIFLEMAN, "Стрелок"),
    (RECRUIT, "Рекрут"),
    (GUEST, "Гость"),
];

/// Ladder: Администратор > КМД > Командир > Сержант > Стрелок > Рекрут > Гость.
fn test_config() -> GuildConfig {
    GuildConfig::new(
        vec![ADMIN],
        vec![SENIOR_COMMANDER, COMMANDER, SERGEANT, RIFLEMAN, RECRUIT, GUEST],
        RECRUIT,
        GuildChannels {
            audit_log: AUDIT_LOG,
            public_feed: PUBLIC_FEED,
            announcements: ANNOUNCEMENTS,
        },
        14,
        "!".to_string(),
    )
    .unwrap()
}

/// Guild, stores and clock wired to the test ladder.
struct Harness {
    guild: FakeGuild,
    dates: InMemoryPromotionDates,
    config: GuildConfig,
    clock: FixedClock,
}

impl Harness {
    fn new() -> Self {
        Self::with_guild(FakeGuild::new(ROLES))
    }

    fn with_guild(guild: FakeGuild) -> Self {
        Self {
            guild,
            dates: InMemoryPromotionDates::default(),
            config: test_config(),
            clock: FixedClock(fixed_now()),
        }
    }
}
