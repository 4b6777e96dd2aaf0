//! Fixed instants for deterministic date arithmetic in tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Reference "now" used across tests: 2025-03-01 12:00:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// The reference instant shifted back by a number of days.
pub fn days_before_now(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}
