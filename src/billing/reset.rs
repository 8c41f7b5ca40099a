//! Monthly reset scheduling
//!
//! Pure calendar arithmetic over injected instants. Nothing in this module
//! reads the wall clock; "now" always arrives as a parameter so every branch
//! is testable with fixed timestamps. All arithmetic is in UTC.

use chrono::{DateTime, Datelike, Months, TimeZone, Utc};

/// First instant of the month containing `now`, 00:00:00 UTC.
fn first_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// First instant of the month after `now`, 00:00:00 UTC.
fn first_of_next_month(now: DateTime<Utc>) -> DateTime<Utc> {
    let (year, month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Instant the current usage window opened.
///
/// An account that has recorded a reset opens its window there; one that
/// never reset is treated as if the window opened with the current calendar
/// month.
pub(crate) fn window_start(
    last_reset_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    last_reset_at.unwrap_or_else(|| first_of_month(now))
}

/// Instant the next monthly reset takes effect.
///
/// With a recorded reset this is one calendar month later: same day-of-month
/// and clock time, clamped to the last day when the target month is shorter
/// (Jan 31 rolls to Feb 29 in a leap year). Without one it is the first of
/// the month after `now` at midnight UTC.
pub(crate) fn next_reset_date(
    last_reset_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    match last_reset_at {
        Some(last) => last
            .checked_add_months(Months::new(1))
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
        None => first_of_next_month(now),
    }
}

/// Whether a monthly reset is due at `now`.
///
/// An account that never reset is always due.
pub(crate) fn is_reset_due(last_reset_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_reset_at {
        None => true,
        Some(_) => now >= next_reset_date(last_reset_at, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse::<DateTime<Utc>>().unwrap()
    }

    #[test]
    fn due_when_never_reset() {
        assert!(is_reset_due(None, utc("2024-01-01T00:00:00Z")));
        assert!(is_reset_due(None, utc("2026-08-06T12:34:56Z")));
    }

    #[test]
    fn not_due_within_the_month() {
        let last = Some(utc("2024-01-31T00:00:00Z"));
        assert!(!is_reset_due(last, utc("2024-02-01T00:00:00Z")));
        assert!(!is_reset_due(last, utc("2024-02-28T23:59:59Z")));
    }

    #[test]
    fn due_one_calendar_month_later() {
        let last = Some(utc("2024-01-31T00:00:00Z"));
        assert!(is_reset_due(last, utc("2024-02-29T00:00:00Z")));
        assert!(is_reset_due(last, utc("2024-03-15T00:00:00Z")));
    }

    #[test]
    fn month_end_clamps_in_leap_february() {
        let next = next_reset_date(Some(utc("2024-01-31T00:00:00Z")), utc("2024-02-10T00:00:00Z"));
        assert_eq!(next, utc("2024-02-29T00:00:00Z"));
    }

    #[test]
    fn month_end_clamps_in_regular_february() {
        let next = next_reset_date(Some(utc("2025-01-31T08:30:00Z")), utc("2025-02-01T00:00:00Z"));
        assert_eq!(next, utc("2025-02-28T08:30:00Z"));
    }

    #[test]
    fn mid_month_keeps_day_and_time() {
        let next = next_reset_date(Some(utc("2026-03-15T09:45:30Z")), utc("2026-03-20T00:00:00Z"));
        assert_eq!(next, utc("2026-04-15T09:45:30Z"));
    }

    #[test]
    fn december_rolls_into_january() {
        let next = next_reset_date(Some(utc("2025-12-31T12:00:00Z")), utc("2025-12-31T12:00:00Z"));
        assert_eq!(next, utc("2026-01-31T12:00:00Z"));
    }

    #[test]
    fn never_reset_schedules_first_of_next_month() {
        let next = next_reset_date(None, utc("2026-08-06T15:42:00Z"));
        assert_eq!(next, utc("2026-09-01T00:00:00Z"));
    }

    #[test]
    fn never_reset_in_december_schedules_january() {
        let next = next_reset_date(None, utc("2026-12-25T10:00:00Z"));
        assert_eq!(next, utc("2027-01-01T00:00:00Z"));
    }

    #[test]
    fn boundary_instant_is_due() {
        let last = Some(utc("2026-05-10T06:00:00Z"));
        let boundary = utc("2026-06-10T06:00:00Z");
        assert_eq!(next_reset_date(last, boundary), boundary);
        assert!(is_reset_due(last, boundary));
        assert!(!is_reset_due(last, utc("2026-06-10T05:59:59Z")));
    }

    #[test]
    fn window_start_uses_recorded_reset() {
        let last = utc("2026-07-15T08:00:00Z");
        assert_eq!(window_start(Some(last), utc("2026-08-06T00:00:00Z")), last);
    }

    #[test]
    fn window_start_defaults_to_current_month() {
        let start = window_start(None, utc("2026-08-06T15:42:00Z"));
        assert_eq!(start, utc("2026-08-01T00:00:00Z"));
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let last = Some(utc("2024-06-30T23:59:59Z"));
        let now = utc("2024-07-15T00:00:00Z");
        assert_eq!(next_reset_date(last, now), next_reset_date(last, now));
        assert_eq!(is_reset_due(last, now), is_reset_due(last, now));
    }
}
