//! Expiry and maintenance status classification
//!
//! Pure functions deriving a lifecycle status from a date and a reference
//! "now". No I/O, no clock access: callers pass `now` in so results are
//! reproducible.
//!
//! Rounding rule: comparisons work on whole calendar days, computed as the
//! difference between the expiry date and today's date (both truncated to
//! their calendar day). A record expiring later today is therefore
//! "expiring soon", not "expired", and the classification cannot flap
//! around midnight within a single day.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Warning window for documents and driver licences, in calendar days.
pub const DOCUMENT_WARNING_WINDOW_DAYS: i64 = 30;

/// Warning window for maintenance due dates, in calendar days.
pub const MAINTENANCE_WARNING_WINDOW_DAYS: i64 = 7;

/// Fuel percentage below which a vehicle raises a low-fuel alert.
pub const LOW_FUEL_THRESHOLD: u32 = 25;

/// Derived status for time-bound documents and licences.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Active,
    ExpiringSoon,
    Expired,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Active => "active",
            ExpiryStatus::ExpiringSoon => "expiring_soon",
            ExpiryStatus::Expired => "expired",
        }
    }
}

/// Derived status for maintenance schedules. Same algorithm as
/// [`ExpiryStatus`] with a shorter window and renamed labels.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Good,
    DueSoon,
    Overdue,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Good => "good",
            MaintenanceStatus::DueSoon => "due_soon",
            MaintenanceStatus::Overdue => "overdue",
        }
    }
}

/// Classify a record by its expiry date.
///
/// A missing expiry date is `Active`: an undocumented expiry is treated as
/// not-yet-a-problem. That is a policy choice, not a derived fact; a more
/// conservative deployment could map it to an "unknown" bucket instead.
pub fn classify_by_expiry(
    expiry_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    warning_window_days: i64,
) -> ExpiryStatus {
    let Some(expiry) = expiry_date else {
        return ExpiryStatus::Active;
    };

    let days_remaining = (expiry.date_naive() - now.date_naive()).num_days();

    if days_remaining < 0 {
        ExpiryStatus::Expired
    } else if days_remaining <= warning_window_days {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Active
    }
}

/// Classify a maintenance schedule by its next due date, with the
/// 7-day window.
pub fn classify_maintenance(
    next_due_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> MaintenanceStatus {
    match classify_by_expiry(next_due_date, now, MAINTENANCE_WARNING_WINDOW_DAYS) {
        ExpiryStatus::Active => MaintenanceStatus::Good,
        ExpiryStatus::ExpiringSoon => MaintenanceStatus::DueSoon,
        ExpiryStatus::Expired => MaintenanceStatus::Overdue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_missing_expiry_is_active() {
        assert_eq!(
            classify_by_expiry(None, now(), DOCUMENT_WARNING_WINDOW_DAYS),
            ExpiryStatus::Active
        );
    }

    #[test]
    fn test_past_expiry_is_expired_regardless_of_window() {
        let expired = now() - Duration::days(1);
        for window in [0, 7, 30, 365] {
            assert_eq!(
                classify_by_expiry(Some(expired), now(), window),
                ExpiryStatus::Expired
            );
        }
    }

    #[test]
    fn test_window_boundary() {
        // Exactly 30 days out: still inside the window.
        assert_eq!(
            classify_by_expiry(Some(now() + Duration::days(30)), now(), 30),
            ExpiryStatus::ExpiringSoon
        );
        // 31 days out: active.
        assert_eq!(
            classify_by_expiry(Some(now() + Duration::days(31)), now(), 30),
            ExpiryStatus::Active
        );
    }

    #[test]
    fn test_five_days_out_is_expiring_soon() {
        assert_eq!(
            classify_by_expiry(Some(now() + Duration::days(5)), now(), 30),
            ExpiryStatus::ExpiringSoon
        );
    }

    #[test]
    fn test_expiring_later_today_is_not_expired() {
        // Same calendar day, earlier hour: whole-day truncation keeps this
        // in the warning bucket rather than flipping it to expired.
        let earlier_today = Utc.with_ymd_and_hms(2024, 6, 15, 1, 0, 0).unwrap();
        assert_eq!(
            classify_by_expiry(Some(earlier_today), now(), 30),
            ExpiryStatus::ExpiringSoon
        );
    }

    #[test]
    fn test_midnight_does_not_flap() {
        // The classification depends only on the calendar day of `now`.
        let expiry = Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap();
        let just_after_midnight = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 1).unwrap();
        let just_before_next = Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap();
        assert_eq!(
            classify_by_expiry(Some(expiry), just_after_midnight, 30),
            classify_by_expiry(Some(expiry), just_before_next, 30),
        );
    }

    #[test]
    fn test_maintenance_uses_seven_day_window() {
        assert_eq!(
            classify_maintenance(Some(now() + Duration::days(7)), now()),
            MaintenanceStatus::DueSoon
        );
        assert_eq!(
            classify_maintenance(Some(now() + Duration::days(8)), now()),
            MaintenanceStatus::Good
        );
        assert_eq!(
            classify_maintenance(Some(now() - Duration::days(2)), now()),
            MaintenanceStatus::Overdue
        );
        assert_eq!(classify_maintenance(None, now()), MaintenanceStatus::Good);
    }
}
