use crate::types::SECONDS_PER_DAY;

/// Whole days between issue time and now.
///
/// Returns `None` when `now` is before `issued_at`.
pub fn elapsed_days(issued_at: u64, now: u64) -> Option<u64> {
    now.checked_sub(issued_at).map(|secs| secs / SECONDS_PER_DAY)
}

/// Number of unlock periods reached, capped at `unlock_times`
///
/// Formula: min((elapsed_days - first_unlock_days) / interval_days, unlock_times)
///
/// Example:
/// - interval: 30 days, 4 unlocks, no grace period
/// - day 29 => 0, day 30 => 1, day 65 => 2, day 400 => 4
pub fn unlocked_periods(
    elapsed_days: u64,
    first_unlock_days: u32,
    interval_days: u32,
    unlock_times: u32,
) -> Option<u32> {
    if interval_days == 0 {
        return None;
    }
    let unlocked_days = elapsed_days.saturating_sub(first_unlock_days as u64);
    let periods = unlocked_days / interval_days as u64;
    Some(periods.min(unlock_times as u64) as u32)
}

/// floor(amount × numerator / denominator) without a wide intermediate
///
/// amount = q × denominator + r, so the result is q × numerator + r × numerator / denominator.
/// r × numerator stays below 2^64 because both factors are bounded by u32.
pub fn mul_div_floor(amount: i128, numerator: u32, denominator: u32) -> Option<i128> {
    if amount < 0 || denominator == 0 {
        return None;
    }
    let numerator = numerator as i128;
    let denominator = denominator as i128;
    let quotient = amount / denominator;
    let remainder = amount % denominator;

    quotient
        .checked_mul(numerator)?
        .checked_add(remainder * numerator / denominator)
}

/// Cumulative amount released after `periods` of `unlock_times` equal tranches
///
/// Truncation leaves dust in early tranches; the last period releases the full amount.
///
/// Example:
/// - issued: 1,000, unlock_times: 3
/// - periods 1, 2, 3 => 333, 666, 1,000
pub fn total_unlockable(issued: i128, periods: u32, unlock_times: u32) -> Option<i128> {
    if periods > unlock_times {
        return None;
    }
    mul_div_floor(issued, periods, unlock_times)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = SECONDS_PER_DAY;

    #[test]
    fn test_elapsed_days_truncates() {
        assert_eq!(elapsed_days(1_000, 1_000), Some(0));
        assert_eq!(elapsed_days(1_000, 1_000 + DAY - 1), Some(0));
        assert_eq!(elapsed_days(1_000, 1_000 + 30 * DAY), Some(30));
    }

    #[test]
    fn test_elapsed_days_before_issue() {
        assert_eq!(elapsed_days(1_000, 999), None);
    }

    #[test]
    fn test_unlocked_periods_boundaries() {
        assert_eq!(unlocked_periods(29, 0, 30, 4), Some(0));
        assert_eq!(unlocked_periods(30, 0, 30, 4), Some(1));
        assert_eq!(unlocked_periods(59, 0, 30, 4), Some(1));
        assert_eq!(unlocked_periods(65, 0, 30, 4), Some(2));
        assert_eq!(unlocked_periods(120, 0, 30, 4), Some(4));
    }

    #[test]
    fn test_unlocked_periods_saturates() {
        assert_eq!(unlocked_periods(10_000, 0, 30, 4), Some(4));
    }

    #[test]
    fn test_grace_period_delays_first_unlock() {
        // 10 day grace: nothing until day 40
        assert_eq!(unlocked_periods(5, 10, 30, 4), Some(0));
        assert_eq!(unlocked_periods(39, 10, 30, 4), Some(0));
        assert_eq!(unlocked_periods(40, 10, 30, 4), Some(1));
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert_eq!(unlocked_periods(100, 0, 0, 4), None);
    }

    #[test]
    fn test_total_unlockable_even_split() {
        assert_eq!(total_unlockable(1_000, 0, 4), Some(0));
        assert_eq!(total_unlockable(1_000, 1, 4), Some(250));
        assert_eq!(total_unlockable(1_000, 2, 4), Some(500));
        assert_eq!(total_unlockable(1_000, 4, 4), Some(1_000));
    }

    #[test]
    fn test_total_unlockable_leaves_dust_until_last_period() {
        assert_eq!(total_unlockable(1_000, 1, 3), Some(333));
        assert_eq!(total_unlockable(1_000, 2, 3), Some(666));
        assert_eq!(total_unlockable(1_000, 3, 3), Some(1_000));
    }

    #[test]
    fn test_total_unlockable_rejects_extra_periods() {
        assert_eq!(total_unlockable(1_000, 5, 4), None);
    }

    #[test]
    fn test_mul_div_floor_no_overflow_near_max() {
        let issued = i128::MAX - 6;
        let times = u32::MAX;

        let half = mul_div_floor(issued, times / 2, times).unwrap();
        assert!(half < issued / 2 + 1);
        assert!(half > issued / 2 - (issued / times as i128) - 1);

        assert_eq!(mul_div_floor(issued, times, times), Some(issued));
    }

    #[test]
    fn test_mul_div_floor_matches_wide_arithmetic() {
        let cases: [(i128, u32, u32); 5] = [
            (7, 1, 3),
            (1_000_000_007, 5, 12),
            (u64::MAX as i128, 3, 7),
            (10_000_000 * 1_000_000, 11, 12),
            (1, 1, 1),
        ];
        for (amount, num, den) in cases {
            let expected = amount * num as i128 / den as i128;
            assert_eq!(mul_div_floor(amount, num, den), Some(expected));
        }
    }

    #[test]
    fn test_mul_div_floor_rejects_negative_amount() {
        assert_eq!(mul_div_floor(-1, 1, 2), None);
        assert_eq!(mul_div_floor(10, 1, 0), None);
    }
}
