use chrono::{Duration, Local, NaiveDate};

/// Moves `current` by `delta_days`, clamped so the result is never after
/// `today`. A forward shift that would pass `today` leaves the date unchanged;
/// there is no lower bound on navigating into the past.
pub fn shift_date(current: NaiveDate, delta_days: i64, today: NaiveDate) -> NaiveDate {
    let shifted = current + Duration::days(delta_days);
    if shifted > today {
        current
    } else {
        shifted
    }
}

/// `shift_date` against the local calendar date at the moment of the call.
pub fn shift_date_clamped(current: NaiveDate, delta_days: i64) -> NaiveDate {
    shift_date(current, delta_days, Local::now().date_naive())
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date `{}`, expected YYYY-MM-DD", raw.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(raw: &str) -> NaiveDate {
        parse_date(raw).unwrap()
    }

    #[test]
    fn forward_shift_is_clamped_at_today() {
        let today = d("2025-06-15");
        assert_eq!(shift_date(today, 1, today), today);
        assert_eq!(shift_date(d("2025-06-14"), 1, today), today);
    }

    #[test]
    fn backward_shift_has_no_lower_bound() {
        let today = d("2025-06-15");
        assert_eq!(shift_date(d("2020-01-01"), -1, today), d("2019-12-31"));
    }

    #[test]
    fn multi_day_jumps_respect_the_clamp() {
        let today = d("2025-06-15");
        assert_eq!(shift_date(d("2025-06-10"), 3, today), d("2025-06-13"));
        assert_eq!(shift_date(d("2025-06-14"), 30, today), d("2025-06-14"));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("2025-6-15x").is_err());
        assert!(parse_date("15/06/2025").is_err());
        assert_eq!(d(" 2025-06-15 "), d("2025-06-15"));
    }
}
