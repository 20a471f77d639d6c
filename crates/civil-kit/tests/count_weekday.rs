//! Property tests for the weekday-occurrence counter, cross-checked
//! against naive day-by-day enumeration.

use chrono::{Datelike, Duration};
use civil_kit::{count_weekday_between, CivilDate, Weekday};
use proptest::prelude::*;

fn brute_force(weekday: Weekday, start: CivilDate, end: CivilDate) -> i64 {
    let mut cursor = start.as_naive();
    let mut total = 0;
    while cursor <= end.as_naive() {
        if Weekday::from(cursor.weekday()) == weekday {
            total += 1;
        }
        cursor = cursor.succ_opt().expect("cursor stays in calendar range");
    }
    total
}

fn anchored(offset: i64) -> CivilDate {
    let base = CivilDate::from_ymd(2019, 1, 1).expect("valid base date");
    CivilDate::from_naive(base.as_naive() + Duration::days(offset))
}

proptest! {
    #[test]
    fn matches_naive_enumeration(
        offset in 0i64..3000,
        span in 0i64..=400,
        number in 1u8..=7,
    ) {
        let start = anchored(offset);
        let end = CivilDate::from_naive(start.as_naive() + Duration::days(span));
        let weekday = Weekday::from_number(number).expect("number is in 1..=7");

        let counted = count_weekday_between(Some(weekday), Some(start), Some(end)).unwrap();
        prop_assert_eq!(counted, brute_force(weekday, start, end));
    }

    #[test]
    fn reversed_ranges_count_zero(
        offset in 0i64..3000,
        span in 1i64..=400,
        number in 1u8..=7,
    ) {
        let end = anchored(offset);
        let start = CivilDate::from_naive(end.as_naive() + Duration::days(span));
        let weekday = Weekday::from_number(number).expect("number is in 1..=7");

        let counted = count_weekday_between(Some(weekday), Some(start), Some(end)).unwrap();
        prop_assert_eq!(counted, 0);
    }

    #[test]
    fn weekday_totals_cover_every_day(
        offset in 0i64..3000,
        span in 0i64..=400,
    ) {
        // Summing the counts over all seven weekdays must account for every
        // day in the inclusive range exactly once.
        let start = anchored(offset);
        let end = CivilDate::from_naive(start.as_naive() + Duration::days(span));

        let mut total = 0;
        for number in 1..=7 {
            let weekday = Weekday::from_number(number).expect("number is in 1..=7");
            total += count_weekday_between(Some(weekday), Some(start), Some(end)).unwrap();
        }
        prop_assert_eq!(total, span + 1);
    }
}
