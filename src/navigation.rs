//! Previous/next day links.
//!
//! Calendar arithmetic is done with [`chrono::NaiveDate`]. A resolved date may
//! be syntactically fine but not a real day (`2023-02-30`). Those are read
//! leniently: with a month of 00..=12, a day of 00..=31 counts forward from the
//! first of the month, so `2023-02-30` is `2023-03-02` and `2024-03-00` is
//! `2024-02-29`. Month 00 is December of the year before. A month above 12 or
//! a day above 31 has no neighbours. A trailing newline is ignored.

use crate::date::{DATE_FORMAT, RequestedDate};
use chrono::{Days, NaiveDate};

/// The days either side of a resolved date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: RequestedDate,
    pub next: RequestedDate,
}

/// Compute the previous and next calendar days for `date`.
pub fn neighbors(date: &RequestedDate) -> Option<Neighbors> {
    let day = calendar_date(date)?;
    let previous = day.checked_sub_days(Days::new(1))?;
    let next = day.checked_add_days(Days::new(1))?;
    Some(Neighbors {
        previous: RequestedDate::from_date(previous),
        next: RequestedDate::from_date(next),
    })
}

/// Interpret a resolved date on the calendar, overflowing out-of-range days.
pub fn calendar_date(date: &RequestedDate) -> Option<NaiveDate> {
    if let Ok(exact) = NaiveDate::parse_from_str(date.as_str(), DATE_FORMAT) {
        return Some(exact);
    }

    // The resolver guarantees `YYYY-MM-DD` with ASCII digits, maybe plus `\n`.
    let s = date.as_str();
    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month: u32 = s.get(5..7)?.parse().ok()?;
    let day: u64 = s.get(8..10)?.parse().ok()?;
    if day > 31 {
        return None;
    }
    let first = match month {
        0 => NaiveDate::from_ymd_opt(year - 1, 12, 1)?,
        m => NaiveDate::from_ymd_opt(year, m, 1)?,
    };
    match day {
        0 => first.checked_sub_days(Days::new(1)),
        d => first.checked_add_days(Days::new(d - 1)),
    }
}
