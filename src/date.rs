//! Date resolution for the `date` request parameter.
//!
//! The check is purely syntactic: four digits, a dash, two digits, a dash, two
//! digits, optionally followed by one newline. `2024-13-99` passes and is used
//! verbatim, as is `2024-06-01\n`. Anything else, including an absent or empty
//! parameter, silently becomes today's date.
//!
//! "Today" comes from a [`Clock`] so callers (and tests) decide what the
//! current date is.

use chrono::{Local, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Textual format of every date the viewer produces.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ASCII digits only; `\d` in the regex crate would also accept other scripts.
// One trailing newline is accepted and kept.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}\n?$").expect("static date pattern")
});

/// Source of the current date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A date that has passed resolution.
///
/// Always matches `YYYY-MM-DD` syntactically. It is not necessarily a real
/// calendar date when it came from user input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestedDate(String);

impl RequestedDate {
    /// Accept `raw` only if it matches the date pattern.
    pub fn parse(raw: &str) -> Option<Self> {
        DATE_PATTERN
            .is_match(raw)
            .then(|| RequestedDate(raw.to_string()))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        RequestedDate(date.format(DATE_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RequestedDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Today's date as reported by `clock`, formatted.
pub fn today(clock: &dyn Clock) -> RequestedDate {
    RequestedDate::from_date(clock.today())
}

/// Resolve the raw `date` parameter, falling back to today.
pub fn resolve(raw: Option<&str>, clock: &dyn Clock) -> RequestedDate {
    raw.and_then(RequestedDate::parse)
        .unwrap_or_else(|| today(clock))
}
