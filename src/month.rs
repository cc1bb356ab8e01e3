//! Calendar month arithmetic for the monthly trend.

use std::{cmp::Ordering, fmt::Display};

use time::{Date, Month};

/// A calendar month of a specific year, e.g. 2024-01.
///
/// Months are ordered chronologically. Arithmetic is done on a monotonic
/// month index so that stepping across year boundaries never skips or
/// repeats a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// The given `month` of `year`.
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The month containing `date`.
    pub fn of(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The calendar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// The month of the year.
    pub fn month(self) -> Month {
        self.month
    }

    /// The number of months since January of year zero.
    fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(u8::from(self.month)) - 1
    }

    fn from_index(index: i64) -> Self {
        let year = index.div_euclid(12);
        let months_after_january = index.rem_euclid(12) as u8;

        Self {
            year: year as i32,
            month: Month::January.nth_next(months_after_january),
        }
    }

    /// The month `months` months before this one.
    pub fn months_before(self, months: u32) -> Self {
        Self::from_index(self.index() - i64::from(months))
    }

    /// The month `months` months after this one.
    pub fn months_after(self, months: u32) -> Self {
        Self::from_index(self.index() + i64::from(months))
    }

    /// The `count` consecutive months ending with this one, oldest first.
    pub fn trailing_window(self, count: u32) -> Vec<YearMonth> {
        (0..count)
            .rev()
            .map(|offset| self.months_before(offset))
            .collect()
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Formats the month as a canonical `YYYY-MM` key.
impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}
