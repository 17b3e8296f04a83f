//! Date → zodiac sign classification.
//!
//! Each sign owns an inclusive range that straddles two calendar months. The
//! table is checked top to bottom and the first matching row wins; the ranges
//! do not overlap, so order only matters for readability.

use chrono::{Datelike, NaiveDate};

use crate::models::ZodiacSign;

/// A (month, day) pair, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

const fn md(month: u32, day: u32) -> MonthDay {
    MonthDay { month, day }
}

#[derive(Debug, Clone, Copy)]
pub struct SignRange {
    pub sign: ZodiacSign,
    pub start: MonthDay,
    pub end: MonthDay,
}

impl SignRange {
    /// Matches the tail of the start month or the head of the end month.
    /// Day numbers are not checked against the month's real length.
    pub fn contains(&self, day: u32, month: u32) -> bool {
        (month == self.start.month && day >= self.start.day)
            || (month == self.end.month && day <= self.end.day)
    }
}

pub const SIGN_RANGES: [SignRange; 12] = [
    SignRange { sign: ZodiacSign::Aries, start: md(3, 21), end: md(4, 19) },
    SignRange { sign: ZodiacSign::Taurus, start: md(4, 20), end: md(5, 20) },
    SignRange { sign: ZodiacSign::Gemini, start: md(5, 21), end: md(6, 20) },
    SignRange { sign: ZodiacSign::Cancer, start: md(6, 21), end: md(7, 22) },
    SignRange { sign: ZodiacSign::Leo, start: md(7, 23), end: md(8, 22) },
    SignRange { sign: ZodiacSign::Virgo, start: md(8, 23), end: md(9, 22) },
    SignRange { sign: ZodiacSign::Libra, start: md(9, 23), end: md(10, 22) },
    SignRange { sign: ZodiacSign::Scorpio, start: md(10, 23), end: md(11, 21) },
    SignRange { sign: ZodiacSign::Sagittarius, start: md(11, 22), end: md(12, 21) },
    SignRange { sign: ZodiacSign::Capricorn, start: md(12, 22), end: md(1, 19) },
    SignRange { sign: ZodiacSign::Aquarius, start: md(1, 20), end: md(2, 18) },
    SignRange { sign: ZodiacSign::Pisces, start: md(2, 19), end: md(3, 20) },
];

/// Returns `None` only when no row matches, i.e. `month` outside 1..=12.
pub fn classify(day: u32, month: u32) -> Option<ZodiacSign> {
    SIGN_RANGES
        .iter()
        .find(|range| range.contains(day, month))
        .map(|range| range.sign)
}

pub fn classify_date(date: NaiveDate) -> Option<ZodiacSign> {
    classify(date.day(), date.month())
}
