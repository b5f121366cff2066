use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::weekday::Weekday;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when constructing calendar values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("month out of range: {0}")]
    InvalidMonth(u8),

    #[error("day {day} out of range for {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    #[error("invalid weekday value: {0}")]
    InvalidWeekday(u8),
}

//
// ─── LEAP YEARS / MONTH LENGTHS ───────────────────────────────────────────────
//

/// Returns true when `year` is a leap year under proleptic Gregorian rules:
/// divisible by 4, except centuries not divisible by 400.
///
/// Defined for every `i32` year, negatives included.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month (1-12) of `year`.
///
/// # Errors
///
/// Returns `DateError::InvalidMonth` when `month` is not in 1-12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, DateError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => Ok(if is_leap_year(year) { 29 } else { 28 }),
        other => Err(DateError::InvalidMonth(other)),
    }
}

//
// ─── QUIZ DATE ────────────────────────────────────────────────────────────────
//

/// A validated proleptic Gregorian calendar date.
///
/// Construction enforces the month/day bounds, so a `QuizDate` value always
/// names a real day. Weekday math is done in `i64`, so every `i32` year is
/// well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizDate {
    year: i32,
    month: u8,
    day: u8,
}

impl QuizDate {
    /// Creates a date, validating month and day against the calendar.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidMonth` for months outside 1-12 and
    /// `DateError::InvalidDay` for days outside the month's length.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let len = days_in_month(year, month)?;
        if day == 0 || day > len {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }

    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Computes the day of the week via Sakamoto's method.
    ///
    /// Uses Euclidean division so years before the common era come out the
    /// same as extending the Gregorian calendar backward.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

        let mut y = i64::from(self.year);
        if self.month < 3 {
            y -= 1;
        }
        let days = y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            + OFFSETS[usize::from(self.month - 1)]
            + i64::from(self.day);

        // rem_euclid keeps the index in 0..7 for negative years as well.
        Weekday::ALL[days.rem_euclid(7) as usize]
    }
}

impl fmt::Display for QuizDate {
    /// Renders as `dd / mm / yyyy` with zero-padded day and month.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} / {:02} / {}", self.day, self.month, self.year)
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
    }

    #[test]
    fn month_lengths() {
        let lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (idx, expected) in lengths.iter().enumerate() {
            let month = (idx + 1) as u8;
            assert_eq!(days_in_month(2023, month).unwrap(), *expected);
        }
        assert!(matches!(
            days_in_month(2023, 0),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            days_in_month(2023, 13),
            Err(DateError::InvalidMonth(13))
        ));
    }

    #[test]
    fn rejects_invalid_days() {
        assert!(QuizDate::new(2023, 2, 29).is_err());
        assert!(QuizDate::new(2024, 2, 30).is_err());
        assert!(QuizDate::new(2024, 4, 31).is_err());
        assert!(QuizDate::new(2024, 1, 0).is_err());
        assert!(QuizDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn known_weekdays() {
        // 2024-01-01 was a Monday.
        let date = QuizDate::new(2024, 1, 1).unwrap();
        assert_eq!(date.weekday(), Weekday::Monday);

        // 2024-03-15 was a Friday.
        let date = QuizDate::new(2024, 3, 15).unwrap();
        assert_eq!(date.weekday(), Weekday::Friday);

        // 2000-01-01 was a Saturday.
        let date = QuizDate::new(2000, 1, 1).unwrap();
        assert_eq!(date.weekday(), Weekday::Saturday);

        // 1900-02-28 was a Wednesday.
        let date = QuizDate::new(1900, 2, 28).unwrap();
        assert_eq!(date.weekday(), Weekday::Wednesday);
    }

    #[test]
    fn weekday_matches_chrono_over_a_range() {
        for year in [1600, 1899, 1970, 2000, 2024, 2100] {
            for month in 1..=12_u8 {
                let len = days_in_month(year, month).unwrap();
                for day in 1..=len {
                    let ours = QuizDate::new(year, month, day).unwrap().weekday();
                    let theirs = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
                        .unwrap()
                        .weekday()
                        .num_days_from_sunday() as u8;
                    assert_eq!(ours.index(), theirs, "{year}-{month:02}-{day:02}");
                }
            }
        }
    }

    #[test]
    fn weekday_is_defined_for_extreme_years() {
        // Cycle check: the Gregorian calendar repeats every 400 years.
        let a = QuizDate::new(-2000, 7, 4).unwrap().weekday();
        let b = QuizDate::new(-1600, 7, 4).unwrap().weekday();
        assert_eq!(a, b);

        let far = QuizDate::new(i32::MAX - 1, 12, 31).unwrap();
        let _ = far.weekday();
    }

    #[test]
    fn display_zero_pads() {
        let date = QuizDate::new(2024, 3, 5).unwrap();
        assert_eq!(date.to_string(), "05 / 03 / 2024");

        let date = QuizDate::new(987, 11, 21).unwrap();
        assert_eq!(date.to_string(), "21 / 11 / 987");
    }
}
