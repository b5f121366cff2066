use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::date::DateError;

/// Day of the week, numbered 0 = Sunday .. 6 = Saturday.
///
/// The Sunday-first numbering is the crate-wide convention; every
/// conversion in and out of a numeric code uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All seven days in display order, Sunday first.
    ///
    /// Index position equals the day's numeric code.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Converts a numeric code (0-6) to a `Weekday`.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidWeekday` if the value is not in 0-6.
    pub fn from_u8(value: u8) -> Result<Self, DateError> {
        match value {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            _ => Err(DateError::InvalidWeekday(value)),
        }
    }

    /// Numeric code of this day, 0 = Sunday.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }

    /// English display name of this day.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_u8(day.index()).unwrap(), day);
        }
    }

    #[test]
    fn all_matches_codes() {
        for (idx, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(usize::from(day.index()), idx);
        }
    }

    #[test]
    fn rejects_out_of_range_codes() {
        assert!(matches!(
            Weekday::from_u8(7),
            Err(DateError::InvalidWeekday(7))
        ));
        assert!(matches!(
            Weekday::from_u8(255),
            Err(DateError::InvalidWeekday(255))
        ));
    }

    #[test]
    fn names_are_english() {
        assert_eq!(Weekday::Sunday.name(), "Sunday");
        assert_eq!(Weekday::Saturday.to_string(), "Saturday");
    }
}
