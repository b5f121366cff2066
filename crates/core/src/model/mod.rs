mod date;
mod weekday;

pub use date::{DateError, QuizDate, days_in_month, is_leap_year};
pub use weekday::Weekday;
