#![forbid(unsafe_code)]

pub mod error;
pub mod quiz_service;

pub use weekday_core::Clock;

pub use error::QuizError;
pub use quiz_service::{GuessResult, QuizService, ScoreSummary, random_date_in_year};
