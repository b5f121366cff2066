use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::fmt;

use weekday_core::Clock;
use weekday_core::model::{QuizDate, Weekday, days_in_month};

use crate::error::QuizError;

//
// ─── ROUND ────────────────────────────────────────────────────────────────────
//

/// One question cycle: a generated date awaiting exactly one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Round {
    date: QuizDate,
    weekday: Weekday,
    answered: bool,
}

impl Round {
    fn new(date: QuizDate) -> Self {
        Self {
            date,
            weekday: date.weekday(),
            answered: false,
        }
    }
}

//
// ─── RESULTS ──────────────────────────────────────────────────────────────────
//

/// Outcome of a single submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuessResult {
    pub correct: bool,
    pub guess: Weekday,
    /// The weekday the round's date actually falls on.
    pub answer: Weekday,
}

/// Running tally for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub score: u32,
    pub attempts: u32,
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {} / {}", self.score, self.attempts)
    }
}

//
// ─── DATE SAMPLING ────────────────────────────────────────────────────────────
//

/// Picks a uniformly random date within `year`.
///
/// Draws the month first, then a day in `1..=days_in_month`, so short months
/// are never biased by a clamped 1-31 draw.
/// # Panics
///
/// Never: both draws stay inside the validated ranges.
pub fn random_date_in_year(year: i32, rng: &mut impl Rng) -> QuizDate {
    let month = rng.random_range(1..=12_u8);
    let len = days_in_month(year, month).expect("month drawn from 1..=12");
    let day = rng.random_range(1..=len);
    QuizDate::new(year, month, day).expect("day drawn within month length")
}

//
// ─── QUIZ SERVICE ─────────────────────────────────────────────────────────────
//

/// In-memory quiz session: the target year, the current round, and the
/// running score.
///
/// Single-threaded and synchronous; every operation completes immediately.
/// The session lives until the process exits and is never reset.
pub struct QuizService {
    year: i32,
    round: Option<Round>,
    score: u32,
    attempts: u32,
    started_at: DateTime<Utc>,
}

impl QuizService {
    /// Create a session targeting `year`, with no active round.
    #[must_use]
    pub fn new(year: i32, clock: Clock) -> Self {
        Self {
            year,
            round: None,
            score: 0,
            attempts: 0,
            started_at: clock.now(),
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The date of the current round, if one is active.
    #[must_use]
    pub fn current_date(&self) -> Option<QuizDate> {
        self.round.map(|round| round.date)
    }

    /// True once the current round has received its guess.
    ///
    /// False both while a round is awaiting a guess and when no round exists.
    #[must_use]
    pub fn answered(&self) -> bool {
        self.round.is_some_and(|round| round.answered)
    }

    #[must_use]
    pub fn score_summary(&self) -> ScoreSummary {
        ScoreSummary {
            score: self.score,
            attempts: self.attempts,
        }
    }

    /// Replace the target year.
    ///
    /// Does not start a round; an active round keeps its previously generated
    /// date until the caller starts the next one.
    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    /// Step the target year back by one.
    pub fn previous_year(&mut self) {
        self.year = self.year.saturating_sub(1);
    }

    /// Step the target year forward by one.
    pub fn next_year(&mut self) {
        self.year = self.year.saturating_add(1);
    }

    /// Start a round with a uniformly random date in the target year.
    ///
    /// Returns the generated date.
    pub fn new_round(&mut self) -> QuizDate {
        let mut rng = rand::rng();
        self.new_round_with_rng(&mut rng)
    }

    /// Start a round using the caller's rng. Deterministic with a seeded rng.
    pub fn new_round_with_rng(&mut self, rng: &mut impl Rng) -> QuizDate {
        self.begin_round(random_date_in_year(self.year, rng))
    }

    /// Start a round with a specific date.
    ///
    /// The date does not have to fall within the target year; tests and
    /// integrations use this to pin down a known weekday.
    pub fn begin_round(&mut self, date: QuizDate) -> QuizDate {
        self.round = Some(Round::new(date));
        date
    }

    /// Score a guess against the current round.
    ///
    /// The first guess of a round marks it answered, bumps the attempt
    /// counter, and bumps the score when correct. Later guesses in the same
    /// round are rejected.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveRound` when no round has been started and
    /// `QuizError::RoundAlreadyAnswered` when this round already got a guess.
    pub fn submit_guess(&mut self, guess: Weekday) -> Result<GuessResult, QuizError> {
        let Some(round) = self.round.as_mut() else {
            return Err(QuizError::NoActiveRound);
        };
        if round.answered {
            return Err(QuizError::RoundAlreadyAnswered);
        }

        round.answered = true;
        let correct = guess == round.weekday;
        self.attempts = self.attempts.saturating_add(1);
        if correct {
            self.score = self.score.saturating_add(1);
        }

        Ok(GuessResult {
            correct,
            guess,
            answer: round.weekday,
        })
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("year", &self.year)
            .field("round", &self.round)
            .field("score", &self.score)
            .field("attempts", &self.attempts)
            .field("started_at", &self.started_at)
            .finish()
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
