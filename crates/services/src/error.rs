//! Shared error types for the services crate.

use thiserror::Error;

use weekday_core::model::DateError;

/// Errors emitted by `QuizService`.
///
/// Both guess-time variants are contract violations by the caller: the
/// presentation layer is expected to gate its input so neither can happen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no active round to answer")]
    NoActiveRound,
    #[error("round already answered")]
    RoundAlreadyAnswered,
    #[error(transparent)]
    Date(#[from] DateError),
}
