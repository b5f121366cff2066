use services::{Clock, QuizService};
use weekday_core::model::Weekday;

/// A user interaction the quiz screen can dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    PreviousYear,
    NextYear,
    Guess(Weekday),
    NextDate,
}

/// Feedback line shown after a guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub correct: bool,
}

/// View model for the quiz screen.
///
/// Owns the `QuizService` and translates intents into service calls, so the
/// view itself stays free of quiz rules. Guess intents are gated on the
/// answered flag here as well as by the disabled buttons, so a second guess
/// in the same round can never reach the service.
pub struct QuizVm {
    quiz: QuizService,
    feedback: Option<Feedback>,
}

impl QuizVm {
    /// Create a session for `year` with the first round already generated.
    #[must_use]
    pub fn start(year: i32) -> Self {
        let mut quiz = QuizService::new(year, Clock::default_clock());
        quiz.new_round();
        Self {
            quiz,
            feedback: None,
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.quiz.year()
    }

    /// The round's date as `dd / mm / yyyy`.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.quiz
            .current_date()
            .map(|date| date.to_string())
            .unwrap_or_default()
    }

    /// True while guess input should be disabled.
    #[must_use]
    pub fn answered(&self) -> bool {
        self.quiz.answered()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// The running tally as `Score: s / a`.
    #[must_use]
    pub fn score_line(&self) -> String {
        self.quiz.score_summary().to_string()
    }

    pub fn apply(&mut self, intent: QuizIntent) {
        match intent {
            QuizIntent::PreviousYear => {
                self.quiz.previous_year();
                self.next_date();
            }
            QuizIntent::NextYear => {
                self.quiz.next_year();
                self.next_date();
            }
            QuizIntent::Guess(day) => self.guess(day),
            QuizIntent::NextDate => self.next_date(),
        }
    }

    fn next_date(&mut self) {
        self.quiz.new_round();
        self.feedback = None;
    }

    fn guess(&mut self, day: Weekday) {
        if self.quiz.answered() {
            return;
        }
        if let Ok(result) = self.quiz.submit_guess(day) {
            let message = if result.correct {
                "Correct!".to_string()
            } else {
                format!("Wrong! The correct answer is {}", result.answer)
            };
            self.feedback = Some(Feedback {
                message,
                correct: result.correct,
            });
        }
    }
}
