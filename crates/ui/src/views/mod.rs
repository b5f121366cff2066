mod quiz;

pub use quiz::QuizView;
