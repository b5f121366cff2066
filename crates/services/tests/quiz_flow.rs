use rand::SeedableRng;
use rand::rngs::StdRng;

use services::{Clock, QuizError, QuizService};
use weekday_core::model::{QuizDate, Weekday, days_in_month};
use weekday_core::time::fixed_now;

#[test]
fn generated_rounds_stay_within_bounds() {
    let mut rng = StdRng::seed_from_u64(1);
    for year in [2024, 2023, 2000, 1900, 1, -44] {
        let mut quiz = QuizService::new(year, Clock::fixed(fixed_now()));
        for _ in 0..10_000 {
            let date = quiz.new_round_with_rng(&mut rng);
            assert_eq!(date.year(), year);
            let len = days_in_month(year, date.month()).unwrap();
            assert!((1..=len).contains(&date.day()), "{date}");
        }
    }
}

#[test]
fn full_round_scenario() {
    let mut quiz = QuizService::new(2024, Clock::default_clock());

    // 2024-03-15 is a Friday (code 5 in the Sunday-first numbering).
    quiz.begin_round(QuizDate::new(2024, 3, 15).unwrap());
    assert!(!quiz.answered());

    let result = quiz.submit_guess(Weekday::from_u8(5).unwrap()).unwrap();
    assert!(result.correct);
    assert_eq!(result.answer.name(), "Friday");

    let summary = quiz.score_summary();
    assert_eq!((summary.score, summary.attempts), (1, 1));
    assert!(quiz.answered());

    assert_eq!(
        quiz.submit_guess(Weekday::Friday).unwrap_err(),
        QuizError::RoundAlreadyAnswered
    );

    let date = quiz.new_round();
    assert!(!quiz.answered());
    assert_eq!(date.year(), 2024);
    assert_eq!(quiz.current_date(), Some(date));
}

#[test]
fn tally_is_monotonic_across_mixed_calls() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut quiz = QuizService::new(1987, Clock::fixed(fixed_now()));

    let mut last = quiz.score_summary();
    for i in 0..300_usize {
        quiz.new_round_with_rng(&mut rng);
        if i % 3 != 0 {
            let _ = quiz.submit_guess(Weekday::ALL[i % 7]);
        }
        let summary = quiz.score_summary();
        assert!(summary.score <= summary.attempts);
        assert!(summary.score >= last.score);
        assert!(summary.attempts >= last.attempts);
        last = summary;
    }
}

#[test]
fn year_navigation_then_round() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut quiz = QuizService::new(2024, Clock::fixed(fixed_now()));

    quiz.previous_year();
    let date = quiz.new_round_with_rng(&mut rng);
    assert_eq!(date.year(), 2023);

    quiz.next_year();
    quiz.next_year();
    let date = quiz.new_round_with_rng(&mut rng);
    assert_eq!(date.year(), 2025);
}
