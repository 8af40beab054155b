//! Session scenario tests.
//!
//! These drive real quiz variants through the round state machine:
//! - Winning in exactly `target` correct answers
//! - Score monotonicity and reset
//! - Rejected input and out-of-phase actions

use pattern_quiz::session::RecordingPresenter;
use pattern_quiz::{Action, PatternGame, Phase, QuizConfig, Session, SessionError};

fn pattern_session(target: u32, seed: u64) -> Session<PatternGame> {
    let config = QuizConfig::default().with_target_score(target);
    Session::new(config.clone(), PatternGame::new(&config), seed).unwrap()
}

fn current_answer(session: &Session<PatternGame>) -> i64 {
    *session.puzzle().expect("a puzzle is showing").answer()
}

/// Three correct answers with target 3 end in victory, 3/3.
#[test]
fn test_three_correct_answers_win() {
    let mut session = pattern_session(3, 42);

    for round in 1..=3 {
        assert_eq!(session.phase(), Phase::Playing);
        let view = session.submit(current_answer(&session)).unwrap();
        assert_eq!(view.score, round);

        if round < 3 {
            assert_eq!(view.phase, Phase::Finished);
            session.continue_round().unwrap();
        } else {
            // Victory comes from the submit itself, not a later continue.
            assert_eq!(view.phase, Phase::Victory);
            let victory = view.victory.unwrap();
            assert_eq!((victory.score, victory.target_score), (3, 3));
            assert!(victory.hint.is_some());
        }
    }
}

/// Wrong answers never lower the score.
#[test]
fn test_score_never_decreases() {
    let mut session = pattern_session(10, 7);
    let mut previous = 0;

    for i in 0..8 {
        let answer = current_answer(&session);
        let guess = if i % 2 == 0 { answer } else { answer + 1 };
        let view = session.submit(guess).unwrap();
        assert!(view.score >= previous);
        previous = view.score;
        session.continue_round().unwrap();
    }
    assert_eq!(previous, 4);
}

/// Reset from any phase starts over at zero.
#[test]
fn test_reset_from_every_phase() {
    let mut session = pattern_session(1, 3);

    // From Playing.
    let view = session.reset().unwrap();
    assert_eq!((view.phase, view.score, view.round), (Phase::Playing, 0, 1));

    // From Victory.
    session.submit(current_answer(&session)).unwrap();
    assert_eq!(session.phase(), Phase::Victory);
    let view = session.reset().unwrap();
    assert_eq!((view.phase, view.score), (Phase::Playing, 0));

    // From Finished.
    let mut session = pattern_session(3, 3);
    session.submit(current_answer(&session) - 1).unwrap();
    assert_eq!(session.phase(), Phase::Finished);
    let view = session.reset().unwrap();
    assert_eq!(view.phase, Phase::Playing);
    assert!(view.feedback.is_none());
}

/// Blank or non-numeric input leaves the session exactly as it was.
#[test]
fn test_bad_input_keeps_playing() {
    let mut session = pattern_session(3, 11);
    let before = session.view();

    for raw in ["", "   ", "seven", "3.5", "1e3"] {
        let err = session.submit_raw(raw).unwrap_err();
        assert!(matches!(err, SessionError::MissingGuess | SessionError::MalformedGuess { .. }));
        assert!(!err.is_blocking());
        assert_eq!(session.view(), before);
    }
    assert!(session.state().history.is_empty());
}

/// Actions outside their phase are refused.
#[test]
fn test_out_of_phase_actions() {
    let mut session = pattern_session(3, 5);

    let err = session.continue_round().unwrap_err();
    assert_eq!(err.to_string(), "continue is not allowed while playing");

    let answer = current_answer(&session);
    session.submit(answer).unwrap();
    let err = session.submit(answer).unwrap_err();
    assert_eq!(err.to_string(), "submit is not allowed while finished");
    assert_eq!(session.score(), 1);
}

/// Every dispatched action reaches the presenter, rejected ones included.
#[test]
fn test_presenter_sees_every_action() {
    let mut session = pattern_session(3, 9);
    let mut presenter = RecordingPresenter::default();

    let _ = session.handle(Action::Continue, &mut presenter);
    let _ = session.handle_raw("not a number", &mut presenter);
    let answer = current_answer(&session);
    session.handle(Action::Submit(answer), &mut presenter).unwrap();
    session.handle(Action::Continue, &mut presenter).unwrap();

    let phases: Vec<Phase> = presenter.views.iter().map(|v| v.phase).collect();
    assert_eq!(phases, vec![Phase::Playing, Phase::Playing, Phase::Finished, Phase::Playing]);

    // A new puzzle bumps the nonce so adapters clear their input.
    assert!(presenter.views[3].input_nonce > presenter.views[2].input_nonce);
}

/// The same seed plays the same game.
#[test]
fn test_seed_is_reproducible() {
    let mut a = pattern_session(5, 1234);
    let mut b = pattern_session(5, 1234);

    for _ in 0..4 {
        assert_eq!(a.view(), b.view());
        let guess = current_answer(&a);
        a.submit(guess).unwrap();
        b.submit(guess).unwrap();
        a.continue_round().unwrap();
        b.continue_round().unwrap();
    }
}

/// A configured hint replaces the variant's own.
#[test]
fn test_victory_hint_override() {
    let config = QuizConfig::default()
        .with_target_score(1)
        .with_victory_hint("The drawbridge is down.");
    let mut session = Session::new(config.clone(), PatternGame::new(&config), 2).unwrap();

    let view = session.submit(current_answer(&session)).unwrap();
    assert_eq!(view.victory.unwrap().hint.as_deref(), Some("The drawbridge is down."));
}
