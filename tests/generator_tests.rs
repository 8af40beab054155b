//! Number-pattern generator properties.
//!
//! Property tests over many seeds:
//! - Arithmetic draws keep a constant difference
//! - Geometric draws keep a constant ratio and stay in bounds
//! - The blank sits in `[2, len - 2]`
//! - Consecutive rounds never reuse a step or ratio

use proptest::prelude::*;

use pattern_quiz::games::pattern::geometric_sequence;
use pattern_quiz::puzzles::{common_difference, common_ratio};
use pattern_quiz::{PatternGame, PuzzleSource, QuizConfig, QuizRng, Rule};

proptest! {
    #[test]
    fn arithmetic_draws_keep_their_step(seed in any::<u64>()) {
        let game = PatternGame::new(&QuizConfig::default());
        let mut rng = QuizRng::new(seed);
        let puzzle = game.draw_arithmetic(None, &mut rng).unwrap();

        let Rule::Arithmetic { start, step } = *puzzle.rule() else {
            panic!("expected an arithmetic rule");
        };
        prop_assert_eq!(puzzle.values()[0], start);
        prop_assert_eq!(common_difference(puzzle.values()), Some(step));
        prop_assert!((5..=7).contains(&puzzle.len()));
    }

    #[test]
    fn geometric_draws_stay_in_bounds(seed in any::<u64>()) {
        let game = PatternGame::new(&QuizConfig::default());
        let mut rng = QuizRng::new(seed);
        let puzzle = game.draw_geometric(None, &mut rng).unwrap();

        let Rule::Geometric { ratio, .. } = *puzzle.rule() else {
            panic!("expected a geometric rule");
        };
        prop_assert_eq!(common_ratio(puzzle.values()), Some(ratio));
        prop_assert!(puzzle.values().iter().all(|v| *v > 0 && *v <= 5000));
        prop_assert!((4..=6).contains(&puzzle.len()));
    }

    #[test]
    fn blank_is_never_at_the_edges(seed in any::<u64>()) {
        let mut game = PatternGame::new(&QuizConfig::default());
        let mut rng = QuizRng::new(seed);
        let puzzle = game.draw(None, &mut rng).unwrap();

        let blank = puzzle.blank_index();
        prop_assert!(blank >= 2);
        prop_assert!(blank <= puzzle.len() - 2);
    }

    #[test]
    fn consecutive_rounds_change_rule(seed in any::<u64>()) {
        let mut game = PatternGame::new(&QuizConfig::default());
        let mut rng = QuizRng::new(seed);
        let mut last: Option<Rule> = None;

        for _ in 0..20 {
            let puzzle = game.draw(last.as_ref(), &mut rng).unwrap();
            if let Some(previous) = &last {
                prop_assert_ne!(previous.key(), puzzle.rule().key());
            }
            last = Some(puzzle.rule().clone());
        }
    }

    #[test]
    fn geometric_sequence_respects_any_bound(
        start in 1i64..=10,
        ratio in 2i64..=4,
        length in 4usize..=8,
        bound in 10i64..=10_000,
    ) {
        if let Ok(values) = geometric_sequence(start, ratio, length, bound, false) {
            prop_assert_eq!(values.len(), length);
            prop_assert!(values.iter().all(|v| v.abs() <= bound));
        }
    }
}

/// Start 2, ratio 4 fits six elements under 5000 but not seven.
#[test]
fn test_geometric_bound_boundary() {
    let values = geometric_sequence(2, 4, 6, 5000, false).unwrap();
    assert_eq!(values.as_slice(), &[2, 8, 32, 128, 512, 2048]);
    assert!(geometric_sequence(2, 4, 7, 5000, false).is_err());
}

/// A draw that can never fit gives up after the retry cap.
#[test]
fn test_impossible_geometric_draw_is_rejected() {
    let mut config = QuizConfig::default().with_max_draw_attempts(5).with_magnitude_bound(10);
    config.geometric.length = pattern_quiz::Span::new(6, 6);
    let game = PatternGame::new(&config);

    let err = game.draw_geometric(None, &mut QuizRng::new(1)).unwrap_err();
    assert_eq!(err, pattern_quiz::GenerationError::DrawRejected { attempts: 5 });
}

/// Draws near the edge of `i64` are rejected instead of overflowing.
#[test]
fn test_extreme_start_is_rejected() {
    let mut config = QuizConfig::default()
        .with_max_draw_attempts(3)
        .with_magnitude_bound(i64::MAX);
    config.arithmetic.start = pattern_quiz::Span::new(i64::MAX - 1000, i64::MAX - 1000);
    config.arithmetic.steps = vec![1000];
    let game = PatternGame::new(&config);

    let err = game.draw_arithmetic(None, &mut QuizRng::new(1)).unwrap_err();
    assert_eq!(err, pattern_quiz::GenerationError::DrawRejected { attempts: 3 });
}
