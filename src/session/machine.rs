//! The round state machine.
//!
//! ## transition
//!
//! One action in, one [`View`] out. The table of accepted moves:
//!
//! | from       | action      | to                    |
//! |------------|-------------|-----------------------|
//! | any        | `Reset`     | `Playing` (or `Init`) |
//! | `Playing`  | `Submit(g)` | `Finished`/`Victory`  |
//! | `Finished` | `Continue`  | `Playing`             |
//!
//! Anything else is `UnexpectedAction` and changes nothing.
//!
//! ## Session
//!
//! Owns a source, its state and its RNG, and turns every action into a
//! [`View`] for the presentation adapter.

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::view::{Presenter, View};
use crate::core::{Action, ActionKind, ActionRecord, Feedback, Phase, QuizConfig, QuizRng, QuizRngState, RoundState};
use crate::error::{GenerationError, SessionError};
use crate::puzzles::{Answer, Puzzle};
use crate::rules::PuzzleSource;

/// Clear the state and the source, then draw the first puzzle.
///
/// On failure the state stays in `Init` with a notice.
pub fn initialize<S: PuzzleSource>(
    state: &mut RoundState<S::Answer>,
    source: &mut S,
    rng: &mut QuizRng,
) -> Result<(), GenerationError> {
    state.reset();
    source.reset();
    start_round(state, source, rng)
}

fn start_round<S: PuzzleSource>(
    state: &mut RoundState<S::Answer>,
    source: &mut S,
    rng: &mut QuizRng,
) -> Result<(), GenerationError> {
    match source.draw(state.last_rule.as_ref(), rng) {
        Ok(puzzle) => {
            debug!("round {}: {} ({})", state.round + 1, puzzle.masked_text(), puzzle.rule());
            state.begin_round(puzzle);
            Ok(())
        }
        Err(err) => {
            warn!("{} could not draw a puzzle: {}", source.name(), err);
            state.notice = Some(err.to_string());
            Err(err)
        }
    }
}

fn check<S: PuzzleSource>(
    state: &mut RoundState<S::Answer>,
    source: &mut S,
    guess: S::Answer,
) -> Result<(), SessionError> {
    let feedback = match state.puzzle.as_ref() {
        Some(puzzle) => judge(puzzle, guess),
        None => {
            return Err(SessionError::UnexpectedAction {
                action: ActionKind::Submit.as_str(),
                phase: state.phase,
            })
        }
    };

    state.phase = Phase::Checking;
    if feedback.correct {
        state.score += 1;
    }
    source.record_outcome(feedback.correct);
    debug!(
        "round {}: guess {} is {}",
        state.round,
        feedback.guess,
        if feedback.correct { "correct" } else { "wrong" }
    );
    state.feedback = Some(feedback);

    state.phase = if state.has_won() { Phase::Victory } else { Phase::Finished };
    if state.phase == Phase::Victory {
        info!("victory with {}/{} correct", state.score, state.target_score());
    }
    Ok(())
}

fn judge<A: Answer>(puzzle: &Puzzle<A>, guess: A) -> Feedback<A> {
    Feedback {
        correct: puzzle.is_correct(&guess),
        guess,
        answer: puzzle.answer().clone(),
        rule_description: puzzle.description().to_string(),
        revealed: puzzle.revealed_text(),
    }
}

/// Apply one action to the state and describe the result.
///
/// A rejected action leaves the state as it was; a failed draw leaves a
/// notice.
pub fn transition<S: PuzzleSource>(
    state: &mut RoundState<S::Answer>,
    source: &mut S,
    rng: &mut QuizRng,
    action: Action<S::Answer>,
) -> Result<View, SessionError> {
    let from = state.phase;
    let round = state.round;
    let kind = action.kind();

    match (from, action) {
        (_, Action::Reset) => {
            info!("resetting {} session", source.name());
            initialize(state, source, rng)?;
        }
        (Phase::Playing, Action::Submit(guess)) => check(state, source, guess)?,
        (Phase::Finished, Action::Continue) if !state.is_blocked() => {
            start_round(state, source, rng)?;
        }
        (phase, _) => {
            return Err(SessionError::UnexpectedAction { action: kind.as_str(), phase });
        }
    }

    let record_round = if kind == ActionKind::Reset { state.round } else { round };
    state.record(ActionRecord::new(record_round, kind, from, state.phase));
    Ok(View::of(state, source.remaining(), source.victory_hint()))
}

/// One player's run through a quiz variant.
#[derive(Debug)]
pub struct Session<S: PuzzleSource> {
    config: QuizConfig,
    source: S,
    state: RoundState<S::Answer>,
    rng: QuizRng,
}

#[derive(Serialize, Deserialize)]
struct Snapshot<C, S, R> {
    config: C,
    source: S,
    state: R,
    rng: QuizRngState,
}

impl<S: PuzzleSource> Session<S> {
    /// Validate `config` and draw the first puzzle.
    ///
    /// A source that cannot produce even one puzzle is not an error here:
    /// the session starts in `Init` with a notice and waits for a reset.
    pub fn new(config: QuizConfig, source: S, seed: u64) -> Result<Self, SessionError> {
        config.validate()?;

        let mut session = Self {
            state: RoundState::new(config.target_score),
            config,
            source,
            rng: QuizRng::new(seed),
        };
        info!(
            "starting {} session (target {}, seed {})",
            session.source.name(),
            session.config.target_score,
            seed
        );
        // Failure is already recorded as a notice.
        let _ = initialize(&mut session.state, &mut session.source, &mut session.rng);
        Ok(session)
    }

    /// Dispatch one action and return what to render.
    pub fn apply(&mut self, action: Action<S::Answer>) -> Result<View, SessionError> {
        let mut view = transition(&mut self.state, &mut self.source, &mut self.rng, action)?;
        if let (Some(victory), Some(hint)) = (view.victory.as_mut(), &self.config.victory_hint) {
            victory.hint = Some(hint.clone());
        }
        Ok(view)
    }

    pub fn submit(&mut self, guess: S::Answer) -> Result<View, SessionError> {
        self.apply(Action::Submit(guess))
    }

    /// Parse raw input and submit it.
    ///
    /// The phase is checked first, so text typed outside `Playing` is an
    /// `UnexpectedAction` even if it would not parse.
    pub fn submit_raw(&mut self, raw: &str) -> Result<View, SessionError> {
        if self.state.phase != Phase::Playing {
            return Err(SessionError::UnexpectedAction {
                action: ActionKind::Submit.as_str(),
                phase: self.state.phase,
            });
        }
        let action = Action::parse_submit(raw)?;
        self.apply(action)
    }

    pub fn continue_round(&mut self) -> Result<View, SessionError> {
        self.apply(Action::Continue)
    }

    pub fn reset(&mut self) -> Result<View, SessionError> {
        self.apply(Action::Reset)
    }

    /// Dispatch and render, whether or not the action was accepted.
    pub fn handle<P: Presenter>(
        &mut self,
        action: Action<S::Answer>,
        presenter: &mut P,
    ) -> Result<(), SessionError> {
        let result = self.apply(action);
        presenter.render(&self.view());
        result.map(|_| ())
    }

    /// [`Session::submit_raw`], then render.
    pub fn handle_raw<P: Presenter>(&mut self, raw: &str, presenter: &mut P) -> Result<(), SessionError> {
        let result = self.submit_raw(raw);
        presenter.render(&self.view());
        result.map(|_| ())
    }

    #[must_use]
    pub fn view(&self) -> View {
        View::of(&self.state, self.source.remaining(), self.victory_hint())
    }

    /// Configured hint if set, otherwise the source's own.
    #[must_use]
    pub fn victory_hint(&self) -> Option<&str> {
        self.config
            .victory_hint
            .as_deref()
            .or_else(|| self.source.victory_hint())
    }

    #[must_use]
    pub fn state(&self) -> &RoundState<S::Answer> {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle<S::Answer>> {
        self.state.puzzle.as_ref()
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Serialize the whole session, RNG position included.
    pub fn snapshot(&self) -> Result<Vec<u8>, SessionError>
    where
        S: Serialize,
        S::Answer: Serialize,
    {
        let snapshot = Snapshot {
            config: &self.config,
            source: &self.source,
            state: &self.state,
            rng: self.rng.state(),
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    /// Rebuild a session from [`Session::snapshot`] bytes.
    ///
    /// The restored session continues exactly where the original was.
    /// Bytes that decode but contradict themselves, such as a target score
    /// differing from the config's or a blank outside the puzzle, are
    /// rejected with [`SessionError::InconsistentSnapshot`].
    pub fn restore(bytes: &[u8]) -> Result<Self, SessionError>
    where
        S: DeserializeOwned,
        S::Answer: DeserializeOwned,
    {
        let snapshot: Snapshot<QuizConfig, S, RoundState<S::Answer>> = bincode::deserialize(bytes)?;
        snapshot.config.validate()?;
        if snapshot.state.target_score() != snapshot.config.target_score {
            return Err(SessionError::InconsistentSnapshot("target score differs from the config"));
        }
        if snapshot.state.puzzle.as_ref().is_some_and(|p| !p.is_consistent()) {
            return Err(SessionError::InconsistentSnapshot("puzzle blank or labels out of range"));
        }
        Ok(Self {
            config: snapshot.config,
            source: snapshot.source,
            state: snapshot.state,
            rng: QuizRng::from_state(&snapshot.rng),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::Rule;

    /// Hands out arithmetic puzzles with steps 1, 2, ... up to `limit`.
    #[derive(Debug, Serialize, Deserialize)]
    struct Counting {
        next: i64,
        limit: i64,
        outcomes: Vec<bool>,
    }

    impl Counting {
        fn new(limit: i64) -> Self {
            Self { next: 1, limit, outcomes: Vec::new() }
        }
    }

    impl PuzzleSource for Counting {
        type Answer = i64;

        fn name(&self) -> &str {
            "counting"
        }

        fn draw(&mut self, _last: Option<&Rule>, _rng: &mut QuizRng) -> Result<Puzzle<i64>, GenerationError> {
            if self.next > self.limit {
                return Err(self.exhausted());
            }
            let step = self.next;
            self.next += 1;
            Ok(Puzzle::new(Rule::Arithmetic { start: 0, step }, (0..5).map(|i| i * step), 2))
        }

        fn remaining(&self) -> Option<usize> {
            Some((self.limit - self.next + 1).max(0) as usize)
        }

        fn record_outcome(&mut self, correct: bool) {
            self.outcomes.push(correct);
        }

        fn reset(&mut self) {
            self.next = 1;
            self.outcomes.clear();
        }
    }

    fn session(target: u32, limit: i64) -> Session<Counting> {
        Session::new(QuizConfig::default().with_target_score(target), Counting::new(limit), 7).unwrap()
    }

    fn answer(session: &Session<Counting>) -> i64 {
        *session.puzzle().unwrap().answer()
    }

    #[test]
    fn test_starts_playing() {
        let session = session(3, 10);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.state().round, 1);
        assert_eq!(answer(&session), 2);
    }

    #[test]
    fn test_correct_then_continue() {
        let mut session = session(3, 10);

        let view = session.submit(2).unwrap();
        assert_eq!(view.phase, Phase::Finished);
        assert_eq!(view.score, 1);
        assert_eq!(view.feedback_correct, Some(true));
        assert!(view.can_continue);

        let view = session.continue_round().unwrap();
        assert_eq!(view.phase, Phase::Playing);
        assert_eq!(view.round, 2);
        assert!(view.feedback.is_none());
        assert_eq!(answer(&session), 4);
        assert_eq!(session.source().outcomes, vec![true]);
    }

    #[test]
    fn test_wrong_guess_keeps_score() {
        let mut session = session(3, 10);
        let view = session.submit(99).unwrap();
        assert_eq!(view.phase, Phase::Finished);
        assert_eq!(view.score, 0);
        assert_eq!(view.feedback_correct, Some(false));
        assert!(view.feedback.unwrap().contains("You said 99"));
    }

    #[test]
    fn test_victory_on_winning_submit() {
        let mut session = session(2, 10);
        session.submit(2).unwrap();
        session.continue_round().unwrap();
        let view = session.submit(4).unwrap();

        assert_eq!(view.phase, Phase::Victory);
        assert_eq!(view.victory.unwrap().score, 2);
        assert!(matches!(
            session.continue_round(),
            Err(SessionError::UnexpectedAction { action: "continue", phase: Phase::Victory })
        ));
    }

    #[test]
    fn test_unexpected_actions_change_nothing() {
        let mut session = session(3, 10);
        let before = session.view();
        assert!(matches!(
            session.continue_round(),
            Err(SessionError::UnexpectedAction { phase: Phase::Playing, .. })
        ));
        assert_eq!(session.view(), before);

        session.submit(2).unwrap();
        let before = session.view();
        assert!(matches!(session.submit(4), Err(SessionError::UnexpectedAction { .. })));
        assert!(matches!(session.submit_raw("4"), Err(SessionError::UnexpectedAction { .. })));
        assert_eq!(session.view(), before);
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        let mut session = session(3, 10);
        let before = session.view();
        assert!(matches!(session.submit_raw(""), Err(SessionError::MissingGuess)));
        assert!(matches!(session.submit_raw("two"), Err(SessionError::MalformedGuess { .. })));
        assert_eq!(session.view(), before);

        let view = session.submit_raw(" 2 ").unwrap();
        assert_eq!(view.score, 1);
    }

    #[test]
    fn test_exhaustion_blocks_until_reset() {
        let mut session = session(5, 1);
        session.submit(2).unwrap();
        assert!(!session.view().can_continue);

        let err = session.continue_round().unwrap_err();
        assert!(err.is_blocking());
        assert_eq!(session.phase(), Phase::Finished);
        assert!(session.view().notice.is_some());

        // Blocked: a second continue is refused outright.
        assert!(matches!(session.continue_round(), Err(SessionError::UnexpectedAction { .. })));

        let view = session.reset().unwrap();
        assert_eq!(view.phase, Phase::Playing);
        assert_eq!(view.score, 0);
        assert!(view.notice.is_none());
    }

    #[test]
    fn test_failed_init_waits_in_init() {
        let mut session = Session::new(QuizConfig::default(), Counting::new(0), 1).unwrap();
        assert_eq!(session.phase(), Phase::Init);
        assert!(session.view().notice.is_some());
        assert!(matches!(session.submit(0), Err(SessionError::UnexpectedAction { phase: Phase::Init, .. })));
        assert!(session.reset().is_err());
        assert_eq!(session.phase(), Phase::Init);
    }

    #[test]
    fn test_reset_mid_round() {
        let mut session = session(3, 10);
        session.submit(2).unwrap();
        session.continue_round().unwrap();

        let view = session.reset().unwrap();
        assert_eq!(view.round, 1);
        assert_eq!(view.score, 0);
        assert_eq!(answer(&session), 2);
        assert_eq!(session.state().history.len(), 1);
    }

    #[test]
    fn test_history_records_accepted_actions() {
        let mut session = session(3, 10);
        session.submit(2).unwrap();
        let _ = session.submit(2);
        session.continue_round().unwrap();

        let history: Vec<_> = session.state().history.iter().cloned().collect();
        assert_eq!(
            history,
            vec![
                ActionRecord::new(1, ActionKind::Submit, Phase::Playing, Phase::Finished),
                ActionRecord::new(1, ActionKind::Continue, Phase::Finished, Phase::Playing),
            ]
        );
    }

    #[test]
    fn test_configured_hint_wins() {
        let config = QuizConfig::default().with_victory_hint("look behind the clock");
        let session = Session::new(config, Counting::new(3), 1).unwrap();
        assert_eq!(session.victory_hint(), Some("look behind the clock"));
    }

    #[test]
    fn test_invalid_config() {
        let config = QuizConfig { target_score: 0, ..QuizConfig::default() };
        assert!(matches!(
            Session::new(config, Counting::new(3), 1),
            Err(SessionError::Config(_))
        ));
    }

    #[test]
    fn test_handle_renders_rejections() {
        use crate::session::RecordingPresenter;

        let mut session = session(3, 10);
        let mut presenter = RecordingPresenter::default();
        assert!(session.handle(Action::Continue, &mut presenter).is_err());
        session.handle_raw("2", &mut presenter).unwrap();

        assert_eq!(presenter.views.len(), 2);
        assert_eq!(presenter.views[0].phase, Phase::Playing);
        assert_eq!(presenter.views[1].phase, Phase::Finished);
    }

    #[test]
    fn test_restore_round_trip() {
        let mut session = session(3, 10);
        session.submit(2).unwrap();

        let bytes = session.snapshot().unwrap();
        let restored: Session<Counting> = Session::restore(&bytes).unwrap();
        assert_eq!(restored.view(), session.view());
        assert_eq!(restored.source().outcomes, vec![true]);
    }

    #[test]
    fn test_restore_rejects_mismatched_target() {
        let mut session = session(3, 10);
        session.config.target_score = 5;

        let bytes = session.snapshot().unwrap();
        assert!(matches!(
            Session::<Counting>::restore(&bytes),
            Err(SessionError::InconsistentSnapshot(_))
        ));
    }

    #[test]
    fn test_restore_rejects_blank_past_end() {
        let mut session = session(3, 10);
        let mut value = serde_json::to_value(session.puzzle().unwrap()).unwrap();
        value["blank_index"] = serde_json::json!(99);
        let broken: Puzzle<i64> = serde_json::from_value(value).unwrap();
        assert!(!broken.is_consistent());
        session.state.puzzle = Some(broken);

        let bytes = session.snapshot().unwrap();
        assert!(matches!(
            Session::<Counting>::restore(&bytes),
            Err(SessionError::InconsistentSnapshot(_))
        ));
    }
}
