//! What an adapter renders after every action.
//!
//! A [`View`] is plain strings and numbers; adapters never need the answer
//! type. Implement [`Presenter`] to receive one after each dispatched action.

use serde::{Deserialize, Serialize};

use crate::core::{Phase, RoundState};
use crate::puzzles::Answer;

/// The current puzzle, masked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// One display cell per value; the blank is `?`.
    pub cells: Vec<String>,
    /// Per-cell captions; empty for plain sequences.
    pub labels: Vec<String>,
    /// Single-line form, e.g. `2 → 4 → ? → 16`.
    pub text: String,
    pub heading: Option<String>,
    /// Shown with the prompt, before any guess.
    pub hint: Option<String>,
}

impl Prompt {
    /// Cells paired with their captions, one per line, or `text` when
    /// there are no captions.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        if self.labels.is_empty() {
            return vec![self.text.clone()];
        }
        self.labels
            .iter()
            .zip(&self.cells)
            .map(|(label, cell)| format!("{label}: {cell}"))
            .collect()
    }
}

/// Fixed payload of the victory screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryPayload {
    pub score: u32,
    pub target_score: u32,
    pub message: String,
    pub hint: Option<String>,
}

/// Render input for one moment of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub phase: Phase,
    pub round: u32,
    pub score: u32,
    pub target_score: u32,
    /// Present while a guess is awaited.
    pub prompt: Option<Prompt>,
    /// Feedback text of the last checked guess.
    pub feedback: Option<String>,
    pub feedback_correct: Option<bool>,
    pub input_nonce: u64,
    /// Whether a `Continue` can currently succeed.
    pub can_continue: bool,
    /// Blocking message; only a reset clears it.
    pub notice: Option<String>,
    pub victory: Option<VictoryPayload>,
}

impl View {
    /// Build a view of `state`.
    ///
    /// `remaining` is the source's remaining supply and `hint` the sentence
    /// revealed on victory.
    #[must_use]
    pub fn of<A: Answer>(state: &RoundState<A>, remaining: Option<usize>, hint: Option<&str>) -> Self {
        let prompt = match (&state.puzzle, state.phase) {
            (Some(puzzle), Phase::Playing) => Some(Prompt {
                cells: puzzle.masked_cells(),
                labels: puzzle.labels().to_vec(),
                text: puzzle.masked_text(),
                heading: puzzle.heading().map(str::to_string),
                hint: puzzle.hint().map(str::to_string),
            }),
            _ => None,
        };

        let victory = (state.phase == Phase::Victory).then(|| VictoryPayload {
            score: state.score,
            target_score: state.target_score(),
            message: format!(
                "Congratulations! You reached the goal of {} correct answers!",
                state.target_score()
            ),
            hint: hint.map(str::to_string),
        });

        Self {
            phase: state.phase,
            round: state.round,
            score: state.score,
            target_score: state.target_score(),
            prompt,
            feedback: state.feedback.as_ref().map(ToString::to_string),
            feedback_correct: state.feedback.as_ref().map(|f| f.correct),
            input_nonce: state.input_nonce,
            can_continue: state.phase == Phase::Finished
                && !state.is_blocked()
                && remaining != Some(0),
            notice: state.notice.clone(),
            victory,
        }
    }

    /// Score line shown under every screen.
    #[must_use]
    pub fn scoreboard(&self) -> String {
        format!("Score: {} / {}", self.score, self.target_score)
    }
}

/// Presentation adapter seam.
pub trait Presenter {
    /// Called after every dispatched action, accepted or rejected.
    fn render(&mut self, view: &View);
}

/// Presenter that keeps every view it was given.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    pub views: Vec<View>,
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, view: &View) {
        self.views.push(view.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::puzzles::{Puzzle, Rule};

    fn playing_state() -> RoundState<i64> {
        let mut state = RoundState::new(3);
        state.begin_round(Puzzle::new(Rule::Geometric { start: 1, ratio: 2 }, [1, 2, 4, 8, 16], 2));
        state
    }

    #[test]
    fn test_playing_view() {
        let view = View::of(&playing_state(), None, None);
        assert_eq!(view.phase, Phase::Playing);
        let prompt = view.prompt.clone().unwrap();
        assert_eq!(prompt.text, "1 → 2 → ? → 8 → 16");
        assert_eq!(prompt.to_lines(), vec!["1 → 2 → ? → 8 → 16".to_string()]);
        assert_eq!(prompt.heading, None);
        assert_eq!(prompt.hint, None);
        assert!(!view.can_continue);
        assert!(view.victory.is_none());
        assert_eq!(view.scoreboard(), "Score: 0 / 3");
    }

    #[test]
    fn test_finished_view() {
        let mut state = playing_state();
        state.phase = Phase::Finished;
        state.feedback = Some(Feedback {
            correct: true,
            guess: 4,
            answer: 4,
            rule_description: "multiplies by 2 each step".into(),
            revealed: "1 → 2 → 4 → 8 → 16".into(),
        });
        state.score = 1;

        let view = View::of(&state, None, None);
        assert!(view.prompt.is_none());
        assert!(view.can_continue);
        assert_eq!(view.feedback_correct, Some(true));
        assert!(view.feedback.unwrap().starts_with("Correct!"));

        let view = View::of(&state, Some(0), None);
        assert!(!view.can_continue);
    }

    #[test]
    fn test_victory_view() {
        let mut state = playing_state();
        state.phase = Phase::Victory;
        state.score = 3;

        let view = View::of(&state, None, Some("the key is under the mat"));
        let victory = view.victory.unwrap();
        assert_eq!(victory.score, 3);
        assert_eq!(victory.target_score, 3);
        assert!(victory.message.starts_with("Congratulations!"));
        assert_eq!(victory.hint.as_deref(), Some("the key is under the mat"));
    }

    #[test]
    fn test_labelled_prompt_lines() {
        let prompt = Prompt {
            cells: vec!["200".into(), "?".into()],
            labels: vec!["example 1".into(), "this order".into()],
            text: "200 → ?".into(),
            heading: Some("Step 1 / 3".into()),
            hint: None,
        };
        assert_eq!(prompt.to_lines(), vec!["example 1: 200", "this order: ?"]);
    }
}
