//! Sessions: the round state machine and its presentation contract.

mod machine;
mod view;

pub use machine::{initialize, transition, Session};
pub use view::{Presenter, Prompt, RecordingPresenter, VictoryPayload, View};
