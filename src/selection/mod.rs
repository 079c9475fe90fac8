//! Card selection: pending groups, match evaluation, state transitions.

pub mod machine;
pub mod outcome;

pub use machine::{PendingSelection, SelectionStateMachine};
pub use outcome::{GroupFaces, IgnoreReason, SelectionOutcome};
