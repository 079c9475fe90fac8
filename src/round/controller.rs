//! Round orchestration.
//!
//! `RoundController` owns the single live `RoundState` and is the only thing
//! that mutates it. Hosts drive it with three kinds of input:
//!
//! - `start_round` / `start_default_round` when the player asks for a new game
//! - `select` once per click on a card
//! - `tick` once per second, and `advance` as wall time passes so the peek
//!   and reject delays can run
//!
//! Everything the presentation layer needs to render is published to
//! subscribed observers as `RoundEvent`s.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::event::{RoundEvent, RoundObserver};
use super::schedule::{ScheduledAction, ScheduledTask, Scheduler};
use super::state::{Generation, RoundState};
use crate::core::{CardPosition, Elapsed, EngineConfig, GameRng};
use crate::grid::{assign_for, configure, Board, ConfigError, GridConfig};
use crate::selection::{IgnoreReason, SelectionOutcome};

/// Drives rounds of the game.
pub struct RoundController {
    config: EngineConfig,
    rng: GameRng,
    generation: Generation,
    round: Option<RoundState>,
    scheduler: Scheduler,
    observers: Vec<Box<dyn RoundObserver>>,
}

impl RoundController {
    /// Create a controller whose boards are derived from `seed`.
    ///
    /// The same seed deals the same board for the same round generation.
    #[must_use]
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
            generation: Generation::default(),
            round: None,
            scheduler: Scheduler::new(),
            observers: Vec::new(),
        }
    }

    /// Create a controller seeded from the operating system.
    #[must_use]
    pub fn from_entropy(config: EngineConfig) -> Self {
        Self::new(config, GameRng::from_entropy().seed())
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register an observer for all future events.
    pub fn subscribe(&mut self, observer: impl RoundObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The live round, if one has been started.
    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// The live round's board.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.round.as_ref().map(|round| &round.board)
    }

    /// Generation of the live round (zero before the first round).
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether the live round has been completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round.as_ref().is_some_and(|round| round.completed)
    }

    /// Seconds counted in the live round.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.round.as_ref().map_or(0, |round| round.timer.current())
    }

    /// Scheduled tasks that have not come due.
    #[must_use]
    pub fn pending_tasks(&self) -> &[ScheduledTask] {
        self.scheduler.pending()
    }

    /// Current logical time of the scheduler.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Start a round on a `width` × `height` grid.
    ///
    /// Validation happens before anything changes: on error the previous
    /// round (board, timer, generation) is left exactly as it was.
    #[instrument(skip(self))]
    pub fn start_round(&mut self, width: u32, height: u32) -> Result<GridConfig, ConfigError> {
        let grid = match configure(width, height, self.config.match_group_size) {
            Ok(grid) => grid,
            Err(err) => {
                warn!(%err, "round start rejected");
                return Err(err);
            }
        };

        let generation = self.generation.next();
        let mut deal_rng = self.rng.for_context(&format!("round-{}", generation.0));
        let pictures = assign_for(&grid, &mut deal_rng);

        let mut round = RoundState::new(generation, grid.clone(), Board::deal(&pictures));
        round.timer.reset();
        round.timer.start();
        let faces = round.board.faces();

        self.generation = generation;
        self.round = Some(round);
        let dropped = self.scheduler.retain_generation(generation);
        if dropped > 0 {
            debug!(dropped, "discarded tasks from previous round");
        }
        self.scheduler
            .schedule(generation, self.config.peek_delay, ScheduledAction::ConcealPeek);

        info!(%generation, width, height, cells = grid.cell_count(), "round started");

        self.publish(RoundEvent::RoundStarted {
            generation,
            config: grid.clone(),
        });
        self.publish(RoundEvent::PeekStarted { faces });

        Ok(grid)
    }

    /// Start a round with the configured default dimensions.
    pub fn start_default_round(&mut self) -> Result<GridConfig, ConfigError> {
        self.start_round(self.config.default_width, self.config.default_height)
    }

    /// Select the card at `position`.
    #[instrument(skip(self))]
    pub fn select(&mut self, position: CardPosition) -> SelectionOutcome {
        let Some(round) = self.round.as_mut() else {
            return SelectionOutcome::Ignored(IgnoreReason::NoActiveRound);
        };

        let outcome = round.selection.select(&mut round.board, position);
        let mut events = Vec::new();
        let mut rejected = false;

        match &outcome {
            SelectionOutcome::Ignored(reason) => {
                debug!(?reason, "selection ignored");
            }
            SelectionOutcome::Pending(face) => {
                events.push(RoundEvent::CardRevealed(*face));
            }
            SelectionOutcome::GroupMatched(group) => {
                if let Some(last) = group.last() {
                    events.push(RoundEvent::CardRevealed(*last));
                }
                if let Some(first) = group.first() {
                    events.push(RoundEvent::GroupMatched {
                        picture: first.picture,
                        positions: group.iter().map(|face| face.position).collect(),
                    });
                }
                round.matched_count += group.len();

                if round.all_matched() && !round.completed {
                    round.completed = true;
                    let elapsed = round.timer.stop();
                    info!(generation = %round.generation, %elapsed, "round complete");
                    events.push(RoundEvent::RoundComplete {
                        generation: round.generation,
                        elapsed,
                    });
                }
            }
            SelectionOutcome::GroupRejected(group) => {
                if let Some(last) = group.last() {
                    events.push(RoundEvent::CardRevealed(*last));
                }
                events.push(RoundEvent::GroupRejected { faces: group.to_vec() });
                rejected = true;
            }
        }

        let generation = round.generation;
        if rejected {
            self.scheduler
                .schedule(generation, self.config.reject_delay, ScheduledAction::ConcealRejected);
        }

        for event in events {
            self.publish(event);
        }

        outcome
    }

    /// Count one external second.
    ///
    /// Returns the new elapsed time, or `None` when no timer is running.
    pub fn tick(&mut self) -> Option<Elapsed> {
        let elapsed = self.round.as_mut()?.timer.tick()?;
        self.publish(RoundEvent::TimerTick {
            elapsed,
            display: elapsed.to_string(),
        });
        Some(elapsed)
    }

    /// Advance logical time and run every task that has come due.
    pub fn advance(&mut self, by: Duration) {
        for task in self.scheduler.advance(by) {
            self.run_task(task);
        }
    }

    /// Run one scheduled task.
    ///
    /// Returns `false` when the task belongs to a round that has since been
    /// replaced, or when there was nothing left for it to do.
    #[instrument(skip(self))]
    pub fn run_task(&mut self, task: ScheduledTask) -> bool {
        let Some(round) = self
            .round
            .as_mut()
            .filter(|round| round.generation == task.generation)
        else {
            debug!(live = %self.generation, "dropping stale task");
            return false;
        };

        let event = match task.action {
            ScheduledAction::ConcealPeek => {
                let positions = round.board.positions();
                debug!(cards = positions.len(), "peek ended");
                RoundEvent::PeekEnded { positions }
            }
            ScheduledAction::ConcealRejected => {
                let positions = round.selection.conceal_rejected(&mut round.board);
                if positions.is_empty() {
                    return false;
                }
                debug!(cards = positions.len(), "rejected group concealed");
                RoundEvent::CardsConcealed { positions }
            }
        };

        self.publish(event);
        true
    }

    fn publish(&mut self, event: RoundEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::EventRecorder;

    fn controller() -> RoundController {
        RoundController::new(EngineConfig::default(), 42)
    }

    #[test]
    fn test_select_before_round() {
        let mut controller = controller();
        assert_eq!(
            controller.select(CardPosition::new(0)),
            SelectionOutcome::Ignored(IgnoreReason::NoActiveRound)
        );
        assert_eq!(controller.tick(), None);
        assert!(!controller.is_complete());
    }

    #[test]
    fn test_start_round_builds_hidden_board() {
        let mut controller = controller();
        let grid = controller.start_round(4, 3).unwrap();

        let round = controller.round().unwrap();
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(round.board.len(), 12);
        assert_eq!(round.hidden_count(), 12);
        assert_eq!(round.matched_count, 0);
        assert!(round.timer.is_running());
        assert_eq!(controller.generation(), Generation(1));
    }

    #[test]
    fn test_peek_scheduled() {
        let mut controller = controller();
        controller.start_round(4, 3).unwrap();

        let tasks = controller.pending_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].action, ScheduledAction::ConcealPeek);
        assert_eq!(tasks[0].due, Duration::from_millis(1200));
    }

    #[test]
    fn test_failed_start_keeps_previous_round() {
        let mut controller = controller();
        controller.start_round(4, 3).unwrap();
        controller.tick();
        let before = controller.round().unwrap().clone();

        let err = controller.start_round(3, 3).unwrap_err();

        assert_eq!(err, ConfigError::IndivisibleGrid { cell_count: 9, group_size: 2 });
        assert_eq!(controller.round().unwrap(), &before);
        assert_eq!(controller.generation(), Generation(1));
    }

    #[test]
    fn test_same_seed_same_board() {
        let mut a = controller();
        let mut b = controller();
        a.start_round(6, 4).unwrap();
        b.start_round(6, 4).unwrap();

        assert_eq!(a.board().unwrap().faces(), b.board().unwrap().faces());
    }

    #[test]
    fn test_stale_task_dropped() {
        let mut controller = controller();
        controller.start_round(4, 3).unwrap();
        let stale = controller.pending_tasks()[0];
        controller.start_round(4, 3).unwrap();

        assert!(!controller.run_task(stale));
    }

    #[test]
    fn test_restart_discards_previous_round_tasks() {
        let mut controller = controller();
        for _ in 0..50 {
            controller.start_round(4, 3).unwrap();
        }

        let tasks = controller.pending_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].generation, Generation(50));
        assert_eq!(tasks[0].action, ScheduledAction::ConcealPeek);
    }

    #[test]
    fn test_clock_advances_with_host() {
        let mut controller = controller();
        assert_eq!(controller.now(), Duration::ZERO);

        controller.start_round(4, 3).unwrap();
        controller.advance(Duration::from_millis(700));
        controller.advance(Duration::from_millis(600));

        assert_eq!(controller.now(), Duration::from_millis(1300));
        assert!(controller.pending_tasks().is_empty());

        // A new round's peek is due relative to the current clock.
        controller.start_round(4, 3).unwrap();
        assert_eq!(controller.pending_tasks()[0].due, Duration::from_millis(2500));
    }

    #[test]
    fn test_tick_publishes_display() {
        let mut controller = controller();
        let recorder = EventRecorder::new();
        controller.subscribe(recorder.clone());
        controller.start_round(2, 2).unwrap();

        controller.tick();
        controller.tick();

        let ticks: Vec<_> = recorder
            .events()
            .into_iter()
            .filter_map(|event| match event {
                RoundEvent::TimerTick { display, .. } => Some(display),
                _ => None,
            })
            .collect();
        assert_eq!(ticks, vec!["00:00:01".to_string(), "00:00:02".to_string()]);
        assert_eq!(controller.elapsed_seconds(), 2);
    }
}
