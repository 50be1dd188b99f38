//! The machine driving the current state.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::State;

/// Default number of transitions kept in the history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Record of a state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionRecord {
    /// Tick (1-based) during which the transition happened.
    pub tick: u64,
    /// Name of the state that was replaced.
    pub from: String,
    /// Name of the state that took over.
    pub to: String,
}

/// A finite state machine holding exactly one active state.
///
/// Each [`update`](Self::update) first lets the current state check its
/// transition, then executes whichever state is current afterwards. A state
/// entered by a transition therefore executes in the same tick.
pub struct FiniteStateMachine<C: ?Sized> {
    state: Box<dyn State<C>>,
    ticks: u64,
    history: VecDeque<TransitionRecord>,
    history_capacity: usize,
}

impl<C: ?Sized> FiniteStateMachine<C> {
    pub fn new(initial: Box<dyn State<C>>) -> Self {
        Self::with_history_capacity(initial, DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates a machine keeping at most `capacity` transition records.
    pub fn with_history_capacity(initial: Box<dyn State<C>>, capacity: usize) -> Self {
        Self {
            state: initial,
            ticks: 0,
            history: VecDeque::with_capacity(capacity),
            history_capacity: capacity,
        }
    }

    /// Ticks the machine once.
    pub fn update(&mut self, ctx: &mut C) {
        self.ticks += 1;

        if let Some(next) = self.state.check_transition(ctx) {
            self.change_state(next);
        }

        trace!(tick = self.ticks, state = self.state.name(), "executing state");
        self.state.execute(ctx);
    }

    /// Replaces the current state, recording the transition.
    pub fn change_state(&mut self, next: Box<dyn State<C>>) {
        let record = TransitionRecord {
            tick: self.ticks,
            from: self.state.name().to_owned(),
            to: next.name().to_owned(),
        };
        debug!(tick = record.tick, from = %record.from, to = %record.to, "state transition");

        self.state = next;
        if self.history_capacity == 0 {
            return;
        }
        if self.history.len() == self.history_capacity {
            self.history.pop_front();
        }
        self.history.push_back(record);
    }

    pub fn state(&self) -> &dyn State<C> {
        self.state.as_ref()
    }

    pub fn state_name(&self) -> &str {
        self.state.name()
    }

    /// Number of `update` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Most recent transitions, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.history.iter()
    }
}
