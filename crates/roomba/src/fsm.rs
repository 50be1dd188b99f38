//! The cleaning policy as a finite state machine.

use rand::rngs::StdRng;
use state_machine::{FiniteStateMachine, TransitionRecord};

use crate::states::{Carry, MoveForwardState};
use crate::{Agent, RoombaConfig, rng_from_seed};

/// Finite state machine implementation of the cleaning policy for agents
/// of type `A`.
///
/// Starts in `MoveForward`.
pub struct RoombaStateMachine<A: ?Sized> {
    fsm: FiniteStateMachine<A>,
}

impl<A: Agent + ?Sized + 'static> RoombaStateMachine<A> {
    /// Builds the machine, seeding the rotation sampler from `config.seed`.
    ///
    /// `config` must pass [`RoombaConfig::validate`]; a zero `angular_speed`
    /// makes rotations last forever. [`ControllerKind::build`](crate::ControllerKind::build)
    /// performs that check.
    pub fn new(config: RoombaConfig) -> Self {
        Self::with_rng(config, rng_from_seed(config.seed))
    }

    /// Builds the machine with an explicit rotation sampler.
    pub fn with_rng(config: RoombaConfig, rng: StdRng) -> Self {
        let initial = MoveForwardState::new(Carry::new(config, rng));
        Self {
            fsm: FiniteStateMachine::new(Box::new(initial)),
        }
    }

    /// Ticks the machine once.
    pub fn update(&mut self, agent: &mut A) {
        self.fsm.update(agent);
    }

    pub fn state_name(&self) -> &str {
        self.fsm.state_name()
    }

    pub fn history(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.fsm.history()
    }

    pub fn machine(&self) -> &FiniteStateMachine<A> {
        &self.fsm
    }
}
