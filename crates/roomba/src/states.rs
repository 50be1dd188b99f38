//! States of the cleaning policy's finite state machine.
//!
//! These mirror the behavior tree leaves, but each state decides its own
//! successor:
//!
//! ```text
//! MoveForward --bump--> GoBack --time--> Rotate --time--> MoveForward
//!      |                  ^                                    ^
//!      time               bump                                 |
//!      v                  |                                    |
//! MoveInSpiral -----------+----------------time----------------+
//! ```

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use state_machine::State;
use tracing::trace;

use crate::{Agent, RoombaConfig};

/// Boxed state operating on agents of type `A`.
pub type BoxedState<A> = Box<dyn State<A>>;

/// Parameters and sampler carried from each state to its successor.
///
/// On a transition the successor continues the current sampler stream, so a
/// seeded machine stays reproducible. The predecessor is reseeded from that
/// stream, so a state asked for a successor twice never hands out the same
/// stream twice.
#[derive(Clone, Debug)]
pub struct Carry {
    pub config: RoombaConfig,
    rng: StdRng,
}

impl Carry {
    pub fn new(config: RoombaConfig, rng: StdRng) -> Self {
        Self { config, rng }
    }

    fn handoff(&mut self) -> Self {
        let next = self.clone();
        self.rng = StdRng::seed_from_u64(self.rng.r#gen());
        next
    }

    #[inline]
    fn elapsed_exceeds(&self, ticks: u32, duration: f64) -> bool {
        self.config.elapsed(ticks) > duration
    }
}

pub struct MoveForwardState {
    carry: Carry,
    execution_count: u32,
}

impl MoveForwardState {
    pub fn new(carry: Carry) -> Self {
        Self {
            carry,
            execution_count: 0,
        }
    }
}

impl<A: Agent + ?Sized> State<A> for MoveForwardState {
    fn name(&self) -> &str {
        "MoveForward"
    }

    fn check_transition(&mut self, agent: &mut A) -> Option<BoxedState<A>> {
        if agent.bumper_state() {
            Some(Box::new(GoBackState::new(self.carry.handoff())))
        } else if self
            .carry
            .elapsed_exceeds(self.execution_count, self.carry.config.move_forward_time)
        {
            Some(Box::new(MoveInSpiralState::new(self.carry.handoff())))
        } else {
            None
        }
    }

    fn execute(&mut self, agent: &mut A) {
        self.execution_count += 1;
        agent.set_velocity(self.carry.config.forward_speed, 0.0);
    }
}

pub struct MoveInSpiralState {
    carry: Carry,
    execution_count: u32,
    spiral_radius: f64,
}

impl MoveInSpiralState {
    pub fn new(carry: Carry) -> Self {
        let spiral_radius = carry.config.initial_radius_spiral;
        Self {
            carry,
            execution_count: 0,
            spiral_radius,
        }
    }

    pub fn spiral_radius(&self) -> f64 {
        self.spiral_radius
    }
}

impl<A: Agent + ?Sized> State<A> for MoveInSpiralState {
    fn name(&self) -> &str {
        "MoveInSpiral"
    }

    fn check_transition(&mut self, agent: &mut A) -> Option<BoxedState<A>> {
        if agent.bumper_state() {
            Some(Box::new(GoBackState::new(self.carry.handoff())))
        } else if self
            .carry
            .elapsed_exceeds(self.execution_count, self.carry.config.move_in_spiral_time)
        {
            Some(Box::new(MoveForwardState::new(self.carry.handoff())))
        } else {
            None
        }
    }

    fn execute(&mut self, agent: &mut A) {
        let config = &self.carry.config;
        self.execution_count += 1;
        self.spiral_radius += config.spiral_factor * config.sample_time;
        agent.set_velocity(config.forward_speed, config.forward_speed / self.spiral_radius);
    }
}

pub struct GoBackState {
    carry: Carry,
    execution_count: u32,
}

impl GoBackState {
    pub fn new(carry: Carry) -> Self {
        Self {
            carry,
            execution_count: 0,
        }
    }
}

impl<A: Agent + ?Sized> State<A> for GoBackState {
    fn name(&self) -> &str {
        "GoBack"
    }

    fn check_transition(&mut self, _agent: &mut A) -> Option<BoxedState<A>> {
        self.carry
            .elapsed_exceeds(self.execution_count, self.carry.config.go_back_time)
            .then(|| Box::new(RotateState::new(self.carry.handoff())) as BoxedState<A>)
    }

    fn execute(&mut self, agent: &mut A) {
        self.execution_count += 1;
        agent.set_velocity(self.carry.config.backward_speed, 0.0);
    }
}

/// Turns in place; the rotation angle is sampled on construction.
pub struct RotateState {
    carry: Carry,
    execution_count: u32,
    rotate_angle: f64,
}

impl RotateState {
    pub fn new(mut carry: Carry) -> Self {
        let rotate_angle = carry.rng.gen_range(-PI..=PI);
        trace!(angle = rotate_angle, "rotation sampled");
        Self {
            carry,
            execution_count: 0,
            rotate_angle,
        }
    }

    pub fn rotate_angle(&self) -> f64 {
        self.rotate_angle
    }

    pub fn duration(&self) -> f64 {
        self.carry.config.rotation_duration(self.rotate_angle)
    }
}

impl<A: Agent + ?Sized> State<A> for RotateState {
    fn name(&self) -> &str {
        "Rotate"
    }

    fn check_transition(&mut self, _agent: &mut A) -> Option<BoxedState<A>> {
        self.carry
            .elapsed_exceeds(self.execution_count, self.duration())
            .then(|| Box::new(MoveForwardState::new(self.carry.handoff())) as BoxedState<A>)
    }

    fn execute(&mut self, agent: &mut A) {
        self.execution_count += 1;
        agent.set_velocity(0.0, self.carry.config.angular_speed);
    }
}
