//! Leaf behaviors of the cleaning policy.
//!
//! Every leaf follows the same pattern: `enter` zeroes a tick counter and
//! issues the initial velocity command, `execute` counts the tick and
//! compares the elapsed time against the leaf's duration (strictly greater
//! than, so a duration of `d` seconds runs for `d / sample_time` ticks before
//! succeeding on the next one).

use std::f64::consts::PI;

use behavior_tree::{Behavior, Status};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::trace;

use crate::{Agent, RoombaConfig};

/// Boxed node operating on agents of type `A`.
pub type Node<A> = Box<dyn Behavior<A>>;

/// Drives straight ahead until the forward time elapses.
///
/// Fails as soon as the bumper reports a collision; the collision check
/// takes priority over the time check.
pub struct MoveForward {
    config: RoombaConfig,
    execution_count: u32,
}

impl MoveForward {
    pub fn new(config: RoombaConfig) -> Self {
        Self {
            config,
            execution_count: 0,
        }
    }

    pub fn execution_count(&self) -> u32 {
        self.execution_count
    }
}

impl<A: Agent + ?Sized> Behavior<A> for MoveForward {
    fn name(&self) -> &str {
        "MoveForward"
    }

    fn children(&self) -> &[Node<A>] {
        &[]
    }

    fn running_child(&self) -> Option<usize> {
        None
    }

    fn enter(&mut self, agent: &mut A) {
        self.execution_count = 0;
        agent.set_velocity(self.config.forward_speed, 0.0);
    }

    fn execute(&mut self, agent: &mut A) -> Status {
        self.execution_count += 1;
        if agent.bumper_state() {
            trace!(tick = self.execution_count, "bumped while moving forward");
            Status::Failure
        } else if self.config.elapsed(self.execution_count) > self.config.move_forward_time {
            Status::Success
        } else {
            Status::Running
        }
    }
}

/// Drives an outward spiral whose radius grows every running tick.
pub struct MoveInSpiral {
    config: RoombaConfig,
    execution_count: u32,
    spiral_radius: f64,
}

impl MoveInSpiral {
    pub fn new(config: RoombaConfig) -> Self {
        Self {
            config,
            execution_count: 0,
            spiral_radius: config.initial_radius_spiral,
        }
    }

    pub fn execution_count(&self) -> u32 {
        self.execution_count
    }

    pub fn spiral_radius(&self) -> f64 {
        self.spiral_radius
    }

    fn command<A: Agent + ?Sized>(&self, agent: &mut A) {
        let speed = self.config.forward_speed;
        agent.set_velocity(speed, speed / self.spiral_radius);
    }
}

impl<A: Agent + ?Sized> Behavior<A> for MoveInSpiral {
    fn name(&self) -> &str {
        "MoveInSpiral"
    }

    fn children(&self) -> &[Node<A>] {
        &[]
    }

    fn running_child(&self) -> Option<usize> {
        None
    }

    fn enter(&mut self, agent: &mut A) {
        self.execution_count = 0;
        self.spiral_radius = self.config.initial_radius_spiral;
        self.command(agent);
    }

    fn execute(&mut self, agent: &mut A) -> Status {
        self.execution_count += 1;
        if agent.bumper_state() {
            trace!(tick = self.execution_count, "bumped while spiralling");
            return Status::Failure;
        }
        if self.config.elapsed(self.execution_count) > self.config.move_in_spiral_time {
            return Status::Success;
        }

        self.spiral_radius += self.config.spiral_factor * self.config.sample_time;
        self.command(agent);
        Status::Running
    }
}

/// Backs up for a fixed time. Ignores the bumper.
pub struct GoBack {
    config: RoombaConfig,
    execution_time: u32,
}

impl GoBack {
    pub fn new(config: RoombaConfig) -> Self {
        Self {
            config,
            execution_time: 0,
        }
    }

    /// Ticks executed since the last `enter`.
    pub fn execution_time(&self) -> u32 {
        self.execution_time
    }
}

impl<A: Agent + ?Sized> Behavior<A> for GoBack {
    fn name(&self) -> &str {
        "GoBack"
    }

    fn children(&self) -> &[Node<A>] {
        &[]
    }

    fn running_child(&self) -> Option<usize> {
        None
    }

    fn enter(&mut self, agent: &mut A) {
        self.execution_time = 0;
        agent.set_velocity(self.config.backward_speed, 0.0);
    }

    fn execute(&mut self, _agent: &mut A) -> Status {
        self.execution_time += 1;
        if self.config.elapsed(self.execution_time) > self.config.go_back_time {
            Status::Success
        } else {
            Status::Running
        }
    }
}

/// Turns in place for a random amount of time.
///
/// The turn direction is always the sign of the configured angular speed;
/// the angle sampled in [-π, π] only sets how long the turn lasts (see
/// [`RotationTiming`](crate::RotationTiming)).
pub struct Rotate {
    config: RoombaConfig,
    rng: StdRng,
    execution_time: u32,
    rotate_angle: f64,
}

impl Rotate {
    pub fn new(config: RoombaConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            execution_time: 0,
            rotate_angle: 0.0,
        }
    }

    /// Ticks executed since the last `enter`.
    pub fn execution_time(&self) -> u32 {
        self.execution_time
    }

    /// Angle sampled by the last `enter`.
    pub fn rotate_angle(&self) -> f64 {
        self.rotate_angle
    }

    /// Duration of the current rotation.
    pub fn duration(&self) -> f64 {
        self.config.rotation_duration(self.rotate_angle)
    }
}

impl<A: Agent + ?Sized> Behavior<A> for Rotate {
    fn name(&self) -> &str {
        "Rotate"
    }

    fn children(&self) -> &[Node<A>] {
        &[]
    }

    fn running_child(&self) -> Option<usize> {
        None
    }

    fn enter(&mut self, agent: &mut A) {
        self.execution_time = 0;
        self.rotate_angle = self.rng.gen_range(-PI..=PI);
        trace!(angle = self.rotate_angle, duration = self.duration(), "rotation sampled");
        agent.set_velocity(0.0, self.config.angular_speed);
    }

    fn execute(&mut self, _agent: &mut A) -> Status {
        self.execution_time += 1;
        if self.config.elapsed(self.execution_time) > self.duration() {
            Status::Success
        } else {
            Status::Running
        }
    }
}
