//! Interface to the robot being controlled.

/// Actuation and sensing surface of a cleaning robot.
///
/// Controllers borrow the agent for the duration of a single tick and never
/// retain it.
pub trait Agent {
    /// Commands the instantaneous linear (m/s) and angular (rad/s) speed.
    fn set_velocity(&mut self, linear: f64, angular: f64);

    /// Returns `true` while the bumper reports a collision.
    fn bumper_state(&self) -> bool;
}
