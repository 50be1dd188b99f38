//! Kinematic stand-in for the robot, used to drive the controllers headless.

use roomba::Agent;

/// Unicycle-model robot in an axis-aligned rectangular room.
///
/// The room spans `[0, width] x [0, height]`. A step that would push the
/// robot's body through a wall is cancelled and the bumper latches until the
/// next step that moves freely.
#[derive(Clone, Debug)]
pub struct KinematicAgent {
    width: f64,
    height: f64,
    radius: f64,
    x: f64,
    y: f64,
    heading: f64,
    linear: f64,
    angular: f64,
    bumper: bool,
    distance: f64,
    collisions: u64,
}

impl KinematicAgent {
    /// Places a robot of `radius` at the centre of the room, facing +x.
    pub fn new(width: f64, height: f64, radius: f64) -> Self {
        Self {
            width,
            height,
            radius,
            x: width / 2.0,
            y: height / 2.0,
            heading: 0.0,
            linear: 0.0,
            angular: 0.0,
            bumper: false,
            distance: 0.0,
            collisions: 0,
        }
    }

    /// Integrates the last velocity command over `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        self.heading = wrap_angle(self.heading + self.angular * dt);
        let x = self.x + self.linear * self.heading.cos() * dt;
        let y = self.y + self.linear * self.heading.sin() * dt;

        if self.inside(x, y) {
            self.distance += (x - self.x).hypot(y - self.y);
            self.x = x;
            self.y = y;
            self.bumper = false;
        } else {
            if !self.bumper {
                self.collisions += 1;
            }
            self.bumper = true;
        }
    }

    fn inside(&self, x: f64, y: f64) -> bool {
        x >= self.radius
            && x <= self.width - self.radius
            && y >= self.radius
            && y <= self.height - self.radius
    }

    /// Position and heading (x, y, θ).
    pub fn pose(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.heading)
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of distinct wall contacts.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }
}

impl Agent for KinematicAgent {
    fn set_velocity(&mut self, linear: f64, angular: f64) {
        self.linear = linear;
        self.angular = angular;
    }

    fn bumper_state(&self) -> bool {
        self.bumper
    }
}

fn wrap_angle(angle: f64) -> f64 {
    use std::f64::consts::PI;
    (angle + PI).rem_euclid(2.0 * PI) - PI
}
