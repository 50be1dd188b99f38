//! Scriptable agent for unit tests.

use crate::Agent;

/// Records every velocity command and reports a settable bumper state.
#[derive(Debug, Default)]
pub(crate) struct MockAgent {
    pub bumper: bool,
    pub commands: Vec<(f64, f64)>,
}

impl MockAgent {
    pub fn last_command(&self) -> Option<(f64, f64)> {
        self.commands.last().copied()
    }
}

impl Agent for MockAgent {
    fn set_velocity(&mut self, linear: f64, angular: f64) {
        self.commands.push((linear, angular));
    }

    fn bumper_state(&self) -> bool {
        self.bumper
    }
}
