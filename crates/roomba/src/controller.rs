//! Common driver interface over both policy implementations.

use std::fmt;
use std::str::FromStr;

use crate::{Agent, ConfigError, RoombaBehaviorTree, RoombaConfig, RoombaStateMachine};

/// A cleaning policy ticked once per sample period against agents of type `A`.
pub trait Controller<A: ?Sized>: Send + Sync {
    /// Runs one tick against `agent`.
    fn update(&mut self, agent: &mut A);

    /// Short human-readable description of what the controller is doing.
    fn describe(&self) -> String;
}

impl<A: Agent + ?Sized + 'static> Controller<A> for RoombaBehaviorTree<A> {
    fn update(&mut self, agent: &mut A) {
        RoombaBehaviorTree::update(self, agent);
    }

    fn describe(&self) -> String {
        self.active_path().join(" > ")
    }
}

impl<A: Agent + ?Sized + 'static> Controller<A> for RoombaStateMachine<A> {
    fn update(&mut self, agent: &mut A) {
        RoombaStateMachine::update(self, agent);
    }

    fn describe(&self) -> String {
        self.state_name().to_owned()
    }
}

/// Which implementation of the policy to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerKind {
    #[default]
    BehaviorTree,
    StateMachine,
}

impl ControllerKind {
    /// Validates `config` and builds the selected policy.
    pub fn build<A: Agent + ?Sized + 'static>(
        self,
        config: RoombaConfig,
    ) -> Result<Box<dyn Controller<A>>, ConfigError> {
        config.validate()?;
        let controller: Box<dyn Controller<A>> = match self {
            ControllerKind::BehaviorTree => Box::new(RoombaBehaviorTree::new(config)),
            ControllerKind::StateMachine => Box::new(RoombaStateMachine::new(config)),
        };
        Ok(controller)
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerKind::BehaviorTree => f.write_str("behavior_tree"),
            ControllerKind::StateMachine => f.write_str("state_machine"),
        }
    }
}

impl FromStr for ControllerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" | "bt" | "behavior_tree" => Ok(ControllerKind::BehaviorTree),
            "fsm" | "state_machine" => Ok(ControllerKind::StateMachine),
            other => Err(format!("unknown controller `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockAgent;

    #[test]
    fn both_controllers_start_moving_forward() {
        let config = RoombaConfig::default().with_seed(9);
        for kind in [ControllerKind::BehaviorTree, ControllerKind::StateMachine] {
            let mut controller = kind.build::<MockAgent>(config).unwrap();
            let mut agent = MockAgent::default();
            controller.update(&mut agent);
            assert_eq!(agent.last_command(), Some((config.forward_speed, 0.0)));
        }
    }

    #[test]
    fn describe_names_current_activity() {
        let config = RoombaConfig::default().with_seed(9);
        let mut agent = MockAgent::default();

        let mut tree = ControllerKind::BehaviorTree.build::<MockAgent>(config).unwrap();
        tree.update(&mut agent);
        assert_eq!(tree.describe(), "Collide > Clean > MoveForward");

        let mut fsm = ControllerKind::StateMachine.build::<MockAgent>(config).unwrap();
        fsm.update(&mut agent);
        assert_eq!(fsm.describe(), "MoveForward");
    }

    #[test]
    fn build_rejects_invalid_config() {
        let config = RoombaConfig {
            angular_speed: 0.0,
            ..RoombaConfig::default()
        };
        for kind in [ControllerKind::BehaviorTree, ControllerKind::StateMachine] {
            let result = kind.build::<MockAgent>(config);
            assert_eq!(result.err(), Some(ConfigError::ZeroAngularSpeed));
        }
    }

    #[test]
    fn kind_parses_aliases() {
        assert_eq!("fsm".parse::<ControllerKind>(), Ok(ControllerKind::StateMachine));
        assert_eq!("Tree".parse::<ControllerKind>(), Ok(ControllerKind::BehaviorTree));
        assert!("pid".parse::<ControllerKind>().is_err());
    }
}
