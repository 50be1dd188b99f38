//! The cleaning policy as a behavior tree.
//!
//! ```text
//! Selector "Collide"
//! ├── Sequence "Clean"   [MoveForward, MoveInSpiral]
//! └── Sequence "Rotate"  [GoBack, Rotate]
//! ```
//!
//! The robot cleans (forward, then spiral) until a collision makes one of the
//! cleaning steps fail; the selector then falls through to the recovery
//! sequence, which backs up and turns by a random amount.

use behavior_tree::builder::{selector, sequence};
use behavior_tree::{BehaviorTree, Status};
use rand::rngs::StdRng;

use crate::nodes::{GoBack, MoveForward, MoveInSpiral, Node, Rotate};
use crate::{Agent, RoombaConfig, rng_from_seed};

/// Behavior tree implementation of the cleaning policy for agents of type `A`.
pub struct RoombaBehaviorTree<A: ?Sized> {
    tree: BehaviorTree<A>,
}

impl<A: Agent + ?Sized + 'static> RoombaBehaviorTree<A> {
    /// Builds the tree, seeding the rotation sampler from `config.seed`.
    ///
    /// `config` must pass [`RoombaConfig::validate`]; a zero `angular_speed`
    /// makes rotations last forever. [`ControllerKind::build`](crate::ControllerKind::build)
    /// performs that check.
    pub fn new(config: RoombaConfig) -> Self {
        Self::with_rng(config, rng_from_seed(config.seed))
    }

    /// Builds the tree with an explicit rotation sampler.
    pub fn with_rng(config: RoombaConfig, rng: StdRng) -> Self {
        let clean: Vec<Node<A>> = vec![
            Box::new(MoveForward::new(config)),
            Box::new(MoveInSpiral::new(config)),
        ];
        let rotate: Vec<Node<A>> = vec![Box::new(GoBack::new(config)), Box::new(Rotate::new(config, rng))];
        let root = selector("Collide", vec![sequence("Clean", clean), sequence("Rotate", rotate)]);

        Self {
            tree: BehaviorTree::new(root),
        }
    }

    /// Ticks the tree once.
    pub fn update(&mut self, agent: &mut A) -> Status {
        self.tree.update(agent)
    }

    /// Names along the running branch, e.g. `["Collide", "Rotate", "GoBack"]`.
    pub fn active_path(&self) -> Vec<&str> {
        self.tree.active_path()
    }

    pub fn tree(&self) -> &BehaviorTree<A> {
        &self.tree
    }
}
