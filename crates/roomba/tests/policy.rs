use behavior_tree::Status;
use rand::SeedableRng;
use rand::rngs::StdRng;
use roomba::{
    Agent, Controller, ControllerKind, RoombaBehaviorTree, RoombaConfig, RoombaStateMachine,
    RotationTiming,
};

/// Agent whose bumper follows a per-tick script; records every command.
#[derive(Default)]
struct ScriptedAgent {
    bumps: Vec<bool>,
    tick: usize,
    commands: Vec<(f64, f64)>,
}

impl ScriptedAgent {
    fn bumping_on(ticks: &[usize], len: usize) -> Self {
        let mut bumps = vec![false; len];
        for &t in ticks {
            bumps[t - 1] = true;
        }
        Self {
            bumps,
            ..Self::default()
        }
    }

    /// Advances the script; call once before each controller tick.
    fn next_tick(&mut self) {
        self.tick += 1;
    }

    fn last_command(&self) -> (f64, f64) {
        *self.commands.last().expect("no command issued")
    }
}

impl Agent for ScriptedAgent {
    fn set_velocity(&mut self, linear: f64, angular: f64) {
        self.commands.push((linear, angular));
    }

    fn bumper_state(&self) -> bool {
        self.bumps.get(self.tick - 1).copied().unwrap_or(false)
    }
}

fn unit_config() -> RoombaConfig {
    RoombaConfig {
        sample_time: 1.0,
        forward_speed: 0.5,
        backward_speed: -0.1,
        angular_speed: 1.0,
        move_forward_time: 3.0,
        move_in_spiral_time: 4.0,
        go_back_time: 2.0,
        initial_radius_spiral: 0.5,
        spiral_factor: 0.25,
        rotation_timing: RotationTiming::Absolute,
        seed: Some(42),
    }
}

#[test]
fn tree_recovers_from_collision_on_first_tick() {
    let config = unit_config();
    let mut tree = RoombaBehaviorTree::with_rng(config, StdRng::seed_from_u64(42));
    let mut agent = ScriptedAgent::bumping_on(&[1], 64);

    agent.next_tick();
    assert_eq!(tree.update(&mut agent), Status::Running);
    assert_eq!(tree.active_path(), ["Collide", "Rotate", "GoBack"]);

    // GoBack keeps running for ceil(go_back_time / sample_time) ticks in total
    let mut go_back_running = 1;
    let mut status = Status::Running;
    while status == Status::Running {
        agent.next_tick();
        status = tree.update(&mut agent);
        if status == Status::Running && tree.active_path().last() == Some(&"GoBack") {
            go_back_running += 1;
        }
        assert!(agent.tick < 64, "recovery never finished");
    }
    let expected = (config.go_back_time / config.sample_time).ceil() as u32;
    assert_eq!(go_back_running, expected);
    assert_eq!(status, Status::Success);
    assert_eq!(agent.last_command(), (0.0, config.angular_speed));
    assert_eq!(tree.tree().activations(), 1);

    // The next tick restarts the whole tree
    agent.next_tick();
    assert_eq!(tree.update(&mut agent), Status::Running);
    assert_eq!(tree.tree().activations(), 2);
    assert_eq!(tree.active_path(), ["Collide", "Clean", "MoveForward"]);
    assert_eq!(agent.last_command(), (config.forward_speed, 0.0));
}

#[test]
fn tree_spirals_after_moving_forward_in_same_tick() {
    let config = unit_config();
    let mut tree = RoombaBehaviorTree::with_rng(config, StdRng::seed_from_u64(1));
    let mut agent = ScriptedAgent::bumping_on(&[], 16);

    for _ in 1..=3 {
        agent.next_tick();
        assert_eq!(tree.update(&mut agent), Status::Running);
        assert_eq!(tree.active_path(), ["Collide", "Clean", "MoveForward"]);
    }

    agent.next_tick();
    assert_eq!(tree.update(&mut agent), Status::Running);
    assert_eq!(tree.active_path(), ["Collide", "Clean", "MoveInSpiral"]);
    // Entered with the initial radius, then grown once by the first execute
    let radius = config.initial_radius_spiral + config.spiral_factor * config.sample_time;
    assert_eq!(agent.last_command(), (0.5, 0.5 / radius));
}

#[test]
fn tree_bump_while_spiralling_triggers_recovery() {
    let config = unit_config();
    let mut tree = RoombaBehaviorTree::with_rng(config, StdRng::seed_from_u64(1));
    let mut agent = ScriptedAgent::bumping_on(&[6], 16);

    for _ in 1..=5 {
        agent.next_tick();
        tree.update(&mut agent);
    }
    assert_eq!(tree.active_path(), ["Collide", "Clean", "MoveInSpiral"]);

    agent.next_tick();
    assert_eq!(tree.update(&mut agent), Status::Running);
    assert_eq!(tree.active_path(), ["Collide", "Rotate", "GoBack"]);
    assert_eq!(agent.last_command(), (config.backward_speed, 0.0));
}

#[test]
fn fsm_executes_spiral_in_transition_tick() {
    let config = unit_config();
    let mut fsm = RoombaStateMachine::with_rng(config, StdRng::seed_from_u64(1));
    let mut agent = ScriptedAgent::bumping_on(&[], 16);

    for tick in 1..=4 {
        agent.next_tick();
        fsm.update(&mut agent);
        assert_eq!(fsm.state_name(), "MoveForward", "tick {tick}");
        assert_eq!(agent.commands.len(), tick);
    }

    agent.next_tick();
    fsm.update(&mut agent);
    assert_eq!(fsm.state_name(), "MoveInSpiral");
    // One command per tick: no tick was skipped by the transition
    assert_eq!(agent.commands.len(), 5);
    let radius = config.initial_radius_spiral + config.spiral_factor * config.sample_time;
    assert_eq!(agent.last_command(), (0.5, 0.5 / radius));

    let history: Vec<_> = fsm
        .history()
        .map(|r| (r.tick, r.from.as_str(), r.to.as_str()))
        .collect();
    assert_eq!(history, [(5, "MoveForward", "MoveInSpiral")]);
}

#[test]
fn fsm_full_cycle_after_collision() {
    let config = unit_config();
    let mut fsm = RoombaStateMachine::with_rng(config, StdRng::seed_from_u64(8));
    let mut agent = ScriptedAgent::bumping_on(&[2], 64);

    for _ in 0..20 {
        agent.next_tick();
        fsm.update(&mut agent);
    }

    let states: Vec<_> = fsm.history().map(|r| r.to.as_str()).collect();
    assert_eq!(&states[..3], ["GoBack", "Rotate", "MoveForward"]);
    assert_eq!(fsm.history().next().map(|r| r.tick), Some(2));
}

#[test]
fn both_controllers_back_up_then_turn_then_resume() {
    let config = unit_config();
    for kind in [ControllerKind::BehaviorTree, ControllerKind::StateMachine] {
        let mut controller: Box<dyn Controller<ScriptedAgent>> = kind.build(config).unwrap();
        let mut agent = ScriptedAgent::bumping_on(&[2], 64);

        for _ in 0..20 {
            agent.next_tick();
            controller.update(&mut agent);
        }

        let back = agent
            .commands
            .iter()
            .position(|&c| c == (config.backward_speed, 0.0))
            .unwrap_or_else(|| panic!("{kind} never backed up"));
        let turn = agent.commands[back..]
            .iter()
            .position(|&c| c == (0.0, config.angular_speed))
            .map(|i| i + back)
            .unwrap_or_else(|| panic!("{kind} never turned"));
        assert!(
            agent.commands[turn..].contains(&(config.forward_speed, 0.0)),
            "{kind} never resumed cleaning"
        );
    }
}

#[test]
fn tree_restarts_after_clean_success() {
    let config = unit_config();
    let mut tree = RoombaBehaviorTree::with_rng(config, StdRng::seed_from_u64(1));
    let mut agent = ScriptedAgent::bumping_on(&[], 16);

    for tick in 1..=7 {
        agent.next_tick();
        assert_eq!(tree.update(&mut agent), Status::Running, "tick {tick}");
    }
    assert_eq!(tree.active_path(), ["Collide", "Clean", "MoveInSpiral"]);

    // Spiral time elapses: Clean succeeds, so does the whole selector
    agent.next_tick();
    assert_eq!(tree.update(&mut agent), Status::Success);
    assert_eq!(tree.active_path(), ["Collide"]);
    assert_eq!(tree.tree().activations(), 1);

    agent.next_tick();
    assert_eq!(tree.update(&mut agent), Status::Running);
    assert_eq!(tree.tree().activations(), 2);
    assert_eq!(tree.active_path(), ["Collide", "Clean", "MoveForward"]);
    assert_eq!(agent.last_command(), (config.forward_speed, 0.0));
}

#[test]
fn fsm_alternates_forward_and_spiral_without_collisions() {
    let config = unit_config();
    let mut fsm = RoombaStateMachine::with_rng(config, StdRng::seed_from_u64(1));
    let mut agent = ScriptedAgent::bumping_on(&[], 16);

    for _ in 0..14 {
        agent.next_tick();
        fsm.update(&mut agent);
    }

    let history: Vec<_> = fsm
        .history()
        .map(|r| (r.tick, r.from.as_str(), r.to.as_str()))
        .collect();
    assert_eq!(
        history,
        [
            (5, "MoveForward", "MoveInSpiral"),
            (10, "MoveInSpiral", "MoveForward"),
            (14, "MoveForward", "MoveInSpiral"),
        ]
    );
    assert_eq!(agent.commands.len(), 14);
}
