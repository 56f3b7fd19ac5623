//! Property-based tests for the state machine engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated configurations and operation sequences.

use fsm_engine::{ConfigBuilder, Configuration, Fsm, TransitionError};
use proptest::prelude::*;

const STATES: [&str; 4] = ["A", "B", "C", "D"];
const EVENTS: [&str; 3] = ["go", "back", "stop"];
// Index 4 is a target that is never declared.
const TARGETS: [&str; 5] = ["A", "B", "C", "D", "Z"];

prop_compose! {
    fn arbitrary_config()(
        initial in 0..4usize,
        transitions in prop::collection::vec((0..4usize, 0..3usize, 0..5usize), 0..12)
    ) -> Configuration {
        let mut builder = ConfigBuilder::new().initial(STATES[initial]);
        for state in STATES {
            builder = builder.state(state);
        }
        for (from, event, to) in transitions {
            builder = builder.transition(STATES[from], EVENTS[event], TARGETS[to]);
        }
        builder.build().unwrap()
    }
}

#[derive(Clone, Debug)]
enum Op {
    Change(usize),
    Trigger(usize),
    Reset,
    Undo,
    Redo,
    Clear,
}

prop_compose! {
    fn arbitrary_op()(variant in 0..6u8, index in 0..5usize) -> Op {
        match variant {
            0 => Op::Change(index),
            1 => Op::Trigger(index % EVENTS.len()),
            2 => Op::Reset,
            3 => Op::Undo,
            4 => Op::Redo,
            _ => Op::Clear,
        }
    }
}

/// Straightforward model of the engine's current state and history slots.
struct Model {
    current: String,
    previous: Option<String>,
    next: Option<String>,
}

impl Model {
    fn apply(&mut self, config: &Configuration, op: &Op) {
        match op {
            Op::Change(i) => {
                if config.has_state(TARGETS[*i]) {
                    self.previous = Some(self.current.clone());
                    self.current = TARGETS[*i].to_string();
                }
            }
            Op::Trigger(i) => {
                if let Some(target) = config.target(&self.current, EVENTS[*i]) {
                    self.previous = Some(self.current.clone());
                    self.current = target.to_string();
                }
            }
            Op::Reset => self.current = config.initial.clone(),
            Op::Undo => {
                if let Some(previous) = self.previous.take() {
                    self.next = Some(std::mem::replace(&mut self.current, previous));
                }
            }
            Op::Redo => {
                if let Some(next) = self.next.take() {
                    self.current = next;
                }
            }
            Op::Clear => {
                self.previous = None;
                self.next = None;
            }
        }
    }
}

proptest! {
    #[test]
    fn construction_starts_at_initial(config in arbitrary_config()) {
        let initial = config.initial.clone();
        let fsm = Fsm::try_new(Some(config)).unwrap();
        prop_assert_eq!(fsm.state(), initial.as_str());
    }

    #[test]
    fn change_state_lands_on_target(config in arbitrary_config(), target in 0..4usize) {
        let mut fsm = Fsm::new(config);
        fsm.change_state(STATES[target]).unwrap();
        prop_assert_eq!(fsm.state(), STATES[target]);
    }

    #[test]
    fn trigger_lands_on_declared_target(config in arbitrary_config(), event in 0..3usize) {
        let expected = config.target(&config.initial, EVENTS[event]).map(str::to_string);
        let mut fsm = Fsm::new(config);

        match (fsm.trigger(EVENTS[event]), expected) {
            (Ok(()), Some(target)) => prop_assert_eq!(fsm.state(), target.as_str()),
            (Err(TransitionError::NoTransition { .. }), None) => {}
            (result, expected) => {
                prop_assert!(false, "unexpected {:?} for target {:?}", result, expected)
            }
        }
    }

    #[test]
    fn failed_trigger_leaves_state_unchanged(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..10),
        event in 0..3usize
    ) {
        let mut fsm = Fsm::new(config);
        for op in &ops {
            if let Op::Trigger(i) = op {
                let _ = fsm.trigger(EVENTS[*i]);
            }
        }

        let before = fsm.state().to_string();
        let previous = fsm.previous_state().map(str::to_string);
        if fsm.trigger(EVENTS[event]).is_err() {
            prop_assert_eq!(fsm.state(), before.as_str());
            prop_assert_eq!(fsm.previous_state().map(str::to_string), previous);
        }
    }

    #[test]
    fn undo_redo_is_single_depth(config in arbitrary_config(), target in 0..4usize) {
        let mut fsm = Fsm::new(config);
        let start = fsm.state().to_string();

        fsm.change_state(STATES[target]).unwrap();
        prop_assert!(fsm.undo());
        prop_assert_eq!(fsm.state(), start.as_str());
        prop_assert!(!fsm.undo());

        prop_assert!(fsm.redo());
        prop_assert_eq!(fsm.state(), STATES[target]);
        prop_assert!(!fsm.redo());
    }

    #[test]
    fn clear_history_is_idempotent(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        clears in 1..5usize
    ) {
        let mut fsm = Fsm::new(config);
        for op in &ops {
            match op {
                Op::Change(i) => { let _ = fsm.change_state(TARGETS[*i]); }
                Op::Trigger(i) => { let _ = fsm.trigger(EVENTS[*i]); }
                Op::Undo => { fsm.undo(); }
                _ => {}
            }
        }

        for _ in 0..clears {
            fsm.clear_history();
        }

        prop_assert!(!fsm.undo());
        prop_assert!(!fsm.redo());
    }

    #[test]
    fn states_filter_keeps_order(config in arbitrary_config(), event in 0..3usize) {
        let fsm = Fsm::new(config);
        let all = fsm.states(None);
        let filtered = fsm.states(Some(EVENTS[event]));

        prop_assert_eq!(all.clone(), STATES.to_vec());

        let expected: Vec<&str> = all
            .iter()
            .copied()
            .filter(|s| fsm.config().target(s, EVENTS[event]).is_some())
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn engine_matches_model(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..40)
    ) {
        let mut fsm = Fsm::new(config.clone());
        let mut model = Model {
            current: config.initial.clone(),
            previous: None,
            next: None,
        };

        for op in &ops {
            match op {
                Op::Change(i) => { let _ = fsm.change_state(TARGETS[*i]); }
                Op::Trigger(i) => { let _ = fsm.trigger(EVENTS[*i]); }
                Op::Reset => fsm.reset(),
                Op::Undo => { fsm.undo(); }
                Op::Redo => { fsm.redo(); }
                Op::Clear => fsm.clear_history(),
            }
            model.apply(&config, op);

            prop_assert_eq!(fsm.state(), model.current.as_str());
            prop_assert_eq!(fsm.previous_state(), model.previous.as_deref());
            prop_assert_eq!(fsm.next_state(), model.next.as_deref());
        }
    }
}
