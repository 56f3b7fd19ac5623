//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic machine driven by a single event,
//! plus one step of undo and redo.
//!
//! Run with: cargo run --example traffic_light

use fsm_engine::{fsm_config, Fsm, TransitionError};

fn main() -> Result<(), TransitionError> {
    println!("=== Traffic Light State Machine ===\n");

    let mut fsm = Fsm::new(fsm_config! {
        initial: "green",
        states: {
            "green" => { "timer" => "yellow" },
            "yellow" => { "timer" => "red" },
            "red" => { "timer" => "green" },
        }
    });

    println!("States: {:?}", fsm.states(None));
    println!("Initial state: {}\n", fsm.state());

    for _ in 0..3 {
        let from = fsm.state().to_string();
        fsm.trigger("timer")?;
        println!("  {from} -> {} (timer)", fsm.state());
    }

    if let Err(err) = fsm.trigger("honk") {
        println!("\nRejected: {err}");
    }

    let undone = fsm.undo();
    println!("\nundo: {undone}, now {}", fsm.state());
    let undone = fsm.undo();
    println!("undo again: {undone}, still {}", fsm.state());
    let redone = fsm.redo();
    println!("redo: {redone}, now {}", fsm.state());

    fsm.reset();
    println!("\nAfter reset: {}", fsm.state());

    println!("\n=== Example Complete ===");
    Ok(())
}
