//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic transitions (states repeat)
//! - Enter hooks announcing each phase
//! - Rejected transitions as routine control flow
//!
//! Run with: cargo run --example traffic_light

use tickstate::{allow, State, StateManager};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let red = State::builder("red")
        .on_enter(|| println!("  [red]    Stop"))
        .build();
    let green = State::builder("green")
        .on_enter(|| println!("  [green]  Go!"))
        .build();
    let yellow = State::builder("yellow")
        .on_enter(|| println!("  [yellow] Caution"))
        .build();

    // The light cycles one way only.
    allow! {
        red => green;
        green => yellow;
        yellow => red;
    }

    let mut machine = StateManager::new(red.clone());
    println!("Initial state: {}\n", machine.current_state().name());

    println!("Two full cycles:");
    for _ in 0..2 {
        machine.next_state(&green);
        machine.next_state(&yellow);
        machine.next_state(&red);
    }

    // Skipping a phase is not wired, so the machine refuses to move.
    println!("\nTrying to jump red -> yellow directly:");
    let accepted = machine.next_state(&yellow);
    println!("  accepted: {accepted}");
    println!("  still at: {}", machine.current_state().name());

    println!("\n=== Example Complete ===");
}
