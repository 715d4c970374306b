//! Game Loop Mode Controller
//!
//! This example demonstrates driving a machine one tick at a time from a
//! game-style loop.
//!
//! Key concepts:
//! - Update hooks as per-tick behavior
//! - The per-state data bag as cross-tick memory
//! - Data surviving pause/resume round trips
//!
//! Run with: cargo run --example game_loop

use tickstate::{allow, State, StateManager};

fn main() {
    println!("=== Game Loop Mode Controller ===\n");

    let menu = State::builder("menu")
        .on_exit(|| println!("  leaving menu"))
        .build();

    // The playing state counts its own ticks in its data bag.
    let playing_builder = State::builder("playing");
    let bag = playing_builder.data();
    let playing = playing_builder
        .on_enter(|| println!("  entering play mode"))
        .on_update(move || {
            let frame = bag.get::<u64>("frame").unwrap_or(0) + 1;
            bag.insert("frame", frame);
            println!("  tick: frame {frame}");
        })
        .on_exit(|| println!("  leaving play mode"))
        .build();

    let paused = State::builder("paused")
        .on_enter(|| println!("  paused"))
        .build();

    allow! {
        menu => playing;
        playing => paused, menu;
        paused => playing, menu;
    }

    let mut machine = StateManager::new(menu.clone());

    println!("Start of loop, current mode: {}\n", machine.current_state().name());

    machine.next_state(&playing);
    machine.update();
    machine.update();
    machine.update();

    machine.next_state(&paused);
    machine.update(); // paused has no update hook; the tick is silent

    println!("\nResuming...");
    machine.next_state(&playing);
    machine.update(); // the frame counter picks up where it left off

    let came_from = playing.previous().expect("playing was entered twice");
    println!("\nPlay mode was re-entered from: {}", came_from.name());
    println!(
        "Frames counted across the pause: {}",
        playing.data().get::<u64>("frame").unwrap()
    );

    println!("\n=== Example Complete ===");
}
