//! Tickstate: a minimal tick-driven finite state machine
//!
//! Tickstate is an embeddable building block for game loops, workflow
//! steppers, and UI mode controllers. Callers define named states holding
//! optional enter/update/exit behavior, wire directed transitions between
//! them, then drive the machine one tick at a time; transitions to states
//! that were never wired are rejected.
//!
//! # Core Concepts
//!
//! - **State**: a node with optional lifecycle hooks, an append-only list
//!   of allowed successors, and a private data bag
//! - **StateManager**: the sole owner of which state is active, exposing
//!   `update` (run the current state's tick) and `next_state` (attempt a
//!   validated transition)
//! - **Reference identity**: transitions match by node identity
//!   (`Rc::ptr_eq`), never by name or content
//!
//! # Example
//!
//! ```rust
//! use tickstate::{allow, State, StateManager};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let laps = Rc::new(Cell::new(0u32));
//! let counter = laps.clone();
//!
//! let idle = State::new("idle");
//! let running = State::builder("running")
//!     .on_update(move || counter.set(counter.get() + 1))
//!     .build();
//!
//! allow! {
//!     idle => running;
//!     running => idle;
//! }
//!
//! let mut machine = StateManager::new(idle.clone());
//! machine.update(); // idle has no update hook; nothing happens
//!
//! assert!(machine.next_state(&running));
//! machine.update();
//! machine.update();
//! assert_eq!(laps.get(), 2);
//!
//! // The incoming state remembers where the machine came from.
//! let prev = running.previous().unwrap();
//! assert!(Rc::ptr_eq(&prev, &idle));
//!
//! // An unwired target is rejected; the machine stays put.
//! let stopped = State::new("stopped");
//! assert!(!machine.next_state(&stopped));
//! assert!(Rc::ptr_eq(machine.current_state(), &running));
//! ```
//!
//! # Threading
//!
//! Execution is single-threaded, synchronous, and cooperative; the types
//! are intentionally `!Send`/`!Sync`. A machine shared across threads needs
//! external mutual exclusion supplied by the embedding application.

pub mod builder;
pub mod core;
mod macros;

// Re-export the working surface
pub use crate::builder::StateBuilder;
pub use crate::core::{DataError, State, StateData, StateManager, StateRef};
