//! Core state machine types.
//!
//! This module contains the whole machine:
//! - [`State`] nodes with lifecycle hooks and allowed-successor lists
//! - the [`StateManager`] that owns the current pointer and validates
//!   transitions
//! - the per-state [`StateData`] bag for cross-hook communication

mod data;
mod manager;
pub(crate) mod state;

pub use data::{DataError, StateData};
pub use manager::StateManager;
pub use state::{State, StateRef};
