//! Fluent construction of state nodes.

use crate::core::state::{Hook, State, StateRef};
use crate::core::StateData;
use std::fmt;

/// Builder for [`State`] nodes.
///
/// Hooks are fixed at build time, so the builder is where they get attached.
/// Building cannot fail: a state has no required pieces beyond its name, and
/// every hook is optional.
///
/// The builder creates the state's data bag up front and exposes the handle
/// through [`StateBuilder::data`], so a hook can capture a handle to the bag
/// of the very state it will belong to:
///
/// ```rust
/// use tickstate::State;
///
/// let builder = State::builder("running");
/// let bag = builder.data();
/// let running = builder
///     .on_update(move || {
///         let ticks = bag.get::<u64>("ticks").unwrap_or(0);
///         bag.insert("ticks", ticks + 1);
///     })
///     .build();
///
/// running.update();
/// assert_eq!(running.data().get::<u64>("ticks").unwrap(), 1);
/// ```
pub struct StateBuilder {
    name: String,
    on_enter: Option<Hook>,
    on_update: Option<Hook>,
    on_exit: Option<Hook>,
    next: Vec<StateRef>,
    data: StateData,
}

impl StateBuilder {
    /// Start a builder for a state called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_enter: None,
            on_update: None,
            on_exit: None,
            next: Vec::new(),
            data: StateData::new(),
        }
    }

    /// Attach the hook that fires when the machine transitions into this
    /// state.
    pub fn on_enter<F: Fn() + 'static>(mut self, hook: F) -> Self {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Attach the per-tick hook, run by
    /// [`StateManager::update`](crate::core::StateManager::update) while this
    /// state is current.
    pub fn on_update<F: Fn() + 'static>(mut self, hook: F) -> Self {
        self.on_update = Some(Box::new(hook));
        self
    }

    /// Attach the hook that fires when the machine transitions away from
    /// this state.
    pub fn on_exit<F: Fn() + 'static>(mut self, hook: F) -> Self {
        self.on_exit = Some(Box::new(hook));
        self
    }

    /// Pre-wire an allowed successor, equivalent to calling
    /// [`State::add_next_state`] after `build`.
    pub fn next(mut self, state: &StateRef) -> Self {
        self.next.push(state.clone());
        self
    }

    /// Handle to the bag the built state will own. All clones share the
    /// store, before and after `build`.
    pub fn data(&self) -> StateData {
        self.data.clone()
    }

    /// Build the state.
    pub fn build(self) -> StateRef {
        State::assemble(
            self.name,
            self.on_enter,
            self.on_update,
            self.on_exit,
            self.next,
            self.data,
        )
    }
}

impl fmt::Debug for StateBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateBuilder")
            .field("name", &self.name)
            .field("next", &self.next.len())
            .finish()
    }
}
