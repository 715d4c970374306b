//! State nodes: lifecycle hooks, allowed successors, and per-state data.
//!
//! A [`State`] is a passive record. It does nothing on its own; a
//! [`StateManager`](crate::core::StateManager) decides when its hooks fire,
//! and the embedding application decides what those hooks do.

use crate::builder::StateBuilder;
use crate::core::data::StateData;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Shared handle to a state node.
///
/// States are always handled through `Rc`; two handles denote the same node
/// iff they point at the same allocation ([`Rc::ptr_eq`]). Names are labels
/// for humans, never identity — two distinct states may share a name.
pub type StateRef = Rc<State>;

/// A zero-argument lifecycle callback.
///
/// Hooks are plain `Fn` closures; anything they mutate lives in their
/// captures, typically a [`Cell`](std::cell::Cell), a `RefCell`, or the
/// owning state's [`StateData`] handle.
pub(crate) type Hook = Box<dyn Fn()>;

/// A node in the machine: three optional lifecycle hooks, an append-only
/// list of allowed successors, a back-reference to the state last
/// transitioned from, and an open-ended data bag.
///
/// Hooks are fixed at construction via [`State::builder`]; the successor
/// list grows (and only grows) through [`State::add_next_state`] at any
/// point before or during use. Self-loops and duplicate edges are legal and
/// deliberately never validated away.
///
/// # Example
///
/// ```rust
/// use tickstate::core::State;
///
/// let idle = State::new("idle");
/// let running = State::new("running");
///
/// idle.add_next_state(&running);
/// idle.add_next_state(&idle); // self-loop, allowed
///
/// assert!(idle.allows(&running));
/// assert!(idle.allows(&idle));
/// assert!(!running.allows(&idle));
/// ```
pub struct State {
    id: Uuid,
    name: String,
    on_enter: Option<Hook>,
    on_update: Option<Hook>,
    on_exit: Option<Hook>,
    allowed: RefCell<Vec<StateRef>>,
    previous: RefCell<Option<StateRef>>,
    data: StateData,
}

impl State {
    /// Create a hookless state. Shorthand for `State::builder(name).build()`.
    pub fn new(name: impl Into<String>) -> StateRef {
        StateBuilder::new(name).build()
    }

    /// Start building a state with hooks, pre-wired successors, or a
    /// pre-shared data handle.
    pub fn builder(name: impl Into<String>) -> StateBuilder {
        StateBuilder::new(name)
    }

    pub(crate) fn assemble(
        name: String,
        on_enter: Option<Hook>,
        on_update: Option<Hook>,
        on_exit: Option<Hook>,
        allowed: Vec<StateRef>,
        data: StateData,
    ) -> StateRef {
        Rc::new(Self {
            id: Uuid::new_v4(),
            name,
            on_enter,
            on_update,
            on_exit,
            allowed: RefCell::new(allowed),
            previous: RefCell::new(None),
            data,
        })
    }

    /// The state's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generated id, stable for the lifetime of the node. Diagnostic only;
    /// identity checks go through [`Rc::ptr_eq`] on [`StateRef`]s.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Append `candidate` to the allowed-successor list.
    ///
    /// Always succeeds: no cycle, duplicate, or self-reference checks, and
    /// nothing ever removes an entry.
    pub fn add_next_state(&self, candidate: &StateRef) {
        self.allowed.borrow_mut().push(Rc::clone(candidate));
    }

    /// Check whether a transition to `candidate` would be accepted, by
    /// scanning the successor list for a pointer-identical entry.
    pub fn allows(&self, candidate: &StateRef) -> bool {
        self.allowed
            .borrow()
            .iter()
            .any(|next| Rc::ptr_eq(next, candidate))
    }

    /// Snapshot of the allowed successors, in insertion order, duplicates
    /// included. The returned `Vec` is the caller's; pushing into or
    /// draining it does not touch the node.
    pub fn allowed_next(&self) -> Vec<StateRef> {
        self.allowed.borrow().clone()
    }

    /// Invoke the update hook if present; no-op otherwise.
    pub fn update(&self) {
        if let Some(hook) = &self.on_update {
            hook();
        }
    }

    /// Invoke the enter hook if present; no-op otherwise.
    pub fn enter(&self) {
        if let Some(hook) = &self.on_enter {
            hook();
        }
    }

    /// Invoke the exit hook if present; no-op otherwise.
    pub fn exit(&self) {
        if let Some(hook) = &self.on_exit {
            hook();
        }
    }

    /// Record the state transitioned from. Public, but intended to be
    /// called by [`StateManager`](crate::core::StateManager) during a
    /// transition; overwritten on every re-entry.
    pub fn set_previous(&self, prev: StateRef) {
        *self.previous.borrow_mut() = Some(prev);
    }

    /// The state last transitioned from, if any. Set before the enter hook
    /// fires, so the hook already sees the correct value.
    pub fn previous(&self) -> Option<StateRef> {
        self.previous.borrow().clone()
    }

    /// Handle to this state's data bag. Cloning the handle is cheap and
    /// every clone reads and writes the same store.
    pub fn data(&self) -> StateData {
        self.data.clone()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("allowed", &self.allowed.borrow().len())
            .field("data", &self.data)
            .finish()
    }
}
