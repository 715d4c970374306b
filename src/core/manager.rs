//! The manager that owns the "current state" pointer.

use crate::core::state::StateRef;
use std::fmt;
use std::rc::Rc;

/// Drives one state graph: holds the single active [`State`](crate::core::State)
/// and exposes the tick/transition operations.
///
/// The manager does not own the states themselves — several managers may
/// walk the same graph — it only tracks which node is currently active.
/// `current` is always either the state supplied at construction or a state
/// reached from it through a validated transition.
///
/// Execution is single-threaded and cooperative: every call runs to
/// completion on the caller's thread. Hooks must not call back into the
/// manager that is driving them; [`next_state`](StateManager::next_state)
/// holds the manager exclusively for the whole transition sequence.
///
/// # Example
///
/// ```rust
/// use tickstate::{State, StateManager};
///
/// let idle = State::new("idle");
/// let running = State::new("running");
/// idle.add_next_state(&running);
///
/// let mut machine = StateManager::new(idle.clone());
/// machine.update(); // runs idle's update hook (a no-op here)
///
/// assert!(machine.next_state(&running));
/// assert!(!machine.next_state(&idle)); // no reverse edge declared
/// assert!(std::rc::Rc::ptr_eq(machine.current_state(), &running));
/// ```
pub struct StateManager {
    current: StateRef,
}

impl StateManager {
    /// Create a manager with `initial` active.
    ///
    /// The initial state's enter hook is NOT invoked — only a transition
    /// into a state fires it, and nothing transitions into the first state.
    /// Callers that want entry behavior for the starting state either invoke
    /// [`State::enter`](crate::core::State::enter) themselves or construct
    /// via [`StateManager::new_entered`].
    pub fn new(initial: StateRef) -> Self {
        Self { current: initial }
    }

    /// Create a manager with `initial` active, firing its enter hook first.
    ///
    /// The counterpart to [`StateManager::new`] for callers that want the
    /// starting state treated like any other entered state.
    pub fn new_entered(initial: StateRef) -> Self {
        initial.enter();
        Self { current: initial }
    }

    /// Run the active state's per-tick behavior (its update hook, if any).
    pub fn update(&self) {
        self.current.update();
    }

    /// Attempt a transition to `candidate`.
    ///
    /// `candidate` is accepted iff it is pointer-identical to an entry in
    /// the current state's allowed-successor list. On rejection the method
    /// returns `false`, the current state is unchanged, and no hook fires —
    /// a rejected transition is routine control flow, not an error.
    ///
    /// On acceptance the sequence is fixed and observable:
    ///
    /// 1. the outgoing state's exit hook fires (it is still current);
    /// 2. `candidate` becomes current;
    /// 3. `candidate`'s previous-reference is set to the outgoing state;
    /// 4. `candidate`'s enter hook fires, already seeing the new previous.
    pub fn next_state(&mut self, candidate: &StateRef) -> bool {
        // The successor scan releases its borrow before any hook runs, so
        // hooks are free to wire new edges on either state.
        if !self.current.allows(candidate) {
            return false;
        }

        let outgoing = Rc::clone(&self.current);
        outgoing.exit();
        self.current = Rc::clone(candidate);
        self.current.set_previous(outgoing);
        self.current.enter();
        true
    }

    /// The active state.
    pub fn current_state(&self) -> &StateRef {
        &self.current
    }
}

impl fmt::Debug for StateManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateManager")
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;
    use std::cell::{Cell, RefCell};

    fn logging_state(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> StateRef {
        let (e, u, x) = (log.clone(), log.clone(), log.clone());
        State::builder(name)
            .on_enter(move || e.borrow_mut().push(format!("{name}.enter")))
            .on_update(move || u.borrow_mut().push(format!("{name}.update")))
            .on_exit(move || x.borrow_mut().push(format!("{name}.exit")))
            .build()
    }

    #[test]
    fn update_runs_only_the_current_state() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let idle = logging_state("idle", &log);
        let running = logging_state("running", &log);
        idle.add_next_state(&running);

        let machine = StateManager::new(idle);
        machine.update();
        machine.update();

        assert_eq!(*log.borrow(), vec!["idle.update", "idle.update"]);
    }

    #[test]
    fn valid_transition_returns_true_and_swaps_current() {
        let idle = State::new("idle");
        let running = State::new("running");
        idle.add_next_state(&running);

        let mut machine = StateManager::new(idle);
        assert!(machine.next_state(&running));
        assert!(Rc::ptr_eq(machine.current_state(), &running));
    }

    #[test]
    fn invalid_transition_returns_false_and_changes_nothing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let idle = logging_state("idle", &log);
        let running = logging_state("running", &log);
        // No edge declared in either direction.

        let mut machine = StateManager::new(idle.clone());
        assert!(!machine.next_state(&running));

        assert!(Rc::ptr_eq(machine.current_state(), &idle));
        assert!(log.borrow().is_empty());
        assert!(running.previous().is_none());
    }

    #[test]
    fn hooks_fire_in_exit_then_enter_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = logging_state("a", &log);
        let b = logging_state("b", &log);
        a.add_next_state(&b);

        let mut machine = StateManager::new(a);
        assert!(machine.next_state(&b));

        assert_eq!(*log.borrow(), vec!["a.exit", "b.enter"]);
    }

    #[test]
    fn previous_is_set_before_the_enter_hook_runs() {
        let a = State::new("a");
        let slot: Rc<RefCell<Option<StateRef>>> = Rc::new(RefCell::new(None));
        let seen: Rc<RefCell<Option<StateRef>>> = Rc::new(RefCell::new(None));

        let (slot2, seen2) = (slot.clone(), seen.clone());
        let b = State::builder("b")
            .on_enter(move || {
                let me = slot2.borrow().clone().unwrap();
                *seen2.borrow_mut() = me.previous();
            })
            .build();
        *slot.borrow_mut() = Some(b.clone());
        a.add_next_state(&b);

        let mut machine = StateManager::new(a.clone());
        assert!(machine.next_state(&b));

        let observed = seen.borrow().clone().unwrap();
        assert!(Rc::ptr_eq(&observed, &a));
    }

    #[test]
    fn reentry_overwrites_previous_and_keeps_data() {
        let a = State::new("a");
        let b = State::new("b");
        a.add_next_state(&b);
        b.add_next_state(&a);

        let mut machine = StateManager::new(a.clone());
        a.data().insert("visits", 1);

        assert!(machine.next_state(&b));
        assert!(machine.next_state(&a));

        // Data written in the first visit survived the round trip.
        assert_eq!(a.data().get::<u32>("visits").unwrap(), 1);
        let prev = a.previous().unwrap();
        assert!(Rc::ptr_eq(&prev, &b));
    }

    #[test]
    fn duplicate_edges_do_not_break_matching() {
        let a = State::new("a");
        let b = State::new("b");
        a.add_next_state(&b);
        a.add_next_state(&b);

        let mut machine = StateManager::new(a);
        assert!(machine.next_state(&b));
    }

    #[test]
    fn self_loop_transition_reenters_the_same_state() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = logging_state("a", &log);
        a.add_next_state(&a);

        let mut machine = StateManager::new(a.clone());
        assert!(machine.next_state(&a));

        assert_eq!(*log.borrow(), vec!["a.exit", "a.enter"]);
        let prev = a.previous().unwrap();
        assert!(Rc::ptr_eq(&prev, &a));
    }

    #[test]
    fn construction_does_not_fire_the_enter_hook() {
        let entered = Rc::new(Cell::new(false));
        let flag = entered.clone();
        let initial = State::builder("initial")
            .on_enter(move || flag.set(true))
            .build();

        let machine = StateManager::new(initial.clone());
        machine.update();

        assert!(!entered.get());

        // The caller may still fire it manually.
        initial.enter();
        assert!(entered.get());
    }

    #[test]
    fn new_entered_fires_the_enter_hook_once() {
        let entered = Rc::new(Cell::new(0));
        let count = entered.clone();
        let initial = State::builder("initial")
            .on_enter(move || count.set(count.get() + 1))
            .build();

        let machine = StateManager::new_entered(initial.clone());

        assert_eq!(entered.get(), 1);
        assert!(Rc::ptr_eq(machine.current_state(), &initial));
    }

    #[test]
    fn rejected_target_can_be_reached_after_wiring_the_edge() {
        let a = State::new("a");
        let b = State::new("b");

        let mut machine = StateManager::new(a.clone());
        assert!(!machine.next_state(&b));

        a.add_next_state(&b);
        assert!(machine.next_state(&b));
    }

    #[test]
    fn an_enter_hook_may_wire_new_edges() {
        let a = State::new("a");
        let c = State::new("c");

        let (a2, c2) = (a.clone(), c.clone());
        let b = State::builder("b")
            .on_enter(move || {
                // Wire the way back while entering.
                a2.add_next_state(&c2);
            })
            .build();
        a.add_next_state(&b);

        let mut machine = StateManager::new(a.clone());
        assert!(machine.next_state(&b));
        assert!(a.allows(&c));
    }

    #[test]
    fn two_managers_can_walk_the_same_graph() {
        let a = State::new("a");
        let b = State::new("b");
        a.add_next_state(&b);

        let mut first = StateManager::new(a.clone());
        let second = StateManager::new(a.clone());

        assert!(first.next_state(&b));

        assert!(Rc::ptr_eq(first.current_state(), &b));
        assert!(Rc::ptr_eq(second.current_state(), &a));
    }
}
