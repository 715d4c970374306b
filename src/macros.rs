//! Macros for declarative transition wiring.

/// Declare allowed transitions as edges.
///
/// Each line reads `source => target, target, ...;` and expands to the
/// corresponding [`add_next_state`](crate::core::State::add_next_state)
/// calls. Like the method itself, the macro never validates: duplicate
/// edges and self-loops are written out exactly as declared.
///
/// # Example
///
/// ```
/// use tickstate::{allow, State};
///
/// let idle = State::new("idle");
/// let running = State::new("running");
/// let paused = State::new("paused");
///
/// allow! {
///     idle => running;
///     running => paused, idle;
///     paused => running, idle;
/// }
///
/// assert!(idle.allows(&running));
/// assert!(running.allows(&paused));
/// assert!(!idle.allows(&paused));
/// ```
#[macro_export]
macro_rules! allow {
    ( $( $from:expr => $( $to:expr ),+ $(,)? );* $(;)? ) => {
        $( $( $from.add_next_state(&$to); )+ )*
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;
    use std::rc::Rc;

    #[test]
    fn wires_every_declared_edge() {
        let a = State::new("a");
        let b = State::new("b");
        let c = State::new("c");

        allow! {
            a => b, c;
            b => a;
        }

        assert!(a.allows(&b));
        assert!(a.allows(&c));
        assert!(b.allows(&a));
        assert!(!c.allows(&a));
    }

    #[test]
    fn preserves_declaration_order_and_duplicates() {
        let a = State::new("a");
        let b = State::new("b");

        allow! {
            a => b, a, b;
        }

        let next = a.allowed_next();
        assert_eq!(next.len(), 3);
        assert!(Rc::ptr_eq(&next[0], &b));
        assert!(Rc::ptr_eq(&next[1], &a));
        assert!(Rc::ptr_eq(&next[2], &b));
    }

    #[test]
    fn single_edge_with_trailing_semicolon() {
        let a = State::new("a");
        let b = State::new("b");

        allow! { a => b; }

        assert!(a.allows(&b));
    }
}
