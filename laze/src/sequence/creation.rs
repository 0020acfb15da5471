// Constructors building sequences from a seed and step/stop rules. All of
// them bottom out in `unfold`, which is the one place where per-cursor
// mutable state is introduced.

use std::rc::Rc;

use super::core::Sequence;
use super::iter::Unfold;

/// Derive a sequence from a state-transition function.
///
/// `step` maps a state to `None` when the sequence is exhausted, or to the
/// next state and the value to emit now. Each fresh cursor seeds its own
/// private running state from a clone of `initial`, which is what lets the
/// same sequence be iterated repeatedly with identical output.
pub fn unfold<S, T, F>(initial: S, step: F) -> Sequence<T>
where
    S: Clone + 'static,
    T: 'static,
    F: Fn(&S) -> Option<(S, T)> + 'static,
{
    let step = Rc::new(step);
    Sequence::from_source(move || Box::new(Unfold::new(initial.clone(), Rc::clone(&step))))
}

/// Emit `start`, then keep applying `inc` while `while_fn` holds on the
/// current, pre-increment value.
///
/// The termination check happens before the increment: the final value is
/// included, and `inc` is never called once termination is decided.
pub fn iterate_while<T, W, F>(start: T, while_fn: W, inc: F) -> Sequence<T>
where
    T: Clone + 'static,
    W: Fn(&T) -> bool + 'static,
    F: Fn(&T) -> T + 'static,
{
    unfold(start, move |current| {
        if while_fn(current) {
            Some((inc(current), current.clone()))
        } else {
            None
        }
    })
}

/// An infinite sequence of the same value.
pub fn repeat<T: Clone + 'static>(value: T) -> Sequence<T> {
    iterate_while(value, |_| true, |v| v.clone())
}

/// The numbers from 0 up to and including `bound`.
pub fn range(bound: i64) -> Sequence<i64> {
    range_step(bound, 0, 1)
}

/// The numbers between `a` and `b` inclusive, in ascending order. The
/// boundaries may be given in either order.
pub fn range_between(a: i64, b: i64) -> Sequence<i64> {
    range_step(a, b, 1)
}

/// The numbers between `a` and `b` inclusive, stepping by `step`.
///
/// The boundaries are normalized so their order does not matter; the sign
/// of `step` decides the direction. A `step` of zero loops forever, which
/// is a caller error and deliberately not guarded.
pub fn range_step(a: i64, b: i64, step: i64) -> Sequence<i64> {
    let (left, right) = if a <= b { (a, b) } else { (b, a) };
    if step < 0 {
        iterate_while(right, move |v| *v >= left, move |v| v + step)
    } else {
        iterate_while(left, move |v| *v <= right, move |v| v + step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfold_replays_from_initial_state() {
        let sequence = unfold(0, |n| Some((n + 1, *n)));
        assert_eq!(sequence.take(3).to_vec(), vec![0, 1, 2]);
        // a second cursor starts over from the initial state
        assert_eq!(sequence.take(3).to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_iterate_while_includes_final_value() {
        let sequence = iterate_while(0, |n| *n <= 3, |n| n + 1);
        assert_eq!(sequence.to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_iterate_while_can_be_empty() {
        let sequence = iterate_while(5, |n| *n < 5, |n| n + 1);
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_range_boundaries_normalized() {
        assert_eq!(range_between(3, 0).to_vec(), range_between(0, 3).to_vec());
    }

    #[test]
    fn test_range_negative_step_descends() {
        assert_eq!(range_step(0, 3, -1).to_vec(), vec![3, 2, 1, 0]);
    }
}
