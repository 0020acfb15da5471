//! Intermediate operators: pure sequence-to-sequence transformations.
//!
//! Every operator captures a cheap clone of its input sequence and builds
//! its cursor chain from scratch each time its own output is asked for a
//! cursor. Mutable iteration state (counters, flags) therefore lives
//! inside the cursor of a single iteration and is never shared across
//! iterations of the output.

use std::rc::Rc;

use super::core::Sequence;
use super::iter::{Append, Cycle, Flatten};

/// A boxed same-type operator, as consumed by [`pipe`].
pub type BoxedOperator<T, U> = Box<dyn Fn(&Sequence<T>) -> Sequence<U>>;

/// Apply `f` lazily to every element.
///
/// `f` is never called once the inner cursor is done.
pub fn map<T: 'static, U: 'static>(
    sequence: &Sequence<T>,
    f: impl Fn(T) -> U + 'static,
) -> Sequence<U> {
    let sequence = sequence.clone();
    let f = Rc::new(f);
    Sequence::from_source(move || {
        let f = Rc::clone(&f);
        Box::new(sequence.iter().map(move |value| f(value)))
    })
}

/// Keep only the elements satisfying `predicate`.
pub fn filter<T: 'static>(
    sequence: &Sequence<T>,
    predicate: impl Fn(&T) -> bool + 'static,
) -> Sequence<T> {
    let sequence = sequence.clone();
    let predicate = Rc::new(predicate);
    Sequence::from_source(move || {
        let predicate = Rc::clone(&predicate);
        Box::new(sequence.iter().filter(move |value| predicate(value)))
    })
}

/// Drop the elements satisfying `predicate`: the complement of [`filter`].
pub fn reject<T: 'static>(
    sequence: &Sequence<T>,
    predicate: impl Fn(&T) -> bool + 'static,
) -> Sequence<T> {
    filter(sequence, move |value| !predicate(value))
}

/// Emit elements until the first one failing `predicate`. That element is
/// neither consumed downstream nor emitted.
pub fn take_while<T: 'static>(
    sequence: &Sequence<T>,
    predicate: impl Fn(&T) -> bool + 'static,
) -> Sequence<T> {
    let sequence = sequence.clone();
    let predicate = Rc::new(predicate);
    Sequence::from_source(move || {
        let predicate = Rc::clone(&predicate);
        Box::new(sequence.iter().take_while(move |value| predicate(value)))
    })
}

/// Skip the leading elements satisfying `predicate`, then pass all
/// remaining elements through unconditionally, including ones that would
/// satisfy it again.
pub fn skip_while<T: 'static>(
    sequence: &Sequence<T>,
    predicate: impl Fn(&T) -> bool + 'static,
) -> Sequence<T> {
    let sequence = sequence.clone();
    let predicate = Rc::new(predicate);
    Sequence::from_source(move || {
        let predicate = Rc::clone(&predicate);
        Box::new(sequence.iter().skip_while(move |value| predicate(value)))
    })
}

/// At most the first `n` elements. The counter belongs to a single cursor,
/// so iterating the output twice yields the first `n` elements twice.
pub fn take<T: 'static>(sequence: &Sequence<T>, n: usize) -> Sequence<T> {
    let sequence = sequence.clone();
    Sequence::from_source(move || Box::new(sequence.iter().take(n)))
}

/// Everything but the first `n` elements.
pub fn skip<T: 'static>(sequence: &Sequence<T>, n: usize) -> Sequence<T> {
    let sequence = sequence.clone();
    Sequence::from_source(move || Box::new(sequence.iter().skip(n)))
}

/// Prepend a single element.
pub fn cons<T: Clone + 'static>(sequence: &Sequence<T>, value: T) -> Sequence<T> {
    let sequence = sequence.clone();
    Sequence::from_source(move || {
        Box::new(std::iter::once(value.clone()).chain(sequence.iter()))
    })
}

/// Append a single element.
pub fn snoc<T: Clone + 'static>(sequence: &Sequence<T>, value: T) -> Sequence<T> {
    concat(sequence, &Sequence::pure(value))
}

/// All of `first`, then all of `second`.
///
/// Empty sequences are left and right neutral and the operation is
/// associative. The second sequence is not asked for a cursor until the
/// first is exhausted, so an infinite first sequence never observes the
/// second.
pub fn concat<T: 'static>(first: &Sequence<T>, second: &Sequence<T>) -> Sequence<T> {
    let first = first.clone();
    let second = second.clone();
    Sequence::from_source(move || Box::new(Append::new(first.iter(), second.clone())))
}

/// Infinitely repeat a finite sequence, re-acquiring a fresh cursor of it
/// for every revolution. Cycling an empty sequence yields the empty
/// sequence rather than looping on nothing.
pub fn cycle<T: 'static>(sequence: &Sequence<T>) -> Sequence<T> {
    let sequence = sequence.clone();
    Sequence::from_source(move || Box::new(Cycle::new(sequence.clone())))
}

/// Pair up two sequences; the result is as long as the shorter one.
pub fn zip<T: 'static, U: 'static>(a: &Sequence<T>, b: &Sequence<U>) -> Sequence<(T, U)> {
    let a = a.clone();
    let b = b.clone();
    Sequence::from_source(move || Box::new(a.iter().zip(b.iter())))
}

/// Combine two sequences pairwise through `f`; the result is as long as
/// the shorter one.
pub fn zip_with<T: 'static, U: 'static, V: 'static>(
    a: &Sequence<T>,
    b: &Sequence<U>,
    f: impl Fn(T, U) -> V + 'static,
) -> Sequence<V> {
    let a = a.clone();
    let b = b.clone();
    let f = Rc::new(f);
    Sequence::from_source(move || {
        let f = Rc::clone(&f);
        Box::new(a.iter().zip(b.iter()).map(move |(x, y)| f(x, y)))
    })
}

/// Concatenate all inner sequences. Lazy in the outer sequence: an inner
/// cursor is acquired only when the previous one is exhausted.
pub fn flatten<T: 'static>(sequence: &Sequence<Sequence<T>>) -> Sequence<T> {
    let sequence = sequence.clone();
    Sequence::from_source(move || Box::new(Flatten::new(sequence.iter())))
}

/// Monadic bind: map every element to a sequence through `f` and flatten.
///
/// Satisfies left identity (`flat_map(pure)` is the identity) and is safe
/// with one infinite branch as long as only finitely many outer elements
/// are consumed.
pub fn flat_map<T: 'static, U: 'static>(
    sequence: &Sequence<T>,
    f: impl Fn(T) -> Sequence<U> + 'static,
) -> Sequence<U> {
    flatten(&map(sequence, f))
}

/// Drop the `None` markers from a sequence of optional values, passing
/// the present values through in order.
pub fn flatten_options<T: 'static>(sequence: &Sequence<Option<T>>) -> Sequence<T> {
    let sequence = sequence.clone();
    Sequence::from_source(move || Box::new(sequence.iter().flatten()))
}

/// Re-emit the elements in reverse order.
///
/// Finite-only: the input is materialized every time the output is
/// iterated, so this hangs on infinite input.
pub fn reverse<T: 'static>(sequence: &Sequence<T>) -> Sequence<T> {
    let sequence = sequence.clone();
    Sequence::from_source(move || {
        let mut values: Vec<T> = sequence.iter().collect();
        values.reverse();
        Box::new(values.into_iter())
    })
}

/// Pass elements through unchanged, invoking `f` once for every element
/// actually pulled downstream. Elements that are never pulled never
/// trigger the callback.
pub fn inspect<T: 'static>(sequence: &Sequence<T>, f: impl Fn(&T) + 'static) -> Sequence<T> {
    let sequence = sequence.clone();
    let f = Rc::new(f);
    Sequence::from_source(move || {
        let f = Rc::clone(&f);
        Box::new(sequence.iter().inspect(move |value| f(value)))
    })
}

/// Apply `operators` to `sequence` left to right.
///
/// Composition happens immediately but evaluation stays lazy: the
/// resulting sequence pulls through the whole chain on demand. Operators
/// that change the element type compose through method chaining instead.
pub fn pipe<T: 'static>(
    sequence: &Sequence<T>,
    operators: Vec<BoxedOperator<T, T>>,
) -> Sequence<T> {
    let mut result = sequence.clone();
    for operator in &operators {
        result = operator(&result);
    }
    result
}
