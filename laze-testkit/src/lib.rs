//! The standard operator battery for the laze sequence engine.
//!
//! Every operator is expected to survive the same checks: it produces the
//! expected output, it can be re-applied to the same input, its output
//! replays identically, and it leaves its input sequence untouched and
//! re-iterable. [`check_operator`] runs that battery; [`CallCount`] and
//! [`counted`] support the laziness checks ("no callback invocation after
//! done", "no callback for elements never pulled").
//!
//! All checks consume cursors, so inputs handed to the battery must be
//! finite (bound infinite sequences with `take` first).

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use laze::Sequence;

/// Run one operator through the standard battery.
///
/// Panics with a labelled assertion when any check fails, so it can be
/// used directly inside `#[test]` functions.
pub fn check_operator<T, U>(
    input: &Sequence<T>,
    operator: impl Fn(&Sequence<T>) -> Sequence<U>,
    expected: &[U],
) where
    T: PartialEq + Debug + 'static,
    U: PartialEq + Debug + 'static,
{
    let before = input.to_vec();

    // the transformation itself
    let output = operator(input);
    assert_eq!(output.to_vec(), expected, "operator output mismatch");

    // a second cursor over the same output sequence
    assert_eq!(output.to_vec(), expected, "output is not replayable");

    // re-running the operator on the same input
    let again = operator(input);
    assert_eq!(
        again.to_vec(),
        expected,
        "operator is not re-runnable on the same input"
    );

    // purity: the input sequence is unchanged and still re-iterable
    assert_eq!(input.to_vec(), before, "operator mutated its input");
}

/// A shared invocation counter for asserting how often a callback ran.
#[derive(Clone, Debug, Default)]
pub struct CallCount(Rc<Cell<usize>>);

impl CallCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// How many invocations were recorded so far.
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// Wrap `f` so every invocation bumps `count`.
pub fn counted<T, U>(count: &CallCount, f: impl Fn(T) -> U + 'static) -> impl Fn(T) -> U + 'static {
    let count = count.clone();
    move |value| {
        count.bump();
        f(value)
    }
}

/// Wrap a reference-taking predicate so every invocation bumps `count`.
pub fn counted_pred<T>(
    count: &CallCount,
    predicate: impl Fn(&T) -> bool + 'static,
) -> impl Fn(&T) -> bool + 'static {
    let count = count.clone();
    move |value| {
        count.bump();
        predicate(value)
    }
}
