use std::rc::Rc;

use super::core::Sequence;

/// A single-use cursor over a [`Sequence`].
///
/// The cursor is fused: once it has reported exhaustion it keeps reporting
/// exhaustion and never advances the underlying source again, so
/// caller-supplied step and predicate functions see no calls after the end.
pub struct SequenceIter<T> {
    inner: Box<dyn Iterator<Item = T>>,
    done: bool,
}

impl<T> SequenceIter<T> {
    pub(crate) fn new(inner: Box<dyn Iterator<Item = T>>) -> Self {
        Self { inner, done: false }
    }
}

impl<T> Iterator for SequenceIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(value) => Some(value),
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// The foundational cursor: threads an explicit private state through a
/// step function. Every constructor bottoms out here.
pub(crate) struct Unfold<S, F> {
    state: S,
    step: Rc<F>,
    done: bool,
}

impl<S, F> Unfold<S, F> {
    pub(crate) fn new(state: S, step: Rc<F>) -> Self {
        Self {
            state,
            step,
            done: false,
        }
    }
}

impl<S, T, F> Iterator for Unfold<S, F>
where
    F: Fn(&S) -> Option<(S, T)>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        // the step function must not run again once it has decided
        // on termination
        if self.done {
            return None;
        }
        match (self.step)(&self.state) {
            Some((state, value)) => {
                self.state = state;
                Some(value)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Emits all of the first cursor, then all of the second sequence.
///
/// The second sequence is not even asked for a cursor until the first is
/// exhausted, so concatenating behind an infinite sequence never observes
/// the second one.
pub(crate) struct Append<T> {
    first: SequenceIter<T>,
    second: Sequence<T>,
    second_iter: Option<SequenceIter<T>>,
}

impl<T: 'static> Append<T> {
    pub(crate) fn new(first: SequenceIter<T>, second: Sequence<T>) -> Self {
        Self {
            first,
            second,
            second_iter: None,
        }
    }
}

impl<T: 'static> Iterator for Append<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.second_iter.is_none() {
            if let Some(value) = self.first.next() {
                return Some(value);
            }
            self.second_iter = Some(self.second.iter());
        }
        // invariant: second_iter is present from here on
        self.second_iter.as_mut().and_then(|iter| iter.next())
    }
}

/// Repeats a sequence forever by re-acquiring a fresh cursor each time the
/// previous revolution is exhausted. An empty input produces an empty
/// cursor rather than a livelock.
pub(crate) struct Cycle<T> {
    sequence: Sequence<T>,
    current: SequenceIter<T>,
    done: bool,
}

impl<T: 'static> Cycle<T> {
    pub(crate) fn new(sequence: Sequence<T>) -> Self {
        let current = sequence.iter();
        Self {
            sequence,
            current,
            done: false,
        }
    }
}

impl<T: 'static> Iterator for Cycle<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        if let Some(value) = self.current.next() {
            return Some(value);
        }
        // revolution finished; if a fresh cursor is exhausted right away
        // the input is empty and cycling it stays empty
        let mut fresh = self.sequence.iter();
        match fresh.next() {
            Some(value) => {
                self.current = fresh;
                Some(value)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Flattens a sequence of sequences, pulling inner cursors on demand so
/// the outer sequence may be infinite.
pub(crate) struct Flatten<T> {
    outer: SequenceIter<Sequence<T>>,
    inner: Option<SequenceIter<T>>,
}

impl<T: 'static> Flatten<T> {
    pub(crate) fn new(outer: SequenceIter<Sequence<T>>) -> Self {
        Self { outer, inner: None }
    }
}

impl<T: 'static> Iterator for Flatten<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            // if there are any more values in the current inner cursor,
            // supply those
            if let Some(inner) = &mut self.inner {
                if let Some(value) = inner.next() {
                    return Some(value);
                }
                self.inner = None;
            }
            // if not, move on to the next inner sequence
            match self.outer.next() {
                Some(sequence) => {
                    self.inner = Some(sequence.iter());
                }
                None => return None,
            }
        }
    }
}
