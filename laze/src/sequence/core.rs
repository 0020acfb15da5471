use std::rc::Rc;

use crate::error;

use super::iter::SequenceIter;
use super::{ops, terminal};

// A sequence owns nothing but a shared, reusable recipe for producing
// cursors. Cloning a sequence clones the recipe handle, not any values.
type Source<T> = Rc<dyn Fn() -> Box<dyn Iterator<Item = T>>>;

/// An immutable, possibly-infinite sequence of values.
///
/// A sequence carries no externally visible state: every call to
/// [`Sequence::iter`] builds a fresh cursor from scratch, so the same
/// sequence can be consumed any number of times with identical results.
/// Operators never mutate their input; they capture a cheap clone of it
/// and replay the transformation whenever their own output is iterated.
///
/// All operators are available both as free functions in [`ops`] and
/// [`terminal`] and as chainable methods here. The methods delegate to
/// the free functions one for one, so the two call styles cannot drift
/// apart.
pub struct Sequence<T> {
    source: Source<T>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
        }
    }
}

impl<T: 'static> Sequence<T> {
    pub(crate) fn from_source(
        source: impl Fn() -> Box<dyn Iterator<Item = T>> + 'static,
    ) -> Self {
        Self {
            source: Rc::new(source),
        }
    }

    /// Construct the canonical empty sequence.
    pub fn empty() -> Self {
        Self::from_source(|| Box::new(std::iter::empty()))
    }

    /// Construct a sequence of exactly one element.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_source(move || Box::new(std::iter::once(value.clone())))
    }

    /// Produce a fresh cursor over the sequence.
    ///
    /// Cursors are independent: advancing one is never observable through
    /// another, nor through the sequence itself.
    pub fn iter(&self) -> SequenceIter<T> {
        SequenceIter::new((self.source)())
    }

    // intermediate operators

    /// Apply `f` lazily to every element.
    pub fn map<U: 'static>(&self, f: impl Fn(T) -> U + 'static) -> Sequence<U> {
        ops::map(self, f)
    }

    /// Keep only the elements satisfying `predicate`.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool + 'static) -> Sequence<T> {
        ops::filter(self, predicate)
    }

    /// Drop the elements satisfying `predicate`.
    pub fn reject(&self, predicate: impl Fn(&T) -> bool + 'static) -> Sequence<T> {
        ops::reject(self, predicate)
    }

    /// Emit elements until the first one that fails `predicate`, which is
    /// not emitted.
    pub fn take_while(&self, predicate: impl Fn(&T) -> bool + 'static) -> Sequence<T> {
        ops::take_while(self, predicate)
    }

    /// Skip the leading elements satisfying `predicate`, then pass
    /// everything else through, even elements that satisfy it again.
    pub fn skip_while(&self, predicate: impl Fn(&T) -> bool + 'static) -> Sequence<T> {
        ops::skip_while(self, predicate)
    }

    /// At most the first `n` elements.
    pub fn take(&self, n: usize) -> Sequence<T> {
        ops::take(self, n)
    }

    /// Everything but the first `n` elements.
    pub fn skip(&self, n: usize) -> Sequence<T> {
        ops::skip(self, n)
    }

    /// Prepend a single element.
    pub fn cons(&self, value: T) -> Sequence<T>
    where
        T: Clone,
    {
        ops::cons(self, value)
    }

    /// Append a single element.
    pub fn snoc(&self, value: T) -> Sequence<T>
    where
        T: Clone,
    {
        ops::snoc(self, value)
    }

    /// All of this sequence, then all of `other`.
    pub fn concat(&self, other: &Sequence<T>) -> Sequence<T> {
        ops::concat(self, other)
    }

    /// Repeat this sequence forever. Cycling an empty sequence is empty.
    pub fn cycle(&self) -> Sequence<T> {
        ops::cycle(self)
    }

    /// Pair up with `other`; stops with the shorter of the two.
    pub fn zip<U: 'static>(&self, other: &Sequence<U>) -> Sequence<(T, U)> {
        ops::zip(self, other)
    }

    /// Combine pairwise with `other` through `f`; stops with the shorter
    /// of the two.
    pub fn zip_with<U: 'static, V: 'static>(
        &self,
        other: &Sequence<U>,
        f: impl Fn(T, U) -> V + 'static,
    ) -> Sequence<V> {
        ops::zip_with(self, other, f)
    }

    /// Monadic bind: map every element to a sequence and flatten.
    pub fn flat_map<U: 'static>(&self, f: impl Fn(T) -> Sequence<U> + 'static) -> Sequence<U> {
        ops::flat_map(self, f)
    }

    /// Re-emit the elements in reverse order.
    ///
    /// Finite-only: the sequence is materialized when the output is
    /// iterated, so this hangs on infinite input.
    pub fn reverse(&self) -> Sequence<T> {
        ops::reverse(self)
    }

    /// Pass elements through unchanged, invoking `f` once per element that
    /// is actually pulled downstream.
    pub fn inspect(&self, f: impl Fn(&T) + 'static) -> Sequence<T> {
        ops::inspect(self, f)
    }

    /// Apply same-type operators left to right.
    pub fn pipe(&self, operators: Vec<ops::BoxedOperator<T, T>>) -> Sequence<T> {
        ops::pipe(self, operators)
    }

    // terminal operators

    /// Left fold into an accumulator.
    pub fn fold<A>(&self, initial: A, f: impl Fn(A, T) -> A) -> A {
        terminal::fold(self, initial, f)
    }

    /// Right fold into an accumulator. Finite-only.
    pub fn fold_right<A>(&self, initial: A, f: impl Fn(T, A) -> A) -> A {
        terminal::fold_right(self, initial, f)
    }

    /// Count the elements. Finite-only: hangs on infinite input, so bound
    /// with [`Sequence::take`] first.
    pub fn count(&self) -> usize {
        terminal::count(self)
    }

    /// The first element, if any. The sequence itself is not consumed.
    pub fn head(&self) -> Option<T> {
        terminal::head(self)
    }

    /// Check whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        terminal::is_empty(self)
    }

    /// Split into the first element and the remaining sequence.
    pub fn uncons(&self) -> Option<(T, Sequence<T>)> {
        terminal::uncons(self)
    }

    /// The greatest element, where `is_greater` decides whether a
    /// candidate beats the best seen so far. On a tie the earliest-seen
    /// element wins.
    pub fn max_by(&self, is_greater: impl Fn(&T, &T) -> bool) -> error::Result<T> {
        terminal::max_by(self, is_greater)
    }

    /// The greatest element by the natural order; earliest wins ties.
    pub fn max(&self) -> error::Result<T>
    where
        T: PartialOrd,
    {
        terminal::max(self)
    }

    /// The smallest element, where `is_less` decides whether a candidate
    /// beats the best seen so far. On a tie the earliest-seen element
    /// wins.
    pub fn min_by(&self, is_less: impl Fn(&T, &T) -> bool) -> error::Result<T> {
        terminal::min_by(self, is_less)
    }

    /// The smallest element by the natural order; earliest wins ties.
    pub fn min(&self) -> error::Result<T>
    where
        T: PartialOrd,
    {
        terminal::min(self)
    }

    /// Total variant of [`Sequence::max`].
    pub fn max_option(&self) -> Option<T>
    where
        T: PartialOrd,
    {
        terminal::max(self).ok()
    }

    /// Total variant of [`Sequence::min`].
    pub fn min_option(&self) -> Option<T>
    where
        T: PartialOrd,
    {
        terminal::min(self).ok()
    }

    /// Render up to `limit` elements as a bracketed, comma-joined string.
    pub fn to_display_string(&self, limit: usize) -> String
    where
        T: std::fmt::Display,
    {
        super::show::to_display_string(self, limit)
    }
}

impl<T: 'static> Sequence<Sequence<T>> {
    /// Concatenate all inner sequences, lazily in the outer one. This is
    /// the flattening primitive behind [`Sequence::flat_map`].
    pub fn flatten(&self) -> Sequence<T> {
        ops::flatten(self)
    }
}

impl<T: 'static> Sequence<Option<T>> {
    /// Drop the `None` markers, passing `Some` values through in order.
    pub fn flatten_options(&self) -> Sequence<T> {
        ops::flatten_options(self)
    }
}

/// Structural equality by consuming defensive fresh cursors of both
/// sides. Only meaningful on finite sequences.
impl<T: PartialEq + 'static> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        terminal::sequence_eq(self, other)
    }
}
