//! Terminal operators: they consume a fresh cursor and force evaluation.
//!
//! Several of these are finite-only. The engine does not try to detect
//! infinite input; a finite-only operator on an unbounded sequence hangs,
//! and bounding with `take` first is the caller's responsibility.

use crate::error;

use super::core::Sequence;
use super::ops;

/// Left fold: accumulate from `initial` over the elements in order.
pub fn fold<T: 'static, A>(sequence: &Sequence<T>, initial: A, f: impl Fn(A, T) -> A) -> A {
    let mut accumulator = initial;
    for value in sequence.iter() {
        accumulator = f(accumulator, value);
    }
    accumulator
}

/// Right fold. Finite-only: right-folding requires knowing the end, so
/// the sequence is collected first.
pub fn fold_right<T: 'static, A>(
    sequence: &Sequence<T>,
    initial: A,
    f: impl Fn(T, A) -> A,
) -> A {
    let values: Vec<T> = sequence.iter().collect();
    let mut accumulator = initial;
    for value in values.into_iter().rev() {
        accumulator = f(value, accumulator);
    }
    accumulator
}

/// Count the elements. Finite-only.
pub fn count<T: 'static>(sequence: &Sequence<T>) -> usize {
    sequence.iter().count()
}

/// The first element, if any. Peeks through a private cursor, so the
/// sequence itself is left untouched.
pub fn head<T: 'static>(sequence: &Sequence<T>) -> Option<T> {
    sequence.iter().next()
}

/// Check whether the sequence produces no elements.
pub fn is_empty<T: 'static>(sequence: &Sequence<T>) -> bool {
    sequence.iter().next().is_none()
}

/// Split into the first element and the sequence of everything after it.
/// The tail is itself replayable.
pub fn uncons<T: 'static>(sequence: &Sequence<T>) -> Option<(T, Sequence<T>)> {
    head(sequence).map(|first| (first, ops::skip(sequence, 1)))
}

/// Structural equality: consumes defensive fresh cursors of both sides
/// and compares element by element, including length. Finite-only.
pub fn sequence_eq<T: PartialEq + 'static>(a: &Sequence<T>, b: &Sequence<T>) -> bool {
    let mut a_iter = a.iter();
    let mut b_iter = b.iter();
    loop {
        match (a_iter.next(), b_iter.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x == y => continue,
            _ => return false,
        }
    }
}

/// The greatest element by a linear scan. `is_greater` decides whether a
/// candidate beats the best seen so far; the comparison is strict, so on
/// a tie the earliest-seen element is kept.
pub fn max_by<T: 'static>(
    sequence: &Sequence<T>,
    is_greater: impl Fn(&T, &T) -> bool,
) -> error::Result<T> {
    let mut iter = sequence.iter();
    let mut best = iter.next().ok_or(error::Error::EmptyInput)?;
    for candidate in iter {
        if is_greater(&candidate, &best) {
            best = candidate;
        }
    }
    Ok(best)
}

/// The greatest element by the natural order; earliest wins ties.
pub fn max<T: PartialOrd + 'static>(sequence: &Sequence<T>) -> error::Result<T> {
    max_by(sequence, |a, b| a > b)
}

/// The smallest element by a linear scan. `is_less` decides whether a
/// candidate beats the best seen so far; ties keep the earliest-seen
/// element.
pub fn min_by<T: 'static>(
    sequence: &Sequence<T>,
    is_less: impl Fn(&T, &T) -> bool,
) -> error::Result<T> {
    max_by(sequence, is_less)
}

/// The smallest element by the natural order; earliest wins ties.
pub fn min<T: PartialOrd + 'static>(sequence: &Sequence<T>) -> error::Result<T> {
    min_by(sequence, |a, b| a < b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::repeat;

    #[test]
    fn test_head_leaves_sequence_untouched() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(head(&sequence), Some(1));
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_head_of_infinite_sequence() {
        assert_eq!(head(&repeat(7)), Some(7));
    }

    #[test]
    fn test_uncons_tail_replays() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        let (first, tail) = uncons(&sequence).unwrap();
        assert_eq!(first, 1);
        assert_eq!(tail.to_vec(), vec![2, 3]);
        assert_eq!(tail.to_vec(), vec![2, 3]);
    }
}
