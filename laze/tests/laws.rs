// The algebraic laws the combinators promise: functor and monad laws,
// concat as a monoid over sequences, and the replay/purity guarantees
// everything else rests on.

use laze::{range, Sequence};

fn ints(values: &[i64]) -> Sequence<i64> {
    Sequence::from(values.to_vec())
}

#[test]
fn test_replay_equivalence() {
    let sequence = range(5).map(|x| x * x).filter(|x| x % 2 == 1);
    assert_eq!(sequence.to_vec(), sequence.to_vec());
}

#[test]
fn test_operators_do_not_mutate_input() {
    let sequence = range(5);
    let before = sequence.to_vec();
    let _ = sequence.map(|x| x + 1).to_vec();
    let _ = sequence.take(2).to_vec();
    let _ = sequence.reverse().to_vec();
    assert_eq!(sequence.to_vec(), before);
}

#[test]
fn test_functor_identity() {
    let sequence = range(5);
    assert_eq!(sequence.map(|x| x), sequence);
}

#[test]
fn test_functor_composition() {
    let f = |x: i64| x + 3;
    let g = |x: i64| x * 2;
    let sequence = range(5);
    assert_eq!(sequence.map(g).map(f), sequence.map(move |x| f(g(x))));
}

#[test]
fn test_monad_left_identity() {
    let sequence = range(5);
    assert_eq!(sequence.flat_map(Sequence::pure), sequence);
}

#[test]
fn test_monad_right_identity() {
    let f = |x: i64| Sequence::from(vec![x, -x]);
    assert_eq!(Sequence::pure(3).flat_map(f), f(3));
}

#[test]
fn test_concat_neutral_elements() {
    let sequence = ints(&[1, 2, 3]);
    assert_eq!(Sequence::empty().concat(&sequence), sequence);
    assert_eq!(sequence.concat(&Sequence::empty()), sequence);
}

#[test]
fn test_concat_associativity() {
    let a = ints(&[1]);
    let b = ints(&[2, 3]);
    let c = ints(&[4]);
    assert_eq!(a.concat(&b).concat(&c), a.concat(&b.concat(&c)));
}

#[test]
fn test_take_skip_complements() {
    let sequence = range(4);
    assert_eq!(sequence.take(0), Sequence::empty());
    assert_eq!(sequence.take(usize::MAX), sequence);
    assert_eq!(sequence.skip(0), sequence);
    assert_eq!(sequence.skip(usize::MAX), Sequence::empty());
}

#[test]
fn test_reject_is_filter_complement() {
    let sequence = range(9);
    let even = |x: &i64| x % 2 == 0;
    assert_eq!(sequence.reject(even), sequence.filter(move |x| !even(x)));
}
