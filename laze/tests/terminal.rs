use laze::{range, repeat, Error, Sequence};

#[test]
fn test_fold_sums() {
    assert_eq!(range(4).fold(0, |acc, x| acc + x), 10);
}

#[test]
fn test_fold_right_order() {
    // right fold over cons builds the list back unchanged
    let rebuilt = range(3).fold_right(Vec::new(), |x, mut acc| {
        acc.insert(0, x);
        acc
    });
    assert_eq!(rebuilt, vec![0, 1, 2, 3]);
}

#[test]
fn test_count() {
    assert_eq!(range(3).count(), 4);
    assert_eq!(Sequence::<i64>::empty().count(), 0);
}

#[test]
fn test_head() {
    assert_eq!(range(3).head(), Some(0));
    assert_eq!(Sequence::<i64>::empty().head(), None);
    // head peeks without consuming the sequence
    let sequence = range(3);
    let _ = sequence.head();
    assert_eq!(sequence.to_vec(), vec![0, 1, 2, 3]);
}

#[test]
fn test_is_empty() {
    assert!(Sequence::<i64>::empty().is_empty());
    assert!(!range(0).is_empty());
    // terminates on infinite input: only the first element is probed
    assert!(!repeat(1).is_empty());
}

#[test]
fn test_uncons() {
    let (first, tail) = range(3).uncons().unwrap();
    assert_eq!(first, 0);
    assert_eq!(tail.to_vec(), vec![1, 2, 3]);
    assert!(Sequence::<i64>::empty().uncons().is_none());
}

#[test]
fn test_equality_is_structural() {
    assert_eq!(Sequence::from(vec![1, 2, 3]), range(3).skip(1));
    assert_ne!(Sequence::from(vec![1, 2]), Sequence::from(vec![1, 2, 3]));
    assert_ne!(Sequence::from(vec![1, 2, 3]), Sequence::from(vec![1, 2, 4]));
    assert_eq!(Sequence::<i64>::empty(), Sequence::<i64>::empty());
}

#[test]
fn test_equality_does_not_consume_either_side() {
    let a = Sequence::from(vec![1, 2]);
    let b = Sequence::from(vec![1, 2]);
    assert_eq!(a, b);
    assert_eq!(a.to_vec(), vec![1, 2]);
    assert_eq!(b.to_vec(), vec![1, 2]);
}

#[test]
fn test_max() {
    let sequence = Sequence::from(vec![4, 3, 2, 5, 1, 0, 9]);
    assert_eq!(sequence.max(), Ok(9));
    assert_eq!(sequence.min(), Ok(0));
}

#[test]
fn test_max_of_empty_is_an_error() {
    let empty = Sequence::<i64>::empty();
    assert_eq!(empty.max(), Err(Error::EmptyInput));
    assert_eq!(empty.min(), Err(Error::EmptyInput));
}

#[test]
fn test_max_option_is_total() {
    assert_eq!(Sequence::<i64>::empty().max_option(), None);
    assert_eq!(Sequence::from(vec![2, 1]).max_option(), Some(2));
    assert_eq!(Sequence::from(vec![2, 1]).min_option(), Some(1));
}

#[test]
fn test_max_tie_keeps_earliest() {
    // two elements compare equal under the comparator; the first seen
    // must not be overwritten by the later one
    let sequence = Sequence::from(vec![(4, "low"), (9, "first"), (9, "second")]);
    let winner = sequence.max_by(|a, b| a.0 > b.0).unwrap();
    assert_eq!(winner.1, "first");
}

#[test]
fn test_min_tie_keeps_earliest() {
    let sequence = Sequence::from(vec![(9, "high"), (1, "first"), (1, "second")]);
    let winner = sequence.min_by(|a, b| a.0 < b.0).unwrap();
    assert_eq!(winner.1, "first");
}
