// Conversions between sequences and native collections, and the std
// iteration protocol glue.

use std::rc::Rc;

use super::core::Sequence;
use super::iter::SequenceIter;

impl<T: Clone + 'static> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        // the vector is shared by all cursors; each cursor walks it with
        // its own private index and clones the values it emits
        let values = Rc::new(values);
        Sequence::from_source(move || {
            let values = Rc::clone(&values);
            Box::new((0..values.len()).map(move |index| values[index].clone()))
        })
    }
}

impl<T: Clone + 'static> From<&[T]> for Sequence<T> {
    fn from(values: &[T]) -> Self {
        values.to_vec().into()
    }
}

impl<T: Clone + 'static, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        values.to_vec().into()
    }
}

impl<T: Clone + 'static> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T: 'static> IntoIterator for &Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: 'static> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: 'static> Sequence<T> {
    /// Spread a finite sequence into a vector. Finite-only.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_round_trip() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        let mut total = 0;
        for value in &sequence {
            total += value;
        }
        assert_eq!(total, 6);
        // the loop consumed a cursor, not the sequence
        assert_eq!(sequence.count(), 3);
    }
}
