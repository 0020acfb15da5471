use crate::sequence::{unfold, Sequence};

/// The infinite Fibonacci sequence, starting `0, 1, 1, 2, ...`.
pub fn fibonacci() -> Sequence<u64> {
    unfold((0u64, 1u64), |&(a, b)| Some(((b, a + b), a)))
}
