use crate::sequence::{repeat, unfold, Sequence};

// The divisibility pattern of a prime p, aligned to start at the value
// p + 1: an infinite cycle with period p whose `true` positions mark the
// multiples of p. Starting at p + 1, the first multiple is 2p, so the
// cycled block is p - 1 times `false` followed by one `true`.
fn divisibility_pattern(p: u64) -> Sequence<bool> {
    repeat(false).take(p as usize - 1).snoc(true).cycle()
}

/// The infinite sequence of prime numbers.
///
/// A sieve expressed in sequence algebra: the state carries the current
/// candidate together with a composite-marking pattern aligned at that
/// candidate. Whenever a candidate turns out prime, the pattern is
/// extended by zipping in the cycled divisibility pattern of the new
/// prime. No trial division takes place.
pub fn primes() -> Sequence<u64> {
    // before any prime is known, nothing is marked composite
    let initial = (2u64, repeat(false));
    unfold(initial, |(candidate, pattern)| {
        let mut candidate = *candidate;
        let mut pattern = pattern.clone();
        loop {
            let (is_composite, rest) = pattern
                .uncons()
                .expect("composite pattern sequence is infinite");
            if is_composite {
                candidate += 1;
                pattern = rest;
            } else {
                let next_pattern =
                    rest.zip_with(&divisibility_pattern(candidate), |a, b| a || b);
                return Some(((candidate + 1, next_pattern), candidate));
            }
        }
    })
}
