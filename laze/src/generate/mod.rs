//! Ready-made generator sequences built entirely from the engine's own
//! combinators. They double as worked examples of composing infinite
//! sequences.

mod fibonacci;
mod fizzbuzz;
mod primes;

pub use fibonacci::fibonacci;
pub use fizzbuzz::fizzbuzz;
pub use primes::primes;
