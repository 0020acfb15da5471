//! Laze is a lazy, replayable sequence engine.
//!
//! A [`Sequence`] is an immutable description of a possibly-infinite,
//! possibly-empty stream of values. Asking a sequence for a cursor with
//! [`Sequence::iter`] always yields a *fresh* cursor: the same sequence can
//! be iterated any number of times and always produces the same values, and
//! advancing one cursor is never observable through another.
//!
//! Sequences compose through purely functional operators (map, filter,
//! take/skip, zip, cycle, concatenation, monadic flat_map). Evaluation is
//! single-threaded and pull-based: nothing runs ahead of what the consumer
//! asks for.
//!
//! ```
//! use laze::range;
//!
//! let doubled = range(4).map(|x| 2 * x);
//! assert_eq!(doubled.to_vec(), vec![0, 2, 4, 6, 8]);
//! // the same sequence replays identically
//! assert_eq!(doubled.to_vec(), vec![0, 2, 4, 6, 8]);
//! ```

pub mod error;
pub mod generate;
mod sequence;

pub use error::{Error, Result};
pub use sequence::ops;
pub use sequence::ops::BoxedOperator;
pub use sequence::show::DEFAULT_SHOW_LIMIT;
pub use sequence::terminal;
pub use sequence::{iterate_while, range, range_between, range_step, repeat, unfold};
pub use sequence::{Sequence, SequenceBuilder, SequenceIter};
