/// A sequence is an immutable, possibly-infinite producer of cursors. All
/// iteration state lives inside the cursor a sequence hands out, never in
/// the sequence itself, which is what makes every sequence replayable.
///
/// The modules are layered: `iter` holds the cursor types, `creation` the
/// constructors built on `unfold`, `ops` the sequence-to-sequence operators
/// and `terminal` the operators that force evaluation. `core` ties all of
/// them together as chainable methods on the sequence type.
mod builder;
mod conversion;
mod core;
mod creation;
mod iter;
pub mod ops;
pub(crate) mod show;
pub mod terminal;

pub use builder::SequenceBuilder;
pub use core::Sequence;
pub use creation::{iterate_while, range, range_between, range_step, repeat, unfold};
pub use iter::SequenceIter;
