use std::collections::VecDeque;

use super::core::Sequence;
use super::ops;

/// An imperative accumulator for assembling a sequence from scalars and
/// nested sequences before committing it to an immutable sequence.
///
/// The builder has two states: *building*, in which `append`/`prepend`
/// record pieces, and *built*, entered by the first call to
/// [`SequenceBuilder::build`]. Once built, further appends and prepends
/// are fluent no-ops and a second `build` returns the canonical empty
/// sequence. This mirrors the tolerant contract of the original engine;
/// no error is raised for post-build use.
pub struct SequenceBuilder<T> {
    // segments in replay order; prepends go to the front, appends to the
    // back, so the latest prepend ends up first
    segments: VecDeque<Sequence<T>>,
    built: bool,
}

impl<T: 'static> SequenceBuilder<T> {
    /// A builder starting from nothing.
    pub fn new() -> Self {
        Self {
            segments: VecDeque::new(),
            built: false,
        }
    }

    /// A builder seeded with an initial sequence. Prepends land before
    /// the seed, appends after it.
    pub fn from_sequence(seed: Sequence<T>) -> Self {
        let mut segments = VecDeque::new();
        segments.push_back(seed);
        Self {
            segments,
            built: false,
        }
    }

    /// Record a single value at the end. Ignored once built.
    pub fn append(&mut self, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.append_seq(Sequence::pure(value))
    }

    /// Record a nested sequence at the end. Ignored once built.
    pub fn append_seq(&mut self, sequence: Sequence<T>) -> &mut Self {
        if !self.built {
            self.segments.push_back(sequence);
        }
        self
    }

    /// Record a single value at the front. Ignored once built.
    pub fn prepend(&mut self, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.prepend_seq(Sequence::pure(value))
    }

    /// Record a nested sequence at the front. Ignored once built.
    pub fn prepend_seq(&mut self, sequence: Sequence<T>) -> &mut Self {
        if !self.built {
            self.segments.push_front(sequence);
        }
        self
    }

    /// Commit the recorded pieces to an immutable sequence.
    ///
    /// The first call transitions the builder to *built* and returns the
    /// assembled sequence; any later call returns the empty sequence.
    pub fn build(&mut self) -> Sequence<T> {
        if self.built {
            return Sequence::empty();
        }
        self.built = true;
        let segments = std::mem::take(&mut self.segments);
        segments
            .into_iter()
            .fold(Sequence::empty(), |result, segment| {
                ops::concat(&result, &segment)
            })
    }
}

impl<T: 'static> Default for SequenceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
