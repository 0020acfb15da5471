use thiserror::Error;

/// Errors raised by terminal operators.
///
/// Intermediate operators never fail: they are total for any finite or
/// properly bounded infinite input. Only terminal operators that demand a
/// non-empty sequence can error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An extreme value was requested from an empty sequence.
    #[error("cannot select an extreme value from an empty sequence")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
