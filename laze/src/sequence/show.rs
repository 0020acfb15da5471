// Bounded string rendering. Sequences may be infinite, so rendering is
// defined as truncating, never expanding.

use std::fmt;

use super::core::Sequence;

/// How many elements `Display` and `Debug` render at most.
pub const DEFAULT_SHOW_LIMIT: usize = 50;

/// Render up to `limit` elements as a bracketed, comma-joined string.
/// Longer sequences are truncated.
pub fn to_display_string<T: fmt::Display + 'static>(
    sequence: &Sequence<T>,
    limit: usize,
) -> String {
    let rendered: Vec<String> = sequence
        .iter()
        .take(limit)
        .map(|value| value.to_string())
        .collect();
    format!("[{}]", rendered.join(","))
}

impl<T: fmt::Display + 'static> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", to_display_string(self, DEFAULT_SHOW_LIMIT))
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().take(DEFAULT_SHOW_LIMIT))
            .finish()
    }
}
