use crate::sequence::{iterate_while, repeat, Sequence};

// A word that fires every `period` positions, as an infinite cycled
// pattern: period - 1 blanks followed by the word.
fn word_pattern(word: &str, period: usize) -> Sequence<String> {
    repeat(String::new())
        .take(period - 1)
        .snoc(word.to_string())
        .cycle()
}

/// The classic FizzBuzz, as an infinite sequence starting at 1.
///
/// Built by zipping the counting numbers against cycled word patterns:
/// no modulo arithmetic is involved.
pub fn fizzbuzz() -> Sequence<String> {
    let fizzes = word_pattern("Fizz", 3);
    let buzzes = word_pattern("Buzz", 5);
    let words = fizzes.zip_with(&buzzes, |fizz, buzz| format!("{fizz}{buzz}"));
    let numbers = iterate_while(1i64, |_| true, |n| n + 1);
    numbers.zip_with(&words, |number, word| {
        if word.is_empty() {
            number.to_string()
        } else {
            word
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fizzbuzz_prefix() {
        assert_eq!(
            fizzbuzz().take(15).to_vec(),
            vec![
                "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11",
                "Fizz", "13", "14", "FizzBuzz"
            ]
        );
    }
}
