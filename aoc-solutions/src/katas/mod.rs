//! Small practice exercises that are not Advent of Code puzzles

pub mod sudoku;

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Sub;

/// Run-length encode a string: `"aabbbcaa"` becomes `"2a3b1c2a"`.
pub fn run_length_encode(text: &str) -> String {
    let mut encoded = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.next_if_eq(&c).is_some() {
            run += 1;
        }
        encoded.push_str(&run.to_string());
        encoded.push(c);
    }
    encoded
}

/// The first pair (by position of its second element) summing to `target`.
///
/// Keeps a map from each value seen so far to its index, so every element is
/// looked at once.
pub fn pair_with_sum<T>(values: &[T], target: T) -> Option<(T, T)>
where
    T: Copy + Eq + Hash + Sub<Output = T>,
{
    let mut seen: HashMap<T, usize> = HashMap::new();
    for (i, &value) in values.iter().enumerate() {
        if let Some(&j) = seen.get(&(target - value)) {
            return Some((values[j], value));
        }
        seen.entry(value).or_insert(i);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_length() {
        assert_eq!(run_length_encode("aabbbcaa"), "2a3b1c2a");
        assert_eq!(run_length_encode("x"), "1x");
        assert_eq!(run_length_encode(""), "");
    }

    #[test]
    fn pair_sum() {
        assert_eq!(pair_with_sum(&[3, 5, 9, 6, 12, 15], 18), Some((6, 12)));
        assert_eq!(pair_with_sum(&[3, 15], 18), Some((3, 15)));
        assert_eq!(pair_with_sum(&[1, 2, 3], 100), None);
    }
}
