//! Number extraction and small number-theory helpers

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static SIGNED_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+").expect("integer pattern is valid"));

/// Every (optionally negative) integer appearing in `text`, in order.
///
/// Matches that don't fit `T` are skipped.
///
/// ```
/// use aoc_solutions::utils::numbers::extract_numbers;
///
/// let nums: Vec<i64> = extract_numbers("Sensor at x=2, y=-18: closest beacon is at x=-2, y=15");
/// assert_eq!(nums, vec![2, -18, -2, 15]);
/// ```
pub fn extract_numbers<T: FromStr>(text: &str) -> Vec<T> {
    SIGNED_INT
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Every unsigned integer in `text`; a `-` is treated as a separator.
pub fn extract_unsigned<T: FromStr>(text: &str) -> Vec<T> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// All divisors of `n`, ascending. `factors(12) == [1, 2, 3, 4, 6, 12]`.
pub fn factors(n: u64) -> Vec<u64> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i = 1;
    while i * i <= n {
        if n % i == 0 {
            low.push(i);
            if i != n / i {
                high.push(n / i);
            }
        }
        i += 1;
    }
    low.extend(high.into_iter().rev());
    low
}

pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 { 0 } else { a / gcd(a, b) * b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn extracts_signed_and_unsigned() {
        let text = "move 3 from 1 to -9";
        assert_eq!(extract_numbers::<i32>(text), vec![3, 1, -9]);
        assert_eq!(extract_unsigned::<u32>(text), vec![3, 1, 9]);
        assert_eq!(extract_unsigned::<u32>("2-4,6-8"), vec![2, 4, 6, 8]);
    }

    #[test]
    fn factors_of_small_numbers() {
        assert_eq!(factors(1), vec![1]);
        assert_eq!(factors(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(factors(49), vec![1, 7, 49]);
    }

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!([2u64, 3, 4, 5].into_iter().fold(1, lcm), 60);
    }

    proptest! {
        #[test]
        fn lcm_is_common_multiple(a in 1u64..10_000, b in 1u64..10_000) {
            let g = gcd(a, b);
            let l = lcm(a, b);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
            prop_assert_eq!(l % a, 0);
            prop_assert_eq!(l % b, 0);
            prop_assert_eq!(g * l, a * b);
        }

        #[test]
        fn factors_divide_and_pair_up(n in 1u64..50_000) {
            let fs = factors(n);
            prop_assert!(fs.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(fs.iter().all(|f| n % f == 0));
            prop_assert!(fs.iter().zip(fs.iter().rev()).all(|(lo, hi)| lo * hi == n));
        }

        #[test]
        fn extracted_numbers_survive_any_separator(
            nums in prop::collection::vec(-1000i64..1000, 0..10),
            sep in "[ ,:;=a-z]{1,3}",
        ) {
            let text = nums.iter().map(i64::to_string).collect::<Vec<_>>().join(&sep);
            prop_assert_eq!(extract_numbers::<i64>(&text), nums);
        }
    }
}
