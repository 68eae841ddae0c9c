#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use yare::parameterized;

use super::*;

#[parameterized(
    single_unit = { "a", &[0] },
    no_repeats = { "ABCDE", &[0, 0, 0, 0, 0] },
    all_same = { "AAAA", &[0, 1, 2, 3] },
    two_period = { "ABABCABAB", &[0, 0, 1, 2, 0, 1, 2, 3, 4] },
    nested_borders = { "AABAACAABAA", &[0, 1, 0, 1, 2, 0, 1, 2, 3, 4, 5] },
    repeated_fallback = { "AAACAAAAAC", &[0, 1, 2, 0, 1, 2, 3, 3, 3, 4] },
)]
fn builds_longest_border_per_position(pattern: &str, expected: &[usize]) {
    let table = FailureTable::build(pattern.as_bytes());
    assert_eq!(table.as_slice(), expected);
}

#[test]
fn empty_pattern_has_no_entries() {
    let table = FailureTable::build::<u8>(&[]);
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert_eq!(table.get(0), None);
}

#[test]
fn has_one_entry_per_pattern_unit() {
    for pattern in ["x", "xy", "abcabcabd", "mississippi"] {
        let table = FailureTable::build(pattern.as_bytes());
        assert_eq!(table.len(), pattern.len(), "pattern {pattern:?}");
    }
}

#[test]
fn entries_are_proper_borders() {
    let pattern = b"abacabadabacaba";
    let table = FailureTable::build(pattern);
    for (i, &border) in table.as_slice().iter().enumerate() {
        assert!(border <= i, "entry {i} is not a proper prefix length");
        let prefix = &pattern[..=i];
        assert_eq!(&prefix[..border], &prefix[prefix.len() - border..]);
    }
}

#[test]
fn works_over_non_byte_units() {
    let pattern: Vec<char> = "ñañaña".chars().collect();
    let table = FailureTable::build(&pattern);
    assert_eq!(table.as_slice(), &[0, 0, 1, 2, 3, 4]);
}

#[test]
fn serializes_as_plain_array() {
    let table = FailureTable::build(b"abab");
    assert_eq!(serde_json::to_string(&table).unwrap(), "[0,0,1,2]");
}
