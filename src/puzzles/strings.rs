use std::iter;

use super::NotAscii;
use crate::collections::hash::{ChainingHashTable, ProbingHashTable};
use crate::sorting::merge_sort;

/// Returns true if no character appears in `s` more than once.
///
/// Each character is checked against a table of the characters seen so far, stopping at the first
/// repeat.
///
/// # Time Complexity
/// `O(n)` expected, with `O(n)` extra space.
///
/// # Examples
/// ```
/// # use classic_algorithms::puzzles::is_unique;
/// assert!(is_unique("mike"));
/// assert!(!is_unique("kinesis"));
/// ```
pub fn is_unique(s: &str) -> bool {
    let mut seen: ProbingHashTable<char, ()> = ProbingHashTable::new();
    s.chars().all(|c| seen.insert(c, ()).is_none())
}

/// Returns true if no character appears in `s` more than once, using a flag for each of the 128
/// ASCII characters in place of a hash table. Returns an [`Err`] if `s` isn't entirely ASCII.
///
/// Any ASCII string longer than 128 characters must repeat one of them, so it is rejected without
/// looking at its contents.
pub fn is_unique_ascii(s: &str) -> Result<bool, NotAscii> {
    NotAscii::check(s)?;

    if s.len() > 128 {
        return Ok(false);
    }

    let mut seen = [false; 128];
    for b in s.bytes() {
        let flag = &mut seen[usize::from(b)];
        if *flag {
            return Ok(false);
        }
        *flag = true;
    }

    Ok(true)
}

/// Returns true if `a` is a permutation of `b`, meaning that they contain exactly the same
/// characters the same number of times.
///
/// Characters of `a` count up and characters of `b` count down, so the two are permutations only
/// if every count ends at zero.
pub fn check_permutation(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut counts: ChainingHashTable<char, isize> = ChainingHashTable::new();
    let deltas = a.chars().map(|c| (c, 1)).chain(b.chars().map(|c| (c, -1)));

    for (c, delta) in deltas {
        match counts.get_mut(&c) {
            Some(count) => *count += delta,
            None => {
                counts.insert(c, delta);
            },
        }
    }

    counts.iter().all(|(_, count)| *count == 0)
}

/// Returns true if `a` is a permutation of `b`, by sorting the characters of each and comparing
/// them.
///
/// # Time Complexity
/// `O(n log n)`, dominated by the sort.
pub fn check_permutation_sort(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();
    merge_sort(&mut a);
    merge_sort(&mut b);

    a == b
}

/// Replaces every space in `s` with `%20`, after dropping any trailing spaces.
///
/// # Examples
/// ```
/// # use classic_algorithms::puzzles::urlify;
/// assert_eq!(urlify("Mr John Smith    "), "Mr%20John%20Smith");
/// ```
pub fn urlify(s: &str) -> String {
    let s = s.trim_end_matches(' ');
    let spaces = s.bytes().filter(|b| *b == b' ').count();

    let mut url = String::with_capacity(s.len() + 2 * spaces);
    for c in s.chars() {
        match c {
            ' ' => url.push_str("%20"),
            c => url.push(c),
        }
    }

    url
}

/// Returns true if the characters of `s` can be rearranged into a palindrome. Spaces are ignored
/// and letters are compared without case.
///
/// A palindrome can have at most one character that appears an odd number of times, its middle.
/// The table holds exactly the characters seen an odd number of times so far.
pub fn palindrome_permutation(s: &str) -> bool {
    let mut odd: ProbingHashTable<char, ()> = ProbingHashTable::new();

    for c in s.chars().filter(|c| *c != ' ').flat_map(char::to_lowercase) {
        if odd.remove(&c).is_none() {
            odd.insert(c, ());
        }
    }

    odd.len() <= 1
}

/// Returns true if `a` can be turned into `b` with at most one edit: inserting a character,
/// removing a character or replacing a character.
///
/// # Examples
/// ```
/// # use classic_algorithms::puzzles::one_away;
/// assert!(one_away("pale", "ple"));
/// assert!(one_away("pale", "bale"));
/// assert!(!one_away("pale", "bake"));
/// ```
pub fn one_away(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if longer.len() - shorter.len() > 1 {
        return false;
    }

    let (mut i, mut j) = (0, 0);
    let mut edited = false;

    while i < shorter.len() && j < longer.len() {
        if shorter[i] != longer[j] {
            if edited {
                return false;
            }
            edited = true;
            // A replacement moves past the character in both strings, an insertion only in the
            // longer one.
            if shorter.len() == longer.len() {
                i += 1;
            }
        } else {
            i += 1;
        }
        j += 1;
    }

    true
}

/// Compresses `s` by replacing each run of a repeated character with the character followed by
/// the length of the run. If that isn't shorter than `s`, `s` is returned unchanged.
///
/// # Examples
/// ```
/// # use classic_algorithms::puzzles::string_compression;
/// assert_eq!(string_compression("aabcccccaaa"), "a2b1c5a3");
/// assert_eq!(string_compression("abcd"), "abcd");
/// ```
pub fn string_compression(s: &str) -> String {
    let mut compressed = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        let run = 1 + iter::from_fn(|| chars.next_if_eq(&c)).count();
        compressed.push(c);
        compressed.push_str(&run.to_string());
    }

    if compressed.chars().count() < s.chars().count() {
        compressed
    } else {
        s.to_owned()
    }
}
