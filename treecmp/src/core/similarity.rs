// src/core/similarity.rs
use serde::Serialize;
use std::mem;

/// Edit distance between two texts and the ratio derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Similarity {
    pub distance: u64,
    /// `max(len(a), len(b))` in characters.
    pub length: u64,
    pub ratio: f64,
}

/// Compares two whole texts character by character.
#[must_use]
pub fn compare(a: &str, b: &str) -> Similarity {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let distance = to_u64(levenshtein(&a, &b));
    let length = to_u64(a.len().max(b.len()));
    Similarity {
        distance,
        length,
        ratio: ratio(distance, length),
    }
}

/// Minimum number of single-character insertions, deletions or
/// substitutions turning `a` into `b`.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> u64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    to_u64(levenshtein(&a, &b))
}

/// `1 - distance / length`, or `1.0` when both texts are empty.
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn ratio(distance: u64, length: u64) -> f64 {
    if length == 0 {
        return 1.0;
    }
    1.0 - distance as f64 / length as f64
}

/// Two-row Levenshtein over the shorter input.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0; short.len() + 1];

    for (i, long_char) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, short_char) in short.iter().enumerate() {
            let substitution = previous[j] + usize::from(long_char != short_char);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}

fn to_u64(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
