//! Shared building blocks for the Damerau-Levenshtein engines.
//!
//! Both engines fill a dense dynamic programming table where cell `(i, j)`
//! holds the cheapest way to turn a prefix of the source into a prefix of the
//! target. The table lives for exactly one call and is never shared.

use rayon::prelude::*;
use std::hash::Hash;
use std::ops::{Index, IndexMut};

/// An edit distance between two sequences of comparable symbols.
///
/// Implementations are stateless apart from their configuration, so a single
/// engine may be shared freely between threads.
pub trait EditDistance: Send + Sync {
    /// Computes the distance from `a` (the source) to `b` (the target).
    fn distance_seq<T>(&self, a: &[T], b: &[T]) -> usize
    where
        T: Eq + Hash;

    /// Computes the distance between two strings, symbol by symbol over `char`s.
    ///
    /// # Examples
    ///
    /// ```
    /// use damerau::{DamerauLevenshtein, EditDistance};
    ///
    /// assert_eq!(DamerauLevenshtein.distance("café", "cfaé"), 1);
    /// ```
    fn distance(&self, a: &str, b: &str) -> usize {
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        self.distance_seq(&a_chars, &b_chars)
    }
}

/// Computes the distance for every `(source, target)` pair in parallel.
///
/// Results come back in the same order as `pairs`.
///
/// # Examples
///
/// ```
/// use damerau::{batch_distance, DamerauLevenshtein};
///
/// let pairs = [("ab", "ba"), ("kitten", "sitting"), ("", "abc")];
/// assert_eq!(batch_distance(&DamerauLevenshtein, &pairs), vec![1, 3, 3]);
/// ```
pub fn batch_distance<E, S>(engine: &E, pairs: &[(S, S)]) -> Vec<usize>
where
    E: EditDistance,
    S: AsRef<str> + Sync,
{
    pairs
        .par_iter()
        .map(|(a, b)| engine.distance(a.as_ref(), b.as_ref()))
        .collect()
}

/// Dense row-major table of prefix costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Creates a `rows x cols` matrix with every cell set to zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        DistanceMatrix {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of bounds");
        i * self.cols + j
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = usize;

    fn index(&self, (i, j): (usize, usize)) -> &usize {
        &self.cells[self.offset(i, j)]
    }
}

impl IndexMut<(usize, usize)> for DistanceMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut usize {
        let offset = self.offset(i, j);
        &mut self.cells[offset]
    }
}
