//! Unrestricted Damerau-Levenshtein distance.
//!
//! The minimum number of insertions, deletions, substitutions, and adjacent
//! transpositions needed to turn one sequence into another. Unlike the
//! optimal string alignment variant, a symbol may take part in several
//! transpositions along the edit path, so the distance satisfies the triangle
//! inequality and is a proper metric.
//!
//! Uses the Lowrance-Wagner table with an extra sentinel row and column, so
//! the transposition term can read "no earlier match" without branching.
//! The corner cell `h[0][0]` stays 0: the transposition it prices when no
//! earlier match exists costs `i + j - 1`, which never beats `max(i, j)`.
//!
//! # Complexity
//! * Time: O(n * m)
//! * Space: O(n * m) plus one entry per distinct symbol

use std::collections::HashMap;
use std::hash::Hash;

use crate::cs::dynamic::edit_distance::{DistanceMatrix, EditDistance};

/// Unit-cost Damerau-Levenshtein distance allowing repeated transpositions.
///
/// # Examples
///
/// ```
/// use damerau::{DamerauLevenshtein, EditDistance};
///
/// assert_eq!(DamerauLevenshtein.distance("", ""), 0);
/// assert_eq!(DamerauLevenshtein.distance("ab", "ba"), 1);
/// assert_eq!(DamerauLevenshtein.distance("ca", "abc"), 2);
/// assert_eq!(DamerauLevenshtein.distance("kitten", "sitting"), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein;

impl EditDistance for DamerauLevenshtein {
    fn distance_seq<T>(&self, a: &[T], b: &[T]) -> usize
    where
        T: Eq + Hash,
    {
        let n = a.len();
        let m = b.len();
        // Exceeds any real distance
        let max_possible = n + m;
        log::trace!("unrestricted distance table {}x{}", n + 2, m + 2);

        // Row each symbol was last seen at in `a`, 0 when not yet seen
        let mut last_row: HashMap<&T, usize> = a.iter().chain(b).map(|c| (c, 0)).collect();

        let mut h = DistanceMatrix::new(n + 2, m + 2);
        for i in 0..=n {
            h[(i + 1, 0)] = max_possible;
            h[(i + 1, 1)] = i;
        }
        for j in 0..=m {
            h[(0, j + 1)] = max_possible;
            h[(1, j + 1)] = j;
        }

        for i in 1..=n {
            // Latest column in this row where b matched a[i - 1]
            let mut db = 0;

            for j in 1..=m {
                let i1 = last_row.get(&b[j - 1]).copied().unwrap_or(0);
                let j1 = db;

                let cost = if a[i - 1] == b[j - 1] {
                    db = j;
                    0
                } else {
                    1
                };

                let substitution = h[(i, j)] + cost;
                let insertion = h[(i + 1, j)] + 1;
                let deletion = h[(i, j + 1)] + 1;
                // Everything strictly between the transposed symbols is
                // deleted or inserted, plus one for the swap itself
                let transposition = h[(i1, j1)] + (i - i1 - 1) + 1 + (j - j1 - 1);

                h[(i + 1, j + 1)] = substitution
                    .min(insertion)
                    .min(deletion)
                    .min(transposition);
            }

            last_row.insert(&a[i - 1], i);
        }

        h[(n + 1, m + 1)]
    }
}
