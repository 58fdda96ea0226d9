//! Cost-configurable Damerau-Levenshtein distance.
//!
//! Computes the minimum cost of turning a source sequence into a target
//! sequence with four operations, each carrying its own cost:
//!
//! - Deletion of a symbol
//! - Insertion of a symbol
//! - Substitution of one symbol for another
//! - Swap of two adjacent symbols
//!
//! A swap applies when two adjacent source symbols match two adjacent target
//! symbols in reverse order. Symbols strictly between the two swapped
//! positions are deleted from the source or inserted into the target.
//!
//! The costs must satisfy `2 * swap >= insert + delete`. Under that constraint
//! no optimal edit path ever moves the same symbol with two swaps, which lets
//! the table be filled in `O(n * m)` time and space instead of
//! `O(n * m * max(n, m))`.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cs::dynamic::edit_distance::{DistanceMatrix, EditDistance};
use crate::error::{Error, Result};

/// Costs of the four edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CostModel {
    /// Cost of deleting a source symbol
    pub delete: usize,
    /// Cost of inserting a target symbol
    pub insert: usize,
    /// Cost of replacing a source symbol with a target symbol
    pub substitute: usize,
    /// Cost of swapping two adjacent symbols
    pub swap: usize,
}

impl CostModel {
    pub fn new(delete: usize, insert: usize, substitute: usize, swap: usize) -> Self {
        CostModel {
            delete,
            insert,
            substitute,
            swap,
        }
    }

    /// Every operation costs one.
    pub fn unit() -> Self {
        Self::new(1, 1, 1, 1)
    }

    /// Checks that `2 * swap >= insert + delete`.
    pub fn validate(&self) -> Result<()> {
        if self.swap.saturating_mul(2) < self.insert.saturating_add(self.delete) {
            return Err(Error::InvalidCostConfiguration {
                delete: self.delete,
                insert: self.insert,
                swap: self.swap,
            });
        }
        Ok(())
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::unit()
    }
}

/// Damerau-Levenshtein distance with configurable operation costs.
///
/// # Examples
///
/// ```
/// use damerau::{EditDistance, RestrictedDamerauLevenshtein};
///
/// let engine = RestrictedDamerauLevenshtein::new(1, 1, 1, 1).unwrap();
/// assert_eq!(engine.distance("ab", "ba"), 1);
/// assert_eq!(engine.distance("CA", "ABC"), 2);
///
/// // Deleting and inserting is cheaper than an expensive substitution
/// let engine = RestrictedDamerauLevenshtein::new(1, 1, 5, 1).unwrap();
/// assert_eq!(engine.distance("abc", "xyz"), 6);
///
/// // Two swaps must never beat a delete and an insert
/// assert!(RestrictedDamerauLevenshtein::new(1, 1, 1, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictedDamerauLevenshtein {
    costs: CostModel,
}

impl RestrictedDamerauLevenshtein {
    /// Creates an engine with the given operation costs.
    ///
    /// # Arguments
    ///
    /// * `delete` - Cost of deleting a symbol
    /// * `insert` - Cost of inserting a symbol
    /// * `substitute` - Cost of replacing a symbol
    /// * `swap` - Cost of swapping two adjacent symbols
    ///
    /// # Returns
    ///
    /// The engine, or `Error::InvalidCostConfiguration` when `2 * swap < insert + delete`
    pub fn new(delete: usize, insert: usize, substitute: usize, swap: usize) -> Result<Self> {
        Self::with_costs(CostModel::new(delete, insert, substitute, swap))
    }

    /// Creates an engine from an existing cost model.
    pub fn with_costs(costs: CostModel) -> Result<Self> {
        if let Err(e) = costs.validate() {
            log::warn!("rejecting cost model {:?}: {}", costs, e);
            return Err(e);
        }
        log::debug!("restricted Damerau-Levenshtein engine with {:?}", costs);
        Ok(RestrictedDamerauLevenshtein { costs })
    }

    /// Creates an engine where every operation costs one.
    pub fn unit() -> Self {
        RestrictedDamerauLevenshtein {
            costs: CostModel::unit(),
        }
    }

    pub fn costs(&self) -> CostModel {
        self.costs
    }
}

impl Default for RestrictedDamerauLevenshtein {
    fn default() -> Self {
        Self::unit()
    }
}

impl EditDistance for RestrictedDamerauLevenshtein {
    fn distance_seq<T>(&self, a: &[T], b: &[T]) -> usize
    where
        T: Eq + Hash,
    {
        let CostModel {
            delete,
            insert,
            substitute,
            swap,
        } = self.costs;

        // No swap is possible once one side is empty
        if a.is_empty() {
            return b.len().saturating_mul(insert);
        } else if b.is_empty() {
            return a.len().saturating_mul(delete);
        }

        let n = a.len();
        let m = b.len();
        log::trace!("restricted distance table {}x{}", n, m);

        // Sums saturate at usize::MAX so an oversized candidate loses the min
        // instead of wrapping around
        let add = |x: usize, y: usize| x.saturating_add(y);
        let mul = |x: usize, y: usize| x.saturating_mul(y);
        let substitution = |x: &T, y: &T| if x == y { 0 } else { substitute };

        // Cell (i, j) holds the cost for the prefixes a[..=i] and b[..=j]
        let mut dist = DistanceMatrix::new(n, m);
        // Most recent source row holding each symbol
        let mut last_row: HashMap<&T, usize> = HashMap::new();

        if a[0] != b[0] {
            dist[(0, 0)] = substitute.min(add(delete, insert));
        }
        last_row.insert(&a[0], 0);

        for i in 1..n {
            let delete_distance = add(dist[(i - 1, 0)], delete);
            let insert_distance = add(mul(i + 1, delete), insert);
            let match_distance = add(mul(i, delete), substitution(&a[i], &b[0]));
            dist[(i, 0)] = delete_distance.min(insert_distance).min(match_distance);
        }

        for j in 1..m {
            let delete_distance = add(mul(j + 1, insert), delete);
            let insert_distance = add(dist[(0, j - 1)], insert);
            let match_distance = add(mul(j, insert), substitution(&a[0], &b[j]));
            dist[(0, j)] = delete_distance.min(insert_distance).min(match_distance);
        }

        for i in 1..n {
            // Latest column in this row where b matched a[i]
            let mut last_match_col = if a[i] == b[0] { Some(0) } else { None };

            for j in 1..m {
                let swap_row = last_row.get(&b[j]).copied();
                let swap_col = last_match_col;

                let delete_distance = add(dist[(i - 1, j)], delete);
                let insert_distance = add(dist[(i, j - 1)], insert);
                let match_distance = add(dist[(i - 1, j - 1)], substitution(&a[i], &b[j]));
                if a[i] == b[j] {
                    last_match_col = Some(j);
                }

                let swap_distance = match (swap_row, swap_col) {
                    (Some(i_swap), Some(j_swap)) => {
                        let pre_swap_cost = if i_swap == 0 && j_swap == 0 {
                            0
                        } else {
                            dist[(i_swap.saturating_sub(1), j_swap.saturating_sub(1))]
                        };
                        add(
                            add(pre_swap_cost, mul(i - i_swap - 1, delete)),
                            add(mul(j - j_swap - 1, insert), swap),
                        )
                    }
                    _ => usize::MAX,
                };

                dist[(i, j)] = delete_distance
                    .min(insert_distance)
                    .min(match_distance)
                    .min(swap_distance);
            }

            last_row.insert(&a[i], i);
        }

        dist[(n - 1, m - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(
        delete: usize,
        insert: usize,
        substitute: usize,
        swap: usize,
    ) -> RestrictedDamerauLevenshtein {
        RestrictedDamerauLevenshtein::new(delete, insert, substitute, swap).unwrap()
    }

    #[test]
    fn test_invalid_costs() {
        assert_eq!(
            RestrictedDamerauLevenshtein::new(1, 1, 1, 0),
            Err(Error::InvalidCostConfiguration {
                delete: 1,
                insert: 1,
                swap: 0,
            })
        );
        assert!(RestrictedDamerauLevenshtein::new(3, 4, 1, 3).is_err());
        assert!(RestrictedDamerauLevenshtein::with_costs(CostModel::new(2, 2, 1, 1)).is_err());
        // Would wrap without saturating arithmetic
        assert!(
            RestrictedDamerauLevenshtein::new(usize::MAX, usize::MAX, 1, usize::MAX / 2).is_err()
        );
    }

    #[test]
    fn test_boundary_costs_accepted() {
        assert!(RestrictedDamerauLevenshtein::new(3, 5, 1, 4).is_ok());
        assert!(RestrictedDamerauLevenshtein::new(0, 0, 0, 0).is_ok());
        assert!(CostModel::new(1, 3, 9, 2).validate().is_ok());
    }

    #[test]
    fn test_error_message() {
        let err = RestrictedDamerauLevenshtein::new(2, 3, 1, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported cost assignment: 2 * swap (2) must be >= insert (3) + delete (2)"
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(CostModel::default(), CostModel::unit());
        assert_eq!(
            RestrictedDamerauLevenshtein::default().costs(),
            CostModel::new(1, 1, 1, 1)
        );
    }

    #[test]
    fn test_empty() {
        let e = engine(2, 3, 1, 3);
        assert_eq!(e.distance("", ""), 0);
        assert_eq!(e.distance("", "abc"), 9);
        assert_eq!(e.distance("abc", ""), 6);
    }

    #[test]
    fn test_identity() {
        let e = engine(2, 3, 1, 3);
        for s in ["a", "ab", "abcabc", "hello world"] {
            assert_eq!(e.distance(s, s), 0);
        }
    }

    #[test]
    fn test_unit_costs() {
        let e = RestrictedDamerauLevenshtein::unit();
        assert_eq!(e.distance("ab", "ba"), 1);
        assert_eq!(e.distance("a", "b"), 1);
        assert_eq!(e.distance("ab", "b"), 1);
        assert_eq!(e.distance("abc", "acb"), 1);
        assert_eq!(e.distance("abcd", "bacd"), 1);
        assert_eq!(e.distance("hello", "ehllo"), 1);
        assert_eq!(e.distance("kitten", "sitting"), 3);
        assert_eq!(e.distance("abcdef", "badcfe"), 3);
    }

    #[test]
    fn test_swap_with_gap() {
        // Swap C/A and insert B between them
        let e = RestrictedDamerauLevenshtein::unit();
        assert_eq!(e.distance("CA", "ABC"), 2);
        assert_eq!(e.distance("ca", "abc"), 2);
        assert_eq!(e.distance("abc", "ca"), 2);
        assert_eq!(e.distance("ba", "abc"), 2);
    }

    #[test]
    fn test_weighted_costs() {
        // Swap cheaper than two substitutions
        assert_eq!(engine(3, 3, 5, 3).distance("ab", "ba"), 3);
        assert_eq!(engine(1, 1, 1, 2).distance("ab", "ba"), 2);
        // Delete then insert beats both a swap and substitutions
        assert_eq!(engine(1, 1, 3, 10).distance("ab", "ba"), 2);

        assert_eq!(engine(1, 1, 5, 1).distance("abc", "xyz"), 6);
        assert_eq!(engine(2, 3, 10, 3).distance("abc", "abd"), 5);
        assert_eq!(engine(1, 1, 5, 1).distance("a", "b"), 2);
        assert_eq!(engine(1, 2, 5, 2).distance("a", "b"), 3);
        assert_eq!(engine(2, 2, 1, 2).distance("kitten", "sitting"), 4);
    }

    #[test]
    fn test_asymmetric_costs() {
        let e = engine(4, 1, 1, 3);
        assert_eq!(e.distance("abc", "ab"), 4);
        assert_eq!(e.distance("ab", "abc"), 1);
    }

    #[test]
    fn test_huge_costs_saturate() {
        // Accepted because 2 * swap saturates at usize::MAX
        let e = engine(1, 1, 1, usize::MAX);
        assert_eq!(e.distance("yab", "xba"), 3);
        assert_eq!(e.distance("ab", "ba"), 2);

        let e = engine(1, usize::MAX / 2, 1, usize::MAX);
        assert_eq!(e.distance("", "abc"), usize::MAX);
        assert_eq!(e.distance("abc", ""), 3);
        assert_eq!(e.distance("abc", "abd"), 1);

        let e = engine(usize::MAX, usize::MAX, usize::MAX, usize::MAX);
        assert_eq!(e.distance("abc", "abc"), 0);
        assert_eq!(e.distance("ab", "ba"), usize::MAX);
    }

    #[test]
    fn test_generic_symbols() {
        let e = RestrictedDamerauLevenshtein::unit();
        assert_eq!(e.distance_seq(b"abcdef", b"abdcef"), 1);
        assert_eq!(e.distance_seq(&[1u32, 2, 3], &[3, 2, 1]), 2);
        let words_a = ["the", "quick", "brown", "fox"];
        let words_b = ["the", "brown", "quick", "fox"];
        assert_eq!(e.distance_seq(&words_a, &words_b), 1);
    }
}
