pub mod damerau_levenshtein;
pub mod edit_distance;
pub mod restricted_damerau;

// Re-export edit distance engines with descriptive names
pub use damerau_levenshtein::DamerauLevenshtein;
pub use edit_distance::{batch_distance, DistanceMatrix, EditDistance};
pub use restricted_damerau::{CostModel, RestrictedDamerauLevenshtein};
