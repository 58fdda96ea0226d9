pub mod cs;
pub mod error;

pub use cs::dynamic;
pub use cs::dynamic::{
    batch_distance, CostModel, DamerauLevenshtein, EditDistance, RestrictedDamerauLevenshtein,
};
pub use error::{Error, Result};
