use thiserror::Error;

/// Errors produced while configuring a distance engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two swaps of the same symbol would be cheaper than a delete plus an insert.
    #[error(
        "unsupported cost assignment: 2 * swap ({swap}) must be >= insert ({insert}) + delete ({delete})"
    )]
    InvalidCostConfiguration {
        delete: usize,
        insert: usize,
        swap: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
