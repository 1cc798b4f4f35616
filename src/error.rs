//! Defines the engine level error type.

/// The errors that may occur while deriving figures from financial records.
///
/// Every variant is a local, recoverable condition. Upstream validation at
/// the storage boundary is the primary defense; when a bad row slips
/// through, aggregation entry points skip or zero-default it so that the
/// dashboard stays usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The text could not be parsed as a non-negative decimal amount.
    #[error("\"{0}\" is not a valid non-negative amount")]
    InvalidAmount(String),

    /// The text could not be parsed as an ISO calendar date or a `YYYY-MM`
    /// month key, which would break period filtering.
    #[error("\"{0}\" is not a valid ISO date")]
    InvalidDate(String),

    /// A transaction references a category that is absent from the
    /// category list.
    ///
    /// Rollups tolerate this by keying on the raw string. Budget
    /// utilization flags it, because spend under an unlisted category
    /// cannot be reconciled against any budget row.
    #[error("the category \"{0}\" is not in the category list")]
    MissingCategory(String),
}
