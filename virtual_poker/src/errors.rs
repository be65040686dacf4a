//! Crate level error type for table operations

use thiserror::Error;

use crate::game::DealError;

/// Errors surfaced by [`crate::table::TableSession`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Dealing failed
    #[error("Deal failed: {0}")]
    Deal(#[from] DealError),
}
