//! Error types shared across the Abyssal crates.
//!
//! The core is deliberately hard to fail: height queries clamp instead
//! of erroring and cell generation is idempotent. The variants here
//! cover the few explicit queries that can miss.

use thiserror::Error;

/// Errors from world bookkeeping operations.
#[derive(Debug, Error)]
pub enum WorldError {
    /// A cell was queried that is not currently tracked.
    #[error("cell ({x}, {z}) is not active")]
    CellNotActive {
        /// X coordinate in cell units
        x: i32,
        /// Z coordinate in cell units
        z: i32,
    },
}

/// Result type alias for world operations.
pub type WorldResult<T> = Result<T, WorldError>;
