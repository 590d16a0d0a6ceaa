//! # Store Error Types
//!
//! Error types for snapshot persistence.
//!
//! ## Error Flow
//! ```text
//! std::io::Error / serde_json::Error
//!        │
//!        ▼
//! StoreError (this module) ← adds the snapshot context
//!        │
//!        ▼
//! caller decides: retry, start fresh, or surface to staff
//! ```

use thiserror::Error;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing, or replacing the snapshot file failed.
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file exists but does not deserialize as a system.
    #[error("Snapshot format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
