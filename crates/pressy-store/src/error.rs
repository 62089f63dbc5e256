//! # Store Error Types
//!
//! Error types for the persistence layer.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where Errors Can Appear                              │
//! │                                                                         │
//! │  KvStore::open ───► StoreError::Io   (directory cannot be created)     │
//! │                                                                         │
//! │  Everything after open is infallible by contract:                      │
//! │  ├── get  : corrupt/unreadable entries become "absent"                 │
//! │  ├── set  : write failures are logged, never raised                    │
//! │  └── remove: absent keys are a no-op                                   │
//! │                                                                         │
//! │  This lets state initialization run unconditionally at startup        │
//! │  without error handling; all fallibility is absorbed in the KV layer.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data directory could not be created or accessed.
    #[error("failed to open data directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
