//! # gourmet-store: Snapshot Persistence for the Gourmet Ordering System
//!
//! This crate persists the whole [`gourmet_core::GourmetSystem`] aggregate
//! as a single snapshot file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  process start                                              │
//! │      │                                                      │
//! │      ▼                                                      │
//! │  SnapshotStore::load_or_default() ──► GourmetSystem         │
//! │                                           │                 │
//! │        requests mutate the system in memory                 │
//! │                                           │                 │
//! │  SnapshotStore::save(&system) ◄───────────┘                 │
//! │  (atomic whole-aggregate replace)                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`snapshot`] - The snapshot store (save / load / load-or-default)
//! - [`error`] - Store error types
//! - `bin/seed` - Stock seeding binary for development

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod snapshot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use snapshot::SnapshotStore;
