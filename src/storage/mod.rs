//! Role persistence
//!
//! The store itself never touches disk. Callers take a snapshot, release the
//! lock, then hand the snapshot to a storage backend.

pub mod files;

pub use files::{RoleFileStorage, SnapshotFormat};
