//! Error handling for folder authorization
//!
//! This module defines the error type returned by every core operation.

mod helpers;
mod types;

pub use types::{FolderAuthError, Result};
