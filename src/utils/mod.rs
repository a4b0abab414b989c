//! Utility modules shared across folderauth

pub mod error;
