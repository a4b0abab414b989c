//! Configuration data models

pub mod folder_auth;

pub use folder_auth::*;
