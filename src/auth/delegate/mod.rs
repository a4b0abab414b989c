//! Delegated folder administration
//!
//! The per-folder administration surface a folder delegate works through.
//! Every entry point checks the acting sid first, then confines the request to
//! the roles visible for the folder.

mod action;

pub use action::DelegatedFolderAdmin;
