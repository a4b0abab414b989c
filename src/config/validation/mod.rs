//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `folder_auth_validators`: Folder authorization validators
//! - `tests`: Test suite for all validators

mod folder_auth_validators;
mod trait_def;

pub use trait_def::Validate;
