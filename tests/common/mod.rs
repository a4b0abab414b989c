//! Common test utilities for folderauth
//!
//! # Usage
//!
//! ```rust
//! use crate::common::fixtures;
//!
//! #[test]
//! fn my_test() {
//!     let service = fixtures::ServiceFactory::create();
//!     // ...
//! }
//! ```


pub use fixtures::{CatalogFactory, ConfigFactory, ServiceFactory};
