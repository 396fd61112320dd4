//! Core traits for the cleaner
//!
//! Components implement these traits to enable:
//! - Pluggable linguistic resources (embedded corpus, files, in-memory sets)
//! - Cleaning any record collection that exposes a text column
//! - Testing with in-memory fixtures
//!
//! # Trait Hierarchy
//!
//! ```text
//! Resources:
//!   - ResourceProvider: Supplies punctuation and stopword sets
//!
//! Records:
//!   - TextRecord: Row with named text fields, read and rewritten by batch cleaning
//! ```

mod record;
mod resource_provider;

pub use record::{Row, TextRecord};
pub use resource_provider::ResourceProvider;
