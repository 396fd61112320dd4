//! Core traits and types for the Bangla text cleaner
//!
//! This crate provides foundational types used across all other crates:
//! - Script and language definitions for the configured target script
//! - Immutable linguistic resource sets (punctuation, stopwords)
//! - Normalization stage names and their default order
//! - Core traits for pluggable backends (resource providers, record access)
//! - Error types

pub mod error;
pub mod language;
pub mod resources;
pub mod stage;
pub mod traits;

pub use error::{Error, Result};
pub use language::{Language, Script};
pub use resources::{
    LinguisticResources, PunctuationSet, StopwordSet, LEFT_SINGLE_QUOTE, RIGHT_SINGLE_QUOTE,
};

pub use stage::{StageKind, DEFAULT_STAGES};

// Trait re-exports
pub use traits::{ResourceProvider, Row, TextRecord};
