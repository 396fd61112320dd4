//! Error types shared across the workspace

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// The linguistic corpus backing a resource provider could not be loaded.
    ///
    /// Fatal to constructing a normalizer; never retried.
    #[error("Resource unavailable: {resource}: {reason}")]
    ResourceUnavailable { resource: String, reason: String },
}

impl Error {
    /// Shorthand for a `ResourceUnavailable` error
    pub fn resource_unavailable(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias using the core error
pub type Result<T> = std::result::Result<T, Error>;
