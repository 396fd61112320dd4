//! Resource provider interface

use crate::{LinguisticResources, Result};

/// Supplies the immutable punctuation and stopword sets for one script
///
/// Implementations:
/// - `BengaliCorpus` - Embedded Bengali corpus
/// - `FileResourceProvider` - Newline-delimited files on disk
/// - `StaticResources` - Caller-supplied in-memory sets
///
/// # Example
///
/// ```ignore
/// let provider: Box<dyn ResourceProvider> = Box::new(BengaliCorpus::new());
/// let normalizer = TextNormalizer::new(provider.as_ref())?;
/// ```
pub trait ResourceProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Load both sets
    ///
    /// # Errors
    /// `Error::ResourceUnavailable` if the backing corpus cannot be read.
    /// No partial set is ever returned.
    fn load(&self) -> Result<LinguisticResources>;
}
