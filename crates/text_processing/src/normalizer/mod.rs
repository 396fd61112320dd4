//! Text normalizer
//!
//! Turns noisy social-media text into a canonical form by applying an
//! ordered list of pure stages. The punctuation and stopword sets are
//! loaded once at construction and never change afterwards.

pub mod patterns;
pub mod stages;

use bangla_cleaner_core::{
    LinguisticResources, PunctuationSet, ResourceProvider, Result, Script, StageKind, StopwordSet,
    DEFAULT_STAGES,
};

/// Replacement used by `remove_punctuations`
pub const DEFAULT_PUNCTUATION_REPLACEMENT: &str = " ";

/// Applies normalization stages using a fixed resource set
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    script: Script,
    punctuation: PunctuationSet,
    stopwords: StopwordSet,
    stages: Vec<StageKind>,
    punctuation_replacement: String,
}

impl TextNormalizer {
    /// Load resources from a provider and build a normalizer
    ///
    /// # Errors
    /// `ResourceUnavailable` when the provider fails or yields an empty
    /// stopword set or a punctuation set without the curly quotes.
    pub fn new(provider: &dyn ResourceProvider) -> Result<Self> {
        let resources = provider.load().map_err(|e| {
            tracing::error!(provider = provider.name(), error = %e, "Failed to load resources");
            e
        })?;
        let normalizer = Self::from_resources(resources)?;

        tracing::debug!(
            provider = provider.name(),
            script = normalizer.script.code(),
            punctuation = normalizer.punctuation.len(),
            stopwords = normalizer.stopwords.len(),
            "Text normalizer initialized"
        );
        Ok(normalizer)
    }

    /// Build from already-loaded resources
    pub fn from_resources(resources: LinguisticResources) -> Result<Self> {
        resources.validate()?;
        Ok(Self {
            script: resources.script,
            punctuation: resources.punctuation,
            stopwords: resources.stopwords,
            stages: DEFAULT_STAGES.to_vec(),
            punctuation_replacement: DEFAULT_PUNCTUATION_REPLACEMENT.to_string(),
        })
    }

    /// Replace the stage order used by `clean`
    pub fn with_stages(mut self, stages: Vec<StageKind>) -> Self {
        self.stages = stages;
        self
    }

    /// Replace what `remove_punctuations` substitutes for punctuation
    pub fn with_punctuation_replacement(mut self, replace_with: impl Into<String>) -> Self {
        self.punctuation_replacement = replace_with.into();
        self
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn punctuation(&self) -> &PunctuationSet {
        &self.punctuation
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn stages(&self) -> &[StageKind] {
        &self.stages
    }

    pub fn remove_digits(&self, text: &str) -> String {
        stages::remove_digits(text, self.script)
    }

    pub fn remove_english_and_special_chars(&self, text: &str) -> String {
        stages::remove_english_and_special_chars(text)
    }

    pub fn remove_stopwords(&self, text: &str) -> String {
        stages::remove_stopwords(text, &self.stopwords)
    }

    pub fn remove_emojis(&self, text: &str) -> String {
        stages::remove_emojis(text)
    }

    /// Replace punctuation with the configured replacement (a space unless
    /// overridden)
    pub fn remove_punctuations(&self, text: &str) -> String {
        self.remove_punctuations_with(text, &self.punctuation_replacement)
    }

    pub fn remove_punctuations_with(&self, text: &str, replace_with: &str) -> String {
        stages::remove_punctuations(text, &self.punctuation, replace_with)
    }

    /// Run one stage
    pub fn apply(&self, stage: StageKind, text: &str) -> String {
        match stage {
            StageKind::RemoveDigits => self.remove_digits(text),
            StageKind::RemoveEnglishAndSpecialChars => self.remove_english_and_special_chars(text),
            StageKind::RemoveStopwords => self.remove_stopwords(text),
            StageKind::RemoveEmojis => self.remove_emojis(text),
            StageKind::RemovePunctuations => self.remove_punctuations(text),
        }
    }

    /// Run every configured stage in order
    pub fn clean(&self, text: &str) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |acc, stage| self.apply(*stage, &acc))
    }
}
