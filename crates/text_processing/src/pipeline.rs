//! Unified cleaning pipeline

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use bangla_cleaner_core::{Language, Result, StageKind, DEFAULT_STAGES};

use crate::{
    batch::BatchCleaner,
    normalizer::{TextNormalizer, DEFAULT_PUNCTUATION_REPLACEMENT},
    resources::{self, ResourceConfig},
};

/// Unified cleaning pipeline
///
/// Owns a shared normalizer and records which stages changed a text.
#[derive(Debug, Clone)]
pub struct CleaningPipeline {
    normalizer: Arc<TextNormalizer>,
    config: CleanerConfig,
}

impl CleaningPipeline {
    /// Create a new pipeline with configuration
    ///
    /// Loads resources through the configured provider; a missing corpus for
    /// the configured language or a provider failure is returned as-is.
    pub fn new(config: CleanerConfig) -> Result<Self> {
        let provider = resources::create_provider(&config.resources, config.language)?;
        let normalizer = TextNormalizer::new(provider.as_ref())?
            .with_stages(config.stages.clone())
            .with_punctuation_replacement(config.punctuation_replacement.clone());

        tracing::info!(
            language = %config.language,
            provider = provider.name(),
            stages = ?config.stages,
            "Cleaning pipeline ready"
        );

        Ok(Self::with_normalizer(Arc::new(normalizer), config))
    }

    /// Create a pipeline around an existing normalizer
    ///
    /// The normalizer's own stage order is used; `config.stages` is ignored.
    pub fn with_normalizer(normalizer: Arc<TextNormalizer>, config: CleanerConfig) -> Self {
        Self { normalizer, config }
    }

    pub fn normalizer(&self) -> &Arc<TextNormalizer> {
        &self.normalizer
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Clean text without recording steps
    pub fn clean(&self, text: &str) -> String {
        self.normalizer.clean(text)
    }

    /// Process text through every stage, recording the ones that changed it
    pub fn process(&self, text: &str) -> ProcessedText {
        let mut result = ProcessedText {
            original: text.to_string(),
            processed: text.to_string(),
            steps: Vec::new(),
        };

        for stage in self.normalizer.stages() {
            let output = self.normalizer.apply(*stage, &result.processed);
            if output != result.processed {
                result.steps.push(ProcessingStep {
                    name: stage.name().to_string(),
                    input: result.processed.clone(),
                    output: output.clone(),
                });
                result.processed = output;
            }
        }

        tracing::trace!(
            steps = result.steps.len(),
            changed = result.was_changed(),
            "Processed text"
        );
        result
    }

    /// Batch cleaner over the configured text column
    pub fn batch_cleaner(&self) -> BatchCleaner {
        BatchCleaner::new(self.normalizer.clone(), self.config.text_column.clone())
    }
}

/// Configuration for the cleaning pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Target language; its script selects native digits
    #[serde(default)]
    pub language: Language,
    /// Column holding the text to clean
    #[serde(default = "default_text_column")]
    pub text_column: String,
    /// Column holding class labels, used by analysis
    #[serde(default)]
    pub label_column: Option<String>,
    /// Resource provider config
    #[serde(default)]
    pub resources: ResourceConfig,
    /// Stage order applied by `clean`
    #[serde(default = "default_stages")]
    pub stages: Vec<StageKind>,
    /// Replacement for `remove_punctuations`
    #[serde(default = "default_punctuation_replacement")]
    pub punctuation_replacement: String,
}

fn default_text_column() -> String {
    "text".to_string()
}

fn default_stages() -> Vec<StageKind> {
    DEFAULT_STAGES.to_vec()
}

fn default_punctuation_replacement() -> String {
    DEFAULT_PUNCTUATION_REPLACEMENT.to_string()
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            text_column: default_text_column(),
            label_column: None,
            resources: ResourceConfig::default(),
            stages: default_stages(),
            punctuation_replacement: default_punctuation_replacement(),
        }
    }
}

/// Result of text processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedText {
    /// Original input text
    pub original: String,
    /// Processed output text
    pub processed: String,
    /// Stages that changed the text, in order
    pub steps: Vec<ProcessingStep>,
}

impl ProcessedText {
    pub fn was_changed(&self) -> bool {
        self.original != self.processed
    }
}

/// A single processing step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStep {
    /// Stage name
    pub name: String,
    /// Input to this step
    pub input: String,
    /// Output from this step
    pub output: String,
}
