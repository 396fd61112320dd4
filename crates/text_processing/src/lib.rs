//! Text Normalization Pipeline for Bangla Social-Media Text
//!
//! This crate provides text cleaning capabilities:
//! - **Resources**: Punctuation and stopword sets from the embedded corpus, files or memory
//! - **Normalization**: Pure stages stripping digits, Latin text, special characters,
//!   emoji, stopwords and punctuation
//! - **Pipeline**: Config-driven stage composition with per-stage tracing
//! - **Batch Cleaning**: Clean a record collection, dropping nulls, empties and duplicates
//! - **Analysis**: Quality, class distribution and text length summaries
//!
//! # Example
//!
//! ```ignore
//! use bangla_cleaner_text_processing::{CleanerConfig, CleaningPipeline};
//!
//! let pipeline = CleaningPipeline::new(CleanerConfig::default())?;
//!
//! let cleaned = pipeline.clean("খুব ভালো লাগছে 😀 wow!!!");
//! println!("Cleaned: {}", cleaned);
//! ```

pub mod analysis;
pub mod batch;
pub mod normalizer;
pub mod resources;

mod pipeline;

pub use bangla_cleaner_core::{Error, Result};
pub use pipeline::{CleanerConfig, CleaningPipeline, ProcessedText, ProcessingStep};

// Re-export key types
pub use analysis::{
    average_length_by_class, class_distribution, text_length_stats, ClassCount, LengthStats,
    QualityReport,
};
pub use batch::{BatchCleaner, CleanedBatch, CleaningReport};
pub use normalizer::{TextNormalizer, DEFAULT_PUNCTUATION_REPLACEMENT};
pub use resources::{
    create_provider, BengaliCorpus, FileResourceProvider, ResourceConfig, ResourceSource,
    StaticResources,
};
