//! Resource providers
//!
//! Supplies the punctuation and stopword sets a normalizer is built from.
//! Every provider adds the two curly single quotes to its punctuation set.
//! A provider that cannot read its corpus fails with `ResourceUnavailable`;
//! no fallback set is ever substituted.

mod bengali;
mod file;
mod static_set;

pub use bengali::BengaliCorpus;
pub use file::FileResourceProvider;
pub use static_set::StaticResources;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use bangla_cleaner_core::{Error, Language, ResourceProvider, Result};

/// Resource configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResourceConfig {
    /// Where the sets come from
    #[serde(default)]
    pub source: ResourceSource,
    /// Newline-delimited punctuation file (for `files`)
    #[serde(default)]
    pub punctuation_path: Option<PathBuf>,
    /// Newline-delimited stopword file (for `files`)
    #[serde(default)]
    pub stopwords_path: Option<PathBuf>,
}

/// Resource sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResourceSource {
    /// Corpus compiled into the binary
    #[default]
    #[serde(alias = "embedded")]
    Builtin,
    /// Files on disk
    Files,
}

/// Create a resource provider based on config
///
/// The built-in corpus only covers Bengali script; any other language needs
/// file-backed resources and fails here with `ResourceUnavailable`.
pub fn create_provider(
    config: &ResourceConfig,
    language: Language,
) -> Result<Box<dyn ResourceProvider>> {
    match config.source {
        ResourceSource::Builtin => {
            if language.script() != BengaliCorpus::SCRIPT {
                return Err(Error::resource_unavailable(
                    "builtin",
                    format!("no embedded corpus for language '{}'", language.code()),
                ));
            }
            Ok(Box::new(BengaliCorpus::new()))
        },
        ResourceSource::Files => {
            let punctuation = config.punctuation_path.clone().unwrap_or_default();
            let stopwords = config.stopwords_path.clone().unwrap_or_default();
            tracing::info!(
                punctuation = %punctuation.display(),
                stopwords = %stopwords.display(),
                "Using file-backed resources"
            );
            Ok(Box::new(FileResourceProvider::new(
                language.script(),
                punctuation,
                stopwords,
            )))
        },
    }
}

/// Lines of a newline-delimited resource, skipping blanks and `#` comments
pub(crate) fn resource_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_lines() {
        let content = "# header\n\nএবং\n  ও  \n#comment\nকি";
        let lines: Vec<_> = resource_lines(content).collect();
        assert_eq!(lines, vec!["এবং", "ও", "কি"]);
    }

    #[test]
    fn test_default_config_is_builtin() {
        let config = ResourceConfig::default();
        assert_eq!(config.source, ResourceSource::Builtin);
        let provider = create_provider(&config, Language::Bengali).unwrap();
        assert_eq!(provider.name(), "bengali_corpus");
    }

    #[test]
    fn test_builtin_other_script_unavailable() {
        let config = ResourceConfig::default();
        let err = create_provider(&config, Language::Hindi)
            .err()
            .expect("hindi has no embedded corpus");
        assert!(matches!(
            &err,
            Error::ResourceUnavailable { resource, reason }
                if resource == "builtin" && reason.contains("'hi'")
        ));

        // Assamese shares the Bengali script
        assert!(create_provider(&config, Language::Assamese).is_ok());
    }

    #[test]
    fn test_files_keep_language_script() {
        let config = ResourceConfig {
            source: ResourceSource::Files,
            punctuation_path: Some(PathBuf::from("p.txt")),
            stopwords_path: Some(PathBuf::from("s.txt")),
        };
        let provider = create_provider(&config, Language::Hindi).unwrap();
        assert_eq!(provider.name(), "files");
    }

    #[test]
    fn test_files_without_paths_fail_on_load() {
        let config = ResourceConfig {
            source: ResourceSource::Files,
            ..Default::default()
        };
        let provider = create_provider(&config, Language::Bengali).unwrap();
        let err = provider.load().unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_source_serde() {
        let source: ResourceSource = serde_json::from_str("\"embedded\"").unwrap();
        assert_eq!(source, ResourceSource::Builtin);
        let source: ResourceSource = serde_json::from_str("\"files\"").unwrap();
        assert_eq!(source, ResourceSource::Files);
    }
}
